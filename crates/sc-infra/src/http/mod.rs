//! REST adapters for the survey backend.

mod auth_api;
mod client;
mod survey_api;

pub use auth_api::HttpAuthApi;
pub use client::{ApiClient, ApiClientError};
pub use survey_api::HttpSurveyApi;
