//! # sc-core
//!
//! Core domain models and business logic for the survey client.
//!
//! This crate contains pure business logic without any infrastructure dependencies.
//! Network access, storage and the clock are reached only through [`ports`].

pub mod auth;
pub mod config;
pub mod ports;
pub mod registration;
pub mod survey;

// Re-export commonly used types at the crate root
pub use config::ClientConfig;
pub use registration::{
    DateBounds, FieldError, GlobalMessage, RegistrationField, RegistrationForm, StepLayout,
    WizardState,
};
pub use survey::{
    PageRequest, Question, QuestionOption, QuestionType, SurveyPage, SurveySubmission,
    SurveySummary,
};
