//! Registration use cases.
//!
//! This module exposes the registration wizard orchestrator and the use case
//! that opens a new sign-up session.

mod context;
pub mod orchestrator;
mod start;

pub use orchestrator::{RegistrationWizard, RegistrationWizardError};
pub use start::StartRegistration;
