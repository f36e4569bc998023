//! Survey client application layer
//!
//! This crate contains the use cases and the orchestration that drives the
//! registration wizard against the backend ports.

pub mod usecases;

pub use usecases::registration::{RegistrationWizard, RegistrationWizardError, StartRegistration};
