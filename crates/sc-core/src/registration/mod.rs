//! Registration domain module.
//!
//! This module defines the multi-step sign-up wizard: the form model, the
//! per-field rules, the step layout and the pure state machine that decides
//! step transitions.

mod error;
mod field;
mod form;
pub mod layout;
pub mod state_machine;
mod step_errors;
pub mod validator;

pub use error::{FieldError, GlobalMessage};
pub use field::{RegistrationField, UnknownFieldError};
pub use form::RegistrationForm;
pub use layout::{RemoteCheck, StepLayout, StepLayoutError};
pub use state_machine::{
    RegistrationAction, RegistrationEvent, RegistrationRules, RegistrationStateMachine,
    WizardPhase, WizardState,
};
pub use step_errors::StepErrorStore;
pub use validator::{DateBounds, FieldValidator};
