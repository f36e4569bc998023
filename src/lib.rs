//! Composition root for the survey client.
//!
//! Resolves configuration, installs the tracing subscriber and wires the
//! HTTP and file adapters into the use cases of `sc-app`.

pub mod bootstrap;

pub use bootstrap::{init_tracing_subscriber, resolve_config, wire_services, AppServices};
pub use sc_app::usecases;
pub use sc_core::{
    ClientConfig, GlobalMessage, Question, QuestionOption, QuestionType, RegistrationField,
    SurveySubmission, WizardState,
};
