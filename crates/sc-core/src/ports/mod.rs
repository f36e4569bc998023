//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the backend, storage
//! and clock adapters. Implementations live in `sc-infra`.

mod account;
mod authentication;
mod clock;
mod session;
mod survey;

pub use account::{
    AccountAvailabilityPort, AvailabilityError, RegistrationError, RegistrationPort,
};
pub use authentication::{AuthError, AuthenticationPort};
pub use clock::ClockPort;
pub use session::{SessionStoreError, SessionTokenPort};
pub use survey::{SurveyCommandError, SurveyCommandPort, SurveyQueryError, SurveyQueryPort};
