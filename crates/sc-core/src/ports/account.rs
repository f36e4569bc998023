use async_trait::async_trait;

use crate::registration::RegistrationForm;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AvailabilityError {
    /// Transport failure; says nothing about whether the value is taken.
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Uniqueness checks for account identifiers.
#[async_trait]
pub trait AccountAvailabilityPort: Send + Sync {
    /// `Ok(true)` when an account already uses `email`.
    async fn email_in_use(&self, email: &str) -> Result<bool, AvailabilityError>;

    /// `Ok(true)` when an account already uses `username`.
    async fn username_in_use(&self, username: &str) -> Result<bool, AvailabilityError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// The backend refused the account; `message` is meant for the user.
    #[error("{message}")]
    Rejected { message: String },
    #[error("network error: {0}")]
    Network(String),
}

#[async_trait]
pub trait RegistrationPort: Send + Sync {
    async fn register(&self, form: &RegistrationForm) -> Result<(), RegistrationError>;
}
