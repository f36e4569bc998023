use async_trait::async_trait;

use crate::auth::{AuthSession, Credentials};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{message}")]
    Rejected { message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

#[async_trait]
pub trait AuthenticationPort: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, AuthError>;

    /// Confirms an account with the token mailed after registration.
    async fn activate_account(&self, token: &str) -> Result<(), AuthError>;
}
