use std::sync::Arc;

use tracing::info;

use sc_core::ports::{AuthError, AuthenticationPort};

#[derive(Debug, thiserror::Error)]
pub enum ActivationError {
    #[error("El token de activación es obligatorio")]
    MissingToken,
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Use case for confirming a freshly registered account.
pub struct ActivateAccount {
    auth: Arc<dyn AuthenticationPort>,
}

impl ActivateAccount {
    pub fn new(auth: Arc<dyn AuthenticationPort>) -> Self {
        Self { auth }
    }

    pub async fn execute(&self, token: &str) -> Result<(), ActivationError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ActivationError::MissingToken);
        }
        self.auth.activate_account(token).await?;
        info!("account activated");
        Ok(())
    }
}
