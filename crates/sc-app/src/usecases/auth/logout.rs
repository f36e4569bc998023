use std::sync::Arc;

use sc_core::ports::{SessionStoreError, SessionTokenPort};

/// Use case for dropping the stored session.
pub struct Logout {
    session: Arc<dyn SessionTokenPort>,
}

impl Logout {
    pub fn new(session: Arc<dyn SessionTokenPort>) -> Self {
        Self { session }
    }

    pub async fn execute(&self) -> Result<(), SessionStoreError> {
        self.session.clear().await?;
        tracing::info!("session cleared");
        Ok(())
    }
}
