//! Session token port
//!
//! Keeps the bearer token between runs. Implementations are provided by the
//! infrastructure layer (e.g., file-based storage).

use async_trait::async_trait;

use crate::auth::SessionToken;

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("session storage is corrupt: {0}")]
    Corrupt(String),
}

#[async_trait]
pub trait SessionTokenPort: Send + Sync {
    async fn load(&self) -> Result<Option<SessionToken>, SessionStoreError>;

    async fn save(&self, token: &SessionToken) -> Result<(), SessionStoreError>;

    async fn clear(&self) -> Result<(), SessionStoreError>;

    async fn is_logged_in(&self) -> Result<bool, SessionStoreError> {
        Ok(self.load().await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Session {}

        #[async_trait]
        impl SessionTokenPort for Session {
            async fn load(&self) -> Result<Option<SessionToken>, SessionStoreError>;
            async fn save(&self, token: &SessionToken) -> Result<(), SessionStoreError>;
            async fn clear(&self) -> Result<(), SessionStoreError>;
        }
    }

    #[tokio::test]
    async fn is_logged_in_follows_stored_token() {
        let mut session = MockSession::new();
        session
            .expect_load()
            .times(1)
            .returning(|| Ok(Some(SessionToken::new("jwt"))));
        assert!(session.is_logged_in().await.unwrap());

        let mut session = MockSession::new();
        session.expect_load().returning(|| Ok(None));
        assert!(!session.is_logged_in().await.unwrap());
    }

    #[tokio::test]
    async fn is_logged_in_propagates_storage_errors() {
        let mut session = MockSession::new();
        session
            .expect_load()
            .returning(|| Err(SessionStoreError::Corrupt("truncated".into())));

        assert!(matches!(
            session.is_logged_in().await,
            Err(SessionStoreError::Corrupt(_))
        ));
    }
}
