use std::sync::Arc;

use tracing::{info, warn};

use sc_core::auth::{AuthSession, Credentials};
use sc_core::ports::{AuthError, AuthenticationPort, SessionStoreError, SessionTokenPort};

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("El usuario y la contraseña son obligatorios")]
    MissingCredentials,
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("failed to store session: {0}")]
    Session(#[from] SessionStoreError),
}

/// Use case for signing in with a username or email.
///
/// A successful login replaces any stored session token.
pub struct LoginUser {
    auth: Arc<dyn AuthenticationPort>,
    session: Arc<dyn SessionTokenPort>,
}

impl LoginUser {
    pub fn new(auth: Arc<dyn AuthenticationPort>, session: Arc<dyn SessionTokenPort>) -> Self {
        Self { auth, session }
    }

    pub async fn execute(
        &self,
        username_or_email: &str,
        password: &str,
    ) -> Result<AuthSession, LoginError> {
        let username_or_email = username_or_email.trim();
        if username_or_email.is_empty() || password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }

        let credentials = Credentials::new(username_or_email, password);
        let session = self.auth.login(&credentials).await.map_err(|err| {
            warn!(user = %credentials.username_or_email, error = %err, "login failed");
            err
        })?;

        self.session.save(&session.token).await?;
        info!(user = %credentials.username_or_email, "login succeeded");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use sc_core::auth::SessionToken;
    use std::sync::Mutex;

    mock! {
        pub Auth {}

        #[async_trait]
        impl AuthenticationPort for Auth {
            async fn login(&self, credentials: &Credentials) -> Result<AuthSession, AuthError>;
            async fn activate_account(&self, token: &str) -> Result<(), AuthError>;
        }
    }

    #[derive(Default)]
    struct MemorySession {
        token: Mutex<Option<SessionToken>>,
    }

    #[async_trait]
    impl SessionTokenPort for MemorySession {
        async fn load(&self) -> Result<Option<SessionToken>, SessionStoreError> {
            Ok(self.token.lock().unwrap().clone())
        }

        async fn save(&self, token: &SessionToken) -> Result<(), SessionStoreError> {
            *self.token.lock().unwrap() = Some(token.clone());
            Ok(())
        }

        async fn clear(&self) -> Result<(), SessionStoreError> {
            *self.token.lock().unwrap() = None;
            Ok(())
        }
    }

    #[tokio::test]
    async fn login_stores_session_token() {
        let mut auth = MockAuth::new();
        auth.expect_login()
            .withf(|c| c.username_or_email == "ana@example.com" && c.password == "secret-123")
            .times(1)
            .returning(|_| {
                Ok(AuthSession {
                    token: SessionToken::new("tok-1"),
                })
            });
        let session = Arc::new(MemorySession::default());
        let use_case = LoginUser::new(Arc::new(auth), session.clone());

        let result = use_case.execute("  ana@example.com ", "secret-123").await.unwrap();

        assert_eq!(result.token.as_str(), "tok-1");
        assert_eq!(
            session.load().await.unwrap(),
            Some(SessionToken::new("tok-1"))
        );
    }

    #[tokio::test]
    async fn login_rejects_blank_input_without_calling_backend() {
        let use_case = LoginUser::new(
            Arc::new(MockAuth::new()),
            Arc::new(MemorySession::default()),
        );

        let err = use_case.execute("   ", "secret").await.unwrap_err();
        assert!(matches!(err, LoginError::MissingCredentials));
    }

    #[tokio::test]
    async fn login_failure_keeps_previous_session() {
        let mut auth = MockAuth::new();
        auth.expect_login().returning(|_| {
            Err(AuthError::Rejected {
                message: "Credenciales inválidas".into(),
            })
        });
        let session = Arc::new(MemorySession::default());
        session.save(&SessionToken::new("old")).await.unwrap();
        let use_case = LoginUser::new(Arc::new(auth), session.clone());

        let err = use_case.execute("ana", "wrong-pass").await.unwrap_err();

        assert_eq!(err.to_string(), "Credenciales inválidas");
        assert_eq!(session.load().await.unwrap(), Some(SessionToken::new("old")));
    }
}
