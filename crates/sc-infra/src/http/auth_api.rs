//! `{api}/auth` endpoints: availability lookups, sign-up, login and account
//! activation.

use async_trait::async_trait;
use reqwest::multipart::Form;
use tracing::{debug, warn};

use sc_core::auth::{AuthSession, Credentials};
use sc_core::ports::{
    AccountAvailabilityPort, AuthError, AuthenticationPort, AvailabilityError, RegistrationError,
    RegistrationPort,
};
use sc_core::registration::RegistrationForm;

use super::client::{error_message, ApiClient};

const REGISTRATION_NOT_ACCEPTED: &str = "El registro no fue aceptado";

pub struct HttpAuthApi {
    client: ApiClient,
}

impl HttpAuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn exists(&self, kind: &str, value: &str) -> Result<bool, AvailabilityError> {
        let url = self.client.endpoint(&["auth", kind, value]);
        let response = self
            .client
            .http()
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AvailabilityError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = error_message(response).await;
            return Err(AvailabilityError::UnexpectedResponse(format!(
                "{status}: {message}"
            )));
        }

        response
            .json::<bool>()
            .await
            .map_err(|e| AvailabilityError::UnexpectedResponse(e.to_string()))
    }
}

/// Multipart body expected by `POST /auth/register`. The birth date goes out
/// as `YYYY-MM-DD`, or empty when unset.
fn registration_form(form: &RegistrationForm) -> Form {
    let date_of_birth = form
        .date_of_birth
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    Form::new()
        .text("username", form.username.clone())
        .text("firstName", form.first_name.clone())
        .text("lastName", form.last_name.clone())
        .text("dateOfBirth", date_of_birth)
        .text("phone", form.phone.clone())
        .text("email", form.email.clone())
        .text("password", form.password.clone())
}

#[async_trait]
impl AccountAvailabilityPort for HttpAuthApi {
    async fn email_in_use(&self, email: &str) -> Result<bool, AvailabilityError> {
        self.exists("email", email).await
    }

    async fn username_in_use(&self, username: &str) -> Result<bool, AvailabilityError> {
        self.exists("username", username).await
    }
}

#[async_trait]
impl RegistrationPort for HttpAuthApi {
    async fn register(&self, form: &RegistrationForm) -> Result<(), RegistrationError> {
        let url = self.client.endpoint(&["auth", "register"]);
        let response = self
            .client
            .http()
            .post(url)
            .multipart(registration_form(form))
            .send()
            .await
            .map_err(|e| RegistrationError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            let message = error_message(response).await;
            warn!(%status, %message, "registration endpoint failed");
            return Err(RegistrationError::Network(format!("{status}: {message}")));
        }
        if !status.is_success() {
            return Err(RegistrationError::Rejected {
                message: error_message(response).await,
            });
        }

        // The backend answers `true`; an explicit `false` is a refusal.
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<bool>(body.trim()) {
            Ok(false) => Err(RegistrationError::Rejected {
                message: REGISTRATION_NOT_ACCEPTED.to_string(),
            }),
            _ => {
                debug!(username = %form.username, "registration accepted by backend");
                Ok(())
            }
        }
    }
}

#[async_trait]
impl AuthenticationPort for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, AuthError> {
        let url = self.client.endpoint(&["auth", "authenticate"]);
        let response = self
            .client
            .http()
            .post(url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::Rejected {
                message: error_message(response).await,
            });
        }

        response
            .json::<AuthSession>()
            .await
            .map_err(|e| AuthError::UnexpectedResponse(e.to_string()))
    }

    async fn activate_account(&self, token: &str) -> Result<(), AuthError> {
        let url = self.client.endpoint(&["auth", "activate-account"]);
        let response = self
            .client
            .http()
            .get(url)
            .query(&[("token", token)])
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::Rejected {
                message: error_message(response).await,
            });
        }
        Ok(())
    }
}
