use std::time::Duration;

use reqwest::{Response, StatusCode, Url};
use serde::Deserialize;

use sc_core::ClientConfig;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("invalid api base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("failed to build http client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Shared HTTP plumbing for the backend adapters.
///
/// Holds one pooled `reqwest::Client` and the API root every endpoint is
/// resolved against.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiClientError> {
        let invalid = |reason: String| ApiClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("url cannot carry a path".to_string()));
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiClientError> {
        Self::new(&config.api_base_url, config.request_timeout())
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Appends `segments` to the API root. Each segment is percent-encoded,
    /// so user input such as an email can be passed as is.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Always Ok: `new` rejects cannot-be-a-base urls.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Best-effort user-facing message for a failed response: the body's
/// `message` field, else the raw body, else the status reason.
pub(crate) async fn error_message(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    message_from_body(status, &body)
}

/// The body's JSON `message` field, else `fallback`.
pub(crate) async fn message_or(response: Response, fallback: &str) -> String {
    let body = response.text().await.unwrap_or_default();
    json_message(&body).unwrap_or_else(|| fallback.to_string())
}

fn json_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

fn message_from_body(status: StatusCode, body: &str) -> String {
    if let Some(message) = json_message(body) {
        return message;
    }
    let body = body.trim();
    if !body.is_empty() && !body.starts_with('{') {
        return body.to_string();
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}
