//! # Client configuration DTO
//!
//! Pure data: TOML → [`ClientConfig`] mapping. Missing keys fall back to
//! [`ClientConfig::defaults`]; values are taken as they are, no validation.

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;

use crate::registration::DateBounds;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend root, e.g. `http://localhost:8080/api`. Endpoints hang off
    /// `{api_base_url}/auth` and `{api_base_url}/surveys`.
    pub api_base_url: String,

    /// Upper bound for any single backend request.
    pub request_timeout_secs: u64,

    /// Where the session token is kept between runs.
    pub session_file: PathBuf,

    /// Youngest accepted age at registration.
    pub min_age_years: u32,

    /// Oldest accepted age at registration.
    pub max_age_years: u32,
}

impl ClientConfig {
    pub const DEFAULT_API_BASE_URL: &'static str = "http://localhost:8080/api";
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
    pub const DEFAULT_SESSION_FILE: &'static str = "session.json";

    pub fn defaults() -> Self {
        Self {
            api_base_url: Self::DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
            session_file: PathBuf::from(Self::DEFAULT_SESSION_FILE),
            min_age_years: DateBounds::DEFAULT_MIN_AGE_YEARS,
            max_age_years: DateBounds::DEFAULT_MAX_AGE_YEARS,
        }
    }

    /// Create ClientConfig from a parsed TOML document.
    ///
    /// ```toml
    /// [api]
    /// base_url = "https://encuestas.example.com/api"
    /// timeout_secs = 5
    ///
    /// [session]
    /// token_file = "/home/ana/.local/share/survey-client/session.json"
    ///
    /// [registration]
    /// min_age_years = 15
    /// max_age_years = 100
    /// ```
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let defaults = Self::defaults();
        let section = |name: &str, key: &str| toml_value.get(name).and_then(|s| s.get(key));

        Ok(Self {
            api_base_url: section("api", "base_url")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or(defaults.api_base_url),
            request_timeout_secs: section("api", "timeout_secs")
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
                .unwrap_or(defaults.request_timeout_secs),
            session_file: section("session", "token_file")
                .and_then(|v| v.as_str())
                .map(PathBuf::from)
                .unwrap_or(defaults.session_file),
            min_age_years: section("registration", "min_age_years")
                .and_then(|v| v.as_integer())
                .map(|v| v.clamp(0, u32::MAX as i64) as u32)
                .unwrap_or(defaults.min_age_years),
            max_age_years: section("registration", "max_age_years")
                .and_then(|v| v.as_integer())
                .map(|v| v.clamp(0, u32::MAX as i64) as u32)
                .unwrap_or(defaults.max_age_years),
        })
    }

    /// Request timeout; `0` would fail every call, so it means the default.
    pub fn request_timeout(&self) -> Duration {
        match self.request_timeout_secs {
            0 => Duration::from_secs(Self::DEFAULT_REQUEST_TIMEOUT_SECS),
            secs => Duration::from_secs(secs),
        }
    }

    /// Birth-date bounds for a registration started on `today`.
    pub fn date_bounds(&self, today: NaiveDate) -> DateBounds {
        DateBounds::from_ages(today, self.min_age_years, self.max_age_years)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::defaults()
    }
}
