//! # Configuration loader
//!
//! Reads the TOML file into [`ClientConfig`] and layers environment overrides
//! on top. No validation happens here: values are taken as found.

use std::path::{Path, PathBuf};

use anyhow::Context;
use sc_core::ClientConfig;

/// Environment variable naming the config file when no path is passed.
pub const CONFIG_PATH_ENV: &str = "SURVEY_CLIENT_CONFIG";
/// Environment variable that overrides `[api] base_url`.
pub const API_URL_ENV: &str = "SURVEY_API_URL";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Fails if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<ClientConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    ClientConfig::from_toml(&toml_value)
}

/// Resolve the effective configuration.
///
/// Loads `.env` when present, then reads `config_path` (or the file named by
/// `SURVEY_CLIENT_CONFIG`), falling back to [`ClientConfig::defaults`] when
/// neither is given. `SURVEY_API_URL` wins over the file.
pub fn resolve_config(config_path: Option<PathBuf>) -> anyhow::Result<ClientConfig> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(err).context("Failed to load .env file");
        }
    }

    let config_path = config_path.or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));
    let config = match config_path {
        Some(path) => load_config(&path)?,
        None => ClientConfig::defaults(),
    };

    Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
}

fn apply_env_overrides(
    mut config: ClientConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ClientConfig {
    if let Some(url) = lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
        tracing::debug!(%url, "api base url overridden from environment");
        config.api_base_url = url;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn load_config_reads_all_sections() {
        let file = write_config(
            r#"
            [api]
            base_url = "https://encuestas.example.com/api"
            timeout_secs = 3

            [session]
            token_file = "/tmp/survey/session.json"

            [registration]
            min_age_years = 18
            max_age_years = 90
            "#,
        );

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.api_base_url, "https://encuestas.example.com/api");
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.session_file, PathBuf::from("/tmp/survey/session.json"));
        assert_eq!(config.min_age_years, 18);
        assert_eq!(config.max_age_years, 90);
    }

    #[test]
    fn load_config_reports_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn load_config_reports_invalid_toml() {
        let file = write_config("[api\nbase_url = ");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn env_override_replaces_base_url() {
        let config = apply_env_overrides(ClientConfig::defaults(), |key| {
            (key == API_URL_ENV).then(|| "http://10.0.0.5:9000/api".to_string())
        });
        assert_eq!(config.api_base_url, "http://10.0.0.5:9000/api");
    }

    #[test]
    fn blank_env_override_is_ignored() {
        let config = apply_env_overrides(ClientConfig::defaults(), |_| Some("  ".to_string()));
        assert_eq!(config.api_base_url, ClientConfig::DEFAULT_API_BASE_URL);
    }
}
