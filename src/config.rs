//! Client configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local use.

use crate::services::api::DEFAULT_BASE_URL;
use std::env;
use std::path::PathBuf;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// MyDish API base URL, without trailing slash
    pub api_base_url: String,
    /// File holding the stored session credential
    pub credentials_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = parse_base_url(
            &env::var("MYDISH_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        )?;

        let credentials_path = env::var("MYDISH_CREDENTIALS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_credentials_path());

        Ok(Self {
            api_base_url,
            credentials_path,
        })
    }

    /// Config for tests: a local API and a throwaway credential file.
    pub fn test_default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8080".to_string(),
            credentials_path: env::temp_dir().join("mydish-test-credentials.json"),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = reqwest::Url::parse(trimmed)
        .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", trimmed, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl(format!(
            "{}: scheme must be http or https",
            trimmed
        )));
    }
    Ok(trimmed.to_string())
}

fn default_credentials_path() -> PathBuf {
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".mydish")
        .join("credentials.json")
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid MYDISH_API_URL: {0}")]
    InvalidUrl(String),
}
