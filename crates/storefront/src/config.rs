//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PITCHSIDE_API_URL` - Base URL of the shop service API
//!   (e.g., <http://localhost:8000/api/>)
//!
//! ## Optional
//! - `PITCHSIDE_API_TOKEN` - Bearer token for authenticated endpoints
//!   (order creation, admin product management)
//! - `PITCHSIDE_HTTP_TIMEOUT_SECS` - Request timeout (default: 30)

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Shop service API configuration.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct ShopApiConfig {
    /// Base URL of the shop service API. Always ends with a trailing slash
    /// so endpoint paths can be appended directly.
    pub base_url: Url,
    /// Bearer token for authenticated endpoints, if the session has one.
    pub api_token: Option<SecretString>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for ShopApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopApiConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ShopApiConfig {
    /// Create a configuration from an already-parsed base URL.
    ///
    /// The URL path is normalized to end with a trailing slash.
    #[must_use]
    pub fn new(mut base_url: Url, api_token: Option<SecretString>) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            base_url,
            api_token,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `PITCHSIDE_API_URL` is
    /// unset, or [`ConfigError::InvalidEnvVar`] if it is not a valid URL or
    /// the timeout is not an integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url = require_env("PITCHSIDE_API_URL")?;
        let base_url = Url::parse(&raw_url)
            .map_err(|e| ConfigError::InvalidEnvVar("PITCHSIDE_API_URL".into(), e.to_string()))?;

        let api_token = optional_env("PITCHSIDE_API_TOKEN").map(SecretString::from);

        let mut config = Self::new(base_url, api_token);

        if let Some(raw_timeout) = optional_env("PITCHSIDE_HTTP_TIMEOUT_SECS") {
            let secs = raw_timeout.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("PITCHSIDE_HTTP_TIMEOUT_SECS".into(), e.to_string())
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gains_trailing_slash() {
        let url = Url::parse("http://localhost:8000/api").expect("valid url");
        let config = ShopApiConfig::new(url, None);
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/api/");
    }

    #[test]
    fn test_trailing_slash_preserved() {
        let url = Url::parse("http://localhost:8000/api/").expect("valid url");
        let config = ShopApiConfig::new(url, None);
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/api/");
    }

    #[test]
    fn test_debug_redacts_token() {
        let url = Url::parse("http://localhost:8000/api/").expect("valid url");
        let config = ShopApiConfig::new(url, Some(SecretString::from("super-secret")));
        let output = format!("{config:?}");
        assert!(!output.contains("super-secret"));
        assert!(output.contains("[REDACTED]"));
    }
}
