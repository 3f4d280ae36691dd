//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `DELIVERECT_CLIENT_ID` - OAuth client ID for the platform API
//! - `DELIVERECT_CLIENT_SECRET` - OAuth client secret (HIGH PRIVILEGE)
//!
//! ## Optional
//! - `DELIVERECT_BASE_URL` - API base URL (default: `https://api.deliverect.io`)
//! - `DELIVERECT_AUDIENCE` - OAuth audience (default: `https://api.deliverect.com`)

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://api.deliverect.io";
const DEFAULT_AUDIENCE: &str = "https://api.deliverect.com";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Platform API configuration.
///
/// Implements `Debug` manually to redact the client secret.
#[derive(Clone)]
pub struct ApiConfig {
    /// API base URL, without a trailing slash.
    pub base_url: String,
    /// OAuth client ID.
    pub client_id: String,
    /// OAuth client secret (HIGH PRIVILEGE - full account access).
    pub client_secret: SecretString,
    /// OAuth audience.
    pub audience: String,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("audience", &self.audience)
            .finish()
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` when a required variable is
    /// absent, or `ConfigError::InvalidEnvVar` when the base URL does not
    /// parse as an HTTP(S) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let client_id = require_env("DELIVERECT_CLIENT_ID")?;
        let client_secret = SecretString::from(require_env("DELIVERECT_CLIENT_SECRET")?);
        let base_url = optional_env("DELIVERECT_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let audience =
            optional_env("DELIVERECT_AUDIENCE").unwrap_or_else(|| DEFAULT_AUDIENCE.to_string());

        Self::new(base_url, client_id, client_secret, audience)
    }

    /// Build a configuration from explicit values, validating the base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` when the base URL is not a
    /// valid HTTP(S) URL.
    pub fn new(
        base_url: String,
        client_id: String,
        client_secret: SecretString,
        audience: String,
    ) -> Result<Self, ConfigError> {
        let parsed = Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("DELIVERECT_BASE_URL".to_string(), e.to_string())
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvVar(
                "DELIVERECT_BASE_URL".to_string(),
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id,
            client_secret,
            audience,
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> Result<ApiConfig, ConfigError> {
        ApiConfig::new(
            base_url.to_string(),
            "client".to_string(),
            SecretString::from("hunter2".to_string()),
            DEFAULT_AUDIENCE.to_string(),
        )
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = config("https://api.example.com/").expect("config should build");
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(matches!(
            config("not a url"),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));
        assert!(matches!(
            config("ftp://api.example.com"),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = config(DEFAULT_BASE_URL).expect("config should build");
        let rendered = format!("{config:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("hunter2"));
    }
}
