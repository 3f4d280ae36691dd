//! OAuth client-credentials token cache.
//!
//! The platform issues bearer tokens from `POST /oauth/token`. Tokens are
//! cached process-wide inside the owning [`ApiClient`](crate::ApiClient)
//! with an explicit expiry instant and refreshed lazily: a request that
//! finds the cache empty or expired fetches a fresh token first. There is
//! no ambient global token state.

use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Tokens are treated as expired this long before the server-reported
/// expiry, so a token never dies mid-request.
const EXPIRY_MARGIN_SECS: i64 = 30;

/// Fallback lifetime when the token response omits `expires_in`.
const DEFAULT_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_valid(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

/// Cached bearer-token provider for the platform API.
///
/// Owned by the client value rather than stored in module-level state, so
/// independent clients (and tests) carry independent credential caches.
pub struct TokenCache {
    token_url: String,
    client_id: String,
    client_secret: SecretString,
    audience: String,
    token: RwLock<Option<CachedToken>>,
}

impl TokenCache {
    /// Create an empty cache for the configured credentials.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            token_url: format!("{}/oauth/token", config.base_url),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            audience: config.audience.clone(),
            token: RwLock::new(None),
        }
    }

    /// Get a valid access token, fetching a fresh one when the cached token
    /// is absent or expired.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Token` when the token endpoint rejects the
    /// credentials or returns an unusable body, or `ApiError::Http` when
    /// the request itself fails.
    pub async fn access_token(&self, http: &reqwest::Client) -> Result<String, ApiError> {
        let now = Utc::now();
        if let Some(cached) = self.token.read().await.as_ref()
            && cached.is_valid(now)
        {
            return Ok(cached.access_token.clone());
        }

        let mut slot = self.token.write().await;
        // Another caller may have refreshed while we waited for the lock.
        if let Some(cached) = slot.as_ref()
            && cached.is_valid(now)
        {
            return Ok(cached.access_token.clone());
        }

        let fresh = self.fetch(http).await?;
        let token = fresh.access_token.clone();
        *slot = Some(fresh);
        Ok(token)
    }

    /// Drop the cached token, forcing a refresh on the next request.
    pub async fn invalidate(&self) {
        *self.token.write().await = None;
    }

    async fn fetch(&self, http: &reqwest::Client) -> Result<CachedToken, ApiError> {
        debug!(url = %self.token_url, "fetching access token");

        let payload = serde_json::json!({
            "client_id": self.client_id,
            "client_secret": self.client_secret.expose_secret(),
            "audience": self.audience,
            "grant_type": "token",
        });

        let response = http.post(&self.token_url).json(&payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Token(format!(
                "token endpoint returned {status}: {body}"
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Token(format!("unreadable token response: {e}")))?;

        let lifetime = body
            .expires_in
            .unwrap_or(DEFAULT_LIFETIME_SECS)
            .max(EXPIRY_MARGIN_SECS);
        Ok(CachedToken {
            access_token: body.access_token,
            expires_at: Utc::now() + Duration::seconds(lifetime - EXPIRY_MARGIN_SECS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_token_validity_window() {
        let now = Utc::now();
        let token = CachedToken {
            access_token: "abc".to_string(),
            expires_at: now + Duration::seconds(10),
        };
        assert!(token.is_valid(now));
        assert!(!token.is_valid(now + Duration::seconds(11)));
    }

    #[test]
    fn test_token_response_without_expiry() {
        let body: TokenResponse =
            serde_json::from_str(r#"{"access_token": "abc"}"#).expect("should deserialize");
        assert_eq!(body.access_token, "abc");
        assert_eq!(body.expires_in, None);
    }
}
