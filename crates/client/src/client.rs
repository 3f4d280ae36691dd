//! HTTP client handle and request plumbing.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::TokenCache;
use crate::config::ApiConfig;
use crate::error::ApiError;

/// Platform API client.
///
/// Cheap to clone: all state (HTTP connection pool, credential cache) lives
/// behind an `Arc`, so clones share one token.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

pub(crate) struct ApiClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) tokens: TokenCache,
}

impl ApiClient {
    /// Create a client from configuration, with a fresh credential cache.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the HTTP client fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::with_token_cache(config, TokenCache::new(config))
    }

    /// Create a client with an externally supplied credential cache.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the HTTP client fails to build.
    pub fn with_token_cache(config: &ApiConfig, tokens: TokenCache) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url: config.base_url.clone(),
                tokens,
            }),
        })
    }

    /// API base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Force the next request to fetch a fresh access token.
    pub async fn invalidate_token(&self) {
        self.inner.tokens.invalidate().await;
    }

    pub(crate) fn url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.inner.base_url)
    }

    /// GET a JSON resource, authenticating with the cached bearer token.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let token = self.inner.tokens.access_token(&self.inner.http).await?;
        debug!(%url, "GET");
        let response = self
            .inner
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(url, response).await
    }

    /// POST a JSON body and decode the JSON response.
    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let token = self.inner.tokens.access_token(&self.inner.http).await?;
        debug!(%url, "POST");
        let response = self
            .inner
            .http
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        Self::decode(url, response).await
    }

    async fn decode<T: DeserializeOwned>(
        url: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response.text().await.unwrap_or_default();
        match status.as_u16() {
            401 | 403 => Err(ApiError::Unauthorized(message)),
            404 => Err(ApiError::NotFound(url.to_string())),
            code => Err(ApiError::Api {
                status: code,
                message,
            }),
        }
    }
}
