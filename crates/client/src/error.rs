//! Error taxonomy for the platform API client.

use thiserror::Error;

/// Errors that can occur when interacting with the platform API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Authentication failed (invalid or expired credentials).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failed to parse a response body.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Token acquisition failed.
    #[error("Token error: {0}")]
    Token(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Api {
            status: 422,
            message: "validation failed".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 422 - validation failed");
    }

    #[test]
    fn test_not_found_display() {
        let err = ApiError::NotFound("locations/abc".to_string());
        assert_eq!(err.to_string(), "Not found: locations/abc");
    }

    #[test]
    fn test_token_error_display() {
        let err = ApiError::Token("no access_token in response".to_string());
        assert_eq!(err.to_string(), "Token error: no access_token in response");
    }
}
