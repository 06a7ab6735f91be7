//! Error types for the Help Scout client.
//!
//! This module defines `HelpScoutError`, the unified error type used
//! throughout the crate for consistent error handling and propagation.
//!
//! # Security
//!
//! The application secret must never appear in logs or error messages.
//! Use `sanitize_message()` when constructing error messages from
//! responses that could echo credentials back.

use std::time::Duration;
use thiserror::Error;

/// Unified error type for all Help Scout client operations.
///
/// Each variant provides specific context about the failure, enabling
/// meaningful error messages without leaking the application secret.
#[derive(Error, Debug)]
pub enum HelpScoutError {
    /// Configuration error - missing or invalid credentials/URLs.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// Request timed out.
    #[error("request timed out after {duration:?} - the server may be slow or unreachable")]
    Timeout {
        /// How long we waited before timing out.
        duration: Duration,
        /// The operation that timed out.
        operation: String,
    },

    /// The bearer token was rejected (HTTP 401).
    ///
    /// Internal signal: the client catches this, refreshes the token and
    /// retries once. Callers only ever see it converted into
    /// [`HelpScoutError::Authentication`] when the retry fails too.
    #[error("bearer token expired or rejected")]
    TokenExpired,

    /// Credential exchange with the token endpoint failed, or a refreshed
    /// token was rejected again.
    #[error("authentication failed: {message}")]
    Authentication {
        /// The server-reported error string.
        message: String,
    },

    /// The API returned a non-success status with an error envelope.
    #[error("API error ({status}): {message}")]
    Api {
        /// The HTTP status code returned.
        status: u16,
        /// Error text from the response envelope, or the raw status line.
        message: String,
        /// Structured validation errors, when the server provides them.
        validation_errors: Option<serde_json::Value>,
    },

    /// Rate limited by the server (HTTP 429).
    #[error("rate limited by server - please wait before retrying")]
    RateLimited {
        /// Suggested retry delay from the `Retry-After` header, if present.
        retry_after: Option<Duration>,
    },

    /// Server temporarily unavailable (HTTP 502/503/504).
    #[error("service temporarily unavailable ({status}) - will retry automatically")]
    ServiceUnavailable {
        /// The specific status code.
        status: reqwest::StatusCode,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HelpScoutError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        HelpScoutError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        HelpScoutError::Config(message.into())
    }

    /// Creates an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        HelpScoutError::Authentication {
            message: message.into(),
        }
    }

    /// Creates an API error without validation details.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        HelpScoutError::Api {
            status,
            message: message.into(),
            validation_errors: None,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(duration: Duration, operation: impl Into<String>) -> Self {
        HelpScoutError::Timeout {
            duration,
            operation: operation.into(),
        }
    }

    /// Returns true if this error is transient and the operation should be retried.
    ///
    /// Retryable errors include:
    /// - Rate limiting (HTTP 429)
    /// - Service unavailable (HTTP 502, 503, 504)
    /// - Timeouts (may succeed on retry)
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            HelpScoutError::RateLimited { .. } => true,
            HelpScoutError::ServiceUnavailable { .. } => true,
            HelpScoutError::Timeout { .. } => true,
            HelpScoutError::Http(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Returns true if this is a rate limit error, indicating we should back off.
    #[must_use]
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, HelpScoutError::RateLimited { .. })
    }

    /// Returns the suggested delay before retry, if any.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            HelpScoutError::RateLimited { retry_after } => *retry_after,
            HelpScoutError::ServiceUnavailable { .. } => Some(Duration::from_millis(500)),
            HelpScoutError::Timeout { .. } => Some(Duration::from_millis(100)),
            _ => None,
        }
    }

    /// Sanitizes an error message to remove any occurrence of the app secret.
    ///
    /// Credentials must never appear in logs, error messages, or responses
    /// surfaced to users.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to sanitize
    /// * `secret` - The application secret to strip from the message
    ///
    /// # Returns
    ///
    /// The message with any occurrence of the secret replaced with `[REDACTED]`
    #[must_use]
    pub fn sanitize_message(message: &str, secret: &str) -> String {
        if secret.is_empty() {
            return message.to_string();
        }
        message.replace(secret, "[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_error() {
        let err = HelpScoutError::missing_env("HELPSCOUT_APP_ID");
        assert!(err.to_string().contains("HELPSCOUT_APP_ID"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_authentication_error() {
        let err = HelpScoutError::authentication("invalid_client");
        assert_eq!(err.to_string(), "authentication failed: invalid_client");
    }

    #[test]
    fn test_api_error_display() {
        let err = HelpScoutError::api(400, "Invalid email");
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("Invalid email"));
    }

    #[test]
    fn test_timeout_error() {
        let err = HelpScoutError::timeout(Duration::from_secs(30), "GET /conversations");
        let msg = err.to_string();
        assert!(msg.contains("timed out"));
        assert!(msg.contains("30s"));
    }

    #[test]
    fn test_is_retryable_rate_limited() {
        let err = HelpScoutError::RateLimited { retry_after: None };
        assert!(err.is_retryable());
        assert!(err.is_rate_limit());
    }

    #[test]
    fn test_is_retryable_service_unavailable() {
        let err = HelpScoutError::ServiceUnavailable {
            status: reqwest::StatusCode::BAD_GATEWAY,
        };
        assert!(err.is_retryable());
        assert!(!err.is_rate_limit());
    }

    #[test]
    fn test_token_expired_not_retryable() {
        // TokenExpired is handled by the refresh wrapper, not the
        // transient-retry loop.
        assert!(!HelpScoutError::TokenExpired.is_retryable());
    }

    #[test]
    fn test_api_error_not_retryable() {
        let err = HelpScoutError::api(404, "not found");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_retry_after_rate_limited() {
        let err = HelpScoutError::RateLimited {
            retry_after: Some(Duration::from_secs(5)),
        };
        assert_eq!(err.retry_after(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_retry_after_service_unavailable() {
        let err = HelpScoutError::ServiceUnavailable {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        };
        assert_eq!(err.retry_after(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_sanitize_message_removes_secret() {
        let secret = "super_secret_key_12345";
        let message = format!("Error exchanging credentials {} with server", secret);
        let sanitized = HelpScoutError::sanitize_message(&message, secret);
        assert!(!sanitized.contains(secret));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_secret() {
        let message = "Some error message";
        let sanitized = HelpScoutError::sanitize_message(message, "");
        assert_eq!(sanitized, message);
    }
}
