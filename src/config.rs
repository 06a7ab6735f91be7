//! Configuration for the Help Scout client.
//!
//! This module handles client credentials and endpoint URLs, either supplied
//! directly or loaded from environment variables, with validation to ensure
//! all required values are present.

use crate::error::HelpScoutError;
use std::env;

/// Default base URL for the Help Scout REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.helpscout.net/v1";

/// Default OAuth2 token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://api.helpscout.net/v2/oauth2/token";

/// Configuration for connecting to Help Scout.
///
/// Credentials are stored but never logged or exposed in error messages.
#[derive(Clone)]
pub struct Config {
    /// OAuth2 application id (client id).
    pub app_id: String,

    /// OAuth2 application secret (client secret).
    /// This value must never be logged or included in error messages.
    pub app_secret: String,

    /// Base URL for the REST API.
    pub base_url: String,

    /// URL of the OAuth2 token endpoint.
    pub token_url: String,
}

impl Config {
    /// Creates a configuration from explicit credentials, using the default
    /// API and token endpoints.
    ///
    /// # Errors
    ///
    /// Returns `HelpScoutError::Config` if either credential is empty.
    pub fn new(
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> Result<Self, HelpScoutError> {
        let app_id = app_id.into();
        let app_secret = app_secret.into();

        if app_id.trim().is_empty() {
            return Err(HelpScoutError::invalid_config("app_id must not be empty"));
        }
        if app_secret.trim().is_empty() {
            return Err(HelpScoutError::invalid_config(
                "app_secret must not be empty",
            ));
        }

        Ok(Config {
            app_id,
            app_secret,
            base_url: DEFAULT_BASE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        })
    }

    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `HELPSCOUT_APP_ID`: The OAuth2 application id
    /// - `HELPSCOUT_APP_SECRET`: The OAuth2 application secret
    ///
    /// # Optional Environment Variables
    ///
    /// - `HELPSCOUT_BASE_URL`: Overrides the default API base URL
    /// - `HELPSCOUT_TOKEN_URL`: Overrides the default token endpoint
    ///
    /// # Errors
    ///
    /// Returns `HelpScoutError::Config` if any required variable is missing
    /// or if values fail validation.
    ///
    /// # Example
    ///
    /// ```ignore
    /// dotenvy::dotenv().ok();
    /// let config = Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, HelpScoutError> {
        let app_id = Self::get_required_env("HELPSCOUT_APP_ID")?;
        let app_secret = Self::get_required_env("HELPSCOUT_APP_SECRET")?;

        let mut config = Config::new(app_id, app_secret)?;

        if let Ok(base_url) = env::var("HELPSCOUT_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(token_url) = env::var("HELPSCOUT_TOKEN_URL") {
            config.token_url = token_url;
        }

        config.base_url = Self::validate_url(config.base_url, "HELPSCOUT_BASE_URL")?;
        config.token_url = Self::validate_url(config.token_url, "HELPSCOUT_TOKEN_URL")?;

        Ok(config)
    }

    /// Overrides the API base URL (useful for tests and mirrors).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the OAuth2 token endpoint.
    #[must_use]
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, HelpScoutError> {
        env::var(name)
            .map_err(|_| HelpScoutError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(HelpScoutError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    /// Validates and normalizes a URL value.
    fn validate_url(url: String, name: &str) -> Result<String, HelpScoutError> {
        let url = url.trim().trim_end_matches('/').to_string();

        let parsed = url::Url::parse(&url).map_err(|e| {
            HelpScoutError::invalid_config(format!("{} is not a valid URL: {}", name, e))
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(HelpScoutError::invalid_config(format!(
                "{} must start with http:// or https://",
                name
            )));
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: Tests that modify environment variables should not run in parallel.
    // Use `cargo test -- --test-threads=1` for full integration tests.

    #[test]
    fn test_new_with_valid_credentials() {
        let config = Config::new("app-id", "app-secret").unwrap();
        assert_eq!(config.app_id, "app-id");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
    }

    #[test]
    fn test_new_rejects_empty_app_id() {
        assert!(Config::new("", "secret").is_err());
        assert!(Config::new("   ", "secret").is_err());
    }

    #[test]
    fn test_new_rejects_empty_app_secret() {
        assert!(Config::new("id", "").is_err());
    }

    #[test]
    fn test_validate_url_removes_trailing_slash() {
        let result = Config::validate_url("https://example.com/".to_string(), "TEST").unwrap();
        assert_eq!(result, "https://example.com");
    }

    #[test]
    fn test_validate_url_requires_scheme() {
        let result = Config::validate_url("example.com".to_string(), "TEST");
        assert!(result.is_err());
    }

    #[test]
    fn test_with_base_url_override() {
        let config = Config::new("id", "secret")
            .unwrap()
            .with_base_url("http://localhost:8080/v1");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
    }
}
