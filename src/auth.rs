//! OAuth2 client-credentials authentication.
//!
//! Help Scout issues short-lived bearer tokens (roughly two hours) in
//! exchange for an application id and secret. The authenticator only
//! performs the exchange; the client owns the token and decides when to
//! refresh it.

use serde::Deserialize;

use crate::config::Config;
use crate::error::HelpScoutError;

/// Successful token endpoint response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchanges client credentials for bearer tokens.
#[derive(Clone)]
pub struct Authenticator {
    /// The underlying HTTP client (cloning is cheap).
    http: reqwest::Client,

    /// URL of the OAuth2 token endpoint.
    token_url: String,

    /// OAuth2 application id.
    app_id: String,

    /// OAuth2 application secret.
    /// SECURITY: Never log this value!
    app_secret: String,
}

impl Authenticator {
    /// Creates an authenticator sharing the client's HTTP connection pool.
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Authenticator {
            http,
            token_url: config.token_url.clone(),
            app_id: config.app_id.clone(),
            app_secret: config.app_secret.clone(),
        }
    }

    /// Requests a fresh bearer token from the token endpoint.
    ///
    /// Sends a form-encoded `client_credentials` grant. On success the
    /// server returns `{"access_token": ...}`; on failure it returns
    /// `{"error": ...}` which is surfaced as
    /// [`HelpScoutError::Authentication`].
    pub async fn request_token(&self) -> Result<String, HelpScoutError> {
        tracing::debug!(token_url = %self.token_url, "Requesting bearer token");

        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.app_id.as_str()),
            ("client_secret", self.app_secret.as_str()),
        ];

        let response = self
            .http
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(HelpScoutError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(HelpScoutError::Http)?;

        if !status.is_success() {
            let envelope: crate::models::ErrorEnvelope =
                serde_json::from_str(&body).unwrap_or_default();
            let message = envelope
                .text()
                .map(str::to_string)
                .unwrap_or_else(|| format!("token endpoint returned HTTP {}", status.as_u16()));
            return Err(HelpScoutError::authentication(
                HelpScoutError::sanitize_message(&message, &self.app_secret),
            ));
        }

        let token: TokenResponse = serde_json::from_str(&body)?;

        tracing::debug!("Obtained bearer token");
        Ok(token.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_deserialize() {
        let json = r#"{"access_token": "abc123", "token_type": "bearer", "expires_in": 7200}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "abc123");
    }

    #[tokio::test]
    async fn test_request_token_success() {
        use wiremock::matchers::{body_string_contains, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/oauth2/token"))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains("client_id=my-app"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "access_token": "T1",
                    "token_type": "bearer",
                    "expires_in": 7200
                })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = Config::new("my-app", "my-secret")
            .unwrap()
            .with_token_url(format!("{}/v2/oauth2/token", server.uri()));
        let auth = Authenticator::new(reqwest::Client::new(), &config);

        let token = auth.request_token().await.unwrap();
        assert_eq!(token, "T1");
    }

    #[tokio::test]
    async fn test_request_token_failure_carries_server_error() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"error": "invalid_client"})),
            )
            .mount(&server)
            .await;

        let config = Config::new("my-app", "my-secret")
            .unwrap()
            .with_token_url(server.uri());
        let auth = Authenticator::new(reqwest::Client::new(), &config);

        let err = auth.request_token().await.unwrap_err();
        assert!(matches!(err, HelpScoutError::Authentication { .. }));
        assert!(err.to_string().contains("invalid_client"));
    }
}
