//! HTTP client for the Help Scout API.
//!
//! This module provides the `HelpScoutClient` struct for making
//! bearer-authenticated requests against the Help Scout REST API.
//!
//! # Token lifecycle
//!
//! The client lazily obtains a bearer token on the first request and holds
//! it for all subsequent calls. When the server answers 401 the token is
//! refreshed and the call retried exactly once; a second 401 surfaces as an
//! authentication error rather than looping. Concurrent callers that
//! observe an expired token coalesce onto a single in-flight refresh.
//!
//! # Retry Logic
//!
//! Transient failures are retried independently of the token lifecycle:
//! - HTTP 429 (rate limit): `Retry-After` or exponential backoff from 100ms
//! - HTTP 502/503/504: Single retry after 500ms
//! - Timeouts: Single retry
//!
//! Client errors (4xx except 429) are not retried.
//!
//! # Error policy
//!
//! List operations degrade: an error mid-pagination logs a warning and
//! yields the items accumulated so far. Single-item reads and all mutations
//! propagate their errors.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use tokio::sync::RwLock;

use crate::auth::Authenticator;
use crate::config::Config;
use crate::error::HelpScoutError;
use crate::models::{
    Attachment, AttachmentData, Conversation, ConversationUpdate, Created, Customer,
    ErrorEnvelope, Folder, ItemEnvelope, Mailbox, NewAttachment, NewConversation, NewCustomer,
    Page, User,
};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum number of attempts for transient failures.
const MAX_RETRY_ATTEMPTS: u32 = 3;

/// Initial delay for exponential backoff (milliseconds).
const INITIAL_BACKOFF_MS: u64 = 100;

/// Delay before retrying after a 502/503/504 (milliseconds).
const SERVER_ERROR_DELAY_MS: u64 = 500;

/// HTTP client for the Help Scout API.
///
/// Handles authentication, envelope unwrapping, pagination, and response
/// classification for all API operations. Cloning is cheap; clones share
/// the HTTP connection pool and the bearer token.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = HelpScoutClient::new(&config)?;
///
/// let mailboxes = client.mailboxes(0).await;
/// ```
#[derive(Clone)]
pub struct HelpScoutClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL for the API (e.g., `https://api.helpscout.net/v1`).
    base_url: String,

    /// Token endpoint wrapper.
    auth: Authenticator,

    /// Application secret, held only for sanitizing error messages.
    /// SECURITY: Never log this value!
    app_secret: String,

    /// Current bearer token, shared across clones. `None` until the first
    /// authenticated request.
    token: Arc<RwLock<Option<String>>>,
}

impl HelpScoutClient {
    /// Creates a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `HelpScoutError::HttpClient` if the HTTP client fails to
    /// initialize.
    pub fn new(config: &Config) -> Result<Self, HelpScoutError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(HelpScoutError::HttpClient)?;

        Ok(Self {
            http: http.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth: Authenticator::new(http, config),
            app_secret: config.app_secret.clone(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    // ========================================================================
    // Token lifecycle
    // ========================================================================

    /// Returns the current bearer token, obtaining one if none is held yet.
    async fn bearer_token(&self) -> Result<String, HelpScoutError> {
        if let Some(token) = self.token.read().await.as_ref() {
            return Ok(token.clone());
        }
        self.refresh_token(None).await
    }

    /// Replaces the stored token with a freshly issued one.
    ///
    /// `stale` is the token the caller observed failing. If another caller
    /// already swapped in a different token while we waited for the write
    /// lock, that token is returned instead of issuing a second exchange.
    async fn refresh_token(&self, stale: Option<&str>) -> Result<String, HelpScoutError> {
        let mut guard = self.token.write().await;

        if let Some(current) = guard.as_deref() {
            if stale != Some(current) {
                return Ok(current.to_string());
            }
        }

        let fresh = self.auth.request_token().await?;
        *guard = Some(fresh.clone());
        Ok(fresh)
    }

    /// Runs an authenticated operation, refreshing the token and retrying
    /// once if the server rejects it.
    ///
    /// A second rejection after the refresh is terminal: it means the
    /// credentials themselves are bad, and retrying further would loop.
    async fn with_auth<T, F, Fut>(&self, operation: &str, f: F) -> Result<T, HelpScoutError>
    where
        F: Fn(String) -> Fut,
        Fut: Future<Output = Result<T, HelpScoutError>>,
    {
        let token = self.bearer_token().await?;

        match f(token.clone()).await {
            Err(HelpScoutError::TokenExpired) => {
                tracing::debug!(operation = operation, "Bearer token rejected, refreshing");
                let fresh = self.refresh_token(Some(&token)).await?;
                match f(fresh).await {
                    Err(HelpScoutError::TokenExpired) => Err(HelpScoutError::authentication(
                        "token rejected again after refresh - check app credentials",
                    )),
                    other => other,
                }
            }
            other => other,
        }
    }

    // ========================================================================
    // Transient retry
    // ========================================================================

    /// Executes an operation with retry logic for transient failures.
    ///
    /// Retries on:
    /// - HTTP 429 (rate limit) with `Retry-After` or exponential backoff
    /// - HTTP 502/503/504 with fixed delay
    /// - Timeouts with fixed delay
    ///
    /// Does not retry on client errors (4xx except 429).
    async fn with_retry<T, F, Fut>(&self, operation: &str, f: F) -> Result<T, HelpScoutError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, HelpScoutError>>,
    {
        let mut delay = Duration::from_millis(INITIAL_BACKOFF_MS);
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            match f().await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_retryable() && attempts < MAX_RETRY_ATTEMPTS => {
                    let actual_delay = if e.is_rate_limit() {
                        e.retry_after().unwrap_or(delay)
                    } else if matches!(e, HelpScoutError::ServiceUnavailable { .. }) {
                        Duration::from_millis(SERVER_ERROR_DELAY_MS)
                    } else {
                        delay
                    };

                    tracing::debug!(
                        operation = operation,
                        attempt = attempts,
                        max_attempts = MAX_RETRY_ATTEMPTS,
                        delay_ms = actual_delay.as_millis() as u64,
                        error = %HelpScoutError::sanitize_message(&e.to_string(), &self.app_secret),
                        "Retrying after transient error"
                    );

                    tokio::time::sleep(actual_delay).await;

                    if e.is_rate_limit() {
                        delay *= 2;
                    }
                }
                Err(e) => {
                    if attempts > 1 {
                        tracing::debug!(
                            operation = operation,
                            attempts = attempts,
                            "All retry attempts exhausted"
                        );
                    }
                    return Err(e);
                }
            }
        }
    }

    // ========================================================================
    // Envelope handling
    // ========================================================================

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Converts a send-level failure into the right error variant.
    fn transport_error(&self, e: reqwest::Error, method: &Method, path: &str) -> HelpScoutError {
        if e.is_timeout() {
            return HelpScoutError::timeout(
                Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                format!("{} {}", method, path),
            );
        }
        HelpScoutError::Http(e)
    }

    /// Classifies a non-success status into an error.
    ///
    /// 401 becomes the internal `TokenExpired` signal; 429 and 502/503/504
    /// become retryable variants; everything else parses the error envelope
    /// for the server-supplied message.
    async fn handle_http_error(
        &self,
        status: StatusCode,
        response: reqwest::Response,
    ) -> HelpScoutError {
        match status {
            StatusCode::UNAUTHORIZED => HelpScoutError::TokenExpired,
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs);
                tracing::warn!("Rate limited by Help Scout");
                HelpScoutError::RateLimited { retry_after }
            }
            StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => {
                tracing::warn!(status = %status, "Help Scout temporarily unavailable");
                HelpScoutError::ServiceUnavailable { status }
            }
            _ => {
                let body = response.text().await.unwrap_or_default();
                let envelope: ErrorEnvelope = serde_json::from_str(&body).unwrap_or_default();
                let message = envelope
                    .text()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
                HelpScoutError::Api {
                    status: status.as_u16(),
                    message: HelpScoutError::sanitize_message(&message, &self.app_secret),
                    validation_errors: envelope.validation_errors,
                }
            }
        }
    }

    /// Parses a successful response body as the given envelope type.
    async fn parse_body<E>(&self, response: reqwest::Response) -> Result<E, HelpScoutError>
    where
        E: serde::de::DeserializeOwned,
    {
        let body = response.text().await.map_err(HelpScoutError::Http)?;
        tracing::trace!(body = %body, "Help Scout API response");
        serde_json::from_str(&body).map_err(HelpScoutError::Serialization)
    }

    async fn get_raw(
        &self,
        token: &str,
        path: &str,
        query: &[(String, String)],
    ) -> Result<reqwest::Response, HelpScoutError> {
        tracing::debug!(path = %path, "GET Help Scout API");

        let mut req = self.http.get(self.endpoint(path)).bearer_auth(token);
        if !query.is_empty() {
            req = req.query(query);
        }

        let response = req
            .send()
            .await
            .map_err(|e| self.transport_error(e, &Method::GET, path))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.handle_http_error(status, response).await);
        }
        Ok(response)
    }

    async fn get_item_raw<T>(
        &self,
        token: String,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Option<T>, HelpScoutError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.get_raw(&token, path, query).await?;
        let envelope: ItemEnvelope<T> = self.parse_body(response).await?;
        Ok(envelope.item)
    }

    async fn get_page_raw<T>(
        &self,
        token: String,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Page<T>, HelpScoutError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.get_raw(&token, path, query).await?;
        self.parse_body(response).await
    }

    async fn mutate_raw<T>(
        &self,
        token: String,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: &serde_json::Value,
    ) -> Result<Created<T>, HelpScoutError>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!(method = %method, path = %path, "Mutating Help Scout API");

        let mut req = self
            .http
            .request(method.clone(), self.endpoint(path))
            .bearer_auth(&token)
            .json(body);
        if !query.is_empty() {
            req = req.query(query);
        }

        let response = req
            .send()
            .await
            .map_err(|e| self.transport_error(e, &method, path))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.handle_http_error(status, response).await);
        }

        // Location header identifies the created resource when the server
        // does not echo the object back.
        let location = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body_text = response.text().await.unwrap_or_default();
        if !body_text.is_empty() {
            if let Ok(envelope) = serde_json::from_str::<ItemEnvelope<T>>(&body_text) {
                if let Some(item) = envelope.item {
                    return Ok(Created::Item(item));
                }
            }
        }

        // Updates without reload commonly answer with a bare 2xx carrying
        // neither an item nor a Location header.
        Ok(location.map(Created::Location).unwrap_or(Created::Accepted))
    }

    async fn post_action_raw(&self, token: String, path: &str) -> Result<(), HelpScoutError> {
        tracing::debug!(path = %path, "POST Help Scout API action");

        let response = self
            .http
            .post(self.endpoint(path))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| self.transport_error(e, &Method::POST, path))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.handle_http_error(status, response).await);
        }
        Ok(())
    }

    // ========================================================================
    // Low-level operations (authenticated + retried)
    //
    // These are public as an escape hatch for endpoints without a typed
    // wrapper; the typed domain methods below are built on them.
    // ========================================================================

    /// Fetches a single-item envelope from `path`.
    ///
    /// Returns `None` when the envelope carries no `item` (not-found
    /// semantics).
    pub async fn get_item<T>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Option<T>, HelpScoutError>
    where
        T: serde::de::DeserializeOwned,
    {
        let operation = format!("GET {}", path);
        self.with_retry(&operation, || {
            self.with_auth(&operation, |token| self.get_item_raw(token, path, query))
        })
        .await
    }

    /// Fetches one page of a collection envelope from `path`.
    pub async fn get_page<T>(
        &self,
        path: &str,
        query: &[(String, String)],
        page: u32,
    ) -> Result<Page<T>, HelpScoutError>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut query: Vec<(String, String)> = query.to_vec();
        query.push(("page".to_string(), page.to_string()));

        let operation = format!("GET {} page {}", path, page);
        self.with_retry(&operation, || {
            self.with_auth(&operation, |token| self.get_page_raw(token, path, &query))
        })
        .await
    }

    /// Fetches only the total `count` of a collection endpoint.
    pub async fn get_count(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<u64, HelpScoutError> {
        let page: Page<serde_json::Value> = self.get_page(path, query, 1).await?;
        Ok(page.count)
    }

    /// Creates a resource with a JSON body via POST.
    pub async fn post_item<T>(
        &self,
        path: &str,
        query: &[(String, String)],
        body: &serde_json::Value,
    ) -> Result<Created<T>, HelpScoutError>
    where
        T: serde::de::DeserializeOwned,
    {
        let operation = format!("POST {}", path);
        self.with_retry(&operation, || {
            self.with_auth(&operation, |token| {
                self.mutate_raw(token, Method::POST, path, query, body)
            })
        })
        .await
    }

    /// Updates a resource with a JSON body via PUT.
    pub async fn put_item<T>(
        &self,
        path: &str,
        query: &[(String, String)],
        body: &serde_json::Value,
    ) -> Result<Created<T>, HelpScoutError>
    where
        T: serde::de::DeserializeOwned,
    {
        let operation = format!("PUT {}", path);
        self.with_retry(&operation, || {
            self.with_auth(&operation, |token| {
                self.mutate_raw(token, Method::PUT, path, query, body)
            })
        })
        .await
    }

    /// Fires a bodyless POST; any 2xx counts as success.
    pub async fn post_action(&self, path: &str) -> Result<(), HelpScoutError> {
        let operation = format!("POST {}", path);
        self.with_retry(&operation, || {
            self.with_auth(&operation, |token| self.post_action_raw(token, path))
        })
        .await
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// Fetches every page of a collection endpoint, up to `limit` items.
    ///
    /// Starts at page 1 and appends each page's items until a page comes
    /// back empty, the server reports no further pages, or the limit is
    /// reached. A limit of 0 means unbounded.
    ///
    /// An error mid-loop aborts pagination: the items accumulated so far
    /// are returned and the error is logged, never surfaced. Callers that
    /// need strict errors should use [`get_page`](Self::get_page) directly.
    pub async fn get_all<T>(
        &self,
        path: &str,
        query: &[(String, String)],
        limit: usize,
    ) -> Vec<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut items: Vec<T> = Vec::new();
        let mut page_number = 1u32;

        loop {
            match self.get_page::<T>(path, query, page_number).await {
                Ok(page) => {
                    if page.items.is_empty() {
                        break;
                    }
                    let has_next = page.has_next();
                    items.extend(page.items);

                    if limit > 0 && items.len() >= limit {
                        items.truncate(limit);
                        break;
                    }
                    if !has_next {
                        break;
                    }
                    page_number += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path,
                        page = page_number,
                        accumulated = items.len(),
                        error = %HelpScoutError::sanitize_message(&e.to_string(), &self.app_secret),
                        "Pagination aborted, returning partial results"
                    );
                    break;
                }
            }
        }

        items
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Lists users across the account, up to `limit` (0 = all).
    pub async fn users(&self, limit: usize) -> Vec<User> {
        self.get_all("/users", &[], limit).await
    }

    /// Gets a single user by id.
    pub async fn user(&self, id: u64) -> Result<Option<User>, HelpScoutError> {
        self.get_item(&format!("/users/{}", id), &[]).await
    }

    /// Lists the users with access to a mailbox.
    pub async fn users_in_mailbox(&self, mailbox_id: u64, limit: usize) -> Vec<User> {
        self.get_all(&format!("/mailboxes/{}/users", mailbox_id), &[], limit)
            .await
    }

    // ========================================================================
    // Mailboxes
    // ========================================================================

    /// Lists mailboxes, up to `limit` (0 = all).
    pub async fn mailboxes(&self, limit: usize) -> Vec<Mailbox> {
        self.get_all("/mailboxes", &[], limit).await
    }

    /// Gets a single mailbox by id.
    pub async fn mailbox(&self, id: u64) -> Result<Option<Mailbox>, HelpScoutError> {
        self.get_item(&format!("/mailboxes/{}", id), &[]).await
    }

    /// Lists the folders of a mailbox.
    pub async fn folders(&self, mailbox_id: u64, limit: usize) -> Vec<Folder> {
        self.get_all(&format!("/mailboxes/{}/folders", mailbox_id), &[], limit)
            .await
    }

    // ========================================================================
    // Conversations
    // ========================================================================

    /// Gets a single conversation by id, threads included.
    pub async fn conversation(&self, id: u64) -> Result<Option<Conversation>, HelpScoutError> {
        self.get_item(&format!("/conversations/{}", id), &[]).await
    }

    /// Lists conversations in a mailbox, up to `limit` (0 = all).
    pub async fn conversations(
        &self,
        mailbox_id: u64,
        params: &ConversationListParams,
        limit: usize,
    ) -> Vec<Conversation> {
        self.get_all(
            &format!("/mailboxes/{}/conversations", mailbox_id),
            &params.to_query(),
            limit,
        )
        .await
    }

    /// Lists conversations in a specific folder of a mailbox.
    pub async fn conversations_in_folder(
        &self,
        mailbox_id: u64,
        folder_id: u64,
        params: &ConversationListParams,
        limit: usize,
    ) -> Vec<Conversation> {
        self.get_all(
            &format!(
                "/mailboxes/{}/folders/{}/conversations",
                mailbox_id, folder_id
            ),
            &params.to_query(),
            limit,
        )
        .await
    }

    /// Lists a customer's conversations in a mailbox.
    pub async fn conversations_for_customer(
        &self,
        mailbox_id: u64,
        customer_id: u64,
        params: &ConversationListParams,
        limit: usize,
    ) -> Vec<Conversation> {
        self.get_all(
            &format!(
                "/mailboxes/{}/customers/{}/conversations",
                mailbox_id, customer_id
            ),
            &params.to_query(),
            limit,
        )
        .await
    }

    /// Returns the number of conversations in a mailbox matching `params`.
    pub async fn conversation_count(
        &self,
        mailbox_id: u64,
        params: &ConversationListParams,
    ) -> Result<u64, HelpScoutError> {
        self.get_count(
            &format!("/mailboxes/{}/conversations", mailbox_id),
            &params.to_query(),
        )
        .await
    }

    /// Creates a conversation.
    ///
    /// With `reload` the server echoes the created conversation back;
    /// otherwise only the `Location` header identifies it.
    pub async fn create_conversation(
        &self,
        conversation: &NewConversation,
        reload: bool,
    ) -> Result<Created<Conversation>, HelpScoutError> {
        let body = serde_json::to_value(conversation)?;
        self.post_item("/conversations", &reload_query(reload), &body)
            .await
    }

    /// Updates an existing conversation.
    pub async fn update_conversation(
        &self,
        id: u64,
        update: &ConversationUpdate,
        reload: bool,
    ) -> Result<Created<Conversation>, HelpScoutError> {
        let body = serde_json::to_value(update)?;
        self.put_item(
            &format!("/conversations/{}", id),
            &reload_query(reload),
            &body,
        )
        .await
    }

    // ========================================================================
    // Customers
    // ========================================================================

    /// Lists customers, up to `limit` (0 = all).
    pub async fn customers(&self, params: &CustomerListParams, limit: usize) -> Vec<Customer> {
        self.get_all("/customers", &params.to_query(), limit).await
    }

    /// Gets a single customer by id.
    pub async fn customer(&self, id: u64) -> Result<Option<Customer>, HelpScoutError> {
        self.get_item(&format!("/customers/{}", id), &[]).await
    }

    /// Creates a customer.
    pub async fn create_customer(
        &self,
        customer: &NewCustomer,
        reload: bool,
    ) -> Result<Created<Customer>, HelpScoutError> {
        let body = serde_json::to_value(customer)?;
        self.post_item("/customers", &reload_query(reload), &body)
            .await
    }

    /// Updates an existing customer.
    pub async fn update_customer(
        &self,
        id: u64,
        customer: &NewCustomer,
        reload: bool,
    ) -> Result<Created<Customer>, HelpScoutError> {
        let body = serde_json::to_value(customer)?;
        self.put_item(&format!("/customers/{}", id), &reload_query(reload), &body)
            .await
    }

    // ========================================================================
    // Attachments
    // ========================================================================

    /// Uploads an attachment, returning its hash for use in thread payloads.
    pub async fn create_attachment(
        &self,
        attachment: &NewAttachment,
    ) -> Result<Created<Attachment>, HelpScoutError> {
        let body = serde_json::to_value(attachment)?;
        self.post_item("/attachments", &[], &body).await
    }

    /// Fetches the base64-encoded data of a stored attachment.
    pub async fn attachment_data(
        &self,
        id: u64,
    ) -> Result<Option<AttachmentData>, HelpScoutError> {
        self.get_item(&format!("/attachments/{}/data", id), &[])
            .await
    }

    // ========================================================================
    // Workflows
    // ========================================================================

    /// Runs a manual workflow against a conversation.
    pub async fn run_workflow(
        &self,
        workflow_id: u64,
        conversation_id: u64,
    ) -> Result<(), HelpScoutError> {
        self.post_action(&format!(
            "/workflows/{}/conversations/{}",
            workflow_id, conversation_id
        ))
        .await
    }
}

fn reload_query(reload: bool) -> Vec<(String, String)> {
    if reload {
        vec![("reload".to_string(), "true".to_string())]
    } else {
        Vec::new()
    }
}

/// Filter parameters for conversation list operations.
///
/// Use the builder methods to construct filter criteria.
#[derive(Debug, Clone, Default)]
pub struct ConversationListParams {
    /// Filter by status (e.g., "active", "pending", "closed").
    status: Option<String>,

    /// Filter by tag.
    tag: Option<String>,

    /// Only conversations modified after this UTC timestamp (ISO-8601).
    modified_since: Option<String>,
}

impl ConversationListParams {
    /// Creates empty parameters (all conversations).
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by conversation status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Filters by tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Filters to conversations modified after the given ISO-8601 timestamp.
    #[must_use]
    pub fn with_modified_since(mut self, timestamp: impl Into<String>) -> Self {
        self.modified_since = Some(timestamp.into());
        self
    }

    /// Converts the parameters to query string pairs.
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(status) = &self.status {
            query.push(("status".to_string(), status.clone()));
        }
        if let Some(tag) = &self.tag {
            query.push(("tag".to_string(), tag.clone()));
        }
        if let Some(modified_since) = &self.modified_since {
            query.push(("modifiedSince".to_string(), modified_since.clone()));
        }
        query
    }
}

/// Filter parameters for customer list operations.
#[derive(Debug, Clone, Default)]
pub struct CustomerListParams {
    /// Filter by first name.
    first_name: Option<String>,

    /// Filter by last name.
    last_name: Option<String>,

    /// Filter by email address.
    email: Option<String>,

    /// Only customers modified after this UTC timestamp (ISO-8601).
    modified_since: Option<String>,
}

impl CustomerListParams {
    /// Creates empty parameters (all customers).
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by first name.
    #[must_use]
    pub fn with_first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = Some(name.into());
        self
    }

    /// Filters by last name.
    #[must_use]
    pub fn with_last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = Some(name.into());
        self
    }

    /// Filters by email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Filters to customers modified after the given ISO-8601 timestamp.
    #[must_use]
    pub fn with_modified_since(mut self, timestamp: impl Into<String>) -> Self {
        self.modified_since = Some(timestamp.into());
        self
    }

    /// Converts the parameters to query string pairs.
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(first_name) = &self.first_name {
            query.push(("firstName".to_string(), first_name.clone()));
        }
        if let Some(last_name) = &self.last_name {
            query.push(("lastName".to_string(), last_name.clone()));
        }
        if let Some(email) = &self.email {
            query.push(("email".to_string(), email.clone()));
        }
        if let Some(modified_since) = &self.modified_since {
            query.push(("modifiedSince".to_string(), modified_since.clone()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_params_empty() {
        let params = ConversationListParams::new();
        assert!(params.to_query().is_empty());
    }

    #[test]
    fn test_conversation_params_full() {
        let params = ConversationListParams::new()
            .with_status("active")
            .with_tag("vip")
            .with_modified_since("2024-08-01T00:00:00Z");
        let query = params.to_query();
        assert_eq!(query.len(), 3);
        assert!(query.contains(&("status".to_string(), "active".to_string())));
        assert!(query.contains(&("tag".to_string(), "vip".to_string())));
        assert!(query.contains(&(
            "modifiedSince".to_string(),
            "2024-08-01T00:00:00Z".to_string()
        )));
    }

    #[test]
    fn test_customer_params_email() {
        let params = CustomerListParams::new().with_email("vbear@mywork.com");
        let query = params.to_query();
        assert_eq!(query, vec![("email".to_string(), "vbear@mywork.com".to_string())]);
    }

    #[test]
    fn test_reload_query() {
        assert!(reload_query(false).is_empty());
        assert_eq!(
            reload_query(true),
            vec![("reload".to_string(), "true".to_string())]
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = crate::config::Config::new("id", "secret")
            .unwrap()
            .with_base_url("https://api.example.com/v1/");
        let client = HelpScoutClient::new(&config).unwrap();
        assert_eq!(client.endpoint("/users"), "https://api.example.com/v1/users");
    }
}
