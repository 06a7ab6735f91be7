//! # helpscout
//!
//! An async Rust client for the Help Scout help desk REST API.
//!
//! The crate wraps the API's OAuth2 client-credentials flow and its JSON
//! envelope conventions behind typed methods for mailboxes, conversations,
//! customers, users, folders, attachments, and workflows.
//!
//! ## Features
//!
//! - **Token lifecycle**: bearer tokens are obtained lazily, shared across
//!   clones, and transparently refreshed once when the server rejects them
//! - **Pagination**: collection endpoints are fetched page by page up to a
//!   caller-supplied limit (0 = everything)
//! - **Retry**: rate limits (429 with `Retry-After`) and transient server
//!   errors are retried with backoff
//! - **Security**: credentials are never logged or exposed in error messages
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`config`] - Credentials and endpoint URLs, with env loading
//! - [`error`] - Error types with security-conscious message sanitization
//! - [`auth`] - OAuth2 client-credentials token exchange
//! - [`client`] - The HTTP client: envelopes, pagination, domain methods
//! - [`models`] - Data models for API requests and responses
//!
//! ## Example
//!
//! ```ignore
//! use helpscout::client::{ConversationListParams, HelpScoutClient};
//! use helpscout::config::Config;
//!
//! async fn example() -> Result<(), helpscout::error::HelpScoutError> {
//!     let config = Config::from_env()?;
//!     let client = HelpScoutClient::new(&config)?;
//!
//!     // First 10 active conversations in mailbox 85
//!     let params = ConversationListParams::new().with_status("active");
//!     let conversations = client.conversations(85, &params, 10).await;
//!     for conversation in conversations {
//!         println!("#{}: {}", conversation.id, conversation.display_subject());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error policy
//!
//! List operations degrade on failure: pagination stops and whatever was
//! fetched so far is returned, with the error logged via [`tracing`].
//! Single-item reads and all mutations propagate
//! [`HelpScoutError`](error::HelpScoutError).

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::HelpScoutClient;
pub use config::Config;
pub use error::HelpScoutError;
