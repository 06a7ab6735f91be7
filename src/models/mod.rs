//! Data models for the Help Scout API.
//!
//! This module contains type definitions for the API's domain objects
//! (mailboxes, conversations, customers, users, attachments) and the
//! response envelopes that wrap them.

mod attachment;
mod common;
mod conversation;
mod customer;
mod mailbox;
mod user;

pub use attachment::*;
pub use common::*;
pub use conversation::*;
pub use customer::*;
pub use mailbox::*;
pub use user::*;
