//! Mailbox and folder models for the Help Scout API.

use serde::Deserialize;

/// A Help Scout mailbox.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mailbox {
    /// Unique mailbox id.
    pub id: u64,

    /// Mailbox display name.
    #[serde(default)]
    pub name: Option<String>,

    /// URL slug for the mailbox.
    #[serde(default)]
    pub slug: Option<String>,

    /// Email address the mailbox receives at.
    #[serde(default)]
    pub email: Option<String>,

    /// When the mailbox was created (ISO-8601).
    #[serde(default)]
    pub created_at: Option<String>,

    /// When the mailbox was last modified (ISO-8601).
    #[serde(default)]
    pub modified_at: Option<String>,

    /// Folders within the mailbox (only populated on single-mailbox fetches).
    #[serde(default)]
    pub folders: Option<Vec<Folder>>,
}

/// A lightweight mailbox reference embedded in other objects.
#[derive(Debug, Clone, Deserialize)]
pub struct MailboxRef {
    /// Unique mailbox id.
    pub id: u64,

    /// Mailbox display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A folder within a mailbox.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder id.
    pub id: u64,

    /// Folder display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Folder type (e.g., "open", "closed", "mine", "drafts").
    #[serde(default, rename = "type")]
    pub folder_type: Option<String>,

    /// Id of the user the folder belongs to, for personal folders.
    #[serde(default)]
    pub user_id: Option<u64>,

    /// Number of conversations in the folder.
    #[serde(default)]
    pub total_count: Option<u64>,

    /// Number of active conversations in the folder.
    #[serde(default)]
    pub active_count: Option<u64>,

    /// When the folder was last modified (ISO-8601).
    #[serde(default)]
    pub modified_at: Option<String>,
}
