//! Conversation models for the Help Scout API.
//!
//! Conversations are the central object of the help desk: an email thread
//! between a customer and the support team, living in a mailbox folder.

use serde::{Deserialize, Serialize};

use super::MailboxRef;

/// A reference to a person (customer or user) embedded in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRef {
    /// Unique id, absent when identifying by email only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// First name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Person type (e.g., "customer", "user").
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub person_type: Option<String>,
}

impl PersonRef {
    /// Creates a customer reference identified by email address.
    pub fn by_email(email: impl Into<String>) -> Self {
        PersonRef {
            id: None,
            first_name: None,
            last_name: None,
            email: Some(email.into()),
            person_type: None,
        }
    }

    /// Creates a reference identified by id.
    pub fn by_id(id: u64) -> Self {
        PersonRef {
            id: Some(id),
            first_name: None,
            last_name: None,
            email: None,
            person_type: None,
        }
    }
}

/// A single message within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    /// Unique thread id (absent on threads being created).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Thread type (e.g., "customer", "message", "note").
    #[serde(rename = "type")]
    pub thread_type: String,

    /// Who created the thread.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<PersonRef>,

    /// Message body (may contain HTML).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Thread status after this message (e.g., "active", "closed").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// When the thread was created (ISO-8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Thread {
    /// Creates a customer-authored thread with the given body.
    pub fn customer(created_by: PersonRef, body: impl Into<String>) -> Self {
        Thread {
            id: None,
            thread_type: "customer".to_string(),
            created_by: Some(created_by),
            body: Some(body.into()),
            status: None,
            created_at: None,
        }
    }

    /// Creates a staff reply thread with the given body.
    pub fn message(created_by: PersonRef, body: impl Into<String>) -> Self {
        Thread {
            id: None,
            thread_type: "message".to_string(),
            created_by: Some(created_by),
            body: Some(body.into()),
            status: None,
            created_at: None,
        }
    }
}

/// A Help Scout conversation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Unique conversation id.
    pub id: u64,

    /// Human-facing conversation number (distinct from the id).
    #[serde(default)]
    pub number: Option<u64>,

    /// Conversation type (e.g., "email", "chat", "phone").
    #[serde(default, rename = "type")]
    pub conversation_type: Option<String>,

    /// Id of the folder the conversation currently sits in.
    #[serde(default)]
    pub folder_id: Option<u64>,

    /// Current status (e.g., "active", "pending", "closed", "spam").
    #[serde(default)]
    pub status: Option<String>,

    /// Subject line.
    #[serde(default)]
    pub subject: Option<String>,

    /// Short preview of the latest message.
    #[serde(default)]
    pub preview: Option<String>,

    /// The mailbox the conversation lives in.
    #[serde(default)]
    pub mailbox: Option<MailboxRef>,

    /// The customer the conversation is with.
    #[serde(default)]
    pub customer: Option<PersonRef>,

    /// The user the conversation is assigned to.
    #[serde(default)]
    pub owner: Option<PersonRef>,

    /// Number of threads in the conversation.
    #[serde(default)]
    pub thread_count: Option<u32>,

    /// The full message threads (only populated on single fetches).
    #[serde(default)]
    pub threads: Option<Vec<Thread>>,

    /// Tags applied to the conversation.
    #[serde(default)]
    pub tags: Option<Vec<String>>,

    /// When the conversation was created (ISO-8601).
    #[serde(default)]
    pub created_at: Option<String>,

    /// When the conversation was last modified (ISO-8601).
    #[serde(default)]
    pub modified_at: Option<String>,
}

impl Conversation {
    /// Returns the subject line or a placeholder.
    pub fn display_subject(&self) -> &str {
        self.subject.as_deref().unwrap_or("(No subject)")
    }
}

/// Payload for creating a new conversation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewConversation {
    /// Conversation type (defaults to "email" server-side when omitted).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub conversation_type: Option<String>,

    /// Subject line.
    pub subject: String,

    /// The mailbox to create the conversation in.
    pub mailbox: MailboxIdRef,

    /// The customer the conversation is with.
    pub customer: PersonRef,

    /// Initial threads; at least one is required by the API.
    pub threads: Vec<Thread>,

    /// Tags to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Mailbox reference for request payloads (id only).
#[derive(Debug, Clone, Serialize)]
pub struct MailboxIdRef {
    /// Mailbox id.
    pub id: u64,
}

impl NewConversation {
    /// Creates a conversation payload with the required fields.
    pub fn new(
        mailbox_id: u64,
        subject: impl Into<String>,
        customer: PersonRef,
        thread: Thread,
    ) -> Self {
        NewConversation {
            conversation_type: None,
            subject: subject.into(),
            mailbox: MailboxIdRef { id: mailbox_id },
            customer,
            threads: vec![thread],
            tags: None,
        }
    }

    /// Sets the conversation type.
    #[must_use]
    pub fn with_type(mut self, conversation_type: impl Into<String>) -> Self {
        self.conversation_type = Some(conversation_type.into());
        self
    }

    /// Sets tags on the new conversation.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}

/// Fields that can be changed on an existing conversation.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationUpdate {
    /// New subject line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Reassign to this user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<PersonRef>,
}

impl ConversationUpdate {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the subject.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Assigns the conversation to a user.
    #[must_use]
    pub fn with_owner(mut self, owner: PersonRef) -> Self {
        self.owner = Some(owner);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_deserialize() {
        let json = r#"{
            "id": 2391938111,
            "number": 349,
            "type": "email",
            "folderId": 11,
            "status": "active",
            "subject": "I need help!",
            "mailbox": {"id": 85, "name": "Support"},
            "customer": {"id": 29418, "firstName": "Vernon", "email": "vbear@mywork.com"},
            "threadCount": 4,
            "createdAt": "2024-08-21T14:22:07Z"
        }"#;
        let conv: Conversation = serde_json::from_str(json).unwrap();
        assert_eq!(conv.id, 2391938111);
        assert_eq!(conv.display_subject(), "I need help!");
        assert_eq!(conv.mailbox.as_ref().unwrap().id, 85);
        assert_eq!(conv.customer.as_ref().unwrap().id, Some(29418));
    }

    #[test]
    fn test_display_subject_placeholder() {
        let json = r#"{"id": 1}"#;
        let conv: Conversation = serde_json::from_str(json).unwrap();
        assert_eq!(conv.display_subject(), "(No subject)");
    }

    #[test]
    fn test_new_conversation_serialize() {
        let customer = PersonRef::by_email("vbear@mywork.com");
        let thread = Thread::customer(PersonRef::by_email("vbear@mywork.com"), "Help me out");
        let payload = NewConversation::new(85, "I need help!", customer, thread)
            .with_tags(vec!["vip".to_string()]);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["subject"], "I need help!");
        assert_eq!(json["mailbox"]["id"], 85);
        assert_eq!(json["threads"][0]["type"], "customer");
        assert_eq!(json["threads"][0]["body"], "Help me out");
        assert_eq!(json["tags"][0], "vip");
        // Unset optional fields stay out of the payload entirely.
        assert!(json.get("type").is_none());
    }

    #[test]
    fn test_conversation_update_serialize() {
        let update = ConversationUpdate::new()
            .with_status("closed")
            .with_owner(PersonRef::by_id(42));
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["status"], "closed");
        assert_eq!(json["owner"]["id"], 42);
        assert!(json.get("subject").is_none());
    }
}
