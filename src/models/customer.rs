//! Customer models for the Help Scout API.

use serde::{Deserialize, Serialize};

/// A customer email address entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerEmail {
    /// Unique id of the entry (absent when creating).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The email address.
    pub value: String,

    /// Address category (e.g., "home", "work", "other").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl CustomerEmail {
    /// Creates a work email entry, the API default category.
    pub fn work(value: impl Into<String>) -> Self {
        CustomerEmail {
            id: None,
            value: value.into(),
            location: Some("work".to_string()),
        }
    }
}

/// A Help Scout customer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique customer id.
    pub id: u64,

    /// First name.
    #[serde(default)]
    pub first_name: Option<String>,

    /// Last name.
    #[serde(default)]
    pub last_name: Option<String>,

    /// Primary email address (list endpoints flatten to a single value).
    #[serde(default)]
    pub email: Option<String>,

    /// All known email addresses (single fetches only).
    #[serde(default)]
    pub emails: Option<Vec<CustomerEmail>>,

    /// Organisation the customer belongs to.
    #[serde(default)]
    pub organization: Option<String>,

    /// Job title.
    #[serde(default)]
    pub job_title: Option<String>,

    /// Free-form background notes.
    #[serde(default)]
    pub background: Option<String>,

    /// When the customer was created (ISO-8601).
    #[serde(default)]
    pub created_at: Option<String>,

    /// When the customer was last modified (ISO-8601).
    #[serde(default)]
    pub modified_at: Option<String>,
}

impl Customer {
    /// Returns the customer's full name, or the email when no name is set.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.clone().unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

/// Payload for creating or updating a customer.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Email addresses; the API requires at least one on creation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<CustomerEmail>,

    /// Organisation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// Job title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    /// Background notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl NewCustomer {
    /// Creates a customer payload with a single work email address.
    pub fn with_email(email: impl Into<String>) -> Self {
        NewCustomer {
            emails: vec![CustomerEmail::work(email)],
            ..Default::default()
        }
    }

    /// Sets the first name.
    #[must_use]
    pub fn first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = Some(name.into());
        self
    }

    /// Sets the last name.
    #[must_use]
    pub fn last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = Some(name.into());
        self
    }

    /// Sets the organisation.
    #[must_use]
    pub fn organization(mut self, org: impl Into<String>) -> Self {
        self.organization = Some(org.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_deserialize() {
        let json = r#"{
            "id": 29418,
            "firstName": "Vernon",
            "lastName": "Bear",
            "email": "vbear@mywork.com",
            "organization": "Acme"
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.id, 29418);
        assert_eq!(customer.display_name(), "Vernon Bear");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let json = r#"{"id": 1, "email": "anon@example.com"}"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.display_name(), "anon@example.com");
    }

    #[test]
    fn test_new_customer_serialize() {
        let payload = NewCustomer::with_email("vbear@mywork.com")
            .first_name("Vernon")
            .last_name("Bear");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["firstName"], "Vernon");
        assert_eq!(json["emails"][0]["value"], "vbear@mywork.com");
        assert_eq!(json["emails"][0]["location"], "work");
        assert!(json.get("organization").is_none());
    }
}
