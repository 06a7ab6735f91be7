//! User models for the Help Scout API.

use serde::Deserialize;

/// A Help Scout user (member of the support team).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user id.
    pub id: u64,

    /// First name.
    #[serde(default)]
    pub first_name: Option<String>,

    /// Last name.
    #[serde(default)]
    pub last_name: Option<String>,

    /// Primary email address.
    #[serde(default)]
    pub email: Option<String>,

    /// Role within the account (e.g., "owner", "admin", "user").
    #[serde(default)]
    pub role: Option<String>,

    /// Timezone identifier.
    #[serde(default)]
    pub timezone: Option<String>,

    /// Account type (e.g., "team", "user").
    #[serde(default, rename = "type")]
    pub user_type: Option<String>,

    /// When the user was created (ISO-8601).
    #[serde(default)]
    pub created_at: Option<String>,

    /// When the user was last modified (ISO-8601).
    #[serde(default)]
    pub modified_at: Option<String>,
}

impl User {
    /// Returns the user's full name, or the email when no name is set.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.clone().unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialize() {
        let json = r#"{
            "id": 1234,
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@example.com",
            "role": "admin",
            "type": "user"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1234);
        assert_eq!(user.display_name(), "Jane Doe");
        assert_eq!(user.role.as_deref(), Some("admin"));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let json = r#"{"id": 1, "email": "support@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name(), "support@example.com");
    }
}
