//! Common envelope types shared across Help Scout API endpoints.
//!
//! Every API response wraps its payload in one of two envelopes: a
//! single-item envelope (`{ "item": ... }`) or a paged collection envelope
//! (`{ "page", "pages", "count", "items" }`). Errors come back as a flat
//! object carrying `message` or `error`.

use serde::Deserialize;

/// Single-item response envelope.
///
/// An absent `item` carries "not found" semantics for the request.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemEnvelope<T> {
    /// The wrapped domain object, when present.
    pub item: Option<T>,
}

/// One page of a collection response.
///
/// `items` preserves the server-returned order, which pagination relies on.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    /// 1-based index of this page.
    pub page: u32,

    /// Total number of pages available.
    pub pages: u32,

    /// Total number of items across all pages.
    pub count: u64,

    /// The items on this page, in server order.
    ///
    /// The explicit default path keeps the derived impl free of a
    /// `T: Default` bound.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Returns true if a further page exists after this one.
    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }
}

/// Error response body returned alongside 4xx/5xx statuses.
///
/// The API is inconsistent about the field name: validation failures use
/// `message`, token endpoint failures use `error`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEnvelope {
    /// Human-readable error description.
    #[serde(default)]
    pub message: Option<String>,

    /// Alternate error field used by some endpoints.
    #[serde(default)]
    pub error: Option<String>,

    /// Structured per-field validation errors, when provided.
    #[serde(default, rename = "validationErrors")]
    pub validation_errors: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Returns the best available error text, falling back through the
    /// known field names.
    pub fn text(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

/// Result of a create or update call.
///
/// The API either returns the created object inline (when asked to reload),
/// only a `Location` header identifying the new resource, or - typically on
/// updates without reload - a bare success status with neither.
#[derive(Debug, Clone)]
pub enum Created<T> {
    /// The server returned the full object.
    Item(T),

    /// The server returned only the `Location` header value.
    Location(String),

    /// The server confirmed the mutation without echoing anything back.
    Accepted,
}

impl<T> Created<T> {
    /// Returns the contained item, if the server returned one.
    pub fn into_item(self) -> Option<T> {
        match self {
            Created::Item(item) => Some(item),
            Created::Location(_) | Created::Accepted => None,
        }
    }

    /// Returns the `Location` header value, if that is what came back.
    pub fn location(&self) -> Option<&str> {
        match self {
            Created::Location(loc) => Some(loc),
            Created::Item(_) | Created::Accepted => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Envelope item type that deliberately does not implement `Default`,
    /// matching the domain models, which never do.
    #[derive(Debug, serde::Deserialize)]
    struct Ticket {
        id: u64,
    }

    #[test]
    fn test_envelopes_deserialize_without_default_bound() {
        let env: ItemEnvelope<Ticket> = serde_json::from_str(r#"{"item": {"id": 9}}"#).unwrap();
        assert_eq!(env.item.unwrap().id, 9);

        let missing: ItemEnvelope<Ticket> = serde_json::from_str("{}").unwrap();
        assert!(missing.item.is_none());

        let page: Page<Ticket> =
            serde_json::from_str(r#"{"page": 1, "pages": 1, "count": 0}"#).unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_item_envelope_present() {
        let env: ItemEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"item": {"id": 42}}"#).unwrap();
        assert_eq!(env.item.unwrap()["id"], 42);
    }

    #[test]
    fn test_item_envelope_absent() {
        let env: ItemEnvelope<serde_json::Value> = serde_json::from_str("{}").unwrap();
        assert!(env.item.is_none());
    }

    #[test]
    fn test_page_deserialize() {
        let json = r#"{"page": 1, "pages": 3, "count": 120, "items": [{"id": 1}, {"id": 2}]}"#;
        let page: Page<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.pages, 3);
        assert_eq!(page.count, 120);
        assert_eq!(page.items.len(), 2);
        assert!(page.has_next());
    }

    #[test]
    fn test_page_last_has_no_next() {
        let json = r#"{"page": 3, "pages": 3, "count": 120, "items": []}"#;
        let page: Page<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(!page.has_next());
    }

    #[test]
    fn test_error_envelope_prefers_message() {
        let env: ErrorEnvelope =
            serde_json::from_str(r#"{"message": "Invalid email", "error": "bad_request"}"#)
                .unwrap();
        assert_eq!(env.text(), Some("Invalid email"));
    }

    #[test]
    fn test_error_envelope_falls_back_to_error() {
        let env: ErrorEnvelope = serde_json::from_str(r#"{"error": "invalid_client"}"#).unwrap();
        assert_eq!(env.text(), Some("invalid_client"));
    }

    #[test]
    fn test_created_accepted_carries_nothing() {
        let created: Created<()> = Created::Accepted;
        assert!(created.location().is_none());
        assert!(created.into_item().is_none());
    }

    #[test]
    fn test_created_location() {
        let created: Created<()> = Created::Location("https://api.example.com/v1/conversations/7".into());
        assert_eq!(
            created.location(),
            Some("https://api.example.com/v1/conversations/7")
        );
        assert!(created.into_item().is_none());
    }
}
