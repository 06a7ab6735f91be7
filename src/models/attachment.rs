//! Attachment models for the Help Scout API.
//!
//! Attachments are uploaded separately from the threads that reference
//! them: `POST /attachments` returns a hash, which is then included in a
//! thread payload. Raw file bytes come back base64-encoded from
//! `GET /attachments/{id}/data`.

use serde::{Deserialize, Serialize};

/// An attachment on a conversation thread.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Unique attachment id (absent until the attachment is linked to a thread).
    #[serde(default)]
    pub id: Option<u64>,

    /// Opaque hash identifying the uploaded file.
    #[serde(default)]
    pub hash: Option<String>,

    /// MIME type.
    #[serde(default)]
    pub mime_type: Option<String>,

    /// Original file name.
    #[serde(default)]
    pub file_name: Option<String>,

    /// File size in bytes.
    #[serde(default)]
    pub size: Option<u64>,

    /// Public URL of the stored file, when available.
    #[serde(default)]
    pub url: Option<String>,
}

/// Payload for uploading a new attachment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttachment {
    /// File name.
    pub file_name: String,

    /// MIME type.
    pub mime_type: String,

    /// Base64-encoded file contents.
    pub data: String,
}

impl NewAttachment {
    /// Creates an upload payload from already base64-encoded data.
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        NewAttachment {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }
}

/// Raw data of a stored attachment.
#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentData {
    /// Attachment id.
    pub id: u64,

    /// Base64-encoded file contents.
    #[serde(default)]
    pub data: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_deserialize() {
        let json = r#"{
            "id": 1594,
            "hash": "7c8f2b9e",
            "mimeType": "image/png",
            "fileName": "screenshot.png",
            "size": 22456
        }"#;
        let att: Attachment = serde_json::from_str(json).unwrap();
        assert_eq!(att.id, Some(1594));
        assert_eq!(att.file_name.as_deref(), Some("screenshot.png"));
    }

    #[test]
    fn test_new_attachment_serialize() {
        let payload = NewAttachment::new("note.txt", "text/plain", "aGVsbG8=");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["fileName"], "note.txt");
        assert_eq!(json["mimeType"], "text/plain");
        assert_eq!(json["data"], "aGVsbG8=");
    }

    #[test]
    fn test_attachment_data_deserialize() {
        let json = r#"{"id": 1594, "data": "aGVsbG8="}"#;
        let data: AttachmentData = serde_json::from_str(json).unwrap();
        assert_eq!(data.id, 1594);
        assert_eq!(data.data.as_deref(), Some("aGVsbG8="));
    }
}
