//! Content-type labels written to the `type` field of a message record.

use serde::{Serialize, Serializer};
use std::fmt;

/// Content kind of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Image,
    Video,
    Audio,
    Document,
    Sticker,
    Location,
    Contact,
    Reaction,
    Poll,
    /// Plain text, also the fallback when no other kind matches
    Text,
    /// No payload to inspect
    Unknown,
}

impl ContentType {
    /// Label as written to the log.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Image => "image",
            ContentType::Video => "video",
            ContentType::Audio => "audio",
            ContentType::Document => "document",
            ContentType::Sticker => "sticker",
            ContentType::Location => "location",
            ContentType::Contact => "contact",
            ContentType::Reaction => "reaction",
            ContentType::Poll => "poll",
            ContentType::Text => "text",
            ContentType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` label of a record.
///
/// Either derived from the payload, or a type string supplied by the event
/// source and passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageType {
    Detected(ContentType),
    Hinted(String),
}

impl MessageType {
    pub fn as_str(&self) -> &str {
        match self {
            MessageType::Detected(kind) => kind.as_str(),
            MessageType::Hinted(hint) => hint,
        }
    }
}

impl From<ContentType> for MessageType {
    fn from(kind: ContentType) -> Self {
        MessageType::Detected(kind)
    }
}

impl PartialEq<ContentType> for MessageType {
    fn eq(&self, other: &ContentType) -> bool {
        matches!(self, MessageType::Detected(kind) if kind == other)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MessageType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_label() {
        assert_eq!(ContentType::Poll.as_str(), "poll");
        assert_eq!(serde_json::to_string(&ContentType::Poll).unwrap(), "\"poll\"");
    }

    #[test]
    fn test_serialize_matches_as_str() {
        for kind in [
            ContentType::Image,
            ContentType::Video,
            ContentType::Audio,
            ContentType::Document,
            ContentType::Sticker,
            ContentType::Location,
            ContentType::Contact,
            ContentType::Reaction,
            ContentType::Poll,
            ContentType::Text,
            ContentType::Unknown,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_hinted_type_serializes_verbatim() {
        let hinted = MessageType::Hinted("media".to_string());
        assert_eq!(hinted.as_str(), "media");
        assert_eq!(serde_json::to_string(&hinted).unwrap(), "\"media\"");
        assert_ne!(hinted, ContentType::Text);
    }

    #[test]
    fn test_detected_compares_with_content_type() {
        let detected = MessageType::from(ContentType::Image);
        assert_eq!(detected, ContentType::Image);
        assert_eq!(detected.to_string(), "image");
    }
}
