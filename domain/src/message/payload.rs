//! Message payload value objects.
//!
//! A wire message can populate more than one content slot at a time (for
//! example a text body alongside a reaction). [`MessagePayload`] keeps every
//! populated part; classification decides which one names the message.

use super::content_type::ContentType;
use serde::{Deserialize, Serialize};

/// One content part of a chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessageContent {
    Text {
        body: String,
    },
    Image {
        #[serde(default)]
        caption: Option<String>,
        #[serde(default)]
        mime_type: Option<String>,
    },
    Video {
        #[serde(default)]
        caption: Option<String>,
        #[serde(default)]
        seconds: Option<u32>,
    },
    Audio {
        #[serde(default)]
        seconds: Option<u32>,
        /// Push-to-talk voice note
        #[serde(default)]
        ptt: bool,
    },
    Document {
        #[serde(default)]
        file_name: Option<String>,
        #[serde(default)]
        caption: Option<String>,
    },
    Sticker {
        #[serde(default)]
        animated: bool,
    },
    Location {
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        name: Option<String>,
    },
    Contact {
        display_name: String,
        #[serde(default)]
        vcard: Option<String>,
    },
    Reaction {
        /// ID of the message being reacted to
        target_id: String,
        emoji: String,
    },
    PollCreation {
        name: String,
        #[serde(default)]
        options: Vec<String>,
    },
}

impl MessageContent {
    /// Creates a plain text part.
    pub fn text(body: impl Into<String>) -> Self {
        Self::Text { body: body.into() }
    }

    /// Creates an image part without caption.
    pub fn image() -> Self {
        Self::Image {
            caption: None,
            mime_type: None,
        }
    }

    /// The content kind this part represents.
    pub fn kind(&self) -> ContentType {
        match self {
            Self::Text { .. } => ContentType::Text,
            Self::Image { .. } => ContentType::Image,
            Self::Video { .. } => ContentType::Video,
            Self::Audio { .. } => ContentType::Audio,
            Self::Document { .. } => ContentType::Document,
            Self::Sticker { .. } => ContentType::Sticker,
            Self::Location { .. } => ContentType::Location,
            Self::Contact { .. } => ContentType::Contact,
            Self::Reaction { .. } => ContentType::Reaction,
            Self::PollCreation { .. } => ContentType::Poll,
        }
    }
}

/// The content of a chat message (Value Object).
///
/// An empty payload is valid: it is a message with no recognised content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessagePayload {
    parts: Vec<MessageContent>,
}

impl MessagePayload {
    pub fn new(parts: Vec<MessageContent>) -> Self {
        Self { parts }
    }

    /// Adds a part, keeping the existing ones.
    pub fn with(mut self, part: MessageContent) -> Self {
        self.parts.push(part);
        self
    }

    pub fn parts(&self) -> &[MessageContent] {
        &self.parts
    }

    /// Whether any part is of the given kind.
    pub fn has(&self, kind: ContentType) -> bool {
        self.parts.iter().any(|part| part.kind() == kind)
    }
}

impl From<MessageContent> for MessagePayload {
    fn from(part: MessageContent) -> Self {
        Self::new(vec![part])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of_each_part() {
        assert_eq!(MessageContent::text("hi").kind(), ContentType::Text);
        assert_eq!(MessageContent::image().kind(), ContentType::Image);
        assert_eq!(
            MessageContent::PollCreation {
                name: "lunch?".to_string(),
                options: vec![],
            }
            .kind(),
            ContentType::Poll
        );
    }

    #[test]
    fn test_has_checks_every_part() {
        let payload = MessagePayload::from(MessageContent::text("hello")).with(
            MessageContent::Reaction {
                target_id: "X1".to_string(),
                emoji: "👍".to_string(),
            },
        );
        assert!(payload.has(ContentType::Text));
        assert!(payload.has(ContentType::Reaction));
        assert!(!payload.has(ContentType::Image));
    }

    #[test]
    fn test_deserialize_tagged_parts() {
        let json = r#"[
            {"kind": "image", "caption": "sunset"},
            {"kind": "location", "latitude": 52.37, "longitude": 4.89}
        ]"#;
        let payload: MessagePayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.parts().len(), 2);
        assert_eq!(
            payload.parts()[0],
            MessageContent::Image {
                caption: Some("sunset".to_string()),
                mime_type: None,
            }
        );
        assert!(payload.has(ContentType::Location));
    }

    #[test]
    fn test_empty_payload() {
        let payload: MessagePayload = serde_json::from_str("[]").unwrap();
        assert!(payload.parts().is_empty());
    }
}
