//! Content-type classification for incoming and outgoing messages.
//!
//! Both directions scan a fixed priority list and return the first kind the
//! payload carries. The outgoing list has no [`ContentType::Reaction`] entry,
//! so a reaction sent by us is logged as `"text"`; incoming reactions are
//! logged as `"reaction"`. The two lists are kept apart on purpose.

use super::content_type::{ContentType, MessageType};
use super::payload::MessagePayload;

/// Match order for messages received from a chat.
pub const INCOMING_PRIORITY: [ContentType; 9] = [
    ContentType::Image,
    ContentType::Video,
    ContentType::Audio,
    ContentType::Document,
    ContentType::Sticker,
    ContentType::Location,
    ContentType::Contact,
    ContentType::Reaction,
    ContentType::Poll,
];

/// Match order for messages we send.
pub const OUTGOING_PRIORITY: [ContentType; 8] = [
    ContentType::Image,
    ContentType::Video,
    ContentType::Audio,
    ContentType::Document,
    ContentType::Sticker,
    ContentType::Location,
    ContentType::Contact,
    ContentType::Poll,
];

fn first_match(payload: &MessagePayload, priority: &[ContentType]) -> ContentType {
    priority
        .iter()
        .copied()
        .find(|kind| payload.has(*kind))
        .unwrap_or(ContentType::Text)
}

/// Classify a received message.
///
/// A non-empty `type_hint` from the event source wins over the payload.
pub fn classify_incoming(payload: Option<&MessagePayload>, type_hint: &str) -> MessageType {
    if !type_hint.is_empty() {
        return MessageType::Hinted(type_hint.to_string());
    }
    match payload {
        None => ContentType::Unknown.into(),
        Some(payload) => first_match(payload, &INCOMING_PRIORITY).into(),
    }
}

/// Classify a message we are sending.
pub fn classify_outgoing(payload: Option<&MessagePayload>, content: &str) -> ContentType {
    match payload {
        None if content.is_empty() => ContentType::Unknown,
        None => ContentType::Text,
        Some(payload) => first_match(payload, &OUTGOING_PRIORITY),
    }
}
