//! Renders the human-readable text of a message from its payload.

use msglog_application::{ExtractedMessage, TextExtractor};
use msglog_domain::{IncomingMessage, MessageContent, MessagePayload};

/// [`TextExtractor`] reading text straight from the payload parts.
///
/// The first part that carries text wins: a body, a media caption, a
/// location name (or its coordinates), a contact name, a reaction emoji or a
/// poll question. Audio and stickers carry none.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadTextExtractor;

impl PayloadTextExtractor {
    /// Text of a payload, empty if no part carries any.
    pub fn render(payload: &MessagePayload) -> String {
        payload
            .parts()
            .iter()
            .find_map(part_text)
            .unwrap_or_default()
    }
}

fn non_empty(text: &Option<String>) -> Option<String> {
    text.as_ref().filter(|t| !t.is_empty()).cloned()
}

fn part_text(part: &MessageContent) -> Option<String> {
    match part {
        MessageContent::Text { body } if !body.is_empty() => Some(body.clone()),
        MessageContent::Image { caption, .. }
        | MessageContent::Video { caption, .. }
        | MessageContent::Document { caption, .. } => non_empty(caption),
        MessageContent::Location {
            latitude,
            longitude,
            name,
        } => non_empty(name).or_else(|| Some(format!("{},{}", latitude, longitude))),
        MessageContent::Contact { display_name, .. } if !display_name.is_empty() => {
            Some(display_name.clone())
        }
        MessageContent::Reaction { emoji, .. } if !emoji.is_empty() => Some(emoji.clone()),
        MessageContent::PollCreation { name, .. } if !name.is_empty() => Some(name.clone()),
        _ => None,
    }
}

impl TextExtractor for PayloadTextExtractor {
    fn extract(&self, event: &IncomingMessage) -> ExtractedMessage {
        let text = event
            .payload
            .as_ref()
            .map(Self::render)
            .unwrap_or_default();
        ExtractedMessage { text }
    }
}
