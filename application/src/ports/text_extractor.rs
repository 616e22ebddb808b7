//! Port for rendering the human-readable text of a received message.

use msglog_domain::IncomingMessage;

/// Human-readable rendering of a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedMessage {
    /// Empty when the message carries no text
    pub text: String,
}

impl ExtractedMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Extracts display text from an incoming event.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, event: &IncomingMessage) -> ExtractedMessage;
}

/// Extractor that never finds text.
pub struct NoTextExtractor;

impl TextExtractor for NoTextExtractor {
    fn extract(&self, _event: &IncomingMessage) -> ExtractedMessage {
        ExtractedMessage::default()
    }
}
