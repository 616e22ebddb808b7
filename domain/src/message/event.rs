//! Message events handed to the logger by the messaging integration.

use super::jid::Jid;
use super::payload::MessagePayload;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope metadata of a received message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageInfo {
    pub id: String,
    pub sender: Jid,
    /// Chat the message arrived in (the recipient side of the record)
    pub chat: Jid,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_from_me: bool,
    /// Pre-computed type string from the event source, empty when absent
    #[serde(default, rename = "type")]
    pub message_type: String,
}

/// A received message event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub info: MessageInfo,
    #[serde(default)]
    pub payload: Option<MessagePayload>,
}

impl IncomingMessage {
    pub fn new(info: MessageInfo, payload: Option<MessagePayload>) -> Self {
        Self { info, payload }
    }
}

/// A message we sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub id: String,
    /// Sender identifier, logged as given for both `device_id` and `from`
    pub sender: String,
    pub recipient: Jid,
    #[serde(default)]
    pub payload: Option<MessagePayload>,
    /// Plain-text content of the message, empty for pure media
    #[serde(default)]
    pub content: String,
    pub timestamp: DateTime<Utc>,
}
