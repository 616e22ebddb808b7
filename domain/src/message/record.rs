//! The structured record written once per message.

use super::classify::{classify_incoming, classify_outgoing};
use super::content_type::MessageType;
use super::event::{IncomingMessage, OutgoingMessage};
use super::jid::Jid;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// One log line describing a message (Value Object).
///
/// Field order here is the field order on disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRecord {
    pub device_id: String,
    pub message_id: String,
    pub from: String,
    pub to: String,
    pub is_from_me: bool,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub timestamp: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
}

impl MessageRecord {
    /// Builds the record for a received message.
    ///
    /// `device` is the identity of our own session, if known; `text` is the
    /// human-readable rendering of the payload.
    pub fn incoming(event: &IncomingMessage, device: Option<&Jid>, text: String) -> Self {
        let info = &event.info;
        Self {
            device_id: device.map(Jid::log_id).unwrap_or_default(),
            message_id: info.id.clone(),
            from: info.sender.log_id(),
            to: info.chat.log_id(),
            is_from_me: info.is_from_me,
            message_type: classify_incoming(event.payload.as_ref(), &info.message_type),
            timestamp: format_timestamp(&info.timestamp),
            text,
        }
    }

    /// Builds the record for a message we sent.
    pub fn outgoing(msg: &OutgoingMessage) -> Self {
        Self {
            device_id: msg.sender.clone(),
            message_id: msg.id.clone(),
            from: msg.sender.clone(),
            to: msg.recipient.log_id(),
            is_from_me: true,
            message_type: classify_outgoing(msg.payload.as_ref(), &msg.content).into(),
            timestamp: format_timestamp(&msg.timestamp),
            text: msg.content.clone(),
        }
    }
}

/// RFC 3339, UTC, whole seconds, `Z` suffix.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}
