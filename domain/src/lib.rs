//! Domain layer for msglog
//!
//! This crate contains the message model and the pure classification logic.
//! It has no dependencies on infrastructure concerns such as files or
//! configuration.
//!
//! # Core Concepts
//!
//! - **Payload**: a message carries one or more content parts
//!   ([`MessageContent`]); the wire format allows several at once.
//! - **Classification**: every record gets exactly one `type` label, picked
//!   by a fixed priority order that differs slightly between incoming and
//!   outgoing messages.
//! - **Record**: [`MessageRecord`] is the field set written per message.

pub mod core;
pub mod message;

// Re-export commonly used types
pub use core::error::DomainError;
pub use message::{
    classify::{INCOMING_PRIORITY, OUTGOING_PRIORITY, classify_incoming, classify_outgoing},
    content_type::{ContentType, MessageType},
    event::{IncomingMessage, MessageInfo, OutgoingMessage},
    jid::{DEFAULT_USER_SERVER, Jid},
    payload::{MessageContent, MessagePayload},
    record::{MessageRecord, format_timestamp},
};
