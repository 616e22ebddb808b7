//! Chat messages as seen by the logger.
//!
//! - [`jid::Jid`] — participant identifiers and their log form
//! - [`payload::MessagePayload`] — content parts of a message
//! - [`content_type::ContentType`] — the `type` label set
//! - [`classify`] — incoming/outgoing classification
//! - [`event`] — incoming and outgoing message events
//! - [`record::MessageRecord`] — one structured log line

pub mod classify;
pub mod content_type;
pub mod event;
pub mod jid;
pub mod payload;
pub mod record;
