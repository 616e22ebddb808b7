//! Log Message use case.
//!
//! Turns message events into [`MessageRecord`]s and hands them to a
//! [`MessageSink`]. Both entry points are fire-and-forget: they return
//! nothing and never fail, whatever the event looks like.

use crate::ports::message_sink::MessageSink;
use crate::ports::session_identity::SessionIdentity;
use crate::ports::text_extractor::{NoTextExtractor, TextExtractor};
use msglog_domain::{IncomingMessage, MessageRecord, OutgoingMessage};
use std::sync::Arc;
use tracing::debug;

/// Use case for writing one record per sent or received message.
pub struct MessageLogService {
    sink: Arc<dyn MessageSink>,
    text_extractor: Arc<dyn TextExtractor>,
}

impl Clone for MessageLogService {
    fn clone(&self) -> Self {
        Self {
            sink: self.sink.clone(),
            text_extractor: self.text_extractor.clone(),
        }
    }
}

impl MessageLogService {
    /// Create a service writing to `sink`, without text extraction.
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self {
            sink,
            text_extractor: Arc::new(NoTextExtractor),
        }
    }

    /// Set the extractor used to fill the `text` field of incoming records.
    pub fn with_text_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.text_extractor = extractor;
        self
    }

    /// Log a received message.
    ///
    /// `session` supplies our own device identity for `device_id`; without
    /// one the field is empty.
    pub fn log_incoming(&self, event: &IncomingMessage, session: Option<&dyn SessionIdentity>) {
        let device = session.and_then(|s| s.device_jid());
        let text = self.text_extractor.extract(event).text;
        let record = MessageRecord::incoming(event, device.as_ref(), text);

        debug!(
            message_id = %record.message_id,
            message_type = %record.message_type,
            "logging incoming message"
        );
        self.sink.write(&record);
    }

    /// Log a message we sent.
    pub fn log_outgoing(&self, msg: &OutgoingMessage) {
        let record = MessageRecord::outgoing(msg);

        debug!(
            message_id = %record.message_id,
            message_type = %record.message_type,
            "logging outgoing message"
        );
        self.sink.write(&record);
    }
}
