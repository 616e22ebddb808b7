//! Port for the message record sink.
//!
//! Defines the [`MessageSink`] trait that receives one [`MessageRecord`] per
//! logged message and persists it (e.g. as one JSONL line).
//!
//! This is separate from `tracing`-based operation logs: tracing carries
//! diagnostics about the logger itself, while this port carries the message
//! records in a machine-readable format.

use msglog_domain::MessageRecord;
use std::sync::Mutex;

/// Port for writing message records.
///
/// The `write` method is synchronous and non-fallible on purpose: the
/// message-handling path that calls it must never be interrupted by a logging
/// failure. Implementations swallow their own errors.
pub trait MessageSink: Send + Sync {
    /// Persist one record.
    fn write(&self, record: &MessageRecord);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoMessageSink;

impl MessageSink for NoMessageSink {
    fn write(&self, _record: &MessageRecord) {}
}

/// Keeps records in memory; useful for tests and embedding.
#[derive(Default)]
pub struct MemoryMessageSink {
    records: Mutex<Vec<MessageRecord>>,
}

impl MemoryMessageSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn records(&self) -> Vec<MessageRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

impl MessageSink for MemoryMessageSink {
    fn write(&self, record: &MessageRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record.clone());
        }
    }
}
