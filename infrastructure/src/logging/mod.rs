//! Logging infrastructure — structured message logging.
//!
//! Provides [`JsonlMessageLogger`], a JSONL file writer implementing the
//! [`MessageSink`](msglog_application::MessageSink) port, its once-opened
//! wrapper [`LazyMessageLogger`], and the process-wide entry points.

mod global;
mod jsonl_logger;
mod lazy;

pub use global::{
    install_message_logger, log_incoming_message, log_outgoing_message, message_logger,
};
pub use jsonl_logger::{JsonlMessageLogger, SinkOpenError};
pub use lazy::LazyMessageLogger;
