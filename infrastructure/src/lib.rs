//! Infrastructure layer for msglog
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the JSONL message sink, text extraction, and
//! configuration file loading.

pub mod config;
pub mod logging;
pub mod text;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig, FileMessageLogConfig};
pub use logging::{
    JsonlMessageLogger, LazyMessageLogger, SinkOpenError, install_message_logger,
    log_incoming_message, log_outgoing_message, message_logger,
};
pub use text::PayloadTextExtractor;
