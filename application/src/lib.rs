//! Application layer for msglog
//!
//! This crate contains the record emitters and the port definitions for the
//! collaborators they need. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    message_sink::{MemoryMessageSink, MessageSink, NoMessageSink},
    session_identity::{SessionIdentity, StaticSession},
    text_extractor::{ExtractedMessage, NoTextExtractor, TextExtractor},
};
pub use use_cases::log_message::MessageLogService;
