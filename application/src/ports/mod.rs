//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters and the host
//! messaging client must implement.

pub mod message_sink;
pub mod session_identity;
pub mod text_extractor;
