//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid JID: {0:?}")]
    InvalidJid(String),

    #[error("Invalid device number in JID: {0:?}")]
    InvalidDevice(String),
}
