//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod message_log;

pub use message_log::{DEFAULT_MESSAGE_LOG_PATH, FileMessageLogConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("message_log.path cannot be empty")]
    EmptyMessageLogPath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Message log settings
    pub message_log: FileMessageLogConfig,
}

impl FileConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.message_log.path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyMessageLogPath);
        }
        Ok(())
    }
}
