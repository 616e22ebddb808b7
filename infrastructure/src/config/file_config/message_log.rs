//! Message log configuration from TOML (`[message_log]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the message log, relative to the working directory.
pub const DEFAULT_MESSAGE_LOG_PATH: &str = "storages/logs/messages.log";

/// Raw message log configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMessageLogConfig {
    /// File the JSONL records are appended to
    pub path: PathBuf,
}

impl Default for FileMessageLogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MESSAGE_LOG_PATH),
        }
    }
}
