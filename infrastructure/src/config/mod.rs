//! Configuration file loading for msglog
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `MSGLOG_*` (nested keys separated by `__`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./msglog.toml` or `./.msglog.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/msglog/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileMessageLogConfig};
pub use loader::ConfigLoader;
