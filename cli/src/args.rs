//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for msglog
#[derive(Parser, Debug)]
#[command(name = "msglog")]
#[command(author, version, about = "Replay chat-message events into the structured message log")]
#[command(long_about = r#"
msglog reads newline-delimited JSON message events and writes one structured
record per message to the message log.

Each input line is either
  {"direction": "incoming", "info": {...}, "payload": [...]}
or
  {"direction": "outgoing", "id": "...", "sender": "...", "recipient": "...", ...}

Configuration files are loaded from (in priority order):
1. MSGLOG_* environment variables
2. --config <path>     Explicit config file
3. ./msglog.toml       Project-level config
4. ~/.config/msglog/config.toml   Global config

Example:
  msglog events.jsonl
  msglog --log-path /tmp/messages.log --device 12345:3@s.whatsapp.net < events.jsonl
"#)]
pub struct Cli {
    /// Event file to replay (stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Message log file, overriding the configured path
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// JID of the local device, used as device_id for incoming messages
    #[arg(long, value_name = "JID")]
    pub device: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
