//! CLI entrypoint for msglog
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod args;
mod replay;

use anyhow::{Context, Result, anyhow};
use args::Cli;
use clap::Parser;
use msglog_application::{MessageLogService, SessionIdentity, StaticSession};
use msglog_domain::Jid;
use msglog_infrastructure::{
    ConfigLoader, PayloadTextExtractor, install_message_logger, message_logger,
};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level.
    // Diagnostics go to stderr; stdout is the fallback for message records.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };
    config.validate()?;

    let log_path = cli.log_path.unwrap_or(config.message_log.path);
    install_log_path(&log_path);
    info!("Writing message records to {}", log_path.display());

    let session = cli
        .device
        .as_deref()
        .map(str::parse::<Jid>)
        .transpose()?
        .map(StaticSession::new);

    // === Dependency Injection ===
    let service = MessageLogService::new(message_logger().clone())
        .with_text_extractor(Arc::new(PayloadTextExtractor));
    let session = session.as_ref().map(|s| s as &dyn SessionIdentity);

    let summary = match cli.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            replay::replay(BufReader::new(file), &service, session)?
        }
        _ => replay::replay(io::stdin().lock(), &service, session)?,
    };

    info!(
        incoming = summary.incoming,
        outgoing = summary.outgoing,
        skipped = summary.skipped,
        "Replay finished"
    );

    Ok(())
}

/// Point the process-wide message logger at `path`.
fn install_log_path(path: &Path) -> bool {
    let installed = install_message_logger(path);
    if !installed {
        warn!(
            "Message logger was already set up; {} is not used",
            path.display()
        );
    }
    installed
}
