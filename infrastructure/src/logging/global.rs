//! Process-wide message logger and the plain-function entry points.
//!
//! The messaging integration calls [`log_incoming_message`] and
//! [`log_outgoing_message`] from its event handlers. Both write through one
//! shared [`LazyMessageLogger`] whose path comes from configuration the first
//! time it is needed, unless [`install_message_logger`] set it earlier.

use super::lazy::LazyMessageLogger;
use crate::config::{ConfigLoader, FileMessageLogConfig};
use crate::text::PayloadTextExtractor;
use chrono::{DateTime, Utc};
use msglog_application::{MessageLogService, SessionIdentity};
use msglog_domain::{IncomingMessage, Jid, MessagePayload, OutgoingMessage};
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use tracing::warn;

static MESSAGE_LOGGER: OnceLock<Arc<LazyMessageLogger>> = OnceLock::new();
static SERVICE: OnceLock<MessageLogService> = OnceLock::new();

/// Fix the path of the process-wide logger.
///
/// Returns `false` if the logger was already set up, in which case the
/// existing path stays in effect.
pub fn install_message_logger(path: impl Into<PathBuf>) -> bool {
    MESSAGE_LOGGER
        .set(Arc::new(LazyMessageLogger::new(path)))
        .is_ok()
}

/// The process-wide logger.
///
/// If the log file cannot be opened on first use, records go to stdout and
/// a warning is emitted through `tracing`, or printed to stderr when no
/// subscriber is installed.
pub fn message_logger() -> &'static Arc<LazyMessageLogger> {
    MESSAGE_LOGGER.get_or_init(|| Arc::new(LazyMessageLogger::new(configured_path())))
}

fn configured_path() -> PathBuf {
    match ConfigLoader::load(None) {
        Ok(config) => config.message_log.path,
        Err(e) => {
            warn!("Failed to load message log configuration: {}", e);
            FileMessageLogConfig::default().path
        }
    }
}

fn service() -> &'static MessageLogService {
    SERVICE.get_or_init(|| {
        MessageLogService::new(message_logger().clone())
            .with_text_extractor(Arc::new(PayloadTextExtractor))
    })
}

/// Write a structured record for a received message.
pub fn log_incoming_message(event: &IncomingMessage, session: Option<&dyn SessionIdentity>) {
    service().log_incoming(event, session);
}

/// Write a structured record for a message we sent.
pub fn log_outgoing_message(
    msg_id: &str,
    sender: &str,
    recipient: &Jid,
    payload: Option<&MessagePayload>,
    content: &str,
    timestamp: DateTime<Utc>,
) {
    service().log_outgoing(&OutgoingMessage {
        id: msg_id.to_string(),
        sender: sender.to_string(),
        recipient: recipient.clone(),
        payload: payload.cloned(),
        content: content.to_string(),
        timestamp,
    });
}
