//! Replays newline-delimited JSON events through the record emitters.

use msglog_application::{MessageLogService, SessionIdentity};
use msglog_domain::{IncomingMessage, OutgoingMessage};
use serde::Deserialize;
use std::io::{self, BufRead};
use tracing::warn;

/// One input line.
#[derive(Debug, Deserialize)]
#[serde(tag = "direction", rename_all = "lowercase")]
pub enum ReplayEvent {
    Incoming(IncomingMessage),
    Outgoing(OutgoingMessage),
}

/// Counts of what a replay run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub incoming: usize,
    pub outgoing: usize,
    pub skipped: usize,
}

/// Log every event read from `reader`.
///
/// Blank lines are ignored; lines that do not parse (including lines that
/// are not valid UTF-8) are reported and skipped. Only a read error stops
/// the run.
pub fn replay<R: BufRead>(
    mut reader: R,
    service: &MessageLogService,
    session: Option<&dyn SessionIdentity>,
) -> io::Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = buf.trim_ascii();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_slice::<ReplayEvent>(line) {
            Ok(ReplayEvent::Incoming(event)) => {
                service.log_incoming(&event, session);
                summary.incoming += 1;
            }
            Ok(ReplayEvent::Outgoing(msg)) => {
                service.log_outgoing(&msg);
                summary.outgoing += 1;
            }
            Err(e) => {
                warn!("Skipping line {}: {}", line_no, e);
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}
