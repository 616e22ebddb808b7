//! JSONL file writer for message records.
//!
//! Each [`MessageRecord`] is serialized as a single JSON line followed by
//! `level`, `msg` and `time` fields, appended to the file via a buffered
//! writer. If the file cannot be opened, records go to stdout instead.

use chrono::{SecondsFormat, Utc};
use msglog_application::MessageSink;
use msglog_domain::MessageRecord;
use serde::Serialize;
use std::fs::{DirBuilder, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, warn};

/// Failures while opening the log file.
///
/// Never surfaced to emitters; the logger downgrades to stdout instead.
#[derive(Error, Debug)]
pub enum SinkOpenError {
    #[error("failed to create message log directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to open message log file {}: {source}", .path.display())]
    OpenFile { path: PathBuf, source: io::Error },
}

/// Where records end up. Chosen once at construction.
enum LogTarget {
    File(BufWriter<File>),
    Stdout,
}

#[derive(Serialize)]
struct LogLine<'a> {
    #[serde(flatten)]
    record: &'a MessageRecord,
    level: &'static str,
    msg: &'static str,
    time: String,
}

/// JSONL message logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<LogTarget>`; a record is serialized before the
/// lock is taken and written with a single `writeln!`, so concurrent records
/// never interleave. Flushes after every record and on `Drop`.
pub struct JsonlMessageLogger {
    target: Mutex<LogTarget>,
    path: Option<PathBuf>,
}

impl JsonlMessageLogger {
    /// Open (or create) the log file at `path` for appending.
    ///
    /// Creates missing parent directories. On failure a warning is logged and
    /// the returned logger writes to stdout.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match open_log_file(path) {
            Ok(file) => {
                debug!("Message log opened at {}", path.display());
                Self {
                    target: Mutex::new(LogTarget::File(BufWriter::new(file))),
                    path: Some(path.to_path_buf()),
                }
            }
            Err(e) => {
                report_fallback(&e);
                Self::stdout()
            }
        }
    }

    /// A logger writing records to stdout.
    pub fn stdout() -> Self {
        Self {
            target: Mutex::new(LogTarget::Stdout),
            path: None,
        }
    }

    /// Path of the log file, `None` when writing to stdout.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_stdout(&self) -> bool {
        self.path.is_none()
    }
}

impl MessageSink for JsonlMessageLogger {
    fn write(&self, record: &MessageRecord) {
        let line = LogLine {
            record,
            level: "info",
            msg: "message",
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        };
        let Ok(line) = serde_json::to_string(&line) else {
            return;
        };

        if let Ok(mut target) = self.target.lock() {
            match &mut *target {
                LogTarget::File(writer) => {
                    let _ = writeln!(writer, "{}", line);
                    let _ = writer.flush();
                }
                LogTarget::Stdout => {
                    let mut out = io::stdout().lock();
                    let _ = writeln!(out, "{}", line);
                    let _ = out.flush();
                }
            }
        }
    }
}

impl Drop for JsonlMessageLogger {
    fn drop(&mut self) {
        if let Ok(mut target) = self.target.lock()
            && let LogTarget::File(writer) = &mut *target
        {
            let _ = writer.flush();
        }
    }
}

/// Warn about the stdout fallback. Without an installed subscriber the
/// warning goes straight to stderr so it is never lost.
fn report_fallback(err: &SinkOpenError) {
    if tracing::dispatcher::has_been_set() {
        warn!("{}; writing message records to stdout", err);
    } else {
        eprintln!("WARN {}; writing message records to stdout", err);
    }
}

/// Create the parent directory (0755) and open `path` for append (0644).
fn open_log_file(path: &Path) -> Result<File, SinkOpenError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder
            .create(parent)
            .map_err(|source| SinkOpenError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options.open(path).map_err(|source| SinkOpenError::OpenFile {
        path: path.to_path_buf(),
        source,
    })
}
