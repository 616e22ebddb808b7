//! Once-initialized message logger.

use super::jsonl_logger::JsonlMessageLogger;
use msglog_application::MessageSink;
use msglog_domain::MessageRecord;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// A [`JsonlMessageLogger`] opened on first use.
///
/// Opening (directory creation, file open, stdout fallback) runs exactly
/// once, even when many threads hit `get` at the same time; every caller
/// receives the same fully opened logger.
pub struct LazyMessageLogger {
    path: PathBuf,
    logger: OnceLock<Arc<JsonlMessageLogger>>,
}

impl LazyMessageLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            logger: OnceLock::new(),
        }
    }

    /// Configured log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying logger, opening it on first call.
    pub fn get(&self) -> &Arc<JsonlMessageLogger> {
        self.logger
            .get_or_init(|| Arc::new(JsonlMessageLogger::open(&self.path)))
    }
}

impl MessageSink for LazyMessageLogger {
    fn write(&self, record: &MessageRecord) {
        self.get().write(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use msglog_domain::OutgoingMessage;

    fn hello_record() -> MessageRecord {
        MessageRecord::outgoing(&OutgoingMessage {
            id: "OUT1".to_string(),
            sender: "99999".to_string(),
            recipient: "11111@s.whatsapp.net".parse().unwrap(),
            payload: None,
            content: "hello".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        })
    }

    #[test]
    fn test_nothing_happens_before_first_use() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("messages.log");
        let lazy = LazyMessageLogger::new(&path);

        assert!(!path.parent().unwrap().exists());

        lazy.write(&hello_record());
        assert!(path.exists());
    }

    #[test]
    fn test_concurrent_first_use_opens_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("messages.log");
        let lazy = LazyMessageLogger::new(&path);

        let loggers: Vec<Arc<JsonlMessageLogger>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..16).map(|_| s.spawn(|| lazy.get().clone())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let first = &loggers[0];
        assert!(loggers.iter().all(|l| Arc::ptr_eq(l, first)));
        assert!(!first.is_stdout());
        assert_eq!(first.path(), Some(path.as_path()));
    }

    #[test]
    fn test_repeated_get_returns_same_instance() {
        let dir = tempfile::tempdir().unwrap();
        let lazy = LazyMessageLogger::new(dir.path().join("messages.log"));
        assert!(Arc::ptr_eq(lazy.get(), lazy.get()));
    }

    #[test]
    fn test_unusable_path_falls_back_to_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let lazy = LazyMessageLogger::new(blocker.join("messages.log"));

        lazy.write(&hello_record());
        assert!(lazy.get().is_stdout());
    }
}
