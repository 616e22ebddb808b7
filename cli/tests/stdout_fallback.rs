//! The binary keeps every record when the log directory cannot be created.

use assert_cmd::Command;

const EVENTS: &str = r#"{"direction":"incoming","info":{"id":"ABC123","sender":"12345@s.whatsapp.net","chat":"67890@s.whatsapp.net","timestamp":"2024-01-01T00:00:00Z","is_from_me":false},"payload":[{"kind":"image"}]}
{"direction":"outgoing","id":"OUT1","sender":"99999","recipient":"11111@s.whatsapp.net","content":"hello","timestamp":"2024-01-01T00:00:00Z"}
"#;

#[test]
fn test_unwritable_log_dir_sends_both_records_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let log_path = blocker.join("logs").join("messages.log");

    let assert = Command::cargo_bin("msglog")
        .unwrap()
        .arg("--no-config")
        .arg("--log-path")
        .arg(&log_path)
        .write_stdin(EVENTS)
        .assert()
        .success();
    let output = assert.get_output();

    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);

    assert_eq!(lines[0]["message_id"], "ABC123");
    assert_eq!(lines[0]["type"], "image");
    assert_eq!(lines[0]["from"], "12345");
    assert_eq!(lines[0]["is_from_me"], false);

    assert_eq!(lines[1]["message_id"], "OUT1");
    assert_eq!(lines[1]["type"], "text");
    assert_eq!(lines[1]["text"], "hello");
    assert_eq!(lines[1]["is_from_me"], true);
    assert!(lines.iter().all(|line| line["level"] == "info"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to create message log directory"));
    assert!(!log_path.exists());
}

#[test]
fn test_writable_log_path_keeps_stdout_clean() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("logs").join("messages.log");

    let assert = Command::cargo_bin("msglog")
        .unwrap()
        .arg("--no-config")
        .arg("--log-path")
        .arg(&log_path)
        .write_stdin(EVENTS)
        .assert()
        .success();

    assert!(assert.get_output().stdout.is_empty());
    let written = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(written.lines().count(), 2);
}
