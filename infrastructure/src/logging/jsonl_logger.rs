//! Append-only JSONL sink for [`ConversationEvent`]s.
//!
//! One event becomes one line: the payload's own fields plus `type` and
//! `timestamp`. The file is opened in append mode, so a single log keeps
//! growing across server restarts.

use scout_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Writes every model reply and failure of a search to a `.jsonl` file.
pub struct JsonlConversationLogger {
    sink: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open `path` for appending, creating missing parent directories.
    ///
    /// A log that cannot be opened only costs the audit trail, so failure is
    /// reported with a warning and `None` instead of an error.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        match open_append(path) {
            Ok(file) => Some(Self {
                sink: Mutex::new(BufWriter::new(file)),
                path: path.to_path_buf(),
            }),
            Err(e) => {
                warn!("Conversation log {} unavailable: {}", path.display(), e);
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Flatten an event into the line written to disk.
///
/// Object payloads are extended in place; any other payload is nested
/// under `data`.
fn to_record(event: ConversationEvent, timestamp: String) -> Value {
    let mut record = match event.payload {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("data".to_owned(), other);
            map
        }
    };
    record.insert("type".to_owned(), Value::from(event.event_type));
    record.insert("timestamp".to_owned(), Value::from(timestamp));
    Value::Object(record)
}

fn write_line(out: &mut impl Write, record: &Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    out.write_all(b"\n")?;
    out.flush()
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let record = to_record(event, now);

        let Ok(mut sink) = self.sink.lock() else {
            return;
        };
        if let Err(e) = write_line(&mut *sink, &record) {
            warn!("Dropped conversation event in {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(sink) = self.sink.get_mut() {
            let _ = sink.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        let mut content = String::new();
        File::open(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_record_payload_fields_are_overridden_by_envelope() {
        let event = ConversationEvent::new(
            "search_reply",
            serde_json::json!({ "type": "spoofed", "attempt": 3 }),
        );
        let record = to_record(event, "2026-01-01T00:00:00.000Z".to_string());

        assert_eq!(record["type"], "search_reply");
        assert_eq!(record["timestamp"], "2026-01-01T00:00:00.000Z");
        assert_eq!(record["attempt"], 3);
        assert!(record.get("data").is_none());
    }

    #[test]
    fn test_jsonl_logger_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("replies.jsonl");
        let logger = JsonlConversationLogger::new(&path).unwrap();

        logger.log(ConversationEvent::new(
            "search_reply",
            serde_json::json!({
                "model": "kimi-search",
                "attempt": 1,
                "text": "{\"answer\":\"B\"}"
            }),
        ));

        logger.log(ConversationEvent::new(
            "extraction_miss",
            serde_json::json!({ "attempt": 2 }),
        ));

        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);

        for value in &lines {
            assert!(value.get("type").is_some());
            assert!(value.get("timestamp").is_some());
        }

        assert_eq!(lines[0]["type"], "search_reply");
        assert_eq!(lines[0]["model"], "kimi-search");
        assert_eq!(lines[0]["attempt"], 1);
        assert_eq!(lines[0]["text"], "{\"answer\":\"B\"}");
        assert_eq!(lines[1]["type"], "extraction_miss");
    }

    #[test]
    fn test_jsonl_logger_handles_non_object_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.jsonl");
        let logger = JsonlConversationLogger::new(&path).unwrap();

        logger.log(ConversationEvent::new(
            "simple_event",
            serde_json::json!("just a string"),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "simple_event");
        assert_eq!(lines[0]["data"], "just a string");
    }

    #[test]
    fn test_jsonl_logger_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("replies.jsonl");

        for attempt in 1..=2 {
            let logger = JsonlConversationLogger::new(&path).unwrap();
            assert_eq!(logger.path(), path.as_path());
            logger.log(ConversationEvent::new(
                "search_error",
                serde_json::json!({ "attempt": attempt }),
            ));
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["attempt"], 1);
        assert_eq!(lines[1]["attempt"], 2);
    }

    #[test]
    fn test_jsonl_logger_returns_none_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        assert!(JsonlConversationLogger::new(blocker.join("replies.jsonl")).is_none());
    }
}
