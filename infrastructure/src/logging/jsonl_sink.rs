//! JSONL file writer for the agent log.
//!
//! Each [`LogEvent`] is serialized as a single JSON line with its source,
//! text, and a timestamp, appended via a buffered writer. Writes are
//! best-effort: a failing sink must never stall the consensus loop.

use rulemaster_application::LogSink;
use rulemaster_domain::LogEvent;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL agent-log sink that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlLogSink {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlLogSink {
    /// Create a new sink writing to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create agent log directory {}: {}", parent.display(), e);
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not create agent log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for JsonlLogSink {
    fn append(&self, event: LogEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = serde_json::json!({
            "source": event.source,
            "text": event.text,
            "timestamp": timestamp,
        });

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // Flush per line so the file can be tailed live
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlLogSink {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_jsonl_sink_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agent.jsonl");
        let sink = JsonlLogSink::new(&path).unwrap();

        sink.append(LogEvent::new("System", "Iteration 1: Parallel Analysis Initiated..."));
        sink.append(LogEvent::new("Agent A (Scholar)", "Drafting targeted answer..."));

        drop(sink);

        let mut content = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        let lines: Vec<&str> = content.trim().lines().collect();
        assert_eq!(lines.len(), 2);

        for line in &lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("source").is_some());
            assert!(value.get("text").is_some());
            assert!(value.get("timestamp").is_some());
        }

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["source"], "System");
    }

    #[test]
    fn test_sink_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join("agent.jsonl");
        let sink = JsonlLogSink::new(&path).unwrap();
        assert_eq!(sink.path(), path);
        assert!(path.exists());
    }
}
