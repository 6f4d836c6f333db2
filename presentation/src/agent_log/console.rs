//! Live agent-log display on the console

use colored::Colorize;
use rulemaster_application::LogSink;
use rulemaster_domain::LogEvent;

/// Prints each agent-log line as it arrives, colored by source.
///
/// This is the console rendition of the "agent thinking" panel: the Scholar,
/// Sceptic, and Auditor each get their own color so a reader can follow the
/// round at a glance.
pub struct ConsoleLogSink;

impl ConsoleLogSink {
    pub fn new() -> Self {
        Self
    }

    fn styled_source(source: &str) -> colored::ColoredString {
        let tag = format!("[{}]", source);
        match source {
            s if s.contains("Scholar") => tag.yellow().bold(),
            s if s.contains("Sceptic") => tag.magenta().bold(),
            s if s.contains("Auditor") => tag.cyan().bold(),
            _ => tag.dimmed().bold(),
        }
    }
}

impl Default for ConsoleLogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for ConsoleLogSink {
    fn append(&self, event: LogEvent) {
        println!("  {} {}", Self::styled_source(&event.source), event.text);
    }
}
