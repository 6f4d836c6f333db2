//! Log sink port
//!
//! Defines the interface for receiving the user-facing agent log.

use rulemaster_domain::LogEvent;
use std::sync::Arc;

/// Append-only observer for the agent log
///
/// Implementations live in the presentation or infrastructure layer and can
/// display events in various ways (console, JSONL file, ...). Purely
/// observational: `append` must not block, and the loop proceeds even if a
/// sink discards events.
pub trait LogSink: Send + Sync {
    /// Receive one log event
    fn append(&self, event: LogEvent);
}

/// No-op sink for when the agent log is not needed
pub struct NoLogSink;

impl LogSink for NoLogSink {
    fn append(&self, _event: LogEvent) {}
}

/// Sink that forwards every event to several inner sinks, in order
///
/// Used to show the log on the console while also persisting it to a file.
pub struct FanoutLogSink {
    sinks: Vec<Arc<dyn LogSink>>,
}

impl FanoutLogSink {
    pub fn new(sinks: Vec<Arc<dyn LogSink>>) -> Self {
        Self { sinks }
    }
}

impl LogSink for FanoutLogSink {
    fn append(&self, event: LogEvent) {
        for sink in &self.sinks {
            sink.append(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct CollectingSink {
        events: Mutex<Vec<LogEvent>>,
    }

    impl LogSink for CollectingSink {
        fn append(&self, event: LogEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_fanout_forwards_to_all_sinks() {
        let a = Arc::new(CollectingSink {
            events: Mutex::new(Vec::new()),
        });
        let b = Arc::new(CollectingSink {
            events: Mutex::new(Vec::new()),
        });
        let fanout = FanoutLogSink::new(vec![a.clone(), b.clone()]);

        fanout.append(LogEvent::new("System", "hello"));

        assert_eq!(a.events.lock().unwrap().len(), 1);
        assert_eq!(b.events.lock().unwrap().len(), 1);
    }
}
