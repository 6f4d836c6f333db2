//! Agent-log persistence

pub mod jsonl_sink;

pub use jsonl_sink::JsonlLogSink;
