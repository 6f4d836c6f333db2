//! Console sink for the live agent log

pub mod console;

pub use console::ConsoleLogSink;
