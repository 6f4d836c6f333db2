//! Presentation layer for rulemaster
//!
//! This crate contains CLI definitions, output formatters, the console
//! agent-log sink, and the interactive chat REPL.

pub mod agent_log;
pub mod chat;
pub mod cli;
pub mod output;

// Re-export commonly used types
pub use agent_log::ConsoleLogSink;
pub use chat::ChatRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
