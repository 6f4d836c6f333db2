//! Infrastructure layer for rulemaster
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the Gemini HTTP gateway, configuration file loading,
//! the rulebook PDF loader, and the JSONL agent-log writer.

pub mod config;
pub mod gemini;
pub mod logging;
pub mod rulebook;

// Re-export commonly used types
pub use config::{ConfigLoader, FileApiConfig, FileConfig, FileConsensusConfig, FileModelsConfig};
pub use gemini::GeminiGateway;
pub use logging::JsonlLogSink;
pub use rulebook::{FsRulebookLoader, MAX_RULEBOOK_BYTES};
