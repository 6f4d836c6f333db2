//! Application layer for rulemaster
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ConsensusParams;
pub use ports::{
    log_sink::{FanoutLogSink, LogSink, NoLogSink},
    model_gateway::{GatewayError, ModelGateway, EMPTY_RESPONSE_FALLBACK},
    rulebook_loader::{RulebookLoadError, RulebookLoader},
};
pub use use_cases::answer_query::{
    AnswerQueryError, AnswerQueryInput, AnswerQueryUseCase,
};
