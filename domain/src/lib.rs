//! Domain layer for rulemaster
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tribunal
//!
//! Every question is put before a tribunal of three agent roles:
//!
//! - **Scholar**: drafts a minimal, direct answer
//! - **Sceptic**: stress-tests the question for edge cases and exceptions
//! - **Auditor**: cross-references both and issues a `VERIFIED:` or
//!   `REJECTED:` verdict
//!
//! Rejections carry feedback into the next round; after the round budget is
//! exhausted a best-effort synthesis becomes the final answer.

pub mod consensus;
pub mod core;
pub mod prompt;
pub mod rulebook;

// Re-export commonly used types
pub use consensus::{
    AgentRole, Deliberation, LogEvent, Resolution, RoundRecord, Verdict, REJECTED_PREFIX,
    VERIFIED_PREFIX,
};
pub use core::{error::DomainError, model::ModelTier, query::Query};
pub use prompt::PromptTemplate;
pub use rulebook::{Rulebook, PDF_MIME};
