//! Consensus domain
//!
//! This module contains the core concepts for the tribunal's
//! draft-audit-retry consensus:
//!
//! - [`Verdict`]: the Auditor's accept/reject decision, parsed from a
//!   literal `VERIFIED:` / `REJECTED:` prefix
//! - [`RoundRecord`] and [`Deliberation`]: immutable records of what each
//!   round produced and how the question was finally resolved
//! - [`AgentRole`] and [`LogEvent`]: the structured progress events the
//!   loop emits for display

pub mod event;
pub mod round;
pub mod verdict;

// Re-export main types
pub use event::{AgentRole, LogEvent};
pub use round::{Deliberation, Resolution, RoundRecord};
pub use verdict::{Verdict, REJECTED_PREFIX, VERIFIED_PREFIX};
