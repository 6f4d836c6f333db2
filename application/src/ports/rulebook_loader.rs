//! Rulebook loader port
//!
//! Defines the interface for reading and validating a rulebook PDF from a
//! path. Validation lives at this edge so the consensus loop never has to
//! inspect the attachment.

use rulemaster_domain::{DomainError, Rulebook};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a rulebook
#[derive(Error, Debug)]
pub enum RulebookLoadError {
    #[error("Could not read rulebook: {0}")]
    Io(#[from] std::io::Error),

    #[error("{path} is not a PDF file")]
    NotPdf { path: String },

    #[error("Rulebook is too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Loads rulebook attachments for the caller
pub trait RulebookLoader: Send + Sync {
    /// Load and validate a rulebook PDF
    fn load(&self, path: &Path) -> Result<Rulebook, RulebookLoadError>;
}
