//! Filesystem rulebook loading
//!
//! Implements the [`RulebookLoader`] port: reads a PDF from disk and
//! validates it (magic bytes, size) before it is handed to the consensus
//! loop.

use rulemaster_application::{RulebookLoadError, RulebookLoader};
use rulemaster_domain::{Rulebook, PDF_MIME};
use std::path::Path;
use tracing::info;

/// Inline attachments above this size are rejected before upload
pub const MAX_RULEBOOK_BYTES: usize = 20 * 1024 * 1024;

/// PDF files start with this magic
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Loads rulebook PDFs from the local filesystem
pub struct FsRulebookLoader;

impl FsRulebookLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsRulebookLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl RulebookLoader for FsRulebookLoader {
    fn load(&self, path: &Path) -> Result<Rulebook, RulebookLoadError> {
        let data = std::fs::read(path)?;

        if !data.starts_with(PDF_MAGIC) {
            return Err(RulebookLoadError::NotPdf {
                path: path.display().to_string(),
            });
        }
        if data.len() > MAX_RULEBOOK_BYTES {
            return Err(RulebookLoadError::TooLarge {
                size: data.len(),
                max: MAX_RULEBOOK_BYTES,
            });
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "rulebook.pdf".to_string());

        info!(name = %name, bytes = data.len(), "Loaded rulebook");

        Ok(Rulebook::new(name, PDF_MIME, data)?)
    }
}
