//! Rulebook attachment value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The only MIME type accepted for rulebook attachments
pub const PDF_MIME: &str = "application/pdf";

/// An uploaded rulebook PDF (Value Object)
///
/// Owned by the caller and read-only to the consensus loop. When present it
/// is passed verbatim to every gateway call in a round so that all three
/// agents reason over the same document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rulebook {
    name: String,
    mime_type: String,
    data: Vec<u8>,
}

impl Rulebook {
    /// Create a new rulebook attachment
    ///
    /// Only `application/pdf` is accepted; anything else is rejected before
    /// the consensus loop ever sees it.
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Result<Self, DomainError> {
        let mime_type = mime_type.into();
        if mime_type != PDF_MIME {
            return Err(DomainError::UnsupportedAttachment { mime: mime_type });
        }
        Ok(Self {
            name: name.into(),
            mime_type,
            data,
        })
    }

    /// The original file name, for display
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Raw document bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Size of the document in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }
}
