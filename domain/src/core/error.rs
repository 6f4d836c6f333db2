//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unsupported attachment type: {mime} (only application/pdf is accepted)")]
    UnsupportedAttachment { mime: String },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_attachment_display() {
        let error = DomainError::UnsupportedAttachment {
            mime: "image/png".to_string(),
        };
        assert!(error.to_string().contains("image/png"));
        assert!(error.to_string().contains("application/pdf"));
    }
}
