//! Error types for DOCX generation

use thiserror::Error;

/// Errors that can occur while building or packaging a document
#[derive(Error, Debug)]
pub enum DocxError {
    /// Error reading or writing the ZIP archive
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Error reading or writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A generated or loaded part is not well-formed XML
    #[error("Malformed XML in '{part}': {reason}")]
    MalformedPart { part: String, reason: String },

    /// Required file not found in archive
    #[error("Required file not found: {0}")]
    MissingFile(String),

    /// Content that cannot be laid out (ragged table rows, unknown heading level)
    #[error("Invalid document structure: {reason}")]
    InvalidStructure { reason: String },
}

impl DocxError {
    /// Create a malformed part error
    pub fn malformed(part: impl Into<String>, reason: impl ToString) -> Self {
        Self::MalformedPart {
            part: part.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid structure error
    pub fn invalid_structure(reason: impl Into<String>) -> Self {
        Self::InvalidStructure {
            reason: reason.into(),
        }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::Archive(_) => "DOCX001",
            Self::Io(_) => "DOCX002",
            Self::MalformedPart { .. } => "DOCX003",
            Self::MissingFile(_) => "DOCX004",
            Self::InvalidStructure { .. } => "DOCX005",
        }
    }
}

/// Result type for DOCX operations
pub type Result<T> = std::result::Result<T, DocxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DocxError::malformed("word/document.xml", "mismatched end tag");
        assert_eq!(err.code(), "DOCX003");
        assert!(err.to_string().contains("word/document.xml"));

        let err = DocxError::invalid_structure("row 3 has 2 cells, expected 3");
        assert_eq!(err.code(), "DOCX005");
        assert!(err.to_string().contains("row 3"));

        let err = DocxError::MissingFile("word/styles.xml".to_string());
        assert_eq!(err.code(), "DOCX004");
    }
}
