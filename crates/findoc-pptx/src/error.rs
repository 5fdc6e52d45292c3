//! Error types for PPTX generation.

use thiserror::Error;

/// Result type for PPTX operations
pub type Result<T> = std::result::Result<T, PptxError>;

/// Errors that can occur during PPTX generation
#[derive(Error, Debug)]
pub enum PptxError {
    /// ZIP archive error
    #[error("Archive error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// XML parsing error while checking a generated part
    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// A presentation needs at least one slide
    #[error("Presentation has no slides")]
    EmptyPresentation,

    /// A shape that cannot be drawn
    #[error("Invalid shape '{shape}' on slide {slide}: {reason}")]
    InvalidShape {
        slide: usize,
        shape: String,
        reason: String,
    },
}

impl PptxError {
    /// Create an invalid shape error
    pub fn invalid_shape(slide: usize, shape: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            slide,
            shape: shape.into(),
            reason: reason.into(),
        }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::ZipError(_) => "PPTX001",
            Self::IoError(_) => "PPTX002",
            Self::XmlError(_) => "PPTX003",
            Self::EmptyPresentation => "PPTX004",
            Self::InvalidShape { .. } => "PPTX005",
        }
    }
}
