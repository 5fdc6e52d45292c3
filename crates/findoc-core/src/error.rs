//! Error types for theme and configuration handling

use thiserror::Error;

/// Errors raised while loading a [`Theme`](crate::Theme) or [`Metadata`](crate::Metadata)
#[derive(Error, Debug)]
pub enum CoreError {
    /// A color string is not a six-digit hex value
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    /// A style profile carries a size that cannot be rendered
    #[error("Invalid font size {size} in profile '{profile}'")]
    InvalidFontSize { profile: String, size: f32 },

    /// Package timestamp is not a UTC W3CDTF date-time
    #[error("Invalid timestamp '{0}': expected YYYY-MM-DDThh:mm:ssZ")]
    InvalidTimestamp(String),

    /// TOML parsing error
    #[error("Theme parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CoreError {
    /// Create an invalid color error
    pub fn invalid_color(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
