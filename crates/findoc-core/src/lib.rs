//! findoc-core - styling primitives for the FinApp documents
//!
//! Provides the [`Theme`] (palette, fonts, style profiles), the [`Length`]
//! unit type shared by the DOCX and PPTX writers, and the inline rich-text
//! renderer that turns `**bold**`, `*italic*` and `` `code` `` markup into
//! styled runs.
//!
//! # Example
//!
//! ```
//! use findoc_core::{RichTextRenderer, SpanKind, Theme};
//!
//! let theme = Theme::default();
//! let renderer = RichTextRenderer::new(&theme);
//!
//! let runs = renderer.render("**Total:** R$ *100,00*", &theme.body);
//! assert_eq!(runs[0].kind, SpanKind::Bold);
//! assert_eq!(runs[0].text, "Total:");
//! assert!(runs[0].style.bold);
//! ```

pub mod error;
pub mod metadata;
pub mod rich_text;
pub mod theme;
pub mod units;

// Re-export main types
pub use error::{CoreError, Result};
pub use metadata::Metadata;
pub use rich_text::{
    segments, strip_markup, RichTextRenderer, RunSink, Runs, Segment, SpanKind, TextRun,
};
pub use theme::{CodeStyle, Fonts, Palette, ResolvedStyle, Rgb, StyleProfile, Theme};
pub use units::Length;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
