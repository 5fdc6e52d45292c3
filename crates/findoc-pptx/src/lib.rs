//! # findoc-pptx
//!
//! PowerPoint (PPTX) generation for findoc.
//!
//! Slides are free-form: every element is an absolutely positioned shape
//! (rectangle, rounded rectangle, ellipse or text box) on a single blank
//! layout. Text passes through the inline rich-text renderer from
//! `findoc-core`, so `**bold**`, `*italic*` and `` `code` `` work everywhere.
//!
//! ## Example
//!
//! ```
//! use findoc_core::Theme;
//! use findoc_pptx::{Bounds, Canvas, DeckTheme, PptxWriter, TextStyle};
//!
//! let theme = Theme::default();
//! let p = &theme.palette;
//!
//! let mut canvas = Canvas::new(&theme, p.slate_900);
//! canvas.add_text_box(
//!     Bounds::inches(1.2, 1.8, 5.0, 1.0),
//!     "FinApp",
//!     &TextStyle::new(56.0, p.emerald_500).bold(),
//! );
//!
//! let mut writer = PptxWriter::new(DeckTheme::from_theme(&theme));
//! writer.add_slide(canvas.finish());
//! let bytes = writer.generate()?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), findoc_pptx::PptxError>(())
//! ```

pub mod canvas;
pub mod error;
pub mod shape;
pub mod slide;
pub mod widgets;
pub mod writer;

// Re-exports
pub use canvas::{Canvas, TextStyle};
pub use error::{PptxError, Result};
pub use shape::{
    Anchor, Bounds, Geometry, Outline, Shape, TextAlign, TextFrame, TextParagraph, TextSpan,
};
pub use slide::Slide;
pub use widgets::CHECK;
pub use writer::{DeckTheme, PptxWriter};

/// PPTX-related constants
pub mod constants {
    /// Widescreen 16:9 slide width in EMU (13.333" width)
    pub const WIDESCREEN_SLIDE_WIDTH_EMU: i64 = 12_192_000;

    /// Widescreen 16:9 slide height in EMU (7.5" height)
    pub const WIDESCREEN_SLIDE_HEIGHT_EMU: i64 = 6_858_000;

    /// PresentationML namespace
    pub const NS_PRESENTATION: &str =
        "http://schemas.openxmlformats.org/presentationml/2006/main";

    /// DrawingML namespace
    pub const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

    /// Office document relationships namespace (`r:` prefix)
    pub const NS_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

    /// Package relationships namespace (root of `.rels` parts)
    pub const NS_PACKAGE_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships";

    /// Slide relationship type
    pub const REL_TYPE_SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";

    /// Slide layout relationship type
    pub const REL_TYPE_SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";

    /// Slide master relationship type
    pub const REL_TYPE_SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";

    /// Theme relationship type
    pub const REL_TYPE_THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

    /// Presentation properties relationship type
    pub const REL_TYPE_PRES_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";

    /// View properties relationship type
    pub const REL_TYPE_VIEW_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps";

    /// Table styles relationship type
    pub const REL_TYPE_TABLE_STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
