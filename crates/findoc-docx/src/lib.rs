//! # findoc-docx
//!
//! WordprocessingML (`.docx`) generation for findoc.
//!
//! This crate provides:
//! - a small document model with direct formatting ([`Document`], [`Paragraph`], [`Table`])
//! - cell shading, per-edge cell borders and table borders
//! - [`DocxWriter`], which packages a document into a `.docx` archive
//! - [`Composer`], the styled building blocks of the user manual
//!
//! ## Example
//!
//! ```
//! use findoc_core::Theme;
//! use findoc_docx::{CalloutTone, Composer, DocxWriter, NormalStyle};
//!
//! let theme = Theme::default();
//! let mut composer = Composer::new(&theme);
//! composer.section_heading("1  Primeiros Passos", 1)?;
//! composer.body_paragraph("Clique em **Criar conta**.");
//! composer.callout(CalloutTone::Info, "Confirme o email antes de entrar.");
//!
//! let bytes = DocxWriter::new(NormalStyle::from_theme(&theme))
//!     .with_title("Manual do Usuario")
//!     .generate(&composer.finish())?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), findoc_docx::DocxError>(())
//! ```

pub mod archive;
pub mod compose;
pub mod document;
pub mod error;
pub mod writer;

pub use archive::OoxmlArchive;
pub use compose::{CalloutTone, Composer, Cover, TocEntry};
pub use document::{
    Alignment, BodyElement, Border, BorderStyle, Borders, Document, Edge, PageSetup, Paragraph,
    Run, RunProperties, Table, TableCell, TableRow, TableWidth, VerticalAlign,
};
pub use error::{DocxError, Result};
pub use writer::{DocxWriter, NormalStyle};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
