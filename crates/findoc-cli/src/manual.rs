//! The FinApp user manual
//!
//! The body of the manual is data: a TOML file with a `[meta]` table and a
//! list of `[[blocks]]` tagged by `kind`. The default content is embedded in
//! the binary; `--content` points at another file with the same layout.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use findoc_core::{Length, Theme};
use findoc_docx::{CalloutTone, Composer, Cover, Document, DocxWriter, NormalStyle, TocEntry};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::Settings;

/// Manual content shipped with the binary
pub const DEFAULT_CONTENT: &str = include_str!("../content/manual.toml");

/// Cover and table-of-contents text
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManualMeta {
    pub app_name: String,
    pub subtitle: String,
    pub title: String,
    pub edition: String,
    pub toc_title: String,
}

impl ManualMeta {
    pub fn cover(&self) -> Cover {
        Cover {
            app_name: self.app_name.clone(),
            subtitle: self.subtitle.clone(),
            title: self.title.clone(),
            edition: self.edition.clone(),
        }
    }
}

/// One piece of the manual body
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Block {
    Heading {
        level: u8,
        text: String,
    },
    Paragraph {
        text: String,
        /// Points
        space_before: Option<f64>,
        /// Points
        space_after: Option<f64>,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        #[serde(default)]
        steps: bool,
    },
    Callout {
        #[serde(default)]
        tone: CalloutTone,
        text: String,
    },
}

/// Parsed manual content
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManualContent {
    pub meta: ManualMeta,
    pub blocks: Vec<Block>,
}

impl ManualContent {
    /// Parse and validate content from TOML
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let content: ManualContent = toml::from_str(toml_str).context("Invalid manual content")?;
        content.validate()?;
        debug!(blocks = content.blocks.len(), "Manual content loaded");
        Ok(content)
    }

    /// Load from `path`, or the embedded content when `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read content file: {}", path.display()))?;
                Self::from_toml_str(&text)
                    .with_context(|| format!("Failed to load content file: {}", path.display()))
            }
            None => Self::from_toml_str(DEFAULT_CONTENT),
        }
    }

    /// Reject heading levels outside 1-3 and ragged tables
    pub fn validate(&self) -> Result<()> {
        for (i, block) in self.blocks.iter().enumerate() {
            let number = i + 1;
            match block {
                Block::Heading { level, text } if !(1..=3).contains(level) => {
                    bail!("block {number}: heading '{text}' has level {level}, expected 1 to 3");
                }
                Block::Table { headers, rows, .. } => {
                    if headers.is_empty() {
                        bail!("block {number}: table has no headers");
                    }
                    if let Some((r, row)) = rows
                        .iter()
                        .enumerate()
                        .find(|(_, row)| row.len() != headers.len())
                    {
                        bail!(
                            "block {number}: table row {} has {} cells, expected {}",
                            r + 1,
                            row.len(),
                            headers.len()
                        );
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Table of contents from the chapter (level 1) headings
    pub fn toc_entries(&self) -> Vec<TocEntry> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading { level: 1, text } => {
                    let entry = TocEntry::from_heading(text);
                    if entry.is_none() {
                        warn!(heading = %text, "Chapter heading has no number, left out of contents");
                    }
                    entry
                }
                _ => None,
            })
            .collect()
    }

    /// Lay out the whole manual: cover, contents, body, footer
    pub fn build(&self, theme: &Theme) -> Result<Document> {
        let cover = self.meta.cover();
        let mut composer = Composer::new(theme);

        composer.cover_page(&cover);
        composer.toc_page(&self.meta.toc_title, &self.toc_entries());

        for (i, block) in self.blocks.iter().enumerate() {
            let number = i + 1;
            match block {
                Block::Heading { level, text } => composer
                    .section_heading(text, *level)
                    .with_context(|| format!("block {number}"))?,
                Block::Paragraph {
                    text,
                    space_before: None,
                    space_after: None,
                } => composer.body_paragraph(text),
                Block::Paragraph {
                    text,
                    space_before,
                    space_after,
                } => composer.body_paragraph_spaced(
                    text,
                    Length::pt(space_before.unwrap_or(0.0)),
                    Length::pt(space_after.unwrap_or(6.0)),
                ),
                Block::Table {
                    headers,
                    rows,
                    steps,
                } => composer
                    .styled_table(headers, rows, *steps)
                    .with_context(|| format!("block {number}"))?,
                Block::Callout { tone, text } => composer.callout(*tone, text),
            }
        }

        composer.footer(&cover);
        Ok(composer.finish())
    }
}

/// Build the manual and package it as `.docx` bytes
pub fn render(content: &ManualContent, settings: &Settings) -> Result<Vec<u8>> {
    let theme = &settings.theme;
    let doc = content.build(theme)?;

    let bytes = DocxWriter::new(NormalStyle::from_theme(theme))
        .with_title(format!("{} - {}", content.meta.app_name, content.meta.title))
        .with_subject(content.meta.subtitle.as_str())
        .with_metadata(settings.metadata.clone())
        .generate(&doc)
        .context("Failed to generate the manual")?;

    info!(
        chapters = content.toc_entries().len(),
        elements = doc.body.len(),
        "Manual built"
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use findoc_docx::BodyElement;

    const SMALL: &str = r#"
[meta]
app_name = "FinApp"
subtitle = "Gestao Financeira Pessoal"
title = "Manual do Usuario"
edition = "Versao 2.0"
toc_title = "Sumario"

[[blocks]]
kind = "heading"
level = 1
text = "1  Primeiros Passos"

[[blocks]]
kind = "paragraph"
text = "Clique em **Entrar**."

[[blocks]]
kind = "table"
steps = true
headers = ["Passo", "Acao"]
rows = [["1", "Abra o app."]]

[[blocks]]
kind = "callout"
tone = "warning"
text = "Confira o saldo."

[[blocks]]
kind = "heading"
level = 1
text = "2  Dashboard"
"#;

    #[test]
    fn test_embedded_content_is_valid() {
        let content = ManualContent::from_toml_str(DEFAULT_CONTENT).unwrap();

        let toc = content.toc_entries();
        assert_eq!(toc.len(), 12);
        assert_eq!(toc[0].number, "1");
        assert_eq!(toc[0].title, "Primeiros Passos");
        assert_eq!(content.meta.app_name, "FinApp");
    }

    #[test]
    fn test_block_kinds() {
        let content = ManualContent::from_toml_str(SMALL).unwrap();

        assert_eq!(content.blocks.len(), 5);
        assert!(matches!(
            &content.blocks[2],
            Block::Table { steps: true, rows, .. } if rows.len() == 1
        ));
        assert!(matches!(
            content.blocks[3],
            Block::Callout {
                tone: CalloutTone::Warning,
                ..
            }
        ));
        assert!(matches!(
            content.blocks[1],
            Block::Paragraph {
                space_after: None,
                ..
            }
        ));
    }

    #[test]
    fn test_bad_heading_level() {
        let toml = SMALL.replacen("level = 1", "level = 4", 1);
        let err = ManualContent::from_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("level 4"));
    }

    #[test]
    fn test_ragged_table() {
        let toml = SMALL.replace(r#"rows = [["1", "Abra o app."]]"#, r#"rows = [["1"]]"#);
        let err = ManualContent::from_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("row 1 has 1 cells, expected 2"));
    }

    #[test]
    fn test_unknown_kind() {
        let toml = SMALL.replacen(r#"kind = "callout""#, r#"kind = "sidebar""#, 1);
        assert!(ManualContent::from_toml_str(&toml).is_err());
    }

    #[test]
    fn test_build_layout() {
        let content = ManualContent::from_toml_str(SMALL).unwrap();
        let doc = content.build(&Theme::default()).unwrap();

        let breaks = doc
            .body
            .iter()
            .filter(|e| matches!(e, BodyElement::PageBreak))
            .count();
        assert_eq!(breaks, 2);

        // Contents bar, two chapter bars, step table, callout
        assert_eq!(doc.tables().count(), 5);

        let last = doc.paragraphs().last().unwrap();
        assert_eq!(last.text(), "Versao 2.0");
    }

    #[test]
    fn test_render_produces_package() {
        let content = ManualContent::from_toml_str(SMALL).unwrap();
        let bytes = render(&content, &Settings::default()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
