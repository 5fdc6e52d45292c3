//! Styled building blocks for the user manual
//!
//! [`Composer`] appends cover, table of contents, headings, body text,
//! callouts and tables to a [`Document`], styling everything from the
//! [`Theme`]. Body text, callout text and table cells pass through the
//! inline renderer, so `**bold**`, `*italic*` and `` `code` `` work there.

use findoc_core::{Length, RichTextRenderer, Rgb, StyleProfile, Theme};
use serde::Deserialize;
use tracing::trace;

use crate::document::{
    Alignment, Border, Document, Edge, PageSetup, Paragraph, Run, RunProperties, Table, TableCell,
    TableRow, TableWidth, VerticalAlign,
};
use crate::error::{DocxError, Result};

/// Line height of running text
const BODY_LINE: f64 = 16.0;

/// Color scheme of a callout box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutTone {
    #[default]
    Info,
    Warning,
    Danger,
}

impl CalloutTone {
    /// Background and accent border colors
    pub fn colors(&self, theme: &Theme) -> (Rgb, Rgb) {
        let p = &theme.palette;
        match self {
            CalloutTone::Info => (p.mint_50, p.emerald_600),
            CalloutTone::Warning => (p.amber_50, p.amber_600),
            CalloutTone::Danger => (p.rose_50, p.rose_600),
        }
    }
}

/// Text of the cover page and the closing footer
#[derive(Debug, Clone, PartialEq)]
pub struct Cover {
    pub app_name: String,
    pub subtitle: String,
    pub title: String,
    /// Version and date line
    pub edition: String,
}

/// One line of the table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub number: String,
    pub title: String,
}

impl TocEntry {
    /// Split a numbered heading such as `"11  Guia de Configuracao Inicial"`
    pub fn from_heading(text: &str) -> Option<Self> {
        let (number, title) = text.trim().split_once(char::is_whitespace)?;
        let title = title.trim_start();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            number: number.to_string(),
            title: title.to_string(),
        })
    }
}

/// Builds a styled [`Document`]
pub struct Composer<'a> {
    theme: &'a Theme,
    renderer: RichTextRenderer<'a>,
    doc: Document,
}

impl<'a> Composer<'a> {
    /// Composer for an A4 page
    pub fn new(theme: &'a Theme) -> Self {
        Self::with_page(theme, PageSetup::a4())
    }

    /// Composer for a custom page setup
    pub fn with_page(theme: &'a Theme, page: PageSetup) -> Self {
        Self {
            theme,
            renderer: RichTextRenderer::new(theme),
            doc: Document::new(page),
        }
    }

    /// Document built so far
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Take the finished document
    pub fn finish(self) -> Document {
        self.doc
    }

    fn rich(&self, text: &str, base: &StyleProfile) -> Paragraph {
        let mut paragraph = Paragraph::new();
        self.renderer.render_into(text, base, &mut paragraph);
        paragraph
    }

    fn plain(&self, text: &str, profile: StyleProfile, bold: bool, italic: bool) -> Run {
        Run::with_props(
            text,
            RunProperties {
                font: Some(profile.font),
                size: Some(profile.size),
                color: Some(profile.color),
                bold,
                italic,
            },
        )
    }

    /// Running text with 6pt after
    pub fn body_paragraph(&mut self, text: &str) {
        self.body_paragraph_spaced(text, Length::ZERO, Length::pt(6.0));
    }

    /// Running text with explicit spacing
    pub fn body_paragraph_spaced(&mut self, text: &str, before: Length, after: Length) {
        let paragraph = self
            .rich(text, &self.theme.body)
            .spacing(before, after)
            .line_exact(Length::pt(BODY_LINE));
        self.doc.push_paragraph(paragraph);
    }

    /// Tinted box with a thick accent border on the left
    pub fn callout(&mut self, tone: CalloutTone, text: &str) {
        let (background, accent) = tone.colors(self.theme);
        let thin = Border::single(4, background);

        let paragraph = self
            .rich(text, &self.theme.compact)
            .spacing(Length::pt(4.0), Length::pt(4.0));
        let mut cell = TableCell::new(paragraph);
        cell.set_shading(background);
        cell.set_borders(&[
            (Edge::Top, thin),
            (Edge::Bottom, thin),
            (Edge::Right, thin),
            (Edge::Left, Border::single(18, accent)),
        ]);

        let mut table = Table::new(vec![self.doc.page.text_width()]).align(Alignment::Center);
        table.push_row(TableRow::new(vec![cell]));
        self.doc.push_table(table);

        self.spacer(Length::pt(2.0), Length::pt(2.0));
        trace!(?tone, "Callout added");
    }

    /// Full-width table with a dark header row and zebra-striped body
    ///
    /// With `steps` set, the first column holds step numbers and is centred
    /// in the accent color instead of going through the renderer.
    pub fn styled_table<S: AsRef<str>>(
        &mut self,
        headers: &[S],
        rows: &[Vec<S>],
        steps: bool,
    ) -> Result<()> {
        if headers.is_empty() {
            return Err(DocxError::invalid_structure("table has no columns"));
        }
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != headers.len())
        {
            return Err(DocxError::invalid_structure(format!(
                "row {} has {} cells, expected {}",
                index + 1,
                row.len(),
                headers.len()
            )));
        }

        let palette = &self.theme.palette;
        let columns = headers.len() as i64;
        let column = Length::emu(self.doc.page.text_width().to_emu() / columns);

        let mut table = Table::new(vec![column; headers.len()])
            .width(TableWidth::Pct(5000))
            .align(Alignment::Center);
        table.set_borders(Border::single(4, palette.slate_300));

        let header_cells = headers
            .iter()
            .map(|header| {
                let text = self.theme.body_text(9.0, palette.white);
                let paragraph = Paragraph::new()
                    .align(Alignment::Left)
                    .spacing(Length::pt(5.0), Length::pt(5.0))
                    .with_run(self.plain(header.as_ref(), text, true, false));
                let mut cell = TableCell::new(paragraph).v_align(VerticalAlign::Center);
                cell.set_shading(palette.slate_900);
                cell
            })
            .collect();
        table.push_row(TableRow::new(header_cells).header());

        for (r, row) in rows.iter().enumerate() {
            let background = if r % 2 == 0 { palette.slate_50 } else { palette.white };
            let cells = row
                .iter()
                .enumerate()
                .map(|(c, text)| {
                    let content = if steps && c == 0 {
                        let step = self.theme.body_text(9.5, palette.emerald_600);
                        Paragraph::new()
                            .align(Alignment::Center)
                            .with_run(self.plain(text.as_ref(), step, true, false))
                    } else {
                        self.rich(text.as_ref(), &self.theme.compact)
                    };
                    let paragraph = content.spacing(Length::pt(4.0), Length::pt(4.0));
                    let mut cell = TableCell::new(paragraph).v_align(VerticalAlign::Center);
                    cell.set_shading(background);
                    cell
                })
                .collect();
            table.push_row(TableRow::new(cells));
        }

        self.doc.push_table(table);
        self.spacer(Length::pt(2.0), Length::pt(6.0));
        Ok(())
    }

    /// Chapter (1), section (2) or subsection (3) heading
    ///
    /// A chapter heading is followed by a short accent bar.
    pub fn section_heading(&mut self, text: &str, level: u8) -> Result<()> {
        let palette = &self.theme.palette;
        let (before, after, size, color) = match level {
            1 => (28.0, 4.0, 20.0, palette.slate_900),
            2 => (18.0, 6.0, 14.0, palette.emerald_600),
            3 => (12.0, 4.0, 11.0, palette.slate_900),
            _ => {
                return Err(DocxError::invalid_structure(format!(
                    "heading level {level} is not between 1 and 3"
                )))
            }
        };

        let run = self.plain(text, self.theme.title_text(size, color), true, false);
        self.doc.push_paragraph(
            Paragraph::new()
                .spacing(Length::pt(before), Length::pt(after))
                .with_run(run),
        );

        if level == 1 {
            self.accent_bar(Length::inches(1.5));
            self.spacer(Length::ZERO, Length::pt(10.0));
        }
        Ok(())
    }

    /// One-cell table filled with the accent color
    fn accent_bar(&mut self, width: Length) {
        let accent = self.theme.palette.emerald_600;
        let mut paragraph = Paragraph::new().with_run(Run::with_props(
            " ",
            RunProperties {
                size: Some(2.0),
                ..RunProperties::default()
            },
        ));
        paragraph.remove_spacing();

        let mut cell = TableCell::new(paragraph);
        cell.set_shading(accent);

        let mut table = Table::new(vec![width])
            .width(TableWidth::Dxa(width))
            .align(Alignment::Left);
        table.set_borders(Border::single(0, accent));
        table.push_row(TableRow::new(vec![cell]));
        self.doc.push_table(table);
    }

    fn spacer(&mut self, before: Length, after: Length) {
        self.doc
            .push_paragraph(Paragraph::new().spacing(before, after));
    }

    /// Centred title page followed by a page break
    pub fn cover_page(&mut self, cover: &Cover) {
        let palette = &self.theme.palette;

        for _ in 0..6 {
            self.doc
                .push_paragraph(Paragraph::new().space_after(Length::pt(12.0)));
        }

        let app_name = self.plain(&cover.app_name, self.theme.title_text(48.0, palette.emerald_600), true, false);
        self.doc
            .push_paragraph(Paragraph::new().align(Alignment::Center).with_run(app_name));

        let subtitle = self.plain(&cover.subtitle, self.theme.title_text(18.0, palette.slate_500), false, false);
        self.doc.push_paragraph(
            Paragraph::new()
                .align(Alignment::Center)
                .space_before(Length::pt(4.0))
                .with_run(subtitle),
        );

        let divider = Run::with_props(
            "____________________",
            RunProperties {
                size: Some(14.0),
                color: Some(palette.slate_300),
                ..RunProperties::default()
            },
        );
        self.doc.push_paragraph(
            Paragraph::new()
                .align(Alignment::Center)
                .spacing(Length::pt(20.0), Length::pt(20.0))
                .with_run(divider),
        );

        let title = self.plain(&cover.title, self.theme.title_text(26.0, palette.slate_900), true, false);
        self.doc
            .push_paragraph(Paragraph::new().align(Alignment::Center).with_run(title));

        let edition = self.plain(&cover.edition, self.theme.body_text(11.0, palette.slate_500), false, false);
        self.doc.push_paragraph(
            Paragraph::new()
                .align(Alignment::Center)
                .space_before(Length::pt(30.0))
                .with_run(edition),
        );

        self.page_break();
    }

    /// Table of contents page followed by a page break
    pub fn toc_page(&mut self, title: &str, entries: &[TocEntry]) {
        let palette = &self.theme.palette;

        let heading = self.plain(title, self.theme.title_text(24.0, palette.slate_900), true, false);
        self.doc.push_paragraph(
            Paragraph::new()
                .spacing(Length::pt(20.0), Length::pt(20.0))
                .with_run(heading),
        );
        self.accent_bar(Length::inches(1.0));
        self.doc
            .push_paragraph(Paragraph::new().space_after(Length::pt(8.0)));

        for entry in entries {
            let number = self.plain(
                &format!("{}   ", entry.number),
                self.theme.body_text(11.0, palette.emerald_600),
                true,
                false,
            );
            let title = self.plain(&entry.title, self.theme.body_text(11.0, palette.slate_700), false, false);
            self.doc.push_paragraph(
                Paragraph::new()
                    .spacing(Length::pt(3.0), Length::pt(3.0))
                    .indent_left(Length::cm(0.5))
                    .with_run(number)
                    .with_run(title),
            );
        }

        self.page_break();
    }

    /// Hard page break
    pub fn page_break(&mut self) {
        self.doc.push_page_break();
    }

    /// Closing brand line and edition
    pub fn footer(&mut self, cover: &Cover) {
        let palette = &self.theme.palette;

        let brand = self.plain(&cover.app_name, self.theme.title_text(12.0, palette.emerald_600), true, false);
        let tagline = self.plain(
            &format!("  \u{2014}  {}", cover.subtitle),
            self.theme.body_text(10.0, palette.slate_500),
            false,
            false,
        );
        self.doc.push_paragraph(
            Paragraph::new()
                .align(Alignment::Center)
                .space_before(Length::pt(40.0))
                .with_run(brand)
                .with_run(tagline),
        );

        let edition = self.plain(&cover.edition, self.theme.body_text(9.0, palette.slate_500), false, true);
        self.doc
            .push_paragraph(Paragraph::new().align(Alignment::Center).with_run(edition));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::BodyElement;

    fn cover() -> Cover {
        Cover {
            app_name: "FinApp".to_string(),
            subtitle: "Gestao Financeira Pessoal".to_string(),
            title: "Manual do Usuario".to_string(),
            edition: "Versao 2.0  |  Fevereiro 2026".to_string(),
        }
    }

    #[test]
    fn test_body_paragraph() {
        let theme = Theme::default();
        let mut composer = Composer::new(&theme);
        composer.body_paragraph("Use `Ctrl+K` para **buscar**.");

        let doc = composer.finish();
        let p = doc.paragraphs().next().unwrap();
        assert_eq!(p.space_after, Some(Length::pt(6.0)));
        assert_eq!(p.line_exact, Some(Length::pt(16.0)));
        assert_eq!(p.text(), "Use Ctrl+K para buscar.");
        assert_eq!(p.runs[1].props.font.as_deref(), Some("Cascadia Code"));
        assert!(p.runs[3].props.bold);
    }

    #[test]
    fn test_callout_tones() {
        let theme = Theme::default();
        for (tone, accent) in [
            (CalloutTone::Info, "059669"),
            (CalloutTone::Warning, "D97706"),
            (CalloutTone::Danger, "E11D48"),
        ] {
            let mut composer = Composer::new(&theme);
            composer.callout(tone, "**Dica:** revise o mes.");
            let doc = composer.finish();

            let table = doc.tables().next().unwrap();
            let cell = &table.rows[0].cells[0];
            let left = cell.borders.get(Edge::Left).unwrap();
            assert_eq!(left.size, 18);
            assert_eq!(left.color.hex(), accent);
            assert_eq!(cell.borders.get(Edge::Top).unwrap().color, cell.shading.unwrap());
            assert_eq!(cell.paragraphs[0].runs[0].props.size, Some(9.5));

            // Spacer paragraph after the box
            assert!(matches!(doc.body.last(), Some(BodyElement::Paragraph(_))));
        }
    }

    #[test]
    fn test_styled_step_table() {
        let theme = Theme::default();
        let mut composer = Composer::new(&theme);
        composer
            .styled_table(
                &["Passo", "Acao"],
                &[vec!["1", "Clique em **Criar conta**."], vec!["2", "Confirme o email."]],
                true,
            )
            .unwrap();
        let doc = composer.finish();
        let table = doc.tables().next().unwrap();

        assert_eq!(table.width, TableWidth::Pct(5000));
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.rows.len(), 3);
        assert!(table.rows[0].is_header);

        let header = &table.rows[0].cells[0];
        assert_eq!(header.shading, Some(theme.palette.slate_900));
        assert_eq!(header.paragraphs[0].runs[0].props.color, Some(theme.palette.white));

        let step = &table.rows[1].cells[0].paragraphs[0];
        assert_eq!(step.alignment, Some(Alignment::Center));
        assert!(step.runs[0].props.bold);
        assert_eq!(step.runs[0].props.color, Some(theme.palette.emerald_600));

        assert_eq!(table.rows[1].cells[1].shading, Some(theme.palette.slate_50));
        assert_eq!(table.rows[2].cells[1].shading, Some(theme.palette.white));
        assert_eq!(table.rows[1].cells[1].paragraphs[0].text(), "Clique em Criar conta.");
    }

    #[test]
    fn test_styled_table_rejects_ragged_rows() {
        let theme = Theme::default();
        let mut composer = Composer::new(&theme);
        let err = composer
            .styled_table(&["A", "B"], &[vec!["1", "2"], vec!["3"]], false)
            .unwrap_err();
        assert_eq!(err.code(), "DOCX005");
        assert!(err.to_string().contains("row 2"));
        assert!(composer.document().body.is_empty());
    }

    #[test]
    fn test_headings() {
        let theme = Theme::default();
        let mut composer = Composer::new(&theme);
        composer.section_heading("1  Primeiros Passos", 1).unwrap();
        composer.section_heading("1.1  Criando sua conta", 2).unwrap();
        composer.section_heading("Detalhes", 3).unwrap();
        assert!(composer.section_heading("Fundo", 4).is_err());

        let doc = composer.finish();
        // Chapter heading, bar, spacer, section, subsection
        assert_eq!(doc.body.len(), 5);

        let bar = doc.tables().next().unwrap();
        assert_eq!(bar.width, TableWidth::Dxa(Length::inches(1.5)));
        assert_eq!(bar.rows[0].cells[0].shading, Some(theme.palette.emerald_600));

        let sizes: Vec<Option<f32>> = doc
            .paragraphs()
            .filter(|p| !p.runs.is_empty())
            .map(|p| p.runs[0].props.size)
            .collect();
        assert_eq!(sizes, vec![Some(20.0), Some(14.0), Some(11.0)]);
    }

    #[test]
    fn test_cover_and_toc() {
        let theme = Theme::default();
        let mut composer = Composer::new(&theme);
        composer.cover_page(&cover());
        composer.toc_page(
            "Sumario",
            &[
                TocEntry::from_heading("1  Primeiros Passos").unwrap(),
                TocEntry::from_heading("10  Configuracoes").unwrap(),
            ],
        );
        let doc = composer.finish();

        let breaks = doc
            .body
            .iter()
            .filter(|el| matches!(el, BodyElement::PageBreak))
            .count();
        assert_eq!(breaks, 2);

        let texts: Vec<String> = doc.paragraphs().map(|p| p.text()).collect();
        assert!(texts.contains(&"FinApp".to_string()));
        assert!(texts.contains(&"Versao 2.0  |  Fevereiro 2026".to_string()));
        assert!(texts.contains(&"10   Configuracoes".to_string()));
    }

    #[test]
    fn test_footer() {
        let theme = Theme::default();
        let mut composer = Composer::new(&theme);
        composer.footer(&cover());
        let doc = composer.finish();

        let paragraphs: Vec<&Paragraph> = doc.paragraphs().collect();
        assert_eq!(paragraphs[0].text(), "FinApp  \u{2014}  Gestao Financeira Pessoal");
        assert!(paragraphs[1].runs[0].props.italic);
    }

    #[test]
    fn test_toc_entry_from_heading() {
        assert_eq!(
            TocEntry::from_heading("11  Guia de Configuracao Inicial"),
            Some(TocEntry {
                number: "11".to_string(),
                title: "Guia de Configuracao Inicial".to_string(),
            })
        );
        assert_eq!(TocEntry::from_heading("Sem numero"), Some(TocEntry {
            number: "Sem".to_string(),
            title: "numero".to_string(),
        }));
        assert!(TocEntry::from_heading("Solo").is_none());
    }
}
