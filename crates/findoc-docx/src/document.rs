//! WordprocessingML document model
//!
//! Only what the generated documents use is modelled: directly formatted
//! paragraphs and runs, tables with per-cell shading and borders, and
//! page breaks. Everything is plain data; [`crate::DocxWriter`] turns it
//! into XML.

use std::collections::BTreeMap;

use findoc_core::{Length, ResolvedStyle, Rgb, RunSink};

/// Horizontal alignment of a paragraph or table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Value of `w:jc`
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }
}

/// Vertical alignment of cell content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

impl VerticalAlign {
    /// Value of `w:vAlign`
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAlign::Top => "top",
            VerticalAlign::Center => "center",
            VerticalAlign::Bottom => "bottom",
        }
    }
}

/// Direct run formatting; `None` inherits from the Normal style
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunProperties {
    pub font: Option<String>,
    pub size: Option<f32>,
    pub color: Option<Rgb>,
    pub bold: bool,
    pub italic: bool,
}

impl From<&ResolvedStyle> for RunProperties {
    fn from(style: &ResolvedStyle) -> Self {
        Self {
            font: Some(style.font.clone()),
            size: Some(style.size),
            color: Some(style.color),
            bold: style.bold,
            italic: style.italic,
        }
    }
}

/// A run of text with one set of properties
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub props: RunProperties,
}

impl Run {
    /// Fully styled run
    pub fn styled(text: impl Into<String>, style: &ResolvedStyle) -> Self {
        Self {
            text: text.into(),
            props: RunProperties::from(style),
        }
    }

    /// Run with explicit properties
    pub fn with_props(text: impl Into<String>, props: RunProperties) -> Self {
        Self {
            text: text.into(),
            props,
        }
    }
}

/// A paragraph with direct formatting
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub alignment: Option<Alignment>,
    pub space_before: Option<Length>,
    pub space_after: Option<Length>,
    /// Exact line height (`w:lineRule="exact"`)
    pub line_exact: Option<Length>,
    pub indent_left: Option<Length>,
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Empty paragraph inheriting everything from Normal
    pub fn new() -> Self {
        Self::default()
    }

    /// Set alignment
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set space before and after
    pub fn spacing(mut self, before: Length, after: Length) -> Self {
        self.space_before = Some(before);
        self.space_after = Some(after);
        self
    }

    /// Set space before only
    pub fn space_before(mut self, before: Length) -> Self {
        self.space_before = Some(before);
        self
    }

    /// Set space after only
    pub fn space_after(mut self, after: Length) -> Self {
        self.space_after = Some(after);
        self
    }

    /// Set an exact line height
    pub fn line_exact(mut self, line: Length) -> Self {
        self.line_exact = Some(line);
        self
    }

    /// Set the left indent
    pub fn indent_left(mut self, indent: Length) -> Self {
        self.indent_left = Some(indent);
        self
    }

    /// Append a run
    pub fn with_run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    /// Append a styled text run
    pub fn push_text(&mut self, text: impl Into<String>, style: &ResolvedStyle) {
        self.runs.push(Run::styled(text, style));
    }

    /// Zero the space before and after
    pub fn remove_spacing(&mut self) {
        self.space_before = Some(Length::ZERO);
        self.space_after = Some(Length::ZERO);
    }

    /// Concatenated run text
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

impl RunSink for Paragraph {
    fn append_run(&mut self, text: &str, style: &ResolvedStyle) {
        self.push_text(text, style);
    }
}

/// Line style of a border
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Single,
    Nil,
}

impl BorderStyle {
    /// Value of `w:val`
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::Single => "single",
            BorderStyle::Nil => "nil",
        }
    }
}

/// One border edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub style: BorderStyle,
    /// Width in eighths of a point
    pub size: u32,
    pub color: Rgb,
}

impl Border {
    /// Single line of `size` eighths of a point
    pub fn single(size: u32, color: Rgb) -> Self {
        Self {
            style: BorderStyle::Single,
            size,
            color,
        }
    }

    /// No border
    pub fn none() -> Self {
        Self {
            style: BorderStyle::Nil,
            size: 0,
            color: Rgb::new(0, 0, 0),
        }
    }
}

/// Border edge, ordered as WordprocessingML expects the child elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Edge {
    Top,
    Left,
    Bottom,
    Right,
    InsideH,
    InsideV,
}

impl Edge {
    /// Element local name
    pub fn as_str(&self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Left => "left",
            Edge::Bottom => "bottom",
            Edge::Right => "right",
            Edge::InsideH => "insideH",
            Edge::InsideV => "insideV",
        }
    }

    /// The four outer edges
    pub const OUTER: [Edge; 4] = [Edge::Top, Edge::Left, Edge::Bottom, Edge::Right];
}

/// A set of borders keyed by edge; setting an edge replaces it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Borders {
    edges: BTreeMap<Edge, Border>,
}

impl Borders {
    /// Same border on the four outer edges and both inside edges
    pub fn all(border: Border) -> Self {
        let mut borders = Self::default();
        for edge in Edge::OUTER {
            borders.set(edge, border);
        }
        borders.set(Edge::InsideH, border);
        borders.set(Edge::InsideV, border);
        borders
    }

    /// Set or replace one edge
    pub fn set(&mut self, edge: Edge, border: Border) {
        self.edges.insert(edge, border);
    }

    /// Border on `edge`, if any
    pub fn get(&self, edge: Edge) -> Option<&Border> {
        self.edges.get(&edge)
    }

    /// Edges in element order
    pub fn iter(&self) -> impl Iterator<Item = (Edge, &Border)> {
        self.edges.iter().map(|(edge, border)| (*edge, border))
    }

    /// True if no edge is set
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Preferred width of a table or cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableWidth {
    Auto,
    /// Fiftieths of a percent (5000 = full width)
    Pct(u32),
    /// Absolute width
    Dxa(Length),
}

/// A table cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableCell {
    pub width: Option<TableWidth>,
    pub borders: Borders,
    /// Background fill
    pub shading: Option<Rgb>,
    pub v_align: Option<VerticalAlign>,
    pub paragraphs: Vec<Paragraph>,
}

impl TableCell {
    /// Cell holding one paragraph
    pub fn new(paragraph: Paragraph) -> Self {
        Self {
            paragraphs: vec![paragraph],
            ..Self::default()
        }
    }

    /// Set the background fill
    pub fn set_shading(&mut self, fill: Rgb) {
        self.shading = Some(fill);
    }

    /// Replace the border on each listed edge, leaving other edges alone
    pub fn set_borders(&mut self, edges: &[(Edge, Border)]) {
        for (edge, border) in edges {
            self.borders.set(*edge, *border);
        }
    }

    /// Set vertical alignment
    pub fn v_align(mut self, v_align: VerticalAlign) -> Self {
        self.v_align = Some(v_align);
        self
    }

    /// First paragraph, created on demand
    pub fn first_paragraph_mut(&mut self) -> &mut Paragraph {
        if self.paragraphs.is_empty() {
            self.paragraphs.push(Paragraph::new());
        }
        &mut self.paragraphs[0]
    }
}

/// A table row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    /// Repeat this row at the top of each page
    pub is_header: bool,
}

impl TableRow {
    /// Row of cells
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: false,
        }
    }

    /// Mark as a repeating header row
    pub fn header(mut self) -> Self {
        self.is_header = true;
        self
    }
}

/// A table
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub width: TableWidth,
    pub alignment: Option<Alignment>,
    pub borders: Borders,
    /// Column widths for `w:tblGrid`
    pub grid: Vec<Length>,
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Empty table with the given column widths
    pub fn new(grid: Vec<Length>) -> Self {
        Self {
            width: TableWidth::Auto,
            alignment: None,
            borders: Borders::default(),
            grid,
            rows: Vec::new(),
        }
    }

    /// Set preferred width
    pub fn width(mut self, width: TableWidth) -> Self {
        self.width = width;
        self
    }

    /// Set alignment on the page
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set the same border on all outer and inside edges
    pub fn set_borders(&mut self, border: Border) {
        self.borders = Borders::all(border);
    }

    /// Append a row
    pub fn push_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Number of grid columns
    pub fn column_count(&self) -> usize {
        self.grid.len()
    }
}

/// Page size and margins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSetup {
    pub width: Length,
    pub height: Length,
    pub margin_top: Length,
    pub margin_bottom: Length,
    pub margin_left: Length,
    pub margin_right: Length,
}

impl PageSetup {
    /// A4 portrait with the manual's margins
    pub fn a4() -> Self {
        Self {
            width: Length::cm(21.0),
            height: Length::cm(29.7),
            margin_top: Length::cm(2.5),
            margin_bottom: Length::cm(2.0),
            margin_left: Length::cm(2.5),
            margin_right: Length::cm(2.5),
        }
    }

    /// Width between the side margins
    pub fn text_width(&self) -> Length {
        self.width - self.margin_left - self.margin_right
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::a4()
    }
}

/// Top-level body content
#[derive(Debug, Clone, PartialEq)]
pub enum BodyElement {
    Paragraph(Paragraph),
    Table(Table),
    PageBreak,
}

/// A complete document body with its page setup
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub page: PageSetup,
    pub body: Vec<BodyElement>,
}

impl Document {
    /// Empty document
    pub fn new(page: PageSetup) -> Self {
        Self {
            page,
            body: Vec::new(),
        }
    }

    /// Append a paragraph
    pub fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.body.push(BodyElement::Paragraph(paragraph));
    }

    /// Append a table
    pub fn push_table(&mut self, table: Table) {
        self.body.push(BodyElement::Table(table));
    }

    /// Append a page break
    pub fn push_page_break(&mut self) {
        self.body.push(BodyElement::PageBreak);
    }

    /// Top-level tables in order
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.body.iter().filter_map(|el| match el {
            BodyElement::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Top-level paragraphs in order
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.body.iter().filter_map(|el| match el {
            BodyElement::Paragraph(p) => Some(p),
            _ => None,
        })
    }
}
