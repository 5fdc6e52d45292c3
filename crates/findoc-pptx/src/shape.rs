//! Shapes and the text they carry.
//!
//! A [`Shape`] is one `p:sp` element: a preset geometry placed on the slide
//! with an optional solid fill, an optional outline and an optional
//! [`TextFrame`]. Text boxes are shapes with no fill and no outline.

use findoc_core::{Length, ResolvedStyle, Rgb, RunSink};

/// Preset geometry of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Rect,
    RoundRect,
    Ellipse,
}

impl Geometry {
    /// DrawingML preset name (`a:prstGeom/@prst`)
    pub fn preset(&self) -> &'static str {
        match self {
            Geometry::Rect => "rect",
            Geometry::RoundRect => "roundRect",
            Geometry::Ellipse => "ellipse",
        }
    }

    /// Base of the generated shape name
    pub fn display_name(&self) -> &'static str {
        match self {
            Geometry::Rect => "Rectangle",
            Geometry::RoundRect => "Rounded Rectangle",
            Geometry::Ellipse => "Oval",
        }
    }
}

/// Position and size of a shape, in EMU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: Length,
    pub y: Length,
    pub width: Length,
    pub height: Length,
}

impl Bounds {
    pub fn new(x: Length, y: Length, width: Length, height: Length) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounds given entirely in inches
    pub fn inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            Length::inches(x),
            Length::inches(y),
            Length::inches(width),
            Length::inches(height),
        )
    }

    /// Same size, moved by `dx`/`dy`
    pub fn offset(self, dx: Length, dy: Length) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Shrink by `inset` on the left and right, keeping the top edge
    pub fn inset_x(self, inset: Length) -> Self {
        Self {
            x: self.x + inset,
            width: self.width - inset * 2,
            ..self
        }
    }

    pub fn bottom(&self) -> Length {
        self.y + self.height
    }
}

/// Line drawn around a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Rgb,
    pub width: Length,
}

impl Outline {
    /// A 1pt line
    pub fn thin(color: Rgb) -> Self {
        Self {
            color,
            width: Length::pt(1.0),
        }
    }
}

/// Horizontal alignment of a text paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "l",
            TextAlign::Center => "ctr",
            TextAlign::Right => "r",
        }
    }
}

/// Vertical anchoring of text inside its frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl Anchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Top => "t",
            Anchor::Middle => "ctr",
            Anchor::Bottom => "b",
        }
    }
}

/// A styled run inside a text paragraph
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    /// Text; `\n` becomes a line break
    pub text: String,
    pub style: ResolvedStyle,
}

/// A paragraph inside a text frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextParagraph {
    pub align: TextAlign,
    /// Exact line pitch
    pub line_spacing: Option<Length>,
    pub space_before: Length,
    pub space_after: Length,
    pub spans: Vec<TextSpan>,
}

impl TextParagraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn line_spacing(mut self, spacing: Option<Length>) -> Self {
        self.line_spacing = spacing;
        self
    }

    pub fn spacing(mut self, before: Length, after: Length) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    /// Append a span
    pub fn with_span(mut self, text: impl Into<String>, style: ResolvedStyle) -> Self {
        self.spans.push(TextSpan {
            text: text.into(),
            style,
        });
        self
    }

    /// Visible text, line breaks included
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl RunSink for TextParagraph {
    fn append_run(&mut self, text: &str, style: &ResolvedStyle) {
        self.spans.push(TextSpan {
            text: text.to_string(),
            style: style.clone(),
        });
    }
}

/// The text body of a shape
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    pub word_wrap: bool,
    pub anchor: Anchor,
    pub paragraphs: Vec<TextParagraph>,
}

impl Default for TextFrame {
    fn default() -> Self {
        Self {
            word_wrap: true,
            anchor: Anchor::Top,
            paragraphs: Vec::new(),
        }
    }
}

impl TextFrame {
    pub fn new(anchor: Anchor) -> Self {
        Self {
            anchor,
            ..Self::default()
        }
    }

    pub fn push(&mut self, paragraph: TextParagraph) {
        self.paragraphs.push(paragraph);
    }

    /// Visible text with paragraphs joined by newlines
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(TextParagraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One shape on a slide
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub geometry: Geometry,
    pub bounds: Bounds,
    pub fill: Option<Rgb>,
    pub outline: Option<Outline>,
    pub text: Option<TextFrame>,
    /// Written with `txBox="1"`
    pub is_text_box: bool,
}

impl Shape {
    /// Filled autoshape without an outline
    pub fn filled(geometry: Geometry, bounds: Bounds, fill: Rgb) -> Self {
        Self {
            geometry,
            bounds,
            fill: Some(fill),
            outline: None,
            text: None,
            is_text_box: false,
        }
    }

    /// Unfilled text box
    pub fn text_box(bounds: Bounds, frame: TextFrame) -> Self {
        Self {
            geometry: Geometry::Rect,
            bounds,
            fill: None,
            outline: None,
            text: Some(frame),
            is_text_box: true,
        }
    }

    pub fn with_outline(mut self, outline: Option<Outline>) -> Self {
        self.outline = outline;
        self
    }

    /// Visible text of the shape, empty for plain autoshapes
    pub fn text(&self) -> String {
        self.text.as_ref().map(TextFrame::text).unwrap_or_default()
    }
}
