//! Drawing helpers that place shapes and styled text on a slide.
//!
//! All text passes through the inline rich-text renderer, so `**bold**`,
//! `*italic*` and `` `code` `` work in every text box.

use findoc_core::{Length, ResolvedStyle, RichTextRenderer, Rgb, RunSink, StyleProfile, Theme};

use crate::shape::{Anchor, Bounds, Geometry, Outline, Shape, TextAlign, TextFrame, TextParagraph};
use crate::slide::Slide;

/// Look of one text paragraph
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Rgb,
    /// Applied on top of whatever the markup resolves to
    pub bold: bool,
    /// `None` uses the theme body font
    pub font: Option<String>,
    pub align: TextAlign,
    pub anchor: Anchor,
    pub line_spacing: Option<Length>,
    pub space_before: Length,
    pub space_after: Length,
}

impl TextStyle {
    pub fn new(size: f32, color: Rgb) -> Self {
        Self {
            size,
            color,
            bold: false,
            font: None,
            align: TextAlign::Left,
            anchor: Anchor::Top,
            line_spacing: None,
            space_before: Length::ZERO,
            space_after: Length::ZERO,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Centred horizontally
    pub fn center(self) -> Self {
        self.align(TextAlign::Center)
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Centred vertically in the frame
    pub fn middle(self) -> Self {
        self.anchor(Anchor::Middle)
    }

    /// Exact line pitch in points
    pub fn line_spacing(mut self, points: f64) -> Self {
        self.line_spacing = Some(Length::pt(points));
        self
    }

    pub fn space_before(mut self, space: Length) -> Self {
        self.space_before = space;
        self
    }

    pub fn space_after(mut self, space: Length) -> Self {
        self.space_after = space;
        self
    }
}

/// A slide under construction
pub struct Canvas<'a> {
    theme: &'a Theme,
    renderer: RichTextRenderer<'a>,
    slide: Slide,
}

impl<'a> Canvas<'a> {
    /// Start a slide with a solid background
    pub fn new(theme: &'a Theme, background: Rgb) -> Self {
        Self {
            theme,
            renderer: RichTextRenderer::new(theme),
            slide: Slide::new().with_background(background),
        }
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// The slide built so far
    pub fn slide(&self) -> &Slide {
        &self.slide
    }

    /// Finish and return the slide
    pub fn finish(self) -> Slide {
        self.slide
    }

    /// Filled rectangle without an outline
    pub fn add_rect(&mut self, bounds: Bounds, fill: Rgb) -> &mut Shape {
        self.slide.push(Shape::filled(Geometry::Rect, bounds, fill))
    }

    /// Filled rounded rectangle, optionally with a 1pt border
    pub fn add_rounded_rect(&mut self, bounds: Bounds, fill: Rgb, border: Option<Rgb>) -> &mut Shape {
        self.slide.push(
            Shape::filled(Geometry::RoundRect, bounds, fill).with_outline(border.map(Outline::thin)),
        )
    }

    /// Filled ellipse without an outline
    pub fn add_oval(&mut self, bounds: Bounds, fill: Rgb) -> &mut Shape {
        self.slide.push(Shape::filled(Geometry::Ellipse, bounds, fill))
    }

    /// Text box holding one paragraph
    pub fn add_text_box(&mut self, bounds: Bounds, text: &str, style: &TextStyle) -> &mut Shape {
        let mut frame = TextFrame::new(style.anchor);
        frame.push(self.paragraph(text, style));
        self.slide.push(Shape::text_box(bounds, frame))
    }

    /// Text box with one paragraph per line, each styled on its own
    pub fn add_multiline_text(
        &mut self,
        bounds: Bounds,
        lines: &[(&str, TextStyle)],
        anchor: Anchor,
    ) -> &mut Shape {
        let mut frame = TextFrame::new(anchor);
        for (text, style) in lines {
            frame.push(self.paragraph(text, style));
        }
        self.slide.push(Shape::text_box(bounds, frame))
    }

    /// Render `text` into a paragraph carrying `style`
    pub fn paragraph(&self, text: &str, style: &TextStyle) -> TextParagraph {
        let font = style
            .font
            .clone()
            .unwrap_or_else(|| self.theme.fonts.body.clone());
        let base = StyleProfile::new(font, style.size, style.color);

        let mut paragraph = TextParagraph::new()
            .align(style.align)
            .line_spacing(style.line_spacing)
            .spacing(style.space_before, style.space_after);
        if style.bold {
            self.renderer
                .render_into(text, &base, &mut BoldOverlay(&mut paragraph));
        } else {
            self.renderer.render_into(text, &base, &mut paragraph);
        }
        paragraph
    }

    pub(crate) fn push(&mut self, shape: Shape) -> &mut Shape {
        self.slide.push(shape)
    }
}

/// Sets bold on every run before passing it on
struct BoldOverlay<'p>(&'p mut TextParagraph);

impl RunSink for BoldOverlay<'_> {
    fn append_run(&mut self, text: &str, style: &ResolvedStyle) {
        self.0.append_run(text, &style.clone().bold(true));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes_keep_insertion_order() {
        let theme = Theme::default();
        let p = &theme.palette;
        let mut canvas = Canvas::new(&theme, p.slate_900);

        canvas.add_rect(Bounds::inches(0.0, 0.0, 0.12, 7.5), p.emerald_600);
        canvas.add_oval(Bounds::inches(9.5, -1.0, 4.0, 4.0), p.slate_800);
        canvas.add_rounded_rect(Bounds::inches(1.0, 1.0, 2.0, 1.0), p.white, Some(p.slate_200));

        let slide = canvas.finish();
        let geometries: Vec<Geometry> = slide.shapes.iter().map(|s| s.geometry).collect();
        assert_eq!(geometries, vec![Geometry::Rect, Geometry::Ellipse, Geometry::RoundRect]);
        assert_eq!(slide.background, Some(p.slate_900));
        assert_eq!(slide.shapes[2].outline, Some(Outline::thin(p.slate_200)));
        assert!(slide.shapes[0].outline.is_none());
    }

    #[test]
    fn test_text_box_renders_markup() {
        let theme = Theme::default();
        let p = &theme.palette;
        let mut canvas = Canvas::new(&theme, p.white);

        let style = TextStyle::new(18.0, p.slate_600);
        let shape = canvas.add_text_box(
            Bounds::inches(0.8, 2.2, 10.0, 0.7),
            "81,2 milhoes **inadimplentes**",
            &style,
        );

        let frame = shape.text.as_ref().unwrap();
        let spans = &frame.paragraphs[0].spans;
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].style.font, "Segoe UI");
        assert!(!spans[0].style.bold);
        assert!(spans[1].style.bold);
        assert_eq!(spans[1].style.color, theme.emphasis);
        assert_eq!(shape.text(), "81,2 milhoes inadimplentes");
    }

    #[test]
    fn test_bold_applies_on_top_of_markup() {
        let theme = Theme::default();
        let mut canvas = Canvas::new(&theme, theme.palette.white);

        let style = TextStyle::new(11.0, theme.palette.emerald_600).bold();
        let shape = canvas.add_text_box(Bounds::inches(0.8, 0.5, 3.0, 0.4), "A *SOLUCAO*", &style);

        let spans = &shape.text.as_ref().unwrap().paragraphs[0].spans;
        assert!(spans.iter().all(|s| s.style.bold));
        assert!(spans[1].style.italic);
        assert_eq!(spans[0].style.color, theme.palette.emerald_600);
    }

    #[test]
    fn test_paragraph_matches_renderer_runs() {
        let theme = Theme::default();
        let canvas = Canvas::new(&theme, theme.palette.white);
        let text = "**Total:** R$ *100,00* (`pago`)";

        let style = TextStyle::new(14.0, theme.palette.slate_700);
        let paragraph = canvas.paragraph(text, &style);

        let base = StyleProfile::new(theme.fonts.body.clone(), 14.0, theme.palette.slate_700);
        let runs = RichTextRenderer::new(&theme).render(text, &base);
        assert_eq!(paragraph.spans.len(), runs.len());
        for (span, run) in paragraph.spans.iter().zip(&runs) {
            assert_eq!(span.text, run.text);
            assert_eq!(span.style, run.style);
        }

        let bold = canvas.paragraph(text, &style.clone().bold());
        assert_eq!(bold.text(), paragraph.text());
        assert!(bold.spans.iter().all(|s| s.style.bold));
        assert!(bold.spans[2].style.italic);
        assert_eq!(bold.spans[4].style.font, theme.code.font);
    }

    #[test]
    fn test_paragraph_layout_flows_from_style() {
        let theme = Theme::default();
        let canvas = Canvas::new(&theme, theme.palette.white);

        let style = TextStyle::new(40.0, theme.palette.white)
            .center()
            .middle()
            .line_spacing(52.0)
            .space_after(Length::pt(8.0))
            .font("Inter");
        let paragraph = canvas.paragraph("Tudo o que voce precisa.\nEm um unico lugar.", &style);

        assert_eq!(paragraph.align, TextAlign::Center);
        assert_eq!(paragraph.line_spacing, Some(Length::pt(52.0)));
        assert_eq!(paragraph.space_after, Length::pt(8.0));
        assert_eq!(paragraph.spans.len(), 1);
        assert_eq!(paragraph.spans[0].style.font, "Inter");
        assert!(paragraph.text().contains('\n'));
    }

    #[test]
    fn test_multiline_text_one_paragraph_per_line() {
        let theme = Theme::default();
        let p = &theme.palette;
        let mut canvas = Canvas::new(&theme, p.white);

        let shape = canvas.add_multiline_text(
            Bounds::inches(0.8, 1.0, 11.0, 1.5),
            &[
                ("Metade do Brasil", TextStyle::new(36.0, p.slate_900).bold()),
                ("esta no vermelho.", TextStyle::new(18.0, p.slate_600)),
            ],
            Anchor::Middle,
        );

        let frame = shape.text.as_ref().unwrap();
        assert_eq!(frame.anchor, Anchor::Middle);
        assert_eq!(frame.paragraphs.len(), 2);
        assert_eq!(frame.paragraphs[1].spans[0].style.size, 18.0);
    }
}
