//! Slide data structures.

use findoc_core::Rgb;

use crate::shape::Shape;

/// A single slide: a solid background and shapes in z-order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slide {
    /// Solid background fill; `None` inherits the master's
    pub background: Option<Rgb>,

    /// Shapes, back to front
    pub shapes: Vec<Shape>,
}

impl Slide {
    /// Create an empty slide
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a solid background
    pub fn with_background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    /// Add a shape on top of the existing ones
    pub fn push(&mut self, shape: Shape) -> &mut Shape {
        self.shapes.push(shape);
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    /// Number of shapes
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// True if the slide has no shapes
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Text of every shape that carries any, in z-order
    pub fn texts(&self) -> Vec<String> {
        self.shapes
            .iter()
            .filter(|s| s.text.is_some())
            .map(Shape::text)
            .collect()
    }

    /// First shape whose text contains `needle`
    pub fn find_text(&self, needle: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.text().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Bounds, Geometry, TextFrame, TextParagraph};
    use findoc_core::ResolvedStyle;

    fn label(text: &str) -> Shape {
        let mut frame = TextFrame::default();
        frame.push(TextParagraph::new().with_span(
            text,
            ResolvedStyle::new("Segoe UI", 11.0, Rgb::new(0x05, 0x96, 0x69)),
        ));
        Shape::text_box(Bounds::inches(0.8, 0.5, 3.0, 0.4), frame)
    }

    #[test]
    fn test_new_slide_is_empty() {
        let slide = Slide::new();
        assert!(slide.is_empty());
        assert!(slide.background.is_none());
    }

    #[test]
    fn test_push_returns_the_new_shape() {
        let mut slide = Slide::new().with_background(Rgb::new(0x0F, 0x17, 0x2A));
        let white = Rgb::new(0xFF, 0xFF, 0xFF);

        let shape = slide.push(Shape::filled(Geometry::Rect, Bounds::inches(0.0, 0.0, 1.0, 1.0), white));
        shape.fill = None;

        assert_eq!(slide.len(), 1);
        assert!(slide.shapes[0].fill.is_none());
    }

    #[test]
    fn test_texts_skip_plain_shapes() {
        let mut slide = Slide::new();
        slide.push(Shape::filled(
            Geometry::Ellipse,
            Bounds::inches(9.5, -1.0, 4.0, 4.0),
            Rgb::new(0x1E, 0x29, 0x3B),
        ));
        slide.push(label("O CENARIO ATUAL"));

        assert_eq!(slide.texts(), vec!["O CENARIO ATUAL".to_string()]);
        assert!(slide.find_text("CENARIO").is_some());
        assert!(slide.find_text("missing").is_none());
    }
}
