//! Composite widgets built from basic shapes.

use findoc_core::{Length, ResolvedStyle, Rgb};

use crate::canvas::{Canvas, TextStyle};
use crate::shape::{Bounds, Shape, TextFrame, TextParagraph};

/// Check mark that prefixes list items and pills
pub const CHECK: &str = "\u{2713}  ";

/// Left edge of the comparison table
const TABLE_LEFT: f64 = 0.8;
/// Height of one comparison row
const ROW_HEIGHT: f64 = 0.48;

impl Canvas<'_> {
    /// Card with an accent bar, a large number and a label below
    pub fn stat_card(&mut self, bounds: Bounds, number: &str, label: &str, accent: Rgb, number_size: f32) {
        let p = &self.theme().palette;
        let (white, border, label_color) = (p.white, p.slate_200, p.slate_600);
        let inner = bounds.inset_x(Length::inches(0.3));

        self.add_rounded_rect(bounds, white, Some(border));
        self.add_rect(
            Bounds::new(inner.x, bounds.y + Length::inches(0.2), Length::inches(0.6), Length::pt(4.0)),
            accent,
        );
        self.add_text_box(
            Bounds::new(inner.x, bounds.y + Length::inches(0.45), inner.width, Length::inches(0.8)),
            number,
            &TextStyle::new(number_size, accent).bold(),
        );
        self.add_text_box(
            Bounds::new(
                inner.x,
                bounds.bottom() - Length::inches(1.0),
                inner.width,
                Length::inches(0.8),
            ),
            label,
            &TextStyle::new(13.0, label_color).line_spacing(18.0),
        );
    }

    /// Card with a round icon, a title and a description
    pub fn feature_card(&mut self, bounds: Bounds, icon: &str, title: &str, description: &str, accent: Rgb) {
        let p = &self.theme().palette;
        let (white, border, circle, title_color, body_color) =
            (p.white, p.slate_200, p.emerald_50, p.slate_900, p.slate_600);
        let inner = bounds.inset_x(Length::inches(0.3));
        let icon_size = Length::inches(0.55);

        self.add_rounded_rect(bounds, white, Some(border));
        self.add_oval(
            Bounds::new(inner.x, bounds.y + Length::inches(0.25), icon_size, icon_size),
            circle,
        );
        self.add_text_box(
            Bounds::new(inner.x, bounds.y + Length::inches(0.27), icon_size, icon_size),
            icon,
            &TextStyle::new(20.0, accent).bold().center().middle(),
        );
        self.add_text_box(
            Bounds::new(inner.x, bounds.y + Length::inches(0.9), inner.width, Length::inches(0.35)),
            title,
            &TextStyle::new(15.0, title_color).bold(),
        );
        self.add_text_box(
            Bounds::new(
                inner.x,
                bounds.y + Length::inches(1.25),
                inner.width,
                bounds.height - Length::inches(1.5),
            ),
            description,
            &TextStyle::new(11.5, body_color).line_spacing(17.0),
        );
    }

    /// Text box of items, each prefixed by a bold check mark in `mark`
    pub fn check_list<S: AsRef<str>>(
        &mut self,
        bounds: Bounds,
        items: &[S],
        mark: Rgb,
        item_style: &TextStyle,
    ) -> &mut Shape {
        let font = item_style
            .font
            .clone()
            .unwrap_or_else(|| self.theme().fonts.body.clone());
        let mark = ResolvedStyle::new(font, item_style.size, mark).bold(true);

        let mut frame = TextFrame::new(item_style.anchor);
        for item in items {
            let rendered = self.paragraph(item.as_ref(), item_style);
            let mut paragraph = TextParagraph::new()
                .align(rendered.align)
                .line_spacing(rendered.line_spacing)
                .spacing(rendered.space_before, rendered.space_after)
                .with_span(CHECK, mark.clone());
            paragraph.spans.extend(rendered.spans);
            frame.push(paragraph);
        }
        self.push(Shape::text_box(bounds, frame))
    }

    /// Dark header row of the comparison table
    pub fn comparison_header(&mut self, top: Length, feature: &str, competitors: &str, finapp: &str) {
        let p = &self.theme().palette;
        let (dark, white, muted, accent) = (p.slate_900, p.white, p.slate_400, p.emerald_400);
        let left = Length::inches(TABLE_LEFT);
        let height = Length::inches(0.5);

        self.add_rect(Bounds::new(left, top, Length::inches(11.5), height), dark);
        self.add_text_box(
            Bounds::new(left, top, Length::inches(3.2), height),
            feature,
            &TextStyle::new(12.0, white).bold().middle(),
        );
        self.add_text_box(
            Bounds::new(left + Length::inches(3.4), top, Length::inches(4.5), height),
            competitors,
            &TextStyle::new(12.0, muted).bold().center().middle(),
        );
        self.add_text_box(
            Bounds::new(left + Length::inches(8.1), top, Length::inches(3.2), height),
            finapp,
            &TextStyle::new(12.0, accent).bold().center().middle(),
        );
    }

    /// One zebra-striped row of the comparison table; `index` picks the stripe
    pub fn comparison_row(&mut self, top: Length, index: usize, feature: &str, competitors: &str, finapp: &str) {
        let p = &self.theme().palette;
        let even = index % 2 == 0;
        let row_fill = if even { p.slate_50 } else { p.white };
        let finapp_fill = if even { p.emerald_50 } else { p.green_50 };
        let (text, muted, accent) = (p.slate_700, p.slate_500, p.emerald_600);

        let left = Length::inches(TABLE_LEFT);
        let height = Length::inches(ROW_HEIGHT);
        let finapp_cell = Bounds::new(left + Length::inches(8.1), top, Length::inches(3.2), height);

        self.add_rect(Bounds::new(left, top, Length::inches(7.9), height), row_fill);
        self.add_rect(finapp_cell, finapp_fill);
        self.add_text_box(
            Bounds::new(left + Length::inches(0.15), top, Length::inches(3.0), height),
            feature,
            &TextStyle::new(11.5, text).middle(),
        );
        self.add_text_box(
            Bounds::new(left + Length::inches(3.4), top, Length::inches(4.5), height),
            competitors,
            &TextStyle::new(11.0, muted).center().middle(),
        );
        self.add_text_box(
            finapp_cell,
            finapp,
            &TextStyle::new(11.5, accent).bold().center().middle(),
        );
    }

    /// Height of one comparison row
    pub fn comparison_row_height() -> Length {
        Length::inches(ROW_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Anchor, Geometry, TextAlign};
    use findoc_core::Theme;

    #[test]
    fn test_stat_card_layers() {
        let theme = Theme::default();
        let p = &theme.palette;
        let mut canvas = Canvas::new(&theme, p.white);

        canvas.stat_card(Bounds::inches(0.8, 3.5, 3.6, 3.0), "48%", "dos brasileiros", p.rose_500, 48.0);
        let slide = canvas.finish();

        assert_eq!(slide.len(), 4);
        assert_eq!(slide.shapes[0].geometry, Geometry::RoundRect);
        assert_eq!(slide.shapes[1].fill, Some(p.rose_500));
        assert_eq!(slide.shapes[1].bounds.height, Length::pt(4.0));

        let number = &slide.shapes[2];
        assert_eq!(number.text(), "48%");
        let span = &number.text.as_ref().unwrap().paragraphs[0].spans[0];
        assert_eq!(span.style.size, 48.0);
        assert!(span.style.bold);

        // Label sits one inch above the card's bottom edge
        assert_eq!(slide.shapes[3].bounds.y, Length::inches(5.5));
    }

    #[test]
    fn test_feature_card_icon_is_centred() {
        let theme = Theme::default();
        let p = &theme.palette;
        let mut canvas = Canvas::new(&theme, p.slate_50);

        canvas.feature_card(
            Bounds::inches(0.8, 1.65, 3.7, 2.35),
            "$",
            "Controle Financeiro",
            "Contas, cartoes e carteiras.",
            p.emerald_600,
        );
        let slide = canvas.finish();

        assert_eq!(slide.len(), 5);
        assert_eq!(slide.shapes[1].geometry, Geometry::Ellipse);
        let icon = slide.shapes[2].text.as_ref().unwrap();
        assert_eq!(icon.anchor, Anchor::Middle);
        assert_eq!(icon.paragraphs[0].align, TextAlign::Center);
        assert_eq!(slide.shapes[4].bounds.height, Length::inches(0.85));
    }

    #[test]
    fn test_check_list_prefixes_items() {
        let theme = Theme::default();
        let p = &theme.palette;
        let mut canvas = Canvas::new(&theme, p.white);

        let item_style = TextStyle::new(14.0, p.slate_700).space_after(Length::pt(8.0));
        canvas.check_list(
            Bounds::inches(1.0, 2.0, 5.0, 0.9),
            &["Gratuito", "IA **integrada**"],
            p.emerald_600,
            &item_style,
        );
        let slide = canvas.finish();

        let shape = &slide.shapes[0];
        assert_eq!(shape.bounds.height, Length::inches(0.9));
        let frame = shape.text.as_ref().unwrap();
        assert_eq!(frame.paragraphs.len(), 2);

        let second = &frame.paragraphs[1];
        assert_eq!(second.spans[0].text, CHECK);
        assert!(second.spans[0].style.bold);
        assert_eq!(second.spans[0].style.color, p.emerald_600);
        assert!(!second.spans[1].style.bold);
        assert!(second.spans[2].style.bold);
        assert_eq!(second.space_after, Length::pt(8.0));
    }

    #[test]
    fn test_comparison_rows_alternate() {
        let theme = Theme::default();
        let p = &theme.palette;
        let mut canvas = Canvas::new(&theme, p.white);

        let top = Length::inches(2.15);
        canvas.comparison_row(top, 0, "Assistente com IA", "Apenas Mobills", "Integrado");
        canvas.comparison_row(top + Canvas::comparison_row_height(), 1, "Tetos", "Ausente", "Por categoria");
        let slide = canvas.finish();

        assert_eq!(slide.len(), 10);
        assert_eq!(slide.shapes[0].fill, Some(p.slate_50));
        assert_eq!(slide.shapes[1].fill, Some(p.emerald_50));
        assert_eq!(slide.shapes[5].fill, Some(p.white));
        assert_eq!(slide.shapes[6].fill, Some(p.green_50));
        assert_eq!(slide.shapes[5].bounds.y, Length::inches(2.63));
    }

    #[test]
    fn test_comparison_header() {
        let theme = Theme::default();
        let p = &theme.palette;
        let mut canvas = Canvas::new(&theme, p.white);

        canvas.comparison_header(Length::inches(1.6), "  Funcionalidade", "Concorrentes", "FinApp");
        let slide = canvas.finish();

        assert_eq!(slide.shapes[0].fill, Some(p.slate_900));
        assert_eq!(slide.texts(), vec!["  Funcionalidade", "Concorrentes", "FinApp"]);
    }
}
