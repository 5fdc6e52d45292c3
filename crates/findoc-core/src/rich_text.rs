//! Inline rich-text rendering.
//!
//! Turns a flat string with a tiny markup language into styled runs:
//!
//! - `**bold**` keeps the base font and size, sets bold and switches to the
//!   theme's emphasis color
//! - `*italic*` keeps everything from the base style and sets italic
//! - `` `code` `` uses the theme's monospace family, code size and accent color
//!
//! Spans never nest and never contain their own delimiter. At each position
//! the alternatives are tried in the order above and the leftmost match wins,
//! so `**a *b* c**` is read as `*`, *a *, `b`, * c*, `*`. Anything the
//! grammar does not match is literal text, which means the renderer has no
//! error path at all.
//!
//! # Example
//!
//! ```
//! use findoc_core::{RichTextRenderer, SpanKind, Theme};
//!
//! let theme = Theme::default();
//! let renderer = RichTextRenderer::new(&theme);
//! let runs = renderer.render("Use `git commit` now", &theme.body);
//!
//! assert_eq!(runs.len(), 3);
//! assert_eq!(runs[1].text, "git commit");
//! assert_eq!(runs[1].kind, SpanKind::Code);
//! ```

use std::sync::OnceLock;

use regex::{CaptureMatches, Regex};

use crate::theme::{ResolvedStyle, StyleProfile, Theme};

fn markup() -> &'static Regex {
    static MARKUP: OnceLock<Regex> = OnceLock::new();
    MARKUP.get_or_init(|| {
        Regex::new(r"\*\*(?P<bold>[^*]+)\*\*|\*(?P<italic>[^*]+)\*|`(?P<code>[^`]+)`")
            .expect("markup pattern is valid")
    })
}

/// What produced a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Text outside any span
    Literal,
    /// `**text**`
    Bold,
    /// `*text*`
    Italic,
    /// `` `text` ``
    Code,
}

impl SpanKind {
    /// Delimiter stripped from both ends of the span
    pub fn delimiter(&self) -> &'static str {
        match self {
            SpanKind::Literal => "",
            SpanKind::Bold => "**",
            SpanKind::Italic => "*",
            SpanKind::Code => "`",
        }
    }

    /// Put the delimiters back around `text`
    pub fn wrap(&self, text: &str) -> String {
        let delimiter = self.delimiter();
        format!("{delimiter}{text}{delimiter}")
    }
}

/// A slice of the input tagged with its span kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'t> {
    pub kind: SpanKind,
    /// Inner text, delimiters already stripped
    pub text: &'t str,
}

/// Split `s` into literal and marked segments, left to right
pub fn segments(s: &str) -> Segments<'_> {
    Segments {
        haystack: s,
        matches: markup().captures_iter(s),
        cursor: 0,
        pending: None,
    }
}

/// Iterator returned by [`segments`]
#[derive(Debug)]
pub struct Segments<'t> {
    haystack: &'t str,
    matches: CaptureMatches<'static, 't>,
    cursor: usize,
    pending: Option<Segment<'t>>,
}

impl<'t> Iterator for Segments<'t> {
    type Item = Segment<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(segment) = self.pending.take() {
            return Some(segment);
        }

        match self.matches.next() {
            Some(caps) => {
                let whole = caps.get(0)?;
                let span = [
                    ("bold", SpanKind::Bold),
                    ("italic", SpanKind::Italic),
                    ("code", SpanKind::Code),
                ]
                .into_iter()
                .find_map(|(name, kind)| caps.name(name).map(|m| Segment { kind, text: m.as_str() }))?;

                let literal = &self.haystack[self.cursor..whole.start()];
                self.cursor = whole.end();
                if literal.is_empty() {
                    Some(span)
                } else {
                    self.pending = Some(span);
                    Some(Segment {
                        kind: SpanKind::Literal,
                        text: literal,
                    })
                }
            }
            None => {
                if self.cursor >= self.haystack.len() {
                    return None;
                }
                let rest = &self.haystack[self.cursor..];
                self.cursor = self.haystack.len();
                Some(Segment {
                    kind: SpanKind::Literal,
                    text: rest,
                })
            }
        }
    }
}

/// A contiguous piece of text sharing one resolved style
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub style: ResolvedStyle,
    pub kind: SpanKind,
}

/// Anything that can take styled runs in order (a paragraph, a text frame)
pub trait RunSink {
    /// Append one run
    fn append_run(&mut self, text: &str, style: &ResolvedStyle);
}

/// Renders markup strings against a theme
#[derive(Debug, Clone, Copy)]
pub struct RichTextRenderer<'a> {
    theme: &'a Theme,
}

impl<'a> RichTextRenderer<'a> {
    /// Create a renderer bound to `theme`
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// The theme this renderer styles with
    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// Lazily produce the runs for `s` on top of `base`
    pub fn runs<'t>(&self, s: &'t str, base: &StyleProfile) -> Runs<'a, 't> {
        Runs {
            theme: self.theme,
            base: ResolvedStyle::from(base),
            segments: segments(s),
        }
    }

    /// Collect the runs for `s`
    pub fn render(&self, s: &str, base: &StyleProfile) -> Vec<TextRun> {
        self.runs(s, base).collect()
    }

    /// Push the runs for `s` into `sink`, in order
    pub fn render_into<S: RunSink + ?Sized>(&self, s: &str, base: &StyleProfile, sink: &mut S) {
        for segment in segments(s) {
            let style = resolve(self.theme, &ResolvedStyle::from(base), segment.kind);
            sink.append_run(segment.text, &style);
        }
    }
}

/// Iterator returned by [`RichTextRenderer::runs`]
#[derive(Debug)]
pub struct Runs<'a, 't> {
    theme: &'a Theme,
    base: ResolvedStyle,
    segments: Segments<'t>,
}

impl Iterator for Runs<'_, '_> {
    type Item = TextRun;

    fn next(&mut self) -> Option<TextRun> {
        let segment = self.segments.next()?;
        Some(TextRun {
            text: segment.text.to_string(),
            style: resolve(self.theme, &self.base, segment.kind),
            kind: segment.kind,
        })
    }
}

fn resolve(theme: &Theme, base: &ResolvedStyle, kind: SpanKind) -> ResolvedStyle {
    match kind {
        SpanKind::Literal => base.clone(),
        SpanKind::Bold => ResolvedStyle {
            color: theme.emphasis,
            ..base.clone()
        }
        .bold(true),
        SpanKind::Italic => base.clone().italic(true),
        SpanKind::Code => ResolvedStyle::new(theme.code.font.clone(), theme.code.size, theme.code.color),
    }
}

/// Visible text of `s` with all span delimiters removed
pub fn strip_markup(s: &str) -> String {
    segments(s).map(|segment| segment.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_text(runs: &[TextRun]) -> Vec<(SpanKind, &str)> {
        runs.iter().map(|r| (r.kind, r.text.as_str())).collect()
    }

    fn round_trip(s: &str) -> String {
        let theme = Theme::default();
        RichTextRenderer::new(&theme)
            .runs(s, &theme.body)
            .map(|r| r.kind.wrap(&r.text))
            .collect()
    }

    #[test]
    fn test_plain_text_is_one_run() {
        let theme = Theme::default();
        let runs = RichTextRenderer::new(&theme).render("Saldo atualizado", &theme.body);

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "Saldo atualizado");
        assert_eq!(runs[0].kind, SpanKind::Literal);
        assert_eq!(runs[0].style, ResolvedStyle::from(&theme.body));
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let theme = Theme::default();
        assert!(RichTextRenderer::new(&theme).render("", &theme.body).is_empty());
    }

    #[test]
    fn test_code_span() {
        let theme = Theme::default();
        let runs = RichTextRenderer::new(&theme).render("Use `git commit` now", &theme.body);

        assert_eq!(
            kinds_and_text(&runs),
            vec![
                (SpanKind::Literal, "Use "),
                (SpanKind::Code, "git commit"),
                (SpanKind::Literal, " now"),
            ]
        );
        let code = &runs[1].style;
        assert_eq!(code.font, theme.code.font);
        assert_eq!(code.color, theme.code.color);
        assert_eq!(code.size, theme.code.size);
        assert!(!code.bold && !code.italic);
    }

    #[test]
    fn test_mixed_spans() {
        let theme = Theme::default();
        let runs =
            RichTextRenderer::new(&theme).render("**Total:** R$ *100,00* (`pago`)", &theme.body);

        assert_eq!(
            kinds_and_text(&runs),
            vec![
                (SpanKind::Bold, "Total:"),
                (SpanKind::Literal, " R$ "),
                (SpanKind::Italic, "100,00"),
                (SpanKind::Literal, " ("),
                (SpanKind::Code, "pago"),
                (SpanKind::Literal, ")"),
            ]
        );

        let bold = &runs[0].style;
        assert!(bold.bold);
        assert_eq!(bold.color, theme.emphasis);
        assert_eq!(bold.font, theme.body.font);
        assert_eq!(bold.size, theme.body.size);

        let italic = &runs[2].style;
        assert!(italic.italic && !italic.bold);
        assert_eq!(italic.color, theme.body.color);
    }

    #[test]
    fn test_unterminated_marker_is_literal() {
        let theme = Theme::default();
        let runs = RichTextRenderer::new(&theme).render("**bold text", &theme.body);

        assert_eq!(kinds_and_text(&runs), vec![(SpanKind::Literal, "**bold text")]);
        assert_eq!(runs[0].style, ResolvedStyle::from(&theme.body));
    }

    #[test]
    fn test_nested_emphasis_precedence() {
        let theme = Theme::default();
        let runs = RichTextRenderer::new(&theme).render("**a *b* c**", &theme.body);

        assert_eq!(
            kinds_and_text(&runs),
            vec![
                (SpanKind::Literal, "*"),
                (SpanKind::Italic, "a "),
                (SpanKind::Literal, "b"),
                (SpanKind::Italic, " c"),
                (SpanKind::Literal, "*"),
            ]
        );
    }

    #[test]
    fn test_triple_asterisks() {
        let theme = Theme::default();
        let runs = RichTextRenderer::new(&theme).render("***a***", &theme.body);

        assert_eq!(
            kinds_and_text(&runs),
            vec![
                (SpanKind::Literal, "*"),
                (SpanKind::Bold, "a"),
                (SpanKind::Literal, "*"),
            ]
        );
    }

    #[test]
    fn test_empty_spans_stay_literal() {
        let theme = Theme::default();
        let runs = RichTextRenderer::new(&theme).render("a ** b `` c", &theme.body);
        assert_eq!(kinds_and_text(&runs), vec![(SpanKind::Literal, "a ** b `` c")]);
    }

    #[test]
    fn test_adjacent_spans() {
        let theme = Theme::default();
        let runs = RichTextRenderer::new(&theme).render("*x* *y **z**", &theme.body);

        assert_eq!(
            kinds_and_text(&runs),
            vec![
                (SpanKind::Italic, "x"),
                (SpanKind::Literal, " "),
                (SpanKind::Italic, "y "),
                (SpanKind::Italic, "z"),
                (SpanKind::Literal, "*"),
            ]
        );
    }

    #[test]
    fn test_round_trip() {
        let inputs = [
            "",
            "plain",
            "**Total:** R$ *100,00* (`pago`)",
            "**a *b* c**",
            "***a***",
            "**bold text",
            "`unterminated",
            "* * *",
            "Clique em **Salvar** e depois em `Fechar`.",
            "Ação — ✓ **ótimo**",
        ];
        for input in inputs {
            assert_eq!(round_trip(input), input, "round trip of {input:?}");
        }
    }

    #[test]
    fn test_render_is_restartable() {
        let theme = Theme::default();
        let renderer = RichTextRenderer::new(&theme);
        let input = "**A** e *B* e `C`";
        assert_eq!(renderer.render(input, &theme.body), renderer.render(input, &theme.body));
    }

    #[derive(Default)]
    struct Collect(Vec<(String, ResolvedStyle)>);

    impl RunSink for Collect {
        fn append_run(&mut self, text: &str, style: &ResolvedStyle) {
            self.0.push((text.to_string(), style.clone()));
        }
    }

    #[test]
    fn test_render_into_sink() {
        let theme = Theme::default();
        let mut sink = Collect::default();
        RichTextRenderer::new(&theme).render_into("a **b**", &theme.compact, &mut sink);

        assert_eq!(sink.0.len(), 2);
        assert_eq!(sink.0[0].0, "a ");
        assert_eq!(sink.0[0].1.size, theme.compact.size);
        assert_eq!(sink.0[1].0, "b");
        assert!(sink.0[1].1.bold);
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("**Total:** R$ *100,00* (`pago`)"), "Total: R$ 100,00 (pago)");
        assert_eq!(strip_markup("**open"), "**open");
    }

    #[test]
    fn test_renderer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RichTextRenderer<'static>>();
        assert_send_sync::<Theme>();
    }
}
