//! End-to-end checks on generated `.pptx` packages

use std::io::{Cursor, Read};

use findoc_core::{Length, Theme};
use findoc_pptx::{Bounds, Canvas, DeckTheme, PptxWriter, Slide, TextStyle};
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

fn deck(theme: &Theme) -> Vec<Slide> {
    let p = &theme.palette;

    let mut cover = Canvas::new(theme, p.slate_900);
    cover.add_rect(Bounds::inches(0.0, 0.0, 0.12, 7.5), p.emerald_600);
    cover.add_text_box(
        Bounds::inches(1.2, 1.8, 5.0, 1.0),
        "FinApp",
        &TextStyle::new(56.0, p.emerald_500).bold(),
    );

    let mut stats = Canvas::new(theme, p.white);
    stats.stat_card(Bounds::inches(0.8, 3.5, 3.6, 3.0), "48%", "dos brasileiros\nnao controlam", p.rose_500, 48.0);
    stats.feature_card(Bounds::inches(4.9, 3.5, 3.7, 2.35), "$", "Controle", "Contas e `OFX`.", p.emerald_600);
    stats.check_list(
        Bounds::inches(1.0, 1.0, 5.0, 0.9),
        &["Gratuito & completo", "IA *integrada*"],
        p.emerald_600,
        &TextStyle::new(14.0, p.slate_700).space_after(Length::pt(8.0)),
    );
    stats.comparison_header(Length::inches(1.6), "  Funcionalidade", "Concorrentes", "FinApp");
    stats.comparison_row(Length::inches(2.15), 0, "Plano gratuito", "Limitado", "\u{2713}  Sim");

    vec![cover.finish(), stats.finish()]
}

fn generate(theme: &Theme) -> Vec<u8> {
    let mut writer = PptxWriter::new(DeckTheme::from_theme(theme)).with_title("FinApp - Pitch Deck");
    writer.add_slides(deck(theme));
    writer.generate().unwrap()
}

#[test]
fn test_every_part_is_well_formed() {
    let theme = Theme::default();
    let mut archive = ZipArchive::new(Cursor::new(generate(&theme))).unwrap();

    let mut parsed = 0;
    for i in 0..archive.len() {
        let mut file = archive.by_index(i).unwrap();
        let mut xml = String::new();
        file.read_to_string(&mut xml).unwrap();

        let mut reader = Reader::from_str(&xml);
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => panic!("{} is not well-formed: {e}", file.name()),
            }
        }
        parsed += 1;
    }

    // 14 fixed parts plus a part and its rels per slide
    assert_eq!(parsed, 14 + 2 * 2);
}

#[test]
fn test_slide_text_survives() {
    let theme = Theme::default();
    let mut archive = ZipArchive::new(Cursor::new(generate(&theme))).unwrap();

    let mut xml = String::new();
    archive
        .by_name("ppt/slides/slide2.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();

    assert!(xml.contains("Gratuito &amp; completo"));
    assert!(xml.contains("\u{2713}  "));
    assert!(xml.contains(r#"<a:latin typeface="Cascadia Code"/>"#));
    assert!(xml.contains(r#"prst="roundRect""#));
    assert!(xml.contains("<a:br>"));
}

#[test]
fn test_write_to_disk() {
    let theme = Theme::default();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("FinApp - Pitch Deck.pptx");

    std::fs::write(&path, generate(&theme)).unwrap();

    let archive = ZipArchive::new(std::fs::File::open(&path).unwrap()).unwrap();
    assert!(archive.file_names().any(|name| name == "ppt/slides/slide1.xml"));
}
