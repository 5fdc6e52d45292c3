//! End-to-end checks on generated `.docx` packages

use std::collections::HashMap;
use std::io::Cursor;

use findoc_core::Theme;
use findoc_docx::{CalloutTone, Composer, Cover, DocxWriter, NormalStyle, OoxmlArchive, TocEntry};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Count start/empty elements by qualified name
fn element_counts(xml: &str) -> HashMap<String, usize> {
    let mut reader = Reader::from_str(xml);
    let mut counts = HashMap::new();
    loop {
        match reader.read_event().expect("well-formed XML") {
            Event::Start(e) | Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                *counts.entry(name).or_insert(0) += 1;
            }
            Event::Eof => break,
            _ => {}
        }
    }
    counts
}

fn sample_bytes(theme: &Theme) -> Vec<u8> {
    let cover = Cover {
        app_name: "FinApp".to_string(),
        subtitle: "Gestao Financeira Pessoal".to_string(),
        title: "Manual do Usuario".to_string(),
        edition: "Versao 2.0  |  Fevereiro 2026".to_string(),
    };

    let mut composer = Composer::new(theme);
    composer.cover_page(&cover);
    composer.toc_page("Sumario", &[TocEntry::from_heading("1  Primeiros Passos").unwrap()]);
    composer.section_heading("1  Primeiros Passos", 1).unwrap();
    composer.body_paragraph("Bem-vindo ao **FinApp** & boas-vindas <3");
    composer
        .styled_table(
            &["Passo", "Acao"],
            &[vec!["1", "Clique em **Criar conta**."], vec!["2", "Use `Ctrl+K`."]],
            true,
        )
        .unwrap();
    composer.callout(CalloutTone::Warning, "*Atencao:* confira o saldo.");
    composer.footer(&cover);

    DocxWriter::new(NormalStyle::from_theme(theme))
        .with_title("Manual do Usuario")
        .generate(&composer.finish())
        .unwrap()
}

#[test]
fn test_package_reopens_and_parses() {
    let theme = Theme::default();
    let archive = OoxmlArchive::from_reader(Cursor::new(sample_bytes(&theme))).unwrap();

    archive.verify_xml().unwrap();
    assert_eq!(archive.file_list()[0], "[Content_Types].xml");

    let xml = archive.get_string("word/document.xml").unwrap();
    let counts = element_counts(&xml);

    // TOC bar, chapter bar, step table, callout
    assert_eq!(counts["w:tbl"], 4);
    assert_eq!(counts["w:sectPr"], 1);
    assert_eq!(counts["w:br"], 2);
    assert!(xml.contains("&amp; boas-vindas &lt;3"));
}

#[test]
fn test_package_is_byte_stable() {
    let theme = Theme::default();
    assert_eq!(sample_bytes(&theme), sample_bytes(&theme));
}

#[test]
fn test_theme_override_reaches_xml() {
    let theme = Theme::from_toml_str(
        r#"
[palette]
emerald_600 = "123456"

[code]
font = "Cascadia Code"
size = 9.0
color = "123456"
"#,
    )
    .unwrap();
    let archive = OoxmlArchive::from_reader(Cursor::new(sample_bytes(&theme))).unwrap();
    let xml = archive.get_string("word/document.xml").unwrap();

    assert!(xml.contains(r#"w:fill="123456""#));
    assert!(!xml.contains("059669"));
}

#[test]
fn test_multiline_text_keeps_line_breaks() {
    let theme = Theme::default();
    let mut composer = Composer::new(&theme);
    composer.body_paragraph("linha 1\nlinha 2");
    composer.callout(CalloutTone::Info, "**Dica:** primeira linha\nsegunda linha");

    let bytes = DocxWriter::new(NormalStyle::from_theme(&theme))
        .generate(&composer.finish())
        .unwrap();
    let archive = OoxmlArchive::from_reader(Cursor::new(bytes)).unwrap();
    let xml = archive.get_string("word/document.xml").unwrap();

    // Line breaks only, no page breaks
    let counts = element_counts(&xml);
    assert_eq!(counts["w:br"], 2);
    assert!(!xml.contains("w:type=\"page\""));
    assert!(xml.contains(">linha 2</w:t>"));
    assert!(xml.contains(">segunda linha</w:t>"));
}
