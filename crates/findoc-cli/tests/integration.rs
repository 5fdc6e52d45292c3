//! Generate both documents on disk and read them back

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use std::process::Command;

use findoc_cli::{all_command, manual_command, Settings};
use zip::ZipArchive;

fn read_entry(path: &Path, name: &str) -> String {
    let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut xml = String::new();
    entry.read_to_string(&mut xml).unwrap();
    xml
}

fn settings_in(dir: &Path) -> Settings {
    let mut settings = Settings::default();
    settings.output.dir = dir.to_path_buf();
    settings
}

#[test]
fn test_all_writes_manual_and_deck() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_in(&dir.path().join("dist"));

    let paths = all_command(&settings, None).unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("FinApp - Manual do Usuario.docx"));
    assert!(paths[1].ends_with("FinApp - Pitch Deck.pptx"));

    let document = read_entry(&paths[0], "word/document.xml");
    assert!(document.contains("Primeiros Passos"));
    let core = read_entry(&paths[0], "docProps/core.xml");
    assert!(core.contains("pt-BR"));

    let archive = ZipArchive::new(File::open(&paths[1]).unwrap()).unwrap();
    let slides = archive
        .file_names()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .count();
    assert_eq!(slides, 12);

    let last = read_entry(&paths[1], "ppt/slides/slide12.xml");
    assert!(last.contains("Comece hoje. E gratuito."));
}

#[test]
fn test_manual_from_custom_content() {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("manual.toml");
    fs::write(
        &content,
        r#"
[meta]
app_name = "FinApp"
subtitle = "Gestao Financeira Pessoal"
title = "Guia Rapido"
edition = "Versao 0.1"
toc_title = "Sumario"

[[blocks]]
kind = "heading"
level = 1
text = "1  Comecando"

[[blocks]]
kind = "paragraph"
text = "Use o botao `Importar` para trazer um extrato **OFX**."
"#,
    )
    .unwrap();

    let path = manual_command(&settings_in(dir.path()), Some(&content)).unwrap();
    let document = read_entry(&path, "word/document.xml");

    assert!(document.contains("Comecando"));
    assert!(document.contains("Importar"));
    assert!(!document.contains("Primeiros Passos"));
}

#[test]
fn test_bad_content_reports_file() {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("broken.toml");
    fs::write(&content, "[meta]\napp_name = 1\n").unwrap();

    let err = manual_command(&settings_in(dir.path()), Some(&content)).unwrap_err();
    assert!(format!("{err:#}").contains("broken.toml"));
}

#[test]
fn test_binary_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("findoc.toml"),
        "[output]\ndir = \"out\"\npitch = \"deck.pptx\"\n\n[metadata]\ncreator = \"Equipe FinApp\"\n",
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_findoc"))
        .arg("pitch")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let printed = String::from_utf8(output.stdout).unwrap();
    assert!(printed.trim_end().ends_with("deck.pptx"));

    let deck = dir.path().join("out").join("deck.pptx");
    let core = read_entry(&deck, "docProps/core.xml");
    assert!(core.contains("Equipe FinApp"));
}

#[test]
fn test_binary_fails_on_missing_config() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_findoc"))
        .args(["--config", "missing.toml", "all"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.toml"));
}
