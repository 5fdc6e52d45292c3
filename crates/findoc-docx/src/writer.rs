//! DOCX writer
//!
//! Serializes a [`Document`] into a complete WordprocessingML package.
//! The XML is built as text, element by element, in the order the schema
//! requires.

use findoc_core::units::half_points;
use findoc_core::{Length, Metadata, Rgb, Theme};
use quick_xml::escape::escape;
use tracing::{debug, info};

use crate::archive::OoxmlArchive;
use crate::document::{
    BodyElement, Borders, Document, Paragraph, Run, RunProperties, Table, TableCell, TableWidth,
};
use crate::error::Result;

const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Defaults applied through the `Normal` paragraph style
#[derive(Debug, Clone, PartialEq)]
pub struct NormalStyle {
    pub font: String,
    pub size: f32,
    pub color: Rgb,
    pub space_after: Length,
}

impl NormalStyle {
    /// Body profile of the theme with 4pt after each paragraph
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            font: theme.body.font.clone(),
            size: theme.body.size,
            color: theme.body.color,
            space_after: Length::pt(4.0),
        }
    }
}

/// DOCX writer
pub struct DocxWriter {
    /// XML output buffer for `word/document.xml`
    output: String,
    normal: NormalStyle,
    metadata: Metadata,
    title: Option<String>,
    subject: Option<String>,
}

impl DocxWriter {
    /// Create a writer with the given Normal style
    pub fn new(normal: NormalStyle) -> Self {
        Self {
            output: String::new(),
            normal,
            metadata: Metadata::default(),
            title: None,
            subject: None,
        }
    }

    /// Set the document title (`dc:title`)
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the document subject (`dc:subject`)
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set creator, language and timestamp
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Generate the package as bytes
    pub fn generate(&mut self, doc: &Document) -> Result<Vec<u8>> {
        let archive = self.generate_archive(doc)?;
        let bytes = archive.to_bytes()?;
        info!(parts = archive.len(), bytes = bytes.len(), "DOCX package written");
        Ok(bytes)
    }

    /// Generate the package as an in-memory archive
    pub fn generate_archive(&mut self, doc: &Document) -> Result<OoxmlArchive> {
        let mut archive = OoxmlArchive::new();

        archive.set_string("[Content_Types].xml", CONTENT_TYPES);
        archive.set_string("_rels/.rels", ROOT_RELS);
        archive.set_string("word/_rels/document.xml.rels", DOCUMENT_RELS);
        archive.set_string("word/styles.xml", self.generate_styles_xml());
        archive.set_string("docProps/core.xml", self.generate_core_xml());
        archive.set_string("docProps/app.xml", APP_XML);
        archive.set_string("word/document.xml", self.generate_document_xml(doc));

        archive.verify_xml()?;
        debug!(elements = doc.body.len(), "Document parts verified");
        Ok(archive)
    }

    /// Generate the complete document.xml content
    fn generate_document_xml(&mut self, doc: &Document) -> String {
        self.output.clear();

        self.output
            .push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        self.output.push('\n');
        self.output
            .push_str(&format!("<w:document xmlns:w=\"{NS_W}\" xmlns:r=\"{NS_R}\">\n"));
        self.output.push_str("<w:body>\n");

        for element in &doc.body {
            match element {
                BodyElement::Paragraph(p) => self.generate_paragraph(p),
                BodyElement::Table(t) => self.generate_table(t),
                BodyElement::PageBreak => self.generate_page_break(),
            }
        }

        // Section properties close the body
        let page = &doc.page;
        self.output.push_str("<w:sectPr>\n");
        self.output.push_str(&format!(
            "<w:pgSz w:w=\"{}\" w:h=\"{}\"/>\n",
            page.width.to_twips(),
            page.height.to_twips()
        ));
        self.output.push_str(&format!(
            "<w:pgMar w:top=\"{}\" w:right=\"{}\" w:bottom=\"{}\" w:left=\"{}\" w:header=\"708\" w:footer=\"708\" w:gutter=\"0\"/>\n",
            page.margin_top.to_twips(),
            page.margin_right.to_twips(),
            page.margin_bottom.to_twips(),
            page.margin_left.to_twips()
        ));
        self.output.push_str("</w:sectPr>\n");

        self.output.push_str("</w:body>\n");
        self.output.push_str("</w:document>");

        std::mem::take(&mut self.output)
    }

    /// Generate XML for a paragraph
    fn generate_paragraph(&mut self, para: &Paragraph) {
        self.output.push_str("<w:p>\n");

        let has_spacing =
            para.space_before.is_some() || para.space_after.is_some() || para.line_exact.is_some();
        if has_spacing || para.indent_left.is_some() || para.alignment.is_some() {
            self.output.push_str("<w:pPr>\n");
            if has_spacing {
                self.output.push_str("<w:spacing");
                if let Some(before) = para.space_before {
                    self.output
                        .push_str(&format!(" w:before=\"{}\"", before.to_twips()));
                }
                if let Some(after) = para.space_after {
                    self.output
                        .push_str(&format!(" w:after=\"{}\"", after.to_twips()));
                }
                if let Some(line) = para.line_exact {
                    self.output.push_str(&format!(
                        " w:line=\"{}\" w:lineRule=\"exact\"",
                        line.to_twips()
                    ));
                }
                self.output.push_str("/>\n");
            }
            if let Some(indent) = para.indent_left {
                self.output
                    .push_str(&format!("<w:ind w:left=\"{}\"/>\n", indent.to_twips()));
            }
            if let Some(alignment) = para.alignment {
                self.output
                    .push_str(&format!("<w:jc w:val=\"{}\"/>\n", alignment.as_str()));
            }
            self.output.push_str("</w:pPr>\n");
        }

        for run in &para.runs {
            self.generate_run(run);
        }

        self.output.push_str("</w:p>\n");
    }

    /// Generate XML for a run
    fn generate_run(&mut self, run: &Run) {
        self.output.push_str("<w:r>\n");

        let rpr = run_properties_xml(&run.props);
        if !rpr.is_empty() {
            self.output.push_str("<w:rPr>\n");
            self.output.push_str(&rpr);
            self.output.push_str("</w:rPr>\n");
        }

        for (i, line) in run.text.split('\n').enumerate() {
            if i > 0 {
                self.output.push_str("<w:br/>\n");
            }
            self.output.push_str(&format!(
                "<w:t xml:space=\"preserve\">{}</w:t>\n",
                escape(line)
            ));
        }
        self.output.push_str("</w:r>\n");
    }

    /// Generate XML for a table
    fn generate_table(&mut self, table: &Table) {
        self.output.push_str("<w:tbl>\n");

        self.output.push_str("<w:tblPr>\n");
        self.output
            .push_str(&format!("<w:tblW {}/>\n", width_attrs(table.width)));
        if let Some(alignment) = table.alignment {
            self.output
                .push_str(&format!("<w:jc w:val=\"{}\"/>\n", alignment.as_str()));
        }
        self.push_borders("w:tblBorders", &table.borders);
        self.output.push_str("</w:tblPr>\n");

        self.output.push_str("<w:tblGrid>\n");
        for column in &table.grid {
            self.output
                .push_str(&format!("<w:gridCol w:w=\"{}\"/>\n", column.to_twips()));
        }
        self.output.push_str("</w:tblGrid>\n");

        for row in &table.rows {
            self.output.push_str("<w:tr>\n");
            if row.is_header {
                self.output.push_str("<w:trPr>\n<w:tblHeader/>\n</w:trPr>\n");
            }
            for cell in &row.cells {
                self.generate_cell(cell);
            }
            self.output.push_str("</w:tr>\n");
        }

        self.output.push_str("</w:tbl>\n");
    }

    /// Generate XML for a table cell
    fn generate_cell(&mut self, cell: &TableCell) {
        self.output.push_str("<w:tc>\n");

        self.output.push_str("<w:tcPr>\n");
        if let Some(width) = cell.width {
            self.output
                .push_str(&format!("<w:tcW {}/>\n", width_attrs(width)));
        }
        self.push_borders("w:tcBorders", &cell.borders);
        if let Some(fill) = cell.shading {
            self.output.push_str(&format!(
                "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/>\n",
                fill.hex()
            ));
        }
        if let Some(v_align) = cell.v_align {
            self.output
                .push_str(&format!("<w:vAlign w:val=\"{}\"/>\n", v_align.as_str()));
        }
        self.output.push_str("</w:tcPr>\n");

        for paragraph in &cell.paragraphs {
            self.generate_paragraph(paragraph);
        }

        // A cell must end with a paragraph
        if cell.paragraphs.is_empty() {
            self.output.push_str("<w:p/>\n");
        }

        self.output.push_str("</w:tc>\n");
    }

    fn push_borders(&mut self, element: &str, borders: &Borders) {
        if borders.is_empty() {
            return;
        }
        self.output.push_str(&format!("<{element}>\n"));
        for (edge, border) in borders.iter() {
            self.output.push_str(&format!(
                "<w:{} w:val=\"{}\" w:sz=\"{}\" w:space=\"0\" w:color=\"{}\"/>\n",
                edge.as_str(),
                border.style.as_str(),
                border.size,
                border.color.hex()
            ));
        }
        self.output.push_str(&format!("</{element}>\n"));
    }

    /// Generate XML for a page break
    fn generate_page_break(&mut self) {
        self.output.push_str("<w:p>\n");
        self.output.push_str("<w:r>\n");
        self.output.push_str("<w:br w:type=\"page\"/>\n");
        self.output.push_str("</w:r>\n");
        self.output.push_str("</w:p>\n");
    }

    /// Generate word/styles.xml
    fn generate_styles_xml(&self) -> String {
        let normal = &self.normal;
        let font = escape(normal.font.as_str());
        let size = half_points(normal.size);
        let after = normal.space_after.to_twips();
        let lang = escape(self.metadata.language.as_str());

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="{NS_W}">
  <w:docDefaults>
    <w:rPrDefault>
      <w:rPr>
        <w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}"/>
        <w:sz w:val="{size}"/>
        <w:szCs w:val="{size}"/>
        <w:lang w:val="{lang}"/>
      </w:rPr>
    </w:rPrDefault>
    <w:pPrDefault>
      <w:pPr>
        <w:spacing w:after="{after}"/>
      </w:pPr>
    </w:pPrDefault>
  </w:docDefaults>
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:qFormat/>
    <w:pPr>
      <w:spacing w:after="{after}"/>
    </w:pPr>
    <w:rPr>
      <w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}"/>
      <w:color w:val="{color}"/>
      <w:sz w:val="{size}"/>
      <w:szCs w:val="{size}"/>
    </w:rPr>
  </w:style>
  <w:style w:type="character" w:default="1" w:styleId="DefaultParagraphFont">
    <w:name w:val="Default Paragraph Font"/>
    <w:uiPriority w:val="1"/>
    <w:semiHidden/>
    <w:unhideWhenUsed/>
  </w:style>
  <w:style w:type="table" w:default="1" w:styleId="TableNormal">
    <w:name w:val="Normal Table"/>
    <w:uiPriority w:val="99"/>
    <w:semiHidden/>
    <w:unhideWhenUsed/>
    <w:tblPr>
      <w:tblInd w:w="0" w:type="dxa"/>
      <w:tblCellMar>
        <w:top w:w="0" w:type="dxa"/>
        <w:left w:w="108" w:type="dxa"/>
        <w:bottom w:w="0" w:type="dxa"/>
        <w:right w:w="108" w:type="dxa"/>
      </w:tblCellMar>
    </w:tblPr>
  </w:style>
</w:styles>"#,
            color = normal.color.hex(),
        )
    }

    /// Generate docProps/core.xml
    fn generate_core_xml(&self) -> String {
        let title = self.title.as_deref().unwrap_or("");
        let subject = self.subject.as_deref().unwrap_or("");
        let meta = &self.metadata;

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>{}</dc:title>
  <dc:subject>{}</dc:subject>
  <dc:creator>{}</dc:creator>
  <cp:lastModifiedBy>{}</cp:lastModifiedBy>
  <dc:language>{}</dc:language>
  <dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>
  <dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>
</cp:coreProperties>"#,
            escape(title),
            escape(subject),
            escape(meta.creator.as_str()),
            escape(meta.creator.as_str()),
            escape(meta.language.as_str()),
            escape(meta.timestamp.as_str()),
            escape(meta.timestamp.as_str()),
        )
    }
}

/// Run properties in schema order: fonts, weight, slant, color, size
fn run_properties_xml(props: &RunProperties) -> String {
    let mut xml = String::new();
    if let Some(font) = &props.font {
        let font = escape(font.as_str());
        xml.push_str(&format!(
            "<w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\" w:cs=\"{font}\"/>\n"
        ));
    }
    if props.bold {
        xml.push_str("<w:b/>\n");
    }
    if props.italic {
        xml.push_str("<w:i/>\n");
    }
    if let Some(color) = props.color {
        xml.push_str(&format!("<w:color w:val=\"{}\"/>\n", color.hex()));
    }
    if let Some(size) = props.size {
        let half = half_points(size);
        xml.push_str(&format!("<w:sz w:val=\"{half}\"/>\n<w:szCs w:val=\"{half}\"/>\n"));
    }
    xml
}

fn width_attrs(width: TableWidth) -> String {
    match width {
        TableWidth::Auto => "w:w=\"0\" w:type=\"auto\"".to_string(),
        TableWidth::Pct(pct) => format!("w:w=\"{pct}\" w:type=\"pct\""),
        TableWidth::Dxa(len) => format!("w:w=\"{}\" w:type=\"dxa\"", len.to_twips()),
    }
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
  <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#;

const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

const APP_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
  <Application>findoc</Application>
  <DocSecurity>0</DocSecurity>
  <ScaleCrop>false</ScaleCrop>
  <LinksUpToDate>false</LinksUpToDate>
  <SharedDoc>false</SharedDoc>
  <HyperlinksChanged>false</HyperlinksChanged>
  <AppVersion>1.0</AppVersion>
</Properties>"#;
