//! PPTX generation from slides.
//!
//! Every part is built as text, checked for well-formedness and streamed
//! straight into the ZIP archive. The package always has one master and one
//! blank layout; each slide is absolutely positioned shapes on top of it.

use std::io::{Cursor, Seek, Write};

use findoc_core::units::hundredth_points;
use findoc_core::{Metadata, Rgb, Theme};
use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::constants::*;
use crate::error::{PptxError, Result};
use crate::shape::{Shape, TextFrame, TextParagraph, TextSpan};
use crate::slide::Slide;

/// Colors and fonts written into `ppt/theme/theme1.xml`
#[derive(Debug, Clone, PartialEq)]
pub struct DeckTheme {
    pub major_font: String,
    pub minor_font: String,
    pub dark: Rgb,
    pub light: Rgb,
    /// accent1 … accent6
    pub accents: [Rgb; 6],
}

impl DeckTheme {
    /// Title and body fonts plus the brand colors of `theme`
    pub fn from_theme(theme: &Theme) -> Self {
        let p = &theme.palette;
        Self {
            major_font: theme.fonts.title.clone(),
            minor_font: theme.fonts.body.clone(),
            dark: p.slate_900,
            light: p.slate_100,
            accents: [
                p.emerald_600,
                p.blue_500,
                p.amber_500,
                p.rose_500,
                p.slate_500,
                p.emerald_400,
            ],
        }
    }
}

/// PPTX document writer
pub struct PptxWriter {
    /// Slides to render
    slides: Vec<Slide>,

    theme: DeckTheme,

    metadata: Metadata,

    /// Presentation title
    title: Option<String>,
}

impl PptxWriter {
    /// Create a writer for `theme`
    pub fn new(theme: DeckTheme) -> Self {
        Self {
            slides: Vec::new(),
            theme,
            metadata: Metadata::default(),
            title: None,
        }
    }

    /// Set the presentation title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set creator, language and timestamp
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Add a slide
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Add multiple slides
    pub fn add_slides(&mut self, slides: impl IntoIterator<Item = Slide>) {
        self.slides.extend(slides);
    }

    /// Slides added so far
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Generate the PPTX as bytes
    pub fn generate(&self) -> Result<Vec<u8>> {
        if self.slides.is_empty() {
            return Err(PptxError::EmptyPresentation);
        }
        self.validate_shapes()?;

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        write_part(&mut zip, options, "[Content_Types].xml", &self.content_types_xml())?;
        write_part(&mut zip, options, "_rels/.rels", ROOT_RELS)?;
        write_part(&mut zip, options, "docProps/app.xml", &self.app_xml())?;
        write_part(&mut zip, options, "docProps/core.xml", &self.core_xml())?;
        write_part(&mut zip, options, "ppt/presentation.xml", &self.presentation_xml())?;
        write_part(
            &mut zip,
            options,
            "ppt/_rels/presentation.xml.rels",
            &self.presentation_rels(),
        )?;
        write_part(&mut zip, options, "ppt/presProps.xml", &pres_props_xml())?;
        write_part(&mut zip, options, "ppt/tableStyles.xml", &table_styles_xml())?;
        write_part(&mut zip, options, "ppt/viewProps.xml", &view_props_xml())?;
        write_part(&mut zip, options, "ppt/theme/theme1.xml", &self.theme_xml())?;
        write_part(
            &mut zip,
            options,
            "ppt/slideMasters/slideMaster1.xml",
            &slide_master_xml(),
        )?;
        write_part(
            &mut zip,
            options,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            &slide_master_rels(),
        )?;
        write_part(
            &mut zip,
            options,
            "ppt/slideLayouts/slideLayout1.xml",
            &slide_layout_xml(),
        )?;
        write_part(
            &mut zip,
            options,
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            &slide_layout_rels(),
        )?;

        for (i, slide) in self.slides.iter().enumerate() {
            let number = i + 1;
            write_part(
                &mut zip,
                options,
                &format!("ppt/slides/slide{number}.xml"),
                &self.slide_xml(slide),
            )?;
            write_part(
                &mut zip,
                options,
                &format!("ppt/slides/_rels/slide{number}.xml.rels"),
                &slide_rels(),
            )?;
            debug!(slide = number, shapes = slide.len(), "Slide written");
        }

        let cursor = zip.finish()?;
        let bytes = cursor.into_inner();
        info!(slides = self.slides.len(), bytes = bytes.len(), "PPTX package written");
        Ok(bytes)
    }

    /// Reject shapes with a negative extent
    fn validate_shapes(&self) -> Result<()> {
        for (i, slide) in self.slides.iter().enumerate() {
            for (j, shape) in slide.shapes.iter().enumerate() {
                let b = &shape.bounds;
                if b.width.to_emu() < 0 || b.height.to_emu() < 0 {
                    return Err(PptxError::invalid_shape(
                        i + 1,
                        shape_name(shape, j + 2),
                        format!("negative extent {}x{} EMU", b.width.to_emu(), b.height.to_emu()),
                    ));
                }
            }
        }
        Ok(())
    }

    fn content_types_xml(&self) -> String {
        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
  <Override PartName="/ppt/presProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presProps+xml"/>
  <Override PartName="/ppt/tableStyles.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml"/>
  <Override PartName="/ppt/viewProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml"/>
  <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
  <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
  <Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
  <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
"#,
        );

        for i in 1..=self.slides.len() {
            content.push_str(&format!(
                "  <Override PartName=\"/ppt/slides/slide{i}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slide+xml\"/>\n"
            ));
        }

        content.push_str("</Types>");
        content
    }

    fn app_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
  <TotalTime>0</TotalTime>
  <Application>findoc</Application>
  <PresentationFormat>Widescreen</PresentationFormat>
  <Slides>{}</Slides>
  <Notes>0</Notes>
  <HiddenSlides>0</HiddenSlides>
  <ScaleCrop>false</ScaleCrop>
  <LinksUpToDate>false</LinksUpToDate>
  <SharedDoc>false</SharedDoc>
  <HyperlinksChanged>false</HyperlinksChanged>
  <AppVersion>1.0</AppVersion>
</Properties>"#,
            self.slides.len()
        )
    }

    fn core_xml(&self) -> String {
        let meta = &self.metadata;
        let title = self.title.as_deref().unwrap_or("Presentation");

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>{}</dc:title>
  <dc:creator>{}</dc:creator>
  <cp:lastModifiedBy>{}</cp:lastModifiedBy>
  <dc:language>{}</dc:language>
  <dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>
  <dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>
</cp:coreProperties>"#,
            escape(title),
            escape(meta.creator.as_str()),
            escape(meta.creator.as_str()),
            escape(meta.language.as_str()),
            escape(meta.timestamp.as_str()),
            escape(meta.timestamp.as_str()),
        )
    }

    fn presentation_xml(&self) -> String {
        let mut slide_refs = String::new();
        for i in 1..=self.slides.len() {
            // rId1=slideMaster, rId2=presProps, rId3=theme, rId4=viewProps, rId5=tableStyles
            slide_refs.push_str(&format!(
                "    <p:sldId id=\"{}\" r:id=\"rId{}\"/>\n",
                255 + i,
                i + 5
            ));
        }

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}" saveSubsetFonts="1">
  <p:sldMasterIdLst>
    <p:sldMasterId id="2147483648" r:id="rId1"/>
  </p:sldMasterIdLst>
  <p:sldIdLst>
{slide_refs}  </p:sldIdLst>
  <p:sldSz cx="{WIDESCREEN_SLIDE_WIDTH_EMU}" cy="{WIDESCREEN_SLIDE_HEIGHT_EMU}"/>
  <p:notesSz cx="{WIDESCREEN_SLIDE_HEIGHT_EMU}" cy="{WIDESCREEN_SLIDE_WIDTH_EMU}"/>
</p:presentation>"#
        )
    }

    fn presentation_rels(&self) -> String {
        let mut rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">
  <Relationship Id="rId1" Type="{REL_TYPE_SLIDE_MASTER}" Target="slideMasters/slideMaster1.xml"/>
  <Relationship Id="rId2" Type="{REL_TYPE_PRES_PROPS}" Target="presProps.xml"/>
  <Relationship Id="rId3" Type="{REL_TYPE_THEME}" Target="theme/theme1.xml"/>
  <Relationship Id="rId4" Type="{REL_TYPE_VIEW_PROPS}" Target="viewProps.xml"/>
  <Relationship Id="rId5" Type="{REL_TYPE_TABLE_STYLES}" Target="tableStyles.xml"/>
"#
        );

        for i in 1..=self.slides.len() {
            rels.push_str(&format!(
                "  <Relationship Id=\"rId{}\" Type=\"{}\" Target=\"slides/slide{}.xml\"/>\n",
                i + 5,
                REL_TYPE_SLIDE,
                i
            ));
        }

        rels.push_str("</Relationships>");
        rels
    }

    fn theme_xml(&self) -> String {
        let t = &self.theme;
        let accents: String = t
            .accents
            .iter()
            .enumerate()
            .map(|(i, color)| {
                format!(
                    "      <a:accent{n}><a:srgbClr val=\"{color}\"/></a:accent{n}>\n",
                    n = i + 1
                )
            })
            .collect();

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="{NS_DRAWING}" name="findoc">
  <a:themeElements>
    <a:clrScheme name="findoc">
      <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
      <a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
      <a:dk2><a:srgbClr val="{dark}"/></a:dk2>
      <a:lt2><a:srgbClr val="{light}"/></a:lt2>
{accents}      <a:hlink><a:srgbClr val="{hlink}"/></a:hlink>
      <a:folHlink><a:srgbClr val="{fol}"/></a:folHlink>
    </a:clrScheme>
    <a:fontScheme name="findoc">
      <a:majorFont>
        <a:latin typeface="{major}"/>
        <a:ea typeface=""/>
        <a:cs typeface=""/>
      </a:majorFont>
      <a:minorFont>
        <a:latin typeface="{minor}"/>
        <a:ea typeface=""/>
        <a:cs typeface=""/>
      </a:minorFont>
    </a:fontScheme>
    <a:fmtScheme name="findoc">
      <a:fillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:fillStyleLst>
      <a:lnStyleLst>
        <a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
      </a:lnStyleLst>
      <a:effectStyleLst>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
      </a:effectStyleLst>
      <a:bgFillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:bgFillStyleLst>
    </a:fmtScheme>
  </a:themeElements>
</a:theme>"#,
            dark = t.dark,
            light = t.light,
            hlink = t.accents[1],
            fol = t.accents[4],
            major = escape(t.major_font.as_str()),
            minor = escape(t.minor_font.as_str()),
        )
    }

    /// Generate slide XML content
    fn slide_xml(&self, slide: &Slide) -> String {
        let background = slide
            .background
            .map(|color| {
                format!(
                    "    <p:bg>\n      <p:bgPr>\n        <a:solidFill><a:srgbClr val=\"{color}\"/></a:solidFill>\n        <a:effectLst/>\n      </p:bgPr>\n    </p:bg>\n"
                )
            })
            .unwrap_or_default();

        let mut shapes = String::new();
        for (i, shape) in slide.shapes.iter().enumerate() {
            // id 1 is the group shape
            shapes.push_str(&self.shape_xml(shape, i + 2));
        }

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:cSld>
{background}    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
{shapes}    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>"#
        )
    }

    fn shape_xml(&self, shape: &Shape, id: usize) -> String {
        let b = &shape.bounds;
        let tx_box = if shape.is_text_box { " txBox=\"1\"" } else { "" };

        let fill = match shape.fill {
            Some(color) => format!("<a:solidFill><a:srgbClr val=\"{color}\"/></a:solidFill>"),
            None => "<a:noFill/>".to_string(),
        };
        let line = match shape.outline {
            Some(outline) => format!(
                "<a:ln w=\"{}\"><a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill></a:ln>",
                outline.width.to_emu(),
                outline.color
            ),
            None => "<a:ln><a:noFill/></a:ln>".to_string(),
        };
        let body = shape
            .text
            .as_ref()
            .map(|frame| self.text_body_xml(frame))
            .unwrap_or_default();

        format!(
            r#"      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="{id}" name="{name}"/>
          <p:cNvSpPr{tx_box}/>
          <p:nvPr/>
        </p:nvSpPr>
        <p:spPr>
          <a:xfrm>
            <a:off x="{x}" y="{y}"/>
            <a:ext cx="{cx}" cy="{cy}"/>
          </a:xfrm>
          <a:prstGeom prst="{preset}"><a:avLst/></a:prstGeom>
          {fill}
          {line}
        </p:spPr>
{body}      </p:sp>
"#,
            name = escape(shape_name(shape, id).as_str()),
            x = b.x.to_emu(),
            y = b.y.to_emu(),
            cx = b.width.to_emu(),
            cy = b.height.to_emu(),
            preset = shape.geometry.preset(),
        )
    }

    fn text_body_xml(&self, frame: &TextFrame) -> String {
        let wrap = if frame.word_wrap { "square" } else { "none" };
        let mut xml = format!(
            "        <p:txBody>\n          <a:bodyPr wrap=\"{wrap}\" rtlCol=\"0\" anchor=\"{}\"/>\n          <a:lstStyle/>\n",
            frame.anchor.as_str()
        );

        if frame.paragraphs.is_empty() {
            xml.push_str("          <a:p/>\n");
        }
        for paragraph in &frame.paragraphs {
            xml.push_str(&self.paragraph_xml(paragraph));
        }

        xml.push_str("        </p:txBody>\n");
        xml
    }

    fn paragraph_xml(&self, paragraph: &TextParagraph) -> String {
        let mut ppr = String::new();
        if let Some(pitch) = paragraph.line_spacing {
            ppr.push_str(&format!(
                "<a:lnSpc><a:spcPts val=\"{}\"/></a:lnSpc>",
                pitch.to_hundredth_points()
            ));
        }
        if paragraph.space_before.to_emu() > 0 {
            ppr.push_str(&format!(
                "<a:spcBef><a:spcPts val=\"{}\"/></a:spcBef>",
                paragraph.space_before.to_hundredth_points()
            ));
        }
        if paragraph.space_after.to_emu() > 0 {
            ppr.push_str(&format!(
                "<a:spcAft><a:spcPts val=\"{}\"/></a:spcAft>",
                paragraph.space_after.to_hundredth_points()
            ));
        }

        let mut xml = format!(
            "          <a:p>\n            <a:pPr algn=\"{}\">{ppr}</a:pPr>\n",
            paragraph.align.as_str()
        );
        for span in &paragraph.spans {
            self.span_xml(span, &mut xml);
        }
        xml.push_str("          </a:p>\n");
        xml
    }

    /// Runs for one span; each `\n` becomes `<a:br>`
    fn span_xml(&self, span: &TextSpan, xml: &mut String) {
        let rpr = self.run_properties_xml(span);
        for (i, line) in span.text.split('\n').enumerate() {
            if i > 0 {
                xml.push_str(&format!("            <a:br>{rpr}</a:br>\n"));
            }
            if line.is_empty() {
                continue;
            }
            xml.push_str(&format!(
                "            <a:r>{rpr}<a:t>{}</a:t></a:r>\n",
                escape(line)
            ));
        }
    }

    fn run_properties_xml(&self, span: &TextSpan) -> String {
        let style = &span.style;
        let mut attrs = format!(
            "lang=\"{}\" sz=\"{}\"",
            escape(self.metadata.language.as_str()),
            hundredth_points(style.size)
        );
        if style.bold {
            attrs.push_str(" b=\"1\"");
        }
        if style.italic {
            attrs.push_str(" i=\"1\"");
        }
        let font = escape(style.font.as_str());

        format!(
            "<a:rPr {attrs} dirty=\"0\"><a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill><a:latin typeface=\"{font}\"/><a:cs typeface=\"{font}\"/></a:rPr>",
            style.color
        )
    }
}

/// Check a part for well-formedness, then stream it into the archive
fn write_part<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    options: SimpleFileOptions,
    path: &str,
    content: &str,
) -> Result<()> {
    check_well_formed(content)?;
    zip.start_file(path, options)?;
    zip.write_all(content.as_bytes())?;
    Ok(())
}

fn check_well_formed(xml: &str) -> std::result::Result<(), quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    loop {
        if let Event::Eof = reader.read_event()? {
            return Ok(());
        }
    }
}

/// Name shown in the selection pane
fn shape_name(shape: &Shape, id: usize) -> String {
    let base = if shape.is_text_box {
        "TextBox"
    } else {
        shape.geometry.display_name()
    };
    format!("{base} {}", id - 1)
}

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#;

fn pres_props_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentationPr xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}"/>"#
    )
}

fn table_styles_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:tblStyleLst xmlns:a="{NS_DRAWING}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#
    )
}

fn view_props_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:viewPr xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:normalViewPr>
    <p:restoredLeft sz="15620"/>
    <p:restoredTop sz="94660"/>
  </p:normalViewPr>
  <p:slideViewPr>
    <p:cSldViewPr>
      <p:cViewPr>
        <p:scale>
          <a:sx n="100" d="100"/>
          <a:sy n="100" d="100"/>
        </p:scale>
        <p:origin x="0" y="0"/>
      </p:cViewPr>
    </p:cSldViewPr>
  </p:slideViewPr>
</p:viewPr>"#
    )
}

fn slide_master_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:cSld>
    <p:bg>
      <p:bgRef idx="1001">
        <a:schemeClr val="bg1"/>
      </p:bgRef>
    </p:bg>
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
    </p:spTree>
  </p:cSld>
  <p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
  <p:sldLayoutIdLst>
    <p:sldLayoutId id="2147483649" r:id="rId1"/>
  </p:sldLayoutIdLst>
</p:sldMaster>"#
    )
}

fn slide_master_rels() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">
  <Relationship Id="rId1" Type="{REL_TYPE_SLIDE_LAYOUT}" Target="../slideLayouts/slideLayout1.xml"/>
  <Relationship Id="rId2" Type="{REL_TYPE_THEME}" Target="../theme/theme1.xml"/>
</Relationships>"#
    )
}

fn slide_layout_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}" type="blank" preserve="1">
  <p:cSld name="Blank">
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>"#
    )
}

fn slide_layout_rels() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">
  <Relationship Id="rId1" Type="{REL_TYPE_SLIDE_MASTER}" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#
    )
}

fn slide_rels() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">
  <Relationship Id="rId1" Type="{REL_TYPE_SLIDE_LAYOUT}" Target="../slideLayouts/slideLayout1.xml"/>
</Relationships>"#
    )
}
