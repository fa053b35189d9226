use crate::assemble::{AssembledDocument, HEADING_STYLE_ID};
use crate::block::{Alignment, FormattedBlock, ParagraphFormat, RunFormat};
use crate::config::DocumentStyleConfig;
use crate::error::{Error, Result};
use log::debug;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const NS_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

fn xml_escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn fonts_xml(font: &str) -> String {
    let font = xml_escape_text(font);
    format!(r#"<w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}" w:eastAsia="{font}"/>"#)
}

fn paragraph_properties_xml(format: &ParagraphFormat) -> String {
    let mut ppr = String::new();
    if let Some(style) = format.style_id {
        ppr.push_str(&format!(r#"<w:pStyle w:val="{style}"/>"#));
    }
    if format.spacing_before.is_some() || format.spacing_after.is_some() {
        ppr.push_str("<w:spacing");
        if let Some(before) = format.spacing_before {
            ppr.push_str(&format!(r#" w:before="{before}""#));
        }
        if let Some(after) = format.spacing_after {
            ppr.push_str(&format!(r#" w:after="{after}""#));
        }
        ppr.push_str("/>");
    }
    if format.alignment == Alignment::Center {
        ppr.push_str(r#"<w:jc w:val="center"/>"#);
    }

    if ppr.is_empty() {
        ppr
    } else {
        format!("<w:pPr>{ppr}</w:pPr>")
    }
}

fn run_properties_xml(format: &RunFormat) -> String {
    // Devanagari is complex script, so every toggle is set for both script classes.
    let mut rpr = String::from("<w:rPr>");
    if format.bold {
        rpr.push_str("<w:b/><w:bCs/>");
    }
    if format.italic {
        rpr.push_str("<w:i/><w:iCs/>");
    }
    if let Some(color) = &format.color {
        rpr.push_str(&format!(r#"<w:color w:val="{}"/>"#, xml_escape_text(color)));
    }
    rpr.push_str(&format!(
        r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#,
        format.size
    ));
    rpr.push_str("</w:rPr>");
    rpr
}

fn block_xml(block: &FormattedBlock) -> String {
    let Some(styled) = block.styled_text() else {
        return r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#.to_string();
    };

    format!(
        r#"<w:p>{}<w:r>{}<w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        paragraph_properties_xml(&styled.paragraph),
        run_properties_xml(&styled.run),
        xml_escape_text(&styled.text)
    )
}

pub fn build_document_xml(doc: &AssembledDocument, config: &DocumentStyleConfig) -> String {
    let mut body = String::new();
    for block in &doc.blocks {
        body.push_str(&block_xml(block));
        body.push('\n');
    }

    let margin = config.page_margin;
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{NS_W}" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <w:body>
{body}    <w:sectPr>
      <w:pgSz w:w="12240" w:h="15840"/>
      <w:pgMar w:top="{margin}" w:right="{margin}" w:bottom="{margin}" w:left="{margin}" w:header="708" w:footer="708" w:gutter="0"/>
      <w:cols w:space="708"/>
      <w:docGrid w:linePitch="360"/>
    </w:sectPr>
  </w:body>
</w:document>"#
    )
}

pub fn build_styles_xml(config: &DocumentStyleConfig) -> String {
    let fonts = fonts_xml(&config.font);
    let body_size = config.body_size;
    let heading_size = config.heading.size;
    let heading_color = xml_escape_text(&config.heading.color);
    let before = config.heading_spacing_before;
    let after = config.heading_spacing_after;

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="{NS_W}">
  <w:docDefaults>
    <w:rPrDefault>
      <w:rPr>
        {fonts}
        <w:sz w:val="{body_size}"/>
        <w:szCs w:val="{body_size}"/>
      </w:rPr>
    </w:rPrDefault>
    <w:pPrDefault/>
  </w:docDefaults>
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:qFormat/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="{HEADING_STYLE_ID}">
    <w:name w:val="heading 1"/>
    <w:basedOn w:val="Normal"/>
    <w:next w:val="Normal"/>
    <w:uiPriority w:val="9"/>
    <w:qFormat/>
    <w:pPr>
      <w:keepNext/>
      <w:keepLines/>
      <w:spacing w:before="{before}" w:after="{after}"/>
      <w:outlineLvl w:val="0"/>
    </w:pPr>
    <w:rPr>
      {fonts}
      <w:b/>
      <w:bCs/>
      <w:color w:val="{heading_color}"/>
      <w:sz w:val="{heading_size}"/>
      <w:szCs w:val="{heading_size}"/>
    </w:rPr>
  </w:style>
</w:styles>"#
    )
}

fn build_core_xml(title: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>{}</dc:title>
</cp:coreProperties>"#,
        xml_escape_text(title)
    )
}

fn content_types_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
</Types>"#
}

fn rels_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{NS_RELS}">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
</Relationships>"#
    )
}

fn word_rels_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{NS_RELS}">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#
    )
}

/// Serializes the document into a complete `.docx` package held in memory.
pub fn to_docx_bytes(doc: &AssembledDocument, config: &DocumentStyleConfig) -> Result<Vec<u8>> {
    let parts = [
        ("[Content_Types].xml", content_types_xml().to_string()),
        ("_rels/.rels", rels_xml()),
        ("docProps/core.xml", build_core_xml(&doc.title)),
        ("word/document.xml", build_document_xml(doc, config)),
        ("word/_rels/document.xml.rels", word_rels_xml()),
        ("word/styles.xml", build_styles_xml(config)),
    ];

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let opt = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (name, xml) in &parts {
        zip.start_file(*name, opt)?;
        zip.write_all(xml.as_bytes())?;
    }
    let bytes = zip.finish()?.into_inner();

    debug!("packaged {} parts into {} bytes", parts.len(), bytes.len());
    Ok(bytes)
}

/// Writes a finished package, creating the parent directory if needed.
pub fn write_docx(out_path: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source| Error::Write {
        path: out_path.to_path_buf(),
        source,
    };

    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(out_path, bytes).map_err(write_err)
}
