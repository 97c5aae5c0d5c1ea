// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Package a [`Document`] as an Office Open XML (`.docx`) file.
//!
//! Responsibilities:
//! - Serialize headings and paragraphs into WordprocessingML.
//! - Emit the package plumbing (content types, relationships, styles, core properties).
//! - Write everything into a deflated ZIP at the requested path.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use zip::{CompressionMethod, write::FileOptions};

use crate::models::document::{Block, Document};
use crate::utils::{RunPiece, split_run_pieces};

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const CT_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const OFFICE_REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Application name written into the package properties.
const APPLICATION: &str = "bwdocx";

/// Create the `.docx` file at `output` from `document`.
///
/// The parent directory must already exist. `created` is stored as both the
/// creation and modification time of the document.
///
/// # Errors
///
/// Returns an error when the file cannot be created or any part fails to
/// serialize or write.
pub fn write_docx(output: &Path, document: &Document, created: OffsetDateTime) -> Result<()> {
    let timestamp = created
        .to_offset(UtcOffset::UTC)
        .format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second]Z"
        ))
        .map_err(|err| anyhow!("Failed to format creation timestamp: {}", err))?;

    let parts = [
        ("[Content_Types].xml", content_types_xml()?),
        ("_rels/.rels", package_rels_xml()?),
        ("docProps/core.xml", core_props_xml(document.title(), &timestamp)?),
        ("docProps/app.xml", app_props_xml()?),
        ("word/document.xml", document_xml(document)?),
        ("word/_rels/document.xml.rels", document_rels_xml()?),
        ("word/styles.xml", styles_xml()?),
    ];

    let file = File::create(output)
        .with_context(|| format!("Failed to create document file {:?}", output))?;
    let mut zip = zip::ZipWriter::new(file);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, bytes) in &parts {
        zip.start_file(*name, options)
            .with_context(|| format!("Failed to add {} to document", name))?;
        zip.write_all(bytes)
            .with_context(|| format!("Failed to write {} into document", name))?;
    }

    zip.finish().context("Failed to finalize document")?;
    tracing::debug!(blocks = document.blocks().len(), ?output, "Wrote document");
    Ok(())
}

/// Thin event writer for one XML part.
struct XmlPart {
    writer: Writer<Vec<u8>>,
}

impl XmlPart {
    fn new() -> Result<Self> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(Self { writer })
    }

    fn open(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let start = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Start(start))?;
        Ok(())
    }

    fn close(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let start = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Empty(start))?;
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<()> {
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// `<name attrs>text</name>`
    fn element(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
        self.open(name, attrs)?;
        self.text(text)?;
        self.close(name)
    }

    fn finish(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

fn content_types_xml() -> Result<Vec<u8>> {
    let mut xml = XmlPart::new()?;
    xml.open("Types", &[("xmlns", CT_NS)])?;
    xml.empty(
        "Default",
        &[
            ("Extension", "rels"),
            (
                "ContentType",
                "application/vnd.openxmlformats-package.relationships+xml",
            ),
        ],
    )?;
    xml.empty(
        "Default",
        &[("Extension", "xml"), ("ContentType", "application/xml")],
    )?;

    let overrides = [
        (
            "/word/document.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
        ),
        (
            "/word/styles.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
        ),
        (
            "/docProps/core.xml",
            "application/vnd.openxmlformats-package.core-properties+xml",
        ),
        (
            "/docProps/app.xml",
            "application/vnd.openxmlformats-officedocument.extended-properties+xml",
        ),
    ];
    for (part, content_type) in overrides {
        xml.empty(
            "Override",
            &[("PartName", part), ("ContentType", content_type)],
        )?;
    }

    xml.close("Types")?;
    Ok(xml.finish())
}

fn relationships_xml(relationships: &[(&str, String, &str)]) -> Result<Vec<u8>> {
    let mut xml = XmlPart::new()?;
    xml.open("Relationships", &[("xmlns", REL_NS)])?;
    for (id, kind, target) in relationships {
        xml.empty(
            "Relationship",
            &[("Id", *id), ("Type", kind.as_str()), ("Target", *target)],
        )?;
    }
    xml.close("Relationships")?;
    Ok(xml.finish())
}

fn package_rels_xml() -> Result<Vec<u8>> {
    relationships_xml(&[
        (
            "rId1",
            format!("{OFFICE_REL}/officeDocument"),
            "word/document.xml",
        ),
        (
            "rId2",
            "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties"
                .to_string(),
            "docProps/core.xml",
        ),
        (
            "rId3",
            format!("{OFFICE_REL}/extended-properties"),
            "docProps/app.xml",
        ),
    ])
}

fn document_rels_xml() -> Result<Vec<u8>> {
    relationships_xml(&[("rId1", format!("{OFFICE_REL}/styles"), "styles.xml")])
}

fn core_props_xml(title: &str, timestamp: &str) -> Result<Vec<u8>> {
    let mut xml = XmlPart::new()?;
    xml.open(
        "cp:coreProperties",
        &[
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;
    xml.element("dc:title", &[], title)?;
    xml.element("dc:creator", &[], APPLICATION)?;
    xml.element(
        "dcterms:created",
        &[("xsi:type", "dcterms:W3CDTF")],
        timestamp,
    )?;
    xml.element(
        "dcterms:modified",
        &[("xsi:type", "dcterms:W3CDTF")],
        timestamp,
    )?;
    xml.close("cp:coreProperties")?;
    Ok(xml.finish())
}

fn app_props_xml() -> Result<Vec<u8>> {
    let mut xml = XmlPart::new()?;
    xml.open(
        "Properties",
        &[(
            "xmlns",
            "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
        )],
    )?;
    xml.element("Application", &[], APPLICATION)?;
    xml.close("Properties")?;
    Ok(xml.finish())
}

fn document_xml(document: &Document) -> Result<Vec<u8>> {
    let mut xml = XmlPart::new()?;
    xml.open("w:document", &[("xmlns:w", W_NS)])?;
    xml.open("w:body", &[])?;

    for block in document.blocks() {
        xml.open("w:p", &[])?;
        let text = match block {
            Block::Heading { level, text } => {
                let style = format!("Heading{level}");
                xml.open("w:pPr", &[])?;
                xml.empty("w:pStyle", &[("w:val", style.as_str())])?;
                xml.close("w:pPr")?;
                text
            }
            Block::Paragraph(text) => text,
        };
        write_run(&mut xml, text)?;
        xml.close("w:p")?;
    }

    // US Letter with one-inch margins, in twentieths of a point.
    xml.open("w:sectPr", &[])?;
    xml.empty("w:pgSz", &[("w:w", "12240"), ("w:h", "15840")])?;
    xml.empty(
        "w:pgMar",
        &[
            ("w:top", "1440"),
            ("w:right", "1440"),
            ("w:bottom", "1440"),
            ("w:left", "1440"),
            ("w:header", "720"),
            ("w:footer", "720"),
            ("w:gutter", "0"),
        ],
    )?;
    xml.close("w:sectPr")?;

    xml.close("w:body")?;
    xml.close("w:document")?;
    Ok(xml.finish())
}

/// Emit one run for `text`, mapping line breaks and tabs to their elements.
fn write_run(xml: &mut XmlPart, text: &str) -> Result<()> {
    let pieces = split_run_pieces(text);
    if pieces.is_empty() {
        return Ok(());
    }

    xml.open("w:r", &[])?;
    for piece in pieces {
        match piece {
            RunPiece::Text(chunk) => {
                xml.element("w:t", &[("xml:space", "preserve")], chunk)?;
            }
            RunPiece::Break => xml.empty("w:br", &[])?,
            RunPiece::Tab => xml.empty("w:tab", &[])?,
        }
    }
    xml.close("w:r")
}

/// Half-point font size for a heading level.
fn heading_size(level: u8) -> &'static str {
    match level {
        1 => "32",
        2 => "26",
        3 => "24",
        _ => "22",
    }
}

fn styles_xml() -> Result<Vec<u8>> {
    let mut xml = XmlPart::new()?;
    xml.open("w:styles", &[("xmlns:w", W_NS)])?;

    xml.open("w:docDefaults", &[])?;
    xml.open("w:rPrDefault", &[])?;
    xml.open("w:rPr", &[])?;
    xml.empty(
        "w:rFonts",
        &[
            ("w:ascii", "Calibri"),
            ("w:hAnsi", "Calibri"),
            ("w:eastAsia", "Calibri"),
            ("w:cs", "Calibri"),
        ],
    )?;
    xml.empty("w:sz", &[("w:val", "22")])?;
    xml.empty("w:szCs", &[("w:val", "22")])?;
    xml.empty("w:lang", &[("w:val", "en-US")])?;
    xml.close("w:rPr")?;
    xml.close("w:rPrDefault")?;
    xml.open("w:pPrDefault", &[])?;
    xml.open("w:pPr", &[])?;
    xml.empty(
        "w:spacing",
        &[("w:after", "160"), ("w:line", "259"), ("w:lineRule", "auto")],
    )?;
    xml.close("w:pPr")?;
    xml.close("w:pPrDefault")?;
    xml.close("w:docDefaults")?;

    xml.open(
        "w:style",
        &[
            ("w:type", "paragraph"),
            ("w:default", "1"),
            ("w:styleId", "Normal"),
        ],
    )?;
    xml.empty("w:name", &[("w:val", "Normal")])?;
    xml.empty("w:qFormat", &[])?;
    xml.close("w:style")?;

    for level in 1..=9u8 {
        let style_id = format!("Heading{level}");
        let name = format!("heading {level}");
        let outline = (level - 1).to_string();
        let size = heading_size(level);

        xml.open(
            "w:style",
            &[("w:type", "paragraph"), ("w:styleId", style_id.as_str())],
        )?;
        xml.empty("w:name", &[("w:val", name.as_str())])?;
        xml.empty("w:basedOn", &[("w:val", "Normal")])?;
        xml.empty("w:next", &[("w:val", "Normal")])?;
        xml.empty("w:uiPriority", &[("w:val", "9")])?;
        xml.empty("w:qFormat", &[])?;
        xml.open("w:pPr", &[])?;
        xml.empty("w:keepNext", &[])?;
        xml.empty("w:keepLines", &[])?;
        xml.empty("w:spacing", &[("w:before", "240"), ("w:after", "40")])?;
        xml.empty("w:outlineLvl", &[("w:val", outline.as_str())])?;
        xml.close("w:pPr")?;
        xml.open("w:rPr", &[])?;
        xml.empty("w:b", &[])?;
        xml.empty("w:color", &[("w:val", "2F5496")])?;
        xml.empty("w:sz", &[("w:val", size)])?;
        xml.empty("w:szCs", &[("w:val", size)])?;
        xml.close("w:rPr")?;
        xml.close("w:style")?;
    }

    xml.close("w:styles")?;
    Ok(xml.finish())
}
