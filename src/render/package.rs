//! Open Packaging Conventions parts and the zip container.

use super::xml::XmlWriter;
use crate::error::Result;
use crate::model::{DocumentStyle, Metadata};
use chrono::SecondsFormat;
use std::io::{Seek, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub(crate) const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub(crate) const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

pub(crate) const DOCUMENT_PART: &str = "word/document.xml";
pub(crate) const STYLES_PART: &str = "word/styles.xml";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/><Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/><Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/><Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/></Relationships>"#;

const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

/// Zip the finished parts into a `.docx` container.
///
/// Entries carry the zip epoch as their timestamp, so equal parts give
/// equal bytes.
pub(crate) fn write_package<W: Write + Seek>(
    writer: W,
    document_xml: &[u8],
    style: &DocumentStyle,
    metadata: &Metadata,
) -> Result<W> {
    let parts: [(&str, Vec<u8>); 7] = [
        ("[Content_Types].xml", CONTENT_TYPES.as_bytes().to_vec()),
        ("_rels/.rels", PACKAGE_RELS.as_bytes().to_vec()),
        ("docProps/core.xml", core_properties(metadata)?),
        ("docProps/app.xml", app_properties()?),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS.as_bytes().to_vec()),
        (STYLES_PART, styles(style)?),
        (DOCUMENT_PART, document_xml.to_vec()),
    ];

    let mut zip = ZipWriter::new(writer);
    for (name, data) in &parts {
        zip.start_file(*name, file_options())?;
        zip.write_all(data)?;
    }
    log::debug!("Packaged {} parts", parts.len());
    Ok(zip.finish()?)
}

fn file_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default())
}

/// `rFonts` attributes naming one family for every script.
pub(crate) fn font_attrs(family: &str) -> [(&str, &str); 4] {
    [
        ("w:ascii", family),
        ("w:hAnsi", family),
        ("w:cs", family),
        ("w:eastAsia", family),
    ]
}

pub(crate) fn border_set(w: &mut XmlWriter, container: &str) -> Result<()> {
    w.start(container, &[])?;
    for edge in ["w:top", "w:left", "w:bottom", "w:right", "w:insideH", "w:insideV"] {
        w.empty(
            edge,
            &[
                ("w:val", "single"),
                ("w:sz", "4"),
                ("w:space", "0"),
                ("w:color", "auto"),
            ],
        )?;
    }
    w.end(container)
}

fn styles(style: &DocumentStyle) -> Result<Vec<u8>> {
    let size = style.half_points().to_string();
    let line = style.line_240ths().to_string();
    let fonts = font_attrs(&style.font_family);

    let mut w = XmlWriter::with_declaration()?;
    w.start("w:styles", &[("xmlns:w", W_NS)])?;

    w.start("w:docDefaults", &[])?;
    w.start("w:rPrDefault", &[])?;
    w.start("w:rPr", &[])?;
    w.empty("w:rFonts", &fonts)?;
    w.empty("w:sz", &[("w:val", &size)])?;
    w.empty("w:szCs", &[("w:val", &size)])?;
    w.end("w:rPr")?;
    w.end("w:rPrDefault")?;
    w.start("w:pPrDefault", &[])?;
    w.start("w:pPr", &[])?;
    w.empty("w:spacing", &[("w:line", &line), ("w:lineRule", "auto")])?;
    w.end("w:pPr")?;
    w.end("w:pPrDefault")?;
    w.end("w:docDefaults")?;

    w.start(
        "w:style",
        &[("w:type", "paragraph"), ("w:default", "1"), ("w:styleId", "Normal")],
    )?;
    w.empty("w:name", &[("w:val", "Normal")])?;
    w.empty("w:qFormat", &[])?;
    w.start("w:pPr", &[])?;
    w.empty("w:spacing", &[("w:line", &line), ("w:lineRule", "auto")])?;
    w.end("w:pPr")?;
    w.start("w:rPr", &[])?;
    w.empty("w:rFonts", &fonts)?;
    w.empty("w:sz", &[("w:val", &size)])?;
    w.empty("w:szCs", &[("w:val", &size)])?;
    w.end("w:rPr")?;
    w.end("w:style")?;

    w.start("w:style", &[("w:type", "paragraph"), ("w:styleId", "Title")])?;
    w.empty("w:name", &[("w:val", "Title")])?;
    w.empty("w:basedOn", &[("w:val", "Normal")])?;
    w.empty("w:next", &[("w:val", "Normal")])?;
    w.empty("w:qFormat", &[])?;
    w.start("w:pPr", &[])?;
    w.empty("w:jc", &[("w:val", "center")])?;
    w.end("w:pPr")?;
    w.start("w:rPr", &[])?;
    w.empty("w:b", &[])?;
    w.empty("w:color", &[("w:val", "000000")])?;
    w.end("w:rPr")?;
    w.end("w:style")?;

    w.start(
        "w:style",
        &[("w:type", "table"), ("w:default", "1"), ("w:styleId", "TableNormal")],
    )?;
    w.empty("w:name", &[("w:val", "Normal Table")])?;
    w.start("w:tblPr", &[])?;
    w.start("w:tblCellMar", &[])?;
    w.empty("w:top", &[("w:w", "0"), ("w:type", "dxa")])?;
    w.empty("w:left", &[("w:w", "108"), ("w:type", "dxa")])?;
    w.empty("w:bottom", &[("w:w", "0"), ("w:type", "dxa")])?;
    w.empty("w:right", &[("w:w", "108"), ("w:type", "dxa")])?;
    w.end("w:tblCellMar")?;
    w.end("w:tblPr")?;
    w.end("w:style")?;

    w.start("w:style", &[("w:type", "table"), ("w:styleId", "TableGrid")])?;
    w.empty("w:name", &[("w:val", "Table Grid")])?;
    w.empty("w:basedOn", &[("w:val", "TableNormal")])?;
    w.start("w:tblPr", &[])?;
    border_set(&mut w, "w:tblBorders")?;
    w.end("w:tblPr")?;
    w.end("w:style")?;

    w.end("w:styles")?;
    Ok(w.into_bytes())
}

fn core_properties(metadata: &Metadata) -> Result<Vec<u8>> {
    let mut w = XmlWriter::with_declaration()?;
    w.start(
        "cp:coreProperties",
        &[
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:dcmitype", "http://purl.org/dc/dcmitype/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;
    if let Some(ref title) = metadata.title {
        w.text_element("dc:title", &[], title)?;
    }
    if let Some(ref subject) = metadata.subject {
        w.text_element("dc:subject", &[], subject)?;
    }
    if let Some(ref creator) = metadata.creator {
        w.text_element("dc:creator", &[], creator)?;
    }
    if let Some(ref created) = metadata.created {
        w.text_element(
            "dcterms:created",
            &[("xsi:type", "dcterms:W3CDTF")],
            &created.to_rfc3339_opts(SecondsFormat::Secs, true),
        )?;
    }
    w.end("cp:coreProperties")?;
    Ok(w.into_bytes())
}

fn app_properties() -> Result<Vec<u8>> {
    let mut w = XmlWriter::with_declaration()?;
    w.start(
        "Properties",
        &[
            (
                "xmlns",
                "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
            ),
            (
                "xmlns:vt",
                "http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes",
            ),
        ],
    )?;
    w.text_element("Application", &[], env!("CARGO_PKG_NAME"))?;
    w.end("Properties")?;
    Ok(w.into_bytes())
}
