//! DOCX (WordprocessingML) rendering.
//!
//! [`DocxBuilder`] is a [`DocumentBuilder`] that streams `word/document.xml`
//! as content arrives and zips the package on [`DocumentBuilder::finish`].
//! Every run carries the document font family and size explicitly, so the
//! output looks the same in viewers that ignore `styles.xml`.

use super::package::{border_set, font_attrs, write_package, R_NS, W_NS};
use super::xml::XmlWriter;
use crate::compose::{replay, DocumentBuilder};
use crate::error::{Error, Result};
use crate::model::{
    mm_to_twips, Alignment, Document, DocumentStyle, Metadata, PageGeometry, Paragraph,
    ParagraphRole, Table, TableCell, TextRun,
};
use std::io::{Cursor, Write};

/// MIME type of the produced bytes.
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Default header and footer distance in twips (half an inch).
const HEADER_FOOTER_TWIPS: u32 = 720;

/// Builds a `.docx` byte buffer.
pub struct DocxBuilder {
    xml: XmlWriter,
    geometry: PageGeometry,
    style: DocumentStyle,
    metadata: Metadata,
    size: String,
    paragraphs: usize,
    tables: usize,
}

impl DocxBuilder {
    /// Open `word/document.xml` and its body.
    pub fn new() -> Result<Self> {
        let mut xml = XmlWriter::with_declaration()?;
        xml.start("w:document", &[("xmlns:w", W_NS), ("xmlns:r", R_NS)])?;
        xml.start("w:body", &[])?;

        let style = DocumentStyle::default();
        Ok(Self {
            xml,
            geometry: PageGeometry::default(),
            size: style.half_points().to_string(),
            style,
            metadata: Metadata::default(),
            paragraphs: 0,
            tables: 0,
        })
    }

    fn text_width_twips(&self) -> u32 {
        mm_to_twips(self.geometry.width_mm)
            .saturating_sub(mm_to_twips(self.geometry.margin_left_mm))
            .saturating_sub(mm_to_twips(self.geometry.margin_right_mm))
    }

    fn write_paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        let role = paragraph.role();
        let alignment = paragraph.style.alignment;

        self.xml.start("w:p", &[])?;
        if role == ParagraphRole::Title || alignment != Alignment::Left {
            self.xml.start("w:pPr", &[])?;
            if role == ParagraphRole::Title {
                self.xml.empty("w:pStyle", &[("w:val", "Title")])?;
            }
            if alignment != Alignment::Left {
                self.xml.empty("w:jc", &[("w:val", alignment.as_ooxml())])?;
            }
            self.xml.end("w:pPr")?;
        }
        for run in paragraph.runs.iter().filter(|r| !r.is_empty()) {
            self.write_run(run, role == ParagraphRole::Title)?;
        }
        self.xml.end("w:p")
    }

    fn write_run(&mut self, run: &TextRun, black: bool) -> Result<()> {
        self.xml.start("w:r", &[])?;
        self.xml.start("w:rPr", &[])?;
        self.xml.empty("w:rFonts", &font_attrs(&self.style.font_family))?;
        if run.bold {
            self.xml.empty("w:b", &[])?;
            self.xml.empty("w:bCs", &[])?;
        }
        if black {
            self.xml.empty("w:color", &[("w:val", "000000")])?;
        }
        self.xml.empty("w:sz", &[("w:val", &self.size)])?;
        self.xml.empty("w:szCs", &[("w:val", &self.size)])?;
        self.xml.end("w:rPr")?;
        self.xml
            .text_element("w:t", &[("xml:space", "preserve")], &run.text)?;
        self.xml.end("w:r")
    }

    fn write_table(&mut self, table: &Table) -> Result<()> {
        let columns = table.column_count();
        if columns == 0 {
            return Err(Error::Render(format!(
                "table with {} rows has no columns",
                table.row_count()
            )));
        }
        let total = self.text_width_twips();
        let column_width = (total / columns as u32).to_string();
        let total = total.to_string();

        self.xml.start("w:tbl", &[])?;
        self.xml.start("w:tblPr", &[])?;
        self.xml.empty("w:tblStyle", &[("w:val", "TableGrid")])?;
        self.xml
            .empty("w:tblW", &[("w:w", &total), ("w:type", "dxa")])?;
        border_set(&mut self.xml, "w:tblBorders")?;
        self.xml.empty(
            "w:tblLook",
            &[
                ("w:val", "04A0"),
                ("w:firstRow", "1"),
                ("w:lastRow", "0"),
                ("w:firstColumn", "0"),
                ("w:lastColumn", "0"),
                ("w:noHBand", "0"),
                ("w:noVBand", "1"),
            ],
        )?;
        self.xml.end("w:tblPr")?;

        self.xml.start("w:tblGrid", &[])?;
        for _ in 0..columns {
            self.xml.empty("w:gridCol", &[("w:w", &column_width)])?;
        }
        self.xml.end("w:tblGrid")?;

        for row in &table.rows {
            self.xml.start("w:tr", &[])?;
            if row.is_header {
                self.xml.start("w:trPr", &[])?;
                self.xml.empty("w:tblHeader", &[])?;
                self.xml.end("w:trPr")?;
            }
            for cell in &row.cells {
                self.write_cell(cell, &column_width)?;
            }
            self.xml.end("w:tr")?;
        }
        self.xml.end("w:tbl")
    }

    fn write_cell(&mut self, cell: &TableCell, width: &str) -> Result<()> {
        self.xml.start("w:tc", &[])?;
        self.xml.start("w:tcPr", &[])?;
        self.xml.empty("w:tcW", &[("w:w", width), ("w:type", "dxa")])?;
        self.xml.end("w:tcPr")?;
        if cell.content.is_empty() {
            // A cell must end with a paragraph.
            self.xml.empty("w:p", &[])?;
        }
        for paragraph in &cell.content {
            self.write_paragraph(paragraph)?;
        }
        self.xml.end("w:tc")
    }

    fn write_section(&mut self) -> Result<()> {
        let g = self.geometry;
        let width = mm_to_twips(g.width_mm).to_string();
        let height = mm_to_twips(g.height_mm).to_string();
        let top = mm_to_twips(g.margin_top_mm).to_string();
        let bottom = mm_to_twips(g.margin_bottom_mm).to_string();
        let left = mm_to_twips(g.margin_left_mm).to_string();
        let right = mm_to_twips(g.margin_right_mm).to_string();
        let header_footer = HEADER_FOOTER_TWIPS.to_string();

        self.xml.start("w:sectPr", &[])?;
        if g.is_landscape() {
            self.xml.empty(
                "w:pgSz",
                &[("w:w", &width), ("w:h", &height), ("w:orient", "landscape")],
            )?;
        } else {
            self.xml
                .empty("w:pgSz", &[("w:w", &width), ("w:h", &height)])?;
        }
        self.xml.empty(
            "w:pgMar",
            &[
                ("w:top", &top),
                ("w:right", &right),
                ("w:bottom", &bottom),
                ("w:left", &left),
                ("w:header", &header_footer),
                ("w:footer", &header_footer),
                ("w:gutter", "0"),
            ],
        )?;
        self.xml.end("w:sectPr")
    }
}

impl DocumentBuilder for DocxBuilder {
    type Output = Vec<u8>;

    fn set_page_geometry(&mut self, geometry: PageGeometry) -> Result<()> {
        if geometry.text_width_mm() <= 0.0 {
            return Err(Error::Render(format!(
                "page margins leave no room for text ({} mm wide)",
                geometry.width_mm
            )));
        }
        self.geometry = geometry;
        Ok(())
    }

    fn set_default_style(&mut self, style: DocumentStyle) -> Result<()> {
        self.size = style.half_points().to_string();
        self.style = style;
        Ok(())
    }

    fn set_metadata(&mut self, metadata: Metadata) -> Result<()> {
        self.metadata = metadata;
        Ok(())
    }

    fn add_paragraph(&mut self, paragraph: Paragraph) -> Result<()> {
        self.paragraphs += 1;
        self.write_paragraph(&paragraph)
    }

    fn add_table(&mut self, table: Table) -> Result<()> {
        self.tables += 1;
        self.write_table(&table)
    }

    fn finish(mut self) -> Result<Vec<u8>> {
        self.write_section()?;
        self.xml.end("w:body")?;
        self.xml.end("w:document")?;
        log::debug!(
            "Writing DOCX with {} paragraphs and {} tables",
            self.paragraphs,
            self.tables
        );

        let document_xml = self.xml.into_bytes();
        let cursor = write_package(
            Cursor::new(Vec::new()),
            &document_xml,
            &self.style,
            &self.metadata,
        )?;
        Ok(cursor.into_inner())
    }
}

/// Render a composed document as DOCX bytes.
pub fn to_docx(doc: &Document) -> Result<Vec<u8>> {
    replay(doc, DocxBuilder::new()?)
}

/// Render a composed document as DOCX into a writer.
pub fn write_docx<W: Write>(doc: &Document, mut writer: W) -> Result<W> {
    let bytes = to_docx(doc)?;
    writer.write_all(&bytes)?;
    Ok(writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document_xml(build: impl FnOnce(&mut DocxBuilder)) -> String {
        let mut builder = DocxBuilder::new().unwrap();
        build(&mut builder);
        builder.write_section().unwrap();
        String::from_utf8(builder.xml.into_bytes()).unwrap()
    }

    #[test]
    fn test_bold_run_markup() {
        let xml = document_xml(|b| {
            let mut p = Paragraph::new();
            p.add_text("a ");
            p.add_bold("b");
            b.add_paragraph(p).unwrap();
        });
        assert!(xml.contains("<w:t xml:space=\"preserve\">a </w:t>"));
        assert!(xml.contains("<w:b/><w:bCs/>"));
        assert_eq!(xml.matches("<w:b/>").count(), 1);
        assert!(xml.contains("w:ascii=\"Times New Roman\""));
        assert!(xml.contains("<w:sz w:val=\"28\"/>"));
    }

    #[test]
    fn test_title_paragraph() {
        let xml = document_xml(|b| {
            b.add_bold_run("KẾ HOẠCH", ParagraphRole::Title, Alignment::Center)
                .unwrap();
        });
        assert!(xml.contains("<w:pStyle w:val=\"Title\"/><w:jc w:val=\"center\"/>"));
        assert!(xml.contains("<w:color w:val=\"000000\"/>"));
    }

    #[test]
    fn test_section_properties() {
        let xml = document_xml(|_| {});
        assert!(xml.contains("<w:pgSz w:w=\"11906\" w:h=\"16838\"/>"));
        assert!(xml.contains(
            "<w:pgMar w:top=\"1134\" w:right=\"850\" w:bottom=\"1134\" w:left=\"1701\""
        ));
    }

    #[test]
    fn test_table_grid() {
        let xml = document_xml(|b| {
            let mut table = Table::with_grid(2, 2).with_header(1);
            if let Some(cell) = table.cell_mut(0, 0) {
                cell.add_paragraph(Paragraph::with_text("H"));
            }
            b.add_table(table).unwrap();
        });
        assert_eq!(xml.matches("<w:gridCol w:w=\"4677\"/>").count(), 2);
        assert_eq!(xml.matches("<w:tc>").count(), 4);
        assert_eq!(xml.matches("<w:tblHeader/>").count(), 1);
        // three cells without content get an empty paragraph
        assert_eq!(xml.matches("<w:p/>").count(), 3);
    }

    #[test]
    fn test_rejects_table_without_columns() {
        let mut builder = DocxBuilder::new().unwrap();
        let err = builder.add_table(Table::with_grid(2, 0)).unwrap_err();
        assert!(matches!(err, Error::Render(_)));

        let mut doc = Document::new();
        doc.add_table(Table::with_grid(1, 0));
        assert!(to_docx(&doc).is_err());
    }

    #[test]
    fn test_write_docx_to_plain_writer() {
        let mut sink: Vec<u8> = Vec::new();
        write_docx(&Document::new(), &mut sink).unwrap();
        assert_eq!(&sink[..2], b"PK");
    }

    #[test]
    fn test_rejects_geometry_without_text_area() {
        let mut builder = DocxBuilder::new().unwrap();
        let mut geometry = PageGeometry::a4();
        geometry.margin_left_mm = 200.0;
        assert!(builder.set_page_geometry(geometry).is_err());
    }

    #[test]
    fn test_to_docx_is_zip() {
        let bytes = to_docx(&Document::new()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
