//! The seam between the composer and a document back end.

use crate::error::Result;
use crate::model::{
    Alignment, Document, DocumentStyle, Element, Metadata, PageGeometry, Paragraph, ParagraphRole,
    Table,
};

/// Receives the composed document one piece at a time.
///
/// The composer only talks to this trait, so any back end that can take
/// paragraphs of bold/plain runs and grid tables can be plugged in.
/// Geometry and style are set before any content is added.
pub trait DocumentBuilder {
    /// What [`DocumentBuilder::finish`] produces.
    type Output;

    /// Fix page size and margins.
    fn set_page_geometry(&mut self, geometry: PageGeometry) -> Result<()>;

    /// Fix the document-wide font and spacing.
    fn set_default_style(&mut self, style: DocumentStyle) -> Result<()>;

    /// Record package metadata.
    fn set_metadata(&mut self, metadata: Metadata) -> Result<()>;

    /// Append a paragraph.
    fn add_paragraph(&mut self, paragraph: Paragraph) -> Result<()>;

    /// Append a table built with [`Table::with_grid`].
    fn add_table(&mut self, table: Table) -> Result<()>;

    /// Finish the document.
    fn finish(self) -> Result<Self::Output>;

    /// Append a paragraph holding a single bold run.
    fn add_bold_run(
        &mut self,
        text: &str,
        role: ParagraphRole,
        alignment: Alignment,
    ) -> Result<()> {
        let mut paragraph = Paragraph::with_role(role).align(alignment);
        paragraph.add_bold(text);
        self.add_paragraph(paragraph)
    }
}

/// Builds the in-memory [`Document`] model.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    document: Document,
}

impl ModelBuilder {
    /// Create a builder around an empty document.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentBuilder for ModelBuilder {
    type Output = Document;

    fn set_page_geometry(&mut self, geometry: PageGeometry) -> Result<()> {
        self.document.geometry = geometry;
        Ok(())
    }

    fn set_default_style(&mut self, style: DocumentStyle) -> Result<()> {
        self.document.style = style;
        Ok(())
    }

    fn set_metadata(&mut self, metadata: Metadata) -> Result<()> {
        self.document.metadata = metadata;
        Ok(())
    }

    fn add_paragraph(&mut self, paragraph: Paragraph) -> Result<()> {
        self.document.add_paragraph(paragraph);
        Ok(())
    }

    fn add_table(&mut self, table: Table) -> Result<()> {
        self.document.add_table(table);
        Ok(())
    }

    fn finish(self) -> Result<Document> {
        Ok(self.document)
    }
}

/// Feed an existing document into another builder.
pub fn replay<B: DocumentBuilder>(doc: &Document, mut builder: B) -> Result<B::Output> {
    builder.set_page_geometry(doc.geometry)?;
    builder.set_default_style(doc.style.clone())?;
    builder.set_metadata(doc.metadata.clone())?;
    for paragraph in &doc.title {
        builder.add_paragraph(paragraph.clone())?;
    }
    for element in &doc.body {
        match element {
            Element::Paragraph(p) => builder.add_paragraph(p.clone())?,
            Element::Table(t) => builder.add_table(t.clone())?,
        }
    }
    builder.finish()
}
