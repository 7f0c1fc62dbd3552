//! Document-level types.

use super::{DocumentStyle, PageGeometry, Paragraph, ParagraphRole, Table};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A composed lesson-plan document.
///
/// Built by [`crate::compose::Composer`] and exported once by the
/// renderers in [`crate::render`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, subject, etc.)
    pub metadata: Metadata,

    /// Page size and margins
    pub geometry: PageGeometry,

    /// Default font and spacing
    pub style: DocumentStyle,

    /// Title block paragraphs (title, class line, divider)
    pub title: Vec<Paragraph>,

    /// Body content in input order
    pub body: Vec<Element>,
}

impl Document {
    /// Create a new empty document with the lesson-plan page and style.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            geometry: PageGeometry::default(),
            style: DocumentStyle::default(),
            title: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Add a paragraph.
    ///
    /// Title, subtitle and divider paragraphs go to the title block;
    /// everything else is appended to the body.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        if paragraph.role().is_title_block() {
            self.title.push(paragraph);
        } else {
            self.body.push(Element::Paragraph(paragraph));
        }
    }

    /// Add a body table.
    pub fn add_table(&mut self, table: Table) {
        self.body.push(Element::Table(table));
    }

    /// Iterate over title and body elements in output order.
    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.title
            .iter()
            .map(ElementRef::Paragraph)
            .chain(self.body.iter().map(|e| match e {
                Element::Paragraph(p) => ElementRef::Paragraph(p),
                Element::Table(t) => ElementRef::Table(t),
            }))
    }

    /// Check if the document has no body content.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Get the tables in the body.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.body.iter().filter_map(|e| match e {
            Element::Table(t) => Some(t),
            Element::Paragraph(_) => None,
        })
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.elements()
            .map(|e| match e {
                ElementRef::Paragraph(p) => p.plain_text(),
                ElementRef::Table(t) => t.plain_text(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Count the document's content.
    pub fn stats(&self) -> DocumentStats {
        let mut stats = DocumentStats::default();
        for element in &self.body {
            match element {
                Element::Paragraph(p) => {
                    stats.add_paragraph(p);
                }
                Element::Table(t) => {
                    stats.table_count += 1;
                    stats.table_row_count += t.row_count() as u32;
                    for p in t.rows.iter().flat_map(|r| &r.cells).flat_map(|c| &c.content) {
                        stats.count_runs(p);
                    }
                }
            }
        }
        stats.count_text(&self.plain_text());
        stats
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// A body element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A paragraph of text
    Paragraph(Paragraph),

    /// A table
    Table(Table),
}

impl Element {
    /// Check if this element is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Element::Paragraph(_))
    }

    /// Check if this element is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Element::Table(_))
    }

    /// Get the paragraph, if this element is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Element::Paragraph(p) => Some(p),
            Element::Table(_) => None,
        }
    }

    /// Get the table, if this element is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Element::Table(t) => Some(t),
            Element::Paragraph(_) => None,
        }
    }
}

/// Borrowed view of an element in output order.
#[derive(Debug, Clone, Copy)]
pub enum ElementRef<'a> {
    /// A paragraph
    Paragraph(&'a Paragraph),
    /// A table
    Table(&'a Table),
}

/// Document metadata written to the package properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title (the lesson name)
    pub title: Option<String>,

    /// Document subject (the class/grade label)
    pub subject: Option<String>,

    /// Author
    pub creator: Option<String>,

    /// Creation date; left unset so identical input yields identical bytes
    pub created: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Set the creation date.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }
}

/// Content counts for a composed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// `#` headings
    pub heading_count: u32,

    /// Roman numeral section markers
    pub section_marker_count: u32,

    /// Bullet items
    pub bullet_count: u32,

    /// Plain paragraphs
    pub paragraph_count: u32,

    /// Tables
    pub table_count: u32,

    /// Table rows, header rows included
    pub table_row_count: u32,

    /// Bold runs across body and tables
    pub bold_run_count: u32,

    /// Whitespace-separated words, title included
    pub word_count: u32,
}

impl DocumentStats {
    fn add_paragraph(&mut self, p: &Paragraph) {
        match p.role() {
            ParagraphRole::Heading => self.heading_count += 1,
            ParagraphRole::SectionMarker => self.section_marker_count += 1,
            ParagraphRole::Bullet => self.bullet_count += 1,
            ParagraphRole::Body => self.paragraph_count += 1,
            _ => {}
        }
        self.count_runs(p);
    }

    fn count_runs(&mut self, p: &Paragraph) {
        self.bold_run_count += p.runs.iter().filter(|r| r.bold).count() as u32;
    }

    fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
    }

    /// Total number of classified body blocks.
    pub fn block_count(&self) -> u32 {
        self.heading_count
            + self.section_marker_count
            + self.bullet_count
            + self.paragraph_count
            + self.table_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextRun;

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.title.push(Paragraph::with_text("KẾ HOẠCH BÀI DẠY: A"));

        let mut marker = Paragraph::with_role(ParagraphRole::SectionMarker);
        marker.add_bold("I. Mục tiêu");
        doc.add_paragraph(marker);

        let mut bullet = Paragraph::with_role(ParagraphRole::Bullet);
        bullet.add_run(TextRun::plain("• eat rice"));
        doc.add_paragraph(bullet);

        let mut table = Table::with_grid(2, 1).with_header(1);
        if let Some(cell) = table.cell_mut(0, 0) {
            let mut p = Paragraph::with_role(ParagraphRole::TableHeader);
            p.add_bold("Name");
            cell.add_paragraph(p);
        }
        doc.add_table(table);
        doc
    }

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.geometry, PageGeometry::a4());
    }

    #[test]
    fn test_elements_order() {
        let doc = sample();
        let kinds: Vec<_> = doc
            .elements()
            .map(|e| matches!(e, ElementRef::Table(_)))
            .collect();
        assert_eq!(kinds, vec![false, false, false, true]);
        assert_eq!(doc.tables().count(), 1);
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(stats.section_marker_count, 1);
        assert_eq!(stats.bullet_count, 1);
        assert_eq!(stats.table_count, 1);
        assert_eq!(stats.table_row_count, 2);
        assert_eq!(stats.bold_run_count, 2);
        assert_eq!(stats.block_count(), 3);
    }
}
