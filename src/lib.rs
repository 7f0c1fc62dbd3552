//! # lessondoc
//!
//! Converts generated lesson-plan text into a styled Word document.
//!
//! The input is loosely Markdown-like: `#` headings, Roman numeral section
//! markers (`I.` to `V.`), `- ` bullet items, inline `**bold**` and
//! pipe-delimited tables with `<br>` line breaks inside cells. The output is
//! a DOCX buffer on an A4 page in Times New Roman 14pt with line spacing
//! 1.3, opened by a fixed title block.
//!
//! ## Quick Start
//!
//! ```
//! use lessondoc::{render_lesson_plan, LessonLabels};
//!
//! let text = "I. Mục tiêu\n- **Kiến thức:** đọc đúng\n| Hoạt động | Thời gian |\n| --- | --- |\n| Khởi động | 5 phút |";
//! let labels = LessonLabels::new("Tập đọc: Cây bàng", "Lớp 4");
//! let bytes = render_lesson_plan(text, &labels)?;
//! assert_eq!(&bytes[..2], b"PK");
//! # Ok::<(), lessondoc::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - [`parser`]: cleanup, line classification and block segmentation
//! - [`compose`]: title block, inline formatting and table layout through a
//!   [`DocumentBuilder`]
//! - [`model`]: the composed document
//! - [`render`]: DOCX, JSON and plain-text output

pub mod compose;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use compose::{
    compose, compose_with, Composer, ComposeOptions, DocumentBuilder, LessonLabels, ModelBuilder,
};
pub use error::{Error, Result};
pub use model::{
    Alignment, Document, DocumentStats, DocumentStyle, Element, Metadata, PageGeometry, Paragraph,
    ParagraphRole, Table, TableCell, TableRow, TextRun,
};
pub use parser::{parse, Block, CleanupOptions, ErrorMode, ParseOptions, TableBlock};
pub use render::{DocxBuilder, JsonFormat, TextOptions, DOCX_MIME_TYPE};

use std::io::Read;
use std::path::Path;

/// Render lesson-plan text to DOCX bytes with default options.
///
/// Tables whose rows disagree with the header's cell count are an error;
/// use [`LessonDoc::lenient`] to repair them instead.
pub fn render_lesson_plan(text: &str, labels: &LessonLabels) -> Result<Vec<u8>> {
    LessonDoc::new().render(text, labels)
}

/// Read a text file and render it to DOCX bytes.
///
/// # Example
///
/// ```no_run
/// use lessondoc::{render_file, LessonLabels};
///
/// let bytes = render_file("bai-1.md", &LessonLabels::new("Bài 1", "Lớp 4")).unwrap();
/// std::fs::write("bai-1.docx", bytes).unwrap();
/// ```
pub fn render_file<P: AsRef<Path>>(path: P, labels: &LessonLabels) -> Result<Vec<u8>> {
    let text = std::fs::read_to_string(path)?;
    render_lesson_plan(&text, labels)
}

/// Read text from a reader and render it to DOCX bytes.
pub fn render_reader<R: Read>(mut reader: R, labels: &LessonLabels) -> Result<Vec<u8>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    render_lesson_plan(&text, labels)
}

/// Compose lesson-plan text into a document model with default options.
pub fn compose_lesson_plan(text: &str, labels: &LessonLabels) -> Result<Document> {
    Ok(LessonDoc::new().compose(text, labels)?.document)
}

/// Builder for converting lesson-plan text.
///
/// # Example
///
/// ```
/// use lessondoc::{LessonDoc, LessonLabels};
///
/// let result = LessonDoc::new()
///     .lenient()
///     .with_bullet_glyph('-')
///     .compose("| A | B |\n| 1 |", &LessonLabels::new("Bài 2", "Lớp 5"))?;
/// assert_eq!(result.stats().table_count, 1);
/// assert!(!result.to_docx()?.is_empty());
/// # Ok::<(), lessondoc::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct LessonDoc {
    parse_options: ParseOptions,
    compose_options: ComposeOptions,
}

impl LessonDoc {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Repair mismatched table rows instead of failing.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Set the input cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.parse_options = self.parse_options.with_cleanup(cleanup);
        self
    }

    /// Segment the input exactly as given.
    pub fn without_cleanup(mut self) -> Self {
        self.parse_options = self.parse_options.without_cleanup();
        self
    }

    /// Replace the parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Replace the compose options.
    pub fn with_compose_options(mut self, options: ComposeOptions) -> Self {
        self.compose_options = options;
        self
    }

    /// Set the bullet glyph.
    pub fn with_bullet_glyph(mut self, glyph: char) -> Self {
        self.compose_options = self.compose_options.with_bullet_glyph(glyph);
        self
    }

    /// Set the document author.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.compose_options = self.compose_options.with_creator(creator);
        self
    }

    /// Set the creation date written to the package.
    pub fn with_created(mut self, created: chrono::DateTime<chrono::Utc>) -> Self {
        self.compose_options = self.compose_options.with_created(created);
        self
    }

    /// Parse and compose text into a document model.
    pub fn compose(&self, text: &str, labels: &LessonLabels) -> Result<LessonDocResult> {
        let blocks = parse(text, &self.parse_options)?;
        let document = compose(&blocks, labels, &self.compose_options)?;
        Ok(LessonDocResult { document })
    }

    /// Parse text and stream it straight into a DOCX buffer.
    pub fn render(&self, text: &str, labels: &LessonLabels) -> Result<Vec<u8>> {
        let blocks = parse(text, &self.parse_options)?;
        compose_with(DocxBuilder::new()?, &blocks, labels, &self.compose_options)
    }
}

/// A composed lesson plan, ready to export.
#[derive(Debug, Clone)]
pub struct LessonDocResult {
    /// The composed document
    pub document: Document,
}

impl LessonDocResult {
    /// Export as DOCX bytes.
    pub fn to_docx(&self) -> Result<Vec<u8>> {
        render::to_docx(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Convert to plain text.
    pub fn to_text(&self, options: &TextOptions) -> Result<String> {
        render::to_text(&self.document, options)
    }

    /// Count the document's content.
    pub fn stats(&self) -> DocumentStats {
        self.document.stats()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
