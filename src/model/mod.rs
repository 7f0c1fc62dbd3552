//! Document model types for lesson-plan content.
//!
//! This module defines the intermediate representation that bridges
//! composition and output rendering. The composer fills it in; the DOCX,
//! JSON and text renderers read it.

mod document;
mod page;
mod paragraph;
mod table;

pub use document::{Document, DocumentStats, Element, ElementRef, Metadata};
pub use page::{mm_to_twips, DocumentStyle, PageGeometry};
pub use paragraph::{Alignment, Paragraph, ParagraphRole, ParagraphStyle, TextRun};
pub use table::{Table, TableCell, TableRow};
