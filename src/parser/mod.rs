//! Lesson-plan text parsing.
//!
//! Turns generated Markdown-like text into an ordered list of [`Block`]s:
//! headings, section markers, bullet items, paragraphs and tables.

mod cleanup;
mod inline;
mod options;
mod segment;
mod table;

pub use cleanup::{CleanupOptions, CleanupPipeline, SOFT_BREAK};
pub use inline::{format_inline, strip_bold_markers, BOLD_DELIMITER};
pub use options::{ErrorMode, ParseOptions};
pub use segment::{classify_line, is_section_marker, Block, LineKind, Segmenter};
pub use table::{is_divider, split_cells, TableBlock, DIVIDER_MARKER};

use crate::error::Result;

/// Segment text into blocks with the given options.
pub fn parse(text: &str, options: &ParseOptions) -> Result<Vec<Block>> {
    Segmenter::new(options.clone()).segment(text)
}
