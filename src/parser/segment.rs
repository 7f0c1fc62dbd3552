//! Line classification and block segmentation.

use super::{CleanupPipeline, ParseOptions, TableBlock};
use crate::error::Result;

/// Line prefixes that open a numbered section (`I.` through `V.`).
const SECTION_MARKERS: [&str; 5] = ["I.", "II.", "III.", "IV.", "V."];

/// Prefix of a bullet line.
const BULLET_PREFIX: &str = "- ";

/// One classified unit of input, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `#` heading, markers removed (levels are not kept)
    Heading(String),
    /// Roman numeral section line, whole line rendered bold
    SectionMarker(String),
    /// Bullet content without the `- ` prefix
    BulletItem(String),
    /// Any other non-empty line
    Paragraph(String),
    /// A contiguous run of `|` lines
    Table(TableBlock),
}

impl Block {
    /// Short name of the block kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading(_) => "heading",
            Block::SectionMarker(_) => "section_marker",
            Block::BulletItem(_) => "bullet_item",
            Block::Paragraph(_) => "paragraph",
            Block::Table(_) => "table",
        }
    }

    /// Text of a non-table block.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading(t)
            | Block::SectionMarker(t)
            | Block::BulletItem(t)
            | Block::Paragraph(t) => Some(t),
            Block::Table(_) => None,
        }
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }
}

/// Classification of a single trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Blank line
    Empty,
    /// `#` heading with its text
    Heading(&'a str),
    /// Line that starts or continues a table run
    TableRow,
    /// Roman numeral section marker
    SectionMarker,
    /// `- ` bullet with its content
    Bullet(&'a str),
    /// Anything else
    Paragraph,
}

/// Classify one line after trimming it.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.trim();
    if line.is_empty() {
        LineKind::Empty
    } else if line.starts_with('#') {
        LineKind::Heading(line.trim_start_matches('#').trim())
    } else if line.starts_with('|') {
        LineKind::TableRow
    } else if is_section_marker(line) {
        LineKind::SectionMarker
    } else if let Some(content) = line.strip_prefix(BULLET_PREFIX) {
        LineKind::Bullet(content.trim())
    } else {
        LineKind::Paragraph
    }
}

/// Check whether a trimmed line opens a section (`I.` .. `V.`).
pub fn is_section_marker(line: &str) -> bool {
    SECTION_MARKERS.iter().any(|m| line.starts_with(m))
}

/// Splits lesson-plan text into ordered blocks.
pub struct Segmenter {
    options: ParseOptions,
}

impl Segmenter {
    /// Create a segmenter with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Segment the text in one forward pass.
    ///
    /// Fails only when a table row violates the strict row policy.
    pub fn segment(&self, text: &str) -> Result<Vec<Block>> {
        let cleaned;
        let text = match self.options.cleanup {
            Some(ref cleanup) => {
                cleaned = CleanupPipeline::new(cleanup.clone()).process(text);
                cleaned.as_str()
            }
            None => text,
        };

        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let mut blocks = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];
            match classify_line(line) {
                LineKind::TableRow => {
                    let start = i;
                    while i < lines.len() && lines[i].starts_with('|') {
                        i += 1;
                    }
                    match TableBlock::from_lines(&lines[start..i], self.options.error_mode)? {
                        Some(table) => blocks.push(Block::Table(table)),
                        None => log::debug!("Dropped empty table at line {}", start + 1),
                    }
                    continue;
                }
                LineKind::Empty => {}
                LineKind::Heading(text) => {
                    if !text.is_empty() {
                        blocks.push(Block::Heading(text.to_string()));
                    }
                }
                LineKind::SectionMarker => blocks.push(Block::SectionMarker(line.to_string())),
                LineKind::Bullet(content) => blocks.push(Block::BulletItem(content.to_string())),
                LineKind::Paragraph => blocks.push(Block::Paragraph(line.to_string())),
            }
            i += 1;
        }

        log::debug!(
            "Segmented {} lines into {} blocks",
            lines.len(),
            blocks.len()
        );
        Ok(blocks)
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ErrorMode;

    fn segment(text: &str) -> Vec<Block> {
        Segmenter::default().segment(text).unwrap()
    }

    #[test]
    fn test_classify_line() {
        assert_eq!(classify_line("   "), LineKind::Empty);
        assert_eq!(classify_line("## Mục tiêu ##"), LineKind::Heading("Mục tiêu ##"));
        assert_eq!(classify_line("  | a | b |"), LineKind::TableRow);
        assert_eq!(classify_line("II. Chuẩn bị"), LineKind::SectionMarker);
        assert_eq!(classify_line("**I. Mục tiêu**"), LineKind::Paragraph);
        assert_eq!(classify_line("-  eat rice "), LineKind::Bullet("eat rice"));
        assert_eq!(classify_line("-no space"), LineKind::Paragraph);
        assert_eq!(classify_line("VI. Extra"), LineKind::Paragraph);
    }

    #[test]
    fn test_section_markers() {
        for line in ["I. a", "II. b", "III. c", "IV. d", "V. e"] {
            assert!(is_section_marker(line), "{line}");
        }
        assert!(!is_section_marker("Ideas"));
        assert!(!is_section_marker("X. ten"));
    }

    #[test]
    fn test_segment_mixed() {
        let blocks = segment(
            "# Bài 1\n\nI. Mục tiêu\n- đọc **đúng**\nHọc sinh luyện đọc.\n| A |\n|---|\n| 1 |\nKết thúc",
        );
        let kinds: Vec<_> = blocks.iter().map(Block::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "heading",
                "section_marker",
                "bullet_item",
                "paragraph",
                "table",
                "paragraph"
            ]
        );
        assert_eq!(blocks[0].text(), Some("Bài 1"));
        assert_eq!(blocks[2].text(), Some("đọc **đúng**"));
    }

    #[test]
    fn test_empty_lines_and_bare_headings_skipped() {
        let blocks = segment("\n   \n###\nText\n\n");
        assert_eq!(blocks, vec![Block::Paragraph("Text".to_string())]);
    }

    #[test]
    fn test_table_run_ends_at_non_pipe_line() {
        let blocks = segment("| A |\n| 1 |\n\n| B |\n| 2 |");
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(Block::is_table));
    }

    #[test]
    fn test_header_only_table_yields_nothing() {
        let blocks = segment("before\n| A | B |\n| --- | --- |\nafter");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph("before".to_string()),
                Block::Paragraph("after".to_string())
            ]
        );
    }

    #[test]
    fn test_strict_table_error_propagates() {
        let segmenter = Segmenter::new(ParseOptions::new());
        assert!(segmenter.segment("| A | B |\n| 1 |").is_err());

        let segmenter = Segmenter::new(ParseOptions::new().with_error_mode(ErrorMode::Lenient));
        assert_eq!(segmenter.segment("| A | B |\n| 1 |").unwrap().len(), 1);
    }
}
