//! Paragraph and run-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of text content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    pub runs: Vec<TextRun>,

    /// Paragraph style
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a new empty body paragraph.
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            style: ParagraphStyle::default(),
        }
    }

    /// Create an empty paragraph with the given role.
    pub fn with_role(role: ParagraphRole) -> Self {
        Self {
            runs: Vec::new(),
            style: ParagraphStyle {
                role,
                ..Default::default()
            },
        }
    }

    /// Create a paragraph with a single plain run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Set the alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.style.alignment = alignment;
        self
    }

    /// Add a plain run.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.runs.push(TextRun::plain(text));
    }

    /// Add a bold run.
    pub fn add_bold(&mut self, text: impl Into<String>) {
        self.runs.push(TextRun::bold(text));
    }

    /// Add a run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Add several runs in order.
    pub fn extend_runs(&mut self, runs: impl IntoIterator<Item = TextRun>) {
        self.runs.extend(runs);
    }

    /// Get the visible text of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }

    /// Check if every run in the paragraph is bold.
    pub fn is_all_bold(&self) -> bool {
        !self.runs.is_empty() && self.runs.iter().all(|r| r.bold)
    }

    /// Get the paragraph role.
    pub fn role(&self) -> ParagraphRole {
        self.style.role
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// A run of text.
///
/// Runs carry no font information: every run is written with the
/// document's single font family and point size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Bold text
    pub bold: bool,
}

impl TextRun {
    /// Create a plain run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// What produced this paragraph
    pub role: ParagraphRole,

    /// Text alignment
    pub alignment: Alignment,
}

/// The source of a paragraph.
///
/// Headings collapse to the body style; the role only records where a
/// paragraph came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphRole {
    /// Document title line
    Title,
    /// Class/grade line under the title
    Subtitle,
    /// Dashed separator under the title block
    Divider,
    /// `#` heading line
    Heading,
    /// Roman numeral section marker (`I.` .. `V.`)
    SectionMarker,
    /// `- ` bullet line
    Bullet,
    /// Ordinary paragraph
    #[default]
    Body,
    /// Paragraph inside a table header cell
    TableHeader,
    /// Paragraph inside a table data cell
    TableCell,
}

impl ParagraphRole {
    /// Check if the role belongs to the title block above the body.
    pub fn is_title_block(self) -> bool {
        matches!(
            self,
            ParagraphRole::Title | ParagraphRole::Subtitle | ParagraphRole::Divider
        )
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl Alignment {
    /// WordprocessingML `w:jc` value.
    pub fn as_ooxml(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::new();
        p.add_text("Hello ");
        p.add_bold("world");
        p.add_text("!");

        assert_eq!(p.plain_text(), "Hello world!");
        assert!(!p.is_all_bold());
    }

    #[test]
    fn test_all_bold() {
        let mut p = Paragraph::with_role(ParagraphRole::SectionMarker);
        p.add_bold("I. Mục tiêu");
        assert!(p.is_all_bold());
        assert_eq!(p.role(), ParagraphRole::SectionMarker);

        assert!(!Paragraph::new().is_all_bold());
    }

    #[test]
    fn test_empty_paragraph() {
        let mut p = Paragraph::new();
        assert!(p.is_empty());
        p.add_text("");
        assert!(p.is_empty());
        p.add_text("x");
        assert!(!p.is_empty());
    }

    #[test]
    fn test_alignment_ooxml() {
        assert_eq!(Alignment::Center.as_ooxml(), "center");
        assert_eq!(Alignment::Justify.as_ooxml(), "both");
        assert_eq!(Alignment::default(), Alignment::Left);
    }
}
