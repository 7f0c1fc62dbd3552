//! Composition options and title labels.

use crate::model::{DocumentStyle, PageGeometry};
use chrono::{DateTime, Utc};

/// Caller-supplied labels for the title block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonLabels {
    /// Lesson name, upper-cased in the title line
    pub lesson_name: String,

    /// Class or grade label, e.g. "Lớp 4"
    pub class_name: String,
}

impl LessonLabels {
    /// Create labels.
    pub fn new(lesson_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            lesson_name: lesson_name.into(),
            class_name: class_name.into(),
        }
    }
}

/// Options for composing a document.
///
/// None of these depend on the content being composed.
#[derive(Debug, Clone)]
pub struct ComposeOptions {
    /// Page size and margins
    pub geometry: PageGeometry,

    /// Default font, size and line spacing
    pub style: DocumentStyle,

    /// Label before the lesson name in the title line
    pub title_prefix: String,

    /// Label before the class name in the second line
    pub class_prefix: String,

    /// Character repeated in the divider under the title block
    pub divider_char: char,

    /// Number of divider characters
    pub divider_width: usize,

    /// Glyph that replaces the `- ` bullet prefix
    pub bullet_glyph: char,

    /// Author written to the package properties
    pub creator: Option<String>,

    /// Creation date written to the package properties
    pub created: Option<DateTime<Utc>>,
}

impl ComposeOptions {
    /// Create new compose options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the default text style.
    pub fn with_style(mut self, style: DocumentStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the title prefix.
    pub fn with_title_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.title_prefix = prefix.into();
        self
    }

    /// Set the class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the divider character and width.
    pub fn with_divider(mut self, ch: char, width: usize) -> Self {
        self.divider_char = ch;
        self.divider_width = width;
        self
    }

    /// Set the bullet glyph.
    pub fn with_bullet_glyph(mut self, glyph: char) -> Self {
        self.bullet_glyph = glyph;
        self
    }

    /// Set the document author.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Set the creation date.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// The divider line text.
    pub fn divider_line(&self) -> String {
        std::iter::repeat(self.divider_char)
            .take(self.divider_width)
            .collect()
    }
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::a4(),
            style: DocumentStyle::lesson_plan(),
            title_prefix: "KẾ HOẠCH BÀI DẠY".to_string(),
            class_prefix: "Lớp".to_string(),
            divider_char: '-',
            divider_width: 60,
            bullet_glyph: '•',
            creator: None,
            created: None,
        }
    }
}
