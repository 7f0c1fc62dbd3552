//! Options for the text preview.

/// Options for the plain-text preview.
#[derive(Debug, Clone)]
pub struct TextOptions {
    /// Wrap bold runs in `**` so emphasis survives the preview
    pub mark_bold: bool,

    /// Separator between table cells
    pub cell_separator: String,

    /// Put a blank line between body elements
    pub blank_lines: bool,
}

impl TextOptions {
    /// Create new text options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable bold markers.
    pub fn with_bold_markers(mut self, mark: bool) -> Self {
        self.mark_bold = mark;
        self
    }

    /// Set the table cell separator.
    pub fn with_cell_separator(mut self, separator: impl Into<String>) -> Self {
        self.cell_separator = separator.into();
        self
    }

    /// Enable or disable blank lines between elements.
    pub fn with_blank_lines(mut self, blank: bool) -> Self {
        self.blank_lines = blank;
        self
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            mark_bold: false,
            cell_separator: " | ".to_string(),
            blank_lines: false,
        }
    }
}
