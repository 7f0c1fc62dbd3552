//! Parsing options and configuration.

use super::CleanupOptions;

/// Options for segmenting lesson-plan text.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// How malformed table rows are handled
    pub error_mode: ErrorMode,

    /// Input cleanup applied before segmentation (None = raw input)
    pub cleanup: Option<CleanupOptions>,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (pad or truncate mismatched table rows).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Segment the input exactly as given.
    pub fn without_cleanup(mut self) -> Self {
        self.cleanup = None;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            cleanup: Some(CleanupOptions::default()),
        }
    }
}

/// Policy for table rows whose cell count differs from the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail the whole render with [`crate::Error::TableStructure`]
    #[default]
    Strict,
    /// Pad short rows with empty cells and truncate long rows
    Lenient,
}
