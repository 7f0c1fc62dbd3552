//! Input cleanup applied to generated text before segmentation.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// The soft break spelling that the table renderer splits cells on.
pub const SOFT_BREAK: &str = "<br>";

/// Options for input cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form (composes Vietnamese diacritics)
    pub normalize_unicode: bool,

    /// Convert CRLF and lone CR line endings to LF
    pub normalize_line_endings: bool,

    /// Remove a leading byte order mark
    pub strip_bom: bool,

    /// Remove Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,

    /// Fold `<br/>`, `<br />` and `<BR>` into `<br>` on table lines
    pub normalize_soft_breaks: bool,
}

impl CleanupOptions {
    /// Every cleanup step disabled.
    pub fn none() -> Self {
        Self {
            normalize_unicode: false,
            normalize_line_endings: false,
            strip_bom: false,
            remove_replacement_char: false,
            normalize_soft_breaks: false,
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            normalize_line_endings: true,
            strip_bom: true,
            remove_replacement_char: true,
            normalize_soft_breaks: true,
        }
    }
}

/// Input cleanup pipeline.
pub struct CleanupPipeline {
    options: CleanupOptions,
    soft_break_regex: Regex,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self {
            options,
            soft_break_regex: Regex::new(r"(?i)<br\s*/?\s*>").expect("soft break pattern is valid"),
        }
    }

    /// Process text through the cleanup pipeline.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.strip_bom {
            if let Some(stripped) = result.strip_prefix('\u{FEFF}') {
                result = stripped.to_string();
            }
        }

        if self.options.normalize_line_endings {
            result = result.replace("\r\n", "\n").replace('\r', "\n");
        }

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.remove_replacement_char {
            result = result.replace('\u{FFFD}', "");
        }

        if self.options.normalize_soft_breaks {
            result = self.fold_soft_breaks(&result);
        }

        result
    }

    /// Only table rows split on soft breaks; other lines keep their markup.
    fn fold_soft_breaks(&self, text: &str) -> String {
        text.split('\n')
            .map(|line| {
                if line.trim_start().starts_with('|') {
                    self.soft_break_regex.replace_all(line, SOFT_BREAK)
                } else {
                    line.into()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
