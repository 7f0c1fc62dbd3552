//! Error types for the lessondoc library.

use std::io;
use thiserror::Error;

/// Result type alias for lessondoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a lesson-plan document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing the package.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A table row has a different number of cells than the header row.
    ///
    /// `row` is the 0-based index among the table's surviving rows
    /// (divider lines excluded), so the header is row 0.
    #[error("Table row {row} has {found} cells, expected {expected} (from header row)")]
    TableStructure {
        /// Row index within the table
        row: usize,
        /// Column count fixed by the header row
        expected: usize,
        /// Cell count found in the offending row
        found: usize,
    },

    /// Error assembling the zip container.
    #[error("Zip packaging error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Error writing an XML part.
    #[error("XML writing error: {0}")]
    Xml(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),
}
