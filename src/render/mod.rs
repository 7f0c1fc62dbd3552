//! Rendering a composed document to output formats.
//!
//! DOCX is the primary artifact; JSON and plain text are previews of the
//! same model.

mod docx;
mod json;
mod options;
mod package;
mod text;
mod xml;

pub use docx::{to_docx, write_docx, DocxBuilder, DOCX_MIME_TYPE};
pub use json::{to_json, JsonFormat};
pub use options::TextOptions;
pub use text::to_text;
