//! Plain text preview of a composed document.

use super::TextOptions;
use crate::error::Result;
use crate::model::{Document, ElementRef, Paragraph, Table};

/// Convert a document to plain text.
///
/// Title block first, then body elements in order. Table rows become one
/// line each; paragraphs inside a cell are joined with a space.
pub fn to_text(doc: &Document, options: &TextOptions) -> Result<String> {
    let mut lines: Vec<String> = Vec::new();

    for element in doc.elements() {
        if options.blank_lines && !lines.is_empty() {
            lines.push(String::new());
        }
        match element {
            ElementRef::Paragraph(p) => lines.push(paragraph_text(p, options)),
            ElementRef::Table(t) => lines.extend(table_lines(t, options)),
        }
    }

    Ok(lines.join("\n").trim().to_string())
}

fn paragraph_text(paragraph: &Paragraph, options: &TextOptions) -> String {
    if !options.mark_bold {
        return paragraph.plain_text();
    }
    paragraph
        .runs
        .iter()
        .map(|run| {
            if run.bold && !run.text.is_empty() {
                format!("**{}**", run.text)
            } else {
                run.text.clone()
            }
        })
        .collect()
}

fn table_lines<'a>(table: &'a Table, options: &'a TextOptions) -> impl Iterator<Item = String> + 'a {
    table.rows.iter().map(move |row| {
        row.cells
            .iter()
            .map(|cell| {
                cell.content
                    .iter()
                    .map(|p| paragraph_text(p, options))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join(&options.cell_separator)
    })
}
