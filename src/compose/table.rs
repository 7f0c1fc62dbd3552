//! Table rendering: header and data cells to paragraphs.

use crate::model::{Paragraph, ParagraphRole, Table};
use crate::parser::{format_inline, strip_bold_markers, TableBlock, SOFT_BREAK};

/// Render a table block as a grid.
///
/// Row 0 is the header: each soft-break line becomes one bold paragraph
/// with `**` removed literally. Other rows are data: each non-empty
/// soft-break line becomes one inline-formatted paragraph.
pub fn render_table(block: &TableBlock) -> Table {
    let mut table = Table::with_grid(block.row_count(), block.columns()).with_header(1);

    for (r, row) in block.rows().iter().enumerate() {
        for (c, raw) in row.iter().enumerate() {
            let Some(cell) = table.cell_mut(r, c) else {
                continue;
            };
            for line in cell_lines(raw) {
                let paragraph = if r == 0 {
                    header_paragraph(line)
                } else {
                    Some(data_paragraph(line))
                };
                if let Some(p) = paragraph {
                    cell.add_paragraph(p);
                }
            }
        }
    }

    table
}

/// Split a raw cell on the soft break, keeping non-empty trimmed lines.
fn cell_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(SOFT_BREAK).map(str::trim).filter(|l| !l.is_empty())
}

fn header_paragraph(line: &str) -> Option<Paragraph> {
    let text = strip_bold_markers(line);
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let mut p = Paragraph::with_role(ParagraphRole::TableHeader);
    p.add_bold(text);
    Some(p)
}

fn data_paragraph(line: &str) -> Paragraph {
    let mut p = Paragraph::with_role(ParagraphRole::TableCell);
    p.extend_runs(format_inline(line));
    p
}
