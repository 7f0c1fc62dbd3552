//! Table types.

use super::Paragraph;
use serde::{Deserialize, Serialize};

/// A rectangular table with visible grid lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,

    /// Number of columns, fixed at construction
    pub columns: usize,

    /// Number of header rows (0 = no header)
    pub header_rows: u8,
}

impl Table {
    /// Create a grid of empty cells.
    pub fn with_grid(rows: usize, columns: usize) -> Self {
        Self {
            rows: (0..rows)
                .map(|_| TableRow::new((0..columns).map(|_| TableCell::empty()).collect()))
                .collect(),
            columns,
            header_rows: 0,
        }
    }

    /// Mark the first `n` rows as header rows.
    pub fn with_header(mut self, n: u8) -> Self {
        self.header_rows = n;
        for (idx, row) in self.rows.iter_mut().enumerate() {
            row.is_header = idx < n as usize;
        }
        self
    }

    /// Get a mutable reference to a cell.
    pub fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut TableCell> {
        self.rows.get_mut(row).and_then(|r| r.cells.get_mut(column))
    }

    /// Get a cell.
    pub fn cell(&self, row: usize, column: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.cells.get(column))
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns == 0
    }

    /// Get header rows.
    pub fn header(&self) -> &[TableRow] {
        let n = (self.header_rows as usize).min(self.rows.len());
        &self.rows[..n]
    }

    /// Get body rows (non-header).
    pub fn body(&self) -> &[TableRow] {
        let n = (self.header_rows as usize).min(self.rows.len());
        &self.rows[n..]
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,

    /// Whether this is a header row
    pub is_header: bool,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: false,
        }
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell holding zero or more paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content (paragraphs)
    pub content: Vec<Paragraph>,
}

impl TableCell {
    /// Create an empty cell.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a paragraph to the cell.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.content.push(paragraph);
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.content.iter().all(|p| p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid() {
        let table = Table::with_grid(3, 2).with_header(1);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.header().len(), 1);
        assert_eq!(table.body().len(), 2);
        assert!(table.rows[0].is_header);
        assert!(!table.rows[1].is_header);
        assert!(table.cell(2, 1).is_some_and(|c| c.is_empty()));
        assert!(table.cell(3, 0).is_none());
    }

    #[test]
    fn test_cell_content() {
        let mut table = Table::with_grid(1, 1);
        if let Some(cell) = table.cell_mut(0, 0) {
            cell.add_paragraph(Paragraph::with_text("Bob"));
            cell.add_paragraph(Paragraph::with_text("Jr"));
        }
        assert_eq!(table.plain_text(), "Bob Jr");
    }

    #[test]
    fn test_zero_columns_is_empty() {
        assert!(Table::with_grid(2, 0).is_empty());
        assert!(Table::with_grid(0, 3).is_empty());
    }
}
