//! Pipe-table structure: divider removal, cell splitting, row policy.

use super::ErrorMode;
use crate::error::{Error, Result};

/// Any table line containing this marker is the header/body divider.
pub const DIVIDER_MARKER: &str = "---";

/// Rows of raw cell strings from one contiguous run of `|` lines.
///
/// Only [`TableBlock::from_lines`] builds one, so there is always a header
/// and at least one data row, and every row has exactly
/// [`TableBlock::columns`] cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    rows: Vec<Vec<String>>,
    columns: usize,
}

impl TableBlock {
    /// Build a table from trimmed `|` lines.
    ///
    /// Returns `Ok(None)` when no data row survives divider removal or the
    /// first row has no cells.
    pub fn from_lines<S: AsRef<str>>(lines: &[S], mode: ErrorMode) -> Result<Option<Self>> {
        let rows: Vec<&str> = lines
            .iter()
            .map(|l| l.as_ref())
            .filter(|l| !is_divider(l))
            .collect();

        let Some((first, body)) = rows.split_first() else {
            log::debug!("Table run of {} lines is only dividers", lines.len());
            return Ok(None);
        };
        if body.is_empty() {
            log::debug!("Table has a header but no data rows, dropping it");
            return Ok(None);
        }

        let columns = split_cells(first).len();
        if columns == 0 {
            log::warn!("Table header has no cells, dropping {} rows", rows.len());
            return Ok(None);
        }

        let mut table_rows = Vec::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            let mut cells: Vec<String> = split_cells(row).into_iter().map(String::from).collect();
            if cells.len() != columns {
                match mode {
                    ErrorMode::Strict => {
                        return Err(Error::TableStructure {
                            row: idx,
                            expected: columns,
                            found: cells.len(),
                        });
                    }
                    ErrorMode::Lenient => {
                        log::warn!(
                            "Table row {} has {} cells, fitting to {} columns",
                            idx,
                            cells.len(),
                            columns
                        );
                        cells.resize(columns, String::new());
                    }
                }
            }
            table_rows.push(cells);
        }

        Ok(Some(Self {
            rows: table_rows,
            columns,
        }))
    }

    /// Number of columns, fixed by the first row.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// All rows, header first.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The header row.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header.
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or_default()
    }
}

/// Check whether a table line is a header/body divider.
pub fn is_divider(line: &str) -> bool {
    line.contains(DIVIDER_MARKER)
}

/// Split a `|` row into cells, dropping the pieces before the first and
/// after the last pipe.
///
/// Cells are returned untrimmed.
pub fn split_cells(row: &str) -> Vec<&str> {
    let parts: Vec<&str> = row.split('|').collect();
    if parts.len() < 2 {
        return Vec::new();
    }
    parts[1..parts.len() - 1].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORES: [&str; 4] = [
        "| Name | Score |",
        "| --- | --- |",
        "| Alice | 9 |",
        "| Bob<br>Jr | 8 |",
    ];

    #[test]
    fn test_split_cells() {
        assert_eq!(split_cells("| a | b |"), vec![" a ", " b "]);
        assert_eq!(split_cells("|a|"), vec!["a"]);
        assert_eq!(split_cells("| a | b"), vec![" a "]);
        assert!(split_cells("|").is_empty());
        assert!(split_cells("||").len() == 1);
    }

    #[test]
    fn test_divider_removed() {
        let table = TableBlock::from_lines(&SCORES, ErrorMode::Strict)
            .unwrap()
            .unwrap();
        assert_eq!(table.columns(), 2);
        assert_eq!(table.row_count(), 3);
        assert_eq!(
            table.header(),
            Some(&[" Name ".to_string(), " Score ".to_string()][..])
        );
        assert_eq!(table.body()[1][0], " Bob<br>Jr ");
    }

    #[test]
    fn test_header_and_divider_only() {
        let table = TableBlock::from_lines(&["| --- | --- |"], ErrorMode::Strict).unwrap();
        assert!(table.is_none());

        let table = TableBlock::from_lines(&["| A | B |", "|---|---|"], ErrorMode::Strict).unwrap();
        assert!(table.is_none());

        let table = TableBlock::from_lines(&["| A | B |", "|---|---|", "| 1 | 2 |"], ErrorMode::Strict)
            .unwrap()
            .unwrap();
        assert_eq!(table.body().len(), 1);
    }

    #[test]
    fn test_zero_column_header() {
        let table = TableBlock::from_lines(&["|", "| a |"], ErrorMode::Strict).unwrap();
        assert!(table.is_none());
    }

    #[test]
    fn test_every_row_matches_header_width() {
        let lines = ["| A | B | C |", "|---|---|---|", "| 1 | 2 | 3 |", "| x |  | z |"];
        let table = TableBlock::from_lines(&lines, ErrorMode::Strict)
            .unwrap()
            .unwrap();
        assert_eq!(table.header().map(<[String]>::len), Some(3));
        assert!(!table.body().is_empty());
        assert!(table.rows().iter().all(|row| row.len() == table.columns()));
    }

    #[test]
    fn test_strict_mismatch_fails() {
        let lines = ["| A | B |", "| --- | --- |", "| 1 | 2 | 3 |"];
        let err = TableBlock::from_lines(&lines, ErrorMode::Strict).unwrap_err();
        assert!(matches!(
            err,
            Error::TableStructure {
                row: 1,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_lenient_pads_and_truncates() {
        let lines = ["| A | B |", "| 1 | 2 | 3 |", "| only |"];
        let table = TableBlock::from_lines(&lines, ErrorMode::Lenient)
            .unwrap()
            .unwrap();
        assert_eq!(table.rows()[1], vec![" 1 ", " 2 "]);
        assert_eq!(table.rows()[2], vec![" only ".to_string(), String::new()]);
    }
}
