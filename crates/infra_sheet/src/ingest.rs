//! Header discovery and line-item extraction

use core_kernel::Money;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::error::IngestError;

/// One extracted line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub amount: Money,
}

/// The result of ingesting one spreadsheet.
///
/// The full re-read grid (`headers` + `rows`) is retained alongside the
/// name/amount projection so the invoice renderer can lay out every column,
/// not only the two the total is computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetExtract {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub items: Vec<LineItem>,
    pub total: Money,
}

/// Ingests a tabular file into a line-item table with a computed total.
///
/// Steps, in order: locate the header row (first row whose cells include
/// both `name` and `amount`, case-insensitively), take the rows below it,
/// drop the final row unconditionally (trailing footer convention), collapse
/// exact-duplicate rows preserving first-seen order, then coerce the amount
/// column treating unparsable cells as zero.
///
/// # Errors
///
/// [`IngestError::HeaderNotFound`] when no row carries both sentinel tokens,
/// [`IngestError::ColumnNotFound`] when the header row yields no amount
/// column, and [`IngestError::Read`] wrapping the underlying cause for
/// unreadable or malformed files.
pub fn ingest(path: impl AsRef<Path>) -> Result<SheetExtract, IngestError> {
    let path = path.as_ref();
    let grid = read_grid(path)?;

    let header_idx = find_header_row(&grid).ok_or(IngestError::HeaderNotFound)?;
    debug!(path = %path.display(), header_row = header_idx, "header row located");

    let headers = grid[header_idx].clone();
    let amount_idx = locate_column(&headers, "amount").ok_or(IngestError::ColumnNotFound)?;
    let name_idx = locate_column(&headers, "name");

    let mut rows: Vec<Vec<String>> = grid[header_idx + 1..]
        .iter()
        .map(|row| normalize_width(row, headers.len()))
        .collect();
    // Trailing total/footer row is discarded unconditionally.
    rows.pop();

    let rows: Vec<Vec<String>> = rows.into_iter().collect::<IndexSet<_>>().into_iter().collect();

    let items: Vec<LineItem> = rows
        .iter()
        .map(|row| LineItem {
            name: name_idx.map(|i| row[i].clone()).unwrap_or_default(),
            amount: Money::parse_lenient(&row[amount_idx]),
        })
        .collect();
    let total: Money = items.iter().map(|item| item.amount).sum();

    info!(path = %path.display(), rows = rows.len(), total = %total, "sheet ingested");

    Ok(SheetExtract {
        headers,
        rows,
        items,
        total,
    })
}

/// Reads the raw grid with no header assumption and no width requirement.
fn read_grid(path: &Path) -> Result<Vec<Vec<String>>, IngestError> {
    let wrap = |source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(wrap)?;

    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record.map_err(wrap)?;
        grid.push(record.iter().map(str::to_string).collect());
    }
    Ok(grid)
}

/// First row whose cells include both sentinel tokens, compared
/// case-insensitively on trimmed cell text.
fn find_header_row(grid: &[Vec<String>]) -> Option<usize> {
    grid.iter().position(|row| {
        let has = |token: &str| row.iter().any(|cell| normalize(cell) == token);
        has("name") && has("amount")
    })
}

/// Index of the column whose normalized name equals `token` exactly.
fn locate_column(headers: &[String], token: &str) -> Option<usize> {
    headers.iter().position(|h| normalize(h) == token)
}

fn normalize(cell: &str) -> String {
    cell.trim().to_lowercase()
}

/// Pads or truncates a row to the header width so duplicate detection
/// compares whole rows on equal footing.
fn normalize_width(row: &[String], width: usize) -> Vec<String> {
    let mut out: Vec<String> = row.iter().take(width).cloned().collect();
    out.resize(width, String::new());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn header_row_needs_both_tokens() {
        let grid = vec![
            row(&["Acme Trading LLC", ""]),
            row(&["Name", "Qty"]),
            row(&["Name", "Amount"]),
        ];
        assert_eq!(find_header_row(&grid), Some(2));
    }

    #[test]
    fn header_tokens_match_case_insensitively() {
        let grid = vec![row(&[" NAME ", "amount", "extra"])];
        assert_eq!(find_header_row(&grid), Some(0));
    }

    #[test]
    fn no_header_row_is_none() {
        let grid = vec![row(&["a", "b"]), row(&["amount", "total"])];
        assert_eq!(find_header_row(&grid), None);
    }

    #[test]
    fn column_lookup_is_exact_after_normalization() {
        let headers = row(&["Sl No", " Name", "Gross Amount", "Amount "]);
        assert_eq!(locate_column(&headers, "amount"), Some(3));
        assert_eq!(locate_column(&headers, "name"), Some(1));
        assert_eq!(locate_column(&headers, "rate"), None);
    }

    #[test]
    fn rows_are_padded_to_header_width() {
        assert_eq!(normalize_width(&row(&["A"]), 3), row(&["A", "", ""]));
        assert_eq!(normalize_width(&row(&["A", "B", "C", "D"]), 2), row(&["A", "B"]));
    }
}
