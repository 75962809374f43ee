//! Fixed table layout computation
//!
//! Two width models exist side by side:
//!
//! - The ledger and aging tables use fixed relative column widths
//!   (70/80/100/60/60/70 units for the ledger), scaled proportionally into
//!   the available character width.
//! - Ad-hoc data tables (the invoice line-item table) size each column by
//!   the longest text observed in it, header included, with a floor on the
//!   first column.

/// Relative ledger column widths: Date, Invoice #, Name, Debit, Credit, Balance.
pub const LEDGER_COLUMN_UNITS: [usize; 6] = [70, 80, 100, 60, 60, 70];

/// Relative aging strip widths: five buckets plus Total.
pub const AGING_COLUMN_UNITS: [usize; 6] = [80, 60, 60, 60, 80, 60];

/// Ledger table column headings, in column order.
pub const LEDGER_HEADERS: [&str; 6] = ["Date", "Invoice #", "Name", "Debit", "Credit", "Balance"];

/// Minimum content width of the first column in an ad-hoc table.
pub const FIRST_COLUMN_FLOOR: usize = 5;

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Ledger column alignments: debit/credit/balance right, the rest left.
pub const LEDGER_ALIGNMENTS: [Align; 6] = [
    Align::Left,
    Align::Left,
    Align::Left,
    Align::Right,
    Align::Right,
    Align::Right,
];

/// Scales relative width units into character widths summing exactly to
/// `table_width` (largest-remainder rounding).
pub fn scale_widths(units: &[usize], table_width: usize) -> Vec<usize> {
    let total: usize = units.iter().sum();
    if total == 0 || units.is_empty() {
        return vec![];
    }
    // Borders and separators consume one char per column plus one.
    let content_width = table_width.saturating_sub(units.len() + 1);

    let mut widths: Vec<usize> = units.iter().map(|u| u * content_width / total).collect();
    let mut shortfall = content_width - widths.iter().sum::<usize>();

    // Distribute the rounding shortfall by largest fractional remainder.
    let mut order: Vec<usize> = (0..units.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse((units[i] * content_width) % total));
    for &i in order.iter().cycle().take(shortfall.min(units.len() * 2)) {
        if shortfall == 0 {
            break;
        }
        widths[i] += 1;
        shortfall -= 1;
    }
    widths
}

/// Widths for an ad-hoc data table, proportional to the longest cell text
/// per column (header included) with [`FIRST_COLUMN_FLOOR`] applied.
pub fn proportional_widths(headers: &[String], rows: &[Vec<String>], table_width: usize) -> Vec<usize> {
    let mut ratios: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            let longest_cell = rows
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            longest_cell.max(header.chars().count())
        })
        .collect();
    if let Some(first) = ratios.first_mut() {
        *first = (*first).max(FIRST_COLUMN_FLOOR);
    }
    scale_widths(&ratios, table_width)
}

/// Renders one bordered row, truncating over-wide cells.
pub fn format_row(cells: &[String], widths: &[usize], alignments: &[Align]) -> String {
    let mut line = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let raw = cells.get(i).map(String::as_str).unwrap_or("");
        let text: String = raw.chars().take(*width).collect();
        let align = alignments.get(i).copied().unwrap_or(Align::Left);
        match align {
            Align::Left => line.push_str(&format!("{text:<width$}")),
            Align::Right => line.push_str(&format!("{text:>width$}")),
        }
        line.push('|');
    }
    line
}

/// Horizontal rule matching a row of the given widths.
pub fn rule(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(*width));
        line.push('+');
    }
    line
}

/// Centers text within the page width.
pub fn centered(text: &str, page_width: usize) -> String {
    let len = text.chars().count();
    if len >= page_width {
        return text.to_string();
    }
    format!("{:>pad$}", text, pad = (page_width + len) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(items: &[&str]) -> Vec<String> {
        items.iter().map(|i| i.to_string()).collect()
    }

    #[test]
    fn scaled_widths_fill_the_content_width_exactly() {
        let widths = scale_widths(&LEDGER_COLUMN_UNITS, 88);
        assert_eq!(widths.len(), 6);
        // 6 columns: 7 border chars.
        assert_eq!(widths.iter().sum::<usize>(), 88 - 7);
        // Name (100 units) is the widest, debit/credit (60) the narrowest.
        assert!(widths[2] >= *widths.iter().max().unwrap() - 1);
        assert!(widths[3] <= widths[0]);
    }

    #[test]
    fn proportional_widths_follow_longest_text() {
        let headers = s(&["No", "Description", "Amount"]);
        let rows = vec![
            s(&["1", "Pre-employment medical screening", "1,200.00"]),
            s(&["2", "X-ray", "80.00"]),
        ];
        let widths = proportional_widths(&headers, &rows, 60);
        assert!(widths[1] > widths[0]);
        assert!(widths[1] > widths[2]);
    }

    #[test]
    fn first_column_floor_applies() {
        let headers = s(&["#", "Name"]);
        let rows = vec![s(&["1", "A"])];
        let widths = proportional_widths(&headers, &rows, 40);
        // Ratio floor of 5 beats the observed width of 1.
        assert!(widths[0] >= 5 * (40 - 3) / 10);
    }

    #[test]
    fn rows_align_and_truncate() {
        let widths = [4, 6];
        let row = format_row(&s(&["abcdefg", "12"]), &widths, &[Align::Left, Align::Right]);
        assert_eq!(row, "|abcd|    12|");
        assert_eq!(rule(&widths), "+----+------+");
    }

    #[test]
    fn centered_pads_symmetrically() {
        assert_eq!(centered("ab", 6), "  ab");
        assert_eq!(centered("toolongtext", 4), "toolongtext");
    }
}
