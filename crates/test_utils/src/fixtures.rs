//! Pre-built Test Fixtures
//!
//! Sheet files follow the source convention every ingestible spreadsheet
//! carries: an arbitrary preamble before the header row, the header row
//! holding both `Name` and `Amount`, data rows, and one trailing footer row
//! that ingestion drops unconditionally.

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixture for ingestible sheet files
pub struct SheetFixtures;

impl SheetFixtures {
    /// Writes a well-formed sheet: two preamble rows, a `Name`/`Amount`
    /// header, the given data rows, and a footer row.
    pub fn sheet(dir: &Path, name: &str, items: &[(&str, &str)]) -> PathBuf {
        let mut lines = vec![
            "Acme Trading LLC,".to_string(),
            ",".to_string(),
            "Name,Amount".to_string(),
        ];
        for (item, amount) in items {
            lines.push(format!("{item},{amount}"));
        }
        lines.push("Total,".to_string());
        Self::write(dir, name, &lines.join("\n"))
    }

    /// Writes a file with no row carrying the header tokens; ingestion
    /// fails on it with `HeaderNotFound`.
    pub fn corrupt_sheet(dir: &Path, name: &str) -> PathBuf {
        Self::write(dir, name, "garbage,data\nmore,garbage\n")
    }

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }
}

/// Fixture for reference dates
pub struct DateFixtures;

impl DateFixtures {
    /// The statement date most tests age against
    pub fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    /// A date 10 days before [`Self::as_of`], inside the current bucket
    pub fn recent() -> &'static str {
        "2025-06-20"
    }

    /// A date 100 days before [`Self::as_of`], inside the 90+ bucket
    pub fn aged() -> &'static str {
        "2025-03-22"
    }
}
