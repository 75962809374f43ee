//! Calendar-date helpers for string-typed transaction dates
//!
//! Transaction dates travel through the system in their `YYYY-MM-DD` string
//! form; they are parsed only where arithmetic needs them (aging, range
//! filters). Parsing is strict where the caller supplies the date (filter
//! bounds) and lenient where the data does (stored invoice dates).

use chrono::NaiveDate;
use thiserror::Error;

/// Wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors related to date handling
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid range: from {from} is after to {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },
}

/// Parses a `YYYY-MM-DD` date string.
pub fn parse_date(raw: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| TemporalError::InvalidDate(raw.to_string()))
}

/// Parses a date string, falling back to the given date when malformed.
///
/// Aging classification uses this so a single bad date yields age zero for
/// that transaction instead of failing the whole computation.
pub fn parse_date_or(raw: &str, fallback: NaiveDate) -> NaiveDate {
    parse_date(raw).unwrap_or(fallback)
}

/// Days elapsed from `date` to `as_of`. Negative for future dates.
pub fn age_days(date: NaiveDate, as_of: NaiveDate) -> i64 {
    (as_of - date).num_days()
}
