//! Ingestion errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while ingesting a spreadsheet
#[derive(Debug, Error)]
pub enum IngestError {
    /// No row contains both sentinel tokens
    #[error("no header row found containing both 'name' and 'amount'")]
    HeaderNotFound,

    /// The re-read header has no amount column
    #[error("no column named 'amount' found")]
    ColumnNotFound,

    /// The file could not be read or parsed as tabular data
    #[error("failed to read sheet {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
