//! Store error types

use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique-key violation on insert
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Referenced record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend failure (connection, query execution) in non-memory stores
    #[error("Store backend error: {0}")]
    Backend(String),
}
