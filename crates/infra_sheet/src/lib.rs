//! Spreadsheet Ingestion - line-item extraction from tabular files
//!
//! Source spreadsheets arrive with an unpredictable leading region (logos,
//! addresses, blank rows) before the real header. Ingestion scans for the
//! first row carrying both sentinel tokens `name` and `amount`, re-reads the
//! grid with that row as the header, and extracts a name/amount line-item
//! table with a computed total.
//!
//! Two fixed conventions of the incoming files apply:
//!
//! - The final row of the re-read grid is dropped unconditionally. Source
//!   files carry a trailing total/footer row; callers whose files do not must
//!   pad a dummy trailing row. This is a fixed policy, not a safety check.
//! - Amount cells that are blank or non-numeric contribute zero rather than
//!   failing the ingestion.

pub mod error;
pub mod ingest;

pub use error::IngestError;
pub use ingest::{ingest, LineItem, SheetExtract};
