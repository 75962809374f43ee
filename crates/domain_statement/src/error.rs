//! Assembly-layer errors
//!
//! [`StatementError`] is the single error surface callers see; the
//! component errors underneath convert into it at the assembler boundary.
//! A statement build treats a per-invoice ingest failure as a skip, not an
//! error, so [`IngestError`](infra_sheet::IngestError) only surfaces here
//! from the single-invoice path.

use core_kernel::TemporalError;
use infra_sheet::IngestError;
use infra_store::StoreError;
use interface_report::RenderError;
use thiserror::Error;

/// Input validation failures caught before any document is built
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required record field is blank
    #[error("required field is empty: {0}")]
    EmptyField(&'static str),

    /// The statement selection matched no stored invoices
    #[error("no invoices matched the selection")]
    NoInvoicesSelected,
}

/// Any failure of an assembly operation
#[derive(Debug, Error)]
pub enum StatementError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Temporal(#[from] TemporalError),
}
