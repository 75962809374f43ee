//! Statement Assembly - invoice and statement-of-account builds
//!
//! The orchestration layer of the ledger core. Assemblers take validated
//! records, run the ingest → classify → build pipeline from the component
//! crates, and hand the result to the report renderer:
//!
//! - [`InvoiceAssembler`]: one invoice and its ingested sheet into a full
//!   invoice document.
//! - [`SoaAssembler`]: a vendor's selected invoices into a combined
//!   statement of account, tolerating unreadable source files by skipping
//!   them and reporting the skips.
//! - [`assemble_report`]: an ad-hoc report over caller-selected
//!   transactions.
//!
//! All failures surface as [`StatementError`].

pub mod error;
pub mod invoice;
pub mod report;
pub mod soa;

pub use error::{StatementError, ValidationError};
pub use invoice::InvoiceAssembler;
pub use report::assemble_report;
pub use soa::{SoaAssembler, SoaBuild, SoaOutcome};
