//! Record Store - vendors and invoices behind explicit trait interfaces
//!
//! The persistent store is an external collaborator of the ledger core: two
//! flat record tables reached through a handful of query shapes (exact match,
//! substring, date range, IN-list, most-recent-N). The traits here make the
//! store an explicit dependency of the assemblers instead of a process-wide
//! handle, and [`MemoryStore`] stands in for the real backend in tests and
//! single-user runs.
//!
//! Invoice records store the path of their source spreadsheet, not its
//! contents; statement assembly re-ingests each file on demand.

pub mod error;
pub mod memory;
pub mod records;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use records::{InvoiceRecord, VendorRecord};
pub use store::{InvoiceFilter, InvoiceSelection, InvoiceStore, VendorStore};
