//! Ledger Domain - transactions, aging, and report tables
//!
//! This crate implements the computation core of the vendor ledger:
//!
//! - **Transactions**: dated debit/credit entries mapped from invoices. An
//!   invoice is wholly a debit or wholly a credit; which slot its amount
//!   lands in is decided by the invoice kind.
//! - **Aging**: outstanding net amounts bucketed into five fixed windows by
//!   days elapsed since the transaction date.
//! - **Ledger tables**: a running balance carried row by row from an opening
//!   balance, bounded by synthetic `Balance b/f` and `Sub-Total` rows, with
//!   cells pre-formatted for the report renderer.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_ledger::{LedgerTableBuilder, Transaction};
//!
//! let rows = vec![Transaction::new("2025-05-01", "INV1", "Acme").with_debit(total)];
//! let table = LedgerTableBuilder::new("Statement of Account")
//!     .with_aging(as_of)
//!     .build(&rows);
//! ```

pub mod aging;
pub mod table;
pub mod transaction;

pub use aging::{AgeBucket, AgingSummary};
pub use table::{LedgerRow, LedgerTableBuilder, TableModel};
pub use transaction::{InvoiceKind, Transaction};
