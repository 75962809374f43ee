//! Core Kernel - Foundational types for the vendor ledger system
//!
//! This crate provides the building blocks used across the ledger, ingestion,
//! and reporting crates:
//! - Money with precise decimal arithmetic and ledger display formatting
//! - Lenient calendar-date parsing for string-typed transaction dates
//! - Amount-in-words spelling for documentary totals
//! - Business-key identifiers

pub mod identifiers;
pub mod money;
pub mod temporal;
pub mod words;

pub use identifiers::{InvoiceNumber, VendorId};
pub use money::Money;
pub use temporal::{age_days, parse_date, parse_date_or, TemporalError, DATE_FORMAT};
pub use words::amount_in_words;
