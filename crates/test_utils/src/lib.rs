//! Test Utilities Crate
//!
//! Shared test infrastructure for the ledger test suite.
//!
//! # Modules
//!
//! - `fixtures`: ready-made sheet files and reference dates
//! - `builders`: builder patterns for vendor/invoice/transaction test data
//! - `logging`: tracing initialization for tests

pub mod builders;
pub mod fixtures;
pub mod logging;

pub use builders::*;
pub use fixtures::*;
