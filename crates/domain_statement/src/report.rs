//! Ad-hoc ledger reports over caller-selected transactions

use chrono::NaiveDate;
use domain_ledger::{LedgerTableBuilder, Transaction};
use interface_report::{Decorations, ReportRenderer};

use crate::error::StatementError;

/// Renders a ledger report over an arbitrary transaction list, opening
/// balance zero, with the aging strip attached. This is the path behind
/// the "report on selected transactions" screen.
pub fn assemble_report(
    renderer: &ReportRenderer,
    title: impl Into<String>,
    transactions: &[Transaction],
    as_of: NaiveDate,
) -> Result<Vec<u8>, StatementError> {
    let table = LedgerTableBuilder::new(title)
        .with_aging(as_of)
        .build(transactions);
    Ok(renderer.render(&table, &Decorations { include_seal: false })?)
}
