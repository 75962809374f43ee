//! Running-balance ledger table construction
//!
//! Builds the render-ready table model: a synthetic `Balance b/f` row, one
//! row per transaction with the running balance updated additively, and a
//! synthetic `Sub-Total` row. All monetary cells are formatted here; the
//! renderer only does layout.

use chrono::NaiveDate;
use core_kernel::Money;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aging::AgingSummary;
use crate::transaction::Transaction;

/// One formatted ledger row. Debit and credit are empty strings when zero;
/// the balance column always carries a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    pub date: String,
    pub reference: String,
    pub name: String,
    pub debit: String,
    pub credit: String,
    pub balance: String,
}

impl LedgerRow {
    fn synthetic(name: &str, debit: Money, credit: Money, balance: Money) -> Self {
        Self {
            date: String::new(),
            reference: String::new(),
            name: name.to_string(),
            debit: debit.ledger_cell(),
            credit: credit.ledger_cell(),
            balance: balance.grouped(),
        }
    }
}

/// The unit handed to the report renderer: formatted rows bounded by the
/// opening and subtotal rows, plus the unformatted totals and an optional
/// aging summary strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableModel {
    pub title: String,
    pub rows: Vec<LedgerRow>,
    pub total_debit: Money,
    pub total_credit: Money,
    pub closing_balance: Money,
    pub aging: Option<AgingSummary>,
}

/// Builds [`TableModel`]s from ordered transaction lists.
///
/// Transactions are taken in the order supplied; callers pre-sort when a
/// particular order (typically by date) is wanted.
#[derive(Debug, Clone)]
pub struct LedgerTableBuilder {
    title: String,
    opening_balance: Money,
    aging_as_of: Option<NaiveDate>,
}

impl LedgerTableBuilder {
    /// Creates a builder with an opening balance of zero and no aging strip.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            opening_balance: Money::zero(),
            aging_as_of: None,
        }
    }

    /// Sets the balance brought forward into the first row.
    pub fn opening_balance(mut self, balance: Money) -> Self {
        self.opening_balance = balance;
        self
    }

    /// Attaches an aging summary computed as of the given date.
    pub fn with_aging(mut self, as_of: NaiveDate) -> Self {
        self.aging_as_of = Some(as_of);
        self
    }

    /// Computes running balances and emits the formatted table.
    ///
    /// Invariant: the balance after row `i` equals the balance after row
    /// `i-1` plus that row's `debit - credit`, seeded with the opening
    /// balance.
    pub fn build(&self, transactions: &[Transaction]) -> TableModel {
        let mut rows = Vec::with_capacity(transactions.len() + 2);
        let mut running = self.opening_balance;
        let mut total_debit = Money::zero();
        let mut total_credit = Money::zero();

        rows.push(LedgerRow::synthetic(
            "Balance b/f",
            Money::zero(),
            Money::zero(),
            running,
        ));

        for tx in transactions {
            running += tx.net();
            total_debit += tx.debit;
            total_credit += tx.credit;
            rows.push(LedgerRow {
                date: tx.date.clone(),
                reference: tx.reference.clone(),
                name: tx.counterparty.clone(),
                debit: tx.debit.ledger_cell(),
                credit: tx.credit.ledger_cell(),
                balance: running.grouped(),
            });
        }

        rows.push(LedgerRow::synthetic(
            "Sub-Total",
            total_debit,
            total_credit,
            running,
        ));

        debug!(
            rows = rows.len(),
            closing = %running,
            "ledger table built"
        );

        TableModel {
            title: self.title.clone(),
            rows,
            total_debit,
            total_credit,
            closing_balance: running,
            aging: self
                .aging_as_of
                .map(|as_of| AgingSummary::classify(transactions, as_of)),
        }
    }
}
