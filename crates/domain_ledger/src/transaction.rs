//! Ledger transactions and the invoice-kind slot mapping

use core_kernel::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the ledger an invoice amount lands on.
///
/// The mapping is fixed: a `Credit` invoice places its total in the debit
/// column, a `Debit` invoice in the credit column. Labels that match neither
/// are treated as `Debit`; that fallback is long-standing behavior that
/// existing records rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceKind {
    Credit,
    Debit,
}

impl InvoiceKind {
    /// Maps a free-form type label to a kind. Only a case-insensitive
    /// `"credit"` selects [`InvoiceKind::Credit`]; everything else is
    /// [`InvoiceKind::Debit`].
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("credit") {
            InvoiceKind::Credit
        } else {
            InvoiceKind::Debit
        }
    }

    /// Places an amount into its `(debit, credit)` slots.
    pub fn place(&self, amount: Money) -> (Money, Money) {
        match self {
            InvoiceKind::Credit => (amount, Money::zero()),
            InvoiceKind::Debit => (Money::zero(), amount),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceKind::Credit => "Credit",
            InvoiceKind::Debit => "Debit",
        }
    }
}

impl fmt::Display for InvoiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single dated ledger entry.
///
/// Dates stay in their `YYYY-MM-DD` string form; ledger rows display them
/// verbatim and only the aging classifier parses them. Debit and credit are
/// both non-negative; in this domain exactly one of them is expected to be
/// non-zero per transaction, though the model does not forbid both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date in wire form (`YYYY-MM-DD`)
    pub date: String,
    /// Reference identifier, typically the invoice number
    pub reference: String,
    /// Counterparty name shown in the report's Name column
    pub counterparty: String,
    /// Debit amount
    pub debit: Money,
    /// Credit amount
    pub credit: Money,
}

impl Transaction {
    /// Creates a transaction with zero debit and credit.
    pub fn new(
        date: impl Into<String>,
        reference: impl Into<String>,
        counterparty: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            reference: reference.into(),
            counterparty: counterparty.into(),
            debit: Money::zero(),
            credit: Money::zero(),
        }
    }

    /// Sets the debit amount.
    pub fn with_debit(mut self, amount: Money) -> Self {
        self.debit = amount;
        self
    }

    /// Sets the credit amount.
    pub fn with_credit(mut self, amount: Money) -> Self {
        self.credit = amount;
        self
    }

    /// Places `amount` into the slot selected by `kind`.
    pub fn with_amount(mut self, kind: InvoiceKind, amount: Money) -> Self {
        let (debit, credit) = kind.place(amount);
        self.debit = debit;
        self.credit = credit;
        self
    }

    /// Net movement: `debit - credit`.
    pub fn net(&self) -> Money {
        self.debit - self.credit
    }
}
