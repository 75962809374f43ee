//! Test Data Builders
//!
//! Builders with sensible defaults so tests specify only the fields they
//! care about.

use core_kernel::Money;
use domain_ledger::{InvoiceKind, Transaction};
use infra_store::{InvoiceRecord, VendorRecord};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Builder for vendor records
pub struct TestVendorBuilder {
    vendor_id: String,
    name: String,
    address: String,
    po_number: String,
}

impl Default for TestVendorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestVendorBuilder {
    pub fn new() -> Self {
        Self {
            vendor_id: "V-1".to_string(),
            name: "Acme Trading".to_string(),
            address: "Industrial Area, Doha".to_string(),
            po_number: "PO-1001".to_string(),
        }
    }

    pub fn with_id(mut self, vendor_id: impl Into<String>) -> Self {
        self.vendor_id = vendor_id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn build(self) -> VendorRecord {
        VendorRecord::new(self.vendor_id, self.name, self.address, self.po_number)
    }
}

/// Builder for invoice records
pub struct TestInvoiceBuilder {
    vendor_id: String,
    invoice_no: String,
    invoice_date: String,
    kind: InvoiceKind,
    po_mr_no: String,
    source_file: PathBuf,
}

impl Default for TestInvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestInvoiceBuilder {
    pub fn new() -> Self {
        Self {
            vendor_id: "V-1".to_string(),
            invoice_no: "INV-1".to_string(),
            invoice_date: "2025-06-01".to_string(),
            kind: InvoiceKind::Debit,
            po_mr_no: "MR-1".to_string(),
            source_file: PathBuf::from("/tmp/inv-1.csv"),
        }
    }

    pub fn with_vendor(mut self, vendor_id: impl Into<String>) -> Self {
        self.vendor_id = vendor_id.into();
        self
    }

    pub fn with_number(mut self, invoice_no: impl Into<String>) -> Self {
        self.invoice_no = invoice_no.into();
        self
    }

    pub fn with_date(mut self, invoice_date: impl Into<String>) -> Self {
        self.invoice_date = invoice_date.into();
        self
    }

    pub fn with_kind(mut self, kind: InvoiceKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_source(mut self, source_file: impl Into<PathBuf>) -> Self {
        self.source_file = source_file.into();
        self
    }

    pub fn build(self) -> InvoiceRecord {
        InvoiceRecord::new(
            self.vendor_id,
            self.invoice_no,
            self.invoice_date,
            self.kind,
            self.po_mr_no,
            self.source_file,
        )
    }
}

/// Shorthand for a debit transaction on the given date.
pub fn debit_tx(date: &str, reference: &str, amount: Decimal) -> Transaction {
    Transaction::new(date, reference, "Acme Trading").with_debit(Money::new(amount))
}

/// Shorthand for a credit transaction on the given date.
pub fn credit_tx(date: &str, reference: &str, amount: Decimal) -> Transaction {
    Transaction::new(date, reference, "Acme Trading").with_credit(Money::new(amount))
}
