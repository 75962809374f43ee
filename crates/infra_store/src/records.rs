//! Stored record shapes

use core_kernel::{InvoiceNumber, VendorId};
use domain_ledger::InvoiceKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// A vendor master record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorRecord {
    /// Store-assigned row id
    pub id: Uuid,
    /// Operator-assigned unique vendor key
    pub vendor_id: VendorId,
    pub name: String,
    pub address: String,
    pub po_number: String,
}

impl VendorRecord {
    pub fn new(
        vendor_id: impl Into<VendorId>,
        name: impl Into<String>,
        address: impl Into<String>,
        po_number: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            vendor_id: vendor_id.into(),
            name: name.into(),
            address: address.into(),
            po_number: po_number.into(),
        }
    }
}

/// A recorded invoice.
///
/// Only metadata is stored; the line items live in the source spreadsheet at
/// `source_file`, which is re-ingested whenever a statement needs the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Store-assigned row id
    pub id: Uuid,
    /// Owning vendor's key
    pub vendor_id: VendorId,
    pub invoice_no: InvoiceNumber,
    /// Invoice date in wire form (`YYYY-MM-DD`)
    pub invoice_date: String,
    pub kind: InvoiceKind,
    pub po_mr_no: String,
    /// Path of the ingested spreadsheet
    pub source_file: PathBuf,
}

impl InvoiceRecord {
    pub fn new(
        vendor_id: impl Into<VendorId>,
        invoice_no: impl Into<InvoiceNumber>,
        invoice_date: impl Into<String>,
        kind: InvoiceKind,
        po_mr_no: impl Into<String>,
        source_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            vendor_id: vendor_id.into(),
            invoice_no: invoice_no.into(),
            invoice_date: invoice_date.into(),
            kind,
            po_mr_no: po_mr_no.into(),
            source_file: source_file.into(),
        }
    }
}
