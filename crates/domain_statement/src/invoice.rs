//! Single-invoice document assembly

use chrono::NaiveDate;
use domain_ledger::{LedgerTableBuilder, Transaction};
use infra_sheet::SheetExtract;
use infra_store::{InvoiceRecord, VendorRecord};
use interface_report::{
    DataTable, Decorations, DetailPanel, InvoiceDocument, ReportRenderer,
};
use tracing::info;

use crate::error::{StatementError, ValidationError};

/// Builds and renders the document for one invoice: vendor and invoice
/// detail blocks, the complete line-item table with the total spelled out,
/// then a one-transaction ledger table with its aging strip.
pub struct InvoiceAssembler<'a> {
    renderer: &'a ReportRenderer,
}

impl<'a> InvoiceAssembler<'a> {
    pub fn new(renderer: &'a ReportRenderer) -> Self {
        Self { renderer }
    }

    /// Assembles and renders the invoice document.
    ///
    /// The invoice becomes a single ledger transaction carrying the sheet's
    /// total, placed into the debit or credit slot by the invoice kind, over
    /// an opening balance of zero.
    ///
    /// # Errors
    ///
    /// [`ValidationError`] for blank required fields; render failures
    /// propagate as [`StatementError::Render`].
    pub fn assemble(
        &self,
        vendor: &VendorRecord,
        invoice: &InvoiceRecord,
        sheet: &SheetExtract,
        as_of: NaiveDate,
    ) -> Result<Vec<u8>, StatementError> {
        validate_vendor(vendor)?;
        validate_invoice(invoice)?;

        let transaction = Transaction::new(
            invoice.invoice_date.clone(),
            invoice.invoice_no.as_str(),
            vendor.name.clone(),
        )
        .with_amount(invoice.kind, sheet.total);

        let ledger = LedgerTableBuilder::new("Ledger")
            .with_aging(as_of)
            .build(std::slice::from_ref(&transaction));

        let document = InvoiceDocument {
            title: "INVOICE".to_string(),
            panels: vec![vendor_panel(vendor), invoice_panel(invoice)],
            line_items: DataTable {
                headers: sheet.headers.clone(),
                rows: sheet.rows.clone(),
            },
            total: sheet.total,
            ledger,
        };

        let bytes = self
            .renderer
            .render_invoice(&document, &Decorations { include_seal: true })?;
        info!(
            invoice = %invoice.invoice_no,
            total = %sheet.total,
            "invoice document assembled"
        );
        Ok(bytes)
    }
}

fn validate_vendor(vendor: &VendorRecord) -> Result<(), ValidationError> {
    if vendor.vendor_id.is_empty() {
        return Err(ValidationError::EmptyField("vendor id"));
    }
    if vendor.name.trim().is_empty() {
        return Err(ValidationError::EmptyField("vendor name"));
    }
    Ok(())
}

fn validate_invoice(invoice: &InvoiceRecord) -> Result<(), ValidationError> {
    if invoice.invoice_no.is_empty() {
        return Err(ValidationError::EmptyField("invoice number"));
    }
    if invoice.invoice_date.trim().is_empty() {
        return Err(ValidationError::EmptyField("invoice date"));
    }
    Ok(())
}

fn vendor_panel(vendor: &VendorRecord) -> DetailPanel {
    DetailPanel::new(
        "Vendor Details",
        vec![
            format!("Name: {}", vendor.name),
            format!("Address: {}", vendor.address),
            format!("PO Number: {}", vendor.po_number),
        ],
    )
}

fn invoice_panel(invoice: &InvoiceRecord) -> DetailPanel {
    DetailPanel::new(
        "Invoice Details",
        vec![
            format!("Invoice #: {}", invoice.invoice_no),
            format!("Date: {}", invoice.invoice_date),
            format!("Type: {}", invoice.kind),
            format!("PO/MR #: {}", invoice.po_mr_no),
        ],
    )
}
