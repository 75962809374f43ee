//! Statement-of-account assembly
//!
//! Invoice records store the path of their source spreadsheet, so every
//! statement build re-ingests the selected sources. A source that no longer
//! ingests does not fail the statement: the invoice is skipped, its number
//! recorded, and the statement renders from whatever ingested cleanly.

use chrono::NaiveDate;
use core_kernel::{parse_date, InvoiceNumber, TemporalError, DATE_FORMAT};
use domain_ledger::{LedgerTableBuilder, Transaction};
use infra_sheet::ingest;
use infra_store::{InvoiceRecord, InvoiceSelection, InvoiceStore, VendorRecord};
use interface_report::{DetailPanel, ReportRenderer};
use tracing::{info, warn};

use crate::error::{StatementError, ValidationError};

/// The transaction fold behind a statement: what ingested and what did not.
#[derive(Debug, Clone, Default)]
pub struct SoaBuild {
    pub transactions: Vec<Transaction>,
    /// Numbers of invoices whose source file failed to ingest
    pub skipped: Vec<InvoiceNumber>,
}

/// A rendered statement along with the invoices it had to leave out.
#[derive(Debug)]
pub struct SoaOutcome {
    pub document: Vec<u8>,
    pub skipped: Vec<InvoiceNumber>,
}

/// Builds and renders statements of account over a vendor's stored invoices.
pub struct SoaAssembler<'a> {
    renderer: &'a ReportRenderer,
}

impl<'a> SoaAssembler<'a> {
    pub fn new(renderer: &'a ReportRenderer) -> Self {
        Self { renderer }
    }

    /// Folds invoice records into ledger transactions, re-ingesting each
    /// source file. Unreadable sources are skipped and recorded; record
    /// order is preserved for the survivors.
    pub fn collect(&self, records: &[InvoiceRecord], vendor_name: &str) -> SoaBuild {
        let mut build = SoaBuild::default();
        for record in records {
            match ingest(&record.source_file) {
                Ok(extract) => build.transactions.push(
                    Transaction::new(
                        record.invoice_date.clone(),
                        record.invoice_no.as_str(),
                        vendor_name,
                    )
                    .with_amount(record.kind, extract.total),
                ),
                Err(error) => {
                    warn!(
                        invoice = %record.invoice_no,
                        source = %record.source_file.display(),
                        %error,
                        "source unreadable, invoice skipped"
                    );
                    build.skipped.push(record.invoice_no.clone());
                }
            }
        }
        build
    }

    /// Selects, collects, and renders the statement of account.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NoInvoicesSelected`] when the selection matches
    /// nothing; malformed or inverted date-range bounds are rejected with a
    /// [`TemporalError`]; store and render failures propagate. Per-invoice
    /// ingest failures are not errors and appear in [`SoaOutcome::skipped`].
    pub fn assemble<S: InvoiceStore>(
        &self,
        store: &S,
        vendor: &VendorRecord,
        selection: &InvoiceSelection,
        as_of: NaiveDate,
    ) -> Result<SoaOutcome, StatementError> {
        validate_selection(selection)?;
        let records = store.select_invoices(&vendor.vendor_id, selection)?;
        if records.is_empty() {
            return Err(ValidationError::NoInvoicesSelected.into());
        }

        let build = self.collect(&records, &vendor.name);
        let table = LedgerTableBuilder::new("Statement of Account")
            .with_aging(as_of)
            .build(&build.transactions);
        let panels = [statement_panel(vendor, as_of)];
        let document = self.renderer.render_statement(&panels, &table)?;

        info!(
            vendor = vendor.vendor_id.as_str(),
            invoices = build.transactions.len(),
            skipped = build.skipped.len(),
            "statement assembled"
        );
        Ok(SoaOutcome {
            document,
            skipped: build.skipped,
        })
    }
}

// Range bounds come from the operator, so unlike stored invoice dates they
// are parsed strictly.
fn validate_selection(selection: &InvoiceSelection) -> Result<(), StatementError> {
    if let InvoiceSelection::DateRange { from, to } = selection {
        let from = parse_date(from)?;
        let to = parse_date(to)?;
        if from > to {
            return Err(TemporalError::InvalidRange { from, to }.into());
        }
    }
    Ok(())
}

fn statement_panel(vendor: &VendorRecord, as_of: NaiveDate) -> DetailPanel {
    DetailPanel::new(
        "Statement For",
        vec![
            format!("Vendor: {} ({})", vendor.name, vendor.vendor_id),
            format!("Address: {}", vendor.address),
            format!("As Of: {}", as_of.format(DATE_FORMAT)),
        ],
    )
}
