//! In-memory store implementation
//!
//! Backs tests and single-user runs. Records live in insertion order, which
//! is also the order unsorted queries return them in.

use core_kernel::{InvoiceNumber, VendorId};

use crate::error::StoreError;
use crate::records::{InvoiceRecord, VendorRecord};
use crate::store::{InvoiceFilter, InvoiceSelection, InvoiceStore, VendorStore};

/// Vector-backed implementation of both store traits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    vendors: Vec<VendorRecord>,
    invoices: Vec<InvoiceRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VendorStore for MemoryStore {
    fn insert_vendor(&mut self, vendor: VendorRecord) -> Result<(), StoreError> {
        if self.vendors.iter().any(|v| v.vendor_id == vendor.vendor_id) {
            return Err(StoreError::DuplicateEntry(vendor.vendor_id.to_string()));
        }
        self.vendors.push(vendor);
        Ok(())
    }

    fn vendor(&self, id: &VendorId) -> Result<Option<VendorRecord>, StoreError> {
        Ok(self.vendors.iter().find(|v| &v.vendor_id == id).cloned())
    }

    fn vendors_by_name(&self, fragment: &str) -> Result<Vec<VendorRecord>, StoreError> {
        let needle = fragment.to_lowercase();
        Ok(self
            .vendors
            .iter()
            .filter(|v| v.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    fn all_vendors(&self) -> Result<Vec<VendorRecord>, StoreError> {
        Ok(self.vendors.clone())
    }

    fn delete_vendor(&mut self, id: &VendorId) -> Result<bool, StoreError> {
        let before = self.vendors.len();
        self.vendors.retain(|v| &v.vendor_id != id);
        Ok(self.vendors.len() < before)
    }
}

impl InvoiceStore for MemoryStore {
    fn insert_invoice(&mut self, invoice: InvoiceRecord) -> Result<(), StoreError> {
        self.invoices.push(invoice);
        Ok(())
    }

    fn search_invoices(&self, filter: &InvoiceFilter) -> Result<Vec<InvoiceRecord>, StoreError> {
        let needle = filter
            .invoice_no_contains
            .as_ref()
            .map(|n| n.to_lowercase());
        Ok(self
            .invoices
            .iter()
            .filter(|inv| {
                needle
                    .as_ref()
                    .map_or(true, |n| inv.invoice_no.as_str().to_lowercase().contains(n))
                    && filter
                        .vendor_id
                        .as_ref()
                        .map_or(true, |v| &inv.vendor_id == v)
                    && filter
                        .invoice_date
                        .as_ref()
                        .map_or(true, |d| &inv.invoice_date == d)
            })
            .cloned()
            .collect())
    }

    fn select_invoices(
        &self,
        vendor: &VendorId,
        selection: &InvoiceSelection,
    ) -> Result<Vec<InvoiceRecord>, StoreError> {
        let for_vendor = self.invoices.iter().filter(|inv| &inv.vendor_id == vendor);

        let selected: Vec<InvoiceRecord> = match selection {
            InvoiceSelection::DateRange { from, to } => for_vendor
                .filter(|inv| inv.invoice_date.as_str() >= from.as_str())
                .filter(|inv| inv.invoice_date.as_str() <= to.as_str())
                .cloned()
                .collect(),
            InvoiceSelection::Numbers(numbers) => for_vendor
                .filter(|inv| numbers.contains(&inv.invoice_no))
                .cloned()
                .collect(),
            InvoiceSelection::MostRecent(count) => {
                let mut all: Vec<InvoiceRecord> = for_vendor.cloned().collect();
                // Stable sort: equal dates keep insertion order.
                all.sort_by(|a, b| b.invoice_date.cmp(&a.invoice_date));
                all.truncate(*count);
                all
            }
        };
        Ok(selected)
    }

    fn delete_invoice(&mut self, number: &InvoiceNumber) -> Result<bool, StoreError> {
        let before = self.invoices.len();
        self.invoices.retain(|inv| &inv.invoice_no != number);
        Ok(self.invoices.len() < before)
    }
}
