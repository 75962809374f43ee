//! Store trait interfaces and query shapes

use core_kernel::{InvoiceNumber, VendorId};

use crate::error::StoreError;
use crate::records::{InvoiceRecord, VendorRecord};

/// How a statement-of-account picks its invoices. The three predicates are
/// mutually exclusive by construction; the caller chooses exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceSelection {
    /// Invoices dated within the inclusive range. Bounds are wire-format
    /// date strings compared lexicographically, which for `YYYY-MM-DD`
    /// matches chronological order (and a TEXT-column BETWEEN in a SQL
    /// backend).
    DateRange { from: String, to: String },
    /// Invoices whose number appears in the list (IN-list)
    Numbers(Vec<InvoiceNumber>),
    /// The N most recent invoices by date (ORDER BY date DESC LIMIT n)
    MostRecent(usize),
}

/// Filter for the invoice report search screen. All fields are optional and
/// conjunctive; substring matching follows LIKE `%...%` semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceFilter {
    /// Substring of the invoice number
    pub invoice_no_contains: Option<String>,
    /// Exact vendor key (vendor-name search resolves to keys first)
    pub vendor_id: Option<VendorId>,
    /// Exact invoice date (wire form)
    pub invoice_date: Option<String>,
}

/// Vendor master access.
pub trait VendorStore {
    /// Inserts a vendor. Fails with [`StoreError::DuplicateEntry`] when the
    /// vendor key is already taken.
    fn insert_vendor(&mut self, vendor: VendorRecord) -> Result<(), StoreError>;

    /// Exact lookup by vendor key.
    fn vendor(&self, id: &VendorId) -> Result<Option<VendorRecord>, StoreError>;

    /// Case-insensitive substring search on the vendor name.
    fn vendors_by_name(&self, fragment: &str) -> Result<Vec<VendorRecord>, StoreError>;

    /// All vendors in insertion order.
    fn all_vendors(&self) -> Result<Vec<VendorRecord>, StoreError>;

    /// Deletes a vendor; returns whether a record existed.
    fn delete_vendor(&mut self, id: &VendorId) -> Result<bool, StoreError>;
}

/// Invoice record access.
pub trait InvoiceStore {
    fn insert_invoice(&mut self, invoice: InvoiceRecord) -> Result<(), StoreError>;

    /// Report-screen search; results keep insertion order.
    fn search_invoices(&self, filter: &InvoiceFilter) -> Result<Vec<InvoiceRecord>, StoreError>;

    /// Statement selection for one vendor. Result order is the query's
    /// order: insertion order for ranges and IN-lists, newest-first for
    /// [`InvoiceSelection::MostRecent`]. Callers do not re-sort.
    fn select_invoices(
        &self,
        vendor: &VendorId,
        selection: &InvoiceSelection,
    ) -> Result<Vec<InvoiceRecord>, StoreError>;

    /// Deletes an invoice by number; returns whether a record existed.
    fn delete_invoice(&mut self, number: &InvoiceNumber) -> Result<bool, StoreError>;
}
