//! Report Rendering - paginated documents for invoices and statements
//!
//! Takes the ledger domain's render-ready [`TableModel`](domain_ledger::TableModel)
//! and emits a paginated, fixed-geometry document: page header/footer bands,
//! a title line, the six-column ledger table, an optional aging summary
//! strip, and trailing signature/seal bands.
//!
//! Decorative assets (header, footer, signatures, seal) are strictly
//! best-effort: a missing file degrades to a bracketed placeholder line and
//! never fails the render.
//!
//! The page model is plain text with fixed character geometry: six ledger
//! columns at 70/80/100/60/60/70 width units, banded top and bottom margins,
//! a fixed line count per page.

pub mod assets;
pub mod config;
pub mod error;
pub mod layout;
pub mod renderer;

pub use assets::AssetCatalog;
pub use config::ReportConfig;
pub use error::RenderError;
pub use renderer::{DataTable, Decorations, DetailPanel, InvoiceDocument, ReportRenderer};
