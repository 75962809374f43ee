//! Document assembly and pagination

use core_kernel::{amount_in_words, Money};
use domain_ledger::{AgingSummary, TableModel};
use std::path::Path;
use tracing::info;

use crate::assets::{
    AssetCatalog, FOOTER_IMAGE, HEADER_IMAGE, SEAL_IMAGE, SECOND_SIGNATURE_IMAGE, SIGNATURE_IMAGE,
};
use crate::config::ReportConfig;
use crate::error::RenderError;
use crate::layout::{
    self, Align, AGING_COLUMN_UNITS, LEDGER_ALIGNMENTS, LEDGER_COLUMN_UNITS, LEDGER_HEADERS,
};

const HEADER_PLACEHOLDER: &str = "[Header Image Missing]";
const FOOTER_PLACEHOLDER: &str = "[Footer Image Missing]";
const SIGNATURE_PLACEHOLDER: &str = "[Signature Image Missing]";
const SECOND_SIGNATURE_PLACEHOLDER: &str = "[Second Signature Image Missing]";
const SEAL_PLACEHOLDER: &str = "[Seal Image Missing]";

/// Which optional trailing decorations a document carries. The seal band
/// only applies to invoice documents; plain report tables never carry one.
#[derive(Debug, Clone)]
pub struct Decorations {
    pub include_seal: bool,
}

impl Default for Decorations {
    fn default() -> Self {
        Self { include_seal: true }
    }
}

/// A boxed heading-plus-text block (vendor details, banker details, ...).
#[derive(Debug, Clone)]
pub struct DetailPanel {
    pub heading: String,
    pub lines: Vec<String>,
}

impl DetailPanel {
    pub fn new(heading: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            lines,
        }
    }
}

/// An ad-hoc data table laid out with proportional column widths.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Everything an invoice document renders: detail panels, the full
/// line-item table, the documentary total, and the one-row ledger table.
#[derive(Debug, Clone)]
pub struct InvoiceDocument {
    pub title: String,
    pub panels: Vec<DetailPanel>,
    pub line_items: DataTable,
    pub total: Money,
    pub ledger: TableModel,
}

/// Renders table models into paginated fixed-geometry documents.
pub struct ReportRenderer {
    config: ReportConfig,
    assets: AssetCatalog,
}

impl ReportRenderer {
    /// Creates a renderer; decorative assets resolve against the configured
    /// asset directory.
    pub fn new(config: ReportConfig) -> Self {
        let assets = AssetCatalog::new(config.assets_dir.clone());
        Self { config, assets }
    }

    /// Renders a ledger report document: title, ledger table, optional
    /// aging strip, signature bands.
    pub fn render(
        &self,
        table: &TableModel,
        _decorations: &Decorations,
    ) -> Result<Vec<u8>, RenderError> {
        let mut body = Vec::new();
        self.push_title(&mut body, &table.title);
        self.push_ledger_table(&mut body, table);
        if let Some(aging) = &table.aging {
            body.push(String::new());
            self.push_aging_strip(&mut body, aging);
        }
        self.push_signature_bands(&mut body);
        Ok(self.paginate(body).into_bytes())
    }

    /// Renders a statement document: title, header detail panels, the
    /// combined ledger table, aging strip, signature bands. Statements
    /// never carry a seal band.
    pub fn render_statement(
        &self,
        panels: &[DetailPanel],
        table: &TableModel,
    ) -> Result<Vec<u8>, RenderError> {
        let mut body = Vec::new();
        self.push_title(&mut body, &table.title);
        for panel in panels {
            self.push_panel(&mut body, panel);
        }
        self.push_ledger_table(&mut body, table);
        if let Some(aging) = &table.aging {
            body.push(String::new());
            self.push_aging_strip(&mut body, aging);
        }
        self.push_signature_bands(&mut body);
        Ok(self.paginate(body).into_bytes())
    }

    /// Renders a full invoice document: detail panels, the complete
    /// line-item table with the spelled-out total, then the single-row
    /// ledger table and aging strip.
    ///
    /// # Errors
    ///
    /// [`RenderError::AmountOutOfRange`] when the total cannot be rounded
    /// into a spellable whole number.
    pub fn render_invoice(
        &self,
        doc: &InvoiceDocument,
        decorations: &Decorations,
    ) -> Result<Vec<u8>, RenderError> {
        let whole = doc
            .total
            .round_whole()
            .ok_or_else(|| RenderError::AmountOutOfRange(doc.total.to_string()))?;
        let spelled = amount_in_words(whole, &self.config.currency_words);

        let mut body = Vec::new();
        self.push_title(&mut body, &doc.title);
        for panel in &doc.panels {
            self.push_panel(&mut body, panel);
        }
        if !doc.line_items.headers.is_empty() {
            self.push_data_table(&mut body, &doc.line_items);
            // The exact numeric total and the rounded spelled total sit side
            // by side; they may disagree by the rounding remainder.
            body.push(format!("Total: {}    {}", doc.total.grouped(), spelled));
            body.push(String::new());
        }
        self.push_ledger_table(&mut body, &doc.ledger);
        if let Some(aging) = &doc.ledger.aging {
            body.push(String::new());
            self.push_aging_strip(&mut body, aging);
        }
        self.push_signature_bands(&mut body);
        if decorations.include_seal {
            body.push(String::new());
            body.push(self.band(SEAL_IMAGE, SEAL_PLACEHOLDER));
        }
        Ok(self.paginate(body).into_bytes())
    }

    /// Writes rendered bytes to a file.
    pub fn write_document(&self, path: impl AsRef<Path>, bytes: &[u8]) -> Result<(), RenderError> {
        let path = path.as_ref();
        std::fs::write(path, bytes).map_err(|source| RenderError::Output {
            path: path.to_path_buf(),
            source,
        })
    }

    fn push_title(&self, body: &mut Vec<String>, title: &str) {
        body.push(layout::centered(title, self.config.page_width));
        body.push(String::new());
    }

    fn push_panel(&self, body: &mut Vec<String>, panel: &DetailPanel) {
        let width = self.config.table_width();
        body.push(layout::rule(&[width]));
        body.push(layout::format_row(
            std::slice::from_ref(&panel.heading),
            &[width],
            &[Align::Left],
        ));
        for line in &panel.lines {
            body.push(layout::format_row(
                std::slice::from_ref(line),
                &[width],
                &[Align::Left],
            ));
        }
        body.push(layout::rule(&[width]));
        body.push(String::new());
    }

    fn push_ledger_table(&self, body: &mut Vec<String>, table: &TableModel) {
        let widths = layout::scale_widths(&LEDGER_COLUMN_UNITS, self.config.table_width());
        let headers: Vec<String> = LEDGER_HEADERS.iter().map(|h| h.to_string()).collect();

        body.push(layout::rule(&widths));
        body.push(layout::format_row(&headers, &widths, &LEDGER_ALIGNMENTS));
        body.push(layout::rule(&widths));
        for row in &table.rows {
            let cells = [
                row.date.clone(),
                row.reference.clone(),
                row.name.clone(),
                row.debit.clone(),
                row.credit.clone(),
                row.balance.clone(),
            ];
            body.push(layout::format_row(&cells, &widths, &LEDGER_ALIGNMENTS));
        }
        body.push(layout::rule(&widths));
    }

    fn push_aging_strip(&self, body: &mut Vec<String>, aging: &AgingSummary) {
        let widths = layout::scale_widths(&AGING_COLUMN_UNITS, self.config.table_width());
        let mut headers: Vec<String> = aging
            .in_order()
            .iter()
            .map(|(bucket, _)| bucket.label().to_string())
            .collect();
        headers.push("Total".to_string());
        let mut values: Vec<String> = aging
            .in_order()
            .iter()
            .map(|(_, amount)| amount.grouped())
            .collect();
        values.push(aging.total().grouped());

        let alignments = [Align::Right; 6];
        body.push(layout::rule(&widths));
        body.push(layout::format_row(&headers, &widths, &alignments));
        body.push(layout::rule(&widths));
        body.push(layout::format_row(&values, &widths, &alignments));
        body.push(layout::rule(&widths));
    }

    fn push_data_table(&self, body: &mut Vec<String>, table: &DataTable) {
        let widths =
            layout::proportional_widths(&table.headers, &table.rows, self.config.table_width());
        let alignments = vec![Align::Left; widths.len()];

        body.push(layout::rule(&widths));
        body.push(layout::format_row(&table.headers, &widths, &alignments));
        body.push(layout::rule(&widths));
        for row in &table.rows {
            body.push(layout::format_row(row, &widths, &alignments));
        }
        body.push(layout::rule(&widths));
        body.push(String::new());
    }

    fn push_signature_bands(&self, body: &mut Vec<String>) {
        body.push(String::new());
        body.push(self.band(SIGNATURE_IMAGE, SIGNATURE_PLACEHOLDER));
        body.push(String::new());
        body.push(self.band(SECOND_SIGNATURE_IMAGE, SECOND_SIGNATURE_PLACEHOLDER));
    }

    /// A decorative band: the asset's name when the file exists, otherwise
    /// the placeholder. Missing assets are never an error.
    fn band(&self, asset: &str, placeholder: &str) -> String {
        let text = match self.assets.locate(asset) {
            Some(_) => format!("[{asset}]"),
            None => placeholder.to_string(),
        };
        layout::centered(&text, self.config.page_width)
    }

    /// Splits body lines into fixed-size pages, each topped by the header
    /// band and closed by the footer band. Pages are separated by form
    /// feeds.
    fn paginate(&self, body: Vec<String>) -> String {
        let header = self.band(HEADER_IMAGE, HEADER_PLACEHOLDER);
        let footer = self.band(FOOTER_IMAGE, FOOTER_PLACEHOLDER);
        // Two lines of band plus margin at each end of the page.
        let capacity = self.config.page_lines.saturating_sub(4).max(1);

        let empty: &[String] = &[];
        let chunks: Vec<&[String]> = if body.is_empty() {
            vec![empty]
        } else {
            body.chunks(capacity).collect()
        };

        let mut pages = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            let mut lines = Vec::with_capacity(self.config.page_lines);
            lines.push(header.clone());
            lines.push(String::new());
            lines.extend(chunk.iter().cloned());
            while lines.len() < self.config.page_lines.saturating_sub(2) {
                lines.push(String::new());
            }
            lines.push(String::new());
            lines.push(footer.clone());
            pages.push(lines.join("\n"));
        }

        let document = pages.join("\n\u{c}\n");
        info!(
            pages = pages.len(),
            bytes = document.len(),
            "document rendered"
        );
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_ledger::{LedgerTableBuilder, Transaction};
    use rust_decimal_macros::dec;

    fn renderer() -> (tempfile::TempDir, ReportRenderer) {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig {
            assets_dir: dir.path().to_path_buf(),
            ..ReportConfig::default()
        };
        (dir, ReportRenderer::new(config))
    }

    fn sample_table() -> TableModel {
        LedgerTableBuilder::new("Invoice Report")
            .build(&[Transaction::new("2025-06-01", "INV1", "Acme")
                .with_debit(Money::new(dec!(1234.5)))])
    }

    #[test]
    fn report_contains_title_and_formatted_cells() {
        let (_dir, renderer) = renderer();
        let bytes = renderer.render(&sample_table(), &Decorations::default()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Invoice Report"));
        assert!(text.contains("Balance b/f"));
        assert!(text.contains("1,234.50"));
        assert!(text.contains("Sub-Total"));
    }

    #[test]
    fn invoice_document_spells_out_the_total() {
        let doc = InvoiceDocument {
            title: "INVOICE".to_string(),
            panels: vec![DetailPanel::new(
                "Vendor Details",
                vec!["Acme Trading".to_string(), "Doha".to_string()],
            )],
            line_items: DataTable {
                headers: vec!["Name".to_string(), "Amount".to_string()],
                rows: vec![vec!["Screening".to_string(), "500.60".to_string()]],
            },
            total: Money::new(dec!(500.60)),
            ledger: sample_table(),
        };

        let (_dir, renderer) = renderer();
        let bytes = renderer
            .render_invoice(&doc, &Decorations { include_seal: true })
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Vendor Details"));
        assert!(text.contains("Screening"));
        assert!(text.contains("Total: 500.60    Five Hundred And One Riyals Only"));
        assert!(text.contains("[Seal Image Missing]"));
    }

    #[test]
    fn statement_document_carries_header_panels_without_a_seal() {
        let panels = vec![DetailPanel::new(
            "Statement For",
            vec!["Acme Trading".to_string()],
        )];
        let (_dir, renderer) = renderer();
        let bytes = renderer.render_statement(&panels, &sample_table()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Statement For"));
        assert!(text.contains("Sub-Total"));
        assert!(!text.contains("Seal"));
    }

    #[test]
    fn missing_assets_degrade_to_placeholders() {
        let (_dir, renderer) = renderer();
        let bytes = renderer.render(&sample_table(), &Decorations::default()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("[Header Image Missing]"));
        assert!(text.contains("[Footer Image Missing]"));
        assert!(text.contains("[Signature Image Missing]"));
    }

    #[test]
    fn present_assets_render_their_band() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(HEADER_IMAGE), b"png").unwrap();
        let mut config = ReportConfig::default();
        config.assets_dir = dir.path().to_path_buf();

        let bytes = ReportRenderer::new(config)
            .render(&sample_table(), &Decorations::default())
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("[header.png]"));
        assert!(!text.contains("[Header Image Missing]"));
    }

    #[test]
    fn every_page_has_the_fixed_line_count() {
        let config = ReportConfig::default();
        let page_lines = config.page_lines;
        let many: Vec<Transaction> = (0..200)
            .map(|i| Transaction::new("2025-06-01", format!("INV{i}"), "Acme")
                .with_debit(Money::new(dec!(1))))
            .collect();
        let table = LedgerTableBuilder::new("Long Report").build(&many);

        let (_dir, renderer) = renderer();
        let bytes = renderer.render(&table, &Decorations::default()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let pages: Vec<&str> = text.split("\n\u{c}\n").collect();
        assert!(pages.len() > 1);
        for page in pages {
            assert_eq!(page.lines().count(), page_lines);
        }
    }
}
