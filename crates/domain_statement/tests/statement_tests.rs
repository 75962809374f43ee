//! End-to-end assembly tests: ingest, classify, build, render.

use domain_ledger::InvoiceKind;
use domain_statement::{
    assemble_report, InvoiceAssembler, SoaAssembler, StatementError, ValidationError,
};
use infra_store::{InvoiceSelection, InvoiceStore, MemoryStore};
use interface_report::{ReportConfig, ReportRenderer};
use rust_decimal_macros::dec;
use test_utils::{
    credit_tx, debit_tx, DateFixtures, SheetFixtures, TestInvoiceBuilder, TestVendorBuilder,
};

fn renderer(dir: &std::path::Path) -> ReportRenderer {
    let config = ReportConfig {
        assets_dir: dir.to_path_buf(),
        ..ReportConfig::default()
    };
    ReportRenderer::new(config)
}

#[test]
fn credit_invoice_lands_in_the_debit_slot() {
    test_utils::logging::init();
    let dir = tempfile::tempdir().unwrap();
    let source = SheetFixtures::sheet(dir.path(), "inv1.csv", &[("Screening", "500")]);
    let sheet = infra_sheet::ingest(&source).unwrap();
    assert_eq!(sheet.total.amount(), dec!(500));

    let vendor = TestVendorBuilder::new().build();
    let invoice = TestInvoiceBuilder::new()
        .with_number("INV1")
        .with_kind(InvoiceKind::Credit)
        .with_source(&source)
        .build();

    let renderer = renderer(dir.path());
    let bytes = InvoiceAssembler::new(&renderer)
        .assemble(&vendor, &invoice, &sheet, DateFixtures::as_of())
        .unwrap();
    let text = String::from_utf8(bytes).unwrap();

    // Credit invoices fill the ledger's debit slot; the balance closes at
    // 500 and the credit subtotal renders blank, so no cell shows -500.
    assert!(text.contains("INVOICE"));
    assert!(text.contains("Vendor Details"));
    assert!(text.contains("Screening"));
    assert!(text.contains("500.00"));
    assert!(!text.contains("-500.00"));
    assert!(text.contains("Five Hundred Riyals Only"));
}

#[test]
fn blank_vendor_name_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let source = SheetFixtures::sheet(dir.path(), "inv1.csv", &[("Screening", "500")]);
    let sheet = infra_sheet::ingest(&source).unwrap();

    let vendor = TestVendorBuilder::new().with_name("   ").build();
    let invoice = TestInvoiceBuilder::new().with_source(&source).build();

    let renderer = renderer(dir.path());
    let err = InvoiceAssembler::new(&renderer)
        .assemble(&vendor, &invoice, &sheet, DateFixtures::as_of())
        .unwrap_err();
    assert!(matches!(
        err,
        StatementError::Validation(ValidationError::EmptyField("vendor name"))
    ));
}

#[test]
fn statement_skips_invoices_with_unreadable_sources() {
    test_utils::logging::init();
    let dir = tempfile::tempdir().unwrap();
    let good = SheetFixtures::sheet(dir.path(), "inv1.csv", &[("Screening", "100")]);
    let bad = SheetFixtures::corrupt_sheet(dir.path(), "inv3.csv");

    let vendor = TestVendorBuilder::new().build();
    let mut store = MemoryStore::new();
    store
        .insert_invoice(
            TestInvoiceBuilder::new()
                .with_number("INV1")
                .with_source(&good)
                .build(),
        )
        .unwrap();
    store
        .insert_invoice(
            TestInvoiceBuilder::new()
                .with_number("INV3")
                .with_source(&bad)
                .build(),
        )
        .unwrap();

    let selection = InvoiceSelection::Numbers(vec!["INV1".into(), "INV3".into()]);
    let renderer = renderer(dir.path());
    let outcome = SoaAssembler::new(&renderer)
        .assemble(&store, &vendor, &selection, DateFixtures::as_of())
        .unwrap();

    assert_eq!(outcome.skipped, vec!["INV3".into()]);
    let text = String::from_utf8(outcome.document).unwrap();
    assert!(text.contains("Statement of Account"));
    assert!(text.contains("INV1"));
    assert!(!text.contains("INV3"));
    assert!(text.contains("100.00"));
}

#[test]
fn empty_selection_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let vendor = TestVendorBuilder::new().build();
    let store = MemoryStore::new();

    let selection = InvoiceSelection::MostRecent(5);
    let renderer = renderer(dir.path());
    let err = SoaAssembler::new(&renderer)
        .assemble(&store, &vendor, &selection, DateFixtures::as_of())
        .unwrap_err();
    assert!(matches!(
        err,
        StatementError::Validation(ValidationError::NoInvoicesSelected)
    ));
}

#[test]
fn date_range_statement_combines_and_ages_invoices() {
    test_utils::logging::init();
    let dir = tempfile::tempdir().unwrap();
    let recent = SheetFixtures::sheet(dir.path(), "recent.csv", &[("Supplies", "250")]);
    let aged = SheetFixtures::sheet(dir.path(), "aged.csv", &[("Repairs", "1000")]);

    let vendor = TestVendorBuilder::new().build();
    let mut store = MemoryStore::new();
    store
        .insert_invoice(
            TestInvoiceBuilder::new()
                .with_number("INV-R")
                .with_date(DateFixtures::recent())
                .with_source(&recent)
                .build(),
        )
        .unwrap();
    store
        .insert_invoice(
            TestInvoiceBuilder::new()
                .with_number("INV-A")
                .with_date(DateFixtures::aged())
                .with_source(&aged)
                .build(),
        )
        .unwrap();

    let selection = InvoiceSelection::DateRange {
        from: "2025-01-01".to_string(),
        to: "2025-12-31".to_string(),
    };
    let renderer = renderer(dir.path());
    let outcome = SoaAssembler::new(&renderer)
        .assemble(&store, &vendor, &selection, DateFixtures::as_of())
        .unwrap();

    assert!(outcome.skipped.is_empty());
    let text = String::from_utf8(outcome.document).unwrap();
    assert!(text.contains("INV-R"));
    assert!(text.contains("INV-A"));
    // Closing balance combines both invoices.
    assert!(text.contains("1,250.00"));
}

#[test]
fn inverted_date_range_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let vendor = TestVendorBuilder::new().build();
    let store = MemoryStore::new();

    let selection = InvoiceSelection::DateRange {
        from: "2025-12-31".to_string(),
        to: "2025-01-01".to_string(),
    };
    let renderer = renderer(dir.path());
    let err = SoaAssembler::new(&renderer)
        .assemble(&store, &vendor, &selection, DateFixtures::as_of())
        .unwrap_err();
    assert!(matches!(err, StatementError::Temporal(_)));
}

#[test]
fn manual_report_renders_selected_transactions() {
    let dir = tempfile::tempdir().unwrap();
    let transactions = vec![
        debit_tx("2025-06-01", "INV1", dec!(300)),
        credit_tx("2025-06-10", "PAY1", dec!(100)),
    ];

    let renderer = renderer(dir.path());
    let bytes = assemble_report(
        &renderer,
        "Selected Transactions",
        &transactions,
        DateFixtures::as_of(),
    )
    .unwrap();
    let text = String::from_utf8(bytes).unwrap();

    assert!(text.contains("Selected Transactions"));
    assert!(text.contains("Balance b/f"));
    assert!(text.contains("INV1"));
    assert!(text.contains("PAY1"));
    assert!(text.contains("200.00"));
}
