//! Integration tests for infra_sheet

use core_kernel::Money;
use rust_decimal_macros::dec;
use std::io::Write;
use tempfile::NamedTempFile;

use infra_sheet::{ingest, IngestError};

fn sheet(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn header_at_row_three_with_duplicates_and_footer() {
    // Two preamble rows, then the header, then A=100, a duplicated B=0 row,
    // and a trailing footer. The duplicate collapses, the footer is dropped,
    // blanks coerce to zero: total 100.
    let file = sheet(
        "Acme Trading LLC,\n\
         Invoice lines,\n\
         Name,Amount\n\
         A,100\n\
         B,0\n\
         B,0\n\
         Total,100\n",
    );

    let extract = ingest(file.path()).unwrap();
    assert_eq!(extract.headers, vec!["Name", "Amount"]);
    assert_eq!(extract.rows.len(), 2);
    assert_eq!(extract.items.len(), 2);
    assert_eq!(extract.items[0].name, "A");
    assert_eq!(extract.items[0].amount, Money::new(dec!(100)));
    assert_eq!(extract.items[1].name, "B");
    assert_eq!(extract.items[1].amount, Money::zero());
    assert_eq!(extract.total, Money::new(dec!(100)));
}

#[test]
fn blank_and_textual_amounts_contribute_zero() {
    let file = sheet(
        "Name,Amount\n\
         A,12.50\n\
         B,\n\
         C,pending\n\
         footer,ignored\n",
    );

    let extract = ingest(file.path()).unwrap();
    assert_eq!(extract.total, Money::new(dec!(12.50)));
}

#[test]
fn trailing_row_is_dropped_even_when_it_is_data() {
    // The footer drop is unconditional: the last row goes even though it
    // looks like a real line item.
    let file = sheet(
        "Name,Amount\n\
         A,100\n\
         B,250\n",
    );

    let extract = ingest(file.path()).unwrap();
    assert_eq!(extract.items.len(), 1);
    assert_eq!(extract.total, Money::new(dec!(100)));
}

#[test]
fn extra_columns_survive_into_the_extract() {
    let file = sheet(
        "Sl No,Name,Qty,Amount\n\
         1,Widget,4,80\n\
         2,Gadget,1,20\n\
         ,,Total,100\n",
    );

    let extract = ingest(file.path()).unwrap();
    assert_eq!(extract.headers.len(), 4);
    assert_eq!(extract.rows[0], vec!["1", "Widget", "4", "80"]);
    assert_eq!(extract.items[1].name, "Gadget");
    assert_eq!(extract.total, Money::new(dec!(100)));
}

#[test]
fn ingestion_is_idempotent() {
    let file = sheet(
        "junk,row\n\
         Name,Amount\n\
         A,10\n\
         B,20\n\
         Total,30\n",
    );

    let first = ingest(file.path()).unwrap();
    let second = ingest(file.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_header_tokens_fail_with_header_not_found() {
    let file = sheet(
        "Description,Amount\n\
         A,10\n",
    );
    assert!(matches!(ingest(file.path()), Err(IngestError::HeaderNotFound)));
}

#[test]
fn unreadable_file_wraps_the_cause() {
    let err = ingest("/nonexistent/sheet.csv").unwrap_err();
    match err {
        IngestError::Read { path, source } => {
            assert_eq!(path.to_str().unwrap(), "/nonexistent/sheet.csv");
            assert!(!source.to_string().is_empty());
        }
        other => panic!("expected Read error, got {other:?}"),
    }
}

#[test]
fn empty_body_yields_empty_extract() {
    // Header found, no rows below it: nothing to drop, nothing to sum.
    let file = sheet("Name,Amount\n");
    let extract = ingest(file.path()).unwrap();
    assert!(extract.rows.is_empty());
    assert_eq!(extract.total, Money::zero());
}
