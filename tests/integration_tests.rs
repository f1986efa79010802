//! Integration tests for invoice-core

use invoice_core::{
    utils::{render_text, MemorySink, TextFileSink},
    AdjustmentKind, Amount, AssemblerConfig, DocumentAssembler, DocumentSink, InvoiceDraft,
    InvoiceDraftBuilder, InvoiceError, InvoiceHeader, RowKind,
};
use bigdecimal::BigDecimal;

#[tokio::test]
async fn test_complete_invoice_workflow() {
    let mut draft = InvoiceDraft::sample();
    let assembler = DocumentAssembler::default();
    let mut sink = MemorySink::new();

    // Edit a few rows the way the form would
    let id = draft.charges.append_default();
    draft
        .charges
        .update(id, |row| {
            row.description = "Scanning Fee".to_string();
            row.amount = Amount::from("113");
        })
        .unwrap();
    let reduce = draft.adjustments.rows()[4].id;
    draft
        .adjustments
        .update(reduce, |row| row.amount = Amount::from(2000))
        .unwrap();

    let totals = draft.totals();
    assert_eq!(totals.subtotal, BigDecimal::from(9000));
    assert_eq!(totals.grand_total, BigDecimal::from(47500));
    assert_eq!(totals.balance, BigDecimal::from(7500));
    assert_eq!(totals.dues, BigDecimal::from(5500));

    let stem = draft.export(&assembler, &mut sink).await.unwrap();
    assert_eq!(stem, "invoice_DLL/03/2025");

    let rendered = sink.last().unwrap().unwrap();
    assert_eq!(rendered.file_name, "invoice_DLL/03/2025.pdf");

    let table = &rendered.document.table;
    let new_charge = table.rows_of(RowKind::Charge).last().unwrap();
    assert_eq!(new_charge.serial(), "06");
    assert_eq!(new_charge.details(), "Scanning Fee");
    assert_eq!(new_charge.amount(), "113.00");

    let addition_serials: Vec<&str> = table
        .rows_of(RowKind::Addition)
        .map(|row| row.serial())
        .collect();
    assert_eq!(addition_serials, vec!["07", "08", "09"]);

    let dues = table.rows.last().unwrap();
    assert_eq!(dues.kind, RowKind::Dues);
    assert_eq!(dues.amount(), "5500.00");
}

#[tokio::test]
async fn test_export_without_bill_number_uses_default_name() {
    let draft = InvoiceDraftBuilder::new(InvoiceHeader::default())
        .charge("Handling", 10)
        .build();
    let config = AssemblerConfig::from_json_str(r#"{ "default_file_stem": "draft" }"#).unwrap();
    let assembler = DocumentAssembler::new(config);
    let mut sink = MemorySink::new();

    let stem = draft.export(&assembler, &mut sink).await.unwrap();

    assert_eq!(stem, "invoice_draft");
    assert_eq!(sink.rendered().unwrap().len(), 1);
}

#[tokio::test]
async fn test_memory_sink_clones_share_buffer() {
    let draft = InvoiceDraft::sample();
    let assembler = DocumentAssembler::default();
    let observer = MemorySink::new();
    let mut sink: Box<dyn DocumentSink> = Box::new(observer.clone());

    draft.export(&assembler, sink.as_mut()).await.unwrap();
    draft.export(&assembler, sink.as_mut()).await.unwrap();

    assert_eq!(observer.rendered().unwrap().len(), 2);
    observer.clear().unwrap();
    assert!(observer.last().unwrap().is_none());
}

#[tokio::test]
async fn test_text_file_sink_writes_sanitized_file() {
    let dir = std::env::temp_dir().join(format!("invoice-core-test-{}", std::process::id()));
    let mut sink = TextFileSink::new(&dir);
    let draft = InvoiceDraft::sample();
    let assembler = DocumentAssembler::default();

    draft.export(&assembler, &mut sink).await.unwrap();

    let path = dir.join("invoice_DLL_03_2025.txt");
    assert_eq!(sink.written(), &[path.clone()]);
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, render_text(&draft.document(&assembler)));
    assert!(text.contains("6387.00"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_text_file_sink_reports_io_failure() {
    // A regular file where the output directory should be
    let blocker = std::env::temp_dir().join(format!("invoice-core-blocker-{}", std::process::id()));
    std::fs::write(&blocker, "not a directory").unwrap();
    let mut sink = TextFileSink::new(&blocker);

    let result = InvoiceDraft::sample()
        .export(&DocumentAssembler::default(), &mut sink)
        .await;

    assert!(matches!(result, Err(InvoiceError::Render(_))));
    assert!(sink.written().is_empty());
    std::fs::remove_file(&blocker).unwrap();
}

#[test]
fn test_ledger_and_document_disagree_on_malformed_amounts() {
    let draft = InvoiceDraftBuilder::new(InvoiceHeader::default())
        .charge("Known", 100)
        .charge("Pending", "call for quote")
        .addition("Commission", "n/a")
        .build();

    let totals = draft.totals();
    assert_eq!(totals.subtotal, BigDecimal::from(100));
    assert_eq!(totals.grand_total, BigDecimal::from(100));

    let document = draft.document(&DocumentAssembler::default());
    let amounts: Vec<&str> = document
        .table
        .rows
        .iter()
        .filter(|row| matches!(row.kind, RowKind::Charge | RowKind::Addition))
        .map(|row| row.amount())
        .collect();
    assert_eq!(amounts, vec!["100.00", "call for quote", "n/a"]);
}

#[test]
fn test_reclassified_adjustment_moves_between_sections() {
    let mut draft = InvoiceDraftBuilder::new(InvoiceHeader::default())
        .charge("Port Bill", 2000)
        .addition("Commission", 500)
        .addition("Advance", 1000)
        .build();
    let advance = draft.adjustments.rows()[1].id;

    draft
        .adjustments
        .set_kind(advance, AdjustmentKind::Deduction)
        .unwrap();

    let document = draft.document(&DocumentAssembler::default());
    let table = &document.table;
    assert_eq!(table.rows_of(RowKind::Addition).count(), 1);
    let deduction = table.rows_of(RowKind::Deduction).next().unwrap();
    assert_eq!(deduction.details(), "Advance");
    assert_eq!(
        table.rows_of(RowKind::Balance).next().unwrap().amount(),
        "1500.00"
    );
    assert_eq!(table.rows.last().unwrap().amount(), "1500.00");
}

#[test]
fn test_removed_rows_leave_no_trace() {
    let mut draft = InvoiceDraft::sample();
    let advance = draft.adjustments.rows()[3].id;
    draft.adjustments.remove(advance).unwrap();

    let totals = draft.totals();
    assert_eq!(totals.balance, BigDecimal::from(46387));
    assert_eq!(totals.dues, totals.balance);

    assert!(matches!(
        draft.adjustments.remove(advance),
        Err(InvoiceError::RowNotFound(_))
    ));
}
