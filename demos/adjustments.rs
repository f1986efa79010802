//! Shows how balance and dues react to deduction edits

use invoice_core::{
    format_decimal, AdjustmentKind, Amount, DocumentAssembler, InvoiceDraftBuilder,
    InvoiceHeader, RowKind,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut draft = InvoiceDraftBuilder::new(InvoiceHeader {
        bill_no: "DLL/04/2025".to_string(),
        date: "2025-09-01".to_string(),
        recipient_name: "Example Traders".to_string(),
        address: "Agrabad, Chattogram".to_string(),
        ..InvoiceHeader::default()
    })
    .charge("D/O Charge", 6325)
    .charge("Port Bill", 2082)
    .addition("Commission", 7500)
    .build();

    let report = |label: &str, draft: &invoice_core::InvoiceDraft| {
        let totals = draft.totals();
        println!(
            "{:<28} balance {:>10}  dues {:>10}",
            label,
            format_decimal(&totals.balance),
            format_decimal(&totals.dues)
        );
    };

    report("no deductions", &draft);

    let advance = draft.adjustments.append(AdjustmentKind::Deduction, "Advance", 10000);
    report("advance 10000", &draft);

    let reduce = draft.adjustments.append_kind(AdjustmentKind::Deduction);
    draft
        .adjustments
        .update(reduce, |row| row.amount = Amount::from("500"))?;
    report("plus reduce 500", &draft);

    draft
        .adjustments
        .update(advance, |row| row.amount = Amount::from(12000))?;
    report("advance raised to 12000", &draft);

    draft.adjustments.set_kind(advance, AdjustmentKind::Addition)?;
    report("advance reclassified", &draft);

    let document = draft.document(&DocumentAssembler::default());
    println!();
    for row in &document.table.rows {
        if row.kind == RowKind::Header {
            continue;
        }
        println!("{:>4}  {:<28} {:>12}", row.serial(), row.details(), row.amount());
    }

    Ok(())
}
