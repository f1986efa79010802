//! Basic invoice example: sample draft, totals, and a plain-text export

use invoice_core::utils::{render_text, TextFileSink};
use invoice_core::{format_decimal, DocumentAssembler, InvoiceDraft};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    println!("Invoice Core - Basic Invoice Example\n");

    let draft = InvoiceDraft::sample();
    let totals = draft.totals();

    println!("Payment Summary");
    println!("  Subtotal: {}", format_decimal(&totals.subtotal));
    println!("  G. Total: {}", format_decimal(&totals.grand_total));
    println!("  Balance:  {}", format_decimal(&totals.balance));
    println!("  Dues:     {}", format_decimal(&totals.dues));
    println!();

    let assembler = DocumentAssembler::default();
    print!("{}", render_text(&draft.document(&assembler)));
    println!();

    let mut sink = TextFileSink::new(std::env::temp_dir().join("invoice-core-demo"));
    draft.export(&assembler, &mut sink).await?;
    for path in sink.written() {
        println!("Written: {}", path.display());
    }

    Ok(())
}
