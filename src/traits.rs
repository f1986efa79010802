//! Traits for handing assembled documents to an output backend

use async_trait::async_trait;

use crate::document::Document;
use crate::types::*;

/// Rendering/export backend for assembled documents
///
/// Implementations own page geometry, fonts and the output format (PDF,
/// plain text, a preview buffer, ...). The core only guarantees the row order
/// and text of the [`Document`]; it does not observe what the sink does with
/// it beyond the returned result.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Render a document; `file_stem` has no extension, the sink adds its own
    async fn render(&mut self, document: &Document, file_stem: &str) -> InvoiceResult<()>;
}

/// File stem for an exported bill: `invoice_<bill no>`, or
/// `invoice_<default_stem>` when the bill number is empty
pub fn export_file_stem(bill_no: &str, default_stem: &str) -> String {
    if bill_no.is_empty() {
        format!("invoice_{}", default_stem)
    } else {
        format!("invoice_{}", bill_no)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_stem() {
        assert_eq!(export_file_stem("DLL/03/2025", "bill"), "invoice_DLL/03/2025");
        assert_eq!(export_file_stem("", "bill"), "invoice_bill");
    }
}
