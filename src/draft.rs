//! Invoice draft: the editable state behind the entry form

use serde::{Deserialize, Serialize};

use crate::document::{Document, DocumentAssembler};
use crate::ledger::{Ledger, RowBook};
use crate::traits::*;
use crate::types::*;

/// Header fields plus the two editable row collections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub header: InvoiceHeader,
    pub charges: RowBook<ChargeRow>,
    pub adjustments: RowBook<AdjustmentRow>,
}

impl InvoiceDraft {
    /// Create an empty draft
    pub fn new(header: InvoiceHeader) -> Self {
        Self {
            header,
            charges: RowBook::new(),
            adjustments: RowBook::new(),
        }
    }

    /// Ledger view over the current rows
    pub fn ledger(&self) -> Ledger<'_> {
        Ledger::new(self.charges.rows(), self.adjustments.rows())
    }

    /// Totals for the rows as they are right now
    pub fn totals(&self) -> Totals {
        self.ledger().compute()
    }

    /// Assemble the printable document
    pub fn document(&self, assembler: &DocumentAssembler) -> Document {
        assembler.assemble(
            &self.header,
            self.charges.rows(),
            self.adjustments.rows(),
            &self.totals(),
        )
    }

    /// File stem the exported bill is named after
    pub fn file_stem(&self, assembler: &DocumentAssembler) -> String {
        export_file_stem(&self.header.bill_no, &assembler.config().default_file_stem)
    }

    /// Assemble the document and hand it to a sink; returns the file stem used
    pub async fn export<S: DocumentSink + ?Sized>(
        &self,
        assembler: &DocumentAssembler,
        sink: &mut S,
    ) -> InvoiceResult<String> {
        let document = self.document(assembler);
        let file_stem = self.file_stem(assembler);

        sink.render(&document, &file_stem).await.map_err(|e| {
            tracing::warn!(file_stem = %file_stem, error = %e, "export failed");
            e
        })?;

        tracing::info!(
            file_stem = %file_stem,
            rows = document.table.rows.len(),
            "invoice exported"
        );
        Ok(file_stem)
    }

    /// Draft pre-filled with a sample customs-clearing bill
    pub fn sample() -> Self {
        InvoiceDraftBuilder::new(InvoiceHeader {
            bill_no: "DLL/03/2025".to_string(),
            date: "2025-08-08".to_string(),
            recipient_name: "TRUE TRADE INTERNATIONAL LTD.".to_string(),
            address: "House 88, Janata Housing Sha Alibag; Mirpur PS; Dhaka-1216, Bangladesh"
                .to_string(),
            shipment: "1 x 40' LCL Stc: 5 Pallets of HOT STAMPING FOILS FOR TEXTILE release from Chattogram Port".to_string(),
            reference_no: "1830795".to_string(),
            reference_date: "20-09-2025".to_string(),
            bill_of_lading: "KACHT25093009".to_string(),
            assessable_value: "418,168.17".to_string(),
        })
        .charge("Documentation Charge", 100)
        .charge("B/L verify", 230)
        .charge("Association Fee (50+100)", 150)
        .charge("D/O Charge", 6325)
        .charge("Port Bill (106+1976)", 2082)
        .addition("Unstuffing/Examination + High Star + Labor Purpose", 6000)
        .addition(
            "Misc. expenses, noting assessment, labor, high-star and delivery",
            25000,
        )
        .addition("Commission", 7500)
        .deduction("Advance", 40000)
        .deduction("Reduce", 1000)
        .build()
    }
}

/// Fluent builder for drafts
#[derive(Debug)]
pub struct InvoiceDraftBuilder {
    draft: InvoiceDraft,
}

impl InvoiceDraftBuilder {
    /// Start a draft with the given header
    pub fn new(header: InvoiceHeader) -> Self {
        Self {
            draft: InvoiceDraft::new(header),
        }
    }

    /// Replace the header
    pub fn header(mut self, header: InvoiceHeader) -> Self {
        self.draft.header = header;
        self
    }

    /// Add a charge row
    pub fn charge(mut self, description: &str, amount: impl Into<Amount>) -> Self {
        self.draft.charges.append(description, amount);
        self
    }

    /// Add an addition row
    pub fn addition(mut self, label: &str, amount: impl Into<Amount>) -> Self {
        self.draft
            .adjustments
            .append(AdjustmentKind::Addition, label, amount);
        self
    }

    /// Add a deduction row
    pub fn deduction(mut self, label: &str, amount: impl Into<Amount>) -> Self {
        self.draft
            .adjustments
            .append(AdjustmentKind::Deduction, label, amount);
        self
    }

    /// Finish the draft
    pub fn build(self) -> InvoiceDraft {
        self.draft
    }
}
