//! Linearizes rows and totals into the printable bill

use crate::config::AssemblerConfig;
use crate::document::format::*;
use crate::document::model::*;
use crate::types::*;

/// Builds [`Document`]s from invoice rows and their computed totals
///
/// Assembly is a pure transformation; rendering and file output belong to a
/// [`DocumentSink`](crate::traits::DocumentSink).
#[derive(Debug, Clone, Default)]
pub struct DocumentAssembler {
    config: AssemblerConfig,
}

impl DocumentAssembler {
    /// Create an assembler with the given static text
    pub fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }

    /// Static text this assembler places around the table
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Assemble the full document
    pub fn assemble(
        &self,
        header: &InvoiceHeader,
        charges: &[ChargeRow],
        adjustments: &[AdjustmentRow],
        totals: &Totals,
    ) -> Document {
        let table = self.table(charges, adjustments, totals);
        tracing::debug!(
            bill_no = %header.bill_no,
            rows = table.rows.len(),
            "document assembled"
        );

        Document {
            title: self.config.title.clone(),
            header: self.header_block(header),
            narrative: self.narrative(header),
            table,
            signature: self.signature(),
        }
    }

    fn header_block(&self, header: &InvoiceHeader) -> HeaderBlock {
        HeaderBlock {
            recipient_label: self.config.recipient_label.clone(),
            recipient_name: header.recipient_name.clone(),
            address_lines: split_address(&header.address),
            bill_line: format!("Bill NO. {}", header.bill_no),
            date_line: format!("Date: {}", format_display_date(&header.date)),
        }
    }

    fn narrative(&self, header: &InvoiceHeader) -> String {
        format!(
            "Being the amount charges against {} under B/E NO. {} Dt. {} B/L NO. {} Assessable Value {} {}",
            header.shipment,
            header.reference_no,
            format_display_date(&header.reference_date),
            header.bill_of_lading,
            self.config.currency_label,
            header.assessable_value,
        )
    }

    /// Build the table rows in print order
    pub fn table(
        &self,
        charges: &[ChargeRow],
        adjustments: &[AdjustmentRow],
        totals: &Totals,
    ) -> Table {
        let mut rows = vec![TableRow::new(
            RowKind::Header,
            Cell::new("SL.").bold().align(Alignment::Center),
            Cell::new("Details").bold(),
            Cell::new("Amount").bold().align(Alignment::Right),
        )];

        for (index, charge) in charges.iter().enumerate() {
            let serial = charge
                .serial_label
                .clone()
                .unwrap_or_else(|| serial_label(index + 1));
            rows.push(TableRow::new(
                RowKind::Charge,
                Cell::new(serial).align(Alignment::Center),
                Cell::new(charge.description.as_str()),
                Cell::new(format_money(&charge.amount)).align(Alignment::Right),
            ));
        }

        rows.push(TableRow::new(
            RowKind::Total,
            Cell::new("Total").bold().align(Alignment::Right).span(2),
            Cell::covered(),
            Cell::new(format_decimal(&totals.subtotal))
                .bold()
                .align(Alignment::Right),
        ));

        // Additions continue the charge numbering; deductions take no serial
        let additions = adjustments
            .iter()
            .filter(|row| row.kind == AdjustmentKind::Addition);
        for (offset, row) in additions.enumerate() {
            rows.push(TableRow::new(
                RowKind::Addition,
                Cell::new(serial_label(charges.len() + 1 + offset)).align(Alignment::Center),
                Cell::new(row.label.as_str()),
                Cell::new(format_money(&row.amount)).align(Alignment::Right),
            ));
        }

        rows.push(summary_row(RowKind::GrandTotal, "G. Total", &totals.grand_total, true));

        let deductions = adjustments
            .iter()
            .filter(|row| row.kind == AdjustmentKind::Deduction);
        for (index, row) in deductions.enumerate() {
            rows.push(TableRow::new(
                RowKind::Deduction,
                Cell::empty(),
                Cell::new(row.label.as_str()).align(Alignment::Right),
                Cell::new(format_money(&row.amount)).align(Alignment::Right),
            ));
            if index == 0 {
                rows.push(summary_row(RowKind::Balance, "Balance", &totals.balance, false));
            }
        }

        rows.push(summary_row(RowKind::Dues, "Dues", &totals.dues, true));

        Table {
            header_rows: 1,
            rows,
        }
    }

    fn signature(&self) -> Vec<SignatureLine> {
        std::iter::once(SignatureLine {
            text: self.config.issuer_name.clone(),
            bold: true,
        })
        .chain(self.config.issuer_lines.iter().map(|line| SignatureLine {
            text: line.clone(),
            bold: false,
        }))
        .collect()
    }
}

/// Zero-padded serial label for a 1-based position
pub fn serial_label(position: usize) -> String {
    format!("{:02}", position)
}

fn summary_row(kind: RowKind, label: &str, value: &bigdecimal::BigDecimal, bold: bool) -> TableRow {
    let mut label = Cell::new(label).align(Alignment::Right);
    let mut amount = Cell::new(format_decimal(value)).align(Alignment::Right);
    if bold {
        label = label.bold();
        amount = amount.bold();
    }
    TableRow::new(kind, Cell::empty(), label, amount)
}
