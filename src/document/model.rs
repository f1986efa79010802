//! Renderer-neutral document model handed to a rendering sink

use serde::{Deserialize, Serialize};

/// Horizontal alignment hint for a cell or line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Role of a row within the bill table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowKind {
    Header,
    Charge,
    Total,
    Addition,
    GrandTotal,
    Deduction,
    Balance,
    Dues,
}

/// Single table cell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    pub bold: bool,
    pub alignment: Alignment,
    /// Number of columns this cell spans; 0 marks a cell covered by a span
    pub col_span: usize,
}

impl Cell {
    /// Plain left-aligned cell
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            alignment: Alignment::Left,
            col_span: 1,
        }
    }

    /// Empty cell
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Placeholder for a column swallowed by a preceding span
    pub fn covered() -> Self {
        Self {
            col_span: 0,
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn span(mut self, columns: usize) -> Self {
        self.col_span = columns;
        self
    }

    /// Whether this cell is hidden under a span
    pub fn is_covered(&self) -> bool {
        self.col_span == 0
    }
}

/// Table row; always three cells: serial, details, amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub kind: RowKind,
    pub cells: [Cell; 3],
}

impl TableRow {
    pub fn new(kind: RowKind, serial: Cell, details: Cell, amount: Cell) -> Self {
        Self {
            kind,
            cells: [serial, details, amount],
        }
    }

    pub fn serial(&self) -> &str {
        &self.cells[0].text
    }

    pub fn details(&self) -> &str {
        &self.cells[1].text
    }

    pub fn amount(&self) -> &str {
        &self.cells[2].text
    }
}

/// The bill table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Number of leading rows repeated as headers
    pub header_rows: usize,
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Rows of a given kind, in table order
    pub fn rows_of(&self, kind: RowKind) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(move |row| row.kind == kind)
    }
}

/// Recipient and bill reference block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderBlock {
    pub recipient_label: String,
    pub recipient_name: String,
    pub address_lines: Vec<String>,
    /// Right-aligned "Bill NO." line
    pub bill_line: String,
    /// Right-aligned "Date:" line
    pub date_line: String,
}

/// Line of the closing signature block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureLine {
    pub text: String,
    pub bold: bool,
}

/// Complete printable bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub header: HeaderBlock,
    pub narrative: String,
    pub table: Table,
    pub signature: Vec<SignatureLine>,
}
