//! Core types and data structures for invoice entry

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a charge or adjustment row
pub type RowId = u64;

/// Largest decimal exponent (in either direction) an amount may carry
///
/// Anything beyond this is treated as unparsable so that summing and
/// rescaling stay proportional to what was typed.
pub const MAX_AMOUNT_EXPONENT: u64 = 64;

/// Raw amount as supplied by the form-state holder
///
/// A field may hold a proper number or whatever text the user typed. The two
/// consumers coerce it differently: the ledger sums unparsable text as zero,
/// while the document formatter prints it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// Numeric value
    Number(BigDecimal),
    /// Unparsed text, kept exactly as entered
    Text(String),
}

impl Amount {
    /// Parse the amount into a decimal
    ///
    /// Blank text reads as zero. Any other text that is not a decimal number
    /// yields `None`. Exponent notation is accepted up to
    /// [`MAX_AMOUNT_EXPONENT`]; larger exponents also yield `None`.
    pub fn parse(&self) -> Option<BigDecimal> {
        match self {
            Amount::Number(value) => within_bounds(value).then(|| value.clone()),
            Amount::Text(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    Some(BigDecimal::from(0))
                } else {
                    parse_decimal(trimmed)
                }
            }
        }
    }

    /// Numeric value used for summation, unparsable input counts as zero
    pub fn value_or_zero(&self) -> BigDecimal {
        self.parse().unwrap_or_else(|| BigDecimal::from(0))
    }

    /// Whether the amount can be read as a number
    pub fn is_numeric(&self) -> bool {
        self.parse().is_some()
    }
}

fn parse_decimal(text: &str) -> Option<BigDecimal> {
    // Reject oversized exponents before the decimal is built
    if let Some(marker) = text.find(['e', 'E']) {
        let exponent: i64 = text[marker + 1..].parse().ok()?;
        if exponent.unsigned_abs() > MAX_AMOUNT_EXPONENT {
            return None;
        }
    }
    BigDecimal::from_str(text)
        .ok()
        .filter(within_bounds)
}

fn within_bounds(value: &BigDecimal) -> bool {
    let (_, scale) = value.as_bigint_and_exponent();
    scale.unsigned_abs() <= MAX_AMOUNT_EXPONENT
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Number(BigDecimal::from(0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(value) if within_bounds(value) => write!(f, "{}", value),
            Amount::Number(value) => {
                let (digits, scale) = value.as_bigint_and_exponent();
                write!(f, "{}e{}", digits, -i128::from(scale))
            }
            Amount::Text(raw) => f.write_str(raw),
        }
    }
}

impl From<BigDecimal> for Amount {
    fn from(value: BigDecimal) -> Self {
        Amount::Number(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount::Number(BigDecimal::from(value))
    }
}

impl From<&str> for Amount {
    fn from(raw: &str) -> Self {
        Amount::Text(raw.to_string())
    }
}

impl From<String> for Amount {
    fn from(raw: String) -> Self {
        Amount::Text(raw)
    }
}

/// Billable line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeRow {
    /// Unique identifier within its row book
    pub id: RowId,
    /// Stored serial label (e.g. "01"); when absent the document derives one
    /// from the row's position
    pub serial_label: Option<String>,
    /// Line description
    pub description: String,
    /// Charged amount
    pub amount: Amount,
}

impl ChargeRow {
    /// Create a new charge row
    pub fn new(
        id: RowId,
        serial_label: Option<String>,
        description: String,
        amount: impl Into<Amount>,
    ) -> Self {
        Self {
            id,
            serial_label,
            description,
            amount: amount.into(),
        }
    }
}

/// Bucket an adjustment row falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentKind {
    /// Added on top of the subtotal, counts towards the grand total
    Addition,
    /// Subtracted after the grand total
    Deduction,
}

impl AdjustmentKind {
    /// Interpret a form selector value; anything but "deduction" is an addition
    pub fn from_form_value(value: &str) -> Self {
        if value == "deduction" {
            AdjustmentKind::Deduction
        } else {
            AdjustmentKind::Addition
        }
    }

    /// Label given to a freshly appended row of this kind
    pub fn default_label(&self) -> &'static str {
        match self {
            AdjustmentKind::Addition => "New addition",
            AdjustmentKind::Deduction => "New deduction",
        }
    }
}

/// Fee adjustment applied after the charges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentRow {
    /// Unique identifier within its row book
    pub id: RowId,
    /// Addition or deduction
    pub kind: AdjustmentKind,
    /// Display label
    pub label: String,
    /// Adjustment amount
    pub amount: Amount,
}

impl AdjustmentRow {
    /// Create a new adjustment row
    pub fn new(id: RowId, kind: AdjustmentKind, label: String, amount: impl Into<Amount>) -> Self {
        Self {
            id,
            kind,
            label,
            amount: amount.into(),
        }
    }

    /// Create an addition row
    pub fn addition(id: RowId, label: String, amount: impl Into<Amount>) -> Self {
        Self::new(id, AdjustmentKind::Addition, label, amount)
    }

    /// Create a deduction row
    pub fn deduction(id: RowId, label: String, amount: impl Into<Amount>) -> Self {
        Self::new(id, AdjustmentKind::Deduction, label, amount)
    }
}

/// Free-form header fields, passed through to the document untouched
/// except for date reformatting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceHeader {
    pub bill_no: String,
    /// Bill date, usually `YYYY-MM-DD` from a date picker
    pub date: String,
    pub recipient_name: String,
    pub address: String,
    /// Container / goods description used in the narrative
    pub shipment: String,
    /// Bill of entry number
    pub reference_no: String,
    /// Bill of entry date
    pub reference_date: String,
    /// Bill of lading number
    pub bill_of_lading: String,
    pub assessable_value: String,
}

impl InvoiceHeader {
    /// Set the bill date from a calendar date, stored in `YYYY-MM-DD` form
    pub fn set_date(&mut self, date: chrono::NaiveDate) {
        self.date = date.format("%Y-%m-%d").to_string();
    }
}

/// Derived invoice totals; always recomputed from the rows, never stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all charge amounts
    pub subtotal: BigDecimal,
    /// Sum of all addition amounts
    pub additions_total: BigDecimal,
    /// Subtotal plus additions
    pub grand_total: BigDecimal,
    /// Grand total minus the first deduction only
    pub balance: BigDecimal,
    /// Balance minus every later deduction
    pub dues: BigDecimal,
}

/// Errors raised at the row-book, configuration and sink boundaries
#[derive(Debug, thiserror::Error)]
pub enum InvoiceError {
    #[error("Row not found: {0}")]
    RowNotFound(RowId),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type for invoice operations
pub type InvoiceResult<T> = Result<T, InvoiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_parse_number_and_text() {
        assert_eq!(Amount::from(250).parse(), Some(BigDecimal::from(250)));
        assert_eq!(Amount::from(" 12.5 ").parse(), BigDecimal::from_str("12.5").ok());
        assert_eq!(Amount::from("1e3").parse(), Some(BigDecimal::from(1000)));
        assert_eq!(Amount::from("abc").parse(), None);
    }

    #[test]
    fn test_blank_amount_reads_as_zero() {
        assert_eq!(Amount::from("").parse(), Some(BigDecimal::from(0)));
        assert_eq!(Amount::from("   ").value_or_zero(), BigDecimal::from(0));
    }

    #[test]
    fn test_unparsable_amount_sums_as_zero() {
        let amount = Amount::from("twelve");
        assert!(!amount.is_numeric());
        assert_eq!(amount.value_or_zero(), BigDecimal::from(0));
        assert_eq!(amount.to_string(), "twelve");
    }

    #[test]
    fn test_extreme_exponents_are_unparsable() {
        for raw in ["1e100000000", "1e-9223372036854775807", "2E+70", "1e-9223372036854775808"] {
            let amount = Amount::from(raw);
            assert_eq!(amount.parse(), None, "{}", raw);
            assert_eq!(amount.value_or_zero(), BigDecimal::from(0));
            assert_eq!(amount.to_string(), raw);
        }
        assert_eq!(Amount::from("5e64").parse(), BigDecimal::from_str("5e64").ok());
    }

    #[test]
    fn test_oversized_number_is_unparsable() {
        let amount = Amount::Number(BigDecimal::new(1.into(), -100_000_000));
        assert_eq!(amount.parse(), None);
        assert_eq!(amount.value_or_zero(), BigDecimal::from(0));
        assert_eq!(amount.to_string(), "1e100000000");
    }

    #[test]
    fn test_amount_deserializes_untagged() {
        let number: Amount = serde_json::from_str("250").unwrap();
        assert_eq!(number.value_or_zero(), BigDecimal::from(250));

        let text: Amount = serde_json::from_str("\"n/a\"").unwrap();
        assert_eq!(text, Amount::Text("n/a".to_string()));
    }

    #[test]
    fn test_adjustment_kind_from_form_value() {
        assert_eq!(
            AdjustmentKind::from_form_value("deduction"),
            AdjustmentKind::Deduction
        );
        assert_eq!(
            AdjustmentKind::from_form_value("addition"),
            AdjustmentKind::Addition
        );
        assert_eq!(
            AdjustmentKind::from_form_value("something else"),
            AdjustmentKind::Addition
        );
    }

    #[test]
    fn test_header_set_date() {
        let mut header = InvoiceHeader::default();
        header.set_date(chrono::NaiveDate::from_ymd_opt(2025, 8, 8).unwrap());
        assert_eq!(header.date, "2025-08-08");
    }
}
