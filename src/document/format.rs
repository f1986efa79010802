//! Display formatting for amounts, dates and addresses

use bigdecimal::{BigDecimal, RoundingMode, Signed};

use crate::types::Amount;

/// Format a decimal with exactly two fractional digits, rounding half up
///
/// Negative values that round to zero keep their sign (`-0.00`).
pub fn format_decimal(value: &BigDecimal) -> String {
    let rounded = value.with_scale_round(2, RoundingMode::HalfUp);
    let (cents, _) = rounded.as_bigint_and_exponent();
    let digits = format!("{:0>3}", cents.magnitude().to_string());
    let (whole, fraction) = digits.split_at(digits.len() - 2);
    let sign = if value.is_negative() { "-" } else { "" };
    format!("{}{}.{}", sign, whole, fraction)
}

/// Format an amount for display
///
/// Unlike the ledger, which sums unparsable input as zero, the document shows
/// such input exactly as it was entered.
pub fn format_money(amount: &Amount) -> String {
    match amount.parse() {
        Some(value) => format_decimal(&value),
        None => {
            tracing::trace!(raw = %amount, "amount shown verbatim");
            amount.to_string()
        }
    }
}

/// Rewrite a `YYYY-MM-DD` date as `DD-MM-YYYY`; anything else passes through
pub fn format_display_date(value: &str) -> String {
    if is_iso_date(value) {
        format!("{}-{}-{}", &value[8..10], &value[5..7], &value[0..4])
    } else {
        value.to_string()
    }
}

fn is_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Split an address into display lines at its last comma
///
/// The part before the comma keeps a trailing comma; both parts are trimmed.
/// An address without a comma stays on one line.
pub fn split_address(address: &str) -> Vec<String> {
    match address.rfind(',') {
        Some(index) => vec![
            format!("{},", address[..index].trim()),
            address[index + 1..].trim().to_string(),
        ],
        None => vec![address.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_money_two_decimals() {
        assert_eq!(format_money(&Amount::from(47387)), "47387.00");
        assert_eq!(format_money(&Amount::from("6325.5")), "6325.50");
        assert_eq!(format_money(&Amount::from("0.125")), "0.13");
        assert_eq!(format_money(&Amount::from(-1000)), "-1000.00");
    }

    #[test]
    fn test_format_money_zero_keeps_two_decimals() {
        assert_eq!(format_money(&Amount::from("0.0")), "0.00");
        assert_eq!(format_money(&Amount::from(0)), "0.00");
        assert_eq!(format_money(&Amount::from("0.004")), "0.00");
        assert_eq!(format_money(&Amount::from("1e-20")), "0.00");
        assert_eq!(format_money(&Amount::from("0.05")), "0.05");
        assert_eq!(format_money(&Amount::from("-0.5")), "-0.50");
        assert_eq!(format_money(&Amount::from("-0.001")), "-0.00");
    }

    #[test]
    fn test_format_money_extreme_exponent_is_verbatim() {
        assert_eq!(format_money(&Amount::from("1e100000000")), "1e100000000");
        assert_eq!(
            format_money(&Amount::from("1e-9223372036854775807")),
            "1e-9223372036854775807"
        );
    }

    #[test]
    fn test_format_money_keeps_unparsable_text() {
        assert_eq!(format_money(&Amount::from("TBD")), "TBD");
        assert_eq!(format_money(&Amount::from("12abc")), "12abc");
    }

    #[test]
    fn test_format_money_blank_is_zero() {
        assert_eq!(format_money(&Amount::from("")), "0.00");
    }

    #[test]
    fn test_format_decimal() {
        let value = BigDecimal::from_str("8887").unwrap();
        assert_eq!(format_decimal(&value), "8887.00");
        let value = BigDecimal::from_str("1.005").unwrap();
        assert_eq!(format_decimal(&value), "1.01");
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date("2025-08-08"), "08-08-2025");
        assert_eq!(format_display_date("20-09-2025"), "20-09-2025");
        assert_eq!(format_display_date("N/A"), "N/A");
        assert_eq!(format_display_date(""), "");
        assert_eq!(format_display_date("2025-8-08"), "2025-8-08");
        assert_eq!(format_display_date("2025-08-08 "), "2025-08-08 ");
    }

    #[test]
    fn test_split_address_at_last_comma() {
        assert_eq!(split_address("A, B, C"), vec!["A, B,", "C"]);
        assert_eq!(
            split_address("House 88, Mirpur PS; Dhaka-1216, Bangladesh"),
            vec!["House 88, Mirpur PS; Dhaka-1216,", "Bangladesh"]
        );
    }

    #[test]
    fn test_split_address_without_comma() {
        assert_eq!(split_address("Dhaka"), vec!["Dhaka"]);
        assert_eq!(split_address(""), vec![""]);
    }
}
