//! Totals derived from the charge and adjustment rows

use bigdecimal::BigDecimal;

use crate::types::*;

/// Read-only view over the current rows that derives every total on demand
///
/// Nothing is cached: each accessor recomputes from the borrowed rows, so a
/// `Ledger` built over a settled snapshot always agrees with that snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Ledger<'a> {
    charges: &'a [ChargeRow],
    adjustments: &'a [AdjustmentRow],
}

impl<'a> Ledger<'a> {
    /// Create a ledger view over the given rows
    pub fn new(charges: &'a [ChargeRow], adjustments: &'a [AdjustmentRow]) -> Self {
        Self {
            charges,
            adjustments,
        }
    }

    /// Sum of all charge amounts, unparsable amounts count as zero
    pub fn subtotal(&self) -> BigDecimal {
        self.charges
            .iter()
            .map(|charge| charge.amount.value_or_zero())
            .sum()
    }

    /// Addition rows in their original relative order
    pub fn additions(&self) -> Vec<&'a AdjustmentRow> {
        self.bucket(AdjustmentKind::Addition)
    }

    /// Deduction rows in their original relative order
    pub fn deductions(&self) -> Vec<&'a AdjustmentRow> {
        self.bucket(AdjustmentKind::Deduction)
    }

    fn bucket(&self, kind: AdjustmentKind) -> Vec<&'a AdjustmentRow> {
        self.adjustments
            .iter()
            .filter(|row| row.kind == kind)
            .collect()
    }

    /// Sum of all addition amounts
    pub fn additions_total(&self) -> BigDecimal {
        self.additions()
            .iter()
            .map(|row| row.amount.value_or_zero())
            .sum()
    }

    /// Subtotal plus additions
    pub fn grand_total(&self) -> BigDecimal {
        self.subtotal() + self.additions_total()
    }

    /// Grand total less the first deduction; later deductions do not touch it
    pub fn balance(&self) -> BigDecimal {
        settle(self.grand_total(), &self.deductions()).0
    }

    /// Balance less every deduction after the first
    ///
    /// Equals the grand total without deductions and the balance with exactly
    /// one.
    pub fn dues(&self) -> BigDecimal {
        settle(self.grand_total(), &self.deductions()).1
    }

    /// Compute all totals at once
    pub fn compute(&self) -> Totals {
        let subtotal = self.subtotal();
        let additions_total = self.additions_total();
        let grand_total = &subtotal + &additions_total;
        let deductions = self.deductions();
        let (balance, dues) = settle(grand_total.clone(), &deductions);

        tracing::debug!(
            charges = self.charges.len(),
            adjustments = self.adjustments.len(),
            deductions = deductions.len(),
            %subtotal,
            %grand_total,
            %balance,
            %dues,
            "totals computed"
        );

        Totals {
            subtotal,
            additions_total,
            grand_total,
            balance,
            dues,
        }
    }
}

/// Apply deductions to a grand total, returning `(balance, dues)`
///
/// Only the first deduction reaches the balance; every later one is taken
/// off the balance to arrive at the dues.
fn settle(grand_total: BigDecimal, deductions: &[&AdjustmentRow]) -> (BigDecimal, BigDecimal) {
    let (first, rest) = match deductions.split_first() {
        Some((first, rest)) => (first.amount.value_or_zero(), rest),
        None => return (grand_total.clone(), grand_total),
    };
    let balance = grand_total - first;
    let dues = rest
        .iter()
        .fold(balance.clone(), |acc, row| acc - row.amount.value_or_zero());
    (balance, dues)
}

/// Compute invoice totals from the current rows
pub fn compute_totals(charges: &[ChargeRow], adjustments: &[AdjustmentRow]) -> Totals {
    Ledger::new(charges, adjustments).compute()
}
