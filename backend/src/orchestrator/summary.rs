//! End-of-run accounting
//!
//! Totals are computed the way the snowball plan is usually quoted:
//! every period is charged the full minimum of every debt plus the extra
//! allocation in effect that period. Because the allocation grows as debts
//! clear, the extra total comes from the per-period history rather than
//! `final_allocation × periods`.

use crate::models::Debt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    /// Every debt reached zero
    PaidOff,

    /// The period bound was hit with debts still open
    PeriodLimitReached,

    /// The caller asked the run to stop at a period boundary
    Stopped,
}

impl CompletionStatus {
    /// True only when the run ended debt-free
    pub fn is_complete(&self) -> bool {
        matches!(self, CompletionStatus::PaidOff)
    }
}

/// Cumulative payment figures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTotals {
    pub total_minimum_paid: Decimal,
    pub total_extra_paid: Decimal,
    pub total_paid: Decimal,
}

impl PaymentTotals {
    /// Compute totals from the debts, elapsed periods and allocation history
    ///
    /// # Example
    /// ```
    /// use debt_snowball_core::{Debt, PaymentTotals};
    /// use rust_decimal_macros::dec;
    ///
    /// let debts = vec![Debt::new(dec!(0), dec!(25)), Debt::new(dec!(0), dec!(50))];
    /// let totals = PaymentTotals::compute(&debts, 2, &[dec!(100), dec!(125)]);
    ///
    /// assert_eq!(totals.total_minimum_paid, dec!(150));
    /// assert_eq!(totals.total_extra_paid, dec!(225));
    /// assert_eq!(totals.total_paid, dec!(375));
    /// ```
    pub fn compute(debts: &[Debt], period_count: usize, allocation_history: &[Decimal]) -> Self {
        let minimum_per_period: Decimal = debts.iter().map(Debt::minimum_payment).sum();
        let total_minimum_paid = minimum_per_period * Decimal::from(period_count);
        let total_extra_paid: Decimal = allocation_history.iter().sum();

        Self {
            total_minimum_paid,
            total_extra_paid,
            total_paid: total_minimum_paid + total_extra_paid,
        }
    }
}

/// Result of a complete run, consumed by reporting front-ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalSummary {
    /// Periods elapsed
    pub periods_elapsed: usize,

    /// Periods elapsed expressed in years
    pub years_elapsed: Decimal,

    pub status: CompletionStatus,

    pub total_minimum_paid: Decimal,
    pub total_extra_paid: Decimal,
    pub total_paid: Decimal,

    /// Money actually moved onto balances (never exceeds what was owed)
    pub total_applied: Decimal,

    /// Balance still owed across all open debts
    pub remaining_balance: Decimal,

    pub initial_allocation: Decimal,
    pub final_allocation: Decimal,
}

impl FinalSummary {
    /// True when the run ended with every debt paid off
    pub fn is_debt_free(&self) -> bool {
        self.status.is_complete()
    }
}
