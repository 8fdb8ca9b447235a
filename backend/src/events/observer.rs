//! Observer seam for debt payoffs

use crate::models::DebtPaidOff;

/// Receives a callback each time a debt is paid off during settlement
///
/// Implemented for any `FnMut(&DebtPaidOff)` closure; `NoopObserver`
/// ignores everything.
///
/// # Example
/// ```
/// use debt_snowball_core::{Debt, Simulator};
/// use rust_decimal_macros::dec;
///
/// let mut sim = Simulator::new(vec![Debt::new(dec!(50), dec!(25))], dec!(100));
/// let mut cleared = Vec::new();
/// sim.settle_one_period_with(&mut |payoff: &debt_snowball_core::DebtPaidOff| {
///     cleared.push(payoff.debt_index)
/// });
/// assert_eq!(cleared, vec![0]);
/// ```
pub trait PayoffObserver {
    /// Called once per cleared debt, after the allocation has grown
    fn on_debt_paid_off(&mut self, payoff: &DebtPaidOff);
}

/// Observer that discards notifications
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PayoffObserver for NoopObserver {
    fn on_debt_paid_off(&mut self, _payoff: &DebtPaidOff) {}
}

impl<F> PayoffObserver for F
where
    F: FnMut(&DebtPaidOff),
{
    fn on_debt_paid_off(&mut self, payoff: &DebtPaidOff) {
        self(payoff)
    }
}

/// Observer that keeps every payoff it sees
#[derive(Debug, Clone, Default)]
pub struct PayoffRecorder {
    payoffs: Vec<DebtPaidOff>,
}

impl PayoffRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All payoffs observed so far, in notification order
    pub fn payoffs(&self) -> &[DebtPaidOff] {
        &self.payoffs
    }
}

impl PayoffObserver for PayoffRecorder {
    fn on_debt_paid_off(&mut self, payoff: &DebtPaidOff) {
        self.payoffs.push(payoff.clone());
    }
}
