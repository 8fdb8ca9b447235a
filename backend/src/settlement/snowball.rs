//! Snowball Settlement Engine
//!
//! One call to [`settle_period`] performs a full period of payment activity:
//!
//! ```text
//! 1. Minimum pass     pay min(minimum, balance) on every open debt, in stored order
//! 2. Payoff credit    debts cleared by step 1 add their minimum to the allocation
//! 3. Cascade          pour the (grown) allocation into the first open debt,
//!                     carry leftover to the next open debt, crediting payoffs
//! ```
//!
//! Bookkeeping of history and period counters belongs to the orchestrator.
//!
//! # Critical Invariants
//!
//! - **Stored order**: debts are never re-sorted; "next" always means the
//!   first open debt by index
//! - **Credit once**: a debt's minimum is folded into the allocation at most
//!   once per step, whichever pass cleared it
//! - **Monotone allocation**: the allocation only grows
//! - **Termination**: the cascade stops when the budget is exhausted, no
//!   debt is open, or a payment is not absorbed at all

use crate::events::PayoffObserver;
use crate::models::{Debt, DebtPaidOff, PayoffSource};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Money movement produced by one settlement step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementOutcome {
    /// Paid by the minimum-payment pass
    pub minimum_paid: Decimal,

    /// Extra allocation actually absorbed by debts
    pub extra_applied: Decimal,

    /// Extra allocation left over after every open debt was cleared
    pub extra_unapplied: Decimal,

    /// Debts cleared this step, in the order they were credited
    pub payoffs: Vec<DebtPaidOff>,
}

/// Result of the extra-allocation cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeResult {
    pub applied: Decimal,
    pub unapplied: Decimal,
}

/// Index of the first debt (in stored order) that is not paid off
pub fn first_unpaid(debts: &[Debt]) -> Option<usize> {
    debts.iter().position(|debt| !debt.is_paid_off())
}

/// Pay the minimum on every open debt
///
/// Each open debt receives `min(minimum_payment, balance)` when that amount
/// is strictly positive. Debts are independent: nothing cascades here.
///
/// Returns the total amount paid.
pub fn apply_minimum_payments(debts: &mut [Debt]) -> Decimal {
    let mut total = Decimal::ZERO;

    for debt in debts.iter_mut().filter(|debt| !debt.is_paid_off()) {
        let due = debt.minimum_due();
        if due > Decimal::ZERO {
            let leftover = debt.make_payment(due);
            total += due - leftover;
        }
    }

    total
}

/// Cascade an extra budget through the open debts in stored order
///
/// `on_paid_off` is invoked with the index and the debt each time a payment
/// takes an open debt to zero.
pub fn cascade_extra<F>(debts: &mut [Debt], budget: Decimal, mut on_paid_off: F) -> CascadeResult
where
    F: FnMut(usize, &Debt),
{
    let mut remaining = budget;

    while remaining > Decimal::ZERO {
        let Some(index) = first_unpaid(debts) else {
            break;
        };

        let debt = &mut debts[index];
        let was_open = !debt.is_paid_off();
        let leftover = debt.make_payment(remaining);

        if was_open && debt.is_paid_off() {
            on_paid_off(index, &*debt);
        }

        // Nothing absorbed: another pass would select the same debt forever
        if leftover == remaining {
            break;
        }
        remaining = leftover;
    }

    CascadeResult {
        applied: budget - remaining,
        unapplied: remaining,
    }
}

/// Run one full settlement step over `debts`
///
/// `extra_allocation` is grown in place by the minimum payment of every debt
/// cleared during the step; `observer` hears about each payoff as it happens.
///
/// # Example
///
/// ```rust
/// use debt_snowball_core::settlement::settle_period;
/// use debt_snowball_core::events::NoopObserver;
/// use debt_snowball_core::Debt;
/// use rust_decimal_macros::dec;
///
/// let mut debts = vec![
///     Debt::new(dec!(50.00), dec!(25.00)),
///     Debt::new(dec!(1000.00), dec!(50.00)),
/// ];
/// let mut allocation = dec!(100.00);
///
/// let outcome = settle_period(&mut debts, &mut allocation, &mut NoopObserver);
///
/// assert_eq!(debts[0].balance(), dec!(0.00));
/// assert_eq!(debts[1].balance(), dec!(875.00));
/// assert_eq!(allocation, dec!(125.00));
/// assert_eq!(outcome.payoffs.len(), 1);
/// ```
pub fn settle_period<O>(
    debts: &mut [Debt],
    extra_allocation: &mut Decimal,
    observer: &mut O,
) -> SettlementOutcome
where
    O: PayoffObserver + ?Sized,
{
    let mut ledger = PayoffLedger::new(extra_allocation, observer);

    // STEP 1: MINIMUM PASS
    let open_before: Vec<usize> = debts
        .iter()
        .enumerate()
        .filter(|(_, debt)| !debt.is_paid_off())
        .map(|(index, _)| index)
        .collect();
    let minimum_paid = apply_minimum_payments(debts);

    // STEP 2: CREDIT DEBTS CLEARED BY MINIMUMS
    for index in open_before {
        let debt = &debts[index];
        if debt.is_paid_off() {
            ledger.credit(index, debt, PayoffSource::MinimumPayment);
        }
    }

    // STEP 3: CASCADE (budget includes step 2 growth)
    let budget = ledger.allocation();
    let cascade = cascade_extra(debts, budget, |index, debt| {
        ledger.credit(index, debt, PayoffSource::ExtraAllocation)
    });

    SettlementOutcome {
        minimum_paid,
        extra_applied: cascade.applied,
        extra_unapplied: cascade.unapplied,
        payoffs: ledger.into_payoffs(),
    }
}

/// Transient per-step record of which debts have been credited
struct PayoffLedger<'a, O: ?Sized> {
    allocation: &'a mut Decimal,
    credited: BTreeSet<usize>,
    payoffs: Vec<DebtPaidOff>,
    observer: &'a mut O,
}

impl<'a, O> PayoffLedger<'a, O>
where
    O: PayoffObserver + ?Sized,
{
    fn new(allocation: &'a mut Decimal, observer: &'a mut O) -> Self {
        Self {
            allocation,
            credited: BTreeSet::new(),
            payoffs: Vec::new(),
            observer,
        }
    }

    fn allocation(&self) -> Decimal {
        *self.allocation
    }

    fn credit(&mut self, index: usize, debt: &Debt, source: PayoffSource) {
        if !self.credited.insert(index) {
            return;
        }

        // Negative minimums never shrink the allocation
        let increase = debt.minimum_payment().max(Decimal::ZERO);
        *self.allocation += increase;

        let payoff = DebtPaidOff {
            debt_index: index,
            source,
            allocation_increase: increase,
            new_allocation: *self.allocation,
        };
        tracing::info!(
            debt_index = index,
            source = ?source,
            allocation_increase = %increase,
            new_allocation = %payoff.new_allocation,
            "debt paid off"
        );

        self.observer.on_debt_paid_off(&payoff);
        self.payoffs.push(payoff);
    }

    fn into_payoffs(self) -> Vec<DebtPaidOff> {
        self.payoffs
    }
}
