//! Orchestrator Engine
//!
//! Owns the debts and the extra allocation for one simulation and drives the
//! period loop:
//!
//! ```text
//! While any debt is open and the period bound is not reached:
//! 1. Advance the period counter
//! 2. Settle the period (minimum pass, payoff credit, cascade)
//! 3. Record the allocation used this period
//! 4. Log events and hand the period result to the caller
//! ```
//!
//! # Example
//!
//! ```rust
//! use debt_snowball_core::{CompletionStatus, Simulator};
//! use rust_decimal_macros::dec;
//!
//! let mut sim = Simulator::from_pairs(
//!     [(dec!(50.00), dec!(25.00)), (dec!(1000.00), dec!(50.00))],
//!     dec!(100.00),
//! );
//!
//! let summary = sim.run_to_completion(600);
//! assert_eq!(summary.status, CompletionStatus::PaidOff);
//! assert!(sim.all_debts_paid_off());
//! ```

use crate::config::{ConfigError, SimulationConfig, DEFAULT_MAX_PERIODS};
use crate::core::time::PeriodClock;
use crate::events::{NoopObserver, PayoffObserver};
use crate::models::{Debt, DebtPaidOff, Event, EventLog};
use crate::orchestrator::summary::{CompletionStatus, FinalSummary, PaymentTotals};
use crate::settlement::settle_period;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;
use thiserror::Error;

// ============================================================================
// Result Types
// ============================================================================

/// Result of a single settlement step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodResult {
    /// Period counter at the time of settlement
    pub period: usize,

    /// Balance of every debt after settlement, in stored order
    pub balances: Vec<Decimal>,

    /// Debts cleared during this step
    pub payoffs: Vec<DebtPaidOff>,

    /// Extra allocation in effect after this step
    pub extra_allocation: Decimal,

    /// Paid by the minimum-payment pass
    pub minimum_paid: Decimal,

    /// Extra allocation absorbed by debts
    pub extra_applied: Decimal,

    /// Extra allocation nothing could absorb
    pub extra_unapplied: Decimal,
}

impl PeriodResult {
    /// True when no debt has a positive balance
    pub fn all_paid_off(&self) -> bool {
        self.balances.iter().all(|balance| *balance <= Decimal::ZERO)
    }

    /// Sum of the positive balances
    pub fn remaining_balance(&self) -> Decimal {
        self.balances
            .iter()
            .filter(|balance| **balance > Decimal::ZERO)
            .sum()
    }
}

/// Simulation error types
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}

// ============================================================================
// Simulator
// ============================================================================

/// Debt snowball simulator
///
/// Debts are kept in the order they were supplied; the simulator never
/// re-sorts them. Callers that want smallest-balance-first semantics must
/// order the debts before construction (see [`SimulationConfig::ordered_debts`]).
#[derive(Debug, Clone)]
pub struct Simulator {
    debts: Vec<Debt>,

    /// Current extra allocation; only ever grows
    extra_allocation: Decimal,

    /// Allocation the simulation started with
    initial_allocation: Decimal,

    clock: PeriodClock,

    /// Bound used by [`Simulator::run`]
    max_periods: usize,

    /// Allocation in effect after each settlement step
    period_allocation_history: Vec<Decimal>,

    /// Money actually applied to balances across all steps
    total_applied: Decimal,

    event_log: EventLog,
}

impl Simulator {
    /// Create a simulator over `debts` with the given starting allocation
    pub fn new(debts: Vec<Debt>, extra_allocation: Decimal) -> Self {
        Self {
            debts,
            extra_allocation,
            initial_allocation: extra_allocation,
            clock: PeriodClock::default(),
            max_periods: DEFAULT_MAX_PERIODS,
            period_allocation_history: Vec::new(),
            total_applied: Decimal::ZERO,
            event_log: EventLog::new(),
        }
    }

    /// Create a simulator from `(balance, minimum_payment)` pairs
    pub fn from_pairs<I>(pairs: I, extra_allocation: Decimal) -> Self
    where
        I: IntoIterator<Item = (Decimal, Decimal)>,
    {
        Self::new(pairs.into_iter().map(Debt::from).collect(), extra_allocation)
    }

    /// Validate a scenario, order its debts and build the simulator
    pub fn from_config(config: &SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        Ok(Self {
            clock: PeriodClock::new(config.periods_per_year),
            max_periods: config.max_periods,
            ..Self::new(config.ordered_debts(), config.extra_allocation)
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Debts in stored order
    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    pub fn debt(&self, index: usize) -> Option<&Debt> {
        self.debts.get(index)
    }

    pub fn extra_allocation(&self) -> Decimal {
        self.extra_allocation
    }

    pub fn initial_allocation(&self) -> Decimal {
        self.initial_allocation
    }

    /// Periods advanced so far
    pub fn period_count(&self) -> usize {
        self.clock.current_period()
    }

    pub fn years_elapsed(&self) -> Decimal {
        self.clock.years_elapsed()
    }

    pub fn max_periods(&self) -> usize {
        self.max_periods
    }

    /// Allocation recorded for each settled period
    pub fn period_allocation_history(&self) -> &[Decimal] {
        &self.period_allocation_history
    }

    pub fn total_applied(&self) -> Decimal {
        self.total_applied
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    pub fn all_debts_paid_off(&self) -> bool {
        self.debts.iter().all(Debt::is_paid_off)
    }

    pub fn unpaid_debt_count(&self) -> usize {
        self.debts.iter().filter(|debt| !debt.is_paid_off()).count()
    }

    /// Sum of balances of debts that are still open
    pub fn total_remaining_balance(&self) -> Decimal {
        self.debts
            .iter()
            .filter(|debt| !debt.is_paid_off())
            .map(Debt::balance)
            .sum()
    }

    /// Totals over the periods run so far
    pub fn totals(&self) -> PaymentTotals {
        PaymentTotals::compute(
            &self.debts,
            self.period_count(),
            &self.period_allocation_history,
        )
    }

    /// Summarise the simulation as it stands
    pub fn final_summary(&self, status: CompletionStatus) -> FinalSummary {
        let totals = self.totals();

        FinalSummary {
            periods_elapsed: self.period_count(),
            years_elapsed: self.years_elapsed(),
            status,
            total_minimum_paid: totals.total_minimum_paid,
            total_extra_paid: totals.total_extra_paid,
            total_paid: totals.total_paid,
            total_applied: self.total_applied,
            remaining_balance: self.total_remaining_balance(),
            initial_allocation: self.initial_allocation,
            final_allocation: self.extra_allocation,
        }
    }

    fn log_event(&mut self, event: Event) {
        self.event_log.log(event);
    }

    // ========================================================================
    // Settlement
    // ========================================================================

    /// Settle one period without advancing the period counter
    pub fn settle_one_period(&mut self) -> PeriodResult {
        self.settle_one_period_with(&mut NoopObserver)
    }

    /// Settle one period, reporting payoffs to `observer` as they happen
    ///
    /// When every debt is already paid off this only appends the unchanged
    /// allocation to the history.
    pub fn settle_one_period_with<O>(&mut self, observer: &mut O) -> PeriodResult
    where
        O: PayoffObserver + ?Sized,
    {
        let period = self.period_count();
        let _span = tracing::debug_span!("period", period).entered();

        let outcome = settle_period(&mut self.debts, &mut self.extra_allocation, observer);

        self.period_allocation_history.push(self.extra_allocation);
        self.total_applied += outcome.minimum_paid + outcome.extra_applied;

        for payoff in &outcome.payoffs {
            self.log_event(Event::from_payoff(period, payoff));
        }

        let remaining_balance = self.total_remaining_balance();
        self.log_event(Event::PeriodSettled {
            period,
            minimum_paid: outcome.minimum_paid,
            extra_applied: outcome.extra_applied,
            extra_allocation: self.extra_allocation,
            remaining_balance,
        });
        tracing::debug!(
            minimum_paid = %outcome.minimum_paid,
            extra_applied = %outcome.extra_applied,
            extra_allocation = %self.extra_allocation,
            remaining_balance = %remaining_balance,
            "period settled"
        );

        PeriodResult {
            period,
            balances: self.debts.iter().map(Debt::balance).collect(),
            payoffs: outcome.payoffs,
            extra_allocation: self.extra_allocation,
            minimum_paid: outcome.minimum_paid,
            extra_applied: outcome.extra_applied,
            extra_unapplied: outcome.extra_unapplied,
        }
    }

    /// Advance the period counter, then settle that period
    pub fn advance_period(&mut self) -> PeriodResult {
        self.advance_period_with(&mut NoopObserver)
    }

    pub fn advance_period_with<O>(&mut self, observer: &mut O) -> PeriodResult
    where
        O: PayoffObserver + ?Sized,
    {
        self.clock.advance_period();
        self.settle_one_period_with(observer)
    }

    // ========================================================================
    // Run Loop
    // ========================================================================

    /// Run until debt-free or until the configured period bound
    pub fn run(&mut self) -> FinalSummary {
        self.run_to_completion(self.max_periods)
    }

    /// Run until debt-free or until `max_periods` periods have elapsed
    pub fn run_to_completion(&mut self, max_periods: usize) -> FinalSummary {
        self.run_with(max_periods, &mut NoopObserver, |_| ControlFlow::Continue(()))
    }

    /// Run with a payoff observer and a per-period callback
    ///
    /// `on_period` sees every period result; returning `ControlFlow::Break`
    /// stops the run at that period boundary.
    pub fn run_with<O, F>(
        &mut self,
        max_periods: usize,
        observer: &mut O,
        mut on_period: F,
    ) -> FinalSummary
    where
        O: PayoffObserver + ?Sized,
        F: FnMut(&PeriodResult) -> ControlFlow<()>,
    {
        loop {
            if self.all_debts_paid_off() {
                return self.final_summary(CompletionStatus::PaidOff);
            }

            if self.period_count() >= max_periods {
                let remaining_balance = self.total_remaining_balance();
                tracing::warn!(
                    periods = self.period_count(),
                    max_periods,
                    remaining_balance = %remaining_balance,
                    "period limit reached before all debts were paid off"
                );
                self.log_event(Event::PeriodLimitReached {
                    period: self.period_count(),
                    max_periods,
                    remaining_balance,
                });
                return self.final_summary(CompletionStatus::PeriodLimitReached);
            }

            let result = self.advance_period_with(observer);

            if on_period(&result).is_break() && !self.all_debts_paid_off() {
                return self.final_summary(CompletionStatus::Stopped);
            }
        }
    }
}
