//! Human-readable report
//!
//! Everything printed during a run goes through `Report`. Amounts are rounded
//! to cents here and nowhere else.

use debt_snowball_core::{CompletionStatus, Debt, DebtPaidOff, FinalSummary, PeriodResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::{self, Write};

/// Format an amount as dollars and cents
pub fn money(amount: Decimal) -> String {
    let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", cents)
}

/// Console report for one simulation
pub struct Report<W: Write> {
    out: W,
    /// Minimum payment of each debt, in simulator order
    minimums: Vec<Decimal>,
    period_label: &'static str,
}

impl<W: Write> Report<W> {
    pub fn new(out: W, debts: &[Debt], periods_per_year: usize) -> Self {
        Self {
            out,
            minimums: debts.iter().map(Debt::minimum_payment).collect(),
            period_label: if periods_per_year == 12 { "Month" } else { "Period" },
        }
    }

    pub fn header(&mut self, allocation: Decimal) -> io::Result<()> {
        writeln!(self.out, "\n=== Debt Snowball Simulation ===\n")?;
        writeln!(
            self.out,
            "Starting debt snowball with {} extra monthly allocation (on top of minimum payments).\n",
            money(allocation)
        )
    }

    pub fn initial_balances(&mut self, debts: &[Debt]) -> io::Result<()> {
        writeln!(self.out, "Initial debt balances:")?;
        for (index, debt) in debts.iter().enumerate() {
            if debt.is_paid_off() {
                writeln!(self.out, "Debt #{}: PAID OFF", index + 1)?;
            } else {
                writeln!(self.out, "Debt #{}: Balance: {}", index + 1, money(debt.balance()))?;
            }
        }
        writeln!(self.out)
    }

    pub fn payoff(&mut self, payoff: &DebtPaidOff) -> io::Result<()> {
        writeln!(
            self.out,
            "Debt paid off! Monthly allocation increased by {} to {}",
            money(payoff.allocation_increase),
            money(payoff.new_allocation)
        )
    }

    /// Payoff lines followed by the period summary
    pub fn period(&mut self, result: &PeriodResult) -> io::Result<()> {
        for payoff in &result.payoffs {
            self.payoff(payoff)?;
        }
        self.period_summary(result)
    }

    pub fn period_summary(&mut self, result: &PeriodResult) -> io::Result<()> {
        writeln!(self.out, "=== {} {} ===", self.period_label, result.period)?;

        if result.all_paid_off() {
            return writeln!(self.out, "ALL DEBTS PAID OFF!");
        }

        let open: Vec<(Decimal, Decimal)> = result
            .balances
            .iter()
            .zip(&self.minimums)
            .filter(|(balance, _)| **balance > Decimal::ZERO)
            .map(|(balance, minimum)| (*balance, *minimum))
            .collect();

        writeln!(self.out, "Remaining debts: {}", open.len())?;
        writeln!(
            self.out,
            "Total remaining balance: {}",
            money(result.remaining_balance())
        )?;
        for (balance, minimum) in open {
            writeln!(
                self.out,
                "  - Balance: {}, Min Payment: {}",
                money(balance),
                money(minimum)
            )?;
        }
        writeln!(self.out)
    }

    pub fn final_summary(&mut self, summary: &FinalSummary) -> io::Result<()> {
        match summary.status {
            CompletionStatus::PeriodLimitReached => writeln!(
                self.out,
                "Simulation stopped after {} periods to prevent an infinite loop.",
                summary.periods_elapsed
            )?,
            CompletionStatus::Stopped => writeln!(
                self.out,
                "Simulation stopped after {} periods.",
                summary.periods_elapsed
            )?,
            CompletionStatus::PaidOff => {}
        }

        writeln!(self.out, "\n=== FINAL SUMMARY ===")?;
        let label = if summary.is_debt_free() {
            "Total months to pay off all debts"
        } else {
            "Total months simulated"
        };
        writeln!(self.out, "{}: {}", label, summary.periods_elapsed)?;
        writeln!(self.out, "Total years: {:.1}", summary.years_elapsed.round_dp(1))?;
        writeln!(self.out, "Total minimum payments: {}", money(summary.total_minimum_paid))?;
        writeln!(self.out, "Total extra payments: {}", money(summary.total_extra_paid))?;
        writeln!(self.out, "Total amount paid: {}", money(summary.total_paid))?;
        writeln!(
            self.out,
            "Final monthly allocation: {} (started at {})",
            money(summary.final_allocation),
            money(summary.initial_allocation)
        )?;

        if summary.is_debt_free() {
            writeln!(self.out, "\nCongratulations! You're debt-free!")
        } else {
            writeln!(
                self.out,
                "\nRemaining balance: {}",
                money(summary.remaining_balance)
            )
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
