//! Event logging for simulation history and reporting.
//!
//! This module defines the Event enum which captures the significant state
//! changes of a run:
//! - **PeriodSettled**: one settlement step completed
//! - **DebtPaidOff**: a debt reached zero and its minimum rolled into the allocation
//! - **PeriodLimitReached**: the run loop gave up at its safety bound
//!
//! # Example
//!
//! ```rust
//! use debt_snowball_core::models::{Event, EventLog, PayoffSource};
//! use rust_decimal_macros::dec;
//!
//! let mut log = EventLog::new();
//! log.log(Event::DebtPaidOff {
//!     period: 1,
//!     debt_index: 0,
//!     source: PayoffSource::ExtraAllocation,
//!     allocation_increase: dec!(25.00),
//!     new_allocation: dec!(125.00),
//! });
//!
//! assert_eq!(log.events_at_period(1).len(), 1);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which part of the settlement step cleared a debt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoffSource {
    /// The regular minimum payment covered the rest of the balance
    MinimumPayment,

    /// The extra allocation cascade finished the debt off
    ExtraAllocation,
}

/// Notification that a debt was cleared during a settlement step
///
/// Handed to observers at the moment of payoff and collected into the
/// period's result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtPaidOff {
    /// Position of the debt in the simulator's stored order
    pub debt_index: usize,

    /// Pass that cleared the debt
    pub source: PayoffSource,

    /// How much the extra allocation grew because of this payoff
    pub allocation_increase: Decimal,

    /// Extra allocation after the increase
    pub new_allocation: Decimal,
}

/// Simulation event capturing a state change.
///
/// All events include a period number for temporal ordering.
/// Events are logged in the order they occur within a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A settlement step completed
    PeriodSettled {
        period: usize,
        minimum_paid: Decimal,
        extra_applied: Decimal,
        extra_allocation: Decimal,
        remaining_balance: Decimal,
    },

    /// A debt was paid off and its minimum payment freed up
    DebtPaidOff {
        period: usize,
        debt_index: usize,
        source: PayoffSource,
        allocation_increase: Decimal,
        new_allocation: Decimal,
    },

    /// Run loop stopped at its period bound with debts still open
    PeriodLimitReached {
        period: usize,
        max_periods: usize,
        remaining_balance: Decimal,
    },
}

impl Event {
    /// Period at which the event occurred
    pub fn period(&self) -> usize {
        match self {
            Event::PeriodSettled { period, .. } => *period,
            Event::DebtPaidOff { period, .. } => *period,
            Event::PeriodLimitReached { period, .. } => *period,
        }
    }

    /// Event type name (matches the serialized `type` tag)
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::PeriodSettled { .. } => "period_settled",
            Event::DebtPaidOff { .. } => "debt_paid_off",
            Event::PeriodLimitReached { .. } => "period_limit_reached",
        }
    }

    /// Debt index, for events that concern a single debt
    pub fn debt_index(&self) -> Option<usize> {
        match self {
            Event::DebtPaidOff { debt_index, .. } => Some(*debt_index),
            _ => None,
        }
    }

    pub(crate) fn from_payoff(period: usize, payoff: &DebtPaidOff) -> Self {
        Event::DebtPaidOff {
            period,
            debt_index: payoff.debt_index,
            source: payoff.source,
            allocation_increase: payoff.allocation_increase,
            new_allocation: payoff.new_allocation,
        }
    }
}

/// Event log for storing and querying simulation events.
///
/// This is a simple wrapper around Vec<Event> with convenience methods.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events for a specific period
    pub fn events_at_period(&self, period: usize) -> Vec<&Event> {
        self.events.iter().filter(|e| e.period() == period).collect()
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get events for a specific debt
    pub fn events_for_debt(&self, debt_index: usize) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.debt_index() == Some(debt_index))
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
