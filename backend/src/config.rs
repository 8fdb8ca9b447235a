//! Scenario configuration
//!
//! A scenario is a JSON document naming the debts, the extra allocation and
//! the run parameters:
//!
//! ```json
//! {
//!   "extra_allocation": "200.00",
//!   "debts": [
//!     { "balance": "5000.00", "minimum_payment": "150.00" },
//!     { "balance": "750.00", "minimum_payment": "25.00" }
//!   ],
//!   "max_periods": 600,
//!   "periods_per_year": 12,
//!   "ordering": "smallest_balance_first"
//! }
//! ```
//!
//! Amounts may be JSON strings or numbers. Validation lives here, not in the
//! simulator: the settlement engine accepts whatever it is given.

use crate::core::time::DEFAULT_PERIODS_PER_YEAR;
use crate::models::Debt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Safety bound on the run loop: 50 years of monthly periods
pub const DEFAULT_MAX_PERIODS: usize = 600;

/// Errors raised while loading or validating a scenario
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Scenario contains no debts")]
    NoDebts,

    #[error("Debt #{} has non-positive balance {balance}", .index + 1)]
    NonPositiveBalance { index: usize, balance: Decimal },

    #[error("Debt #{} has non-positive minimum payment {minimum_payment}", .index + 1)]
    NonPositiveMinimumPayment {
        index: usize,
        minimum_payment: Decimal,
    },

    #[error("Extra allocation must be positive, got {0}")]
    NonPositiveAllocation(Decimal),

    #[error("max_periods must be positive")]
    ZeroMaxPeriods,

    #[error("periods_per_year must be positive")]
    ZeroPeriodsPerYear,
}

/// Order in which debts are handed to the simulator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtOrdering {
    /// Snowball order: ascending balance, ties keep input order
    #[default]
    SmallestBalanceFirst,

    /// Use the order in the scenario unchanged
    AsGiven,
}

/// One debt as written in a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtConfig {
    pub balance: Decimal,
    pub minimum_payment: Decimal,
}

impl From<&DebtConfig> for Debt {
    fn from(config: &DebtConfig) -> Self {
        Debt::new(config.balance, config.minimum_payment)
    }
}

/// Complete scenario configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Discretionary budget applied on top of minimum payments each period
    pub extra_allocation: Decimal,

    /// Debts in input order
    pub debts: Vec<DebtConfig>,

    /// Run-loop safety bound
    #[serde(default = "default_max_periods")]
    pub max_periods: usize,

    /// Periods per year, used for the "years elapsed" figure
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: usize,

    #[serde(default)]
    pub ordering: DebtOrdering,
}

fn default_max_periods() -> usize {
    DEFAULT_MAX_PERIODS
}

fn default_periods_per_year() -> usize {
    DEFAULT_PERIODS_PER_YEAR
}

impl SimulationConfig {
    /// Scenario with default run parameters and snowball ordering
    pub fn new(debts: Vec<DebtConfig>, extra_allocation: Decimal) -> Self {
        Self {
            extra_allocation,
            debts,
            max_periods: DEFAULT_MAX_PERIODS,
            periods_per_year: DEFAULT_PERIODS_PER_YEAR,
            ordering: DebtOrdering::default(),
        }
    }

    /// Parse a scenario from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a scenario file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check the inputs the simulator itself does not guard against
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debts.is_empty() {
            return Err(ConfigError::NoDebts);
        }

        for (index, debt) in self.debts.iter().enumerate() {
            if debt.balance <= Decimal::ZERO {
                return Err(ConfigError::NonPositiveBalance {
                    index,
                    balance: debt.balance,
                });
            }
            if debt.minimum_payment <= Decimal::ZERO {
                return Err(ConfigError::NonPositiveMinimumPayment {
                    index,
                    minimum_payment: debt.minimum_payment,
                });
            }
        }

        if self.extra_allocation <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveAllocation(self.extra_allocation));
        }
        if self.max_periods == 0 {
            return Err(ConfigError::ZeroMaxPeriods);
        }
        if self.periods_per_year == 0 {
            return Err(ConfigError::ZeroPeriodsPerYear);
        }

        Ok(())
    }

    /// Debts in the order the simulator should see them
    pub fn ordered_debts(&self) -> Vec<Debt> {
        let mut debts: Vec<Debt> = self.debts.iter().map(Debt::from).collect();
        if self.ordering == DebtOrdering::SmallestBalanceFirst {
            // Stable: equal balances keep their input order
            debts.sort_by_key(|debt| debt.balance());
        }
        debts
    }
}
