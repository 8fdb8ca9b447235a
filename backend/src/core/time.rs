//! Time management for the simulation
//!
//! The simulation operates in discrete periods (months by default).
//! Multiple periods form a year, which is only used for reporting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default number of settlement periods in one year (monthly granularity)
pub const DEFAULT_PERIODS_PER_YEAR: usize = 12;

/// Counts completed settlement periods
///
/// # Example
/// ```
/// use debt_snowball_core::PeriodClock;
///
/// let mut clock = PeriodClock::new(12);
/// assert_eq!(clock.current_period(), 0);
///
/// clock.advance_period();
/// assert_eq!(clock.current_period(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodClock {
    /// Periods elapsed since simulation start
    current_period: usize,
    /// Number of periods in one year
    periods_per_year: usize,
}

impl PeriodClock {
    /// Create a new PeriodClock
    ///
    /// # Arguments
    /// * `periods_per_year` - Number of settlement periods in one year
    ///
    /// # Panics
    /// Panics if `periods_per_year` is zero
    pub fn new(periods_per_year: usize) -> Self {
        assert!(periods_per_year > 0, "periods_per_year must be positive");
        Self {
            current_period: 0,
            periods_per_year,
        }
    }

    /// Advance time by one period
    pub fn advance_period(&mut self) {
        self.current_period += 1;
    }

    /// Get the number of periods elapsed
    pub fn current_period(&self) -> usize {
        self.current_period
    }

    /// Get the current year (0-indexed)
    ///
    /// # Example
    /// ```
    /// use debt_snowball_core::PeriodClock;
    ///
    /// let mut clock = PeriodClock::new(12);
    /// for _ in 0..12 {
    ///     clock.advance_period();
    /// }
    /// assert_eq!(clock.current_year(), 1);
    /// ```
    pub fn current_year(&self) -> usize {
        self.current_period / self.periods_per_year
    }

    /// Elapsed time in (fractional) years
    ///
    /// # Example
    /// ```
    /// use debt_snowball_core::PeriodClock;
    /// use rust_decimal::Decimal;
    ///
    /// let mut clock = PeriodClock::new(12);
    /// for _ in 0..18 {
    ///     clock.advance_period();
    /// }
    /// assert_eq!(clock.years_elapsed(), Decimal::new(15, 1));
    /// ```
    pub fn years_elapsed(&self) -> Decimal {
        Decimal::from(self.current_period) / Decimal::from(self.periods_per_year)
    }

    /// Get periods per year
    pub fn periods_per_year(&self) -> usize {
        self.periods_per_year
    }
}

impl Default for PeriodClock {
    fn default() -> Self {
        Self::new(DEFAULT_PERIODS_PER_YEAR)
    }
}
