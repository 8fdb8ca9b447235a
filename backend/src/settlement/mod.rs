//! Settlement Module
//!
//! Implements the per-period debt snowball settlement:
//! - Minimum payments on every open debt
//! - Freed-up minimums rolled into the extra allocation
//! - Extra allocation cascaded through open debts in stored order
//!
//! # Example
//!
//! ```rust
//! use debt_snowball_core::settlement;
//! use debt_snowball_core::Debt;
//! use rust_decimal_macros::dec;
//!
//! let mut debts = vec![Debt::new(dec!(1000.00), dec!(50.00))];
//! let paid = settlement::apply_minimum_payments(&mut debts);
//!
//! assert_eq!(paid, dec!(50.00));
//! assert_eq!(debts[0].balance(), dec!(950.00));
//! ```

pub mod snowball;

// Re-export public API
pub use snowball::{
    apply_minimum_payments, cascade_extra, first_unpaid, settle_period, CascadeResult,
    SettlementOutcome,
};
