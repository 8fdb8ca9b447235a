//! Debt model
//!
//! Represents a single obligation in the snowball.
//! Each debt has:
//! - Outstanding balance (exact decimal)
//! - Minimum payment due every period (exact decimal)
//!
//! A debt whose balance is zero or below counts as paid off. Balances only
//! move down, and only through `make_payment`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A debt being paid down by the simulator
///
/// # Example
/// ```
/// use debt_snowball_core::Debt;
/// use rust_decimal_macros::dec;
///
/// let mut debt = Debt::new(dec!(100.00), dec!(25.00));
/// let leftover = debt.make_payment(dec!(150.00));
///
/// assert_eq!(leftover, dec!(50.00));
/// assert!(debt.is_paid_off());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    /// Amount still owed
    balance: Decimal,

    /// Periodic obligation, folded into the extra allocation once the debt clears
    minimum_payment: Decimal,
}

impl Debt {
    /// Create a new debt
    ///
    /// No validation is performed: a non-positive balance is simply a debt
    /// that is already paid off, and a non-positive minimum never pays.
    pub fn new(balance: Decimal, minimum_payment: Decimal) -> Self {
        Self {
            balance,
            minimum_payment,
        }
    }

    /// Get the outstanding balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Get the minimum payment
    pub fn minimum_payment(&self) -> Decimal {
        self.minimum_payment
    }

    /// True once the balance has reached zero or gone below it
    pub fn is_paid_off(&self) -> bool {
        self.balance <= Decimal::ZERO
    }

    /// Amount the minimum-payment pass should pay this period
    ///
    /// `min(minimum_payment, balance)`; zero or negative means no payment is made.
    pub fn minimum_due(&self) -> Decimal {
        self.minimum_payment.min(self.balance)
    }

    /// Apply a payment and return the portion that was not needed
    ///
    /// A paid-off debt absorbs nothing and hands back the whole amount.
    /// Otherwise `min(amount, balance)` is applied and the excess returned.
    ///
    /// # Example
    /// ```
    /// use debt_snowball_core::Debt;
    /// use rust_decimal_macros::dec;
    ///
    /// let mut debt = Debt::new(dec!(1000.00), dec!(50.00));
    /// assert_eq!(debt.make_payment(dec!(300.00)), dec!(0.00));
    /// assert_eq!(debt.balance(), dec!(700.00));
    /// ```
    pub fn make_payment(&mut self, amount: Decimal) -> Decimal {
        if self.is_paid_off() {
            return amount;
        }

        let applied = amount.min(self.balance);
        self.balance -= applied;

        amount - applied
    }
}

impl From<(Decimal, Decimal)> for Debt {
    fn from((balance, minimum_payment): (Decimal, Decimal)) -> Self {
        Debt::new(balance, minimum_payment)
    }
}
