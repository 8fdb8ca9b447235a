//! Debt Model Tests
//!
//! Payment application, payoff detection and construction edge cases.

use debt_snowball_core::Debt;
use rust_decimal_macros::dec;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_debt_keeps_values() {
    let debt = Debt::new(dec!(1000.00), dec!(50.00));

    assert_eq!(debt.balance(), dec!(1000.00));
    assert_eq!(debt.minimum_payment(), dec!(50.00));
    assert!(!debt.is_paid_off());
}

#[test]
fn test_zero_balance_is_paid_off() {
    assert!(Debt::new(dec!(0.00), dec!(50.00)).is_paid_off());
}

#[test]
fn test_negative_balance_is_paid_off() {
    assert!(Debt::new(dec!(-100.00), dec!(50.00)).is_paid_off());
}

#[test]
fn test_negative_minimum_is_accepted() {
    let debt = Debt::new(dec!(1000.00), dec!(-25.00));

    assert_eq!(debt.balance(), dec!(1000.00));
    assert_eq!(debt.minimum_payment(), dec!(-25.00));
}

#[test]
fn test_large_amounts() {
    let debt = Debt::new(dec!(999999.99), dec!(5000.00));

    assert!(!debt.is_paid_off());
    assert_eq!(debt.balance(), dec!(999999.99));
}

// ============================================================================
// Payments
// ============================================================================

#[test]
fn test_partial_payment_reduces_balance() {
    let mut debt = Debt::new(dec!(1000.00), dec!(50.00));

    let leftover = debt.make_payment(dec!(200.00));

    assert_eq!(leftover, dec!(0.00), "Partial payment should be fully absorbed");
    assert_eq!(debt.balance(), dec!(800.00));
    assert!(!debt.is_paid_off());
}

#[test]
fn test_exact_payment_clears_debt() {
    let mut debt = Debt::new(dec!(500.00), dec!(25.00));

    let leftover = debt.make_payment(dec!(500.00));

    assert_eq!(leftover, dec!(0.00));
    assert_eq!(debt.balance(), dec!(0.00));
    assert!(debt.is_paid_off());
}

#[test]
fn test_overpayment_returns_excess() {
    let mut debt = Debt::new(dec!(300.00), dec!(25.00));

    let leftover = debt.make_payment(dec!(500.00));

    assert_eq!(leftover, dec!(200.00), "Excess should be handed back");
    assert_eq!(debt.balance(), dec!(0.00), "Balance should stop at zero");
}

#[test]
fn test_payment_on_paid_off_debt_returns_everything() {
    let mut debt = Debt::new(dec!(0.00), dec!(25.00));

    let leftover = debt.make_payment(dec!(100.00));

    assert_eq!(leftover, dec!(100.00));
    assert_eq!(debt.balance(), dec!(0.00));
}

#[test]
fn test_zero_payment_changes_nothing() {
    let mut debt = Debt::new(dec!(300.00), dec!(25.00));

    assert_eq!(debt.make_payment(dec!(0.00)), dec!(0.00));
    assert_eq!(debt.balance(), dec!(300.00));
}

#[test]
fn test_multiple_payments_accumulate() {
    let mut debt = Debt::new(dec!(1000.00), dec!(50.00));

    debt.make_payment(dec!(100.00));
    debt.make_payment(dec!(250.00));
    debt.make_payment(dec!(50.00));

    assert_eq!(debt.balance(), dec!(600.00));
}

#[test]
fn test_one_cent_balance() {
    let mut debt = Debt::new(dec!(0.01), dec!(25.00));
    assert!(!debt.is_paid_off());

    let leftover = debt.make_payment(dec!(0.02));

    assert_eq!(leftover, dec!(0.01));
    assert_eq!(debt.balance(), dec!(0.00));
    assert!(debt.is_paid_off());
}

#[test]
fn test_sub_cent_precision_is_kept() {
    let mut debt = Debt::new(dec!(100.123), dec!(25.456));

    debt.make_payment(dec!(50.789));

    assert_eq!(debt.balance(), dec!(49.334));
}
