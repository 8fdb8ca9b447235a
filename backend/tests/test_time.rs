//! Tests for PeriodClock

use debt_snowball_core::PeriodClock;
use rust_decimal_macros::dec;

#[test]
fn test_period_clock_new() {
    let clock = PeriodClock::new(12);
    assert_eq!(clock.current_period(), 0);
    assert_eq!(clock.current_year(), 0);
    assert_eq!(clock.years_elapsed(), dec!(0));
}

#[test]
fn test_advance_period() {
    let mut clock = PeriodClock::new(12);

    clock.advance_period();
    assert_eq!(clock.current_period(), 1);
    assert_eq!(clock.current_year(), 0);

    clock.advance_period();
    assert_eq!(clock.current_period(), 2);
}

#[test]
fn test_year_boundary() {
    let mut clock = PeriodClock::new(12);

    for _ in 0..11 {
        clock.advance_period();
    }
    assert_eq!(clock.current_year(), 0);

    clock.advance_period();
    assert_eq!(clock.current_period(), 12);
    assert_eq!(clock.current_year(), 1);
    assert_eq!(clock.years_elapsed(), dec!(1));
}

#[test]
fn test_fifty_years_of_months() {
    let mut clock = PeriodClock::default();

    for _ in 0..600 {
        clock.advance_period();
    }

    assert_eq!(clock.current_year(), 50);
    assert_eq!(clock.years_elapsed(), dec!(50));
}

#[test]
fn test_weekly_periods() {
    let mut clock = PeriodClock::new(52);

    for _ in 0..26 {
        clock.advance_period();
    }

    assert_eq!(clock.years_elapsed(), dec!(0.5));
    assert_eq!(clock.periods_per_year(), 52);
}
