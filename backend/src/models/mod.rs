//! Domain models for the debt snowball simulator

pub mod debt;
pub mod event;

// Re-exports
pub use debt::Debt;
pub use event::{DebtPaidOff, Event, EventLog, PayoffSource};
