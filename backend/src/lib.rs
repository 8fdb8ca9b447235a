//! Debt Snowball Simulator - Core Engine
//!
//! Simulates paying down several debts with the snowball method: minimums
//! on everything, extra budget on the smallest balance, and every cleared
//! debt's minimum rolled into the extra budget.
//!
//! # Architecture
//!
//! - **core**: Period counting
//! - **models**: Domain types (Debt, Event)
//! - **settlement**: Per-period settlement algorithm
//! - **events**: Payoff observer seam
//! - **orchestrator**: Simulator and run loop
//! - **config**: Scenario loading and validation
//!
//! # Critical Invariants
//!
//! 1. All money values are exact decimals (`rust_decimal::Decimal`)
//! 2. Debts keep the order they were given in
//! 3. The extra allocation never decreases

// Module declarations
pub mod config;
pub mod core;
pub mod events;
pub mod models;
pub mod orchestrator;
pub mod settlement;

// Re-exports for convenience
pub use config::{ConfigError, DebtConfig, DebtOrdering, SimulationConfig, DEFAULT_MAX_PERIODS};
pub use crate::core::time::PeriodClock;
pub use events::{NoopObserver, PayoffObserver, PayoffRecorder};
pub use models::{Debt, DebtPaidOff, Event, EventLog, PayoffSource};
pub use orchestrator::{
    CompletionStatus, FinalSummary, PaymentTotals, PeriodResult, SimulationError, Simulator,
};
