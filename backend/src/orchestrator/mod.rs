//! Orchestrator - simulation loop
//!
//! Owns the debts, advances periods and aggregates totals.
//!
//! See `engine.rs` for the simulator and `summary.rs` for end-of-run accounting.

pub mod engine;
pub mod summary;

// Re-export main types for convenience
pub use engine::{PeriodResult, SimulationError, Simulator};
pub use summary::{CompletionStatus, FinalSummary, PaymentTotals};
