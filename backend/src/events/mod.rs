//! Payoff notifications
//!
//! The settlement step reports every cleared debt to a `PayoffObserver` at
//! the moment it happens. Front-ends use this to print progress without the
//! algorithm knowing anything about output.

pub mod observer;

pub use observer::{NoopObserver, PayoffObserver, PayoffRecorder};
