//! Core primitives shared by the settlement engine and the run loop

pub mod time;
