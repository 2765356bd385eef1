//! Simulated hardware drivers.
//!
//! Each driver tracks its state in memory and supports fault injection,
//! so the controller can run end to end on a host without a real unit.

pub mod door_latch;
pub mod engine;
pub mod filter;
pub mod pump;
