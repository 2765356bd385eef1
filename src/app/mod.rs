//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for a wash cycle: safety
//! checks, pump and engine sequencing, and outcome reporting.  All
//! interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod result;
pub mod service;
