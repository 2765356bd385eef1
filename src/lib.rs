//! Dishwasher controller library.
//!
//! The wash controller ([`app::service::DishWasher`]) sequences door,
//! filter, pump and engine through port traits and reports a
//! [`RunResult`](app::result::RunResult).  Hardware lives behind
//! [`app::ports`]; simulated drivers and an `embedded-hal` door adapter are
//! bundled for host runs and bench testing.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod fsm;
pub mod program;
pub mod safety;
