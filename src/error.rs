//! Error types for the dishwasher controller.
//!
//! One typed enum per boundary: the two fallible hardware ports and
//! configuration.  All variants are `Copy` so they can be passed through
//! the wash controller and event sink without allocation.
//!
//! Pump and engine errors never leave [`DishWasher::start`]; the controller
//! translates them into a [`Status`].  They are still public so port
//! implementations can report *why* an operation failed.
//!
//! [`DishWasher::start`]: crate::app::service::DishWasher::start
//! [`Status`]: crate::app::result::Status

use core::fmt;

// ---------------------------------------------------------------------------
// Pump errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpError {
    /// Inlet valve open but no water arrived.
    NoWaterSupply,
    /// Drain outlet is clogged.
    OutletBlocked,
    /// Leak sensor tripped while pumping.
    Leak,
}

impl fmt::Display for PumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWaterSupply => write!(f, "no water supply"),
            Self::OutletBlocked => write!(f, "outlet blocked"),
            Self::Leak => write!(f, "leak detected"),
        }
    }
}

impl std::error::Error for PumpError {}

// ---------------------------------------------------------------------------
// Engine errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Circulation motor did not reach speed.
    MotorStalled,
    /// Water heater failed to reach program temperature.
    HeaterFault,
    /// Engine controller refused the program selection.
    ProgramRejected,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MotorStalled => write!(f, "motor stalled"),
            Self::HeaterFault => write!(f, "heater fault"),
            Self::ProgramRejected => write!(f, "program rejected"),
        }
    }
}

impl std::error::Error for EngineError {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Raised at construction time, never as a runtime wash outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A required builder field was not supplied.
    MissingField(&'static str),
    /// A numeric field is outside its allowed range.
    OutOfRange(&'static str),
    /// Input could not be parsed (malformed JSON, wrong types).
    Malformed,
    /// Program name did not match any [`WashingProgram`](crate::program::WashingProgram).
    UnknownProgram,
    /// Fill level name did not match any [`FillLevel`](crate::program::FillLevel).
    UnknownFillLevel,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(name) => write!(f, "missing required field `{name}`"),
            Self::OutOfRange(name) => write!(f, "`{name}` out of range"),
            Self::Malformed => write!(f, "malformed input"),
            Self::UnknownProgram => write!(f, "unknown washing program"),
            Self::UnknownFillLevel => write!(f, "unknown fill level"),
        }
    }
}

impl std::error::Error for ConfigError {}
