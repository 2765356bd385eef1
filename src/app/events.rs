//! Outbound wash events.
//!
//! The [`DishWasher`](super::service::DishWasher) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them: log to console, forward to a
//! front-panel display, etc.

use crate::fsm::WashState;
use crate::program::{FillLevel, WashingProgram};

use super::result::{RunResult, Status};

/// Structured events emitted by the wash controller.
#[derive(Debug, Clone, PartialEq)]
pub enum WashEvent {
    /// A start request was accepted for processing.
    Started {
        program: WashingProgram,
        fill_level: FillLevel,
        tablets_used: bool,
    },

    /// The cycle advanced between states.
    StateChanged { from: WashState, to: WashState },

    /// The cycle stopped early in `state`.
    Aborted { state: WashState, status: Status },

    /// Final outcome; always the last event of a start request.
    Finished(RunResult),
}
