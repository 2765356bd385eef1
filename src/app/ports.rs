//! Port traits — the hexagonal boundary between the wash controller and hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ DishWasher (domain)
//! ```
//!
//! Driven adapters (door latch, filter sensor, pump, engine, event sinks)
//! implement these traits.  The [`DishWasher`](super::service::DishWasher)
//! consumes them via generics, so the controller never touches hardware
//! directly and can be driven entirely by test doubles.
//!
//! Door and filter operations are infallible at this layer; adapters that
//! can fail underneath must pick a safe reading and log the fault.  Pump and
//! engine operations return typed errors the controller maps to a
//! [`Status`](super::result::Status).

use crate::error::{EngineError, PumpError};
use crate::program::{FillLevel, WashingProgram};

// ───────────────────────────────────────────────────────────────
// Door (sensor + latch)
// ───────────────────────────────────────────────────────────────

pub trait Door {
    /// `true` when the door is shut.
    fn closed(&self) -> bool;

    /// Engage the latch.
    fn lock(&mut self);

    /// Release the latch.
    fn unlock(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Dirt filter sensor
// ───────────────────────────────────────────────────────────────

pub trait DirtFilter {
    /// Remaining filter capacity as a percentage (0–100).
    fn capacity(&self) -> f32;
}

// ───────────────────────────────────────────────────────────────
// Water pump
// ───────────────────────────────────────────────────────────────

pub trait WaterPump {
    /// Fill the tub to `level`.  Blocks until done or failed.
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError>;

    /// Empty the tub.
    fn drain(&mut self) -> Result<(), PumpError>;
}

// ───────────────────────────────────────────────────────────────
// Wash engine
// ───────────────────────────────────────────────────────────────

pub trait Engine {
    /// Run the full wash cycle for `program`.  Blocks until done or failed.
    fn run_program(&mut self, program: WashingProgram) -> Result<(), EngineError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink (domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The controller emits structured [`WashEvent`](super::events::WashEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::WashEvent);
}

/// Discards every event.  Default sink for a bare controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&mut self, _event: &super::events::WashEvent) {}
}

// Lets a caller keep ownership of its sink and lend it to the controller.
impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: &super::events::WashEvent) {
        (**self).emit(event);
    }
}
