//! Hardware adapter — bridges the simulated drivers to the domain port traits.
//!
//! Every driver implements exactly one port, so the controller can mix a
//! simulated pump with, say, a [`GpioDoor`](super::gpio_door::GpioDoor).

use crate::app::ports::{DirtFilter, Door, Engine, WaterPump};
use crate::drivers::door_latch::DoorLatch;
use crate::drivers::engine::WashEngine;
use crate::drivers::filter::FilterSensor;
use crate::drivers::pump::PumpDriver;
use crate::error::{EngineError, PumpError};
use crate::program::{FillLevel, WashingProgram};

// ── Door ──────────────────────────────────────────────────────

impl Door for DoorLatch {
    fn closed(&self) -> bool {
        self.is_closed()
    }

    fn lock(&mut self) {
        self.engage();
    }

    fn unlock(&mut self) {
        self.release();
    }
}

// ── DirtFilter ────────────────────────────────────────────────

impl DirtFilter for FilterSensor {
    fn capacity(&self) -> f32 {
        self.read()
    }
}

// ── WaterPump ─────────────────────────────────────────────────

impl WaterPump for PumpDriver {
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError> {
        self.fill(level)
    }

    fn drain(&mut self) -> Result<(), PumpError> {
        self.empty()
    }
}

// ── Engine ────────────────────────────────────────────────────

impl Engine for WashEngine {
    fn run_program(&mut self, program: WashingProgram) -> Result<(), EngineError> {
        self.run(program)
    }
}
