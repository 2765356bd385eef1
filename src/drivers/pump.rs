//! Circulation/drain pump driver (simulated).
//!
//! Tracks tub water level in memory.  Faults can be armed per operation
//! for bench testing; an armed fault fires on every call of that kind
//! until cleared.
//!
//! ## Safety contract
//!
//! The pump must never run with the door unlocked.  Enforced by the wash
//! controller; this driver is a dumb actuator.

use log::{debug, warn};

use crate::error::PumpError;
use crate::program::FillLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpState {
    Empty,
    Filled(FillLevel),
}

/// Which pump operation an injected fault applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpOp {
    Pour,
    Drain,
}

pub struct PumpDriver {
    state: PumpState,
    pour_fault: Option<PumpError>,
    drain_fault: Option<PumpError>,
    cycles: u32,
}

impl PumpDriver {
    pub fn new() -> Self {
        Self {
            state: PumpState::Empty,
            pour_fault: None,
            drain_fault: None,
            cycles: 0,
        }
    }

    /// Make every subsequent `op` fail with `fault`.
    pub fn inject_fault(&mut self, op: PumpOp, fault: PumpError) {
        match op {
            PumpOp::Pour => self.pour_fault = Some(fault),
            PumpOp::Drain => self.drain_fault = Some(fault),
        }
    }

    pub fn clear_faults(&mut self) {
        self.pour_fault = None;
        self.drain_fault = None;
    }

    pub fn fill(&mut self, level: FillLevel) -> Result<(), PumpError> {
        if let Some(fault) = self.pour_fault {
            warn!("PUMP sim: pour fault {}", fault);
            return Err(fault);
        }
        debug!("PUMP sim: filled to {}", level);
        self.state = PumpState::Filled(level);
        Ok(())
    }

    pub fn empty(&mut self) -> Result<(), PumpError> {
        if let Some(fault) = self.drain_fault {
            warn!("PUMP sim: drain fault {}", fault);
            return Err(fault);
        }
        if let PumpState::Filled(_) = self.state {
            self.cycles += 1;
        }
        debug!("PUMP sim: drained");
        self.state = PumpState::Empty;
        Ok(())
    }

    pub fn state(&self) -> PumpState {
        self.state
    }

    pub fn has_water(&self) -> bool {
        !matches!(self.state, PumpState::Empty)
    }

    /// Completed fill-then-drain cycles.
    pub fn cycles(&self) -> u32 {
        self.cycles
    }
}

impl Default for PumpDriver {
    fn default() -> Self {
        Self::new()
    }
}
