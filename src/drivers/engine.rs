//! Wash engine driver (simulated).
//!
//! Runs programs instantly and records the last one.  A single armed fault
//! makes every run fail until cleared.

use log::{debug, warn};

use crate::error::EngineError;
use crate::program::WashingProgram;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Completed(WashingProgram),
    Faulted(EngineError),
}

pub struct WashEngine {
    state: EngineState,
    fault: Option<EngineError>,
    runs: u32,
}

impl WashEngine {
    pub fn new() -> Self {
        Self {
            state: EngineState::Idle,
            fault: None,
            runs: 0,
        }
    }

    pub fn inject_fault(&mut self, fault: EngineError) {
        self.fault = Some(fault);
    }

    pub fn clear_fault(&mut self) {
        self.fault = None;
    }

    pub fn run(&mut self, program: WashingProgram) -> Result<(), EngineError> {
        self.runs += 1;
        if let Some(fault) = self.fault {
            warn!("ENGINE sim: {} failed: {}", program, fault);
            self.state = EngineState::Faulted(fault);
            return Err(fault);
        }
        debug!("ENGINE sim: {} complete ({} min)", program, program.run_minutes());
        self.state = EngineState::Completed(program);
        Ok(())
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Attempted runs, including failed ones.
    pub fn runs(&self) -> u32 {
        self.runs
    }
}

impl Default for WashEngine {
    fn default() -> Self {
        Self::new()
    }
}
