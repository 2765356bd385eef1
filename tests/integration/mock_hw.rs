//! Mock hardware ports for integration tests.
//!
//! Every mock records into one shared [`CallLog`] so tests can assert on
//! the exact cross-device call order, not just per-device counts.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use dishwasher::app::events::WashEvent;
use dishwasher::app::ports::{DirtFilter, Door, Engine, EventSink, WaterPump};
use dishwasher::app::service::DishWasher;
use dishwasher::error::{EngineError, PumpError};
use dishwasher::program::{FillLevel, ProgramConfiguration, WashingProgram};

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    Closed,
    Lock,
    Unlock,
    Capacity,
    Pour(FillLevel),
    RunProgram(WashingProgram),
    Drain,
}

#[derive(Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    fn record(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn count(&self, call: Call) -> usize {
        self.0.borrow().iter().filter(|c| **c == call).count()
    }

    pub fn pours(&self) -> usize {
        self.count_where(|c| matches!(c, Call::Pour(_)))
    }

    pub fn program_runs(&self) -> usize {
        self.count_where(|c| matches!(c, Call::RunProgram(_)))
    }

    pub fn count_where(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.0.borrow().iter().filter(|c| pred(*c)).count()
    }

    /// Only the pump and engine calls, in order.
    pub fn actuations(&self) -> Vec<Call> {
        self.0
            .borrow()
            .iter()
            .copied()
            .filter(|c| matches!(c, Call::Pour(_) | Call::RunProgram(_) | Call::Drain))
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

// ── Mocks ─────────────────────────────────────────────────────

pub struct MockDoor {
    log: CallLog,
    closed: bool,
}

impl Door for MockDoor {
    fn closed(&self) -> bool {
        self.log.record(Call::Closed);
        self.closed
    }

    fn lock(&mut self) {
        self.log.record(Call::Lock);
    }

    fn unlock(&mut self) {
        self.log.record(Call::Unlock);
    }
}

pub struct MockFilter {
    log: CallLog,
    capacity: f32,
}

impl DirtFilter for MockFilter {
    fn capacity(&self) -> f32 {
        self.log.record(Call::Capacity);
        self.capacity
    }
}

pub struct MockPump {
    log: CallLog,
    pour_fault: Option<PumpError>,
    drain_fault: Option<PumpError>,
}

impl WaterPump for MockPump {
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError> {
        self.log.record(Call::Pour(level));
        self.pour_fault.map_or(Ok(()), Err)
    }

    fn drain(&mut self) -> Result<(), PumpError> {
        self.log.record(Call::Drain);
        self.drain_fault.map_or(Ok(()), Err)
    }
}

pub struct MockEngine {
    log: CallLog,
    fault: Option<EngineError>,
}

impl Engine for MockEngine {
    fn run_program(&mut self, program: WashingProgram) -> Result<(), EngineError> {
        self.log.record(Call::RunProgram(program));
        self.fault.map_or(Ok(()), Err)
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<WashEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &WashEvent) {
        self.events.push(event.clone());
    }
}

// ── Rig builder ───────────────────────────────────────────────

pub type MockWasher = DishWasher<MockPump, MockEngine, MockFilter, MockDoor, RecordingSink>;

/// Describes the hardware behaviour for one test.  Defaults to a closed
/// door, a clean filter (60 %) and no faults.
#[derive(Debug, Clone, Copy)]
pub struct Rig {
    pub door_closed: bool,
    pub capacity: f32,
    pub pour_fault: Option<PumpError>,
    pub engine_fault: Option<EngineError>,
    pub drain_fault: Option<PumpError>,
}

impl Rig {
    pub fn new() -> Self {
        Self {
            door_closed: true,
            capacity: 60.0,
            pour_fault: None,
            engine_fault: None,
            drain_fault: None,
        }
    }

    pub fn door_open(mut self) -> Self {
        self.door_closed = false;
        self
    }

    pub fn capacity(mut self, capacity: f32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn fail_pour(mut self) -> Self {
        self.pour_fault = Some(PumpError::NoWaterSupply);
        self
    }

    pub fn fail_engine(mut self) -> Self {
        self.engine_fault = Some(EngineError::MotorStalled);
        self
    }

    pub fn fail_drain(mut self) -> Self {
        self.drain_fault = Some(PumpError::OutletBlocked);
        self
    }

    pub fn build(self) -> (MockWasher, CallLog) {
        let log = CallLog::default();
        let washer = DishWasher::new(
            MockPump {
                log: log.clone(),
                pour_fault: self.pour_fault,
                drain_fault: self.drain_fault,
            },
            MockEngine {
                log: log.clone(),
                fault: self.engine_fault,
            },
            MockFilter {
                log: log.clone(),
                capacity: self.capacity,
            },
            MockDoor {
                log: log.clone(),
                closed: self.door_closed,
            },
        )
        .with_sink(RecordingSink::default());
        (washer, log)
    }
}

impl Default for Rig {
    fn default() -> Self {
        Self::new()
    }
}

pub fn request(program: WashingProgram, tablets_used: bool, fill: FillLevel) -> ProgramConfiguration {
    ProgramConfiguration::builder()
        .with_program(program)
        .with_tablets_used(tablets_used)
        .with_fill_level(fill)
        .build()
        .expect("all fields set")
}

/// ECO, tablets, full fill.
pub fn basic_request() -> ProgramConfiguration {
    request(WashingProgram::Eco, true, FillLevel::Full)
}
