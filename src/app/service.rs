//! Wash controller — the hexagonal core.
//!
//! [`DishWasher`] owns the four hardware ports and sequences one wash per
//! [`start`](DishWasher::start) call:
//!
//! ```text
//!   Door ──▶ ┌─────────────────────────────┐ ──▶ EventSink
//! Filter ──▶ │          DishWasher          │
//!   Pump ◀── │ door · lock · filter · fill  │
//! Engine ◀── │ wash · drain · unlock        │
//!            └─────────────────────────────┘
//! ```
//!
//! No port failure escapes `start`: each one is caught at the step that
//! produced it and reported as a [`Status`](super::result::Status).  Once the door is locked, a
//! [`DoorLock`] guard keeps it locked until `start` returns.  `start`
//! takes `&mut self`, so one unit can only run one wash at a time.

use log::{debug, error, info, warn};

use crate::config::DishwasherConfig;
use crate::error::ConfigError;
use crate::fsm::WashState;
use crate::program::ProgramConfiguration;
use crate::safety::{self, DoorLock};

use super::events::WashEvent;
use super::ports::{DirtFilter, Door, Engine, EventSink, NoopSink, WaterPump};
use super::result::RunResult;

// ───────────────────────────────────────────────────────────────
// DishWasher
// ───────────────────────────────────────────────────────────────

/// Controller for one dishwasher unit.
pub struct DishWasher<P, E, F, D, S = NoopSink> {
    pump: P,
    engine: E,
    filter: F,
    door: D,
    sink: S,
    config: DishwasherConfig,
}

impl<P, E, F, D> DishWasher<P, E, F, D>
where
    P: WaterPump,
    E: Engine,
    F: DirtFilter,
    D: Door,
{
    /// Bind the hardware ports with the default configuration and no event sink.
    pub fn new(pump: P, engine: E, filter: F, door: D) -> Self {
        Self {
            pump,
            engine,
            filter,
            door,
            sink: NoopSink,
            config: DishwasherConfig::default(),
        }
    }
}

impl<P, E, F, D, S> DishWasher<P, E, F, D, S>
where
    P: WaterPump,
    E: Engine,
    F: DirtFilter,
    D: Door,
    S: EventSink,
{
    /// Replace the event sink.
    pub fn with_sink<S2: EventSink>(self, sink: S2) -> DishWasher<P, E, F, D, S2> {
        DishWasher {
            pump: self.pump,
            engine: self.engine,
            filter: self.filter,
            door: self.door,
            sink,
            config: self.config,
        }
    }

    /// Replace the configuration.  Invalid values are rejected, not clamped.
    pub fn with_config(mut self, config: DishwasherConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    // ── Wash cycle ────────────────────────────────────────────

    /// Run one wash cycle for `configuration` and report its outcome.
    pub fn start(&mut self, configuration: &ProgramConfiguration) -> RunResult {
        info!(
            "WASH start: program={} fill={} tablets={}",
            configuration.program(),
            configuration.fill_level(),
            configuration.tablets_used()
        );
        self.sink.emit(&WashEvent::Started {
            program: configuration.program(),
            fill_level: configuration.fill_level(),
            tablets_used: configuration.tablets_used(),
        });

        // Door is never locked on this path.
        if !self.door.closed() {
            warn!("WASH refused: door open");
            return self.finish(Err(WashState::CheckDoor), configuration);
        }

        let outcome = {
            let _lock = DoorLock::engage(&mut self.door);
            run_locked(
                &mut self.pump,
                &mut self.engine,
                &self.filter,
                &mut self.sink,
                &self.config,
                configuration,
            )
        };

        self.finish(outcome, configuration)
    }

    /// Build the result and emit the closing events.
    fn finish(
        &mut self,
        outcome: Result<(), WashState>,
        configuration: &ProgramConfiguration,
    ) -> RunResult {
        let result = match outcome {
            Ok(()) => RunResult::success(configuration.program()),
            Err(state) => {
                let status = state.terminal_status();
                self.sink.emit(&WashEvent::Aborted { state, status });
                RunResult::error(status)
            }
        };
        info!("WASH finished: {}", result);
        self.sink.emit(&WashEvent::Finished(result));
        result
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn config(&self) -> &DishwasherConfig {
        &self.config
    }

    pub fn door(&self) -> &D {
        &self.door
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn pump(&self) -> &P {
        &self.pump
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Hand the ports back, e.g. to move them to another controller.
    pub fn into_parts(self) -> (P, E, F, D, S) {
        (self.pump, self.engine, self.filter, self.door, self.sink)
    }
}

// ───────────────────────────────────────────────────────────────
// Locked region
// ───────────────────────────────────────────────────────────────

/// Walk the cycle from the filter check to `Done`.  The caller holds the
/// door lock for the whole call.  Returns the state the cycle stopped in
/// on failure.
fn run_locked<P, E, F, S>(
    pump: &mut P,
    engine: &mut E,
    filter: &F,
    sink: &mut S,
    config: &DishwasherConfig,
    configuration: &ProgramConfiguration,
) -> Result<(), WashState>
where
    P: WaterPump,
    E: Engine,
    F: DirtFilter,
    S: EventSink,
{
    let mut state = WashState::CheckDoor;
    advance(&mut state, sink);

    while state != WashState::Done {
        let ok = match state {
            WashState::LockedCheckFilter => {
                if configuration.tablets_used() {
                    let capacity = filter.capacity();
                    debug!("FILTER: capacity {:.1}%", capacity);
                    safety::filter_clean(capacity, config)
                } else {
                    debug!("FILTER: no tablets, check skipped");
                    true
                }
            }
            WashState::Filling => pump
                .pour(configuration.fill_level())
                .inspect_err(|e| error!("PUMP: pour failed: {}", e))
                .is_ok(),
            WashState::Washing => engine
                .run_program(configuration.program())
                .inspect_err(|e| error!("ENGINE: {} failed: {}", configuration.program(), e))
                .is_ok(),
            WashState::Draining => pump
                .drain()
                .inspect_err(|e| error!("PUMP: drain failed: {}", e))
                .is_ok(),
            WashState::CheckDoor | WashState::Done => true,
        };

        if !ok {
            return Err(state);
        }
        advance(&mut state, sink);
    }

    Ok(())
}

fn advance(state: &mut WashState, sink: &mut impl EventSink) {
    let from = *state;
    let to = from.next();
    info!("WASH transition: {} -> {}", from, to);
    sink.emit(&WashEvent::StateChanged { from, to });
    *state = to;
}
