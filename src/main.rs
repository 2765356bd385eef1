//! Dishwasher host simulator — Main Entry Point
//!
//! Runs one wash cycle against the simulated drivers.
//!
//! ```text
//! dishwasher-sim [--config <path.json>] [--tablets] [--filter <pct>]
//!                [--fail pour|drain|engine] [--door-open] [--verbose]
//!                <program> <fill>
//! dishwasher-sim --request <request.json> [...]
//! ```
//!
//! Exits 0 on `SUCCESS`, 2 on any other outcome, 1 on usage errors.
#![deny(unused_must_use)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};

use dishwasher::adapters::log_sink::LogEventSink;
use dishwasher::app::service::DishWasher;
use dishwasher::config::DishwasherConfig;
use dishwasher::drivers::door_latch::DoorLatch;
use dishwasher::drivers::engine::WashEngine;
use dishwasher::drivers::filter::FilterSensor;
use dishwasher::drivers::pump::{PumpDriver, PumpOp};
use dishwasher::error::{EngineError, PumpError};
use dishwasher::program::{FillLevel, ProgramConfiguration, WashingProgram};

/// Which simulated fault to arm before the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Fault {
    /// Inlet reports no water supply.
    Pour,
    /// Drain outlet is blocked.
    Drain,
    /// Circulation motor stalls.
    Engine,
}

#[derive(Debug, Parser)]
#[command(
    name = "dishwasher-sim",
    version,
    about = "Run one dishwasher wash cycle against simulated hardware"
)]
struct Cli {
    /// Controller configuration (JSON)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Wash request (JSON), instead of <PROGRAM> <FILL> and --tablets
    #[arg(long, value_name = "PATH", conflicts_with_all = ["program", "fill", "tablets"])]
    request: Option<PathBuf>,

    /// Detergent tablets are loaded
    #[arg(long)]
    tablets: bool,

    /// Remaining filter capacity reported by the sensor, in percent
    #[arg(long, value_name = "PCT", default_value_t = 100.0)]
    filter: f32,

    /// Arm a simulated hardware fault
    #[arg(long, value_enum)]
    fail: Option<Fault>,

    /// Leave the door open
    #[arg(long)]
    door_open: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,

    /// Washing program: eco, intensive, rinse or night
    #[arg(required_unless_present = "request")]
    program: Option<WashingProgram>,

    /// Fill level: half or full
    #[arg(required_unless_present = "request")]
    fill: Option<FillLevel>,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// The wash request, from `--request` or from the positional arguments.
    fn wash_request(&self) -> Result<ProgramConfiguration> {
        if let Some(path) = &self.request {
            let raw = read(path)?;
            return ProgramConfiguration::from_json(&raw)
                .map_err(|e| anyhow!("{}: {e}", path.display()));
        }

        let mut builder = ProgramConfiguration::builder().with_tablets_used(self.tablets);
        if let Some(program) = self.program {
            builder = builder.with_program(program);
        }
        if let Some(fill) = self.fill {
            builder = builder.with_fill_level(fill);
        }
        Ok(builder.build()?)
    }

    fn controller_config(&self) -> Result<DishwasherConfig> {
        let Some(path) = &self.config else {
            return Ok(DishwasherConfig::default());
        };
        let raw = read(path)?;
        DishwasherConfig::from_json(&raw).map_err(|e| anyhow!("{}: {e}", path.display()))
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn run(cli: &Cli) -> Result<bool> {
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .try_init()
        .context("logger init")?;

    let config = cli.controller_config()?;
    let request = cli.wash_request()?;

    let mut door = DoorLatch::new();
    if cli.door_open {
        door.open();
    }
    let filter = FilterSensor::with_capacity(cli.filter);
    let mut pump = PumpDriver::new();
    let mut engine = WashEngine::new();
    match cli.fail {
        Some(Fault::Pour) => pump.inject_fault(PumpOp::Pour, PumpError::NoWaterSupply),
        Some(Fault::Drain) => pump.inject_fault(PumpOp::Drain, PumpError::OutletBlocked),
        Some(Fault::Engine) => engine.inject_fault(EngineError::MotorStalled),
        None => {}
    }

    let mut washer = DishWasher::new(pump, engine, filter, door)
        .with_sink(LogEventSink::new())
        .with_config(config)?;

    let result = washer.start(&request);
    info!(
        "door locked after run: {} (engaged {} time(s))",
        washer.door().is_locked(),
        washer.door().lock_count()
    );
    println!("{result}");
    Ok(result.status().is_success())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("dishwasher-sim: {e:#}");
            ExitCode::FAILURE
        }
    }
}
