//! Outcome of a wash request.

use core::fmt;

use crate::program::WashingProgram;

/// Terminal outcome code of a wash request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    /// Door was not closed at request time; the unit was never locked.
    DoorOpen,
    /// Tablets used and the dirt filter is below the capacity threshold.
    ErrorFilter,
    /// Fill or drain failed.
    ErrorPump,
    /// Wash engine failed to run the selected program.
    ErrorProgram,
}

impl Status {
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "SUCCESS",
            Self::DoorOpen => "DOOR_OPEN",
            Self::ErrorFilter => "ERROR_FILTER",
            Self::ErrorPump => "ERROR_PUMP",
            Self::ErrorProgram => "ERROR_PROGRAM",
        };
        f.write_str(s)
    }
}

/// Immutable result of one [`DishWasher::start`](super::service::DishWasher::start) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    status: Status,
    run_minutes: u32,
}

impl RunResult {
    /// A completed wash; run time comes from the program.
    pub fn success(program: WashingProgram) -> Self {
        Self {
            status: Status::Success,
            run_minutes: program.run_minutes(),
        }
    }

    /// An aborted wash.  Aborted cycles report zero run time.
    pub fn error(status: Status) -> Self {
        debug_assert!(!status.is_success(), "error() called with Success");
        Self {
            status,
            run_minutes: 0,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn run_minutes(&self) -> u32 {
        self.run_minutes
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} min)", self.status, self.run_minutes)
    }
}
