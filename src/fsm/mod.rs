//! Wash-cycle state machine.
//!
//! ```text
//!  CHECK_DOOR ──▶ LOCKED_CHECK_FILTER ──▶ FILLING ──▶ WASHING ──▶ DRAINING ──▶ DONE
//!      │                  │                  │           │            │
//!  [door open]      [filter dirty]     [pour failed] [engine]   [drain failed]
//!      ▼                  ▼                  ▼           ▼            ▼
//!   DoorOpen          ErrorFilter        ErrorPump  ErrorProgram   ErrorPump
//! ```
//!
//! Transitions are strictly linear: no retries and no edges back.  Every
//! state except `Done` has exactly one failure outcome, so the state a
//! cycle stopped in fully determines its [`Status`].

use core::fmt;

use crate::app::result::Status;

/// Enumeration of every wash-cycle state, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WashState {
    CheckDoor = 0,
    LockedCheckFilter = 1,
    Filling = 2,
    Washing = 3,
    Draining = 4,
    Done = 5,
}

impl WashState {
    /// The state that follows this one on success.  `Done` is absorbing.
    pub const fn next(self) -> Self {
        match self {
            Self::CheckDoor => Self::LockedCheckFilter,
            Self::LockedCheckFilter => Self::Filling,
            Self::Filling => Self::Washing,
            Self::Washing => Self::Draining,
            Self::Draining | Self::Done => Self::Done,
        }
    }

    /// Outcome reported when the cycle stops in this state.
    pub const fn terminal_status(self) -> Status {
        match self {
            Self::CheckDoor => Status::DoorOpen,
            Self::LockedCheckFilter => Status::ErrorFilter,
            Self::Filling | Self::Draining => Status::ErrorPump,
            Self::Washing => Status::ErrorProgram,
            Self::Done => Status::Success,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::CheckDoor => "CheckDoor",
            Self::LockedCheckFilter => "LockedCheckFilter",
            Self::Filling => "Filling",
            Self::Washing => "Washing",
            Self::Draining => "Draining",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for WashState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
