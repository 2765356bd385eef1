//! Wash request value types.
//!
//! [`ProgramConfiguration`] is immutable once built.  The only way to get
//! one is through [`ProgramConfigurationBuilder::build`], which refuses to
//! produce a value until program, tablet usage and fill level are all set.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// WashingProgram
// ---------------------------------------------------------------------------

/// Named wash cycle selecting engine behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WashingProgram {
    Eco,
    Intensive,
    Rinse,
    Night,
}

impl WashingProgram {
    pub const ALL: [Self; 4] = [Self::Eco, Self::Intensive, Self::Rinse, Self::Night];

    /// Nominal cycle duration reported in a successful [`RunResult`](crate::app::result::RunResult).
    pub const fn run_minutes(self) -> u32 {
        match self {
            Self::Eco => 120,
            Self::Intensive => 90,
            Self::Rinse => 20,
            Self::Night => 180,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Eco => "eco",
            Self::Intensive => "intensive",
            Self::Rinse => "rinse",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for WashingProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WashingProgram {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or(ConfigError::UnknownProgram)
    }
}

// ---------------------------------------------------------------------------
// FillLevel
// ---------------------------------------------------------------------------

/// Requested water quantity for a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillLevel {
    Half,
    Full,
}

impl FillLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Half => "half",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for FillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FillLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("half") {
            Ok(Self::Half)
        } else if s.eq_ignore_ascii_case("full") {
            Ok(Self::Full)
        } else {
            Err(ConfigError::UnknownFillLevel)
        }
    }
}

// ---------------------------------------------------------------------------
// ProgramConfiguration
// ---------------------------------------------------------------------------

/// A fully specified wash request.
///
/// Deserializing goes through the same field checks as the builder: serde
/// rejects a document with any of the three fields missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgramConfiguration {
    program: WashingProgram,
    tablets_used: bool,
    fill_level: FillLevel,
}

impl ProgramConfiguration {
    pub fn builder() -> ProgramConfigurationBuilder {
        ProgramConfigurationBuilder::default()
    }

    pub fn program(&self) -> WashingProgram {
        self.program
    }

    /// Whether detergent tablets are loaded.  Gates the filter check.
    pub fn tablets_used(&self) -> bool {
        self.tablets_used
    }

    pub fn fill_level(&self) -> FillLevel {
        self.fill_level
    }

    /// Parse a wash request from JSON, e.g.
    /// `{"program":"eco","tablets_used":true,"fill_level":"full"}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| {
            log::warn!("Rejected program configuration: {}", e);
            ConfigError::Malformed
        })
    }
}

/// Collects the three required fields of a [`ProgramConfiguration`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramConfigurationBuilder {
    program: Option<WashingProgram>,
    tablets_used: Option<bool>,
    fill_level: Option<FillLevel>,
}

impl ProgramConfigurationBuilder {
    #[must_use]
    pub fn with_program(mut self, program: WashingProgram) -> Self {
        self.program = Some(program);
        self
    }

    #[must_use]
    pub fn with_tablets_used(mut self, tablets_used: bool) -> Self {
        self.tablets_used = Some(tablets_used);
        self
    }

    #[must_use]
    pub fn with_fill_level(mut self, fill_level: FillLevel) -> Self {
        self.fill_level = Some(fill_level);
        self
    }

    /// Produce the configuration, or name the first missing field.
    pub fn build(self) -> Result<ProgramConfiguration, ConfigError> {
        Ok(ProgramConfiguration {
            program: self.program.ok_or(ConfigError::MissingField("program"))?,
            tablets_used: self
                .tablets_used
                .ok_or(ConfigError::MissingField("tablets_used"))?,
            fill_level: self
                .fill_level
                .ok_or(ConfigError::MissingField("fill_level"))?,
        })
    }
}
