//! Controller configuration parameters
//!
//! Tunable thresholds for the wash controller.  Values can be loaded from
//! a JSON document and are validated before the controller accepts them.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Core controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DishwasherConfig {
    // --- Filter ---
    /// Minimum remaining filter capacity (0-100%) required to wash with
    /// tablets.  Readings below this abort with `ErrorFilter`.
    pub min_filter_capacity_percent: f32,
}

impl Default for DishwasherConfig {
    fn default() -> Self {
        Self {
            min_filter_capacity_percent: 50.0,
        }
    }
}

impl DishwasherConfig {
    /// Reject out-of-range values instead of clamping them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pct = self.min_filter_capacity_percent;
        if !(0.0..=100.0).contains(&pct) {
            return Err(ConfigError::OutOfRange("min_filter_capacity_percent"));
        }
        Ok(())
    }

    /// Parse and validate. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            log::warn!("Rejected controller config: {}", e);
            ConfigError::Malformed
        })?;
        config.validate()?;
        Ok(config)
    }
}
