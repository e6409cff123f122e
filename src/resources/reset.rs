use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::utils::{within_bounds, ConfigError, EnvError};

/// Optional fixed starting locations supplied to `reset`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResetOptions {
    pub agent_location: Option<[f64; 2]>,
    pub target_location: Option<[f64; 2]>,
    pub hazard_location: Option<[f64; 2]>,
}

impl ResetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn agent_location(mut self, x: f64, y: f64) -> Self {
        self.agent_location = Some([x, y]);
        self
    }

    pub fn target_location(mut self, x: f64, y: f64) -> Self {
        self.target_location = Some([x, y]);
        self
    }

    pub fn hazard_location(mut self, x: f64, y: f64) -> Self {
        self.hazard_location = Some([x, y]);
        self
    }

    pub fn from_json(value: &serde_json::Value) -> Result<Self, EnvError> {
        serde_json::from_value(value.clone()).map_err(|e| ConfigError::from(e).into())
    }

    /// Reject any supplied location outside `[-bound, bound]`.
    ///
    /// Locations are never clamped here: a value out of range is a caller
    /// mistake.
    pub fn validate(&self, bound: f64) -> Result<(), EnvError> {
        let entries = [
            ("agent_location", self.agent_location),
            ("target_location", self.target_location),
            ("hazard_location", self.hazard_location),
        ];
        for (name, location) in entries {
            if let Some(value) = location {
                if !within_bounds(&Vector2::from(value), bound) {
                    return Err(EnvError::InvalidResetOption {
                        name: name.to_string(),
                        value,
                        bound,
                    });
                }
            }
        }
        Ok(())
    }
}
