use serde::{Deserialize, Serialize};

use crate::components::{Bounds, ObjectPolicy};
use crate::resources::config::RenderMode;
use crate::resources::RewardWeights;
use crate::utils::ConfigError;

pub const DEFAULT_TIME_STEP: f64 = 1.0 / 24.0;

/// Largest accepted canvas side [px]
pub const MAX_WINDOW_SIZE: u32 = 4096;

/// Construction-time options for one environment instance.
///
/// Validated once by [`EnvConfig::validate`] when the environment is built
/// and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    pub render_mode: RenderMode,
    /// Side length of the square canvas [px]
    pub window_size: u32,
    /// Capture radius for both target and hazard
    pub location_precision: f64,
    pub max_absolute_location: f64,
    pub max_absolute_velocity: f64,
    pub max_absolute_acceleration: f64,
    pub show_observation_traces: bool,
    /// Keep at most this many past positions per object, unbounded if unset
    pub trace_capacity: Option<usize>,
    /// Frame pacing for human mode only
    pub render_fps: u32,
    /// Simulation step [s], independent of `render_fps`
    pub time_step: f64,
    pub max_episode_steps: Option<u32>,
    pub target_policy: ObjectPolicy,
    pub hazard_policy: ObjectPolicy,
    pub reward: RewardWeights,
    /// Seed used until `reset` is given one explicitly
    pub seed: Option<u64>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            render_mode: RenderMode::None,
            window_size: 500,
            location_precision: 0.01,
            max_absolute_location: 1.0,
            max_absolute_velocity: 1.0,
            max_absolute_acceleration: 1.0,
            show_observation_traces: false,
            trace_capacity: None,
            render_fps: 24,
            time_step: DEFAULT_TIME_STEP,
            max_episode_steps: None,
            target_policy: ObjectPolicy::External,
            hazard_policy: ObjectPolicy::External,
            reward: RewardWeights::default(),
            seed: None,
        }
    }
}

impl EnvConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: EnvConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: EnvConfig = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size == 0 || self.window_size > MAX_WINDOW_SIZE {
            return Err(ConfigError::invalid(
                "window_size",
                self.window_size,
                "must lie in [1, 4096]",
            ));
        }
        if self.render_fps == 0 {
            return Err(ConfigError::invalid(
                "render_fps",
                self.render_fps,
                "must be positive",
            ));
        }

        let positive = [
            ("location_precision", self.location_precision),
            ("max_absolute_location", self.max_absolute_location),
            ("max_absolute_velocity", self.max_absolute_velocity),
            ("max_absolute_acceleration", self.max_absolute_acceleration),
            ("time_step", self.time_step),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(
                    name,
                    value,
                    "must be a positive finite number",
                ));
            }
        }

        if self.trace_capacity == Some(0) {
            return Err(ConfigError::invalid(
                "trace_capacity",
                0,
                "must be positive when set",
            ));
        }
        if self.max_episode_steps == Some(0) {
            return Err(ConfigError::invalid(
                "max_episode_steps",
                0,
                "must be positive when set",
            ));
        }

        self.target_policy.validate("target_policy")?;
        self.hazard_policy.validate("hazard_policy")?;
        self.reward.validate()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            location: self.max_absolute_location,
            velocity: self.max_absolute_velocity,
            acceleration: self.max_absolute_acceleration,
        }
    }

    /// Simulation time step [s]
    pub fn dt(&self) -> f64 {
        self.time_step
    }
}
