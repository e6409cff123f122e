use serde_json::Value;

use crate::components::ObjectPolicy;
use crate::resources::{EnvConfig, RenderMode, RewardWeights};
use crate::utils::ConfigError;

/// Incrementally assembles an [`EnvConfig`]; unset fields keep their
/// defaults.
#[derive(Default, Debug, Clone)]
pub struct EnvConfigBuilder {
    render_mode: Option<RenderMode>,
    window_size: Option<u32>,
    location_precision: Option<f64>,
    max_absolute_location: Option<f64>,
    max_absolute_velocity: Option<f64>,
    max_absolute_acceleration: Option<f64>,
    show_observation_traces: Option<bool>,
    trace_capacity: Option<usize>,
    render_fps: Option<u32>,
    time_step: Option<f64>,
    max_episode_steps: Option<u32>,
    target_policy: Option<ObjectPolicy>,
    hazard_policy: Option<ObjectPolicy>,
    reward: Option<RewardWeights>,
    seed: Option<u64>,
}

impl EnvConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_mode(mut self, mode: RenderMode) -> Self {
        self.render_mode = Some(mode);
        self
    }

    pub fn window_size(mut self, size: u32) -> Self {
        self.window_size = Some(size);
        self
    }

    pub fn location_precision(mut self, precision: f64) -> Self {
        self.location_precision = Some(precision);
        self
    }

    pub fn max_absolute_location(mut self, value: f64) -> Self {
        self.max_absolute_location = Some(value);
        self
    }

    pub fn max_absolute_velocity(mut self, value: f64) -> Self {
        self.max_absolute_velocity = Some(value);
        self
    }

    pub fn max_absolute_acceleration(mut self, value: f64) -> Self {
        self.max_absolute_acceleration = Some(value);
        self
    }

    pub fn show_observation_traces(mut self, show: bool) -> Self {
        self.show_observation_traces = Some(show);
        self
    }

    pub fn trace_capacity(mut self, capacity: usize) -> Self {
        self.trace_capacity = Some(capacity);
        self
    }

    pub fn render_fps(mut self, fps: u32) -> Self {
        self.render_fps = Some(fps);
        self
    }

    pub fn time_step(mut self, dt: f64) -> Self {
        self.time_step = Some(dt);
        self
    }

    pub fn max_episode_steps(mut self, steps: u32) -> Self {
        self.max_episode_steps = Some(steps);
        self
    }

    pub fn target_policy(mut self, policy: ObjectPolicy) -> Self {
        self.target_policy = Some(policy);
        self
    }

    pub fn hazard_policy(mut self, policy: ObjectPolicy) -> Self {
        self.hazard_policy = Some(policy);
        self
    }

    pub fn reward(mut self, weights: RewardWeights) -> Self {
        self.reward = Some(weights);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Read whichever known keys are present in a JSON object.
    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let mut builder = Self::new();

        if let Some(mode) = value.get("render_mode") {
            builder.render_mode = Some(match mode {
                Value::Null => RenderMode::None,
                Value::String(s) => s.parse()?,
                other => return Err(ConfigError::InvalidRenderMode(other.to_string())),
            });
        }

        builder.window_size = get_u32(value, "window_size")?;
        builder.location_precision = get_f64(value, "location_precision")?;
        builder.max_absolute_location = get_f64(value, "max_absolute_location")?;
        builder.max_absolute_velocity = get_f64(value, "max_absolute_velocity")?;
        builder.max_absolute_acceleration = get_f64(value, "max_absolute_acceleration")?;
        builder.trace_capacity = get_u64(value, "trace_capacity")?.map(|v| v as usize);
        builder.render_fps = get_u32(value, "render_fps")?;
        builder.time_step = get_f64(value, "time_step")?;
        builder.max_episode_steps = get_u32(value, "max_episode_steps")?;
        builder.seed = get_u64(value, "seed")?;

        if let Some(show) = value.get("show_observation_traces") {
            builder.show_observation_traces = Some(show.as_bool().ok_or_else(|| {
                ConfigError::invalid("show_observation_traces", show, "expected a boolean")
            })?);
        }

        if let Some(policy) = value.get("target_policy") {
            builder.target_policy = Some(serde_json::from_value(policy.clone())?);
        }
        if let Some(policy) = value.get("hazard_policy") {
            builder.hazard_policy = Some(serde_json::from_value(policy.clone())?);
        }
        if let Some(reward) = value.get("reward") {
            builder.reward = Some(serde_json::from_value(reward.clone())?);
        }

        Ok(builder)
    }

    pub fn build(self) -> Result<EnvConfig, ConfigError> {
        let defaults = EnvConfig::default();
        let config = EnvConfig {
            render_mode: self.render_mode.unwrap_or(defaults.render_mode),
            window_size: self.window_size.unwrap_or(defaults.window_size),
            location_precision: self
                .location_precision
                .unwrap_or(defaults.location_precision),
            max_absolute_location: self
                .max_absolute_location
                .unwrap_or(defaults.max_absolute_location),
            max_absolute_velocity: self
                .max_absolute_velocity
                .unwrap_or(defaults.max_absolute_velocity),
            max_absolute_acceleration: self
                .max_absolute_acceleration
                .unwrap_or(defaults.max_absolute_acceleration),
            show_observation_traces: self
                .show_observation_traces
                .unwrap_or(defaults.show_observation_traces),
            trace_capacity: self.trace_capacity.or(defaults.trace_capacity),
            render_fps: self.render_fps.unwrap_or(defaults.render_fps),
            time_step: self.time_step.unwrap_or(defaults.time_step),
            max_episode_steps: self.max_episode_steps.or(defaults.max_episode_steps),
            target_policy: self.target_policy.unwrap_or(defaults.target_policy),
            hazard_policy: self.hazard_policy.unwrap_or(defaults.hazard_policy),
            reward: self.reward.unwrap_or(defaults.reward),
            seed: self.seed.or(defaults.seed),
        };

        config.validate()?;
        Ok(config)
    }
}

fn get_f64(value: &Value, key: &str) -> Result<Option<f64>, ConfigError> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| ConfigError::invalid(key, v, "expected a number")),
    }
}

fn get_u64(value: &Value, key: &str) -> Result<Option<u64>, ConfigError> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_u64()
            .map(Some)
            .ok_or_else(|| ConfigError::invalid(key, v, "expected a non-negative integer")),
    }
}

fn get_u32(value: &Value, key: &str) -> Result<Option<u32>, ConfigError> {
    get_u64(value, key)?
        .map(|v| u32::try_from(v).map_err(|_| ConfigError::invalid(key, v, "too large")))
        .transpose()
}
