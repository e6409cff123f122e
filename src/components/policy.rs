use nalgebra::Vector2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::utils::ConfigError;

/// How a non-agent object chooses its acceleration each step.
///
/// Chosen once per environment, never per step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectPolicy {
    /// Driven by the matching component of the step action, zero if absent.
    #[default]
    External,
    /// Never accelerates; supplied actions are ignored.
    Stationary,
    /// Uniform random acceleration within `±scale * max_absolute_acceleration`.
    RandomWalk { scale: f64 },
}

impl ObjectPolicy {
    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        match self {
            ObjectPolicy::RandomWalk { scale } if !(*scale > 0.0 && *scale <= 1.0) => Err(
                ConfigError::invalid(name, scale, "random walk scale must lie in (0, 1]"),
            ),
            _ => Ok(()),
        }
    }

    /// Resolve the acceleration for this step.
    pub fn acceleration<R: Rng>(
        &self,
        supplied: Option<Vector2<f64>>,
        max_acceleration: f64,
        rng: &mut R,
    ) -> Vector2<f64> {
        match self {
            ObjectPolicy::External => supplied.unwrap_or_else(Vector2::zeros),
            ObjectPolicy::Stationary => Vector2::zeros(),
            ObjectPolicy::RandomWalk { scale } => {
                let limit = scale * max_acceleration;
                Vector2::new(rng.gen_range(-limit..=limit), rng.gen_range(-limit..=limit))
            }
        }
    }
}
