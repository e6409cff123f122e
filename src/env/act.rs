use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::utils::clamp_symmetric;

/// Accelerations requested for one step, in world units.
///
/// `target` and `hazard` are only read when the matching object follows
/// [`ObjectPolicy::External`](crate::components::ObjectPolicy::External).
/// Values outside the acceleration bound are clamped by the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    pub agent: [f64; 2],
    pub target: Option<[f64; 2]>,
    pub hazard: Option<[f64; 2]>,
}

impl Action {
    pub fn new(agent: [f64; 2]) -> Self {
        Self {
            agent,
            ..Default::default()
        }
    }

    pub fn with_target(mut self, target: [f64; 2]) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_hazard(mut self, hazard: [f64; 2]) -> Self {
        self.hazard = Some(hazard);
        self
    }

    /// Build an action from policy outputs in `[-1, 1]`.
    ///
    /// Inputs are clamped to `[-1, 1]` before being scaled by
    /// `max_acceleration`. NaN inputs map to zero.
    pub fn from_normalized(normalized: Action, max_acceleration: f64) -> Self {
        let scale = |v: [f64; 2]| -> [f64; 2] {
            let scaled = clamp_symmetric(Vector2::from(v), 1.0) * max_acceleration;
            [scaled.x, scaled.y]
        };
        Self {
            agent: scale(normalized.agent),
            target: normalized.target.map(scale),
            hazard: normalized.hazard.map(scale),
        }
    }
}
