use serde::{Deserialize, Serialize};

use crate::components::Outcome;
use crate::utils::ConfigError;

/// Reward shaping constants.
///
/// Per step the agent receives
/// `-(time_weight + distance_weight * target_distance) * dt`, plus
/// `goal_bonus` on reaching the target or minus `hazard_penalty` on touching
/// the hazard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardWeights {
    pub time_weight: f64,
    pub distance_weight: f64,
    pub goal_bonus: f64,
    pub hazard_penalty: f64,
}

impl Default for RewardWeights {
    fn default() -> Self {
        Self {
            time_weight: 1.0,
            distance_weight: 0.0,
            goal_bonus: 1.0,
            hazard_penalty: 1.0,
        }
    }
}

impl RewardWeights {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("reward.time_weight", self.time_weight),
            ("reward.distance_weight", self.distance_weight),
            ("reward.goal_bonus", self.goal_bonus),
            ("reward.hazard_penalty", self.hazard_penalty),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::invalid(name, value, "must be finite"));
            }
        }
        Ok(())
    }

    pub fn reward(&self, outcome: Outcome, target_distance: f64, dt: f64) -> f64 {
        let shaping = -(self.time_weight + self.distance_weight * target_distance) * dt;
        match outcome {
            Outcome::Ongoing => shaping,
            Outcome::GoalReached => shaping + self.goal_bonus,
            Outcome::HazardContact => shaping - self.hazard_penalty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_time_penalty() {
        let weights = RewardWeights::default();
        let dt = 1.0 / 24.0;
        assert_relative_eq!(weights.reward(Outcome::Ongoing, 0.7, dt), -dt);
        assert_relative_eq!(weights.reward(Outcome::GoalReached, 0.0, dt), 1.0 - dt);
        assert_relative_eq!(weights.reward(Outcome::HazardContact, 0.7, dt), -1.0 - dt);
    }

    #[test]
    fn test_distance_shaping() {
        let weights = RewardWeights {
            time_weight: 0.0,
            distance_weight: 2.0,
            ..Default::default()
        };
        assert_relative_eq!(weights.reward(Outcome::Ongoing, 0.5, 0.1), -0.1);
    }

    #[test]
    fn test_rejects_non_finite() {
        let weights = RewardWeights {
            goal_bonus: f64::INFINITY,
            ..Default::default()
        };
        assert!(weights.validate().is_err());
    }
}
