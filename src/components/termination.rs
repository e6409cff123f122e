use serde::{Deserialize, Serialize};

/// Classification of the world after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Ongoing,
    GoalReached,
    HazardContact,
}

impl Outcome {
    /// Hazard contact wins over reaching the goal in the same tick.
    pub fn classify(target_distance: f64, hazard_distance: f64, precision: f64) -> Self {
        if hazard_distance <= precision {
            Outcome::HazardContact
        } else if target_distance <= precision {
            Outcome::GoalReached
        } else {
            Outcome::Ongoing
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}
