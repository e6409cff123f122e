use serde::{Deserialize, Serialize};

use crate::components::Outcome;
use crate::env::Observation;
use crate::world::WorldState;

/// Diagnostics returned alongside every observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub target_distance: f64,
    pub hazard_distance: f64,
    pub outcome: Outcome,
    /// Steps taken since the last reset
    pub step: u32,
}

impl Info {
    pub fn from_world(world: &WorldState, outcome: Outcome, step: u32) -> Self {
        Self {
            target_distance: world.agent_to_target_distance(),
            hazard_distance: world.agent_to_hazard_distance(),
            outcome,
            step,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: f64,
    pub terminated: bool,
    pub truncated: bool,
    pub info: Info,
}

impl StepResult {
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}
