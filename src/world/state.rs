use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::{Bounds, Outcome, PointMass, Role};

/// The three objects of one episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub agent: PointMass,
    pub target: PointMass,
    pub hazard: PointMass,
}

impl WorldState {
    /// Place all three objects at rest.
    pub fn new(agent: Vector2<f64>, target: Vector2<f64>, hazard: Vector2<f64>) -> Self {
        Self {
            agent: PointMass::at_rest(Role::Agent, agent),
            target: PointMass::at_rest(Role::Target, target),
            hazard: PointMass::at_rest(Role::Hazard, hazard),
        }
    }

    /// Advance every object by one tick. Objects do not interact.
    pub fn advance(
        &mut self,
        agent_acceleration: Vector2<f64>,
        target_acceleration: Vector2<f64>,
        hazard_acceleration: Vector2<f64>,
        dt: f64,
        bounds: &Bounds,
    ) {
        self.agent.advance(agent_acceleration, dt, bounds);
        self.target.advance(target_acceleration, dt, bounds);
        self.hazard.advance(hazard_acceleration, dt, bounds);
    }

    pub fn agent_to_target_distance(&self) -> f64 {
        self.agent.distance_to(&self.target)
    }

    pub fn agent_to_hazard_distance(&self) -> f64 {
        self.agent.distance_to(&self.hazard)
    }

    pub fn evaluate(&self, location_precision: f64) -> Outcome {
        Outcome::classify(
            self.agent_to_target_distance(),
            self.agent_to_hazard_distance(),
            location_precision,
        )
    }

    /// Objects in draw order: target, hazard, agent.
    pub fn objects(&self) -> [&PointMass; 3] {
        [&self.target, &self.hazard, &self.agent]
    }
}
