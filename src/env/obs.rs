use serde::{Deserialize, Serialize};

use crate::components::{Bounds, PointMass};
use crate::world::WorldState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectObservation {
    pub position: [f64; 2],
    pub velocity: [f64; 2],
}

impl From<&PointMass> for ObjectObservation {
    fn from(body: &PointMass) -> Self {
        Self {
            position: [body.position.x, body.position.y],
            velocity: [body.velocity.x, body.velocity.y],
        }
    }
}

/// Position and velocity of every object, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub agent: ObjectObservation,
    pub target: ObjectObservation,
    pub hazard: ObjectObservation,
}

impl Observation {
    pub fn from_world(world: &WorldState) -> Self {
        Self {
            agent: (&world.agent).into(),
            target: (&world.target).into(),
            hazard: (&world.hazard).into(),
        }
    }

    /// Agent, target, hazard; position before velocity.
    pub fn to_array(&self) -> [[f64; 2]; 6] {
        [
            self.agent.position,
            self.agent.velocity,
            self.target.position,
            self.target.velocity,
            self.hazard.position,
            self.hazard.velocity,
        ]
    }

    /// Same layout as [`Observation::to_array`], scaled into `[-1, 1]`.
    pub fn normalized(&self, bounds: &Bounds) -> [[f64; 2]; 6] {
        let mut out = self.to_array();
        for (idx, pair) in out.iter_mut().enumerate() {
            let bound = if idx % 2 == 0 {
                bounds.location
            } else {
                bounds.velocity
            };
            pair[0] /= bound;
            pair[1] /= bound;
        }
        out
    }
}
