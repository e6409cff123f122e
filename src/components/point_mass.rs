use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::utils::clamp_symmetric;

/// Identity of an object in the world. Fixes its colour and marker size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Agent,
    Target,
    Hazard,
}

impl Role {
    /// RGB colour used for markers and traces.
    pub fn color(&self) -> [u8; 3] {
        match self {
            Role::Agent => [0, 0, 0],
            Role::Target => [50, 150, 50],
            Role::Hazard => [150, 50, 50],
        }
    }

    /// Marker radius in pixels.
    pub fn marker_radius(&self) -> f32 {
        match self {
            Role::Agent => 8.0,
            Role::Target | Role::Hazard => 10.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::Agent => "agent",
            Role::Target => "target",
            Role::Hazard => "hazard",
        }
    }
}

/// Symmetric saturation limits shared by every object in one environment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub location: f64,
    pub velocity: f64,
    pub acceleration: f64,
}

/// Kinematic state of a single point mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMass {
    /// Position in world space, each axis within `±Bounds::location`
    pub position: Vector2<f64>,

    /// Velocity, each axis within `±Bounds::velocity`
    pub velocity: Vector2<f64>,

    role: Role,
}

impl PointMass {
    /// Create a point mass at rest.
    pub fn at_rest(role: Role, position: Vector2<f64>) -> Self {
        Self {
            position,
            velocity: Vector2::zeros(),
            role,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Semi-implicit Euler step with saturation.
    ///
    /// Velocity is updated first and the *new* velocity moves the position.
    /// Each quantity is clamped to its bound right after it is updated. A
    /// position clamp leaves velocity untouched.
    pub fn advance(&mut self, acceleration: Vector2<f64>, dt: f64, bounds: &Bounds) {
        let acceleration = clamp_symmetric(acceleration, bounds.acceleration);

        self.velocity = clamp_symmetric(self.velocity + acceleration * dt, bounds.velocity);
        self.position = clamp_symmetric(self.position + self.velocity * dt, bounds.location);
    }

    /// Euclidean distance between two objects.
    pub fn distance_to(&self, other: &PointMass) -> f64 {
        (self.position - other.position).norm()
    }
}
