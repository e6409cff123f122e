pub mod point_mass;
pub mod policy;
pub mod termination;

pub use point_mass::{Bounds, PointMass, Role};
pub use policy::ObjectPolicy;
pub use termination::Outcome;
