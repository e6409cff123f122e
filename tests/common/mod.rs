#![allow(dead_code)]

mod assertions;
mod fixtures;

// Re-export
pub use assertions::{assert_finite, assert_observation_within_bounds, assert_position_eq};
pub use fixtures::*;
