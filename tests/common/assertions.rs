use approx::assert_relative_eq;
use hazard_world::{Bounds, Observation};

/// Assert that every observed component is a finite number
#[track_caller]
pub fn assert_finite(obs: &Observation) {
    for (i, pair) in obs.to_array().iter().enumerate() {
        assert!(
            pair.iter().all(|v| v.is_finite()),
            "Observation entry {} is not finite: {:?}",
            i,
            pair
        );
    }
}

/// Assert positions and velocities respect the configured limits
#[track_caller]
pub fn assert_observation_within_bounds(obs: &Observation, bounds: &Bounds) {
    assert_finite(obs);
    for object in [&obs.agent, &obs.target, &obs.hazard] {
        for c in object.position {
            assert!(
                c.abs() <= bounds.location,
                "Position {:?} exceeds {}",
                object.position,
                bounds.location
            );
        }
        for c in object.velocity {
            assert!(
                c.abs() <= bounds.velocity,
                "Velocity {:?} exceeds {}",
                object.velocity,
                bounds.velocity
            );
        }
    }
}

#[track_caller]
pub fn assert_position_eq(actual: [f64; 2], expected: [f64; 2], epsilon: f64) {
    assert_relative_eq!(actual[0], expected[0], epsilon = epsilon);
    assert_relative_eq!(actual[1], expected[1], epsilon = epsilon);
}
