//! A point-mass reinforcement-learning environment: an agent accelerates
//! towards a target while keeping clear of a hazard.

pub mod components;
pub mod env;
pub mod rendering;
pub mod resources;
pub mod utils;
pub mod world;

pub use components::{Bounds, ObjectPolicy, Outcome, PointMass, Role};
pub use env::{
    register_defaults, Action, EnvConfigBuilder, Info, Observation, Registry, StepResult,
    TargetHazardEnv, TARGET_HAZARD_WORLD_V0,
};
pub use rendering::{Frame, Renderer, Viewer, ViewerFactory};
pub use resources::{EnvConfig, RenderMode, ResetOptions, RewardWeights};
pub use utils::{ConfigError, EnvError};
pub use world::WorldState;
