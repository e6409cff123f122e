mod act;
mod builder;
mod controller;
mod obs;
mod registry;
mod structures;

pub use act::Action;
pub use builder::EnvConfigBuilder;
pub use controller::TargetHazardEnv;
pub use obs::{ObjectObservation, Observation};
pub use registry::{register_defaults, EnvConstructor, EnvSpec, Registry, TARGET_HAZARD_WORLD_V0};
pub use structures::{Info, StepResult};
