pub mod config;
pub mod reset;
pub mod rewards;

pub use config::{EnvConfig, RenderMode};
pub use reset::ResetOptions;
pub use rewards::RewardWeights;
