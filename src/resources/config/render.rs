use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::ConfigError;

/// Modes the environment can render in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// No rendering work at all
    #[default]
    None,
    /// `render()` returns the pixel buffer
    RgbArray,
    /// Frames are pushed to a window on every reset and step
    Human,
}

impl FromStr for RenderMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "None" => Ok(RenderMode::None),
            "rgb_array" => Ok(RenderMode::RgbArray),
            "human" => Ok(RenderMode::Human),
            other => Err(ConfigError::InvalidRenderMode(other.to_string())),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RenderMode::None => "none",
            RenderMode::RgbArray => "rgb_array",
            RenderMode::Human => "human",
        };
        f.write_str(name)
    }
}
