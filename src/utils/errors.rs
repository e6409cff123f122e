use thiserror::Error;

/// Errors raised while building or validating an environment configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid parameter '{name}' with value '{value}': {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Unknown render mode: {0}")]
    InvalidRenderMode(String),

    #[error("Human render mode needs a window backend: enable `window` or supply a viewer")]
    MissingWindowBackend,

    #[error("Environment id already registered: {0}")]
    DuplicateId(String),

    #[error("Unknown environment id: {0}")]
    UnknownId(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ConfigError {
    pub(crate) fn invalid(name: &str, value: impl ToString, reason: &str) -> Self {
        ConfigError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid reset option '{name}': {value:?} lies outside [-{bound}, {bound}]")]
    InvalidResetOption {
        name: String,
        value: [f64; 2],
        bound: f64,
    },

    #[error("Environment has been closed")]
    Closed,

    #[error("Environment must be reset before stepping")]
    ResetNeeded,

    #[error("Display error: {0}")]
    Display(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, EnvError>;
