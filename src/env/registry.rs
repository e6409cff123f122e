use std::collections::BTreeMap;
use tracing::debug;

use crate::env::TargetHazardEnv;
use crate::resources::EnvConfig;
use crate::utils::{ConfigError, EnvError};

/// Identifier of the built-in environment.
pub const TARGET_HAZARD_WORLD_V0: &str = "TargetHazardWorld-v0";

pub type EnvConstructor = fn(EnvConfig) -> Result<TargetHazardEnv, EnvError>;

#[derive(Clone)]
pub struct EnvSpec {
    pub id: String,
    pub constructor: EnvConstructor,
    /// Used by [`Registry::make`] when no config is supplied
    pub default_config: EnvConfig,
}

/// Maps string identifiers to environment constructors.
///
/// Nothing is registered implicitly; call [`register_defaults`] once during
/// setup.
#[derive(Clone, Default)]
pub struct Registry {
    specs: BTreeMap<String, EnvSpec>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        id: &str,
        constructor: EnvConstructor,
        default_config: EnvConfig,
    ) -> Result<(), ConfigError> {
        if self.specs.contains_key(id) {
            return Err(ConfigError::DuplicateId(id.to_string()));
        }
        default_config.validate()?;

        debug!("Registered environment {}", id);
        self.specs.insert(
            id.to_string(),
            EnvSpec {
                id: id.to_string(),
                constructor,
                default_config,
            },
        );
        Ok(())
    }

    pub fn spec(&self, id: &str) -> Option<&EnvSpec> {
        self.specs.get(id)
    }

    pub fn make(&self, id: &str, config: Option<EnvConfig>) -> Result<TargetHazardEnv, EnvError> {
        let spec = self
            .specs
            .get(id)
            .ok_or_else(|| ConfigError::UnknownId(id.to_string()))?;
        (spec.constructor)(config.unwrap_or_else(|| spec.default_config.clone()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }
}

/// Register the environments shipped with this crate.
pub fn register_defaults(registry: &mut Registry) -> Result<(), ConfigError> {
    registry.register(
        TARGET_HAZARD_WORLD_V0,
        TargetHazardEnv::new,
        EnvConfig::default(),
    )
}
