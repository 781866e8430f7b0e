use crate::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_FIELDS};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid compile config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("compile config value '{key}' must be greater than zero")]
    Zero { key: &'static str },
}

///
/// CompileConfig
///
/// Limits applied while compiling a model. Loadable from TOML:
///
/// ```toml
/// max_depth = 8
/// max_fields = 250
/// ```
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileConfig {
    /// Deepest object/nested level allowed; top-level fields sit at depth 1.
    pub max_depth: usize,

    /// Most mapped fields allowed across every level.
    pub max_fields: usize,
}

impl CompileConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Zero { key: "max_depth" });
        }
        if self.max_fields == 0 {
            return Err(ConfigError::Zero { key: "max_fields" });
        }

        Ok(())
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn with_max_fields(mut self, max_fields: usize) -> Self {
        self.max_fields = max_fields;
        self
    }
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_fields: DEFAULT_MAX_FIELDS,
        }
    }
}
