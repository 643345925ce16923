use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::ConfigError;
use crate::stack::DEFAULT_INITIAL_CAPACITY;

// =============================================================================
// Settings sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackSettings {
    pub initial_capacity: usize,
}

impl Default for StackSettings {
    fn default() -> Self {
        StackSettings {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: "info".to_string(),
        }
    }
}

impl LoggingSettings {
    pub fn level(&self) -> Result<Level, ConfigError> {
        self.level
            .parse()
            .map_err(|_| ConfigError::InvalidLevel(self.level.clone()))
    }
}

// =============================================================================
// Top-level config
// =============================================================================

/// Settings shared by the walkthrough binaries. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdiomsConfig {
    pub stack: StackSettings,
    pub logging: LoggingSettings,
}

impl IdiomsConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: IdiomsConfig = toml::from_str(content)?;
        config.logging.level()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when given, otherwise falls back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
