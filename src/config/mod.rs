//! Configuration for alert-state
//!
//! One TOML document with three sections:
//!
//! - `[logging]` level and formatting of the tracing subscriber
//! - `[display]` overrides for the default state display table
//! - `[search]` matching options for the rule list search

pub mod validation;

pub use validation::{validate_config, VALID_LOG_LEVELS};

use crate::core::errors::ConfigError;
use crate::core::StateDisplay;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AlertStateConfig {
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level applied to this crate's targets (`trace` through `error`, or `off`)
    pub level: String,
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Replaces the display used for unknown states
    pub fallback: Option<StateDisplay>,
    /// Per-state replacements, keyed by state code (`ok`, `no_data`, ...)
    pub overrides: BTreeMap<String, StateDisplay>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub case_insensitive: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_insensitive: true,
        }
    }
}

impl AlertStateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::InvalidFormat {
            reason: e.message().to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        self.validate()?;
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_config(self)
    }
}
