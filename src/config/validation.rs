//! Configuration validation for alert-state

use super::AlertStateConfig;
use crate::core::errors::ConfigError;
use crate::core::AlertState;

pub const VALID_LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Check values serde cannot: log level names, override keys and empty display text.
pub fn validate_config(config: &AlertStateConfig) -> Result<(), ConfigError> {
    let level = config.logging.level.to_lowercase();
    if !VALID_LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::InvalidValue {
            field: "logging.level".to_string(),
            value: config.logging.level.clone(),
            reason: format!("expected one of {}", VALID_LOG_LEVELS.join(", ")),
        });
    }

    for (code, display) in &config.display.overrides {
        if !AlertState::from_code(code).is_known() {
            return Err(ConfigError::InvalidValue {
                field: "display.overrides".to_string(),
                value: code.clone(),
                reason: "not a known alert state".to_string(),
            });
        }

        if display.text.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("display.overrides.{code}.text"),
                value: String::new(),
                reason: "display text must not be empty".to_string(),
            });
        }
    }

    if let Some(fallback) = &config.display.fallback {
        if fallback.text.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "display.fallback.text".to_string(),
                value: String::new(),
                reason: "display text must not be empty".to_string(),
            });
        }
    }

    Ok(())
}
