/// Domain-specific error types for alert-state using thiserror
///
/// Normalization and store transitions never fail. The fallible edges are decoding
/// backend payloads into DTOs and loading configuration.
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for alert-state operations
#[derive(Error, Debug)]
pub enum AlertStateError {
    #[error("Parsing failed")]
    Parse(#[from] ParseError),

    #[error("Configuration error")]
    Config(#[from] ConfigError),
}

/// Payload decoding errors
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to decode {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ParseError {
    pub(crate) fn json(context: &str, source: serde_json::Error) -> Self {
        ParseError::Json {
            context: context.to_string(),
            source,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid configuration format: {reason}")]
    InvalidFormat {
        reason: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Result type alias for alert-state operations
pub type AlertStateResult<T> = Result<T, AlertStateError>;
