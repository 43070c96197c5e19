//! Configuration error types

use thiserror::Error;

/// Configuration result type
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the configuration file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration could not be parsed or serialized
    #[error("Parse error: {0}")]
    Parse(String),

    /// The configuration parsed but holds invalid values
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required configuration file does not exist
    #[error("Config file not found: {0}")]
    NotFound(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(key) => ConfigError::NotFound(key),
            other => ConfigError::Parse(other.to_string()),
        }
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
