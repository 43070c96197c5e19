// CLI error types and user-facing messages

use macrogen_config::ConfigError;
use macrogen_generation::GenerationError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<GenerationError> for CliError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::Config(msg) => CliError::Config(msg),
            other => CliError::Generation(other.to_string()),
        }
    }
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!(
                    "Invalid argument: {}\n\nRun 'macrogen --help' for usage information.",
                    message
                )
            }
            CliError::Io(e) => {
                format!("File operation failed: {}", e)
            }
            CliError::Config(msg) => {
                format!(
                    "Configuration error: {}\n\nRun 'macrogen config' to check your configuration.",
                    msg
                )
            }
            CliError::Generation(msg) => {
                format!("Generation failed: {}", msg)
            }
            CliError::Internal(msg) => {
                format!("Internal error: {}\n\nPlease report this issue.", msg)
            }
        }
    }

    /// Get technical details for verbose mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

pub type CliResult<T> = Result<T, CliError>;
