//! Configuration store abstraction

use macrogen_generation::GeneratorConfig;

use crate::error::ConfigError;

/// Loads, persists and validates a [`GeneratorConfig`]
pub trait ConfigStore {
    /// Load configuration
    fn load_config(&self) -> Result<GeneratorConfig, ConfigError>;
    /// Save configuration
    fn save_config(&self, config: &GeneratorConfig) -> Result<(), ConfigError>;
    /// Validate configuration
    fn validate_config(&self, config: &GeneratorConfig) -> Result<(), ConfigError>;
}
