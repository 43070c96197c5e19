// Command handlers for the macrogen CLI

pub mod config;
pub mod generate;
pub mod macros;
pub mod set;
pub mod sync;

pub use config::ConfigCommand;
pub use generate::{GenerateCommand, ReportFormat};
pub use macros::MacrosCommand;
pub use set::{SetCommand, SetValue};
pub use sync::SyncCommand;

use std::path::PathBuf;

use macrogen_config::{ConfigManager, ConfigStore};
use macrogen_generation::GeneratorConfig;

use crate::error::CliResult;

/// Trait for command handlers
pub trait Command {
    /// Execute the command
    fn execute(&self) -> CliResult<()>;
}

/// Settings shared by every command
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Explicit configuration file; `macrogen.toml` in the current directory
    /// otherwise
    pub config_path: Option<PathBuf>,
    /// Preview only: write neither generated files nor the configuration
    pub dry_run: bool,
}

impl CommandContext {
    pub fn new(config_path: Option<PathBuf>, dry_run: bool) -> Self {
        Self {
            config_path,
            dry_run,
        }
    }

    /// Configuration manager for the selected file
    pub fn config_manager(&self) -> ConfigManager {
        match &self.config_path {
            Some(path) => ConfigManager::with_path(path.clone()),
            None => ConfigManager::new(),
        }
    }

    /// Load and validate the configuration
    pub fn load(&self) -> CliResult<(ConfigManager, GeneratorConfig)> {
        let manager = self.config_manager();
        let config = manager.load_config()?;
        manager.validate_config(&config)?;
        Ok((manager, config))
    }

    /// Persist `config` unless this is a dry run
    pub fn persist(&self, manager: &ConfigManager, config: &GeneratorConfig) -> CliResult<()> {
        if self.dry_run {
            tracing::info!(
                "Dry run: not saving {}",
                manager.config_path().display()
            );
            return Ok(());
        }
        manager.save_config(config)?;
        Ok(())
    }
}
