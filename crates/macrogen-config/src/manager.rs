//! Configuration manager implementation

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use macrogen_generation::GeneratorConfig;
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    types::ConfigStore,
};

/// File name looked up in the current directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "macrogen.toml";

/// Prefix of environment variables that override file values
pub const DEFAULT_ENV_PREFIX: &str = "MACROGEN";

/// Configuration manager
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a new configuration manager
    pub fn new() -> Self {
        Self::with_path(PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Create with custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    /// Use a different environment prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Path of the configuration file
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Environment prefix in use
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }

    /// Directory relative paths in the file are taken against
    pub fn base_dir(&self) -> PathBuf {
        match self.config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Copy of `config` whose project root no longer depends on the current
    /// directory
    ///
    /// A relative `project_root` is anchored at the directory holding the
    /// configuration file, so `--config some/dir/macrogen.toml` behaves the
    /// same from anywhere.
    pub fn anchored(&self, config: &GeneratorConfig) -> GeneratorConfig {
        let mut anchored = config.clone();
        if anchored.project_root.is_relative() {
            anchored.project_root = self.base_dir().join(&config.project_root);
        }
        anchored
    }
}

impl ConfigStore for ConfigManager {
    fn load_config(&self) -> Result<GeneratorConfig> {
        let builder = Config::builder()
            .add_source(
                File::from(self.config_path.clone())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix(&self.env_prefix).try_parsing(false));

        let config = builder.build()?;
        let generator_config: GeneratorConfig = config.try_deserialize()?;
        debug!(
            "Loaded configuration from {} ({} macros)",
            self.config_path.display(),
            generator_config.macros.len()
        );
        Ok(generator_config)
    }

    fn save_config(&self, config: &GeneratorConfig) -> Result<()> {
        self.validate_config(config)?;

        let toml = toml::to_string_pretty(config)?;
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.config_path, toml)?;
        debug!("Saved configuration to {}", self.config_path.display());
        Ok(())
    }

    fn validate_config(&self, config: &GeneratorConfig) -> Result<()> {
        if config.templates_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "templates_dir must not be empty".to_string(),
            ));
        }
        if config.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output_dir must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for definition in &config.macros {
            if !is_valid_macro_name(&definition.name) {
                return Err(ConfigError::Validation(format!(
                    "Invalid macro name '{}': use upper-case letters and underscores",
                    definition.name
                )));
            }
            if !seen.insert(definition.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "Duplicate macro definition '{}'",
                    definition.name
                )));
            }
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `name` can appear as the identifier of a token
pub fn is_valid_macro_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_uppercase() || c == '_')
}
