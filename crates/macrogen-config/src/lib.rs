//! macrogen configuration management
//!
//! Loads the generator configuration from `macrogen.toml` with
//! `MACROGEN_*` environment overrides, validates it, and writes it back after
//! the engine has reconciled the macro definitions.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::{is_valid_macro_name, ConfigManager, DEFAULT_CONFIG_FILE, DEFAULT_ENV_PREFIX};
pub use types::ConfigStore;
