//! Application configuration
//!
//! Sources, later ones overriding earlier ones:
//! 1. built-in defaults
//! 2. an optional TOML file (`<config dir>/recipebox/config.toml`)
//! 3. `RECIPEBOX_*` environment variables

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use recipebox_application::PageLimits;

/// Configuration result type
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<::config::ConfigError> for ConfigError {
    fn from(err: ::config::ConfigError) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Runtime settings for the binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Load the demo meals and ingredients at startup
    pub seed_demo_data: bool,
    pub default_page_size: usize,
    pub max_page_size: usize,
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            default_page_size: 10,
            max_page_size: 100,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(ConfigError::Validation(
                "default_page_size must be greater than 0".to_string(),
            ));
        }
        if self.max_page_size < self.default_page_size {
            return Err(ConfigError::Validation(format!(
                "max_page_size ({}) must be at least default_page_size ({})",
                self.max_page_size, self.default_page_size
            )));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "log_level must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn page_limits(&self) -> PageLimits {
        PageLimits {
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
        }
    }
}

/// Loads [`AppConfig`] from file and environment
pub struct ConfigLoader {
    config_path: PathBuf,
    env_prefix: String,
}

impl ConfigLoader {
    pub const ENV_PREFIX: &'static str = "RECIPEBOX";

    /// Loader reading the default config path
    pub fn new() -> Self {
        Self::with_path(Self::default_config_path())
    }

    /// Create with custom config path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            env_prefix: Self::ENV_PREFIX.to_string(),
        }
    }

    /// Read environment variables with a different prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get default config path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("recipebox")
            .join("config.toml")
    }

    /// Merge all sources and validate the result
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(&self) -> Result<AppConfig> {
        let config = Config::builder()
            .add_source(
                File::from(self.config_path.clone())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix(&self.env_prefix).try_parsing(true))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
