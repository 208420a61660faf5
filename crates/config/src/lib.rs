//! Syndic configuration system
//!
//! Settings live in one TOML file with a section per concern. Each section
//! implements the [`ConfigSection`] trait, so adding a section means adding a
//! type and a field on [`Config`].
//!
//! - **Graceful degradation**: values failing validation are reported on load,
//!   rejected on save
//! - **Atomic writes**: config files are never left half written
//! - **No panics**: all errors are returned as [`ConfigError`]
//!
//! # Example
//!
//! ```rust,no_run
//! use syndic_config::{Config, ConfigManager};
//!
//! let manager = ConfigManager::new().expect("Failed to initialize config");
//! let config = manager.load().unwrap_or_else(|e| {
//!     eprintln!("Config error: {}, using defaults", e);
//!     Config::default()
//! });
//!
//! println!("Timeout: {}s", config.fetch.timeout_secs);
//! ```

mod error;
mod manager;
mod persistence;
mod validation;

pub mod app_config;
pub mod fetch_config;
pub mod parser_config;

pub use error::{ConfigError, ConfigResult, ValidationError};
pub use manager::ConfigManager;
pub use persistence::ConfigPersistence;
pub use validation::{Checks, ConfigSection};

pub use app_config::{AppConfig, LogLevel};
pub use fetch_config::FetchConfig;
pub use parser_config::ParserConfig;

use serde::{Deserialize, Serialize};

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Application-level settings
    pub app: AppConfig,

    /// Format dispatch and date handling
    pub parser: ParserConfig,

    /// HTTP retrieval
    pub fetch: FetchConfig,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the entire configuration
    ///
    /// Returns all validation errors found across all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut checks = Checks::new();
        checks
            .section(self.app.validate())
            .section(self.parser.validate())
            .section(self.fetch.validate());

        if self.version > CONFIG_VERSION {
            checks.push(ValidationError::new(
                "version",
                format!("{} is newer than supported version {CONFIG_VERSION}", self.version),
            ));
        }

        checks.finish()
    }

    /// Merges this config with another, preferring values from `other`
    pub fn merge(&mut self, other: Config) {
        self.app.merge(other.app);
        self.parser.merge(other.parser);
        self.fetch.merge(other.fetch);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            app: AppConfig::default(),
            parser: ParserConfig::default(),
            fetch: FetchConfig::default(),
        }
    }
}
