//! Configuration manager - main API for config operations

use crate::persistence::ConfigPersistence;
use crate::{Config, ConfigError, ConfigResult, LogLevel};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Prefix of environment variables that override file values
pub const ENV_PREFIX: &str = "SYNDIC";

/// Main configuration manager
///
/// Resolves the config file location and wraps loading, saving and
/// validation.
pub struct ConfigManager {
    persistence: ConfigPersistence,
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager using the default config directory
    ///
    /// - Linux: `~/.config/syndic/`
    /// - macOS: `~/Library/Application Support/syndic/`
    /// - Windows: `%APPDATA%\syndic\`
    pub fn new() -> ConfigResult<Self> {
        let config_dir = Self::default_config_dir()?;
        Self::with_directory(config_dir)
    }

    /// Creates a config manager with a custom config directory
    pub fn with_directory(config_dir: PathBuf) -> ConfigResult<Self> {
        let config_path = config_dir.join("config.toml");
        let persistence = ConfigPersistence::new(config_path);

        Ok(Self {
            persistence,
            config_dir,
        })
    }

    fn default_config_dir() -> ConfigResult<PathBuf> {
        ProjectDirs::from("", "", "syndic")
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Returns the config directory path
    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    /// Returns the full config file path
    pub fn config_path(&self) -> PathBuf {
        self.persistence.path().to_path_buf()
    }

    /// Loads the configuration from file
    pub fn load(&self) -> ConfigResult<Config> {
        self.persistence.load()
    }

    /// Loads the configuration, falling back to defaults on any error
    pub fn load_or_default(&self) -> Config {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            }
        }
    }

    /// Saves the configuration to file
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        self.persistence.save(config)
    }

    /// Loads, applies `update_fn`, and saves the result
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use syndic_config::ConfigManager;
    /// # let manager = ConfigManager::new().unwrap();
    /// manager.update(|config| {
    ///     config.fetch.timeout_secs = 10;
    /// }).expect("Failed to update config");
    /// ```
    pub fn update<F>(&self, update_fn: F) -> ConfigResult<()>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.load()?;
        update_fn(&mut config);
        self.save(&config)
    }

    /// Writes a default config file if one doesn't exist
    ///
    /// Returns Ok(true) if a new file was created, Ok(false) if one already exists.
    pub fn initialize(&self) -> ConfigResult<bool> {
        if self.config_path().exists() {
            log::info!(
                "Config file already exists at {}",
                self.config_path().display()
            );
            return Ok(false);
        }

        self.save(&Config::default())?;
        log::info!("Generated default config at {}", self.config_path().display());
        Ok(true)
    }

    /// Overwrites the config file with default values
    pub fn reset(&self) -> ConfigResult<()> {
        self.save(&Config::default())
    }

    /// Validates the current configuration file
    ///
    /// Returns all validation messages, empty if the file is valid.
    pub fn validate(&self) -> ConfigResult<Vec<String>> {
        let config = self.load()?;

        match config.validate() {
            Ok(()) => Ok(Vec::new()),
            Err(errors) => Ok(errors.iter().map(|e| e.to_string()).collect()),
        }
    }

    /// Loads the config and applies `SYNDIC_SECTION_FIELD` environment overrides
    ///
    /// Recognized: `SYNDIC_APP_LOG_LEVEL`, `SYNDIC_PARSER_REFERENCE_OFFSET_MINUTES`,
    /// `SYNDIC_FETCH_TIMEOUT_SECS`, `SYNDIC_FETCH_USER_AGENT`. Unparsable values
    /// are ignored with a warning.
    pub fn load_with_env_overrides(&self) -> ConfigResult<Config> {
        let mut config = self.load()?;
        apply_env_overrides(&mut config, |key| std::env::var(key).ok());

        if let Err(errors) = config.validate() {
            log::warn!(
                "Config validation warnings after env overrides: {:?}",
                errors
            );
        }

        Ok(config)
    }
}

fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let var = |section: &str, field: &str| {
        let key = format!("{ENV_PREFIX}_{section}_{field}");
        lookup(&key).map(|value| (key, value))
    };

    if let Some((key, value)) = var("APP", "LOG_LEVEL") {
        match value.parse::<LogLevel>() {
            Ok(level) => config.app.log_level = level,
            Err(e) => log::warn!("Ignoring {}: {}", key, e),
        }
    }

    if let Some((key, value)) = var("PARSER", "REFERENCE_OFFSET_MINUTES") {
        match value.trim().parse() {
            Ok(minutes) => config.parser.reference_offset_minutes = minutes,
            Err(e) => log::warn!("Ignoring {}: {}", key, e),
        }
    }

    if let Some((key, value)) = var("FETCH", "TIMEOUT_SECS") {
        match value.trim().parse() {
            Ok(secs) => config.fetch.timeout_secs = secs,
            Err(e) => log::warn!("Ignoring {}: {}", key, e),
        }
    }

    if let Some((_, value)) = var("FETCH", "USER_AGENT") {
        config.fetch.user_agent = value;
    }
}
