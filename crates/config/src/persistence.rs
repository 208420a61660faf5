//! File system persistence for configuration
//!
//! Reads and writes the config file with:
//! - Atomic writes (temp file in the same directory, then rename)
//! - A `.toml.backup` copy of the previous file before each overwrite
//! - Directory creation on first save

use crate::{Config, ConfigError, ConfigResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const HEADER: &str = "\
# syndic configuration
#
# [app]     log_level: error | warn | info | debug | trace (RUST_LOG overrides)
# [parser]  adapters: formats to try in order; reference_offset_minutes: UTC
#           offset for dates without a zone
# [fetch]   timeout_secs, user_agent, max_redirects, max_body_bytes

";

/// Handles configuration file persistence
pub struct ConfigPersistence {
    config_path: PathBuf,
}

impl ConfigPersistence {
    /// Creates a new persistence handler for the given config file path
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Path of the managed file
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Path of the copy kept from the previous save
    pub fn backup_path(&self) -> PathBuf {
        self.config_path.with_extension("toml.backup")
    }

    /// Loads configuration from file
    ///
    /// A missing file yields the defaults. An empty or unparsable file is an
    /// error. Validation problems are only logged so that a hand-edited file
    /// still loads.
    pub fn load(&self) -> ConfigResult<Config> {
        if !self.config_path.exists() {
            log::info!(
                "Config file not found at {}, using defaults",
                self.config_path.display()
            );
            return Ok(Config::default());
        }

        let contents =
            fs::read_to_string(&self.config_path).map_err(|e| ConfigError::Read {
                path: self.config_path.clone(),
                source: e,
            })?;

        // Empty files are treated as corrupted, not as defaults
        if contents.trim().is_empty() {
            return Err(ConfigError::Empty {
                path: self.config_path.clone(),
            });
        }

        let config: Config = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: self.config_path.clone(),
            source: e,
        })?;

        if let Err(errors) = config.validate() {
            let error_msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            log::warn!("Config validation warnings: {}", error_msg);
        }

        Ok(config)
    }

    /// Saves configuration to file atomically
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        config.validate().map_err(ConfigError::Invalid)?;

        if let Some(parent) = self.config_path.parent() {
            self.ensure_directory_exists(parent)?;
        }

        if self.config_path.exists() {
            self.backup_config()?;
        }

        let body = toml::to_string_pretty(config)?;
        let temp_file = self.create_temp_file()?;
        self.write_atomic(temp_file, &format!("{HEADER}{body}"))?;

        log::info!("Config saved to {}", self.config_path.display());
        Ok(())
    }

    fn ensure_directory_exists(&self, path: &Path) -> ConfigResult<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(|e| ConfigError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
            log::info!("Created config directory: {}", path.display());
        }
        Ok(())
    }

    fn backup_config(&self) -> ConfigResult<()> {
        let backup_path = self.backup_path();
        fs::copy(&self.config_path, &backup_path).map_err(|e| ConfigError::Backup {
            path: backup_path.clone(),
            source: e,
        })?;
        log::debug!("Backed up config to {}", backup_path.display());
        Ok(())
    }

    fn create_temp_file(&self) -> ConfigResult<NamedTempFile> {
        let dir = match self.config_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        NamedTempFile::new_in(dir).map_err(|e| self.write_error(e))
    }

    fn write_atomic(&self, mut temp_file: NamedTempFile, content: &str) -> ConfigResult<()> {
        temp_file
            .write_all(content.as_bytes())
            .and_then(|()| temp_file.flush())
            .map_err(|e| self.write_error(e))?;

        temp_file
            .persist(&self.config_path)
            .map_err(|e| self.write_error(e.error))?;

        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Write {
            path: self.config_path.clone(),
            source,
        }
    }
}
