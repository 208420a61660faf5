//! Error types for the configuration system

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while locating, reading or writing `config.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file exists but holds nothing but whitespace
    #[error("Config file at {path} is empty")]
    Empty { path: PathBuf },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Every field that failed validation, in section order
    #[error("Config validation failed: {}", join(.0))]
    Invalid(Vec<ValidationError>),

    /// Creating the directory, the temp file, or the final rename failed
    #[error("Failed to write config at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to back up config to {path}: {source}")]
    Backup {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The platform reports no per-user config directory
    #[error("Could not determine the user config directory")]
    NoConfigDir,
}

impl ConfigError {
    /// Field errors carried by [`ConfigError::Invalid`], empty otherwise
    pub fn fields(&self) -> &[ValidationError] {
        match self {
            ConfigError::Invalid(errors) => errors,
            _ => &[],
        }
    }
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// One rejected field, named by its dotted path (`fetch.timeout_secs`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    /// The rejected value as written, when there is one to show
    pub value: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: None,
        }
    }

    /// Value outside `min..=max`
    pub fn out_of_range(
        field: &str,
        min: impl fmt::Display,
        max: impl fmt::Display,
        value: impl ToString,
    ) -> Self {
        Self::new(field, format!("must be between {min} and {max}")).showing(value)
    }

    /// Name missing from a closed list
    pub fn unknown(field: &str, allowed: &[&str], value: impl ToString) -> Self {
        Self::new(field, format!("must be one of: {}", allowed.join(", "))).showing(value)
    }

    /// Name listed more than once
    pub fn duplicate(field: &str, value: impl ToString) -> Self {
        Self::new(field, "contains a duplicate").showing(value)
    }

    fn showing(mut self, value: impl ToString) -> Self {
        self.value = Some(value.to_string());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field '{}': {}", self.field, self.message)?;
        if let Some(value) = &self.value {
            write!(f, " (got: {value})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
