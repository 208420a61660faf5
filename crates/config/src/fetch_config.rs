//! HTTP fetch configuration section

use crate::validation::{Checks, ConfigSection, ValidationError};
use serde::{Deserialize, Serialize};

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;

/// Settings for retrieving feeds over HTTP
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every request
    pub user_agent: String,

    /// Redirects followed before giving up
    pub max_redirects: usize,

    /// Largest response body accepted
    pub max_body_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("syndic/{}", env!("CARGO_PKG_VERSION")),
            max_redirects: 10,
            max_body_bytes: 16 * MIB,
        }
    }
}

impl ConfigSection for FetchConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut checks = Checks::new();
        checks
            .range("fetch.timeout_secs", self.timeout_secs, 1..=300)
            .non_blank("fetch.user_agent", &self.user_agent)
            .range("fetch.max_redirects", self.max_redirects, 0..=20)
            .range("fetch.max_body_bytes", self.max_body_bytes, KIB..=64 * MIB);
        checks.finish()
    }

    fn merge(&mut self, other: Self) {
        self.timeout_secs = other.timeout_secs;
        self.user_agent = other.user_agent;
        self.max_redirects = other.max_redirects;
        self.max_body_bytes = other.max_body_bytes;
    }

    fn section_name(&self) -> &'static str {
        "fetch"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = FetchConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.user_agent.starts_with("syndic/"));
    }

    #[test]
    fn test_invalid_values_all_reported() {
        let config = FetchConfig {
            timeout_secs: 0,
            user_agent: " ".into(),
            max_redirects: 50,
            max_body_bytes: 10,
        };
        assert_eq!(config.validate().unwrap_err().len(), 4);
    }

    #[test]
    fn test_merge() {
        let mut base = FetchConfig::default();
        let other = FetchConfig {
            timeout_secs: 5,
            ..Default::default()
        };
        base.merge(other);
        assert_eq!(base.timeout_secs, 5);
    }
}
