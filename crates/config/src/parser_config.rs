//! Feed parser configuration section

use crate::validation::{Checks, ConfigSection, ValidationError};
use serde::{Deserialize, Serialize};

/// Format names the parser understands
pub const KNOWN_ADAPTERS: &[&str] = &["rss", "atom"];

/// Largest accepted reference offset, one minute short of a day
pub const MAX_OFFSET_MINUTES: i32 = 1439;

/// How documents are dispatched and how zone-less dates are read
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParserConfig {
    /// Formats to try, in order
    pub adapters: Vec<String>,

    /// UTC offset in minutes applied to dates that carry no zone
    pub reference_offset_minutes: i32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            adapters: KNOWN_ADAPTERS.iter().map(|s| s.to_string()).collect(),
            reference_offset_minutes: 0,
        }
    }
}

impl ConfigSection for ParserConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut checks = Checks::new();
        checks
            .names("parser.adapters", &self.adapters, KNOWN_ADAPTERS)
            .range(
                "parser.reference_offset_minutes",
                self.reference_offset_minutes,
                -MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES,
            );
        checks.finish()
    }

    fn merge(&mut self, other: Self) {
        self.adapters = other.adapters;
        self.reference_offset_minutes = other.reference_offset_minutes;
    }

    fn section_name(&self) -> &'static str {
        "parser"
    }
}
