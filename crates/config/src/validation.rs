//! Field checks shared by the config sections
//!
//! Sections report every problem at once: a [`Checks`] accumulates
//! [`ValidationError`]s and [`Checks::finish`] turns them into a result.

use std::fmt::Display;
use std::ops::RangeInclusive;

pub use crate::error::ValidationError;

/// A `[section]` of `config.toml`
pub trait ConfigSection: Default {
    /// Returns every validation error found, not just the first one.
    fn validate(&self) -> Result<(), Vec<ValidationError>>;

    /// Overwrites this section with `other`.
    fn merge(&mut self, other: Self);

    /// Table name in `config.toml`
    fn section_name(&self) -> &'static str;
}

/// Accumulated validation errors
#[derive(Debug, Default)]
pub struct Checks {
    errors: Vec<ValidationError>,
}

impl Checks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects values outside `bounds`
    pub fn range<T>(&mut self, field: &str, value: T, bounds: RangeInclusive<T>) -> &mut Self
    where
        T: PartialOrd + Display,
    {
        if !bounds.contains(&value) {
            let (min, max) = bounds.into_inner();
            self.errors.push(ValidationError::out_of_range(field, min, max, value));
        }
        self
    }

    /// Rejects empty or whitespace-only strings
    pub fn non_blank(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(ValidationError::new(field, "must not be empty"));
        }
        self
    }

    /// An ordered list of names: at least one, each from `allowed`, none twice
    pub fn names(&mut self, field: &str, values: &[String], allowed: &[&str]) -> &mut Self {
        if values.is_empty() {
            self.errors.push(ValidationError::new(field, "must list at least one name"));
        }
        for (i, value) in values.iter().enumerate() {
            if !allowed.contains(&value.as_str()) {
                self.errors.push(ValidationError::unknown(field, allowed, value));
            } else if values[..i].contains(value) {
                self.errors.push(ValidationError::duplicate(field, value));
            }
        }
        self
    }

    /// Folds in the outcome of a nested section
    pub fn section(&mut self, result: Result<(), Vec<ValidationError>>) -> &mut Self {
        if let Err(errors) = result {
            self.errors.extend(errors);
        }
        self
    }

    pub fn push(&mut self, error: ValidationError) -> &mut Self {
        self.errors.push(error);
        self
    }

    pub fn finish(self) -> Result<(), Vec<ValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
