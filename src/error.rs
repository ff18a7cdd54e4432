//! Error types for the crate.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Single-value validation failures live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Validation errors collected per field during a record clean.
///
/// Keys are field names; each field keeps every error raised for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<ValidationError>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record errors for `field`, appending to any already present.
    pub fn extend(&mut self, field: &str, errors: impl IntoIterator<Item = ValidationError>) {
        let mut errors = errors.into_iter().peekable();
        if errors.peek().is_none() {
            return;
        }
        self.errors
            .entry(field.to_string())
            .or_default()
            .extend(errors);
    }

    /// Errors for one field, empty if it passed.
    pub fn get(&self, field: &str) -> &[ValidationError] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ValidationError])> {
        self.errors
            .iter()
            .map(|(field, errors)| (field.as_str(), errors.as_slice()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, errors) in self.iter() {
            for error in errors {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, error)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
