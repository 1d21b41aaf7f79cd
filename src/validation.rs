//! Validation of incoming payloads.
//!
//! Create and update models implement [`Validatable`] so that values the database
//! would refuse (missing keys, strings longer than their column) are rejected
//! before a query is issued. Failures are reported to clients as a bare 400; the
//! collected messages only reach the logs.

use serde::Serialize;
use std::fmt;

/// Validation error with field name and message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Record the error of a failed check, if any.
    pub fn check(&mut self, result: Result<(), ValidationError>) {
        if let Err(error) = result {
            self.add(error);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Convert to Result
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one error was recorded.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Types that can check themselves before being written.
pub trait Validatable {
    /// # Errors
    ///
    /// Returns every failed check.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Helper validators mirroring column constraints
pub mod validators {
    use super::ValidationError;

    /// Value must contain something other than whitespace.
    ///
    /// # Errors
    ///
    /// Fails on empty or blank strings.
    pub fn validate_required(field: &str, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new(field, "This field is required"));
        }
        Ok(())
    }

    /// Character count must fit an `nchar(n)` / `nvarchar(n)` column.
    ///
    /// # Errors
    ///
    /// Fails when `value` holds more than `max` characters.
    pub fn validate_max_chars(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
        if value.chars().count() > max {
            return Err(ValidationError::new(
                field,
                format!("Must be at most {max} characters"),
            ));
        }
        Ok(())
    }

    /// Like [`validate_max_chars`] for nullable columns; `None` always passes.
    ///
    /// # Errors
    ///
    /// Fails when a present value is too long.
    pub fn validate_optional_max_chars(
        field: &str,
        value: Option<&str>,
        max: usize,
    ) -> Result<(), ValidationError> {
        value.map_or(Ok(()), |v| validate_max_chars(field, v, max))
    }
}
