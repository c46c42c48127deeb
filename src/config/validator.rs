//! Configuration validation.

use crate::error::{ConfigError, Result, SanitizeError};
use serde_json::Value;
use tracing::debug;

use super::spec::SanitizerConfig;

/// Validator for sanitizer configurations.
#[derive(Debug, Default)]
pub struct ConfigValidator;

/// Validation result containing all errors found.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of warnings (non-fatal issues).
    pub warnings: Vec<String>,
}

/// A single validation error.
#[derive(Debug)]
pub struct ValidationError {
    /// The field path that failed validation.
    pub field: String,
    /// The error message.
    pub message: String,
}

impl ConfigValidator {
    /// Creates a new validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates a sanitizer configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation error if validation fails.
    pub fn validate(&self, config: &SanitizerConfig) -> Result<ValidationResult> {
        let mut result = ValidationResult::default();

        Self::validate_replacement(&config.replacement, &mut result);

        match result.errors.first() {
            None => {
                debug!("Configuration validation passed");
                Ok(result)
            }
            Some(first_error) => Err(SanitizeError::Config(ConfigError::validation(
                first_error.message.clone(),
                first_error.field.clone(),
            ))),
        }
    }

    /// Validates the replacement value.
    fn validate_replacement(replacement: &Value, result: &mut ValidationResult) {
        match replacement {
            // Null values are never redacted, so a null replacement could not
            // be told apart from a value that was null to begin with.
            Value::Null => result.errors.push(ValidationError {
                field: String::from("replacement"),
                message: String::from("Replacement cannot be null"),
            }),
            Value::String(s) if s.is_empty() => result.warnings.push(String::from(
                "Replacement is an empty string; redacted values will look blank",
            )),
            Value::Array(_) | Value::Object(_) => result.warnings.push(String::from(
                "Replacement is a structured value; consumers may mistake it for real data",
            )),
            _ => {}
        }
    }
}

impl ValidationResult {
    /// Returns true if there are no errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
