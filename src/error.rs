//! Error types for the plan sanitizer.
//!
//! The redaction engine itself has exactly one failure mode, a missing plan.
//! Everything else in this hierarchy belongs to the plumbing around it:
//! loading configuration, decoding and encoding plan documents, and parsing
//! user input.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the plan sanitizer.
#[derive(Debug, Error)]
pub enum SanitizeError {
    /// No plan was supplied to the orchestrator.
    #[error("Missing plan: nil plan supplied")]
    MissingPlan,

    /// A before/after change mode could not be parsed.
    #[error("Invalid change mode {mode:?}: expected before or after")]
    InvalidChangeMode {
        /// The rejected mode string.
        mode: String,
    },

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Plan document errors.
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file was not found.
    #[error("Configuration file not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// The configuration file could not be parsed.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Optional source location.
        location: Option<String>,
    },

    /// Validation failed.
    #[error("Configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation error.
        message: String,
        /// Field that failed validation.
        field: Option<String>,
    },

    /// An environment variable held a value that could not be used.
    #[error("Invalid value for environment variable {name}: {message}")]
    InvalidEnvValue {
        /// Name of the variable.
        name: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Plan document errors.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The plan document could not be read.
    #[error("Failed to read plan document {path}: {message}")]
    ReadFailed {
        /// Path of the document (`-` for stdin).
        path: String,
        /// Description of the read failure.
        message: String,
    },

    /// The plan document is not valid plan JSON.
    #[error("Failed to parse plan document: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Optional source location.
        location: Option<String>,
    },

    /// The sanitized plan could not be encoded.
    #[error("Failed to serialize plan document: {message}")]
    SerializeFailed {
        /// Description of the serialization error.
        message: String,
    },
}

/// Result type alias for plan sanitizer operations.
pub type Result<T> = std::result::Result<T, SanitizeError>;

impl SanitizeError {
    /// Creates a new internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this error was caused by user input rather than an
    /// internal fault.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::MissingPlan | Self::InvalidChangeMode { .. } | Self::Config(_) | Self::Document(_)
        )
    }
}

impl ConfigError {
    /// Creates a validation error for a specific field.
    #[must_use]
    pub fn validation(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

impl DocumentError {
    /// Creates a parse error with an optional source location.
    #[must_use]
    pub fn parse(message: impl Into<String>, location: Option<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            location,
        }
    }

    /// Creates a serialization error with the given message.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializeFailed {
            message: message.into(),
        }
    }
}
