//! Schema error types
//!
//! Error codes:
//! - SHAPE_INPUT_REQUIRED (configuration)
//! - SHAPE_INVALID_INPUT (configuration)
//! - SHAPE_MALFORMED_SCHEMA (configuration)
//! - SHAPE_DUPLICATE_SCHEMA (configuration)
//! - SHAPE_OBJECT_REQUIRED (validation)
//! - SHAPE_INVALID_OBJECT (validation)
//! - SHAPE_TEXT_TOO_SHORT (validation)

use thiserror::Error;

/// Result type for schema construction and loading
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Result type for candidate validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors raised while building a validator or loading a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// No schema supplied
    #[error("Input required")]
    InputRequired,

    /// Schema is not an object, or has no properties
    #[error("Invalid input")]
    InvalidInput,

    /// Schema document could not be read
    #[error("Malformed schema '{origin}': {reason}")]
    MalformedSchema { origin: String, reason: String },

    /// A schema with this name is already registered
    #[error("Schema '{0}' is already registered")]
    DuplicateSchema(String),
}

impl ConfigurationError {
    pub fn malformed(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigurationError::MalformedSchema {
            origin: origin.into(),
            reason: reason.into(),
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigurationError::InputRequired => "SHAPE_INPUT_REQUIRED",
            ConfigurationError::InvalidInput => "SHAPE_INVALID_INPUT",
            ConfigurationError::MalformedSchema { .. } => "SHAPE_MALFORMED_SCHEMA",
            ConfigurationError::DuplicateSchema(_) => "SHAPE_DUPLICATE_SCHEMA",
        }
    }
}

/// Errors raised while validating a candidate object.
///
/// Any of these aborts the `valid()` call; no partial result is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No candidate supplied
    #[error("Object required")]
    ObjectRequired,

    /// Candidate is not an object, or has no properties
    #[error("Invalid object")]
    InvalidObject,

    /// A length constraint was not met. `length` is `None` when the value
    /// has no length at all.
    #[error("Text too short: '{property}' must be longer than {}", threshold_label(.greater_than))]
    TextTooShort {
        property: String,
        length: Option<usize>,
        greater_than: Option<u64>,
    },
}

impl ValidationError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::ObjectRequired => "SHAPE_OBJECT_REQUIRED",
            ValidationError::InvalidObject => "SHAPE_INVALID_OBJECT",
            ValidationError::TextTooShort { .. } => "SHAPE_TEXT_TOO_SHORT",
        }
    }

    /// Returns the offending property, if the error concerns one
    pub fn property(&self) -> Option<&str> {
        match self {
            ValidationError::TextTooShort { property, .. } => Some(property.as_str()),
            _ => None,
        }
    }
}

fn threshold_label(greater_than: &Option<u64>) -> String {
    match greater_than {
        Some(threshold) => threshold.to_string(),
        None => "an unset threshold".to_string(),
    }
}
