//! Object-shape validator
//!
//! Validation semantics:
//! - Only properties present on the candidate are checked
//! - A property unknown to the schema makes the result `false`
//! - A property's runtime type must exactly match its descriptor's type
//! - A failed length constraint aborts validation with an error
//! - Properties are checked in candidate order; once the result is
//!   `false` the remaining properties are not evaluated

use serde::Deserialize;
use serde_json::{Map, Value};

use super::errors::{ConfigResult, ConfigurationError, ValidationError, ValidationResult};
use super::types::{value_length, ConstraintDescriptor, Schema, TypeTag};
use crate::observability::{event_enabled, log_event_with_fields, Event};

/// Validator holding an immutable, non-empty schema.
///
/// `valid` takes `&self` and touches no shared state, so one validator may
/// be used from many threads at once.
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    schema: Schema,
}

impl SchemaValidator {
    /// Builds a validator from a JSON schema document.
    ///
    /// # Errors
    ///
    /// - `InputRequired` if the document is falsy (`null`, `false`, `0`, `""`)
    /// - `InvalidInput` if it is not an object or has no properties
    /// - `MalformedSchema` if a descriptor cannot be read
    pub fn new(schema: &Value) -> ConfigResult<Self> {
        Self::from_schema(parse_schema("<inline>", schema)?)
    }

    /// Builds a validator from an already-typed schema.
    pub fn from_schema(schema: Schema) -> ConfigResult<Self> {
        if schema.is_empty() {
            return Err(ConfigurationError::InvalidInput);
        }

        if event_enabled(Event::ValidatorCreated) {
            log_event_with_fields(
                Event::ValidatorCreated,
                &[("properties", schema.len().to_string().as_str())],
            );
        }

        Ok(Self { schema })
    }

    /// Returns the schema this validator enforces
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Checks a candidate object against the schema.
    ///
    /// # Errors
    ///
    /// - `ObjectRequired` if the candidate is falsy
    /// - `InvalidObject` if it is not an object or has no properties
    /// - `TextTooShort` if a length constraint fails
    pub fn valid(&self, candidate: &Value) -> ValidationResult<bool> {
        if is_falsy(candidate) {
            return Err(reject(ValidationError::ObjectRequired));
        }

        let obj = candidate
            .as_object()
            .ok_or_else(|| reject(ValidationError::InvalidObject))?;

        self.valid_object(obj)
    }

    /// Checks an already-extracted JSON object against the schema.
    pub fn valid_object(&self, candidate: &Map<String, Value>) -> ValidationResult<bool> {
        if candidate.is_empty() {
            return Err(reject(ValidationError::InvalidObject));
        }

        for (key, value) in candidate {
            let accepted = match self.schema.get(key) {
                Some(descriptor) => validate_item(key, value, descriptor).map_err(reject)?,
                None => {
                    log_event_with_fields(Event::UnknownProperty, &[("property", key.as_str())]);
                    false
                }
            };

            if !accepted {
                log_event_with_fields(Event::ValidationFailed, &[("property", key.as_str())]);
                return Ok(false);
            }
        }

        if event_enabled(Event::ValidationPassed) {
            log_event_with_fields(
                Event::ValidationPassed,
                &[("properties", candidate.len().to_string().as_str())],
            );
        }
        Ok(true)
    }
}

/// Reads a schema document, applying the construction rules.
pub(crate) fn parse_schema(origin: &str, document: &Value) -> ConfigResult<Schema> {
    if is_falsy(document) {
        return Err(ConfigurationError::InputRequired);
    }

    match document.as_object() {
        Some(obj) if !obj.is_empty() => {}
        _ => return Err(ConfigurationError::InvalidInput),
    }

    Schema::deserialize(document)
        .map_err(|e| ConfigurationError::malformed(origin, e.to_string()))
}

/// Checks one candidate value against its descriptor.
///
/// The type check produces the result; the length check can only pass
/// through or fail with an error.
fn validate_item(
    property: &str,
    value: &Value,
    descriptor: Option<&ConstraintDescriptor>,
) -> ValidationResult<bool> {
    // No descriptor means no type to match
    let Some(descriptor) = descriptor else {
        return Ok(false);
    };

    let type_matches = descriptor.type_tag == Some(TypeTag::of(value));

    if let Some(constraint) = &descriptor.length {
        let length = value_length(value);
        if !constraint.admits(length) {
            return Err(ValidationError::TextTooShort {
                property: property.to_string(),
                length,
                greater_than: constraint.greater_than,
            });
        }
    }

    Ok(type_matches)
}

/// JSON values that count as "absent"
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn reject(err: ValidationError) -> ValidationError {
    if event_enabled(Event::ValidationRejected) {
        log_event_with_fields(
            Event::ValidationRejected,
            &[("code", err.code()), ("reason", err.to_string().as_str())],
        );
    }
    err
}
