//! Observable events emitted by the validator and the schema loader

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Construction
    /// Validator built from a schema
    ValidatorCreated,

    // Validation
    /// Candidate conformed
    ValidationPassed,
    /// Candidate did not conform (boolean false)
    ValidationFailed,
    /// Candidate rejected with an error
    ValidationRejected,
    /// Candidate carried a property the schema does not declare
    UnknownProperty,

    // Loading
    /// Schema added to a loader
    SchemaRegistered,
    /// Schema directory scanned
    SchemasLoaded,
    /// Schema file could not be read
    SchemaLoadFailed,
}

impl Event {
    /// Returns the event name written to logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ValidatorCreated => "VALIDATOR_CREATED",
            Event::ValidationPassed => "VALIDATION_PASSED",
            Event::ValidationFailed => "VALIDATION_FAILED",
            Event::ValidationRejected => "VALIDATION_REJECTED",
            Event::UnknownProperty => "UNKNOWN_PROPERTY",
            Event::SchemaRegistered => "SCHEMA_REGISTERED",
            Event::SchemasLoaded => "SCHEMAS_LOADED",
            Event::SchemaLoadFailed => "SCHEMA_LOAD_FAILED",
        }
    }

    /// Severity the event is logged at. Per-call events stay at TRACE.
    pub fn severity(&self) -> Severity {
        match self {
            Event::ValidatorCreated
            | Event::ValidationPassed
            | Event::ValidationFailed
            | Event::ValidationRejected
            | Event::UnknownProperty
            | Event::SchemaRegistered => Severity::Trace,
            Event::SchemasLoaded => Severity::Info,
            Event::SchemaLoadFailed => Severity::Warn,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
