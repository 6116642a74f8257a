//! shapecheck - a strict runtime object-shape validator
//!
//! ```
//! use serde_json::json;
//! use shapecheck::SchemaValidator;
//!
//! let validator = SchemaValidator::new(&json!({
//!     "name": { "type": "string", "length": { "greaterThan": 2 } },
//!     "age": { "type": "number" }
//! }))
//! .unwrap();
//!
//! assert_eq!(validator.valid(&json!({ "name": "Alice" })), Ok(true));
//! assert_eq!(validator.valid(&json!({ "age": "ten" })), Ok(false));
//! ```

pub mod observability;
pub mod schema;

pub use schema::{
    ConfigResult, ConfigurationError, ConstraintDescriptor, Schema, SchemaLoader,
    SchemaValidator, TypeTag, ValidationError, ValidationResult,
};
