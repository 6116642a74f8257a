//! Schema subsystem
//!
//! A schema maps property names to constraint descriptors. A validator
//! checks candidate objects against it.
//!
//! # Rules
//!
//! - Schemas are non-empty and immutable once built
//! - Only properties present on a candidate are checked
//! - Type matching is exact, with no coercion
//! - Unknown properties make a candidate invalid without raising
//! - Failed length constraints raise and abort validation

mod errors;
mod loader;
mod types;
mod validator;

pub use errors::{ConfigResult, ConfigurationError, ValidationError, ValidationResult};
pub use loader::{parse, SchemaLoader};
pub use types::{value_length, ConstraintDescriptor, LengthConstraint, Schema, TypeTag};
pub use validator::SchemaValidator;
