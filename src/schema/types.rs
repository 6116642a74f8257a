//! Schema type definitions
//!
//! A schema document is a JSON object mapping property names to descriptors:
//!
//! ```json
//! {
//!   "name": { "type": "string", "length": { "greaterThan": 8 } },
//!   "age": { "type": "number" },
//!   "notes": null
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Runtime type tags a property may be constrained to.
///
/// Tags follow `typeof`: arrays and `null` are objects. Any other tag name
/// is kept as `Other` and matches no value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeTag {
    String,
    Number,
    Boolean,
    Object,
    Other(String),
}

impl TypeTag {
    /// Returns the runtime type tag of a JSON value
    pub fn of(value: &Value) -> TypeTag {
        match value {
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::Null | Value::Array(_) | Value::Object(_) => TypeTag::Object,
        }
    }

    /// Returns the type name for error messages and logs
    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::String => "string",
            TypeTag::Number => "number",
            TypeTag::Boolean => "boolean",
            TypeTag::Object => "object",
            TypeTag::Other(name) => name,
        }
    }
}

impl From<String> for TypeTag {
    fn from(name: String) -> Self {
        match name.as_str() {
            "string" => TypeTag::String,
            "number" => TypeTag::Number,
            "boolean" => TypeTag::Boolean,
            "object" => TypeTag::Object,
            _ => TypeTag::Other(name),
        }
    }
}

impl From<TypeTag> for String {
    fn from(tag: TypeTag) -> Self {
        match tag {
            TypeTag::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// Strict lower bound on a value's length. A constraint without a
/// threshold admits nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthConstraint {
    #[serde(rename = "greaterThan", default, skip_serializing_if = "Option::is_none")]
    pub greater_than: Option<u64>,
}

impl LengthConstraint {
    pub fn greater_than(threshold: u64) -> Self {
        Self {
            greater_than: Some(threshold),
        }
    }

    /// Checks a measured length against the threshold.
    ///
    /// A value without a length never satisfies the constraint.
    pub fn admits(&self, length: Option<usize>) -> bool {
        match (length, self.greater_than) {
            (Some(len), Some(threshold)) => len as u64 > threshold,
            _ => false,
        }
    }
}

/// Length of a JSON value, if it has one.
///
/// Strings count UTF-16 code units, arrays count elements.
pub fn value_length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.encode_utf16().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// Per-property constraints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintDescriptor {
    /// Expected type. A descriptor without one matches no value.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_tag: Option<TypeTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<LengthConstraint>,
}

impl ConstraintDescriptor {
    /// Descriptor requiring the given type
    pub fn of(type_tag: TypeTag) -> Self {
        Self {
            type_tag: Some(type_tag),
            length: None,
        }
    }

    pub fn string() -> Self {
        Self::of(TypeTag::String)
    }

    pub fn number() -> Self {
        Self::of(TypeTag::Number)
    }

    pub fn boolean() -> Self {
        Self::of(TypeTag::Boolean)
    }

    /// Adds a `greaterThan` length constraint
    pub fn longer_than(mut self, threshold: u64) -> Self {
        self.length = Some(LengthConstraint::greater_than(threshold));
        self
    }
}

/// Property names mapped to their descriptors. A `None` descriptor
/// permits the property without constraining it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    properties: HashMap<String, Option<ConstraintDescriptor>>,
}

impl Schema {
    pub fn new(properties: HashMap<String, Option<ConstraintDescriptor>>) -> Self {
        Self { properties }
    }

    /// Adds a property, builder style
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        descriptor: impl Into<Option<ConstraintDescriptor>>,
    ) -> Self {
        self.properties.insert(name.into(), descriptor.into());
        self
    }

    /// Adds a property with no descriptor
    pub fn with_unconstrained(mut self, name: impl Into<String>) -> Self {
        self.properties.insert(name.into(), None);
        self
    }

    /// Looks up a property. The outer `Option` is presence in the schema,
    /// the inner one is the descriptor.
    pub fn get(&self, name: &str) -> Option<Option<&ConstraintDescriptor>> {
        self.properties.get(name).map(Option::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}
