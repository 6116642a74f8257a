//! Schema Loading Tests
//!
//! Schema documents on disk:
//! - One schema per `<name>.json` file
//! - Loaded schemas validate exactly like inline ones
//! - Construction rules apply to files too

use serde_json::json;
use shapecheck::schema::parse;
use shapecheck::{ConfigurationError, SchemaLoader, ValidationError};
use std::fs;
use tempfile::TempDir;

fn write_schema(dir: &TempDir, file: &str, body: &str) {
    fs::write(dir.path().join(file), body).unwrap();
}

#[test]
fn test_load_and_validate() {
    let tmp = TempDir::new().unwrap();
    write_schema(
        &tmp,
        "pets.json",
        r#"{
            "name": { "type": "string", "length": { "greaterThan": 8 } },
            "breed": { "type": "string", "length": { "greaterThan": 4 } },
            "age": { "type": "number" }
        }"#,
    );
    write_schema(&tmp, "notes.json", r#"{ "text": { "type": "string" } }"#);

    let mut loader = SchemaLoader::new(tmp.path());
    loader.load_all().unwrap();

    assert_eq!(loader.names(), vec!["notes", "pets"]);

    let pets = loader.validator("pets").unwrap();
    assert_eq!(
        pets.valid(&json!({ "age": 10, "name": "123456789", "breed": "12345" })),
        Ok(true)
    );
    assert!(matches!(
        pets.valid(&json!({ "name": "short" })),
        Err(ValidationError::TextTooShort { .. })
    ));
}

#[test]
fn test_empty_schema_file_rejected() {
    let tmp = TempDir::new().unwrap();
    write_schema(&tmp, "empty.json", "{}");

    let mut loader = SchemaLoader::new(tmp.path());
    assert_eq!(loader.load_all(), Err(ConfigurationError::InvalidInput));
}

#[test]
fn test_null_schema_file_rejected() {
    let tmp = TempDir::new().unwrap();
    write_schema(&tmp, "nothing.json", "null");

    let mut loader = SchemaLoader::new(tmp.path());
    assert_eq!(loader.load_all(), Err(ConfigurationError::InputRequired));
}

#[test]
fn test_invalid_json_rejected() {
    let tmp = TempDir::new().unwrap();
    write_schema(&tmp, "bad.json", "{ \"name\": ");

    let mut loader = SchemaLoader::new(tmp.path());
    let err = loader.load_all().unwrap_err();
    assert_eq!(err.code(), "SHAPE_MALFORMED_SCHEMA");
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn test_file_name_collides_with_registered_schema() {
    let tmp = TempDir::new().unwrap();
    write_schema(&tmp, "users.json", r#"{ "name": { "type": "string" } }"#);

    let mut loader = SchemaLoader::new(tmp.path());
    loader
        .register("users", parse("inline", r#"{ "id": { "type": "number" } }"#).unwrap())
        .unwrap();

    assert_eq!(
        loader.load_all(),
        Err(ConfigurationError::DuplicateSchema("users".into()))
    );
}

#[test]
fn test_retry_after_fixing_broken_file() {
    let tmp = TempDir::new().unwrap();
    write_schema(&tmp, "a.json", r#"{ "name": { "type": "string" } }"#);
    write_schema(&tmp, "b.json", r#"{ "age": { "type": "number", "length": "long" } }"#);

    let mut loader = SchemaLoader::new(tmp.path());
    assert!(matches!(
        loader.load_all(),
        Err(ConfigurationError::MalformedSchema { .. })
    ));
    assert_eq!(loader.schema_count(), 0);

    write_schema(&tmp, "b.json", r#"{ "age": { "type": "number" } }"#);
    loader.load_all().unwrap();
    assert_eq!(loader.names(), vec!["a", "b"]);

    // Loading again is idempotent
    loader.load_all().unwrap();
    assert_eq!(loader.schema_count(), 2);
}

#[test]
fn test_parse_keeps_null_descriptors() {
    let schema = parse("inline", r#"{ "testProperty": null }"#).unwrap();
    assert!(schema.contains("testProperty"));
    assert_eq!(schema.get("testProperty"), Some(None));
}
