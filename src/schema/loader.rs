//! Schema loader for named schema documents
//!
//! - One schema per `<name>.json` file in the schema directory
//! - Non-JSON files are skipped
//! - A missing directory holds zero schemas
//! - A directory load commits all of its schemas or none of them
//! - Names registered in code are immutable; reloading the directory
//!   replaces the schemas it loaded before

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::errors::{ConfigResult, ConfigurationError};
use super::types::Schema;
use super::validator::{parse_schema, SchemaValidator};
use crate::observability::{log_event_with_fields, Event};

/// Parses a JSON schema document.
///
/// `origin` names the document in error messages.
pub fn parse(origin: &str, text: &str) -> ConfigResult<Schema> {
    let document: Value = serde_json::from_str(text)
        .map_err(|e| ConfigurationError::malformed(origin, format!("Invalid JSON: {}", e)))?;
    parse_schema(origin, &document)
}

/// Reads a single schema file, named by its file stem.
fn read_schema_file(path: &Path) -> ConfigResult<(String, Schema)> {
    let origin = path.display().to_string();

    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| ConfigurationError::malformed(&origin, "File name is not valid UTF-8"))?
        .to_string();

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigurationError::malformed(&origin, format!("Failed to read file: {}", e)))?;

    let schema = parse(&origin, &content)?;
    Ok((name, schema))
}

/// Registry of named schemas, optionally backed by a directory.
pub struct SchemaLoader {
    schema_dir: PathBuf,
    schemas: HashMap<String, Schema>,
    /// Names that came from the schema directory
    loaded_names: HashSet<String>,
}

impl SchemaLoader {
    /// Creates a loader reading schema files from `schema_dir`.
    pub fn new(schema_dir: impl Into<PathBuf>) -> Self {
        Self {
            schema_dir: schema_dir.into(),
            schemas: HashMap::new(),
            loaded_names: HashSet::new(),
        }
    }

    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Loads every `*.json` file in the schema directory.
    ///
    /// Every file is parsed before anything is committed, so a failure
    /// leaves the loader unchanged.
    pub fn load_all(&mut self) -> ConfigResult<()> {
        let staged = self.read_schema_dir()?;

        for name in staged.keys() {
            if self.schemas.contains_key(name) && !self.loaded_names.contains(name) {
                return Err(ConfigurationError::DuplicateSchema(name.clone()));
            }
        }

        for name in self.loaded_names.drain() {
            self.schemas.remove(&name);
        }
        for (name, schema) in staged {
            self.loaded_names.insert(name.clone());
            self.schemas.insert(name, schema);
        }

        log_event_with_fields(
            Event::SchemasLoaded,
            &[
                ("dir", self.schema_dir.display().to_string().as_str()),
                ("count", self.loaded_names.len().to_string().as_str()),
            ],
        );
        Ok(())
    }

    fn read_schema_dir(&self) -> ConfigResult<HashMap<String, Schema>> {
        let mut staged = HashMap::new();
        if !self.schema_dir.exists() {
            return Ok(staged);
        }

        let dir_error = |e: std::io::Error| {
            ConfigurationError::malformed(
                self.schema_dir.display().to_string(),
                format!("Failed to read schema directory: {}", e),
            )
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.schema_dir).map_err(dir_error)? {
            let path = entry.map_err(dir_error)?.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                paths.push(path);
            }
        }
        // Deterministic load order
        paths.sort();

        for path in &paths {
            match read_schema_file(path) {
                Ok((name, schema)) => {
                    staged.insert(name, schema);
                }
                Err(e) => {
                    log_event_with_fields(
                        Event::SchemaLoadFailed,
                        &[("origin", path.display().to_string().as_str()), ("code", e.code())],
                    );
                    return Err(e);
                }
            }
        }

        Ok(staged)
    }

    /// Registers a schema under a name.
    pub fn register(&mut self, name: impl Into<String>, schema: Schema) -> ConfigResult<()> {
        let name = name.into();

        if schema.is_empty() {
            return Err(ConfigurationError::InvalidInput);
        }
        if self.schemas.contains_key(&name) {
            return Err(ConfigurationError::DuplicateSchema(name));
        }

        log_event_with_fields(Event::SchemaRegistered, &[("name", name.as_str())]);
        self.schemas.insert(name, schema);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Returns registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// Builds a validator for a registered schema.
    pub fn validator(&self, name: &str) -> Option<SchemaValidator> {
        let schema = self.schemas.get(name)?.clone();
        SchemaValidator::from_schema(schema).ok()
    }
}
