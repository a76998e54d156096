//! Manifest parsing functions

use super::schema::Manifest;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse manifest JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Manifest must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("Manifest not found: {0}")]
    NotFound(String),
}

/// Parse a manifest from a JSON file
pub fn parse_manifest_file(path: &Path) -> Result<Manifest, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::NotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_manifest_str(&content)
}

/// Parse a manifest from a JSON string
pub fn parse_manifest_str(content: &str) -> Result<Manifest, ManifestError> {
    let value: Value = serde_json::from_str(content)?;
    parse_manifest_value(value)
}

/// Parse a manifest from any reader (stdin for the CLI)
pub fn parse_manifest_reader(mut reader: impl Read) -> Result<Manifest, ManifestError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_manifest_str(&content)
}

/// Accept an already-decoded JSON value as a manifest
pub fn parse_manifest_value(value: Value) -> Result<Manifest, ManifestError> {
    match value {
        Value::Object(members) => Ok(Manifest::from_map(members)),
        other => Err(ManifestError::NotAnObject(json_kind(&other))),
    }
}

/// Human name of a JSON value's type, for error messages
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
