//! Raw document ingestion.
//!
//! The validator consumes a [`serde_json::Value`]; these helpers produce one
//! from authored text. JSON is the canonical wire format, YAML is accepted
//! as an authoring convenience and normalized into the same value tree.

use serde_json::Value;
use thiserror::Error;

/// Error from parsing authored document text.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Parses a JSON document into a raw value.
pub fn from_json_str(text: &str) -> Result<Value, InputError> {
    Ok(serde_json::from_str(text)?)
}

/// Parses a YAML document into the JSON value tree the validator consumes.
pub fn from_yaml_str(text: &str) -> Result<Value, InputError> {
    Ok(serde_yaml::from_str(text)?)
}
