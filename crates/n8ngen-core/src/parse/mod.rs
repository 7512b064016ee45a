pub mod document;
pub mod validate;

use std::fs;
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::error::{LoadError, ValidationError, ValidationIssue};
pub use document::{HTTP_METHODS, Info, OpenApiDocument, Operation, PathItem};

/// Load and validate an OpenAPI document from a JSON file.
pub fn load(path: &Path) -> Result<OpenApiDocument, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", content.len(), path.display());
    from_json(&content)
}

/// Parse and validate an OpenAPI document from a JSON string.
pub fn from_json(input: &str) -> Result<OpenApiDocument, LoadError> {
    let value: Value = serde_json::from_str(input)?;
    Ok(from_value(value)?)
}

/// Validate an already-parsed JSON value and convert it into a document.
pub fn from_value(value: Value) -> Result<OpenApiDocument, ValidationError> {
    validate::validate(&value)?;
    serde_json::from_value(value).map_err(|e| ValidationError {
        issues: vec![ValidationIssue {
            pointer: String::new(),
            message: e.to_string(),
        }],
    })
}
