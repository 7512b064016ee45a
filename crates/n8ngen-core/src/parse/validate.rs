//! Validation of OpenAPI documents against the official OpenAPI 3.0 and 3.1
//! JSON Schemas.
//!
//! Every violation is reported with a JSON pointer into the document instead
//! of stopping at the first one.

use std::sync::LazyLock;

use jsonschema::Validator;
use jsonschema::error::ValidationErrorKind;
use log::debug;
use serde_json::Value;

use crate::error::{ValidationError, ValidationIssue};

static OPENAPI_30: LazyLock<Validator> =
    LazyLock::new(|| compile(include_str!("../../schemas/openapi-3.0.json")));

static OPENAPI_31: LazyLock<Validator> =
    LazyLock::new(|| compile(include_str!("../../schemas/openapi-3.1.json")));

fn compile(source: &str) -> Validator {
    let schema: Value = serde_json::from_str(source).expect("bundled OpenAPI schema is JSON");
    jsonschema::validator_for(&schema).expect("bundled OpenAPI schema compiles")
}

/// Supported OpenAPI minor versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    V30,
    V31,
}

impl Version {
    fn validator(self) -> &'static Validator {
        match self {
            Version::V30 => &OPENAPI_30,
            Version::V31 => &OPENAPI_31,
        }
    }
}

/// Validate a parsed JSON value as an OpenAPI document.
///
/// The `openapi` field picks the schema. A missing or unsupported version is
/// reported on its own, since no schema applies.
pub fn validate(value: &Value) -> Result<(), ValidationError> {
    let version = detect_version(value).map_err(|issue| ValidationError {
        issues: vec![issue],
    })?;
    debug!("validating document against the OpenAPI {version:?} schema");

    let mut issues: Vec<ValidationIssue> = version
        .validator()
        .iter_errors(value)
        .map(|error| to_issue(&error))
        .collect();
    if issues.is_empty() {
        return Ok(());
    }

    issues.sort_by(|a, b| a.pointer.cmp(&b.pointer));
    issues.dedup();
    Err(ValidationError { issues })
}

fn detect_version(value: &Value) -> Result<Version, ValidationIssue> {
    let issue = |pointer: &str, message: String| ValidationIssue {
        pointer: pointer.to_string(),
        message,
    };

    let Some(root) = value.as_object() else {
        return Err(issue("", "document must be a JSON object".to_string()));
    };
    let raw = match root.get("openapi") {
        Some(Value::String(raw)) => raw,
        Some(_) => return Err(issue("/openapi", "`openapi` must be a string".to_string())),
        None => {
            return Err(issue(
                "/openapi",
                "missing required field `openapi`".to_string(),
            ));
        }
    };

    if raw.starts_with("3.0.") {
        Ok(Version::V30)
    } else if raw.starts_with("3.1.") {
        Ok(Version::V31)
    } else {
        Err(issue(
            "/openapi",
            format!("unsupported OpenAPI version {raw:?} (expected 3.0.x or 3.1.x)"),
        ))
    }
}

/// Missing required fields point at the field itself rather than its parent.
fn to_issue(error: &jsonschema::ValidationError<'_>) -> ValidationIssue {
    let pointer = error.instance_path.to_string();
    if let ValidationErrorKind::Required { property } = &error.kind {
        if let Some(name) = property.as_str() {
            return ValidationIssue {
                pointer: format!("{pointer}/{}", escape(name)),
                message: format!("missing required field `{name}`"),
            };
        }
    }
    ValidationIssue {
        pointer,
        message: error.to_string(),
    }
}

/// Escape a key for use as a JSON pointer segment (RFC 6901).
fn escape(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}
