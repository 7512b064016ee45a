use std::fmt;

use serde::Serialize;

/// The node property type a descriptor is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    /// A selectable operation.
    Operation,
}

impl PropertyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::Operation => "operation",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node property derived from a (path, method) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationDescriptor {
    /// Operation summary, or `"<METHOD> <path>"`.
    pub label: String,
    /// Field name built from method and path; unique only as far as
    /// method + path are unique in the source document.
    pub identifier: String,
    pub kind: PropertyKind,
}

impl OperationDescriptor {
    pub fn new(method: &str, path: &str, summary: Option<&str>) -> Self {
        let label = match summary {
            Some(summary) => summary.to_string(),
            None => format!("{} {}", method.to_uppercase(), path),
        };
        Self {
            label,
            identifier: identifier(method, path),
            kind: PropertyKind::Operation,
        }
    }
}

/// Build `<method>_<path>` with `/` turned into `_`, braces removed, and
/// anything else outside `[A-Za-z0-9_]` turned into `_`.
///
/// - `get /ping` → `get__ping`
/// - `delete /pets/{petId}` → `delete__pets_petId`
/// - `get /v1.2/item-list` → `get__v1_2_item_list`
fn identifier(method: &str, path: &str) -> String {
    let slug: String = path
        .chars()
        .filter(|c| !matches!(c, '{' | '}'))
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let method: String = method
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{method}_{slug}")
}
