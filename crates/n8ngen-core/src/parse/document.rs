use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Operation keys allowed in a path item, in the order OpenAPI lists them.
pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

pub fn is_http_method(key: &str) -> bool {
    HTTP_METHODS.contains(&key)
}

/// Info object describing the API. Only the fields the CLI reports are kept;
/// the rest is checked by schema validation and then dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub version: String,
}

/// An API operation. Only the summary feeds a descriptor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// A path item. Operations stay in the order the document lists them.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "IndexMap<String, Value>")]
pub struct PathItem {
    /// HTTP method (lowercase, as written) to operation.
    pub operations: IndexMap<String, Operation>,
}

impl TryFrom<IndexMap<String, Value>> for PathItem {
    type Error = serde_json::Error;

    fn try_from(raw: IndexMap<String, Value>) -> Result<Self, Self::Error> {
        let mut item = PathItem::default();
        for (key, value) in raw {
            // summary, $ref, servers, parameters and x- extensions carry nothing we emit
            if is_http_method(&key) {
                let operation: Operation = serde_json::from_value(value)?;
                item.operations.insert(key, operation);
            }
        }
        Ok(item)
    }
}

/// Top-level OpenAPI 3.x document.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OpenApiDocument {
    #[serde(default)]
    pub openapi: String,

    #[serde(default)]
    pub info: Option<Info>,

    #[serde(default, deserialize_with = "deserialize_paths")]
    pub paths: IndexMap<String, PathItem>,
}

impl OpenApiDocument {
    /// Build a document from a JSON value without schema validation.
    ///
    /// Accepts bare fragments such as `{"paths": {...}}`. Use
    /// [`crate::parse::from_value`] for untrusted input.
    pub fn from_value_unchecked(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Number of operations across all paths.
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|item| item.operations.len()).sum()
    }
}

/// Deserialize `paths`, dropping `x-` extension entries.
fn deserialize_paths<'de, D>(deserializer: D) -> Result<IndexMap<String, PathItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: IndexMap<String, Value> = IndexMap::deserialize(deserializer)?;
    raw.into_iter()
        .filter(|(key, _)| !key.starts_with("x-"))
        .map(|(key, value)| {
            serde_json::from_value::<PathItem>(value)
                .map(|item| (key, item))
                .map_err(serde::de::Error::custom)
        })
        .collect()
}
