use minijinja::context;
use n8ngen_core::GeneratorError;
use n8ngen_core::config::PackageConfig;
use n8ngen_core::name::PluginName;
use serde_json::{Value, json};

use super::render_template;

/// Repository URL written when none is configured.
pub const PLACEHOLDER_REPOSITORY: &str = "https://github.com/<...>/n8n-nodes-<...>.git";

/// Values for the `package.json` template besides the plugin name.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestOptions {
    pub version: String,
    pub license: String,
    pub author_name: String,
    pub author_email: String,
    pub repository: Option<String>,
    /// `devDependencies` object; [`default_dev_dependencies`] when `None`.
    pub dev_dependencies: Option<Value>,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self::from_package(&PackageConfig::default(), None)
    }
}

impl ManifestOptions {
    pub fn from_package(package: &PackageConfig, dev_dependencies: Option<Value>) -> Self {
        Self {
            version: package.version.clone(),
            license: package.license.clone(),
            author_name: package.author_name.clone(),
            author_email: package.author_email.clone(),
            repository: package.repository.clone(),
            dev_dependencies,
        }
    }
}

/// Development dependencies used when no starter tree provides them.
pub fn default_dev_dependencies() -> Value {
    json!({
        "@typescript-eslint/parser": "~5.45",
        "eslint-plugin-n8n-nodes-base": "^1.11.0",
        "gulp": "^4.0.2",
        "n8n-workflow": "*",
        "prettier": "^2.7.1",
        "typescript": "~4.8.4"
    })
}

/// Emit `package.json`.
///
/// Free-text values are JSON-encoded so configured metadata cannot break the
/// manifest; the plugin name is already identifier-safe.
pub fn emit_manifest(
    name: &PluginName,
    options: &ManifestOptions,
) -> Result<String, GeneratorError> {
    let dev_dependencies = options
        .dev_dependencies
        .clone()
        .unwrap_or_else(default_dev_dependencies);
    let repository = options
        .repository
        .as_deref()
        .unwrap_or(PLACEHOLDER_REPOSITORY);

    render_template(
        "package.json.j2",
        include_str!("../../templates/package.json.j2"),
        context! {
            name => name.as_str(),
            package_name => name.lowercase(),
            version => json_string(&options.version),
            license => json_string(&options.license),
            author_name => json_string(&options.author_name),
            author_email => json_string(&options.author_email),
            repository => json_string(repository),
            dev_dependencies => nested_json(&dev_dependencies),
        },
    )
}

fn json_string(value: &str) -> String {
    Value::from(value).to_string()
}

/// Pretty-print `value` for a slot one level deep in the manifest.
fn nested_json(value: &Value) -> String {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    pretty.replace('\n', "\n  ")
}
