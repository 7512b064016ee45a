use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Starter repository cloned when no other starter is configured.
pub const DEFAULT_STARTER_URL: &str = "https://github.com/n8n-io/n8n-nodes-starter.git";

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".n8ngen.yaml";

/// Top-level project configuration loaded from `.n8ngen.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct N8ngenConfig {
    /// Directory (relative to the output root) holding `nodes/` and `credentials/`.
    pub source_dir: String,
    /// Whether to emit an `index.ts` that registers the node type.
    pub index: bool,
    pub starter: StarterConfig,
    pub package: PackageConfig,
}

impl Default for N8ngenConfig {
    fn default() -> Self {
        Self {
            source_dir: "src".to_string(),
            index: true,
            starter: StarterConfig::default(),
            package: PackageConfig::default(),
        }
    }
}

/// Where the starter template tree comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarterStrategy {
    /// Clone a git repository into a scratch directory.
    #[default]
    Git,
    /// Copy a directory that already exists locally.
    Local,
    /// No starter tree; only the generated files are written.
    None,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarterConfig {
    pub strategy: StarterStrategy,
    /// Repository URL for [`StarterStrategy::Git`].
    pub url: String,
    /// Branch or tag to clone; the remote default branch when unset.
    pub reference: Option<String>,
    /// Directory for [`StarterStrategy::Local`].
    pub path: Option<PathBuf>,
}

impl Default for StarterConfig {
    fn default() -> Self {
        Self {
            strategy: StarterStrategy::Git,
            url: DEFAULT_STARTER_URL.to_string(),
            reference: None,
            path: None,
        }
    }
}

/// Metadata written into the generated `package.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    pub version: String,
    pub license: String,
    pub author_name: String,
    pub author_email: String,
    /// Repository URL; a placeholder is written when unset.
    pub repository: Option<String>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            license: "MIT".to_string(),
            author_name: String::new(),
            author_email: String::new(),
            repository: None,
        }
    }
}

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<N8ngenConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# n8ngen configuration
source_dir: src       # where nodes/ and credentials/ are written ("" = output root)
index: true           # emit <source_dir>/index.ts registering the node type

starter:
  strategy: git       # git | local | none
  url: https://github.com/n8n-io/n8n-nodes-starter.git
  # reference: master   # branch or tag to clone
  # path: ../my-starter # directory used by the `local` strategy

package:
  version: 0.1.0
  license: MIT
  author_name: ""
  author_email: ""
  # repository: https://github.com/you/n8n-nodes-your-api.git
"#
}
