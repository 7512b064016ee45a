use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info};
use serde_json::Value;

use crate::config::{StarterConfig, StarterStrategy};
use crate::error::StarterError;

/// Provides a local directory holding a starter template tree.
pub trait StarterSource {
    /// Make the starter tree available, using `scratch` for anything that
    /// has to be fetched. The returned directory must outlive the run only as
    /// long as `scratch` does.
    fn fetch(&self, scratch: &Path) -> Result<PathBuf, StarterError>;
}

/// Clones a git repository with the `git` executable.
#[derive(Debug, Clone)]
pub struct GitStarter {
    pub url: String,
    pub reference: Option<String>,
}

impl StarterSource for GitStarter {
    fn fetch(&self, scratch: &Path) -> Result<PathBuf, StarterError> {
        let target = scratch.join("starter");
        info!("cloning starter {} into {}", self.url, target.display());

        let mut cmd = Command::new("git");
        cmd.args(["clone", "--depth", "1", "--quiet"]);
        if let Some(ref reference) = self.reference {
            cmd.args(["--branch", reference]);
        }
        cmd.arg(&self.url).arg(&target);

        let output = cmd.output().map_err(|e| StarterError::Clone {
            url: self.url.clone(),
            reason: format!("could not run git: {e}"),
        })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StarterError::Clone {
                url: self.url.clone(),
                reason: format!("git exited with {}: {}", output.status, stderr.trim()),
            });
        }
        Ok(target)
    }
}

/// Uses a directory that is already on disk.
#[derive(Debug, Clone)]
pub struct LocalStarter {
    pub path: PathBuf,
}

impl StarterSource for LocalStarter {
    fn fetch(&self, _scratch: &Path) -> Result<PathBuf, StarterError> {
        if !self.path.is_dir() {
            return Err(StarterError::MissingDirectory(self.path.clone()));
        }
        debug!("using local starter {}", self.path.display());
        Ok(self.path.clone())
    }
}

/// Build the starter source selected by `config`, or `None` for no starter tree.
pub fn from_config(
    config: &StarterConfig,
) -> Result<Option<Box<dyn StarterSource>>, StarterError> {
    match config.strategy {
        StarterStrategy::Git => Ok(Some(Box::new(GitStarter {
            url: config.url.clone(),
            reference: config.reference.clone(),
        }))),
        StarterStrategy::Local => {
            let path = config.path.clone().ok_or(StarterError::MissingPath)?;
            Ok(Some(Box::new(LocalStarter { path })))
        }
        StarterStrategy::None => Ok(None),
    }
}

/// Read `devDependencies` from the starter tree's `package.json`.
///
/// Returns `None` when the tree has no `package.json` or the key is absent.
pub fn read_dev_dependencies(dir: &Path) -> Result<Option<Value>, StarterError> {
    let path = dir.join("package.json");
    if !path.exists() {
        return Ok(None);
    }
    let manifest_err = |reason: String| StarterError::Manifest {
        path: path.clone(),
        reason,
    };
    let content = fs::read_to_string(&path).map_err(|e| manifest_err(e.to_string()))?;
    let manifest: Value =
        serde_json::from_str(&content).map_err(|e| manifest_err(e.to_string()))?;
    Ok(manifest.get("devDependencies").cloned())
}
