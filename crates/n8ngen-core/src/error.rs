use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a file on disk into a validated OpenAPI document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A single schema violation, located by JSON pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub pointer: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pointer = if self.pointer.is_empty() {
            "/"
        } else {
            &self.pointer
        };
        write!(f, "{pointer}: {}", self.message)
    }
}

/// All schema violations found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OpenAPI document failed validation ({} issue{})",
            self.issues.len(),
            if self.issues.len() == 1 { "" } else { "s" }
        )?;
        for issue in &self.issues {
            write!(f, "\n  - {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error(
        "invalid node name {0:?}: it should start with a letter or underscore and contain only letters, numbers, and underscores"
    )]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("output directory {} already exists", .0.display())]
    OutputExists(PathBuf),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk starter tree: {0}")]
    Walk(#[from] walkdir::Error),
}

#[derive(Debug, Error)]
pub enum StarterError {
    #[error("failed to clone starter repository {url}: {reason}")]
    Clone { url: String, reason: String },

    #[error("starter directory {} does not exist", .0.display())]
    MissingDirectory(PathBuf),

    #[error("the local starter strategy requires a starter path")]
    MissingPath,

    #[error("failed to read starter manifest {}: {reason}", .path.display())]
    Manifest { path: PathBuf, reason: String },
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to render {template}: {reason}")]
    Render { template: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}
