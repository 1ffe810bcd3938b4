//! Error types for the manifest module.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for manifest operations.
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Errors that can occur while loading, validating, or querying a manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Validation(String),

    #[error("environment not found: {0}")]
    EnvironmentNotFound(String),

    #[error("manifest declares no environments")]
    NoEnvironments,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
