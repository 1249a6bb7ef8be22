use std::io;
use thiserror::Error;

/// Errors that can occur while building or persisting a cluster manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Cannot resolve SSH key path: {0}")]
    PathResolution(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("Failed to parse manifest: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("Unknown service '{0}'")]
    UnknownService(String),
}
