//! Centralized error type for the tf2rke binary

use std::io;
use thiserror::Error;

use tf2rke_config::ConfigError;
use tf2rke_manifest::ManifestError;
use tf2rke_state::StateError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use crate::errors::*;

    #[test]
    fn test_errors_are_transparent() {
        let err = CliError::from(ConfigError::UnknownKey("cache-path".to_string()));
        assert_eq!(err.to_string(), "Unknown config key 'cache-path'");

        let err = CliError::from(ManifestError::PathResolution("SSH key path is empty".to_string()));
        assert_eq!(
            err.to_string(),
            "Cannot resolve SSH key path: SSH key path is empty"
        );
    }
}
