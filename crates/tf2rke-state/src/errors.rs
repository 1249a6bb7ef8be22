use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a provisioning state document
#[derive(Error, Debug)]
pub enum StateError {
    #[error("Failed to read state file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse state file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use crate::errors::*;

    #[test]
    fn test_parse_error_display_names_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").err();
        let Some(source) = source else {
            return;
        };
        let err = StateError::Parse {
            path: PathBuf::from("terraform.tfstate"),
            source,
        };
        assert!(err
            .to_string()
            .starts_with("Failed to parse state file terraform.tfstate:"));
    }
}
