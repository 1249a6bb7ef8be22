//! Role list extraction from a Terraform state document

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::StateError;
use crate::output_table::OutputTable;
use crate::types::StateDocument;

/// Output holding the control plane node addresses
pub const CONTROL_PLANE_OUTPUT: &str = "rke_control_plane_nodes";
/// Output holding the etcd node addresses
pub const ETCD_OUTPUT: &str = "rke_etcd_nodes";
/// Output holding the worker node addresses
pub const WORKER_OUTPUT: &str = "rke_worker_nodes";

/// Output names recognized by the extractor, in role priority order
pub const RECOGNIZED_OUTPUTS: [&str; 3] = [CONTROL_PLANE_OUTPUT, ETCD_OUTPUT, WORKER_OUTPUT];

/// Node addresses per cluster role, in the order the state file lists them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleLists {
    pub control_plane: Vec<String>,
    pub etcd: Vec<String>,
    pub worker: Vec<String>,
}

impl RoleLists {
    pub fn is_empty(&self) -> bool {
        self.control_plane.is_empty() && self.etcd.is_empty() && self.worker.is_empty()
    }
}

/// Read and parse a state file into its typed representation
pub fn read_state(path: &Path) -> Result<StateDocument, StateError> {
    debug!("Reading state file: {:?}", path);

    let content = fs::read_to_string(path).map_err(|source| StateError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_state(&content, path)
}

/// Parse state document text held in memory
pub fn parse_state_str(content: &str) -> Result<StateDocument, StateError> {
    parse_state(content, Path::new("<memory>"))
}

fn parse_state(content: &str, path: &Path) -> Result<StateDocument, StateError> {
    serde_json::from_str(content).map_err(|source| StateError::Parse {
        path: PathBuf::from(path),
        source,
    })
}

/// Select the three role lists from a state document.
///
/// Absent outputs yield empty lists, single values are wrapped into
/// one-element lists, and every other output is ignored.
pub fn extract(document: StateDocument) -> RoleLists {
    let mut table = OutputTable::from_document(document);
    debug!("State document exposes {} outputs", table.len());

    let mut take = |name: &str| {
        let addresses = table
            .take(name)
            .map(|value| value.into_list())
            .unwrap_or_default();
        debug!("Output '{}' yields {} addresses", name, addresses.len());
        addresses
    };

    let lists = RoleLists {
        control_plane: take(CONTROL_PLANE_OUTPUT),
        etcd: take(ETCD_OUTPUT),
        worker: take(WORKER_OUTPUT),
    };

    info!(
        "Extracted {} control plane, {} etcd and {} worker addresses",
        lists.control_plane.len(),
        lists.etcd.len(),
        lists.worker.len()
    );

    lists
}

/// Read a state file and extract its role lists
pub fn extract_from_path(path: &Path) -> Result<RoleLists, StateError> {
    read_state(path).map(extract)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn extract_str(content: &str) -> Result<RoleLists, StateError> {
        parse_state_str(content).map(extract)
    }

    #[test]
    fn test_extracts_all_three_roles() {
        let state = r#"{
            "version": 3,
            "modules": [{
                "path": ["root"],
                "outputs": {
                    "rke_control_plane_nodes": {"sensitive": false, "type": "list", "value": ["10.0.0.1"]},
                    "rke_etcd_nodes": {"sensitive": false, "type": "list", "value": ["10.0.0.1", "10.0.0.2"]},
                    "rke_worker_nodes": {"sensitive": false, "type": "list", "value": ["10.0.0.3"]}
                },
                "resources": {}
            }]
        }"#;
        let Ok(lists) = extract_str(state) else {
            panic!("state should parse");
        };
        assert_eq!(lists.control_plane, vec!["10.0.0.1"]);
        assert_eq!(lists.etcd, vec!["10.0.0.1", "10.0.0.2"]);
        assert_eq!(lists.worker, vec!["10.0.0.3"]);
    }

    #[test]
    fn test_absent_outputs_are_empty() {
        let Ok(lists) = extract_str(r#"{"modules": [{"outputs": {}}]}"#) else {
            panic!("state should parse");
        };
        assert!(lists.is_empty());
    }

    #[test]
    fn test_scalar_output_is_wrapped() {
        let state = r#"{"modules": [{"outputs": {"rke_worker_nodes": {"value": "10.0.0.9"}}}]}"#;
        let Ok(lists) = extract_str(state) else {
            panic!("state should parse");
        };
        assert_eq!(lists.worker, vec!["10.0.0.9"]);
        assert!(lists.control_plane.is_empty());
    }

    #[test]
    fn test_empty_list_output_is_legal() {
        let state = r#"{"modules": [{"outputs": {"rke_etcd_nodes": {"value": []}}}]}"#;
        let Ok(lists) = extract_str(state) else {
            panic!("state should parse");
        };
        assert!(lists.etcd.is_empty());
    }

    #[test]
    fn test_unrecognized_outputs_are_ignored() {
        let state = r#"{"modules": [{"outputs": {
            "other_output": {"value": ["10.9.9.9"]},
            "rke_worker_nodes": {"value": ["10.0.0.3"]}
        }}]}"#;
        let Ok(lists) = extract_str(state) else {
            panic!("state should parse");
        };
        assert_eq!(lists.worker, vec!["10.0.0.3"]);
        assert!(!lists.control_plane.contains(&"10.9.9.9".to_string()));
        assert!(!lists.etcd.contains(&"10.9.9.9".to_string()));
    }

    #[test]
    fn test_outputs_merge_across_modules_last_wins() {
        let state = r#"{"modules": [
            {"outputs": {"rke_worker_nodes": {"value": ["10.0.0.3"]}}},
            {"outputs": {"rke_etcd_nodes": {"value": ["10.0.0.2"]}}},
            {"outputs": {"rke_worker_nodes": {"value": ["10.0.0.4"]}}}
        ]}"#;
        let Ok(lists) = extract_str(state) else {
            panic!("state should parse");
        };
        assert_eq!(lists.etcd, vec!["10.0.0.2"]);
        assert_eq!(lists.worker, vec!["10.0.0.4"]);
    }

    #[test]
    fn test_missing_modules_is_parse_error() {
        let result = extract_str(r#"{"version": 3}"#);
        assert!(matches!(result, Err(StateError::Parse { .. })));
    }

    #[test]
    fn test_module_without_outputs_is_parse_error() {
        let result = extract_str(r#"{"modules": [{"path": ["root"]}]}"#);
        let Err(StateError::Parse { source, .. }) = result else {
            panic!("expected a parse error");
        };
        assert!(source.to_string().contains("outputs"));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let result = extract_str("not json");
        assert!(matches!(result, Err(StateError::Parse { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let result = extract_from_path(&temp_dir.path().join("missing.tfstate"));
        assert!(matches!(result, Err(StateError::Io { .. })));
    }

    #[test]
    fn test_extract_from_path() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let path = temp_dir.path().join("terraform.tfstate");
        let written = fs::write(
            &path,
            r#"{"modules": [{"outputs": {"rke_control_plane_nodes": {"value": "10.0.0.1"}}}]}"#,
        );
        assert!(written.is_ok(), "Failed to write state fixture");

        let result = extract_from_path(&path);
        assert!(result.is_ok_and(|lists| lists.control_plane == vec!["10.0.0.1"]));
    }
}
