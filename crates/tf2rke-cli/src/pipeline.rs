//! Read -> extract -> merge -> build pipeline shared by the commands

use std::path::Path;
use tracing::debug;

use tf2rke_manifest::{build, merge, ClusterDefaults, ClusterManifest, RoleSetMap};
use tf2rke_state::{extract, read_state, OutputTable, RECOGNIZED_OUTPUTS};

use crate::errors::CliError;
use crate::logger;

/// Nodes a state file describes, plus the outputs that were skipped
#[derive(Debug, Clone, Default)]
pub struct NodePreview {
    pub role_sets: RoleSetMap,
    pub ignored_outputs: Vec<String>,
}

/// Merge the role lists of a state file into per-node role sets
pub fn role_sets_from_state(state_file: &Path) -> Result<RoleSetMap, CliError> {
    logger::step(&format!("Reading state file {}", state_file.display()));
    let document = read_state(state_file)?;

    logger::step("Extracting role outputs");
    let lists = extract(document);

    logger::step("Merging roles per node");
    Ok(merge(&lists.control_plane, &lists.etcd, &lists.worker))
}

/// Build the cluster manifest for a state file. Nothing is written.
pub fn generate_manifest(
    state_file: &Path,
    ssh_key_file: &Path,
    defaults: &ClusterDefaults,
) -> Result<ClusterManifest, CliError> {
    let role_sets = role_sets_from_state(state_file)?;
    if role_sets.is_empty() {
        logger::warn(&format!(
            "No node addresses found in {}; the manifest will have no nodes",
            state_file.display()
        ));
    }

    logger::step("Building cluster manifest");
    Ok(build(&role_sets, ssh_key_file, defaults)?)
}

/// Collect the merged nodes and the unrecognized output names of a state file
pub fn preview_nodes(state_file: &Path) -> Result<NodePreview, CliError> {
    let document = read_state(state_file)?;

    let table = OutputTable::from_document(document.clone());
    let ignored_outputs: Vec<String> = table
        .names()
        .into_iter()
        .filter(|name| !RECOGNIZED_OUTPUTS.contains(name))
        .map(str::to_string)
        .collect();
    debug!("Ignoring {} unrecognized outputs", ignored_outputs.len());

    let lists = extract(document);
    Ok(NodePreview {
        role_sets: merge(&lists.control_plane, &lists.etcd, &lists.worker),
        ignored_outputs,
    })
}
