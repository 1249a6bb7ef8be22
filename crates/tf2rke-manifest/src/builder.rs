//! Projection of merged role sets into a cluster manifest

use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

use crate::defaults::ClusterDefaults;
use crate::errors::ManifestError;
use crate::role_set::RoleSetMap;
use crate::types::{ClusterManifest, NetworkConfig, NodeRecord, NODE_USER};

/// Build the cluster manifest for a set of nodes.
///
/// Nodes keep the order of `role_sets` and list their roles in
/// controlplane, etcd, worker order. The service images and network plugin
/// come from `defaults`. Only the SSH key path resolution can fail.
pub fn build(
    role_sets: &RoleSetMap,
    ssh_key_file: &Path,
    defaults: &ClusterDefaults,
) -> Result<ClusterManifest, ManifestError> {
    let ssh_key_path = resolve_key_path(ssh_key_file)?;
    debug!("Resolved SSH key path: {}", ssh_key_path);

    let nodes: Vec<NodeRecord> = role_sets
        .iter()
        .map(|(address, roles)| NodeRecord {
            address: address.to_string(),
            user: NODE_USER.to_string(),
            role: roles.iter().copied().collect(),
        })
        .collect();

    info!("Built manifest with {} nodes", nodes.len());

    Ok(ClusterManifest {
        nodes,
        network: NetworkConfig {
            plugin: defaults.network_plugin().to_string(),
        },
        ssh_key_path,
        services: defaults.images.clone(),
    })
}

/// Make the key path absolute against the current directory.
///
/// The key file itself is not required to exist.
pub fn resolve_key_path(path: &Path) -> Result<String, ManifestError> {
    if path.as_os_str().is_empty() {
        return Err(ManifestError::PathResolution(
            "SSH key path is empty".to_string(),
        ));
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| {
            ManifestError::PathResolution(format!(
                "cannot determine working directory for {}: {}",
                path.display(),
                e
            ))
        })?;
        cwd.join(path)
    };

    // Drop `.` segments so `./id_rsa` and `id_rsa` resolve identically
    let absolute: PathBuf = absolute
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    absolute.to_str().map(str::to_string).ok_or_else(|| {
        ManifestError::PathResolution(format!(
            "{} is not valid UTF-8",
            absolute.display()
        ))
    })
}
