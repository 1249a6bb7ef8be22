//! Cluster manifest types in the shape the RKE installer reads

use serde::{Deserialize, Serialize};

/// User every node is accessed as
pub const NODE_USER: &str = "root";

/// A function a cluster node performs.
///
/// The declaration order is the order role labels are emitted in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    ControlPlane,
    Etcd,
    Worker,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::ControlPlane => "controlplane",
            Role::Etcd => "etcd",
            Role::Worker => "worker",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Top-level cluster manifest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClusterManifest {
    pub nodes: Vec<NodeRecord>,
    pub network: NetworkConfig,
    pub ssh_key_path: String,
    pub services: ServiceImageTable,
}

/// A node entry of the manifest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeRecord {
    pub address: String,
    pub user: String,
    pub role: Vec<Role>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkConfig {
    pub plugin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceImage {
    pub image: String,
}

impl ServiceImage {
    pub fn new(image: &str) -> Self {
        ServiceImage {
            image: image.to_string(),
        }
    }
}

/// Container images of the six Kubernetes services RKE deploys
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ServiceImageTable {
    pub etcd: ServiceImage,
    pub kube_api: ServiceImage,
    pub kube_controller: ServiceImage,
    pub scheduler: ServiceImage,
    pub kubelet: ServiceImage,
    pub kubeproxy: ServiceImage,
}
