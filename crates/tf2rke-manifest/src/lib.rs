//! tf2rke manifest construction
//!
//! Merges role-tagged node lists into one role set per node and projects them,
//! together with the fixed service images and network settings, into the
//! `cluster.yml` document the RKE installer consumes.

pub mod builder;
pub mod defaults;
pub mod errors;
pub mod manifest_writer;
pub mod role_set;
pub mod types;

pub use builder::{build, resolve_key_path};
pub use defaults::{ClusterDefaults, NETWORK_PLUGIN, SERVICE_NAMES};
pub use errors::ManifestError;
pub use manifest_writer::{read_from_path, render, write_to_path};
pub use role_set::{merge, RoleSetMap};
pub use types::{
    ClusterManifest, NetworkConfig, NodeRecord, Role, ServiceImage, ServiceImageTable, NODE_USER,
};
