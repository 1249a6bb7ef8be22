//! Merge of role-tagged node lists into one role set per node

use ahash::AHashMap;
use std::collections::BTreeSet;

use crate::types::Role;

/// Role sets keyed by node address, iterated in first-appearance order
#[derive(Debug, Clone, Default)]
pub struct RoleSetMap {
    nodes: Vec<(String, BTreeSet<Role>)>,

    /// Address to position in `nodes`
    index: AHashMap<String, usize>,
}

impl RoleSetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a role to an address, creating the entry on first sight
    pub fn insert(&mut self, address: &str, role: Role) {
        if let Some(&position) = self.index.get(address) {
            self.nodes[position].1.insert(role);
            return;
        }

        self.index.insert(address.to_string(), self.nodes.len());
        self.nodes.push((address.to_string(), BTreeSet::from([role])));
    }

    /// Add a role to every address of a list
    pub fn extend<S: AsRef<str>>(&mut self, addresses: &[S], role: Role) {
        for address in addresses {
            self.insert(address.as_ref(), role);
        }
    }

    pub fn get(&self, address: &str) -> Option<&BTreeSet<Role>> {
        self.index.get(address).map(|&position| &self.nodes[position].1)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<Role>)> {
        self.nodes
            .iter()
            .map(|(address, roles)| (address.as_str(), roles))
    }
}

impl PartialEq for RoleSetMap {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl Eq for RoleSetMap {}

/// Merge the control plane, etcd and worker lists, in that order
pub fn merge<S: AsRef<str>>(control_plane: &[S], etcd: &[S], worker: &[S]) -> RoleSetMap {
    let mut map = RoleSetMap::new();
    map.extend(control_plane, Role::ControlPlane);
    map.extend(etcd, Role::Etcd);
    map.extend(worker, Role::Worker);
    map
}
