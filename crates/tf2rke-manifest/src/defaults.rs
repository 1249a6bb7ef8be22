//! Static cluster configuration attached to every manifest

use crate::errors::ManifestError;
use crate::types::{ServiceImage, ServiceImageTable};

/// Network plugin of every generated cluster
pub const NETWORK_PLUGIN: &str = "flannel";

const ETCD_IMAGE: &str = "quay.io/coreos/etcd:latest";
const KUBERNETES_IMAGE: &str = "rancher/k8s:v1.8.3-rancher2";

/// Service names in manifest order
pub const SERVICE_NAMES: [&str; 6] = [
    "etcd",
    "kube-api",
    "kube-controller",
    "scheduler",
    "kubelet",
    "kubeproxy",
];

impl Default for ServiceImageTable {
    fn default() -> Self {
        ServiceImageTable {
            etcd: ServiceImage::new(ETCD_IMAGE),
            kube_api: ServiceImage::new(KUBERNETES_IMAGE),
            kube_controller: ServiceImage::new(KUBERNETES_IMAGE),
            scheduler: ServiceImage::new(KUBERNETES_IMAGE),
            kubelet: ServiceImage::new(KUBERNETES_IMAGE),
            kubeproxy: ServiceImage::new(KUBERNETES_IMAGE),
        }
    }
}

impl ServiceImageTable {
    fn slot(&self, service: &str) -> Option<&ServiceImage> {
        match service {
            "etcd" => Some(&self.etcd),
            "kube-api" => Some(&self.kube_api),
            "kube-controller" => Some(&self.kube_controller),
            "scheduler" => Some(&self.scheduler),
            "kubelet" => Some(&self.kubelet),
            "kubeproxy" => Some(&self.kubeproxy),
            _ => None,
        }
    }

    fn slot_mut(&mut self, service: &str) -> Option<&mut ServiceImage> {
        match service {
            "etcd" => Some(&mut self.etcd),
            "kube-api" => Some(&mut self.kube_api),
            "kube-controller" => Some(&mut self.kube_controller),
            "scheduler" => Some(&mut self.scheduler),
            "kubelet" => Some(&mut self.kubelet),
            "kubeproxy" => Some(&mut self.kubeproxy),
            _ => None,
        }
    }

    pub fn image(&self, service: &str) -> Option<&str> {
        self.slot(service).map(|s| s.image.as_str())
    }

    /// Replace the image of one of the fixed services
    pub fn set_image(&mut self, service: &str, image: &str) -> Result<(), ManifestError> {
        let slot = self
            .slot_mut(service)
            .ok_or_else(|| ManifestError::UnknownService(service.to_string()))?;
        slot.image = image.to_string();
        Ok(())
    }

    /// `(service, image)` pairs in manifest order
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        SERVICE_NAMES
            .iter()
            .filter_map(|name| self.image(name).map(|image| (*name, image)))
            .collect()
    }
}

/// Immutable configuration the manifest builder attaches to every manifest.
///
/// Only the service images vary; the network plugin is always flannel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterDefaults {
    pub images: ServiceImageTable,
}

impl ClusterDefaults {
    pub fn new(images: ServiceImageTable) -> Self {
        ClusterDefaults { images }
    }

    pub fn network_plugin(&self) -> &'static str {
        NETWORK_PLUGIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_has_six_services() {
        let table = ServiceImageTable::default();
        let entries = table.entries();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0], ("etcd", ETCD_IMAGE));
        assert_eq!(entries[5], ("kubeproxy", KUBERNETES_IMAGE));
    }

    #[test]
    fn test_set_image() {
        let mut table = ServiceImageTable::default();
        assert!(table.set_image("kubelet", "rancher/k8s:v1.9.0").is_ok());
        assert_eq!(table.image("kubelet"), Some("rancher/k8s:v1.9.0"));
        assert_eq!(table.image("kube-api"), Some(KUBERNETES_IMAGE));
    }

    #[test]
    fn test_set_unknown_service_fails() {
        let mut table = ServiceImageTable::default();
        let result = table.set_image("kube-dns", "image");
        assert!(matches!(result, Err(ManifestError::UnknownService(_))));
        assert_eq!(table, ServiceImageTable::default());
    }

    #[test]
    fn test_default_network_plugin() {
        assert_eq!(ClusterDefaults::default().network_plugin(), "flannel");
        assert_eq!(
            ClusterDefaults::new(ServiceImageTable::default()).network_plugin(),
            "flannel"
        );
    }
}
