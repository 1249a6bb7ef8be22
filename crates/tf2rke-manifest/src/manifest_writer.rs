//! YAML rendering and persistence of cluster manifests

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::ManifestError;
use crate::types::ClusterManifest;

/// Comment line written above the manifest document
pub const HEADER: &str = "# RKE cluster configuration generated by tf2rke\n";

/// Render the manifest as YAML text, header included
pub fn render(manifest: &ClusterManifest) -> Result<String, ManifestError> {
    let yaml = serde_yaml::to_string(manifest).map_err(ManifestError::Serialize)?;
    Ok(format!("{}{}", HEADER, yaml))
}

/// Write the manifest to a path with an atomic write.
///
/// The document goes to a sibling `.tmp` file that is renamed onto
/// `output_path` once complete. On failure the temp file is removed and
/// any existing file at `output_path` is left untouched.
pub fn write_to_path(manifest: &ClusterManifest, output_path: &Path) -> Result<(), ManifestError> {
    debug!("Writing manifest to: {:?}", output_path);

    let content = render(manifest)?;
    let temp_path = temp_path_for(output_path)?;

    if let Err(e) = write_and_rename(&content, &temp_path, output_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }

    info!("Manifest written successfully to: {:?}", output_path);
    info!("Total nodes: {}", manifest.nodes.len());

    Ok(())
}

fn temp_path_for(output_path: &Path) -> Result<PathBuf, ManifestError> {
    let mut name = output_path
        .file_name()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a file path", output_path.display()),
            )
        })?
        .to_os_string();
    name.push(".tmp");
    Ok(output_path.with_file_name(name))
}

fn write_and_rename(content: &str, temp_path: &Path, output_path: &Path) -> io::Result<()> {
    {
        let file = File::create(temp_path)?;
        let mut writer = BufWriter::with_capacity(64 * 1024, file);
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
    }

    fs::rename(temp_path, output_path)
}

/// Read a manifest back from a path
pub fn read_from_path(manifest_path: &Path) -> Result<ClusterManifest, ManifestError> {
    debug!("Reading manifest from: {:?}", manifest_path);

    let content = fs::read_to_string(manifest_path)?;
    let manifest: ClusterManifest =
        serde_yaml::from_str(&content).map_err(ManifestError::Parse)?;

    info!("Manifest loaded with {} nodes", manifest.nodes.len());

    Ok(manifest)
}
