//! Configuration file handling for tf2rke
//!
//! The configuration lives in `tf2rke.toml` under the user config directory and
//! holds the default output file plus per-service image overrides, written as an
//! `[image]` table whose keys match `config set image.<service>`.
//! `TF2RKE_CONFIG` points at an alternate file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use tf2rke_manifest::{ClusterDefaults, ManifestError, SERVICE_NAMES};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "TF2RKE_CONFIG";

/// Manifest file written when neither flag nor config names one
pub const DEFAULT_OUTPUT_FILE: &str = "cluster.yml";

const CONFIG_FILE_NAME: &str = "tf2rke.toml";
const IMAGE_KEY_PREFIX: &str = "image.";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown config key '{0}'")]
    UnknownKey(String),

    #[error("Unknown service '{0}' (expected one of: {services})", services = SERVICE_NAMES.join(", "))]
    UnknownService(String),

    #[error("Could not determine config directory")]
    NoConfigDir,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
    /// Image overrides keyed by service name
    #[serde(rename = "image", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub images: BTreeMap<String, String>,
}

impl Config {
    pub fn path() -> Result<PathBuf, ConfigError> {
        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            let trimmed = env_path.trim();
            if !trimmed.is_empty() {
                return Ok(PathBuf::from(trimmed));
            }
        }

        #[cfg(not(target_os = "windows"))]
        let base = dirs::home_dir().map(|home| home.join(".config"));

        #[cfg(target_os = "windows")]
        let base = dirs::config_dir();

        base.map(|dir| dir.join("tf2rke").join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path; a missing file yields the default config
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Config::default());
        }

        debug!("Loading config from {:?}", path);
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self
            .images
            .keys()
            .find(|service| !SERVICE_NAMES.contains(&service.as_str()))
        {
            Some(service) => Err(ConfigError::UnknownService(service.clone())),
            None => Ok(()),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output-file" => self.output_file.clone(),
            _ => key
                .strip_prefix(IMAGE_KEY_PREFIX)
                .and_then(|service| self.images.get(service).cloned()),
        }
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<(), ConfigError> {
        match key {
            "output-file" => self.output_file = Some(value),
            _ => {
                let service = key
                    .strip_prefix(IMAGE_KEY_PREFIX)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                if !SERVICE_NAMES.contains(&service) {
                    return Err(ConfigError::UnknownService(service.to_string()));
                }
                self.images.insert(service.to_string(), value);
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.output_file.is_none() && self.images.is_empty()
    }

    pub fn values_iter(&self) -> Vec<(String, String)> {
        let mut values = Vec::new();
        if let Some(ref val) = self.output_file {
            values.push(("output-file".to_string(), val.clone()));
        }
        for (service, image) in &self.images {
            values.push((format!("{}{}", IMAGE_KEY_PREFIX, service), image.clone()));
        }
        values
    }

    /// Output path: explicit value first, then config, then `cluster.yml`
    pub fn output_file(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.output_file.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE))
    }

    /// Built-in cluster defaults with this config's image overrides applied
    pub fn cluster_defaults(&self) -> Result<ClusterDefaults, ConfigError> {
        let mut defaults = ClusterDefaults::default();

        for (service, image) in &self.images {
            defaults
                .images
                .set_image(service, image)
                .map_err(|e| match e {
                    ManifestError::UnknownService(name) => ConfigError::UnknownService(name),
                    _ => ConfigError::UnknownService(service.clone()),
                })?;
        }

        Ok(defaults)
    }
}
