//! Configuration management

use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Overlay path the original release hook patched
pub const DEFAULT_MANIFEST: &str = "config/manager/kustomization.yaml";

/// Config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".kustag.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Path to the kustomization overlay, relative to the working directory
    pub manifest: Option<PathBuf>,

    /// Name of the images entry to patch; first entry when unset
    pub image: Option<String>,
}

impl Config {
    /// Load `.kustag.toml` from the given directory. A missing file is not an
    /// error; it just means defaults apply.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE_NAME);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(e.into()),
        };

        Ok(toml::from_str(&contents)?)
    }

    /// Resolve the manifest path: CLI flag, then KUSTAG_MANIFEST, then the
    /// config file, then the conventional overlay location.
    pub fn resolve_manifest(&self, cli_override: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_override {
            return path.to_path_buf();
        }
        if let Ok(path) = std::env::var("KUSTAG_MANIFEST") {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }
        self.manifest
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST))
    }

    /// Resolve the image selector name: CLI flag wins over the config file.
    pub fn resolve_image(&self, cli_override: Option<&str>) -> Option<String> {
        cli_override
            .map(str::to_string)
            .or_else(|| self.image.clone())
    }
}
