//! Error types for kustag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the kustag application
#[derive(Debug, Error)]
pub enum KustagError {
    #[error("Manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Image not found in manifest: {0}")]
    ImageNotFound(String),

    #[error("Malformed manifest: {0}")]
    MalformedManifest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialize(serde_yaml::Error),
}

impl KustagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            KustagError::ManifestNotFound(_) => 2,
            KustagError::InvalidVersion(_) => 3,
            KustagError::ImageNotFound(_) => 4,
            KustagError::MalformedManifest(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            KustagError::ManifestNotFound(path) => {
                format!(
                    "Manifest not found: {}\n\n\
                    Suggestions:\n\
                    • Pass the overlay explicitly: kustag 1.2.3 --file path/to/kustomization.yaml\n\
                    • Set KUSTAG_MANIFEST to the overlay path\n\
                    • Add a 'manifest' key to .kustag.toml in your working directory",
                    path.display()
                )
            }
            KustagError::InvalidVersion(version) => {
                format!(
                    "Invalid version: '{}'\n\n\
                    Versions must be non-empty image tags:\n\
                    • Letters, digits, '.', '_', '-' only (optionally prefixed with 'v')\n\
                    • At most 128 characters\n\n\
                    Examples:\n\
                    kustag 1.2.3\n\
                    kustag v2.0.0-rc.1",
                    version
                )
            }
            KustagError::ImageNotFound(name) => {
                format!(
                    "Image not found in manifest: '{}'\n\n\
                    Suggestions:\n\
                    • Check the entry's 'name' field in the images list\n\
                    • Omit --image to patch the first images entry\n\
                    • Run 'kustag current --file <path>' to inspect the manifest",
                    name
                )
            }
            KustagError::MalformedManifest(msg) => {
                format!(
                    "Malformed manifest: {}\n\n\
                    Expected a kustomization overlay with an images list, e.g.:\n\
                    images:\n\
                    - name: controller\n\
                      newTag: \"1.2.3\"",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using KustagError
pub type Result<T> = std::result::Result<T, KustagError>;
