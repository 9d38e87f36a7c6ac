//! Manifest file access

use crate::error::{KustagError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and rewrites a single manifest file in place
#[derive(Debug, Clone)]
pub struct ManifestStore {
    path: PathBuf,
}

impl ManifestStore {
    pub fn new(path: PathBuf) -> Self {
        ManifestStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the manifest text. A missing file maps to `ManifestNotFound`.
    pub fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                KustagError::ManifestNotFound(self.path.clone())
            } else {
                KustagError::Io(e)
            }
        })
    }

    /// Write the manifest back in place via a temp file and rename, so a
    /// concurrent reader never observes a half-written document.
    pub fn write_atomic(&self, content: &str) -> Result<()> {
        let tmp_name = format!(
            "{}.kustag-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("kustomization.yaml"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            // Don't leave the temp file behind on a failed rename.
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        Ok(())
    }
}
