// Content path resolution and raw byte loading

use super::AssetError;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Resolves content-relative paths against a base directory and loads raw
/// bytes from disk.
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new loader rooted at the given content directory
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full filesystem path for a content-relative path
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Load the raw bytes of a content file
    pub fn load_bytes(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.resolve_path(name);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()).into());
        }

        std::fs::read(&path)
            .map_err(|e| AssetError::LoadError(format!("failed to read {}: {}", name, e)).into())
    }

    /// Check whether a content file exists
    pub fn exists(&self, name: &str) -> bool {
        self.resolve_path(name).exists()
    }

    /// Get the base content directory
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
