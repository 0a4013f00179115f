//! Path resolution for app data files

use std::path::{Path, PathBuf};

const APP_DIR: &str = "kodomotrip";

/// Resolves standard paths for persisted app data
#[derive(Debug, Clone)]
pub struct Paths {
    pub data_dir: PathBuf,
}

impl Paths {
    /// Resolve the platform data directory (e.g. `~/.local/share/kodomotrip`)
    pub fn new() -> std::io::Result<Self> {
        let base = dirs::data_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "data directory not found")
        })?;

        Ok(Self {
            data_dir: base.join(APP_DIR),
        })
    }

    /// Use an explicit root instead of the platform data directory
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self {
            data_dir: root.as_ref().to_path_buf(),
        }
    }

    /// Directory holding one JSON document per store key
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join("store")
    }

    /// Get settings.json path
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }
}
