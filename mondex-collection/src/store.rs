use std::path::{Path, PathBuf};

use mondex_api::Pokemon;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// File-backed store holding one serialized collection snapshot.
///
/// The slot is overwritten wholesale on every save; there is no partial
/// update and no schema beyond the JSON array of items.
#[derive(Debug, Clone)]
pub struct CollectionStore {
    path: PathBuf,
}

impl CollectionStore {
    /// Store backed by an explicit slot path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by the canonical slot under the user data directory.
    pub fn open_default() -> Self {
        Self::at(Self::default_path())
    }

    /// Canonical slot path: `<data_dir>/mondex/collection.json`.
    pub fn default_path() -> PathBuf {
        let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data.join("mondex").join("collection.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted collection. A missing slot, an unreadable file,
    /// and a malformed payload all load as an empty collection; startup
    /// never fails because of corrupt local state.
    pub fn load(&self) -> Vec<Pokemon> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                log::warn!("could not read {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(items) => items,
            Err(e) => {
                log::warn!(
                    "discarding malformed collection snapshot {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the slot with the full snapshot, creating parent
    /// directories as needed.
    pub fn save(&self, items: &[Pokemon]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let json = serde_json::to_string(items)?;
        std::fs::write(&self.path, json).map_err(|e| StoreError::Io {
            path: self.path.display().to_string(),
            source: e,
        })
    }
}
