//! JSON file snapshot store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SnapshotError;
use crate::snapshot::{Snapshot, SnapshotStore};

/// Snapshot slot backed by one JSON file on disk.
///
/// Best-effort key-value semantics: reads happen once at cart open, every
/// save overwrites the whole file, and two processes pointed at the same
/// path are last-write-wins with no locking. That matches the cart's
/// contract - a locally cached view of intent, not a ledger.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over `path`. The file need not exist yet; parent
    /// directories are created on first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let encoded = serde_json::to_string(snapshot)?;
        fs::write(&self.path, encoded)?;
        Ok(())
    }
}
