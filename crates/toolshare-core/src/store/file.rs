use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::warn;

use super::store::{KvStore, StoreError, StoreResult};

/// A [`KvStore`] backed by a single JSON object on disk.
///
/// The whole file is rewritten on every `set` / `delete`, so the file always
/// mirrors the in-memory map.
pub struct FileStore {
    path: PathBuf,
    data: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; a file
    /// that cannot be read or parsed is logged and also treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = Self::read_map(&path);
        Self {
            path,
            data: RwLock::new(data),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(path: &Path) -> BTreeMap<String, String> {
        if !path.exists() {
            return BTreeMap::new();
        }
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to read store {:?}: {}", path, e);
                return BTreeMap::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(e) => {
                warn!("Ignoring malformed store {:?}: {}", path, e);
                BTreeMap::new()
            }
        }
    }

    fn flush(&self, data: &BTreeMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(data)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        data.insert(key.to_string(), value.to_string());
        self.flush(&data)
    }

    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self
            .data
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?
            .get(key)
            .cloned())
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?;
        if data.remove(key).is_some() {
            self.flush(&data)?;
        }
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self
            .data
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?
            .keys()
            .cloned()
            .collect())
    }
}
