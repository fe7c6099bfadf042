//! JSON-file backed key-value store

use super::KeyValueStore;
use crate::error::StorageError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const STORE_VERSION: u32 = 1;

/// On-disk layout of a [`FileStore`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreFile {
    /// Format version for compatibility
    version: u32,

    /// Timestamp of the last write
    updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    entries: Map<String, Value>,
}

impl Default for StoreFile {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            updated_at: None,
            entries: Map::new(),
        }
    }
}

/// Key-value store persisted as a single JSON file.
///
/// The whole file is rewritten on every `set`, so values survive a restart
/// the same way host storage does.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    data: StoreFile,
}

impl FileStore {
    /// Open the store at `path`, starting empty if the file does not exist
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            debug!(path = %path.display(), "Store file does not exist, starting empty");
            return Ok(Self {
                path,
                data: StoreFile::default(),
            });
        }

        let content = fs::read_to_string(&path)?;
        let data: StoreFile =
            serde_json::from_str(&content).map_err(|_| StorageError::Corrupt {
                path: path.to_string_lossy().to_string(),
            })?;

        debug!(
            path = %path.display(),
            entries = data.entries.len(),
            "Loaded store file"
        );
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// When the store was last written, if ever
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.data.updated_at
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.entries.keys().map(String::as_str)
    }

    fn save(&self, data: &StoreFile) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content =
            serde_json::to_string_pretty(data).map_err(|source| {
                StorageError::Serialization {
                    key: "*".to_string(),
                    source,
                }
            })?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn set(&mut self, key: &str, value: &Value) -> Result<(), StorageError> {
        // Memory only changes once the file holds the new value.
        let mut data = self.data.clone();
        data.entries.insert(key.to_string(), value.clone());
        data.updated_at = Some(Utc::now());
        self.save(&data)?;
        self.data = data;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.data.entries.get(key).cloned())
    }
}
