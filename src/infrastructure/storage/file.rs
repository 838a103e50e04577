// SPDX-License-Identifier: MPL-2.0
//! File-backed key-value store: one file per key in a directory.

use crate::application::port::storage::{KeyValueStore, StorageError};
use crate::app::paths;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Subdirectory of the app data directory holding the entries.
const STORAGE_DIR: &str = "storage";
const ENTRY_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    quota: Option<usize>,
}

impl FileStore {
    /// Store rooted at `dir`, without a size limit.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            quota: None,
        }
    }

    /// Store rooted at `dir` refusing writes that would make the entries
    /// exceed `quota` bytes in total.
    #[must_use]
    pub fn with_quota(dir: impl Into<PathBuf>, quota: usize) -> Self {
        Self {
            dir: dir.into(),
            quota: Some(quota),
        }
    }

    /// Store under the resolved app data directory.
    ///
    /// # Path Resolution
    ///
    /// 1. `base_dir` parameter (if `Some`)
    /// 2. `--data-dir` CLI flag or `IMAGE_GENIE_DATA_DIR` environment variable
    /// 3. Platform-specific data directory
    pub fn in_data_dir(base_dir: Option<PathBuf>, quota: usize) -> Result<Self, StorageError> {
        let root = paths::get_app_data_dir_with_override(base_dir)
            .ok_or_else(|| StorageError::Io("no data directory available".to_string()))?;
        Ok(Self::with_quota(root.join(STORAGE_DIR), quota))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.{ENTRY_EXTENSION}")))
    }

    /// Bytes held by every entry except `skip`.
    fn used_bytes(&self, skip: &Path) -> Result<usize, StorageError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(0),
            Err(err) => return Err(StorageError::Io(err.to_string())),
        };
        let mut total = 0usize;
        for entry in entries {
            let entry = entry.map_err(|e| StorageError::Io(e.to_string()))?;
            let path = entry.path();
            if path == skip || path.extension().and_then(|e| e.to_str()) != Some(ENTRY_EXTENSION) {
                continue;
            }
            let len = entry.metadata().map_err(|e| StorageError::Io(e.to_string()))?.len();
            total = total.saturating_add(usize::try_from(len).unwrap_or(usize::MAX));
        }
        Ok(total)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(format!("{}: {err}", path.display()))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key)?;
        if let Some(quota) = self.quota {
            let required = self.used_bytes(&path)?.saturating_add(value.len());
            if required > quota {
                return Err(StorageError::QuotaExceeded { required, quota });
            }
        }

        fs::create_dir_all(&self.dir).map_err(|e| StorageError::Io(e.to_string()))?;
        // Write then rename so a crash never leaves a half-written entry.
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value).map_err(|e| StorageError::Io(e.to_string()))?;
        fs::rename(&tmp, &path).map_err(|e| StorageError::Io(e.to_string()))?;
        tracing::debug!(key, bytes = value.len(), "storage entry written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Io(err.to_string())),
        }
    }
}
