use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::error_handling::types::StorageError;
use crate::storage::storage_trait::Storage;
use crate::storage::types::is_valid_key;

const SLOT_EXTENSION: &str = "json";

/// Directory-backed slot storage.
///
/// Every slot is a file `<base_path>/<key>.json` holding the slot's string
/// verbatim. Writes go through a temporary file and a rename so a crash
/// never leaves a half-written slot behind.
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self, StorageError> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).map_err(|e| {
            error!("Failed to create storage dir {}: {}", base_path.display(), e);
            StorageError::ConnectionFailed
        })?;
        info!("FileStorage initialized at {}", base_path.display());
        Ok(Self { base_path })
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if !is_valid_key(key) {
            error!("Rejected invalid slot key {:?}", key);
            return Err(StorageError::WriteFailed);
        }
        Ok(self.base_path.join(format!("{}.{}", key, SLOT_EXTENSION)))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Read {} byte(s) from {}", content.len(), path.display());
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Slot {} not present at {}", key, path.display());
                Ok(None)
            }
            Err(e) => {
                error!("Read failed {}: {}", path.display(), e);
                Err(StorageError::ReadFailed)
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value).map_err(|e| {
            error!("Write failed {}: {}", tmp.display(), e);
            StorageError::WriteFailed
        })?;
        fs::rename(&tmp, &path).map_err(|e| {
            error!("Rename failed {} -> {}: {}", tmp.display(), path.display(), e);
            StorageError::WriteFailed
        })?;
        debug!("Wrote {} byte(s) to {}", value.len(), path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Removed slot {} ({})", key, path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                error!("Remove failed {}: {}", path.display(), e);
                Err(StorageError::WriteFailed)
            }
        }
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let mut keys = Vec::new();
        let entries = fs::read_dir(&self.base_path).map_err(|e| {
            error!("Failed to read storage dir {}: {}", self.base_path.display(), e);
            StorageError::ReadFailed
        })?;
        for entry in entries {
            let entry = entry.map_err(|e| {
                error!("Dir entry error: {}", e);
                StorageError::ReadFailed
            })?;
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some(SLOT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if is_valid_key(stem) {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_get_item() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        storage.set_item("quotes", "[]").unwrap();
        assert_eq!(storage.get_item("quotes").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("quotes.json").exists());
    }

    #[test]
    fn test_missing_slot_is_none() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        assert_eq!(storage.get_item("selectedCategory").unwrap(), None);
    }

    #[test]
    fn test_overwrite_and_remove() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        storage.set_item("lastQuote", "first").unwrap();
        storage.set_item("lastQuote", "second").unwrap();
        assert_eq!(storage.get_item("lastQuote").unwrap().as_deref(), Some("second"));

        storage.remove_item("lastQuote").unwrap();
        assert_eq!(storage.get_item("lastQuote").unwrap(), None);
        // removing twice is fine
        storage.remove_item("lastQuote").unwrap();
    }

    #[test]
    fn test_keys_lists_only_slots() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        storage.set_item("quotes", "[]").unwrap();
        storage.set_item("lastQuote", "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        assert_eq!(storage.keys().unwrap(), vec!["lastQuote".to_string(), "quotes".to_string()]);
    }

    #[test]
    fn test_invalid_key_is_rejected() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        assert!(matches!(storage.set_item("../escape", "x"), Err(StorageError::WriteFailed)));
    }
}
