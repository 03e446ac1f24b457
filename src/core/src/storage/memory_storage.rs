use std::collections::BTreeMap;
use std::sync::Mutex;

use log::{debug, error};

use crate::error_handling::types::StorageError;
use crate::storage::storage_trait::Storage;

/// Process-scoped slot storage.
///
/// Slots live for as long as the value does, which makes this the backend
/// for session slots when nothing should outlive the process.
#[derive(Default)]
pub struct MemoryStorage {
    slots: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.slots.lock().map_err(|e| {
            error!("MemoryStorage lock poisoned: {}", e);
            StorageError::ConnectionFailed
        })
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        debug!("Stored {} byte(s) in memory slot {}", value.len(), key);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}
