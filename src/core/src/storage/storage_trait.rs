//! Storage Trait
//!
//! This module defines the `Storage` trait, the interface shared by every
//! key-value slot backend.
//!
//! A slot is a named location holding one UTF-8 string, the way browser
//! `localStorage` and `sessionStorage` hold one string per key. Implementors
//! are responsible for:
//! - Reading a slot, reporting a missing slot as `None`
//! - Overwriting a slot in full
//! - Removing a slot
//! - Enumerating the slots currently present
//!
//! All methods return a `Result` to handle potential storage errors.

use crate::error_handling::types::StorageError;

/// The `Storage` trait defines the interface for key-value slot backends.
///
/// Durable backends keep slots across process restarts; session backends
/// only need to keep them for as long as the owning session lives.
pub trait Storage: Send + Sync {
    /// Reads the slot named `key`.
    ///
    /// Returns `Ok(None)` when the slot has never been written or was removed.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` to the slot named `key`, replacing any previous content.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the slot named `key`. Removing a missing slot is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Lists the names of all slots currently present, sorted.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}
