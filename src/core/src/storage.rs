//! Storage subsystem
//!
//! This module provides abstractions and implementations for persisting
//! named key-value slots.
//!
//! Components:
//! - `storage_trait`: the Storage trait defining a uniform slot API.
//! - `types`: well-known slot names and key validation.
//! - `file_storage`: directory-backed implementation, one file per slot.
//! - `memory_storage`: in-process implementation for session-scoped slots.

pub mod file_storage;
pub mod memory_storage;
pub mod storage_trait;
pub mod types;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use storage_trait::Storage;
