//! Origin-scoped key-value storage capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme preference is the only persisted value. Browsers may disable
//! `localStorage` or reject writes on quota, so every access is fallible and
//! callers decide how loudly to degrade.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

/// Failure reading or writing the preference store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage is exposed for this origin (disabled, sandboxed, SSR).
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    /// Write rejected, typically quota exceeded or private mode.
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Minimal get/set interface over persistent key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store used by tests and non-browser builds.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    available: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: HashMap::new(), available: true }
    }

    /// Store seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Store that fails every access with [`StorageError::Unavailable`].
    #[must_use]
    pub fn unavailable() -> Self {
        Self { entries: HashMap::new(), available: false }
    }

    /// Raw value for `key`, bypassing availability.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
