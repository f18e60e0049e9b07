//! Storage port and in-memory implementation.
//!
//! # Responsibility
//! - Define the key/value surface repositories persist through.
//! - Provide the in-memory backend used by tests and throwaway sessions.
//!
//! # Invariants
//! - A key holds one whole serialized value; writes replace it entirely.
//! - Reading a missing key is not an error.

use super::StoreResult;
use std::cell::RefCell;
use std::collections::HashMap;

/// Flat key/value port the whole storage layer runs against.
///
/// Mirrors the three-call surface of a browser `Storage` object
/// (`getItem`/`setItem`/`removeItem`): every collection lives under one key
/// as one serialized string, and every mutation rewrites that string.
pub trait StorageBackend {
    /// Returns the raw value stored under `key`, or `None`.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Removes `key` and its value. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Heap-only backend.
///
/// Models the execution environment the layer was designed for: one
/// single-threaded session with cooperative scheduling, so plain `RefCell`
/// interior mutability is enough. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn key_count(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
