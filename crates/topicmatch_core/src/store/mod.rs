//! Keyed storage bootstrap and persistence primitives.
//!
//! # Responsibility
//! - Define the storage port every repository runs against.
//! - Provide the generic collection operations shared by all entities.
//!
//! # Invariants
//! - Absent or unreadable stored values behave like empty collections.
//! - "Not found" is reported through return values, never through errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod backend;
pub mod keyed;
pub mod sqlite;

pub use backend::{MemoryBackend, StorageBackend};
pub use keyed::{now_epoch_ms, KeyedStore, Record};
pub use sqlite::{open_store, open_store_in_memory, SqliteBackend};

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level storage error.
///
/// Domain-level outcomes ("no such record", "collection empty") are expressed
/// as `Ok(None)` / `Ok(false)` / empty vectors, so this enum only carries
/// failures of the underlying medium or of serializing our own records.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
