//! Generic keyed-collection operations.
//!
//! # Responsibility
//! - Provide the read/modify/write primitives every repository builds on.
//! - Own id assignment and creation-timestamp stamping for new records.
//!
//! # Invariants
//! - Every mutation rewrites the whole collection under its key.
//! - An absent or unreadable stored value reads as an empty collection.
//! - Assigned ids are decimal strings and never repeat within a collection
//!   while the sequence key is intact, even across deletions.

use super::{StorageBackend, StoreResult};
use chrono::Utc;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Contract every stored entity implements.
///
/// The collection key is fixed per type, so callers can never address a
/// record under the wrong key, and partial updates go through a typed patch
/// instead of an untyped field merge.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Storage key of the collection this record lives in.
    const COLLECTION: &'static str;
    /// Typed partial update accepted by [`KeyedStore::update_item`].
    type Patch;

    fn id(&self) -> &str;
    /// Called once by [`KeyedStore::create_item`] with the assigned id.
    fn assign_id(&mut self, id: String);
    /// Called once by [`KeyedStore::create_item`] with the creation time.
    /// Each entity maps this onto its own stamp field.
    fn stamp_created(&mut self, epoch_ms: i64);
    /// Merges `patch` into `self`; untouched patch fields keep current values.
    fn apply_patch(&mut self, patch: Self::Patch);
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Typed view over one storage backend.
///
/// Cheap to copy; repositories hand it around the way they would a borrowed
/// database connection.
pub struct KeyedStore<'a, B: StorageBackend> {
    backend: &'a B,
}

impl<B: StorageBackend> Clone for KeyedStore<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: StorageBackend> Copy for KeyedStore<'_, B> {}

impl<'a, B: StorageBackend> KeyedStore<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// The underlying backend, for operations outside any collection.
    pub fn backend(&self) -> &'a B {
        self.backend
    }

    /// Returns the whole collection.
    ///
    /// A missing key reads as empty. A stored value that fails to parse also
    /// reads as empty: the layer recovers rather than surfacing corruption,
    /// and the next write replaces the bad value.
    pub fn get<T: Record>(&self) -> StoreResult<Vec<T>> {
        let Some(raw) = self.backend.read(T::COLLECTION)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(err) => {
                warn!(
                    "event=collection_read module=store status=corrupt collection={} error={err}",
                    T::COLLECTION
                );
                Ok(Vec::new())
            }
        }
    }

    /// Serializes and persists the whole collection, replacing any previous
    /// value under the key.
    pub fn set<T: Record>(&self, items: &[T]) -> StoreResult<()> {
        let raw = serde_json::to_string(items)?;
        self.backend.write(T::COLLECTION, &raw)
    }

    /// Returns the first record whose id matches, or `None`.
    pub fn get_item<T: Record>(&self, id: &str) -> StoreResult<Option<T>> {
        Ok(self.get::<T>()?.into_iter().find(|item| item.id() == id))
    }

    /// Assigns the next id, stamps the creation time, appends and persists.
    /// Returns the record as stored.
    pub fn create_item<T: Record>(&self, mut item: T) -> StoreResult<T> {
        let mut items = self.get::<T>()?;
        item.assign_id(self.next_id::<T>(&items)?);
        item.stamp_created(now_epoch_ms());
        items.push(item.clone());
        self.set(&items)?;
        Ok(item)
    }

    /// Merges a typed patch into the matching record and persists.
    ///
    /// Returns the merged record, or `Ok(None)` without writing anything when
    /// no record matches.
    pub fn update_item<T: Record>(&self, id: &str, patch: T::Patch) -> StoreResult<Option<T>> {
        let mut items = self.get::<T>()?;
        let Some(index) = items.iter().position(|item| item.id() == id) else {
            return Ok(None);
        };
        items[index].apply_patch(patch);
        let updated = items[index].clone();
        self.set(&items)?;
        Ok(Some(updated))
    }

    /// Removes the record(s) matching `id`. Returns `true` iff the collection
    /// shrank; an absent id is not an error.
    pub fn delete_item<T: Record>(&self, id: &str) -> StoreResult<bool> {
        let mut items = self.get::<T>()?;
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Ok(false);
        }
        self.set(&items)?;
        Ok(true)
    }

    /// Returns all records satisfying `predicate`. Read-only.
    pub fn filter<T, P>(&self, predicate: P) -> StoreResult<Vec<T>>
    where
        T: Record,
        P: FnMut(&T) -> bool,
    {
        let mut items = self.get::<T>()?;
        items.retain(predicate);
        Ok(items)
    }

    /// Writes `fixtures()` under the collection key, but only when the key is
    /// entirely absent.
    ///
    /// An empty or unreadable stored value still counts as present, so
    /// repeated calls never duplicate fixture data and never resurrect a
    /// collection the caller emptied on purpose.
    pub fn ensure_seeded<T, F>(&self, fixtures: F) -> StoreResult<()>
    where
        T: Record,
        F: FnOnce() -> Vec<T>,
    {
        if self.backend.read(T::COLLECTION)?.is_some() {
            return Ok(());
        }
        let items = fixtures();
        self.set(&items)?;
        info!(
            "event=seed module=store status=ok collection={} count={}",
            T::COLLECTION,
            items.len()
        );
        Ok(())
    }

    /// Draws the next id for the collection from its persisted sequence.
    ///
    /// The sequence lives under `<collection>.seq` and only ever moves
    /// forward, so deleting records never frees their ids for reuse. When the
    /// sequence key is missing or unreadable, the highest numeric id present
    /// in `items` re-anchors it, which keeps collections written before
    /// sequences existed (fixture data included) collision-free.
    fn next_id<T: Record>(&self, items: &[T]) -> StoreResult<String> {
        let seq_key = format!("{}.seq", T::COLLECTION);
        let stored = self
            .backend
            .read(&seq_key)?
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(0);
        let highest = items
            .iter()
            .filter_map(|item| item.id().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let next = stored.max(highest) + 1;
        self.backend.write(&seq_key, &next.to_string())?;
        Ok(next.to_string())
    }
}
