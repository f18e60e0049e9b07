//! Per-student progress tracking on topics.
//!
//! # Responsibility
//! - CRUD over the `progress` collection.
//! - Refresh `last_updated` on every update, whatever the patch touches.
//!
//! # Invariants
//! - The collection seeds empty; there are no fixture progress records.
//! - `last_updated` moves forward on each update; the patch cannot set it.

use crate::model::progress::{NewProgress, Progress, ProgressPatch};
use crate::store::{now_epoch_ms, KeyedStore, Record, StorageBackend, StoreResult};

/// Repository for progress records.
pub struct ProgressRepository<'a, B: StorageBackend> {
    store: KeyedStore<'a, B>,
}

impl<'a, B: StorageBackend> ProgressRepository<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self {
            store: KeyedStore::new(backend),
        }
    }

    fn ensure(&self) -> StoreResult<()> {
        self.store.ensure_seeded(Vec::<Progress>::new)
    }

    /// Returns all progress records in insertion order.
    pub fn list(&self) -> StoreResult<Vec<Progress>> {
        self.ensure()?;
        self.store.get()
    }

    /// Returns one progress record by id.
    pub fn get(&self, id: &str) -> StoreResult<Option<Progress>> {
        self.ensure()?;
        self.store.get_item(id)
    }

    /// Returns the progress records tracked under one topic.
    pub fn list_by_topic(&self, topic_id: &str) -> StoreResult<Vec<Progress>> {
        self.ensure()?;
        self.store
            .filter(|progress: &Progress| progress.topic_id == topic_id)
    }

    /// Returns one student's progress on one topic, if tracked.
    pub fn get_for_student(
        &self,
        topic_id: &str,
        student_id: &str,
    ) -> StoreResult<Option<Progress>> {
        self.ensure()?;
        let matches = self.store.filter(|progress: &Progress| {
            progress.topic_id == topic_id && progress.student_id == student_id
        })?;
        Ok(matches.into_iter().next())
    }

    /// Starts tracking progress with a fresh id and a current `last_updated`
    /// stamp.
    pub fn create(&self, new: NewProgress) -> StoreResult<Progress> {
        self.ensure()?;
        self.store.create_item(Progress::from_new(new))
    }

    /// Applies a partial update, refreshes `last_updated` and returns the
    /// merged record, or `None` when the id is unknown.
    pub fn update(&self, id: &str, patch: ProgressPatch) -> StoreResult<Option<Progress>> {
        self.ensure()?;
        let mut records = self.store.get::<Progress>()?;
        let Some(index) = records.iter().position(|record| record.id == id) else {
            return Ok(None);
        };
        records[index].apply_patch(patch);
        records[index].last_updated = now_epoch_ms();
        let updated = records[index].clone();
        self.store.set(&records)?;
        Ok(Some(updated))
    }

    /// Deletes a progress record. Returns whether it existed.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        self.ensure()?;
        self.store.delete_item::<Progress>(id)
    }
}
