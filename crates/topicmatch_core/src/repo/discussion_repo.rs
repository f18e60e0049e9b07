//! Discussion threads attached to topics.
//!
//! # Responsibility
//! - CRUD over the `discussions` collection, usually scoped to one topic.
//!
//! # Invariants
//! - The collection seeds empty; there are no fixture discussions.
//! - Deleting a topic does not remove its discussions.

use crate::model::discussion::{Discussion, DiscussionPatch, NewDiscussion};
use crate::store::{KeyedStore, StorageBackend, StoreResult};

/// Repository for topic discussions.
pub struct DiscussionRepository<'a, B: StorageBackend> {
    store: KeyedStore<'a, B>,
}

impl<'a, B: StorageBackend> DiscussionRepository<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self {
            store: KeyedStore::new(backend),
        }
    }

    fn ensure(&self) -> StoreResult<()> {
        self.store.ensure_seeded(Vec::<Discussion>::new)
    }

    /// Returns all discussions in insertion order.
    pub fn list(&self) -> StoreResult<Vec<Discussion>> {
        self.ensure()?;
        self.store.get()
    }

    /// Returns one discussion by id.
    pub fn get(&self, id: &str) -> StoreResult<Option<Discussion>> {
        self.ensure()?;
        self.store.get_item(id)
    }

    /// Returns the discussion messages posted under one topic.
    pub fn list_by_topic(&self, topic_id: &str) -> StoreResult<Vec<Discussion>> {
        self.ensure()?;
        self.store
            .filter(|discussion: &Discussion| discussion.topic_id == topic_id)
    }

    /// Posts a message with a fresh id and a current `created_at` stamp.
    pub fn create(&self, new: NewDiscussion) -> StoreResult<Discussion> {
        self.ensure()?;
        self.store.create_item(Discussion::from_new(new))
    }

    /// Edits a message and returns the merged record, or `None` when the id
    /// is unknown.
    pub fn update(&self, id: &str, patch: DiscussionPatch) -> StoreResult<Option<Discussion>> {
        self.ensure()?;
        self.store.update_item(id, patch)
    }

    /// Deletes a message. Returns whether it existed.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        self.ensure()?;
        self.store.delete_item::<Discussion>(id)
    }
}
