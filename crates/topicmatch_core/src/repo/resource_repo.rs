//! Shared resources (links, papers, datasets) attached to topics.
//!
//! # Responsibility
//! - CRUD over the `resources` collection, usually scoped to one topic.
//!
//! # Invariants
//! - The collection seeds empty; there are no fixture resources.
//! - Deleting a topic does not remove its resources.

use crate::model::resource::{NewResource, Resource, ResourcePatch};
use crate::store::{KeyedStore, StorageBackend, StoreResult};

/// Repository for topic resources.
pub struct ResourceRepository<'a, B: StorageBackend> {
    store: KeyedStore<'a, B>,
}

impl<'a, B: StorageBackend> ResourceRepository<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self {
            store: KeyedStore::new(backend),
        }
    }

    fn ensure(&self) -> StoreResult<()> {
        self.store.ensure_seeded(Vec::<Resource>::new)
    }

    /// Returns all resources in insertion order.
    pub fn list(&self) -> StoreResult<Vec<Resource>> {
        self.ensure()?;
        self.store.get()
    }

    /// Returns one resource by id.
    pub fn get(&self, id: &str) -> StoreResult<Option<Resource>> {
        self.ensure()?;
        self.store.get_item(id)
    }

    /// Returns the resources shared under one topic.
    pub fn list_by_topic(&self, topic_id: &str) -> StoreResult<Vec<Resource>> {
        self.ensure()?;
        self.store
            .filter(|resource: &Resource| resource.topic_id == topic_id)
    }

    /// Shares a resource with a fresh id and a current `created_at` stamp.
    pub fn create(&self, new: NewResource) -> StoreResult<Resource> {
        self.ensure()?;
        self.store.create_item(Resource::from_new(new))
    }

    /// Edits a resource and returns the merged record, or `None` when the id
    /// is unknown.
    pub fn update(&self, id: &str, patch: ResourcePatch) -> StoreResult<Option<Resource>> {
        self.ensure()?;
        self.store.update_item(id, patch)
    }

    /// Deletes a resource. Returns whether it existed.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        self.ensure()?;
        self.store.delete_item::<Resource>(id)
    }
}
