//! Topic persistence and the topic-side cross-entity rules.
//!
//! # Responsibility
//! - CRUD over the `topics` collection.
//! - Cascade a topic delete to the applications referencing it.
//!
//! # Invariants
//! - Deleting a topic removes all of its applications before the topic row
//!   itself, so no application ever points at a missing topic afterwards.
//! - Deleting an unknown topic id returns `false` and writes nothing.

use crate::model::topic::{NewTopic, Topic, TopicPatch};
use crate::repo::application_repo::ApplicationRepository;
use crate::repo::seed;
use crate::store::{KeyedStore, StorageBackend, StoreResult};
use log::info;

/// Repository for research topics.
pub struct TopicRepository<'a, B: StorageBackend> {
    store: KeyedStore<'a, B>,
}

impl<'a, B: StorageBackend> TopicRepository<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self {
            store: KeyedStore::new(backend),
        }
    }

    fn ensure(&self) -> StoreResult<()> {
        self.store.ensure_seeded(seed::topics)
    }

    /// Returns all topics in insertion order.
    pub fn list(&self) -> StoreResult<Vec<Topic>> {
        self.ensure()?;
        self.store.get()
    }

    /// Returns one topic by id.
    pub fn get(&self, id: &str) -> StoreResult<Option<Topic>> {
        self.ensure()?;
        self.store.get_item(id)
    }

    /// Returns the topics supervised by one teacher.
    pub fn list_by_teacher(&self, teacher_id: &str) -> StoreResult<Vec<Topic>> {
        self.ensure()?;
        self.store.filter(|topic: &Topic| topic.teacher_id == teacher_id)
    }

    /// Creates a topic with a fresh id, a zero application counter and a
    /// current `created_at` stamp.
    pub fn create(&self, new: NewTopic) -> StoreResult<Topic> {
        self.ensure()?;
        self.store.create_item(Topic::from_new(new))
    }

    /// Applies a partial update and returns the merged topic, or `None` when
    /// the id is unknown.
    pub fn update(&self, id: &str, patch: TopicPatch) -> StoreResult<Option<Topic>> {
        self.ensure()?;
        self.store.update_item(id, patch)
    }

    /// Deletes a topic and every application referencing it. Returns whether
    /// the topic existed.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        self.ensure()?;
        let applications = ApplicationRepository::new(self.store.backend());
        let attached = applications.list_by_topic(id)?;
        for application in &attached {
            applications.delete(&application.id)?;
        }
        let deleted = self.store.delete_item::<Topic>(id)?;
        if deleted {
            info!(
                "event=topic_cascade module=repo status=ok topic_id={} applications_removed={}",
                id,
                attached.len()
            );
        }
        Ok(deleted)
    }
}
