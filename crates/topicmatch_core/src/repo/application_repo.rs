//! Application persistence and the topic application counter.
//!
//! # Responsibility
//! - CRUD over the `applications` collection.
//! - Keep `Topic::applications` in step with application create/delete.
//!
//! # Invariants
//! - Creating an application increments its topic's counter by one; deleting
//!   one decrements it, never below zero.
//! - Counter updates skip silently when the referenced topic no longer
//!   exists; the application write itself still succeeds.
//! - The application write and the counter write are two separate backend
//!   writes, in that order.

use crate::model::application::{Application, ApplicationPatch, NewApplication};
use crate::model::topic::Topic;
use crate::repo::seed;
use crate::store::{KeyedStore, StorageBackend, StoreResult};

/// Repository for student applications.
pub struct ApplicationRepository<'a, B: StorageBackend> {
    store: KeyedStore<'a, B>,
}

impl<'a, B: StorageBackend> ApplicationRepository<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self {
            store: KeyedStore::new(backend),
        }
    }

    fn ensure(&self) -> StoreResult<()> {
        self.store.ensure_seeded(seed::applications)
    }

    /// Returns all applications in insertion order.
    pub fn list(&self) -> StoreResult<Vec<Application>> {
        self.ensure()?;
        self.store.get()
    }

    /// Returns one application by id.
    pub fn get(&self, id: &str) -> StoreResult<Option<Application>> {
        self.ensure()?;
        self.store.get_item(id)
    }

    /// Returns the applications submitted for one topic.
    pub fn list_by_topic(&self, topic_id: &str) -> StoreResult<Vec<Application>> {
        self.ensure()?;
        self.store
            .filter(|application: &Application| application.topic_id == topic_id)
    }

    /// Returns the applications submitted by one student.
    pub fn list_by_student(&self, student_id: &str) -> StoreResult<Vec<Application>> {
        self.ensure()?;
        self.store
            .filter(|application: &Application| application.student_id == student_id)
    }

    /// Creates a pending application and bumps the topic's counter.
    pub fn create(&self, new: NewApplication) -> StoreResult<Application> {
        self.ensure()?;
        let created = self.store.create_item(Application::from_new(new))?;
        self.increment_topic_counter(&created.topic_id)?;
        Ok(created)
    }

    /// Applies a partial update (status change) and returns the merged
    /// application, or `None` when the id is unknown.
    pub fn update(&self, id: &str, patch: ApplicationPatch) -> StoreResult<Option<Application>> {
        self.ensure()?;
        self.store.update_item(id, patch)
    }

    /// Deletes an application and lowers the topic's counter. Returns whether
    /// the application existed.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        self.ensure()?;
        let Some(existing) = self.store.get_item::<Application>(id)? else {
            return Ok(false);
        };
        let deleted = self.store.delete_item::<Application>(id)?;
        if deleted {
            self.decrement_topic_counter(&existing.topic_id)?;
        }
        Ok(deleted)
    }

    fn increment_topic_counter(&self, topic_id: &str) -> StoreResult<()> {
        self.store.ensure_seeded(seed::topics)?;
        let mut topics = self.store.get::<Topic>()?;
        let Some(topic) = topics.iter_mut().find(|topic| topic.id == topic_id) else {
            // Topic already gone; leave the application as-is.
            return Ok(());
        };
        topic.applications += 1;
        self.store.set(&topics)
    }

    fn decrement_topic_counter(&self, topic_id: &str) -> StoreResult<()> {
        self.store.ensure_seeded(seed::topics)?;
        let mut topics = self.store.get::<Topic>()?;
        let Some(topic) = topics.iter_mut().find(|topic| topic.id == topic_id) else {
            return Ok(());
        };
        if topic.applications == 0 {
            return Ok(());
        }
        topic.applications -= 1;
        self.store.set(&topics)
    }
}
