//! Core domain logic for TopicMatch.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::application::{Application, ApplicationPatch, ApplicationStatus, NewApplication};
pub use model::discussion::{Discussion, DiscussionPatch, NewDiscussion};
pub use model::progress::{NewProgress, Progress, ProgressPatch, ProgressStatus};
pub use model::resource::{NewResource, Resource, ResourcePatch};
pub use model::topic::{NewTopic, Topic, TopicPatch};
pub use model::user::{NewUser, User, UserPatch, UserRole};
pub use repo::application_repo::ApplicationRepository;
pub use repo::discussion_repo::DiscussionRepository;
pub use repo::progress_repo::ProgressRepository;
pub use repo::resource_repo::ResourceRepository;
pub use repo::topic_repo::TopicRepository;
pub use repo::user_repo::UserRepository;
pub use store::{
    now_epoch_ms, open_store, open_store_in_memory, KeyedStore, MemoryBackend, Record,
    SqliteBackend, StorageBackend, StoreError, StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
