//! Repository layer over the keyed collection store.
//!
//! # Responsibility
//! - Provide entity-oriented persistence APIs for topics, applications,
//!   users, discussions, resources and progress records.
//! - Own cross-entity rules: the topic application counter and the
//!   cascading delete of a topic's applications.
//!
//! # Invariants
//! - Every public read or write seeds its collection first, so callers can
//!   start from an empty backend without a bootstrap step.
//! - Repositories never report a missing record as an error; reads return
//!   `Option`/`Vec` and deletes return `bool`.

pub mod application_repo;
pub mod discussion_repo;
pub mod progress_repo;
pub mod resource_repo;
pub mod seed;
pub mod topic_repo;
pub mod user_repo;
