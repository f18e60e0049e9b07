//! Domain records persisted by the storage layer.
//!
//! # Responsibility
//! - Define the canonical shape of every stored entity.
//! - Keep the serialized form compatible with the camelCase JSON layout the
//!   application exchanges with its remote API.
//!
//! # Invariants
//! - Ids and creation stamps are repository-assigned, never caller-supplied.
//! - Denormalized name/title copies are cached at write time and are not
//!   refreshed when their source record changes.

pub mod application;
pub mod discussion;
pub mod progress;
pub mod resource;
pub mod topic;
pub mod user;
