//! User accounts and the current-user pointer.
//!
//! # Responsibility
//! - CRUD over the `users` collection.
//! - Read and write the signed-in user's id under its own backend key.
//!
//! # Invariants
//! - The pointer is stored as a JSON string under `currentUserId`, separate
//!   from the `users` collection.
//! - A dangling pointer (deleted user, corrupt value) resolves to `None`
//!   rather than an error.

use crate::model::user::{NewUser, User, UserPatch};
use crate::repo::seed;
use crate::store::{KeyedStore, StorageBackend, StoreResult};

const CURRENT_USER_KEY: &str = "currentUserId";

/// Repository for accounts and the session pointer.
pub struct UserRepository<'a, B: StorageBackend> {
    store: KeyedStore<'a, B>,
}

impl<'a, B: StorageBackend> UserRepository<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self {
            store: KeyedStore::new(backend),
        }
    }

    fn ensure(&self) -> StoreResult<()> {
        self.store.ensure_seeded(seed::users)
    }

    /// Returns all users in insertion order.
    pub fn list(&self) -> StoreResult<Vec<User>> {
        self.ensure()?;
        self.store.get()
    }

    /// Returns one user by id.
    pub fn get(&self, id: &str) -> StoreResult<Option<User>> {
        self.ensure()?;
        self.store.get_item(id)
    }

    /// Creates a user with a fresh id and a current `created_at` stamp.
    pub fn create(&self, new: NewUser) -> StoreResult<User> {
        self.ensure()?;
        self.store.create_item(User::from_new(new))
    }

    /// Applies a partial update and returns the merged user, or `None` when
    /// the id is unknown.
    pub fn update(&self, id: &str, patch: UserPatch) -> StoreResult<Option<User>> {
        self.ensure()?;
        self.store.update_item(id, patch)
    }

    /// Deletes a user. Returns whether it existed. The current-user pointer
    /// is left untouched and dangles until cleared or reassigned.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        self.ensure()?;
        self.store.delete_item::<User>(id)
    }

    /// Records `id` as the signed-in user.
    pub fn set_current_user(&self, id: &str) -> StoreResult<()> {
        let value = serde_json::to_string(id)?;
        self.store.backend().write(CURRENT_USER_KEY, &value)
    }

    /// Returns the signed-in user's id, if any.
    pub fn current_user_id(&self) -> StoreResult<Option<String>> {
        let Some(raw) = self.store.backend().read(CURRENT_USER_KEY)? else {
            return Ok(None);
        };
        Ok(serde_json::from_str(&raw).ok())
    }

    /// Resolves the signed-in user's record, if the pointer is set and still
    /// names an existing user.
    pub fn current_user(&self) -> StoreResult<Option<User>> {
        let Some(id) = self.current_user_id()? else {
            return Ok(None);
        };
        self.get(&id)
    }

    /// Clears the signed-in user.
    pub fn clear_current_user(&self) -> StoreResult<()> {
        self.store.backend().remove(CURRENT_USER_KEY)
    }
}
