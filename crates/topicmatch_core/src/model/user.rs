//! User account record.

use crate::store::Record;
use serde::{Deserialize, Serialize};

/// Platform role. Serialized lowercase (`"student"` / `"teacher"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Teacher,
}

/// A registered student or teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Epoch milliseconds, assigned at creation.
    pub created_at: i64,
}

/// Caller-supplied fields for a new user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Partial user update. Role is fixed at registration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    pub(crate) fn from_new(new: NewUser) -> Self {
        Self {
            id: String::new(),
            name: new.name,
            email: new.email,
            role: new.role,
            created_at: 0,
        }
    }
}

impl Record for User {
    const COLLECTION: &'static str = "users";
    type Patch = UserPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn stamp_created(&mut self, epoch_ms: i64) {
        self.created_at = epoch_ms;
    }

    fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}
