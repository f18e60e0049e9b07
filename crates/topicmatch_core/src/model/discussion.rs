//! Topic discussion message record.

use crate::model::user::UserRole;
use crate::store::Record;
use serde::{Deserialize, Serialize};

/// One message on a topic's discussion board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discussion {
    pub id: String,
    pub topic_id: String,
    pub user_id: String,
    /// Cached author display name, captured when the message was posted.
    pub user_name: String,
    pub user_role: UserRole,
    pub message: String,
    /// Epoch milliseconds, assigned at creation.
    pub created_at: i64,
}

/// Caller-supplied fields for a new discussion message.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDiscussion {
    pub topic_id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_role: UserRole,
    pub message: String,
}

/// Partial discussion update. Only the message body can be edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscussionPatch {
    pub message: Option<String>,
}

impl Discussion {
    pub(crate) fn from_new(new: NewDiscussion) -> Self {
        Self {
            id: String::new(),
            topic_id: new.topic_id,
            user_id: new.user_id,
            user_name: new.user_name,
            user_role: new.user_role,
            message: new.message,
            created_at: 0,
        }
    }
}

impl Record for Discussion {
    const COLLECTION: &'static str = "discussions";
    type Patch = DiscussionPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn stamp_created(&mut self, epoch_ms: i64) {
        self.created_at = epoch_ms;
    }

    fn apply_patch(&mut self, patch: DiscussionPatch) {
        if let Some(message) = patch.message {
            self.message = message;
        }
    }
}
