//! Research topic record.

use crate::store::Record;
use serde::{Deserialize, Serialize};

/// A research topic offered by a teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Owning teacher's user id.
    pub teacher_id: String,
    /// Cached teacher display name, captured when the topic was created.
    pub teacher_name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<String>,
    /// Application deadline exactly as entered by the teacher.
    pub deadline: String,
    pub contact: String,
    /// Count of live applications for this topic, maintained incrementally by
    /// the application repository. Never recomputed from scratch.
    pub applications: u32,
    /// Epoch milliseconds, assigned at creation.
    pub created_at: i64,
}

/// Caller-supplied fields for a new topic. Id, creation stamp and the
/// application counter are repository-assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTopic {
    pub title: String,
    pub description: String,
    pub teacher_id: String,
    pub teacher_name: String,
    pub category: String,
    pub prerequisites: Option<String>,
    pub deadline: String,
    pub contact: String,
}

/// Partial topic update; `None` fields keep their current value.
///
/// Ownership and the cached teacher name are fixed at creation and cannot be
/// patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub prerequisites: Option<String>,
    pub deadline: Option<String>,
    pub contact: Option<String>,
    pub applications: Option<u32>,
}

impl Topic {
    pub(crate) fn from_new(new: NewTopic) -> Self {
        Self {
            id: String::new(),
            title: new.title,
            description: new.description,
            teacher_id: new.teacher_id,
            teacher_name: new.teacher_name,
            category: new.category,
            prerequisites: new.prerequisites,
            deadline: new.deadline,
            contact: new.contact,
            applications: 0,
            created_at: 0,
        }
    }
}

impl Record for Topic {
    const COLLECTION: &'static str = "topics";
    type Patch = TopicPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn stamp_created(&mut self, epoch_ms: i64) {
        self.created_at = epoch_ms;
    }

    fn apply_patch(&mut self, patch: TopicPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(prerequisites) = patch.prerequisites {
            self.prerequisites = Some(prerequisites);
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = deadline;
        }
        if let Some(contact) = patch.contact {
            self.contact = contact;
        }
        if let Some(applications) = patch.applications {
            self.applications = applications;
        }
    }
}
