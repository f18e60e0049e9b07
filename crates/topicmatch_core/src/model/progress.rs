//! Student progress record.

use crate::store::Record;
use serde::{Deserialize, Serialize};

/// Work state of one student on one topic. The serialized names carry spaces
/// (`"Not Started"`, `"In Progress"`) to match the application's JSON layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// Progress of one student on one topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub id: String,
    pub topic_id: String,
    pub student_id: String,
    pub status: ProgressStatus,
    /// 0 to 100.
    pub completion_percentage: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Epoch milliseconds; set at creation and refreshed by every update.
    pub last_updated: i64,
}

/// Caller-supplied fields for a new progress record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProgress {
    pub topic_id: String,
    pub student_id: String,
    pub status: ProgressStatus,
    pub completion_percentage: u8,
    pub notes: Option<String>,
}

/// Partial progress update; the repository refreshes `last_updated` itself on
/// every update, whatever the patch contains.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressPatch {
    pub status: Option<ProgressStatus>,
    pub completion_percentage: Option<u8>,
    pub notes: Option<String>,
}

impl Progress {
    pub(crate) fn from_new(new: NewProgress) -> Self {
        Self {
            id: String::new(),
            topic_id: new.topic_id,
            student_id: new.student_id,
            status: new.status,
            completion_percentage: new.completion_percentage,
            notes: new.notes,
            last_updated: 0,
        }
    }
}

impl Record for Progress {
    const COLLECTION: &'static str = "progress";
    type Patch = ProgressPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn stamp_created(&mut self, epoch_ms: i64) {
        self.last_updated = epoch_ms;
    }

    fn apply_patch(&mut self, patch: ProgressPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(completion_percentage) = patch.completion_percentage {
            self.completion_percentage = completion_percentage;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
    }
}
