//! Student application record.

use crate::store::Record;
use serde::{Deserialize, Serialize};

/// Review state of an application.
///
/// The intended lifecycle is `Pending` to either `Accepted` or `Declined`,
/// both terminal. The repository stores whatever status it is handed; the
/// calling surface is responsible for only moving forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Declined,
}

/// A student's application to one research topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub topic_id: String,
    /// Cached topic title, captured when the application was submitted.
    pub topic_title: String,
    pub student_id: String,
    /// Cached student display name, captured at submission.
    pub student_name: String,
    pub message: String,
    pub status: ApplicationStatus,
    /// Epoch milliseconds, assigned at creation.
    pub applied_at: i64,
}

/// Caller-supplied fields for a new application. Id, submission stamp and the
/// initial status are repository-assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub topic_id: String,
    pub topic_title: String,
    pub student_id: String,
    pub student_name: String,
    pub message: String,
}

/// Partial application update. Only the review status is mutable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationPatch {
    pub status: Option<ApplicationStatus>,
}

impl Application {
    pub(crate) fn from_new(new: NewApplication) -> Self {
        Self {
            id: String::new(),
            topic_id: new.topic_id,
            topic_title: new.topic_title,
            student_id: new.student_id,
            student_name: new.student_name,
            message: new.message,
            status: ApplicationStatus::Pending,
            applied_at: 0,
        }
    }
}

impl Record for Application {
    const COLLECTION: &'static str = "applications";
    type Patch = ApplicationPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn stamp_created(&mut self, epoch_ms: i64) {
        self.applied_at = epoch_ms;
    }

    fn apply_patch(&mut self, patch: ApplicationPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}
