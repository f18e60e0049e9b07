//! Shared topic resource record.

use crate::store::Record;
use serde::{Deserialize, Serialize};

/// A file or link shared on a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub topic_id: String,
    pub name: String,
    pub url: String,
    /// Free-form resource type tag. Serialized as `type` to match the
    /// application's JSON layout.
    #[serde(rename = "type")]
    pub kind: String,
    pub uploaded_by: String,
    /// Epoch milliseconds, assigned at creation.
    pub created_at: i64,
}

/// Caller-supplied fields for a new resource.
#[derive(Debug, Clone, PartialEq)]
pub struct NewResource {
    pub topic_id: String,
    pub name: String,
    pub url: String,
    pub kind: String,
    pub uploaded_by: String,
}

/// Partial resource update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourcePatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub kind: Option<String>,
}

impl Resource {
    pub(crate) fn from_new(new: NewResource) -> Self {
        Self {
            id: String::new(),
            topic_id: new.topic_id,
            name: new.name,
            url: new.url,
            kind: new.kind,
            uploaded_by: new.uploaded_by,
            created_at: 0,
        }
    }
}

impl Record for Resource {
    const COLLECTION: &'static str = "resources";
    type Patch = ResourcePatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn stamp_created(&mut self, epoch_ms: i64) {
        self.created_at = epoch_ms;
    }

    fn apply_patch(&mut self, patch: ResourcePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
    }
}
