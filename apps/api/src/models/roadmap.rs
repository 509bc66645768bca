use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::profile::UserProfile;

/// One phase of a roadmap.
///
/// Task identity for completion tracking is `(id, index into tasks)`, so the
/// task order is significant. `completed` is advisory only and `progress` is
/// recomputed from the completion set whenever a roadmap is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub tasks: Vec<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub progress: u8,
}

/// A generated or fallback career plan.
///
/// `id` and `created_at` stay empty until the roadmap is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub role: String,
    pub timeline: String,
    pub milestones: Vec<Milestone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<UserProfile>,
}

impl Roadmap {
    pub fn total_tasks(&self) -> usize {
        self.milestones.iter().map(|m| m.tasks.len()).sum()
    }
}
