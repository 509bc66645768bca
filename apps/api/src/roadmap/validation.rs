//! Schema validation for model-generated roadmaps.
//!
//! The model's text must deserialize into the roadmap shape and respect the
//! count limits the prompt asks for. Any violation is a named error that the
//! generator turns into a fallback.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Milestone, Roadmap};

pub const MILESTONE_RANGE: RangeInclusive<usize> = 4..=6;
pub const TASK_RANGE: RangeInclusive<usize> = 3..=5;

#[derive(Debug, Error)]
pub enum RoadmapValidationError {
    #[error("response does not match the roadmap schema: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("expected 4-6 milestones, got {count}")]
    MilestoneCount { count: usize },

    #[error("milestone {id} has {count} tasks, expected 3-5")]
    TaskCount { id: u32, count: usize },

    #[error("duplicate milestone id {id}")]
    DuplicateMilestoneId { id: u32 },
}

#[derive(Debug, Deserialize)]
struct RawRoadmap {
    role: String,
    timeline: String,
    milestones: Vec<RawMilestone>,
}

/// `completed` / `progress` echoed by the model are ignored on purpose.
#[derive(Debug, Deserialize)]
struct RawMilestone {
    #[serde(default)]
    id: Option<u32>,
    title: String,
    description: String,
    duration: String,
    tasks: Vec<String>,
}

/// Parses and validates model output into a fresh, unsaved roadmap.
///
/// Milestones without an id (or with id 0) get their 1-based position.
/// Every milestone starts with `completed = false` and `progress = 0`.
pub fn validate_roadmap(text: &str) -> Result<Roadmap, RoadmapValidationError> {
    let raw: RawRoadmap = serde_json::from_str(text)?;

    let count = raw.milestones.len();
    if !MILESTONE_RANGE.contains(&count) {
        return Err(RoadmapValidationError::MilestoneCount { count });
    }

    let mut milestones = Vec::with_capacity(count);

    for (index, m) in raw.milestones.into_iter().enumerate() {
        let id = match m.id {
            Some(id) if id > 0 => id,
            _ => index as u32 + 1,
        };

        if !TASK_RANGE.contains(&m.tasks.len()) {
            return Err(RoadmapValidationError::TaskCount {
                id,
                count: m.tasks.len(),
            });
        }

        milestones.push(Milestone {
            id,
            title: m.title,
            description: m.description,
            duration: m.duration,
            tasks: m.tasks,
            completed: false,
            progress: 0,
        });
    }

    check_unique_ids(&milestones)?;

    Ok(Roadmap {
        id: None,
        created_at: None,
        role: raw.role,
        timeline: raw.timeline,
        milestones,
        user_profile: None,
    })
}

/// Milestone ids address task keys, so they must be unique within a roadmap.
pub fn check_unique_ids(milestones: &[Milestone]) -> Result<(), RoadmapValidationError> {
    let mut seen = HashSet::with_capacity(milestones.len());
    match milestones.iter().find(|m| !seen.insert(m.id)) {
        Some(m) => Err(RoadmapValidationError::DuplicateMilestoneId { id: m.id }),
        None => Ok(()),
    }
}
