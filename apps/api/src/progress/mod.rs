//! Task completion tracking.
//!
//! A task is identified by `(milestone id, task index)` and rendered as the
//! key `"{milestone_id}-{task_index}"`. The completion set is a plain set of
//! such keys; keys left over from an older task list simply match nothing.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Milestone, Roadmap};

pub mod handlers;
pub mod store;

pub use store::ProgressStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskKey {
    pub milestone_id: u32,
    pub task_index: usize,
}

impl TaskKey {
    pub fn new(milestone_id: u32, task_index: usize) -> Self {
        Self {
            milestone_id,
            task_index,
        }
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.milestone_id, self.task_index)
    }
}

/// Set of completed task keys. Stored verbatim, including stale keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionSet(BTreeSet<String>);

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &TaskKey) -> bool {
        self.0.contains(&key.to_string())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Returns a copy of `set` with the task's key flipped.
pub fn toggle(set: &CompletionSet, milestone_id: u32, task_index: usize) -> CompletionSet {
    let key = TaskKey::new(milestone_id, task_index).to_string();
    let mut next = set.0.clone();
    if !next.remove(&key) {
        next.insert(key);
    }
    CompletionSet(next)
}

fn completed_in(milestone: &Milestone, set: &CompletionSet) -> usize {
    (0..milestone.tasks.len())
        .filter(|&index| set.contains(&TaskKey::new(milestone.id, index)))
        .count()
}

/// Percentage of the milestone's tasks present in `set`, rounded. 0 when the
/// milestone has no tasks.
pub fn milestone_progress(milestone: &Milestone, set: &CompletionSet) -> u8 {
    let total = milestone.tasks.len();
    if total == 0 {
        return 0;
    }
    let done = completed_in(milestone, set);
    (100.0 * done as f64 / total as f64).round() as u8
}

/// Percentage of all roadmap tasks present in `set`. Keys that do not address
/// a current task are ignored. 0 when the roadmap has no tasks.
pub fn overall_progress(roadmap: &Roadmap, set: &CompletionSet) -> f64 {
    let total = roadmap.total_tasks();
    if total == 0 {
        return 0.0;
    }
    100.0 * completed_count(roadmap, set) as f64 / total as f64
}

fn completed_count(roadmap: &Roadmap, set: &CompletionSet) -> usize {
    roadmap
        .milestones
        .iter()
        .map(|m| completed_in(m, set))
        .sum()
}

/// Writes the derived percentage into every milestone's `progress`.
/// `completed` is left alone.
pub fn apply_progress(roadmap: &mut Roadmap, set: &CompletionSet) {
    for milestone in &mut roadmap.milestones {
        milestone.progress = milestone_progress(milestone, set);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneProgress {
    pub id: u32,
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub progress: u8,
}

/// Dashboard payload for one roadmap and completion set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub completed_tasks: CompletionSet,
    pub completed_count: usize,
    pub total_tasks: usize,
    pub overall_progress: f64,
    pub milestones: Vec<MilestoneProgress>,
}

impl ProgressReport {
    pub fn build(roadmap: &Roadmap, set: &CompletionSet) -> Self {
        let milestones = roadmap
            .milestones
            .iter()
            .map(|m| MilestoneProgress {
                id: m.id,
                completed_tasks: completed_in(m, set),
                total_tasks: m.tasks.len(),
                progress: milestone_progress(m, set),
            })
            .collect();

        Self {
            completed_tasks: set.clone(),
            completed_count: completed_count(roadmap, set),
            total_tasks: roadmap.total_tasks(),
            overall_progress: overall_progress(roadmap, set),
            milestones,
        }
    }
}
