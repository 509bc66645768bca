use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::Roadmap;
use crate::progress::{toggle, CompletionSet, ProgressReport};
use crate::state::AppState;
use crate::storage::roadmaps::find_roadmap;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    pub milestone_id: u32,
    pub task_index: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub roadmap: Roadmap,
    #[serde(default)]
    pub completed_tasks: CompletionSet,
}

fn saved_roadmap(state: &AppState, id: Uuid) -> Result<Roadmap, AppError> {
    find_roadmap(state.store.as_ref(), id)?
        .ok_or_else(|| AppError::NotFound(format!("roadmap {id}")))
}

/// GET /api/v1/roadmaps/:id/progress
pub async fn handle_get_progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProgressReport>, AppError> {
    let roadmap = saved_roadmap(&state, id)?;
    let completed = state.progress.load(Some(id));
    Ok(Json(ProgressReport::build(&roadmap, &completed)))
}

/// POST /api/v1/roadmaps/:id/progress/toggle
/// Flips one task and persists the whole set.
pub async fn handle_toggle_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<ProgressReport>, AppError> {
    let roadmap = saved_roadmap(&state, id)?;
    let current = state.progress.load(Some(id));
    let next = toggle(&current, req.milestone_id, req.task_index);
    state.progress.save(Some(id), &next)?;

    debug!(
        "Toggled task {}-{} on roadmap {id}",
        req.milestone_id, req.task_index
    );
    Ok(Json(ProgressReport::build(&roadmap, &next)))
}

/// POST /api/v1/progress/preview
/// Session-only progress for a roadmap that was never saved. Nothing is stored.
pub async fn handle_preview(Json(req): Json<PreviewRequest>) -> Json<ProgressReport> {
    Json(ProgressReport::build(&req.roadmap, &req.completed_tasks))
}
