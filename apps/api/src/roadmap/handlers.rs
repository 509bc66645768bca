use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Roadmap, UserProfile};
use crate::progress::{apply_progress, ProgressReport};
use crate::roadmap::generator::fallback_outcome;
use crate::roadmap::validation::check_unique_ids;
use crate::roadmap::RoadmapSource;
use crate::state::AppState;
use crate::storage::{credentials, roadmaps};

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub profile: UserProfile,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub roadmap: Roadmap,
    pub source: RoadmapSource,
    pub used_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRoadmapRequest {
    pub roadmap: Roadmap,
    #[serde(default)]
    pub user_profile: Option<UserProfile>,
}

#[derive(Serialize)]
pub struct RoadmapListResponse {
    pub roadmaps: Vec<Roadmap>,
}

#[derive(Serialize)]
pub struct RoadmapDetailResponse {
    pub roadmap: Roadmap,
    pub progress: ProgressReport,
}

/// POST /api/v1/roadmaps/generate
/// Always answers with a roadmap; `usedFallback` tells the UI to warn.
/// An unreadable credential counts as a missing one.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Json<GenerateResponse> {
    let outcome = match credentials::api_key(state.store.as_ref()) {
        Ok(api_key) => {
            state
                .generator
                .generate(&req.profile, api_key.as_deref())
                .await
        }
        Err(e) => fallback_outcome(&req.profile, e.into()),
    };

    Json(GenerateResponse {
        used_fallback: outcome.used_fallback(),
        fallback_reason: outcome.fallback_reason().map(str::to_string),
        source: outcome.source,
        roadmap: outcome.roadmap,
    })
}

/// POST /api/v1/roadmaps
pub async fn handle_save_roadmap(
    State(state): State<AppState>,
    Json(req): Json<SaveRoadmapRequest>,
) -> Result<(StatusCode, Json<Roadmap>), AppError> {
    if req.roadmap.role.trim().is_empty() {
        return Err(AppError::Validation("roadmap role is required".to_string()));
    }
    check_unique_ids(&req.roadmap.milestones)?;
    let saved = roadmaps::save_roadmap(state.store.as_ref(), req.roadmap, req.user_profile)?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/v1/roadmaps
pub async fn handle_list_roadmaps(
    State(state): State<AppState>,
) -> Result<Json<RoadmapListResponse>, AppError> {
    Ok(Json(RoadmapListResponse {
        roadmaps: roadmaps::list_roadmaps(state.store.as_ref())?,
    }))
}

/// GET /api/v1/roadmaps/:id
/// Milestone progress is recomputed from the stored completion set.
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RoadmapDetailResponse>, AppError> {
    let mut roadmap = roadmaps::find_roadmap(state.store.as_ref(), id)?
        .ok_or_else(|| AppError::NotFound(format!("roadmap {id}")))?;

    let completed = state.progress.load(Some(id));
    apply_progress(&mut roadmap, &completed);
    let progress = ProgressReport::build(&roadmap, &completed);

    Ok(Json(RoadmapDetailResponse { roadmap, progress }))
}
