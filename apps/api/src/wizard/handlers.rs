use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::storage::credentials::has_api_key;
use crate::wizard::assessment::{form_options, FormOptions};
use crate::wizard::{WizardEvent, WizardStep};

#[derive(Serialize)]
pub struct StepResponse {
    pub step: WizardStep,
}

#[derive(Deserialize)]
pub struct TransitionRequest {
    pub step: WizardStep,
    #[serde(flatten)]
    pub event: WizardEvent,
}

/// GET /api/v1/wizard/start
/// Applies the start event using the stored credential state.
pub async fn handle_start(State(state): State<AppState>) -> Result<Json<StepResponse>, AppError> {
    let has_credential = has_api_key(state.store.as_ref())?;
    let step = WizardStep::Landing.apply(WizardEvent::Start { has_credential })?;
    Ok(Json(StepResponse { step }))
}

/// POST /api/v1/wizard/transition
pub async fn handle_transition(
    Json(req): Json<TransitionRequest>,
) -> Result<Json<StepResponse>, AppError> {
    let step = req.step.apply(req.event)?;
    Ok(Json(StepResponse { step }))
}

/// GET /api/v1/wizard/form
pub async fn handle_form() -> Json<FormOptions> {
    Json(form_options())
}
