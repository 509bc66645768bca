use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::storage::credentials;

#[derive(Serialize)]
pub struct CredentialStatus {
    pub configured: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCredentialRequest {
    pub api_key: String,
}

/// GET /api/v1/credentials
/// Reports whether a key is stored. The key itself is never returned.
pub async fn handle_get_credentials(
    State(state): State<AppState>,
) -> Result<Json<CredentialStatus>, AppError> {
    Ok(Json(CredentialStatus {
        configured: credentials::has_api_key(state.store.as_ref())?,
    }))
}

/// PUT /api/v1/credentials
pub async fn handle_set_credentials(
    State(state): State<AppState>,
    Json(req): Json<SetCredentialRequest>,
) -> Result<StatusCode, AppError> {
    credentials::set_api_key(state.store.as_ref(), &req.api_key)?;
    Ok(StatusCode::NO_CONTENT)
}
