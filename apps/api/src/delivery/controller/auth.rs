//! `/api/v1/auth`

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use laundry_core::{LoginRequest, TokenResponse};

use crate::delivery::AppState;
use crate::error::AppResult;

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<TokenResponse>> {
    let Json(payload) = payload?;
    Ok(Json(state.usecases.auth.login(payload).await?))
}
