//! `/api/v1/uoms`

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use laundry_core::Uom;

use super::PageParams;
use crate::delivery::response::{created, paged, single};
use crate::delivery::AppState;
use crate::error::AppResult;

/// POST /api/v1/uoms
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Uom>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let uom = state.usecases.uom.register_new_uom(payload).await?;
    Ok(created(uom))
}

/// GET /api/v1/uoms?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let (uoms, paging) = state.usecases.uom.find_all_uom(params.into_request()).await?;
    Ok(paged(uoms, paging))
}

/// GET /api/v1/uoms/{id}
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    Ok(single(state.usecases.uom.find_by_id_uom(&id).await?))
}

/// PUT /api/v1/uoms
pub async fn update(
    State(state): State<AppState>,
    payload: Result<Json<Uom>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    Ok(Json(state.usecases.uom.update_uom(payload).await?))
}

/// DELETE /api/v1/uoms/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id?;
    state.usecases.uom.delete_uom(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
