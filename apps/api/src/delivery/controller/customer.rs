//! `/api/v1/customers`

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use laundry_core::Customer;

use super::PageParams;
use crate::delivery::response::{created, paged, single};
use crate::delivery::AppState;
use crate::error::AppResult;

/// POST /api/v1/customers
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Customer>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let customer = state.usecases.customer.register_new_customer(payload).await?;
    Ok(created(customer))
}

/// GET /api/v1/customers?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let (customers, paging) = state
        .usecases
        .customer
        .find_all_customer(params.into_request())
        .await?;
    Ok(paged(customers, paging))
}

/// GET /api/v1/customers/{id}
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    Ok(single(state.usecases.customer.find_by_id_customer(&id).await?))
}

/// PUT /api/v1/customers
pub async fn update(
    State(state): State<AppState>,
    payload: Result<Json<Customer>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    Ok(Json(state.usecases.customer.update_customer(payload).await?))
}

/// DELETE /api/v1/customers/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id?;
    state.usecases.customer.delete_customer(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
