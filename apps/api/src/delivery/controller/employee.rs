//! `/api/v1/employees`. Same shape as customers.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use laundry_core::Employee;

use super::PageParams;
use crate::delivery::response::{created, paged, single};
use crate::delivery::AppState;
use crate::error::AppResult;

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Employee>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let employee = state.usecases.employee.register_new_employee(payload).await?;
    Ok(created(employee))
}

pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let (employees, paging) = state
        .usecases
        .employee
        .find_all_employee(params.into_request())
        .await?;
    Ok(paged(employees, paging))
}

pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    Ok(single(state.usecases.employee.find_by_id_employee(&id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    payload: Result<Json<Employee>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    Ok(Json(state.usecases.employee.update_employee(payload).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id?;
    state.usecases.employee.delete_employee(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
