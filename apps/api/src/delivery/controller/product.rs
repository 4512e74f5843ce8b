//! `/api/v1/products`

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use laundry_core::Product;

use super::PageParams;
use crate::delivery::response::{created, paged, single};
use crate::delivery::AppState;
use crate::error::AppResult;

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Product>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let product = state.usecases.product.register_new_product(payload).await?;
    Ok(created(product))
}

/// GET /api/v1/products?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let (products, paging) = state
        .usecases
        .product
        .find_all_product(params.into_request())
        .await?;
    Ok(paged(products, paging))
}

/// GET /api/v1/products/{id}
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    Ok(single(state.usecases.product.find_by_id_product(&id).await?))
}

/// PUT /api/v1/products
pub async fn update(
    State(state): State<AppState>,
    payload: Result<Json<Product>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    Ok(Json(state.usecases.product.update_product(payload).await?))
}

/// DELETE /api/v1/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id?;
    state.usecases.product.delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
