//! `/api/v1/bills`
//!
//! Bills are created and read only; there is no update or delete route.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use laundry_core::BillRequest;

use super::PageParams;
use crate::delivery::response::{created, paged, single};
use crate::delivery::AppState;
use crate::error::AppResult;

/// POST /api/v1/bills
///
/// Responds with the stored bill, customer, employee and products embedded.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<BillRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let bill = state.usecases.bill.register_new_bill(payload).await?;
    Ok(created(bill))
}

/// GET /api/v1/bills?page=&limit=
///
/// Headers only, newest first.
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let (bills, paging) = state.usecases.bill.find_all_bill(params.into_request()).await?;
    Ok(paged(bills, paging))
}

/// GET /api/v1/bills/{id}
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    Ok(single(state.usecases.bill.find_by_id_bill(&id).await?))
}
