//! Success envelopes.
//!
//! ```text
//! list    200  { "status": {code, description}, "data": [...], "paging": {...} }
//! get     200  { "status": {code, description}, "data": {...} }
//! create  201  created entity
//! update  200  updated entity
//! delete  204  empty
//! ```

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use laundry_core::Paging;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    pub code: u16,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SingleResponse<T> {
    pub status: Status,
    pub data: T,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub status: Status,
    pub data: Vec<T>,
    pub paging: Paging,
}

fn ok(description: &str) -> Status {
    Status {
        code: StatusCode::OK.as_u16(),
        description: description.to_string(),
    }
}

pub fn single<T: Serialize>(data: T) -> Json<SingleResponse<T>> {
    Json(SingleResponse {
        status: ok("Get By Id Data Successfully"),
        data,
    })
}

pub fn paged<T: Serialize>(data: Vec<T>, paging: Paging) -> Json<PagedResponse<T>> {
    Json(PagedResponse {
        status: ok("Get All Data Successfully"),
        data,
        paging,
    })
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}
