//! Error types for the HTTP API.
//!
//! ## Status Mapping
//! ```text
//! ┌──────────────────────────────────────┬────────┬──────────────────────┐
//! │ Source                               │ Status │ code                 │
//! ├──────────────────────────────────────┼────────┼──────────────────────┤
//! │ CoreError::Validation                │  400   │ VALIDATION_ERROR     │
//! │ JSON / query / path rejection        │  400   │ BAD_REQUEST          │
//! │ CoreError::InvalidCredentials        │  401   │ UNAUTHORIZED         │
//! │ NotFound (core, db), RowNotFound     │  404   │ NOT_FOUND            │
//! │ CoreError::Conflict, unique / FK     │  409   │ CONFLICT             │
//! │ any other DbError                    │  500   │ DATABASE_ERROR       │
//! │ hashing / token failures             │  500   │ INTERNAL_ERROR       │
//! └──────────────────────────────────────┴────────┴──────────────────────┘
//! ```
//! Every error body is `{ "code": ..., "message": ... }`.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use laundry_core::CoreError;
use laundry_db::DbError;

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status and machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            error!(code, error = %self, "Request failed");
        }

        let body = ErrorBody {
            code: code.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => AppError::Validation(e.to_string()),
            CoreError::NotFound { .. } => AppError::NotFound(err.to_string()),
            CoreError::Conflict { .. } => AppError::Conflict(err.to_string()),
            CoreError::InvalidCredentials => AppError::Unauthorized(err.to_string()),
        }
    }
}

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { .. } | DbError::RowNotFound => AppError::NotFound(err.to_string()),
            DbError::UniqueViolation { .. } => AppError::Conflict(err.to_string()),
            DbError::ForeignKeyViolation { .. } => AppError::Conflict(err.to_string()),
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<laundry_core::ValidationError> for AppError {
    fn from(err: laundry_core::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Result type for use cases and handlers.
pub type AppResult<T> = Result<T, AppError>;
