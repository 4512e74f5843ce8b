//! # Laundry API
//!
//! HTTP backend for a laundry shop: units, products, customers, employees,
//! bills and back-office users.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Laundry API                                    │
//! │                                                                         │
//! │  Client ──► axum router (delivery) ──► use cases ──► repositories      │
//! │               TraceLayer, CORS          validation     laundry-db      │
//! │               JSON envelopes            uniqueness     PostgreSQL      │
//! │                                         references                     │
//! │                                                                         │
//! │  manager.rs wires Database → repositories → use cases → AppState      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables (a `.env` file is read when present):
//! - `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER`, `DB_PASSWORD`, `DB_DRIVER` - required
//! - `DB_MAX_CONNECTIONS`, `DB_ACQUIRE_TIMEOUT_SECS` - pool sizing (default 10, 30s)
//! - `API_HOST`, `API_PORT` - listener (default `0.0.0.0:8080`)
//! - `DEFAULT_ROWS_PER_PAGE` - page size for `limit=0` (default 10)
//! - `JWT_SECRET`, `JWT_ISSUER`, `JWT_ACCESS_LIFETIME_SECS` - token signing

pub mod auth;
pub mod config;
pub mod delivery;
pub mod error;
pub mod manager;
pub mod usecase;

pub use config::AppConfig;
pub use delivery::{create_router, AppState};
pub use error::{AppError, AppResult};
pub use manager::{RepoManager, UseCaseManager};
