//! # laundry-db: Database Layer for the Laundry Backend
//!
//! PostgreSQL access for the laundry backend, built on sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Laundry Backend Data Flow                         │
//! │                                                                         │
//! │  Use case (e.g. BillUseCase::register_new_bill)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    laundry-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (traits +    │    │  (embedded)  │  │   │
//! │  │   │               │    │   Pg impls)   │    │              │  │   │
//! │  │   │ PgPool        │◄───│ Uom, Product  │    │ 001_initial  │  │   │
//! │  │   │               │    │ Customer, ... │    │ _schema.sql  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     PostgreSQL                                  │   │
//! │  │   uom, product, customer, employee, bill, bill_detail, app_user │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository traits and PostgreSQL implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use laundry_db::{Database, DbConfig, UomRepository};
//!
//! let db = Database::new(DbConfig::from_url("postgres://...")?).await?;
//! let kg = db.uoms().get_by_name("KG").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use sqlx::postgres::PgConnectOptions;

pub use repository::{
    BillRepository, CustomerRepository, EmployeeRepository, ProductRepository, UomRepository,
    UserCredentials, UserRepository,
};
pub use repository::{
    PgBillRepository, PgCustomerRepository, PgEmployeeRepository, PgProductRepository,
    PgUomRepository, PgUserRepository,
};
