//! # DbError
//!
//! What can go wrong below the repository traits, already sorted by how the
//! API should answer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sqlx::Error / MigrateError                                             │
//! │       │  From                                                           │
//! │       ▼                                                                 │
//! │  DbError ──► NotFound, RowNotFound    → 404                            │
//! │          ──► UniqueViolation          → 409 (uom name, phone, username)│
//! │          ──► ForeignKeyViolation      → 409 (row still referenced)     │
//! │          ──► everything else          → 500 DATABASE_ERROR             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Errors returned by every repository method.
#[derive(Debug, Error)]
pub enum DbError {
    /// No row for the given key.
    ///
    /// ## When This Occurs
    /// - `UPDATE` or `DELETE` affected zero rows
    /// - a `fetch_one` came back empty
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: String, id: String },

    /// A query that must return a row returned none.
    #[error("Expected row was not returned")]
    RowNotFound,

    /// A UNIQUE index rejected the write.
    ///
    /// ## When This Occurs
    /// - Two concurrent registrations race past the use-case uniqueness check
    /// - Any UNIQUE index violation (unit name, phone number, username)
    #[error("Duplicate value violates unique constraint {constraint}")]
    UniqueViolation { constraint: String },

    /// A foreign key rejected the write or delete.
    ///
    /// ## When This Occurs
    /// - Deleting a unit still referenced by a product
    /// - Deleting a customer, employee or product referenced by a bill
    #[error("Referenced row constraint: {message}")]
    ForeignKeyViolation { message: String },

    /// PostgreSQL could not be reached.
    ///
    /// ## When This Occurs
    /// - Server unreachable or credentials rejected
    /// - Pool closed during shutdown
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// PostgreSQL rejected a statement for any other reason.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A multi-statement write was rolled back.
    ///
    /// ## When This Occurs
    /// - Any statement of a bill insert failed; nothing was persisted
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Every pooled connection stayed busy past the acquire timeout.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Driver errors with no better home (decode, protocol).
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// `DbError::NotFound` for `entity`/`id`.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Wraps any error raised inside a transaction.
    pub fn transaction(err: impl std::fmt::Display) -> Self {
        DbError::TransactionFailed(err.to_string())
    }
}

/// Sorts driver errors by PostgreSQL error class.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound            → DbError::RowNotFound
/// sqlx::Error::Database (23505)       → DbError::UniqueViolation
/// sqlx::Error::Database (23503)       → DbError::ForeignKeyViolation
/// sqlx::Error::PoolTimedOut           → DbError::PoolExhausted
/// sqlx::Error::Io / Tls / PoolClosed  → DbError::ConnectionFailed
/// Other                               → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::RowNotFound,

            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation => DbError::UniqueViolation {
                    constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                },
                ErrorKind::ForeignKeyViolation => DbError::ForeignKeyViolation {
                    message: db_err.message().to_string(),
                },
                _ => DbError::QueryFailed(db_err.message().to_string()),
            },

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            sqlx::Error::Io(e) => DbError::ConnectionFailed(e.to_string()),

            sqlx::Error::Tls(e) => DbError::ConnectionFailed(e.to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result alias used by every repository.
pub type DbResult<T> = Result<T, DbError>;
