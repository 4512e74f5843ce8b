//! # Pool
//!
//! [`DbConfig`] describes how to reach PostgreSQL; [`Database`] owns the
//! resulting `PgPool` and hands out one repository per table family.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AppConfig.db ──connect_options()─► DbConfig ──► Database::new         │
//! │                                                   │                     │
//! │                     PgPoolOptions::connect_with ◄─┤                     │
//! │                          MIGRATOR.run (optional) ◄┘                     │
//! │                                                                         │
//! │  Database ─┬─ uoms()      → PgUomRepository        ┐                   │
//! │            ├─ products()  → PgProductRepository    │ each holds a      │
//! │            ├─ customers() → PgCustomerRepository   │ clone of the      │
//! │            ├─ employees() → PgEmployeeRepository   │ same PgPool       │
//! │            ├─ bills()     → PgBillRepository       │                   │
//! │            └─ users()     → PgUserRepository       ┘                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A bill insert holds one pooled connection for the whole transaction;
//! every other call borrows a connection per statement.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::{
    PgBillRepository, PgCustomerRepository, PgEmployeeRepository, PgProductRepository,
    PgUomRepository, PgUserRepository,
};

// =============================================================================
// Configuration
// =============================================================================

/// Pool settings.
///
/// ## Example
/// ```rust,ignore
/// let options = PgConnectOptions::new()
///     .host("localhost")
///     .username("laundry")
///     .password("p@ss/w#rd")
///     .database("laundry");
/// let config = DbConfig::new(options).max_connections(20).min_connections(2);
/// ```
#[derive(Clone)]
pub struct DbConfig {
    /// Server address and credentials. Carries the password, so `Debug`
    /// shows only the address.
    pub connect_options: PgConnectOptions,
    /// Upper bound on pooled connections (10).
    pub max_connections: u32,
    /// Connections kept open while idle (1).
    pub min_connections: u32,
    /// How long a request waits for a free connection (30s).
    pub acquire_timeout: Duration,
    /// Idle connections above `min_connections` are closed after this (10m).
    pub idle_timeout: Duration,
    /// Apply embedded migrations before returning from [`Database::new`].
    pub run_migrations: bool,
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.connect_options.get_host())
            .field("port", &self.connect_options.get_port())
            .field("database", &self.connect_options.get_database())
            .field("username", &self.connect_options.get_username())
            .field("password", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .field("idle_timeout", &self.idle_timeout)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

impl DbConfig {
    /// Defaults for a small single-shop deployment.
    pub fn new(connect_options: PgConnectOptions) -> Self {
        DbConfig {
            connect_options,
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    /// Parses a `postgres://` URL. Credentials in it must be percent-encoded.
    pub fn from_url(url: &str) -> DbResult<Self> {
        let options = url
            .parse::<PgConnectOptions>()
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;
        Ok(Self::new(options))
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Skip migrations when the schema is managed elsewhere.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }
}

// =============================================================================
// Database
// =============================================================================

/// Handle to the laundry database. Clones share one `PgPool`.
///
/// ## Usage
/// ```rust,ignore
/// let db = Database::new(DbConfig::from_url(&url)?).await?;
/// let uom = db.uoms().get("7f1c...").await?;
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connects and, unless disabled, migrates.
    ///
    /// ## Errors
    /// * `DbError::ConnectionFailed` - server unreachable or login rejected
    /// * `DbError::MigrationFailed` - a pending migration did not apply
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Opening PostgreSQL pool"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_with(config.connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        debug!(size = pool.size(), "PostgreSQL pool ready");

        let db = Database { pool };

        if config.run_migrations {
            db.run_migrations().await?;
        }

        Ok(db)
    }

    /// Applies pending migrations. Safe to call repeatedly.
    pub async fn run_migrations(&self) -> DbResult<()> {
        migrations::run_migrations(&self.pool).await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn uoms(&self) -> PgUomRepository {
        PgUomRepository::new(self.pool.clone())
    }

    pub fn products(&self) -> PgProductRepository {
        PgProductRepository::new(self.pool.clone())
    }

    pub fn customers(&self) -> PgCustomerRepository {
        PgCustomerRepository::new(self.pool.clone())
    }

    pub fn employees(&self) -> PgEmployeeRepository {
        PgEmployeeRepository::new(self.pool.clone())
    }

    pub fn bills(&self) -> PgBillRepository {
        PgBillRepository::new(self.pool.clone())
    }

    pub fn users(&self) -> PgUserRepository {
        PgUserRepository::new(self.pool.clone())
    }

    /// Waits for checked-out connections to return, then closes the pool.
    pub async fn close(&self) {
        info!("Closing PostgreSQL pool");
        self.pool.close().await;
    }

    /// `SELECT 1` round trip.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
