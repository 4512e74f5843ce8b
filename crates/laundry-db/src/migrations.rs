//! Embedded schema migrations.
//!
//! `migrations/postgres/` is compiled into the binary. The API and the seed
//! binary both apply it at startup; `_sqlx_migrations` records what already
//! ran. New schema changes go in a new `NNN_description.sql` file, never in
//! an edit to an applied one.

use sqlx::PgPool;
use tracing::info;

use crate::error::DbResult;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/postgres");

/// Applies every migration not yet recorded. A second run is a no-op.
pub async fn run_migrations(pool: &PgPool) -> DbResult<()> {
    MIGRATOR.run(pool).await?;

    info!(embedded = MIGRATOR.migrations.len(), "Schema up to date");
    Ok(())
}

/// Returns `(total_migrations, applied_migrations)`.
pub async fn migration_status(pool: &PgPool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    let applied: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success = TRUE")
            .fetch_one(pool)
            .await?;

    Ok((total, applied as usize))
}
