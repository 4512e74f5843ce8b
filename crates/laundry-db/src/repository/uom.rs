//! # Unit of Measure Repository
//!
//! `uom` table access. Name uniqueness is enforced case-insensitively by the
//! `uom_name_lower_key` index, so lookups by name use `LOWER(name)` too.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use laundry_core::{PageQuery, Paging, Uom};

use super::UomRepository;
use crate::error::{DbError, DbResult};

/// PostgreSQL-backed [`UomRepository`].
#[derive(Debug, Clone)]
pub struct PgUomRepository {
    pool: PgPool,
}

impl PgUomRepository {
    /// Creates a new PgUomRepository.
    pub fn new(pool: PgPool) -> Self {
        PgUomRepository { pool }
    }
}

#[async_trait]
impl UomRepository for PgUomRepository {
    async fn create(&self, uom: &Uom) -> DbResult<()> {
        debug!(id = %uom.id, name = %uom.name, "Inserting uom");

        sqlx::query("INSERT INTO uom (id, name) VALUES ($1, $2)")
            .bind(&uom.id)
            .bind(&uom.name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn paging(&self, query: PageQuery) -> DbResult<(Vec<Uom>, Paging)> {
        debug!(page = query.page, take = query.take, "Listing uoms");

        let uoms = sqlx::query_as::<_, Uom>(
            "SELECT id, name FROM uom ORDER BY name LIMIT $1 OFFSET $2",
        )
        .bind(query.take)
        .bind(query.skip)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM uom")
            .fetch_one(&self.pool)
            .await?;

        Ok((uoms, Paging::for_query(query, total)))
    }

    async fn get(&self, id: &str) -> DbResult<Option<Uom>> {
        let uom = sqlx::query_as::<_, Uom>("SELECT id, name FROM uom WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(uom)
    }

    async fn get_by_name(&self, name: &str) -> DbResult<Option<Uom>> {
        let uom = sqlx::query_as::<_, Uom>(
            "SELECT id, name FROM uom WHERE LOWER(name) = LOWER($1)",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(uom)
    }

    async fn update(&self, uom: &Uom) -> DbResult<()> {
        debug!(id = %uom.id, "Updating uom");

        let result = sqlx::query("UPDATE uom SET name = $2 WHERE id = $1")
            .bind(&uom.id)
            .bind(&uom.name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("uom", &uom.id));
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting uom");

        let result = sqlx::query("DELETE FROM uom WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("uom", id));
        }

        Ok(())
    }
}
