//! # Product Repository
//!
//! `product` table access. Every read joins `uom` so the returned
//! [`Product`] carries its unit.
//!
//! ## Row Mapping
//! ```text
//! SELECT p.id, p.name, p.price, u.id AS uom_id, u.name AS uom_name
//!        │                      └──────────────┬──────────────┘
//!        ▼                                     ▼
//! Product { id, name, price,           uom: Uom { id, name } }
//! ```

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::debug;

use laundry_core::{PageQuery, Paging, Product, Uom};

use super::ProductRepository;
use crate::error::{DbError, DbResult};

const SELECT_PRODUCT: &str = r#"
    SELECT p.id, p.name, p.price, u.id AS uom_id, u.name AS uom_name
    FROM product p
    JOIN uom u ON u.id = p.uom_id
"#;

/// Flat row from the product/uom join.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: String,
    name: String,
    price: i64,
    uom_id: String,
    uom_name: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            price: row.price,
            uom: Uom {
                id: row.uom_id,
                name: row.uom_name,
            },
        }
    }
}

/// PostgreSQL-backed [`ProductRepository`].
#[derive(Debug, Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Creates a new PgProductRepository.
    pub fn new(pool: PgPool) -> Self {
        PgProductRepository { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id, uom_id = %product.uom.id, "Inserting product");

        sqlx::query("INSERT INTO product (id, name, price, uom_id) VALUES ($1, $2, $3, $4)")
            .bind(&product.id)
            .bind(&product.name)
            .bind(product.price)
            .bind(&product.uom.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn paging(&self, query: PageQuery) -> DbResult<(Vec<Product>, Paging)> {
        debug!(page = query.page, take = query.take, "Listing products");

        let sql = format!("{SELECT_PRODUCT} ORDER BY p.name LIMIT $1 OFFSET $2");
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(query.take)
            .bind(query.skip)
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product")
            .fetch_one(&self.pool)
            .await?;

        let products = rows.into_iter().map(Product::from).collect();
        Ok((products, Paging::for_query(query, total)))
    }

    async fn get(&self, id: &str) -> DbResult<Option<Product>> {
        let sql = format!("{SELECT_PRODUCT} WHERE p.id = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Product::from))
    }

    async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id, "Updating product");

        let result =
            sqlx::query("UPDATE product SET name = $2, price = $3, uom_id = $4 WHERE id = $1")
                .bind(&product.id)
                .bind(&product.name)
                .bind(product.price)
                .bind(&product.uom.id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("product", &product.id));
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("product", id));
        }

        Ok(())
    }
}
