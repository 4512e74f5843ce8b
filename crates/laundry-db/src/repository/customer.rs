//! # Customer Repository
//!
//! `customer` table access. Phone numbers are unique
//! (`customer_phone_number_key`).

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use laundry_core::{Customer, PageQuery, Paging};

use super::CustomerRepository;
use crate::error::{DbError, DbResult};

/// PostgreSQL-backed [`CustomerRepository`].
#[derive(Debug, Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    /// Creates a new PgCustomerRepository.
    pub fn new(pool: PgPool) -> Self {
        PgCustomerRepository { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn create(&self, customer: &Customer) -> DbResult<()> {
        debug!(id = %customer.id, "Inserting customer");

        sqlx::query(
            "INSERT INTO customer (id, name, phone_number, address) VALUES ($1, $2, $3, $4)",
        )
        .bind(&customer.id)
        .bind(&customer.name)
        .bind(&customer.phone_number)
        .bind(&customer.address)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn paging(&self, query: PageQuery) -> DbResult<(Vec<Customer>, Paging)> {
        debug!(page = query.page, take = query.take, "Listing customers");

        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, phone_number, address
            FROM customer
            ORDER BY name, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(query.take)
        .bind(query.skip)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customer")
            .fetch_one(&self.pool)
            .await?;

        Ok((customers, Paging::for_query(query, total)))
    }

    async fn get(&self, id: &str) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT id, name, phone_number, address FROM customer WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn get_by_phone_number(&self, phone_number: &str) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT id, name, phone_number, address FROM customer WHERE phone_number = $1",
        )
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn update(&self, customer: &Customer) -> DbResult<()> {
        debug!(id = %customer.id, "Updating customer");

        let result = sqlx::query(
            "UPDATE customer SET name = $2, phone_number = $3, address = $4 WHERE id = $1",
        )
        .bind(&customer.id)
        .bind(&customer.name)
        .bind(&customer.phone_number)
        .bind(&customer.address)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("customer", &customer.id));
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting customer");

        let result = sqlx::query("DELETE FROM customer WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("customer", id));
        }

        Ok(())
    }
}
