//! # Employee Repository
//!
//! `employee` table access. Phone numbers are unique
//! (`employee_phone_number_key`).

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use laundry_core::{Employee, PageQuery, Paging};

use super::EmployeeRepository;
use crate::error::{DbError, DbResult};

/// PostgreSQL-backed [`EmployeeRepository`].
#[derive(Debug, Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    /// Creates a new PgEmployeeRepository.
    pub fn new(pool: PgPool) -> Self {
        PgEmployeeRepository { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn create(&self, employee: &Employee) -> DbResult<()> {
        debug!(id = %employee.id, "Inserting employee");

        sqlx::query(
            "INSERT INTO employee (id, name, phone_number, address) VALUES ($1, $2, $3, $4)",
        )
        .bind(&employee.id)
        .bind(&employee.name)
        .bind(&employee.phone_number)
        .bind(&employee.address)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn paging(&self, query: PageQuery) -> DbResult<(Vec<Employee>, Paging)> {
        debug!(page = query.page, take = query.take, "Listing employees");

        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, phone_number, address
            FROM employee
            ORDER BY name, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(query.take)
        .bind(query.skip)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee")
            .fetch_one(&self.pool)
            .await?;

        Ok((employees, Paging::for_query(query, total)))
    }

    async fn get(&self, id: &str) -> DbResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, name, phone_number, address FROM employee WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn get_by_phone_number(&self, phone_number: &str) -> DbResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, name, phone_number, address FROM employee WHERE phone_number = $1",
        )
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn update(&self, employee: &Employee) -> DbResult<()> {
        debug!(id = %employee.id, "Updating employee");

        let result = sqlx::query(
            "UPDATE employee SET name = $2, phone_number = $3, address = $4 WHERE id = $1",
        )
        .bind(&employee.id)
        .bind(&employee.name)
        .bind(&employee.phone_number)
        .bind(&employee.address)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("employee", &employee.id));
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting employee");

        let result = sqlx::query("DELETE FROM employee WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("employee", id));
        }

        Ok(())
    }
}
