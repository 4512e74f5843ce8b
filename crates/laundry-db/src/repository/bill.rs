//! # Bill Repository
//!
//! Bills are the only aggregate in the schema: a header row in `bill` and
//! its detail rows in `bill_detail`, written together and read back as one
//! nested [`BillResponse`].
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create(&Bill)                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BEGIN                                                                 │
//! │   ├── INSERT bill (header)                                             │
//! │   ├── INSERT bill_detail (line 1)                                      │
//! │   ├── INSERT bill_detail (line 2)                                      │
//! │   └── ...                                                              │
//! │       │                                                                 │
//! │       ├── every statement ok ──► COMMIT                                │
//! │       └── any statement fails ──► ROLLBACK → DbError::TransactionFailed│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Read Path
//! ```text
//! Query 1: bill ⋈ customer ⋈ employee          → header, customer, employee
//! Query 2: bill_detail ⋈ product ⋈ uom          → lines (ORDER BY line_no)
//!          └── assembled into BillResponse { .., bill_details: [..] }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use tracing::{debug, warn};

use laundry_core::{
    Bill, BillDetailResponse, BillResponse, Customer, Employee, PageQuery, Paging, Product, Uom,
};

use super::BillRepository;
use crate::error::{DbError, DbResult};

// =============================================================================
// SQL
// =============================================================================

const SELECT_HEADER: &str = r#"
    SELECT b.id, b.bill_date, b.entry_date, b.finish_date,
           c.id AS customer_id, c.name AS customer_name,
           c.phone_number AS customer_phone, c.address AS customer_address,
           e.id AS employee_id, e.name AS employee_name,
           e.phone_number AS employee_phone, e.address AS employee_address
    FROM bill b
    JOIN customer c ON c.id = b.customer_id
    JOIN employee e ON e.id = b.employee_id
"#;

const SELECT_DETAILS: &str = r#"
    SELECT bd.id, bd.bill_id, bd.product_price, bd.qty,
           p.id AS product_id, p.name AS product_name, p.price AS product_current_price,
           u.id AS uom_id, u.name AS uom_name
    FROM bill_detail bd
    JOIN product p ON p.id = bd.product_id
    JOIN uom u ON u.id = p.uom_id
    WHERE bd.bill_id = $1
    ORDER BY bd.line_no
"#;

// =============================================================================
// Row Types
// =============================================================================

#[derive(Debug, FromRow)]
struct BillHeaderRow {
    id: String,
    bill_date: DateTime<Utc>,
    entry_date: DateTime<Utc>,
    finish_date: DateTime<Utc>,
    customer_id: String,
    customer_name: String,
    customer_phone: String,
    customer_address: String,
    employee_id: String,
    employee_name: String,
    employee_phone: String,
    employee_address: String,
}

impl From<BillHeaderRow> for BillResponse {
    fn from(row: BillHeaderRow) -> Self {
        BillResponse {
            id: row.id,
            bill_date: row.bill_date,
            entry_date: row.entry_date,
            finish_date: row.finish_date,
            customer: Customer {
                id: row.customer_id,
                name: row.customer_name,
                phone_number: row.customer_phone,
                address: row.customer_address,
            },
            employee: Employee {
                id: row.employee_id,
                name: row.employee_name,
                phone_number: row.employee_phone,
                address: row.employee_address,
            },
            bill_details: Vec::new(),
        }
    }
}

#[derive(Debug, FromRow)]
struct BillDetailRow {
    id: String,
    bill_id: String,
    product_price: i64,
    qty: i64,
    product_id: String,
    product_name: String,
    product_current_price: i64,
    uom_id: String,
    uom_name: String,
}

impl From<BillDetailRow> for BillDetailResponse {
    fn from(row: BillDetailRow) -> Self {
        BillDetailResponse {
            id: row.id,
            bill_id: row.bill_id,
            product: Product {
                id: row.product_id,
                name: row.product_name,
                price: row.product_current_price,
                uom: Uom {
                    id: row.uom_id,
                    name: row.uom_name,
                },
            },
            product_price: row.product_price,
            qty: row.qty,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// PostgreSQL-backed [`BillRepository`].
#[derive(Debug, Clone)]
pub struct PgBillRepository {
    pool: PgPool,
}

impl PgBillRepository {
    /// Creates a new PgBillRepository.
    pub fn new(pool: PgPool) -> Self {
        PgBillRepository { pool }
    }

    /// Header plus lines, all inside `tx`. Lines are numbered from 1.
    async fn insert_bill(
        tx: &mut Transaction<'_, Postgres>,
        bill: &Bill,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO bill (id, bill_date, entry_date, finish_date, employee_id, customer_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&bill.id)
        .bind(bill.bill_date)
        .bind(bill.entry_date)
        .bind(bill.finish_date)
        .bind(&bill.employee_id)
        .bind(&bill.customer_id)
        .execute(&mut **tx)
        .await?;

        for (index, detail) in bill.bill_details.iter().enumerate() {
            let line_no = index as i32 + 1;

            sqlx::query(
                r#"
                INSERT INTO bill_detail (id, bill_id, line_no, product_id, product_price, qty)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(&detail.id)
            .bind(&bill.id)
            .bind(line_no)
            .bind(&detail.product_id)
            .bind(detail.product_price)
            .bind(detail.qty)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl BillRepository for PgBillRepository {
    async fn create(&self, bill: &Bill) -> DbResult<()> {
        debug!(
            id = %bill.id,
            customer_id = %bill.customer_id,
            lines = bill.bill_details.len(),
            "Inserting bill"
        );

        let mut tx = self.pool.begin().await.map_err(DbError::transaction)?;

        if let Err(e) = Self::insert_bill(&mut tx, bill).await {
            warn!(id = %bill.id, error = %e, "Bill insert failed, rolling back");
            if let Err(rollback_err) = tx.rollback().await {
                warn!(id = %bill.id, error = %rollback_err, "Rollback failed");
            }
            return Err(DbError::transaction(e));
        }

        tx.commit().await.map_err(DbError::transaction)?;

        debug!(id = %bill.id, "Bill committed");
        Ok(())
    }

    async fn get(&self, id: &str) -> DbResult<Option<BillResponse>> {
        let sql = format!("{SELECT_HEADER} WHERE b.id = $1");
        let header = sqlx::query_as::<_, BillHeaderRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(header) = header else {
            return Ok(None);
        };

        let details = sqlx::query_as::<_, BillDetailRow>(SELECT_DETAILS)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

        let mut bill = BillResponse::from(header);
        bill.bill_details = details.into_iter().map(BillDetailResponse::from).collect();

        Ok(Some(bill))
    }

    async fn paging(&self, query: PageQuery) -> DbResult<(Vec<BillResponse>, Paging)> {
        debug!(page = query.page, take = query.take, "Listing bills");

        let sql = format!("{SELECT_HEADER} ORDER BY b.bill_date DESC, b.id LIMIT $1 OFFSET $2");
        let rows = sqlx::query_as::<_, BillHeaderRow>(&sql)
            .bind(query.take)
            .bind(query.skip)
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bill")
            .fetch_one(&self.pool)
            .await?;

        let bills = rows.into_iter().map(BillResponse::from).collect();
        Ok((bills, Paging::for_query(query, total)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
