//! # Repository Module
//!
//! Repository traits and their PostgreSQL implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Layer                                     │
//! │                                                                         │
//! │  Use case (apps/api)                                                   │
//! │       │                                                                 │
//! │       │  Arc<dyn UomRepository>                                        │
//! │       ▼                                                                 │
//! │  ┌──────────────────────┐        ┌──────────────────────────┐          │
//! │  │  trait UomRepository │◄───────│  PgUomRepository (PgPool)│          │
//! │  │  create / paging     │        └──────────────────────────┘          │
//! │  │  get / get_by_name   │        ┌──────────────────────────┐          │
//! │  │  update / delete     │◄───────│  in-memory store (tests) │          │
//! │  └──────────────────────┘        └──────────────────────────┘          │
//! │                                                                         │
//! │  The same split exists for product, customer, employee, bill, user.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Conventions
//! - `get*` returns `Ok(None)` when nothing matches; callers decide whether
//!   that is an error.
//! - `update` / `delete` return [`DbError::NotFound`](crate::DbError) when
//!   zero rows were affected.
//! - `paging` returns the requested window plus a [`Paging`] summary built
//!   from a separate `COUNT(*)`.

use async_trait::async_trait;
use laundry_core::{
    Bill, BillResponse, Customer, Employee, PageQuery, Paging, Product, Uom, User,
};

use crate::error::DbResult;

pub mod bill;
pub mod customer;
pub mod employee;
pub mod product;
pub mod uom;
pub mod user;

pub use bill::PgBillRepository;
pub use customer::PgCustomerRepository;
pub use employee::PgEmployeeRepository;
pub use product::PgProductRepository;
pub use uom::PgUomRepository;
pub use user::{PgUserRepository, UserCredentials};

// =============================================================================
// Master Data
// =============================================================================

/// Units of measure.
#[async_trait]
pub trait UomRepository: Send + Sync {
    async fn create(&self, uom: &Uom) -> DbResult<()>;
    async fn paging(&self, query: PageQuery) -> DbResult<(Vec<Uom>, Paging)>;
    async fn get(&self, id: &str) -> DbResult<Option<Uom>>;
    /// Case-insensitive exact match.
    async fn get_by_name(&self, name: &str) -> DbResult<Option<Uom>>;
    async fn update(&self, uom: &Uom) -> DbResult<()>;
    async fn delete(&self, id: &str) -> DbResult<()>;
}

/// Products. Reads always embed the product's unit.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persists `product` referencing `product.uom.id`.
    async fn create(&self, product: &Product) -> DbResult<()>;
    async fn paging(&self, query: PageQuery) -> DbResult<(Vec<Product>, Paging)>;
    async fn get(&self, id: &str) -> DbResult<Option<Product>>;
    async fn update(&self, product: &Product) -> DbResult<()>;
    async fn delete(&self, id: &str) -> DbResult<()>;
}

/// Customers, unique by phone number.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create(&self, customer: &Customer) -> DbResult<()>;
    async fn paging(&self, query: PageQuery) -> DbResult<(Vec<Customer>, Paging)>;
    async fn get(&self, id: &str) -> DbResult<Option<Customer>>;
    async fn get_by_phone_number(&self, phone_number: &str) -> DbResult<Option<Customer>>;
    async fn update(&self, customer: &Customer) -> DbResult<()>;
    async fn delete(&self, id: &str) -> DbResult<()>;
}

/// Employees, unique by phone number.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create(&self, employee: &Employee) -> DbResult<()>;
    async fn paging(&self, query: PageQuery) -> DbResult<(Vec<Employee>, Paging)>;
    async fn get(&self, id: &str) -> DbResult<Option<Employee>>;
    async fn get_by_phone_number(&self, phone_number: &str) -> DbResult<Option<Employee>>;
    async fn update(&self, employee: &Employee) -> DbResult<()>;
    async fn delete(&self, id: &str) -> DbResult<()>;
}

// =============================================================================
// Bills
// =============================================================================

/// Bills and their detail lines.
#[async_trait]
pub trait BillRepository: Send + Sync {
    /// Writes the header and every detail line atomically.
    ///
    /// ## Returns
    /// * `Ok(())` - header and all lines committed
    /// * `Err(DbError::TransactionFailed)` - rolled back, nothing persisted
    async fn create(&self, bill: &Bill) -> DbResult<()>;

    /// Header with customer and employee, plus lines in insertion order.
    async fn get(&self, id: &str) -> DbResult<Option<BillResponse>>;

    /// Headers only; `bill_details` is empty on every item.
    async fn paging(&self, query: PageQuery) -> DbResult<(Vec<BillResponse>, Paging)>;
}

// =============================================================================
// Users
// =============================================================================

/// Back-office users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User, password_hash: &str) -> DbResult<()>;
    /// The only read that exposes the stored hash.
    async fn get_by_username(&self, username: &str) -> DbResult<Option<UserCredentials>>;
    async fn get(&self, id: &str) -> DbResult<Option<User>>;
    async fn paging(&self, query: PageQuery) -> DbResult<(Vec<User>, Paging)>;
}
