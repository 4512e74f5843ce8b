//! # Use Cases
//!
//! Business rules between the HTTP controllers and the repositories.
//!
//! ## Register / Update Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  register_new_x(payload)                                                │
//! │       │                                                                 │
//! │       ├── 1. required fields / formats   → 400 VALIDATION_ERROR        │
//! │       ├── 2. lookup by unique key        (name, phone number, username)│
//! │       ├── 3. same key, different id?     → 409 CONFLICT                │
//! │       ├── 4. referenced rows exist?      → 404 NOT_FOUND               │
//! │       └── 5. repository write            → DbError → AppError          │
//! │                                                                         │
//! │  delete_x(id): existence lookup first    → 404 NOT_FOUND               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids sent by clients on create are ignored; a fresh UUID v4 is assigned.
//! Each use case is a cheap-to-clone struct over `Arc<dyn …Repository>`.

pub mod auth;
pub mod bill;
pub mod customer;
pub mod employee;
pub mod product;
pub mod uom;
pub mod user;

#[cfg(test)]
pub(crate) mod memory;

pub use auth::AuthUseCase;
pub use bill::BillUseCase;
pub use customer::CustomerUseCase;
pub use employee::EmployeeUseCase;
pub use product::ProductUseCase;
pub use uom::UomUseCase;
pub use user::UserUseCase;

/// Generates a new primary key.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
