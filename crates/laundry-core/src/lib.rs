//! # laundry-core: Pure Domain Model for the Laundry Backend
//!
//! This crate holds the entities, request/response DTOs, paging arithmetic
//! and field validation shared by the database and HTTP layers. It has zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Laundry Backend Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 HTTP Controllers (apps/api)                     │   │
//! │  │    uoms, products, customers, employees, bills, auth            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  Use Cases (apps/api)                           │   │
//! │  │    required fields, uniqueness, cross-entity existence          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ laundry-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │  paging   │  │ validation│                  │   │
//! │  │   │  Product  │  │  Paging   │  │   rules   │                  │   │
//! │  │   │   Bill    │  │ PageQuery │  │  checks   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 laundry-db (Database Layer)                     │   │
//! │  │            PostgreSQL queries, migrations, repositories         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities and DTOs (Uom, Product, Customer, Bill, etc.)
//! - [`paging`] - Page request resolution and paging summaries
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use laundry_core::paging::{PageRequest, Paging};
//!
//! // limit = 0 falls back to the configured default
//! let query = PageRequest::new(2, 0).resolve(10);
//! assert_eq!(query.skip, 10);
//!
//! let paging = Paging::new(query.page, query.take, 25);
//! assert_eq!(paging.total_pages, 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod paging;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use paging::{PageQuery, PageRequest, Paging};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Page size used when neither the request nor the configuration provides one.
pub const FALLBACK_ROWS_PER_PAGE: i64 = 10;

/// Upper bound on a single page, regardless of what the client asks for.
pub const MAX_ROWS_PER_PAGE: i64 = 100;

/// Maximum detail lines accepted on a single bill.
pub const MAX_BILL_DETAILS: usize = 100;

/// Largest quantity accepted on one bill line.
pub const MAX_LINE_QTY: i64 = 1_000_000;
