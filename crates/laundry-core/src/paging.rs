//! # Paging
//!
//! Turns a client `?page=&limit=` request into a bounded SQL window and
//! summarises the result for the response envelope.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET /api/v1/customers?page=2&limit=0                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PageRequest { page: 2, limit: 0 }                                     │
//! │       │  resolve(default_rows = 10)                                    │
//! │       ▼                                                                 │
//! │  PageQuery { page: 2, take: 10, skip: 10 }  ──► LIMIT 10 OFFSET 10     │
//! │       │                                                                 │
//! │       ▼  + SELECT COUNT(*) = 25                                        │
//! │  Paging { page: 2, rowsPerPage: 10, totalRows: 25, totalPages: 3 }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{FALLBACK_ROWS_PER_PAGE, MAX_ROWS_PER_PAGE};

/// Highest page a request can address. Keeps `skip` inside `i64`.
pub const MAX_PAGE: i64 = i64::MAX / MAX_ROWS_PER_PAGE;

/// Raw page request as it arrives in the query string.
///
/// Both fields default to zero so that a missing or unparsable value
/// behaves like "use the default".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub limit: i64,
}

/// Resolved window handed to the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    /// 1-based page number.
    pub page: i64,
    /// Rows per page (SQL `LIMIT`).
    pub take: i64,
    /// Rows to skip (SQL `OFFSET`).
    pub skip: i64,
}

/// Paging summary returned next to a list payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub page: i64,
    pub rows_per_page: i64,
    pub total_rows: i64,
    pub total_pages: i64,
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Self {
        PageRequest { page, limit }
    }

    /// Resolves the request against the configured default page size.
    ///
    /// ## Rules
    /// - `page <= 0` becomes page 1; pages past [`MAX_PAGE`] become `MAX_PAGE`
    /// - `limit <= 0` falls back to `default_rows`
    /// - `take` is capped at [`MAX_ROWS_PER_PAGE`]
    /// - `skip = (page - 1) * take`
    pub fn resolve(self, default_rows: i64) -> PageQuery {
        let page = self.page.clamp(1, MAX_PAGE);

        let default_rows = if default_rows > 0 {
            default_rows
        } else {
            FALLBACK_ROWS_PER_PAGE
        };
        let take = if self.limit > 0 { self.limit } else { default_rows };
        let take = take.min(MAX_ROWS_PER_PAGE);

        PageQuery {
            page,
            take,
            skip: (page - 1) * take,
        }
    }
}

impl Paging {
    /// Builds the summary: `totalPages = ceil(totalRows / rowsPerPage)`.
    pub fn new(page: i64, rows_per_page: i64, total_rows: i64) -> Self {
        let total_pages = if rows_per_page > 0 {
            (total_rows + rows_per_page - 1) / rows_per_page
        } else {
            0
        };

        Paging {
            page,
            rows_per_page,
            total_rows,
            total_pages,
        }
    }

    /// Convenience for repositories: summary for a resolved query.
    pub fn for_query(query: PageQuery, total_rows: i64) -> Self {
        Paging::new(query.page, query.take, total_rows)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
