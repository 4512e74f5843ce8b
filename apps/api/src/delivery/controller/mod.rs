//! HTTP handlers, one module per resource.
//!
//! Handlers take extractor results rather than bare extractors so that
//! malformed input comes back in the `{code, message}` error shape.

pub mod auth;
pub mod bill;
pub mod customer;
pub mod employee;
pub mod health;
pub mod product;
pub mod uom;
pub mod user;

use serde::Deserialize;

use laundry_core::PageRequest;

/// `?page=&limit=` as sent by clients.
///
/// Values that are missing or not integers count as zero, which paging
/// resolves to the first page and the default page size.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageParams {
    pub fn into_request(self) -> PageRequest {
        let parse = |v: Option<String>| {
            v.and_then(|s| s.trim().parse::<i64>().ok())
                .unwrap_or_default()
        };
        PageRequest::new(parse(self.page), parse(self.limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_params_are_lenient() {
        let params = PageParams {
            page: Some("2".to_string()),
            limit: Some("abc".to_string()),
        };
        assert_eq!(params.into_request(), PageRequest::new(2, 0));
        assert_eq!(PageParams::default().into_request(), PageRequest::new(0, 0));
    }
}
