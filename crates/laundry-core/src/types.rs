//! # Domain Types
//!
//! Entities and DTOs used throughout the laundry backend.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌───────────┐      ┌───────────┐      ┌───────────┐  ┌───────────┐    │
//! │  │    Uom    │◄─────│  Product  │      │ Customer  │  │ Employee  │    │
//! │  │  id, name │      │ id, name  │      │ phone (U) │  │ phone (U) │    │
//! │  └───────────┘      │ price     │      └─────┬─────┘  └─────┬─────┘    │
//! │                     └─────▲─────┘            │              │          │
//! │                           │                  ▼              ▼          │
//! │                     ┌─────┴───────┐     ┌──────────────────────────┐   │
//! │                     │ BillDetail  │◄────│          Bill            │   │
//! │                     │ productPrice│ 1..N│ billDate/entry/finish    │   │
//! │                     │ (snapshot)  │     └──────────────────────────┘   │
//! │                     └─────────────┘                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Write Model vs Read Model
//! A bill is written flat (`Bill` with foreign keys) and read nested
//! (`BillResponse` with customer, employee, product and unit embedded).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Unit of Measure
// =============================================================================

/// A unit of measure attached to products (kg, pcs, ...).
///
/// Name is unique, compared case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Uom {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

// =============================================================================
// Product
// =============================================================================

/// A laundry service sold by unit (e.g. "Wash & Fold" per kg).
///
/// On input only `uom.id` matters; the use case swaps in the stored unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Price in the smallest currency unit.
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub uom: Uom,
}

// =============================================================================
// Customer / Employee
// =============================================================================

/// A laundry customer. Phone number is unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
}

/// A shop employee who handles bills. Phone number is unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
}

// =============================================================================
// User
// =============================================================================

/// A back-office user as exposed over the API. Never carries the password.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: String,
}

/// Registration payload for a user.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Login payload.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Token issued on a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

// =============================================================================
// Bill (write model)
// =============================================================================

/// A bill header plus its detail lines, as persisted.
///
/// Details are owned by the bill and written in the same transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    #[ts(as = "String")]
    pub bill_date: DateTime<Utc>,
    #[ts(as = "String")]
    pub entry_date: DateTime<Utc>,
    #[ts(as = "String")]
    pub finish_date: DateTime<Utc>,
    pub customer_id: String,
    pub employee_id: String,
    pub bill_details: Vec<BillDetail>,
}

/// One detail line of a bill.
/// `product_price` is a snapshot of the product price at billing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillDetail {
    pub id: String,
    pub bill_id: String,
    pub product_id: String,
    pub product_price: i64,
    pub qty: i64,
}

// =============================================================================
// Bill (HTTP input)
// =============================================================================

/// Bill registration payload.
///
/// `billDate` and `entryDate` default to the time of registration.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillRequest {
    #[ts(as = "Option<String>")]
    #[serde(default)]
    pub bill_date: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    #[serde(default)]
    pub entry_date: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    #[serde(default)]
    pub finish_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub bill_details: Vec<BillDetailRequest>,
}

/// One requested line: which product, how many.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillDetailRequest {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub qty: i64,
}

// =============================================================================
// Bill (read model)
// =============================================================================

/// A bill as returned to clients, with every reference resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillResponse {
    pub id: String,
    #[ts(as = "String")]
    pub bill_date: DateTime<Utc>,
    #[ts(as = "String")]
    pub entry_date: DateTime<Utc>,
    #[ts(as = "String")]
    pub finish_date: DateTime<Utc>,
    pub customer: Customer,
    pub employee: Employee,
    /// Empty in paged listings, which only carry headers.
    pub bill_details: Vec<BillDetailResponse>,
}

/// A detail line with its product (and the product's unit) embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillDetailResponse {
    pub id: String,
    pub bill_id: String,
    pub product: Product,
    pub product_price: i64,
    pub qty: i64,
}

impl BillResponse {
    /// Sum of `productPrice × qty` over the detail lines, saturating at
    /// `i64::MAX`.
    pub fn total(&self) -> i64 {
        self.bill_details
            .iter()
            .map(|d| d.product_price.saturating_mul(d.qty))
            .fold(0i64, i64::saturating_add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_accepts_uom_reference_only() {
        let json = r#"{"name":"Wash","price":7000,"uom":{"id":"u-1"}}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, "");
        assert_eq!(product.uom.id, "u-1");
        assert_eq!(product.uom.name, "");
    }

    #[test]
    fn test_customer_uses_camel_case() {
        let customer = Customer {
            id: "c-1".to_string(),
            name: "Budi".to_string(),
            phone_number: "0812345678".to_string(),
            address: "Jakarta".to_string(),
        };
        let json = serde_json::to_value(&customer).unwrap();

        assert_eq!(json["phoneNumber"], "0812345678");
        assert!(json.get("phone_number").is_none());
    }

    #[test]
    fn test_bill_request_dates_are_optional() {
        let json = r#"{
            "finishDate": "2026-01-03T10:00:00Z",
            "customerId": "c-1",
            "employeeId": "e-1",
            "billDetails": [{"productId": "p-1", "qty": 2}]
        }"#;
        let req: BillRequest = serde_json::from_str(json).unwrap();

        assert!(req.bill_date.is_none());
        assert!(req.finish_date.is_some());
        assert_eq!(req.bill_details.len(), 1);
        assert_eq!(req.bill_details[0].qty, 2);
    }

    #[test]
    fn test_bill_total() {
        let now = Utc::now();
        let line = |price: i64, qty: i64| BillDetailResponse {
            id: "d".to_string(),
            bill_id: "b".to_string(),
            product: Product::default(),
            product_price: price,
            qty,
        };
        let bill = BillResponse {
            id: "b".to_string(),
            bill_date: now,
            entry_date: now,
            finish_date: now,
            customer: Customer::default(),
            employee: Employee::default(),
            bill_details: vec![line(7000, 3), line(5000, 2)],
        };

        assert_eq!(bill.total(), 31000);
    }

    #[test]
    fn test_bill_total_saturates() {
        let now = Utc::now();
        let line = BillDetailResponse {
            id: "d".to_string(),
            bill_id: "b".to_string(),
            product: Product::default(),
            product_price: i64::MAX / 2,
            qty: 3,
        };
        let bill = BillResponse {
            id: "b".to_string(),
            bill_date: now,
            entry_date: now,
            finish_date: now,
            customer: Customer::default(),
            employee: Employee::default(),
            bill_details: vec![line.clone(), line],
        };

        assert_eq!(bill.total(), i64::MAX);
    }
}
