//! # Validation Module
//!
//! Input validation for the use-case layer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP (axum Json extractor)                                   │
//! │  └── Malformed JSON / wrong types → 400                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Use case                                                     │
//! │  ├── THIS MODULE: required fields, formats, ranges                     │
//! │  └── Uniqueness and existence lookups                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (PostgreSQL)                                        │
//! │  ├── NOT NULL / UNIQUE constraints                                     │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use laundry_core::validation::{validate_name, validate_qty};
//!
//! validate_name("uom name", "kg").unwrap();
//! assert!(validate_qty(0).is_err());
//! ```

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::{MAX_BILL_DETAILS, MAX_LINE_QTY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Fails with `Required` when the trimmed value is empty.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a referenced identifier (e.g. `uom.id`, `customerId`).
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    validate_required(field, id)
}

/// Validates a display name (units, products, people).
///
/// ## Rules
/// - Must not be empty
/// - At most 100 characters
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    validate_required(field, name)?;

    if name.trim().chars().count() > 100 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates a phone number.
///
/// ## Rules
/// - Must not be empty
/// - Optional leading `+`, then digits only
/// - Between 6 and 20 characters
///
/// ## Example
/// ```rust
/// use laundry_core::validation::validate_phone_number;
///
/// assert!(validate_phone_number("081234567890").is_ok());
/// assert!(validate_phone_number("+6281234567").is_ok());
/// assert!(validate_phone_number("0812-abc").is_err());
/// ```
pub fn validate_phone_number(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();
    validate_required("phone number", phone)?;

    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone number".to_string(),
            reason: "must contain only digits with an optional leading +".to_string(),
        });
    }

    if phone.len() < 6 {
        return Err(ValidationError::TooShort {
            field: "phone number".to_string(),
            min: 6,
        });
    }

    if phone.len() > 20 {
        return Err(ValidationError::TooLong {
            field: "phone number".to_string(),
            max: 20,
        });
    }

    Ok(())
}

/// Validates a username: 3 to 50 characters, no whitespace.
pub fn validate_username(username: &str) -> ValidationResult<()> {
    validate_required("username", username)?;

    let len = username.chars().count();
    if len < 3 {
        return Err(ValidationError::TooShort {
            field: "username".to_string(),
            min: 3,
        });
    }
    if len > 50 {
        return Err(ValidationError::TooLong {
            field: "username".to_string(),
            max: 50,
        });
    }
    if username.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "username".to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates a password: at least 6 characters.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }
    if password.chars().count() < 6 {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: 6,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product price. Zero counts as missing.
pub fn validate_price(price: i64) -> ValidationResult<()> {
    if price <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a bill line quantity (1..=MAX_LINE_QTY).
pub fn validate_qty(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "qty".to_string(),
        });
    }
    if qty > MAX_LINE_QTY {
        return Err(ValidationError::TooLarge {
            field: "qty".to_string(),
            max: MAX_LINE_QTY,
        });
    }

    Ok(())
}

// =============================================================================
// Bill Validators
// =============================================================================

/// Validates the number of lines on a bill (1..=MAX_BILL_DETAILS).
pub fn validate_bill_detail_count(count: usize) -> ValidationResult<()> {
    if count == 0 {
        return Err(ValidationError::Required {
            field: "billDetails".to_string(),
        });
    }

    if count > MAX_BILL_DETAILS {
        return Err(ValidationError::TooMany {
            field: "billDetails".to_string(),
            max: MAX_BILL_DETAILS,
        });
    }

    Ok(())
}

/// A laundry order cannot be finished before it was dropped off.
pub fn validate_bill_dates(
    entry_date: DateTime<Utc>,
    finish_date: DateTime<Utc>,
) -> ValidationResult<()> {
    if finish_date < entry_date {
        return Err(ValidationError::Before {
            field: "finishDate".to_string(),
            other: "entryDate".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("name", "kg").is_ok());
        assert!(validate_required("name", "").is_err());
        assert!(validate_required("name", "   ").is_err());
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("customerId", "c-1").is_ok());
        assert!(validate_id("customerId", "").is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Dry Cleaning").is_ok());
        assert!(validate_name("name", "").is_err());
        assert!(validate_name("name", &"A".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_phone_number() {
        assert!(validate_phone_number("081234567890").is_ok());
        assert!(validate_phone_number("+6281234567").is_ok());

        assert!(validate_phone_number("").is_err());
        assert!(validate_phone_number("+").is_err());
        assert!(validate_phone_number("12345").is_err());
        assert!(validate_phone_number("0812 3456").is_err());
        assert!(validate_phone_number(&"1".repeat(21)).is_err());
    }

    #[test]
    fn test_validate_username_and_password() {
        assert!(validate_username("admin").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("ad min").is_err());

        assert!(validate_password("secret").is_ok());
        assert!(validate_password("").is_err());
        assert!(validate_password("12345").is_err());
    }

    #[test]
    fn test_validate_price_and_qty() {
        assert!(validate_price(7000).is_ok());
        assert!(validate_price(0).is_err());
        assert!(validate_price(-1).is_err());

        assert!(validate_qty(1).is_ok());
        assert!(validate_qty(0).is_err());
        assert!(validate_qty(MAX_LINE_QTY).is_ok());
        assert!(matches!(
            validate_qty(i64::MAX / 2),
            Err(ValidationError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_bill_detail_count() {
        assert!(validate_bill_detail_count(1).is_ok());
        assert!(validate_bill_detail_count(0).is_err());
        assert!(validate_bill_detail_count(MAX_BILL_DETAILS + 1).is_err());
    }

    #[test]
    fn test_validate_bill_dates() {
        let entry = Utc::now();
        assert!(validate_bill_dates(entry, entry).is_ok());
        assert!(validate_bill_dates(entry, entry + Duration::days(2)).is_ok());
        assert!(validate_bill_dates(entry, entry - Duration::hours(1)).is_err());
    }
}
