//! # Validation Module
//!
//! Configuration-time validation for the cart catalog.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Field types, closed enums (FulfillmentIcon)                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: LedgerConfig::new (THIS MODULE)                              │
//! │  ├── ids, fees, discount rates, promotion codes                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: CartLedger operations                                        │
//! │  └── InvalidOption / InvalidPromotion at call time                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pharmacart_core::validation::{validate_option_id, validate_discount_rate_bps};
//!
//! assert!(validate_option_id("express").is_ok());
//! assert!(validate_discount_rate_bps(1000).is_ok());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::BPS_DENOMINATOR;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_ID_LEN: usize = 50;
const MAX_CODE_LEN: usize = 32;

// =============================================================================
// String Validators
// =============================================================================

/// Shared id rules: non-empty, bounded, `[A-Za-z0-9_-]` only.
fn validate_identifier(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a fulfillment option id.
///
/// ## Example
/// ```rust
/// use pharmacart_core::validation::validate_option_id;
///
/// assert!(validate_option_id("express").is_ok());
/// assert!(validate_option_id("").is_err());
/// assert!(validate_option_id("same day").is_err());
/// ```
pub fn validate_option_id(id: &str) -> ValidationResult<()> {
    validate_identifier("option id", id)
}

/// Validates a product / line item id.
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    validate_identifier("item id", id)
}

/// Validates a promotion code as written in configuration.
///
/// ## Rules
/// - Not empty after trimming
/// - At most 32 characters
/// - ASCII letters and digits only
pub fn validate_promotion_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "promotion code".to_string(),
        });
    }

    if code.len() > MAX_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "promotion code".to_string(),
            max: MAX_CODE_LEN,
        });
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "promotion code".to_string(),
            reason: "must contain only letters and numbers".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a fulfillment fee (zero is allowed for pickup).
pub fn validate_fee(fee: Money) -> ValidationResult<()> {
    if fee.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "flat fee".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a unit price (zero is allowed for free samples).
///
/// ## Example
/// ```rust
/// use pharmacart_core::money::Money;
/// use pharmacart_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::from_minor(2450)).is_ok());
/// assert!(validate_unit_price(Money::zero()).is_ok());
/// assert!(validate_unit_price(Money::from_minor(-1)).is_err());
/// ```
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "unit price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a discount rate in basis points.
///
/// ## Rules
/// - 0 <= bps < 10000 (a discount is always strictly less than the subtotal)
pub fn validate_discount_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps >= BPS_DENOMINATOR {
        return Err(ValidationError::OutOfRange {
            field: "discount rate".to_string(),
            min: 0,
            max: (BPS_DENOMINATOR - 1) as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
