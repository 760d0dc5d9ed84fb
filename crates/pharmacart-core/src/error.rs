//! # Error Types
//!
//! Domain-specific error types for pharmacart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pharmacart-core errors (this file)                                    │
//! │  ├── LedgerError      - Rejected cart operations (recoverable)         │
//! │  └── ValidationError  - Bad configuration values                       │
//! │                                                                         │
//! │  pharmacart-session errors (separate crate)                            │
//! │  └── SessionError     - What the screen sees (code + message)          │
//! │                                                                         │
//! │  Flow: LedgerError / ValidationError → SessionError → Screen           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (option id, code)
//! 3. A failed ledger operation never changes ledger state

use thiserror::Error;

// =============================================================================
// Ledger Error
// =============================================================================

/// Cart ledger operation errors.
///
/// Both variants are non-fatal: the ledger is left exactly as it was before
/// the call that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The fulfillment option id is not in the configured catalog.
    ///
    /// ## When This Occurs
    /// - Stale option id from an old screen state
    /// - Typo in a deep link or test fixture
    #[error("Invalid fulfillment option: {option_id}")]
    InvalidOption { option_id: String },

    /// The promotion code is empty, whitespace-only, or not on the allow-list.
    #[error("Invalid promotion code: '{code}'")]
    InvalidPromotion { code: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while building a `LedgerConfig`, so bad catalog data is caught
/// before any screen uses it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. illegal characters in an id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g. two options with the same id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for ledger operation results.
pub type LedgerResult<T> = Result<T, LedgerError>;

// =============================================================================
// Unit Tests
// =============================================================================
