//! # Session Error Type
//!
//! Unified error type for the cart session and its configuration loader.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Screen                         Rust                                    │
//! │  ──────                         ────                                    │
//! │                                                                         │
//! │  tap "Apply" ──► CartSession::apply_promotion()                         │
//! │                         │                                               │
//! │                         ▼                                               │
//! │                 LedgerError::InvalidPromotion                           │
//! │                         │ (#[from])                                     │
//! │                         ▼                                               │
//! │                 SessionError::Ledger(..)                                │
//! │                         │                                               │
//! │                         ▼                                               │
//! │  Alert("Invalid Code", ◄── ErrorPayload { code: "INVALID_PROMOTION",    │
//! │   "Please enter a       │                  message: "Please enter a    │
//! │    valid promo code")   │                            valid promo code"} │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pharmacart_core::{LedgerError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for session and configuration operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Everything that can go wrong between the screen and the ledger.
#[derive(Debug, Error)]
pub enum SessionError {
    // =========================================================================
    // Cart Errors
    // =========================================================================
    /// Rejected ledger operation (unknown option or promotion code).
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product exists but cannot be added right now.
    #[error("Product {id} ({name}) is out of stock")]
    ProductUnavailable { id: String, name: String },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Catalog values failed validation.
    #[error("Invalid cart configuration: {0}")]
    Validation(#[from] ValidationError),

    /// Invalid configuration that is not a single-field validation failure.
    #[error("Invalid cart configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to write the config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    /// Failed to serialize a view for the frontend.
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for SessionError {
    fn from(err: toml::de::Error) -> Self {
        SessionError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for SessionError {
    fn from(err: toml::ser::Error) -> Self {
        SessionError::ConfigSaveFailed(err.to_string())
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::SerializationFailed(err.to_string())
    }
}

// =============================================================================
// Frontend Shaping
// =============================================================================

/// Machine-readable error codes for the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown fulfillment option
    InvalidOption,

    /// Unknown or malformed promotion code
    InvalidPromotion,

    /// Unknown product id
    NotFound,

    /// Product out of stock
    Unavailable,

    /// Bad or unreadable configuration
    ConfigError,

    /// Anything else
    Internal,
}

/// What the frontend receives when an action fails.
///
/// ```json
/// { "code": "INVALID_PROMOTION", "message": "Please enter a valid promo code" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub code: ErrorCode,
    pub message: String,
}

impl SessionError {
    /// Returns the machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::Ledger(LedgerError::InvalidOption { .. }) => ErrorCode::InvalidOption,
            SessionError::Ledger(LedgerError::InvalidPromotion { .. }) => {
                ErrorCode::InvalidPromotion
            }
            SessionError::ProductNotFound(_) => ErrorCode::NotFound,
            SessionError::ProductUnavailable { .. } => ErrorCode::Unavailable,
            SessionError::Validation(_)
            | SessionError::InvalidConfig(_)
            | SessionError::ConfigLoadFailed(_)
            | SessionError::ConfigSaveFailed(_) => ErrorCode::ConfigError,
            SessionError::SerializationFailed(_) => ErrorCode::Internal,
        }
    }

    /// Returns the text the screen shows to the shopper.
    pub fn user_message(&self) -> String {
        match self {
            SessionError::Ledger(LedgerError::InvalidOption { .. }) => {
                "Please choose an available delivery option".to_string()
            }
            SessionError::Ledger(LedgerError::InvalidPromotion { .. }) => {
                "Please enter a valid promo code".to_string()
            }
            SessionError::ProductUnavailable { name, .. } => format!("{} is out of stock", name),
            other => other.to_string(),
        }
    }

    /// Code and message together, ready to serialize.
    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload {
            code: self.code(),
            message: self.user_message(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
