//! # pharmacart-core: Pure Cart Logic for PharmaCart
//!
//! This crate holds the cart pricing and quantity rules of the pharmacy
//! storefront as pure, synchronous code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PharmaCart Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Frontend (React Native screens)                 │   │
//! │  │     Home ──► Category ──► Cart ──► Checkout (external)          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            pharmacart-session (config, CartSession)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ pharmacart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  ledger   │  │ validation│  │   │
//! │  │   │ Fulfill-  │  │   Money   │  │CartLedger │  │   rules   │  │   │
//! │  │   │ mentOption│  │  floor %  │  │ LineItem  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • NO ASYNC • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`ledger`] - The cart ledger and its derived totals
//! - [`types`] - Fulfillment options, discount rates, promotion codes, config
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Configuration validation
//!
//! ## Example Usage
//!
//! ```rust
//! use pharmacart_core::{CartLedger, DiscountRate, FulfillmentOption, LedgerConfig, Money, Promotion};
//!
//! let config = LedgerConfig::new(
//!     vec![FulfillmentOption::new("express", Money::from_minor(500))],
//!     "express",
//!     vec![Promotion::new("SAVE10", DiscountRate::from_bps(1000))],
//! )
//! .unwrap();
//!
//! let mut ledger = CartLedger::new(config);
//! ledger.add_or_increment("A", Money::from_minor(2450));
//! ledger.add_or_increment("A", Money::from_minor(2450));
//! ledger.apply_promotion("SAVE10").unwrap();
//!
//! let totals = ledger.compute_totals();
//! assert_eq!(totals.discount.minor(), 490);
//! assert_eq!(totals.total.minor(), 4910);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{LedgerError, LedgerResult, ValidationError};
pub use ledger::{CartLedger, CartTotals, LineItem};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Basis points in a whole (100%).
pub const BPS_DENOMINATOR: u32 = 10_000;
