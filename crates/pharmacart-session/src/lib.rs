//! # pharmacart-session: Cart Screen Session Layer
//!
//! Sits between the cart screen and `pharmacart-core`.
//!
//! ## Modules
//!
//! - [`config`] - TOML/JSON catalog configuration with env overrides
//! - [`catalog`] - Product catalog (names, stock, prescription flags)
//! - [`session`] - `CartSession`, the per-screen owner of a `CartLedger`
//! - [`format`] - Currency display strings
//! - [`error`] - `SessionError` and its frontend payload
//! - [`logging`] - `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust
//! use pharmacart_session::{CartConfig, CartSession};
//!
//! let mut config = CartConfig::default();
//! config.cart.seed.clear();
//!
//! let mut session = CartSession::open(&config).unwrap();
//! session.add_product("1").unwrap();
//! session.add_product("1").unwrap();
//! assert_eq!(session.apply_promotion("SAVE10").unwrap(), "10% discount applied!");
//! assert_eq!(session.totals().total.minor(), 4910);
//!
//! let err = session.apply_promotion("BOGUS").unwrap_err();
//! assert_eq!(err.user_message(), "Please enter a valid promo code");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod session;

pub use catalog::{Product, ProductCatalog};
pub use config::CartConfig;
pub use error::{ErrorCode, ErrorPayload, SessionError, SessionResult};
pub use format::CurrencyFormat;
pub use session::{CartLine, CartSession, CartView};
