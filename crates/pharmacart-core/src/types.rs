//! # Domain Types
//!
//! Configuration-level types handed to the cart ledger.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │FulfillmentOption│   │   Promotion     │   │  DiscountRate   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  code           │   │  bps (u32)      │       │
//! │  │  name, eta      │   │  rate ──────────┼──►│  1000 = 10%     │       │
//! │  │  icon (enum)    │   └─────────────────┘   └─────────────────┘       │
//! │  │  flat_fee       │                                                    │
//! │  └────────┬────────┘                                                    │
//! │           │              ┌──────────────────────────────┐               │
//! │           └─────────────►│ LedgerConfig (validated)     │               │
//! │                          │  options + default + promos  │               │
//! │                          └──────────────────────────────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{
    validate_discount_rate_bps, validate_fee, validate_option_id, validate_promotion_code,
    ValidationResult,
};
use crate::BPS_DENOMINATOR;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1000 bps = 10%. Valid promotion rates are
/// strictly below 10000 (a discount can never be the whole subtotal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points without validation.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount rate, rejecting anything at or above 100%.
    pub fn try_from_bps(bps: u32) -> ValidationResult<Self> {
        validate_discount_rate_bps(bps)?;
        Ok(DiscountRate(bps))
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 * 100.0 / BPS_DENOMINATOR as f64
    }

    /// Zero discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Fulfillment
// =============================================================================

/// Icon shown next to a fulfillment option.
///
/// Closed set: an unknown icon name fails when the configuration is
/// deserialized, not when the screen renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentIcon {
    /// Express courier.
    Flash,
    /// Scheduled/standard delivery.
    Time,
    /// In-store pickup.
    Location,
}

impl Default for FulfillmentIcon {
    fn default() -> Self {
        FulfillmentIcon::Time
    }
}

impl fmt::Display for FulfillmentIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FulfillmentIcon::Flash => write!(f, "flash"),
            FulfillmentIcon::Time => write!(f, "time"),
            FulfillmentIcon::Location => write!(f, "location"),
        }
    }
}

/// A delivery or pickup choice with a flat fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentOption {
    /// Stable identifier (`express`, `standard`, `pickup`, ...).
    pub id: String,

    /// Display name ("Express Delivery").
    #[serde(default)]
    pub name: String,

    /// Human-readable turnaround ("20-30 mins").
    #[serde(default)]
    pub eta: String,

    #[serde(default)]
    pub icon: FulfillmentIcon,

    /// Flat fee in minor units, never negative.
    pub flat_fee: Money,
}

impl FulfillmentOption {
    /// Creates an option with only the fields the ledger needs.
    pub fn new(id: impl Into<String>, flat_fee: Money) -> Self {
        FulfillmentOption {
            id: id.into(),
            name: String::new(),
            eta: String::new(),
            icon: FulfillmentIcon::default(),
            flat_fee,
        }
    }

    /// Returns true for free fulfillment (e.g. store pickup).
    #[inline]
    pub fn is_free(&self) -> bool {
        self.flat_fee.is_zero()
    }
}

// =============================================================================
// Promotion Code
// =============================================================================

/// A promotion code, compared exactly after trimming surrounding whitespace.
///
/// `" SAVE10 "` and `"SAVE10"` are the same code; `"save10"` is not.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PromotionCode(String);

impl PromotionCode {
    /// Trims raw user input. Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(PromotionCode(trimmed.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromotionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One allow-list entry: a code and the rate it unlocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub code: String,
    pub rate: DiscountRate,
}

impl Promotion {
    pub fn new(code: impl Into<String>, rate: DiscountRate) -> Self {
        Promotion {
            code: code.into(),
            rate,
        }
    }
}

// =============================================================================
// Ledger Configuration
// =============================================================================

/// The validated, immutable configuration a `CartLedger` is built from.
///
/// ## Invariants (checked by [`LedgerConfig::new`])
/// - at least one fulfillment option, ids unique and well-formed
/// - every flat fee is non-negative
/// - the default option is one of the configured options
/// - promotion codes are unique after trimming, rates < 100%
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerConfig {
    fulfillment_options: Vec<FulfillmentOption>,
    default_fulfillment: String,
    promotions: BTreeMap<PromotionCode, DiscountRate>,
}

impl LedgerConfig {
    /// Validates and builds a ledger configuration.
    pub fn new(
        fulfillment_options: Vec<FulfillmentOption>,
        default_fulfillment: impl Into<String>,
        promotions: Vec<Promotion>,
    ) -> ValidationResult<Self> {
        let default_fulfillment = default_fulfillment.into();

        if fulfillment_options.is_empty() {
            return Err(ValidationError::Required {
                field: "fulfillment options".to_string(),
            });
        }

        for (index, option) in fulfillment_options.iter().enumerate() {
            validate_option_id(&option.id)?;
            validate_fee(option.flat_fee)?;
            if fulfillment_options[..index].iter().any(|o| o.id == option.id) {
                return Err(ValidationError::Duplicate {
                    field: "fulfillment option".to_string(),
                    value: option.id.clone(),
                });
            }
        }

        if !fulfillment_options
            .iter()
            .any(|o| o.id == default_fulfillment)
        {
            return Err(ValidationError::NotAllowed {
                field: "default fulfillment".to_string(),
                allowed: fulfillment_options.iter().map(|o| o.id.clone()).collect(),
            });
        }

        let mut table = BTreeMap::new();
        for promotion in promotions {
            validate_promotion_code(&promotion.code)?;
            validate_discount_rate_bps(promotion.rate.bps())?;
            let code = PromotionCode::parse(&promotion.code).ok_or_else(|| {
                ValidationError::Required {
                    field: "promotion code".to_string(),
                }
            })?;
            if table.contains_key(&code) {
                return Err(ValidationError::Duplicate {
                    field: "promotion code".to_string(),
                    value: code.to_string(),
                });
            }
            table.insert(code, promotion.rate);
        }

        Ok(LedgerConfig {
            fulfillment_options,
            default_fulfillment,
            promotions: table,
        })
    }

    /// All configured options, in configuration order.
    pub fn fulfillment_options(&self) -> &[FulfillmentOption] {
        &self.fulfillment_options
    }

    /// Looks up an option by id.
    pub fn fulfillment(&self, id: &str) -> Option<&FulfillmentOption> {
        self.fulfillment_options.iter().find(|o| o.id == id)
    }

    pub fn default_fulfillment(&self) -> &str {
        &self.default_fulfillment
    }

    /// Looks up the rate for a parsed code.
    pub fn promotion_rate(&self, code: &PromotionCode) -> Option<DiscountRate> {
        self.promotions.get(code).copied()
    }

    /// Iterates the allow-list in code order.
    pub fn promotions(&self) -> impl Iterator<Item = (&PromotionCode, DiscountRate)> {
        self.promotions.iter().map(|(code, rate)| (code, *rate))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
