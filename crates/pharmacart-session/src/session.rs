//! # Cart Session
//!
//! The object a cart screen owns: a `CartLedger`, the product catalog it adds
//! from, and the currency format it renders with.
//!
//! ## Screen Actions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Screen → Session → Ledger                       │
//! │                                                                         │
//! │  "Add to cart" ──► add_product(id) ──► catalog lookup + stock check     │
//! │                                   └──► ledger.add_or_increment(id, ₦)   │
//! │  "+" ───────────► increment(id) ────► stock check, change_quantity(+1)  │
//! │  "−" ───────────► decrement(id) ────► change_quantity(−1)               │
//! │  "✕" ───────────► remove(id) ───────► remove_item(id)                   │
//! │  delivery radio ► select_fulfillment(id)                                │
//! │  "Apply" ───────► apply_promotion(code) ──► "10% discount applied!"     │
//! │  render ────────► view() ──► CartView { items, totals, labels, ... }    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One session per screen. It is a plain owned value with no interior
//! mutability; nothing here is shared between screens.

use pharmacart_core::{
    CartLedger, CartTotals, DiscountRate, FulfillmentIcon, LedgerConfig, Money,
};
use serde::Serialize;
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::catalog::ProductCatalog;
use crate::config::CartConfig;
use crate::error::{SessionError, SessionResult};
use crate::format::CurrencyFormat;

// =============================================================================
// View Types
// =============================================================================

/// One rendered cart row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub unit_price: Money,
    pub unit_price_label: String,
    pub quantity: u32,
    pub line_total: Money,
    pub line_total_label: String,
    pub prescription_required: bool,
    /// "+" is disabled for out-of-stock products.
    pub can_increment: bool,
    /// "−" is disabled at quantity 1 (the ✕ button removes instead).
    pub can_decrement: bool,
}

/// One rendered delivery option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentChoice {
    pub id: String,
    pub name: String,
    pub eta: String,
    pub icon: FulfillmentIcon,
    pub fee_label: String,
    pub selected: bool,
}

/// Order summary strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TotalsLabels {
    pub subtotal: String,
    pub fee: String,
    /// Only present when a discount applies.
    pub discount: Option<String>,
    pub total: String,
}

/// Everything the cart screen needs for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartLine>,
    pub item_count: usize,
    pub totals: CartTotals,
    pub labels: TotalsLabels,
    pub fulfillment: Vec<FulfillmentChoice>,
    pub promotion: Option<String>,
    pub requires_prescription: bool,
}

// =============================================================================
// Cart Session
// =============================================================================

/// A cart screen's session.
#[derive(Debug, Clone)]
pub struct CartSession {
    ledger: CartLedger,
    catalog: ProductCatalog,
    currency: CurrencyFormat,
}

impl CartSession {
    /// Opens a session from a loaded configuration, pre-filled with the
    /// configured seed items.
    pub fn open(config: &CartConfig) -> SessionResult<Self> {
        config.validate()?;
        let catalog = config.catalog()?;
        let seed = config.seed_items(&catalog);
        let ledger = CartLedger::with_items(config.ledger_config()?, seed);

        info!(
            items = ledger.item_count(),
            fulfillment = %ledger.selected_fulfillment().id,
            "Cart session opened"
        );

        Ok(CartSession {
            ledger,
            catalog,
            currency: config.currency.clone(),
        })
    }

    /// Opens an empty session from already-validated parts.
    pub fn from_parts(
        ledger_config: LedgerConfig,
        catalog: ProductCatalog,
        currency: CurrencyFormat,
    ) -> Self {
        CartSession {
            ledger: CartLedger::new(ledger_config),
            catalog,
            currency,
        }
    }

    // =========================================================================
    // Item Actions
    // =========================================================================

    /// Adds one unit of a catalog product at its catalog price.
    ///
    /// ## Errors
    /// - `ProductNotFound` if the id is not in the catalog
    /// - `ProductUnavailable` if the product is out of stock
    pub fn add_product(&mut self, product_id: &str) -> SessionResult<()> {
        debug!(product_id = %product_id, "add_product");

        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| SessionError::ProductNotFound(product_id.to_string()))?;

        if !product.in_stock {
            warn!(product_id = %product_id, "Refusing to add out-of-stock product");
            return Err(SessionError::ProductUnavailable {
                id: product.id.clone(),
                name: product.name.clone(),
            });
        }

        self.ledger.add_or_increment(&product.id, product.unit_price);
        Ok(())
    }

    /// "+" on a cart row. No-op for items not in the cart.
    ///
    /// ## Errors
    /// `ProductUnavailable` if the catalog marks the product out of stock.
    pub fn increment(&mut self, item_id: &str) -> SessionResult<()> {
        debug!(item_id = %item_id, "increment");

        if let Some(product) = self.catalog.get(item_id) {
            if !product.in_stock && self.ledger.item(item_id).is_some() {
                return Err(SessionError::ProductUnavailable {
                    id: product.id.clone(),
                    name: product.name.clone(),
                });
            }
        }

        self.ledger.change_quantity(item_id, 1);
        Ok(())
    }

    /// "−" on a cart row. Reaching zero removes the row.
    pub fn decrement(&mut self, item_id: &str) {
        debug!(item_id = %item_id, "decrement");
        self.ledger.change_quantity(item_id, -1);
    }

    /// Changes a row's quantity by an arbitrary delta.
    pub fn change_quantity(&mut self, item_id: &str, delta: i64) {
        debug!(item_id = %item_id, delta, "change_quantity");
        self.ledger.change_quantity(item_id, delta);
    }

    /// "✕" on a cart row (after the screen's confirmation dialog).
    pub fn remove(&mut self, item_id: &str) {
        debug!(item_id = %item_id, "remove");
        self.ledger.remove_item(item_id);
    }

    // =========================================================================
    // Fulfillment & Promotion
    // =========================================================================

    pub fn select_fulfillment(&mut self, option_id: &str) -> SessionResult<()> {
        debug!(option_id = %option_id, "select_fulfillment");
        self.ledger.select_fulfillment(option_id)?;
        Ok(())
    }

    /// Applies a promotion code and returns the confirmation text.
    pub fn apply_promotion(&mut self, code: &str) -> SessionResult<String> {
        debug!(code = %code, "apply_promotion");
        let rate = self.ledger.apply_promotion(code)?;
        Ok(format!("{} discount applied!", percent_label(rate)))
    }

    pub fn clear_promotion(&mut self) {
        debug!("clear_promotion");
        self.ledger.clear_promotion();
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn totals(&self) -> CartTotals {
        self.ledger.compute_totals()
    }

    /// True if any row is a prescription-only product.
    pub fn requires_prescription(&self) -> bool {
        self.ledger.items().iter().any(|item| {
            self.catalog
                .get(&item.id)
                .is_some_and(|p| p.prescription_required)
        })
    }

    pub fn ledger(&self) -> &CartLedger {
        &self.ledger
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn currency(&self) -> &CurrencyFormat {
        &self.currency
    }

    /// Builds the full render model.
    pub fn view(&self) -> CartView {
        let totals = self.totals();
        let fmt = &self.currency;

        let items = self
            .ledger
            .items()
            .iter()
            .map(|item| {
                let product = self.catalog.get(&item.id);
                let line_total = item.line_total();
                CartLine {
                    id: item.id.clone(),
                    name: product.map(|p| p.name.clone()).unwrap_or_else(|| item.id.clone()),
                    unit_price: item.unit_price,
                    unit_price_label: fmt.format(item.unit_price),
                    quantity: item.quantity,
                    line_total,
                    line_total_label: fmt.format(line_total),
                    prescription_required: product.is_some_and(|p| p.prescription_required),
                    can_increment: product.map_or(true, |p| p.in_stock),
                    can_decrement: item.quantity > 1,
                }
            })
            .collect();

        let selected = &self.ledger.selected_fulfillment().id;
        let fulfillment = self
            .ledger
            .config()
            .fulfillment_options()
            .iter()
            .map(|option| FulfillmentChoice {
                id: option.id.clone(),
                name: option.name.clone(),
                eta: option.eta.clone(),
                icon: option.icon,
                fee_label: fmt.fee_label(option.flat_fee),
                selected: &option.id == selected,
            })
            .collect();

        let labels = TotalsLabels {
            subtotal: fmt.format(totals.subtotal),
            fee: fmt.format(totals.fee),
            discount: totals
                .discount
                .is_positive()
                .then(|| fmt.discount_label(totals.discount)),
            total: fmt.format(totals.total),
        };

        CartView {
            items,
            item_count: self.ledger.item_count(),
            totals,
            labels,
            fulfillment,
            promotion: self.ledger.active_promotion().map(|c| c.to_string()),
            requires_prescription: self.requires_prescription(),
        }
    }

    /// The render model as JSON, for the frontend bridge.
    pub fn view_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string(&self.view())?)
    }
}

/// `1000 bps` → `10%`, `1250 bps` → `12.5%`.
fn percent_label(rate: DiscountRate) -> String {
    let bps = rate.bps();
    let whole = bps / 100;
    let frac = bps % 100;
    if frac == 0 {
        format!("{}%", whole)
    } else if frac % 10 == 0 {
        format!("{}.{}%", whole, frac / 10)
    } else {
        format!("{}.{:02}%", whole, frac)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
