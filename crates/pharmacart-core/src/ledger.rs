//! # Cart Ledger
//!
//! The cart's line items, selected fulfillment option and active promotion
//! code, with totals derived on every read.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Ledger Operations                               │
//! │                                                                         │
//! │  Screen Action            Ledger Call               State Change        │
//! │  ─────────────            ───────────               ────────────        │
//! │                                                                         │
//! │  Add product ───────────► add_or_increment() ─────► push / qty += 1    │
//! │  Tap + / − ─────────────► change_quantity() ──────► qty ± n, 0 removes │
//! │  Tap ✕ ─────────────────► remove_item() ──────────► items.retain(..)   │
//! │  Pick delivery ─────────► select_fulfillment() ───► selected = id      │
//! │  Apply promo ───────────► apply_promotion() ──────► active = code      │
//! │  Remove promo ──────────► clear_promotion() ──────► active = None      │
//! │  Render summary ────────► compute_totals() ───────► (read only)        │
//! │                                                                         │
//! │  Failed calls (InvalidOption / InvalidPromotion) change nothing.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ledger is a plain owned value: the screen that renders it owns it and
//! mutates it through `&mut self`. There is no locking and no shared state.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::{LedgerError, LedgerResult};
use crate::money::Money;
use crate::types::{DiscountRate, FulfillmentOption, LedgerConfig, PromotionCode};

// =============================================================================
// Line Item
// =============================================================================

/// One product/quantity pair in the cart.
///
/// ## Price Freezing
/// The unit price is captured when the item is first added. Adding the same
/// id again only bumps the quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product reference, unique within the cart.
    pub id: String,

    /// Price per unit in minor units.
    pub unit_price: Money,

    /// Always >= 1 while the item is in a ledger.
    pub quantity: u32,
}

impl LineItem {
    pub fn new(id: impl Into<String>, unit_price: Money, quantity: u32) -> Self {
        LineItem {
            id: id.into(),
            unit_price,
            quantity,
        }
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Derived totals. Never stored, always recomputed from ledger state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Σ(unit_price × quantity)
    pub subtotal: Money,
    /// Flat fee of the selected fulfillment option.
    pub fee: Money,
    /// floor(subtotal × rate), or zero without an active code.
    pub discount: Money,
    /// max(0, subtotal + fee − discount)
    pub total: Money,
}

// =============================================================================
// Cart Ledger
// =============================================================================

/// The cart ledger.
///
/// ## Invariants
/// - Items are unique by `id` and keep insertion order
/// - Every retained item has quantity >= 1
/// - `selected_fulfillment` always names a configured option
/// - `active_promotion`, when set, is on the allow-list
#[derive(Debug, Clone)]
pub struct CartLedger {
    config: LedgerConfig,
    items: Vec<LineItem>,
    selected_fulfillment: String,
    active_promotion: Option<PromotionCode>,
}

impl CartLedger {
    /// Creates an empty ledger with the configured default fulfillment option.
    pub fn new(config: LedgerConfig) -> Self {
        let selected_fulfillment = config.default_fulfillment().to_string();
        CartLedger {
            config,
            items: Vec::new(),
            selected_fulfillment,
            active_promotion: None,
        }
    }

    /// Creates a ledger pre-filled with an initial item set.
    ///
    /// Zero-quantity seeds are dropped. A repeated id merges into the first
    /// occurrence (quantities add, the first price wins). Negative prices
    /// are clamped to zero.
    pub fn with_items(config: LedgerConfig, items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut ledger = CartLedger::new(config);
        for seed in items {
            if seed.quantity == 0 {
                debug!(item_id = %seed.id, "Dropping zero-quantity seed item");
                continue;
            }
            match ledger.position(&seed.id) {
                Some(index) => {
                    let item = &mut ledger.items[index];
                    item.quantity = item.quantity.saturating_add(seed.quantity);
                }
                None => {
                    let unit_price = non_negative_price(&seed.id, seed.unit_price);
                    ledger
                        .items
                        .push(LineItem::new(seed.id, unit_price, seed.quantity));
                }
            }
        }
        ledger
    }

    fn position(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == item_id)
    }

    // =========================================================================
    // Line Item Operations
    // =========================================================================

    /// Adds one unit of `item_id`, inserting it at quantity 1 if absent.
    ///
    /// Never fails. For an existing item `unit_price` is ignored (the price
    /// captured on first add is kept) and the quantity saturates at `u32::MAX`.
    pub fn add_or_increment(&mut self, item_id: &str, unit_price: Money) {
        if let Some(index) = self.position(item_id) {
            let item = &mut self.items[index];
            item.quantity = item.quantity.saturating_add(1);
            debug!(item_id = %item_id, quantity = item.quantity, "Incremented line item");
            return;
        }

        let unit_price = non_negative_price(item_id, unit_price);
        self.items.push(LineItem::new(item_id, unit_price, 1));
        debug!(item_id = %item_id, unit_price = unit_price.minor(), "Added line item");
    }

    /// Applies `delta` to the item's quantity, floored at zero.
    ///
    /// A resulting quantity of zero removes the item. An absent id is a no-op.
    pub fn change_quantity(&mut self, item_id: &str, delta: i64) {
        let Some(index) = self.position(item_id) else {
            debug!(item_id = %item_id, delta, "change_quantity on absent item ignored");
            return;
        };

        let current = i64::from(self.items[index].quantity);
        let updated = current.saturating_add(delta).clamp(0, i64::from(u32::MAX));

        if updated == 0 {
            self.items.remove(index);
            debug!(item_id = %item_id, "Quantity reached zero, removed line item");
        } else {
            // clamped into u32 range above
            self.items[index].quantity = updated as u32;
            debug!(item_id = %item_id, quantity = updated, "Changed line item quantity");
        }
    }

    /// Removes the item. No-op if absent.
    pub fn remove_item(&mut self, item_id: &str) {
        let before = self.items.len();
        self.items.retain(|i| i.id != item_id);
        if self.items.len() != before {
            debug!(item_id = %item_id, "Removed line item");
        }
    }

    // =========================================================================
    // Fulfillment & Promotion
    // =========================================================================

    /// Selects a configured fulfillment option.
    ///
    /// ## Errors
    /// `LedgerError::InvalidOption` if `option_id` is not configured; the
    /// previous selection stays active.
    pub fn select_fulfillment(&mut self, option_id: &str) -> LedgerResult<()> {
        if self.config.fulfillment(option_id).is_none() {
            warn!(option_id = %option_id, "Rejected unknown fulfillment option");
            return Err(LedgerError::InvalidOption {
                option_id: option_id.to_string(),
            });
        }

        self.selected_fulfillment = option_id.to_string();
        debug!(option_id = %option_id, "Selected fulfillment option");
        Ok(())
    }

    /// Activates a promotion code from the allow-list, replacing any active one.
    ///
    /// Matching ignores surrounding whitespace and letter case.
    ///
    /// ## Errors
    /// `LedgerError::InvalidPromotion` if the code is empty, whitespace-only or
    /// unknown; the active code (if any) is left untouched.
    pub fn apply_promotion(&mut self, code: &str) -> LedgerResult<DiscountRate> {
        let invalid = || LedgerError::InvalidPromotion {
            code: code.trim().to_string(),
        };

        let normalized = PromotionCode::parse(code).ok_or_else(invalid)?;
        let Some(rate) = self.config.promotion_rate(&normalized) else {
            warn!(code = %normalized, "Rejected unknown promotion code");
            return Err(invalid());
        };

        debug!(code = %normalized, bps = rate.bps(), "Applied promotion code");
        self.active_promotion = Some(normalized);
        Ok(rate)
    }

    /// Clears the active promotion code, if any.
    pub fn clear_promotion(&mut self) {
        if let Some(code) = self.active_promotion.take() {
            debug!(code = %code, "Cleared promotion code");
        }
    }

    // =========================================================================
    // Derived State
    // =========================================================================

    /// Computes subtotal, fee, discount and total from current state.
    ///
    /// Pure: never mutates, never fails, and the total is never negative.
    pub fn compute_totals(&self) -> CartTotals {
        let subtotal: Money = self.items.iter().map(LineItem::line_total).sum();
        let fee = self.selected_fulfillment().flat_fee;
        let discount = self
            .active_discount_rate()
            .map(|rate| subtotal.discount_floor(rate))
            .unwrap_or_default();
        let total = (subtotal + fee - discount).clamp_non_negative();

        CartTotals {
            subtotal,
            fee,
            discount,
            total,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn item(&self, item_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Number of distinct line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The active fulfillment option.
    pub fn selected_fulfillment(&self) -> &FulfillmentOption {
        self.config
            .fulfillment(&self.selected_fulfillment)
            .unwrap_or_else(|| &self.config.fulfillment_options()[0])
    }

    pub fn active_promotion(&self) -> Option<&PromotionCode> {
        self.active_promotion.as_ref()
    }

    fn active_discount_rate(&self) -> Option<DiscountRate> {
        self.active_promotion
            .as_ref()
            .and_then(|code| self.config.promotion_rate(code))
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }
}

fn non_negative_price(item_id: &str, unit_price: Money) -> Money {
    if unit_price.is_negative() {
        warn!(
            item_id = %item_id,
            unit_price = unit_price.minor(),
            "Negative unit price clamped to zero"
        );
        return Money::zero();
    }
    unit_price
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Promotion;
    use proptest::prelude::*;

    fn test_config() -> LedgerConfig {
        LedgerConfig::new(
            vec![
                FulfillmentOption::new("express", Money::from_minor(500)),
                FulfillmentOption::new("standard", Money::from_minor(200)),
                FulfillmentOption::new("pickup", Money::zero()),
            ],
            "express",
            vec![
                Promotion::new("SAVE10", DiscountRate::from_bps(1000)),
                Promotion::new("HALF", DiscountRate::from_bps(5000)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_add_or_increment() {
        let mut ledger = CartLedger::new(test_config());

        ledger.add_or_increment("A", Money::from_minor(2450));
        assert_eq!(ledger.item("A").unwrap().quantity, 1);

        ledger.add_or_increment("A", Money::from_minor(2450));
        assert_eq!(ledger.item_count(), 1);
        assert_eq!(ledger.item("A").unwrap().quantity, 2);
    }

    #[test]
    fn test_add_keeps_first_price() {
        let mut ledger = CartLedger::new(test_config());
        ledger.add_or_increment("A", Money::from_minor(2450));
        ledger.add_or_increment("A", Money::from_minor(9999));

        assert_eq!(ledger.item("A").unwrap().unit_price.minor(), 2450);
        assert_eq!(ledger.compute_totals().subtotal.minor(), 4900);
    }

    #[test]
    fn test_add_clamps_negative_price() {
        let mut ledger = CartLedger::new(test_config());
        ledger.add_or_increment("A", Money::from_minor(-100));
        assert_eq!(ledger.item("A").unwrap().unit_price, Money::zero());
    }

    #[test]
    fn test_items_preserve_insertion_order() {
        let mut ledger = CartLedger::new(test_config());
        ledger.add_or_increment("C", Money::from_minor(1));
        ledger.add_or_increment("A", Money::from_minor(1));
        ledger.add_or_increment("B", Money::from_minor(1));
        ledger.add_or_increment("A", Money::from_minor(1));

        let ids: Vec<&str> = ledger.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_change_quantity_to_zero_removes_item() {
        let mut ledger = CartLedger::new(test_config());
        ledger.add_or_increment("A", Money::from_minor(2450));
        ledger.add_or_increment("A", Money::from_minor(2450));

        ledger.change_quantity("A", -2);

        assert!(ledger.item("A").is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_change_quantity_floors_at_zero() {
        let mut ledger = CartLedger::new(test_config());
        ledger.add_or_increment("A", Money::from_minor(100));

        ledger.change_quantity("A", -50);

        assert!(ledger.item("A").is_none());
    }

    #[test]
    fn test_change_quantity_positive_delta() {
        let mut ledger = CartLedger::new(test_config());
        ledger.add_or_increment("A", Money::from_minor(100));

        ledger.change_quantity("A", 4);

        assert_eq!(ledger.item("A").unwrap().quantity, 5);
        assert_eq!(ledger.total_quantity(), 5);
    }

    #[test]
    fn test_change_quantity_absent_item_is_noop() {
        let mut ledger = CartLedger::new(test_config());
        ledger.add_or_increment("A", Money::from_minor(100));

        ledger.change_quantity("missing", -1);
        ledger.change_quantity("missing", 3);

        assert_eq!(ledger.item_count(), 1);
        assert!(ledger.item("missing").is_none());
    }

    #[test]
    fn test_remove_item() {
        let mut ledger = CartLedger::new(test_config());
        ledger.add_or_increment("A", Money::from_minor(100));
        ledger.add_or_increment("B", Money::from_minor(100));

        ledger.remove_item("A");
        ledger.remove_item("missing");

        assert_eq!(ledger.item_count(), 1);
        assert!(ledger.item("B").is_some());
    }

    #[test]
    fn test_default_fulfillment_selected() {
        let ledger = CartLedger::new(test_config());
        assert_eq!(ledger.selected_fulfillment().id, "express");
        assert_eq!(ledger.compute_totals().fee.minor(), 500);
    }

    #[test]
    fn test_select_fulfillment() {
        let mut ledger = CartLedger::new(test_config());
        ledger.select_fulfillment("pickup").unwrap();
        assert_eq!(ledger.selected_fulfillment().id, "pickup");
        assert!(ledger.compute_totals().fee.is_zero());
    }

    #[test]
    fn test_select_unknown_fulfillment_keeps_previous() {
        let mut ledger = CartLedger::new(test_config());
        ledger.select_fulfillment("standard").unwrap();

        let err = ledger.select_fulfillment("nonexistent").unwrap_err();

        assert_eq!(
            err,
            LedgerError::InvalidOption {
                option_id: "nonexistent".to_string()
            }
        );
        assert_eq!(ledger.selected_fulfillment().id, "standard");
    }

    #[test]
    fn test_reference_scenario() {
        let mut ledger = CartLedger::new(test_config());

        ledger.add_or_increment("A", Money::from_minor(2450));
        ledger.add_or_increment("A", Money::from_minor(2450));
        assert_eq!(ledger.compute_totals().subtotal.minor(), 4900);

        ledger.select_fulfillment("express").unwrap();
        assert_eq!(ledger.compute_totals().fee.minor(), 500);

        let rate = ledger.apply_promotion("SAVE10").unwrap();
        assert_eq!(rate.bps(), 1000);

        let totals = ledger.compute_totals();
        assert_eq!(totals.subtotal.minor(), 4900);
        assert_eq!(totals.fee.minor(), 500);
        assert_eq!(totals.discount.minor(), 490);
        assert_eq!(totals.total.minor(), 4910);
    }

    #[test]
    fn test_bogus_promotion_keeps_active_code() {
        let mut ledger = CartLedger::new(test_config());

        assert!(ledger.apply_promotion("BOGUS").is_err());
        assert!(ledger.active_promotion().is_none());

        ledger.apply_promotion("SAVE10").unwrap();
        let err = ledger.apply_promotion("BOGUS").unwrap_err();

        assert_eq!(
            err,
            LedgerError::InvalidPromotion {
                code: "BOGUS".to_string()
            }
        );
        assert_eq!(ledger.active_promotion().unwrap().as_str(), "SAVE10");
    }

    #[test]
    fn test_malformed_promotion_rejected() {
        let mut ledger = CartLedger::new(test_config());
        assert!(matches!(
            ledger.apply_promotion(""),
            Err(LedgerError::InvalidPromotion { .. })
        ));
        assert!(matches!(
            ledger.apply_promotion("   "),
            Err(LedgerError::InvalidPromotion { .. })
        ));
        assert!(ledger.active_promotion().is_none());
    }

    #[test]
    fn test_promotion_matching_is_exact_after_trim() {
        let mut ledger = CartLedger::new(test_config());
        ledger.add_or_increment("A", Money::from_minor(4900));
        ledger.apply_promotion("  SAVE10 ").unwrap();
        assert_eq!(ledger.active_promotion().unwrap().as_str(), "SAVE10");
        let before = ledger.compute_totals();

        for code in ["save10", "Save10", "\u{17f}ave10", "SAVE10\u{0}"] {
            assert!(matches!(
                ledger.apply_promotion(code),
                Err(LedgerError::InvalidPromotion { .. })
            ));
            assert_eq!(ledger.active_promotion().unwrap().as_str(), "SAVE10");
            assert_eq!(ledger.compute_totals(), before);
        }
    }

    #[test]
    fn test_lowercase_code_on_empty_promotion_rejected() {
        let mut ledger = CartLedger::new(test_config());
        ledger.add_or_increment("A", Money::from_minor(4900));

        let err = ledger.apply_promotion("save10").unwrap_err();
        assert_eq!(err, LedgerError::InvalidPromotion { code: "save10".to_string() });
        assert!(ledger.active_promotion().is_none());
        assert!(ledger.compute_totals().discount.is_zero());
    }

    #[test]
    fn test_apply_then_clear_promotion_restores_totals() {
        let mut ledger = CartLedger::new(test_config());
        ledger.add_or_increment("A", Money::from_minor(2450));
        ledger.add_or_increment("B", Money::from_minor(850));
        let before = ledger.compute_totals();

        ledger.apply_promotion("SAVE10").unwrap();
        assert_ne!(ledger.compute_totals(), before);

        ledger.clear_promotion();
        assert_eq!(ledger.compute_totals(), before);
        assert!(ledger.active_promotion().is_none());
    }

    #[test]
    fn test_compute_totals_idempotent() {
        let mut ledger = CartLedger::new(test_config());
        ledger.add_or_increment("A", Money::from_minor(999));
        ledger.apply_promotion("HALF").unwrap();

        assert_eq!(ledger.compute_totals(), ledger.compute_totals());
    }

    #[test]
    fn test_empty_cart_totals() {
        let mut ledger = CartLedger::new(test_config());
        ledger.select_fulfillment("pickup").unwrap();
        ledger.apply_promotion("SAVE10").unwrap();

        assert_eq!(ledger.compute_totals(), CartTotals::default());
    }

    #[test]
    fn test_with_items_seeds_and_merges() {
        let ledger = CartLedger::with_items(
            test_config(),
            vec![
                LineItem::new("1", Money::from_minor(2450), 2),
                LineItem::new("2", Money::from_minor(850), 0),
                LineItem::new("3", Money::from_minor(3200), 1),
                LineItem::new("1", Money::from_minor(1), 1),
            ],
        );

        let ids: Vec<&str> = ledger.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(ledger.item("1").unwrap().quantity, 3);
        assert_eq!(ledger.item("1").unwrap().unit_price.minor(), 2450);
        assert_eq!(ledger.compute_totals().subtotal.minor(), 2450 * 3 + 3200);
    }

    #[test]
    fn test_quantity_saturates() {
        let mut ledger = CartLedger::with_items(
            test_config(),
            vec![LineItem::new("A", Money::from_minor(1), u32::MAX)],
        );
        ledger.add_or_increment("A", Money::from_minor(1));
        ledger.change_quantity("A", i64::MAX);

        assert_eq!(ledger.item("A").unwrap().quantity, u32::MAX);
        assert!(ledger.compute_totals().total.is_positive());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u8, i64),
        Change(u8, i64),
        Remove(u8),
        Select(u8),
        Promo(u8),
        ClearPromo,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..5, 0i64..1_000_000).prop_map(|(id, price)| Op::Add(id, price)),
            (0u8..5, -5i64..5).prop_map(|(id, delta)| Op::Change(id, delta)),
            (0u8..5).prop_map(Op::Remove),
            (0u8..4).prop_map(Op::Select),
            (0u8..3).prop_map(Op::Promo),
            Just(Op::ClearPromo),
        ]
    }

    fn run(ledger: &mut CartLedger, op: &Op) {
        const OPTIONS: [&str; 4] = ["express", "standard", "pickup", "drone"];
        const CODES: [&str; 3] = ["SAVE10", "HALF", "BOGUS"];
        match op {
            Op::Add(id, price) => ledger.add_or_increment(&id.to_string(), Money::from_minor(*price)),
            Op::Change(id, delta) => ledger.change_quantity(&id.to_string(), *delta),
            Op::Remove(id) => ledger.remove_item(&id.to_string()),
            Op::Select(i) => {
                let _ = ledger.select_fulfillment(OPTIONS[*i as usize]);
            }
            Op::Promo(i) => {
                let _ = ledger.apply_promotion(CODES[*i as usize]);
            }
            Op::ClearPromo => ledger.clear_promotion(),
        }
    }

    proptest! {
        #[test]
        fn prop_retained_items_have_positive_quantity(
            ops in prop::collection::vec(op_strategy(), 0..60)
        ) {
            let mut ledger = CartLedger::new(test_config());
            for op in &ops {
                run(&mut ledger, op);
                prop_assert!(ledger.items().iter().all(|i| i.quantity >= 1));
            }
        }

        #[test]
        fn prop_total_never_negative_and_idempotent(
            ops in prop::collection::vec(op_strategy(), 0..60)
        ) {
            let mut ledger = CartLedger::new(test_config());
            for op in &ops {
                run(&mut ledger, op);
                let first = ledger.compute_totals();
                prop_assert!(!first.total.is_negative());
                prop_assert!(first.discount <= first.subtotal);
                prop_assert_eq!(first, ledger.compute_totals());
            }
        }

        #[test]
        fn prop_failed_operations_leave_state_unchanged(
            ops in prop::collection::vec(op_strategy(), 0..30)
        ) {
            let mut ledger = CartLedger::new(test_config());
            for op in &ops {
                run(&mut ledger, op);
            }
            let totals = ledger.compute_totals();
            let selected = ledger.selected_fulfillment().id.clone();
            let promo = ledger.active_promotion().cloned();

            prop_assert!(ledger.select_fulfillment("drone").is_err());
            prop_assert!(ledger.apply_promotion("BOGUS").is_err());

            prop_assert_eq!(ledger.compute_totals(), totals);
            prop_assert_eq!(&ledger.selected_fulfillment().id, &selected);
            prop_assert_eq!(ledger.active_promotion().cloned(), promo);
        }

        #[test]
        fn prop_subtotal_is_order_independent(
            prices in prop::collection::vec(0i64..100_000, 1..10)
        ) {
            let mut forward = CartLedger::new(test_config());
            let mut backward = CartLedger::new(test_config());
            for (id, price) in prices.iter().enumerate() {
                forward.add_or_increment(&id.to_string(), Money::from_minor(*price));
            }
            for (id, price) in prices.iter().enumerate().rev() {
                backward.add_or_increment(&id.to_string(), Money::from_minor(*price));
            }
            prop_assert_eq!(forward.compute_totals(), backward.compute_totals());
        }
    }
}
