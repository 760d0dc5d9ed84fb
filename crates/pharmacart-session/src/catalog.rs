//! # Product Catalog
//!
//! Static product data the cart screen adds from. The ledger only knows ids
//! and prices; names, stock and prescription flags live here.

use pharmacart_core::validation::{validate_item_id, validate_unit_price};
use pharmacart_core::{Money, ValidationError};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::SessionResult;

/// A product that can be put in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable id, used as the line item id.
    pub id: String,

    /// Display name shown on the cart row.
    pub name: String,

    /// Price in minor units.
    pub unit_price: Money,

    /// Dispensing needs a prescription check.
    #[serde(default)]
    pub prescription_required: bool,

    /// Out-of-stock products cannot be added or incremented.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,

    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: Money) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            unit_price,
            prescription_required: false,
            in_stock: true,
            image_url: None,
        }
    }
}

/// Products indexed by id, in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Validates ids and prices and rejects duplicate ids.
    pub fn new(products: Vec<Product>) -> SessionResult<Self> {
        for (index, product) in products.iter().enumerate() {
            validate_item_id(&product.id)?;
            validate_unit_price(product.unit_price)?;
            if products[..index].iter().any(|p| p.id == product.id) {
                return Err(ValidationError::Duplicate {
                    field: "product".to_string(),
                    value: product.id.clone(),
                }
                .into());
            }
        }
        Ok(ProductCatalog { products })
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;

    #[test]
    fn test_catalog_lookup() {
        let catalog = ProductCatalog::new(vec![
            Product::new("1", "Zyncet Cetrizine 10Mg X50", Money::from_minor(2450)),
            Product::new("2", "Paracetamol 500mg Tablets", Money::from_minor(850)),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("2").unwrap().unit_price.minor(), 850);
        assert!(catalog.get("9").is_none());
    }

    #[test]
    fn test_catalog_rejects_duplicates_and_bad_prices() {
        let err = ProductCatalog::new(vec![
            Product::new("1", "A", Money::from_minor(1)),
            Product::new("1", "B", Money::from_minor(2)),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            SessionError::Validation(ValidationError::Duplicate { .. })
        ));

        let err = ProductCatalog::new(vec![Product::new("1", "A", Money::from_minor(-5))])
            .unwrap_err();
        assert!(matches!(err, SessionError::Validation(_)));
    }

    #[test]
    fn test_product_defaults_from_json() {
        let product: Product =
            serde_json::from_str(r#"{"id":"7","name":"Vitamin C","unitPrice":1200}"#).unwrap();
        assert!(product.in_stock);
        assert!(!product.prescription_required);
        assert!(product.image_url.is_none());
    }
}
