//! # Menu Module
//!
//! The menu configuration document and single-pizza price resolution.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  structured document (caller loads it; JSON, YAML, anything serde)  │
//! │       │                                                             │
//! │       ▼  serde Deserialize, every section #[serde(default)]         │
//! │  Menu { shop, sizes, toppings, promos }                             │
//! │       │                                                             │
//! │       ▼  read-only for the lifetime of all pricing calls            │
//! │  Menu::price_of(&PizzaSpec) ──► Decimal (2dp)                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  pricing engine (promo resolution, tax-inclusive totals)            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Missing sections are empty maps, a missing `tax_rate` is 0, and unknown
//! keys anywhere are ignored: a sparse document prices what it can rather
//! than failing to load.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::money::round_half_up;
use crate::types::{PizzaSpec, PromoRule};

// =============================================================================
// Shop Info
// =============================================================================

/// Shop metadata from the menu's `shop` section.
///
/// Only `tax_rate` participates in pricing. Extra keys in the document are
/// ignored rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopInfo {
    /// Display name of the shop.
    #[serde(default)]
    pub name: Option<String>,

    /// Tax as a decimal fraction (0.055 = 5.5%), applied to the
    /// post-discount subtotal. Defaults to 0 when absent.
    #[serde(default)]
    pub tax_rate: Decimal,
}

// =============================================================================
// Menu
// =============================================================================

/// The full menu configuration: shop metadata, size base prices, topping
/// add-on prices, and promotion definitions.
///
/// Loaded once, then treated as read-only; every method takes `&self` and
/// the type holds no interior mutability, so a shared `Menu` is safe to
/// price against from any number of threads at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    /// Shop metadata (tax rate and friends).
    #[serde(default)]
    pub shop: ShopInfo,

    /// Size name → base price.
    #[serde(default)]
    pub sizes: BTreeMap<String, Decimal>,

    /// Topping name → add-on price.
    #[serde(default)]
    pub toppings: BTreeMap<String, Decimal>,

    /// Promo code → promotion rule.
    #[serde(default)]
    pub promos: BTreeMap<String, PromoRule>,
}

impl Menu {
    /// Resolves the price of a single pizza.
    ///
    /// Base price comes from the size table; each topping present in the
    /// topping table adds its price, and toppings the menu has never heard
    /// of contribute zero. The sum is rounded to 2 fractional digits
    /// (half-up), though with well-formed configuration prices this is a
    /// no-op.
    ///
    /// ## Errors
    /// [`CoreError::UnknownSize`] if the size is absent from the size
    /// table. There is no default-price substitution.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal_macros::dec;
    /// use slice_core::menu::Menu;
    /// use slice_core::types::PizzaSpec;
    ///
    /// let menu: Menu = serde_json::from_value(serde_json::json!({
    ///     "sizes": { "medium": 11 },
    ///     "toppings": { "pepperoni": 1.5, "onions": 1.0 }
    /// })).unwrap();
    ///
    /// let pizza = PizzaSpec::new("medium", ["pepperoni", "onions"]);
    /// assert_eq!(menu.price_of(&pizza).unwrap(), dec!(13.50));
    /// ```
    pub fn price_of(&self, pizza: &PizzaSpec) -> CoreResult<Decimal> {
        let base = self
            .sizes
            .get(&pizza.size)
            .copied()
            .ok_or_else(|| CoreError::UnknownSize {
                size: pizza.size.clone(),
            })?;

        let toppings: Decimal = pizza
            .toppings
            .iter()
            .filter_map(|t| self.toppings.get(t))
            .copied()
            .sum();

        Ok(round_half_up(base + toppings))
    }

    /// Looks up a promotion rule by code. `None` for codes the menu does
    /// not define; the pricing engine treats that as "no promotion".
    #[inline]
    pub fn promo(&self, code: &str) -> Option<&PromoRule> {
        self.promos.get(code)
    }

    /// The configured tax fraction.
    #[inline]
    pub fn tax_rate(&self) -> Decimal {
        self.shop.tax_rate
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn sample_menu() -> Menu {
        serde_json::from_value(json!({
            "shop": { "name": "Slice of Life", "tax_rate": 0.055 },
            "sizes": { "small": 8, "medium": 11, "large": 14 },
            "toppings": { "pepperoni": 1.5, "onions": 1.0 }
        }))
        .unwrap()
    }

    #[test]
    fn test_price_base_plus_toppings() {
        let menu = sample_menu();
        let pizza = PizzaSpec::new("medium", ["pepperoni", "onions"]);
        // base 11 + pepperoni 1.5 + onions 1.0 = 13.50
        assert_eq!(menu.price_of(&pizza).unwrap(), dec!(13.50));
    }

    #[test]
    fn test_price_no_toppings() {
        let menu = sample_menu();
        let pizza = PizzaSpec::new("small", Vec::<String>::new());
        assert_eq!(menu.price_of(&pizza).unwrap(), dec!(8.00));
    }

    #[test]
    fn test_unknown_size_errors() {
        let menu = sample_menu();
        let pizza = PizzaSpec::new("gigantic", Vec::<String>::new());
        let err = menu.price_of(&pizza).unwrap_err();
        assert!(matches!(err, CoreError::UnknownSize { size } if size == "gigantic"));
    }

    #[test]
    fn test_unknown_topping_contributes_zero() {
        let menu = sample_menu();
        let with_unknown = PizzaSpec::new("medium", ["pepperoni", "truffle_shavings"]);
        let without = PizzaSpec::new("medium", ["pepperoni"]);
        assert_eq!(
            menu.price_of(&with_unknown).unwrap(),
            menu.price_of(&without).unwrap()
        );
    }

    #[test]
    fn test_empty_document_is_empty_menu() {
        let menu: Menu = serde_json::from_value(json!({})).unwrap();
        assert!(menu.sizes.is_empty());
        assert!(menu.toppings.is_empty());
        assert!(menu.promos.is_empty());
        assert_eq!(menu.tax_rate(), Decimal::ZERO);
        assert_eq!(menu.shop.name, None);
    }

    #[test]
    fn test_missing_tax_rate_defaults_zero() {
        let menu: Menu = serde_json::from_value(json!({
            "shop": { "name": "No Tax Haven" },
            "sizes": { "small": 8 }
        }))
        .unwrap();
        assert_eq!(menu.tax_rate(), Decimal::ZERO);
    }

    #[test]
    fn test_extra_shop_keys_ignored() {
        let menu: Menu = serde_json::from_value(json!({
            "shop": { "tax_rate": 0.07, "phone": "555-0101", "city": "Naples" }
        }))
        .unwrap();
        assert_eq!(menu.tax_rate(), dec!(0.07));
    }

    #[test]
    fn test_promo_lookup() {
        let menu: Menu = serde_json::from_value(json!({
            "promos": {
                "LARGE2": { "type": "two_large_pct_off", "percent": 10 }
            }
        }))
        .unwrap();
        assert!(menu.promo("LARGE2").is_some());
        assert!(menu.promo("NOPE").is_none());
    }
}
