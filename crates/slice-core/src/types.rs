//! # Domain Types
//!
//! Core domain types for the pricing pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │   PizzaSpec     │   │   PromoRule     │   │  PricingResult  │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  size           │   │  kind           │   │  subtotal       │   │
//! │  │  toppings       │   │  percent (0-100)│   │  discount       │   │
//! │  └─────────────────┘   └─────────────────┘   │  tax_rate       │   │
//! │                                              │  total          │   │
//! │  ┌─────────────────┐                         └─────────────────┘   │
//! │  │   PromoKind     │                                               │
//! │  │  ─────────────  │   Unrecognized is a real enum arm, not an     │
//! │  │  TwoLargePctOff │   open-ended string: an unknown `type` in     │
//! │  │  PercentOffOrder│   the configuration lands there and applies   │
//! │  │  Unrecognized   │   as a zero discount.                         │
//! │  └─────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Pizza Spec
// =============================================================================

/// One pizza in an order: a size name plus an ordered list of toppings.
///
/// Created by the caller, consumed by reference; pricing never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaSpec {
    /// Size name, looked up in the menu's size table.
    pub size: String,

    /// Topping names, in the order the customer asked for them.
    /// Names absent from the menu's topping table contribute zero.
    #[serde(default)]
    pub toppings: Vec<String>,
}

impl PizzaSpec {
    /// Builds a spec from anything string-like.
    ///
    /// ## Example
    /// ```rust
    /// use slice_core::types::PizzaSpec;
    ///
    /// let p = PizzaSpec::new("medium", ["pepperoni", "onions"]);
    /// assert_eq!(p.size, "medium");
    /// assert_eq!(p.toppings.len(), 2);
    /// ```
    pub fn new<S, I, T>(size: S, toppings: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        PizzaSpec {
            size: size.into(),
            toppings: toppings.into_iter().map(Into::into).collect(),
        }
    }
}

// =============================================================================
// Promo Kind
// =============================================================================

/// The shape of a promotional discount.
///
/// Closed tagged variant: the system supports exactly two promotion shapes,
/// plus an explicit inert fallback. A `type` string in the configuration
/// that matches neither wire name deserializes to `Unrecognized` and the
/// promo applies as a zero discount rather than failing the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromoKind {
    /// Percent off the combined price of the "large" pizzas, if the order
    /// holds at least two of them.
    TwoLargePctOff,
    /// Percent off the whole order subtotal.
    PercentOffOrder,
    /// Anything else found in configuration. Applies as zero discount.
    #[serde(other)]
    Unrecognized,
}

impl Default for PromoKind {
    fn default() -> Self {
        PromoKind::Unrecognized
    }
}

// =============================================================================
// Promo Rule
// =============================================================================

/// A promotion definition from the menu's `promos` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoRule {
    /// Discount shape. Serialized as `type` in the configuration document.
    #[serde(rename = "type", default)]
    pub kind: PromoKind,

    /// Percentage on the 0-100 scale; divided by 100 before multiplication.
    /// A missing `percent` defaults to 0, which makes the promo a no-op.
    #[serde(default)]
    pub percent: Decimal,
}

// =============================================================================
// Pricing Result
// =============================================================================

/// The outcome of pricing one order.
///
/// All currency fields are rounded to 2 fractional digits (half-up);
/// `tax_rate` is the raw configured fraction, never rounded.
///
/// ## Invariant
/// `total` is derived from the *unrounded* subtotal and discount, so it may
/// legitimately differ from `round2((subtotal - discount) * (1 + tax_rate))`
/// computed over the rounded fields shown here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Sum of per-pizza prices before discount and tax, rounded.
    pub subtotal: Money,

    /// Discount shown to the customer, rounded.
    pub discount: Money,

    /// Configured tax fraction (0.055 = 5.5%), verbatim.
    pub tax_rate: Decimal,

    /// Tax-inclusive grand total, rounded.
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_pizza_spec_new() {
        let p = PizzaSpec::new("large", ["pepperoni"]);
        assert_eq!(p.size, "large");
        assert_eq!(p.toppings, vec!["pepperoni".to_string()]);

        let plain = PizzaSpec::new("small", Vec::<String>::new());
        assert!(plain.toppings.is_empty());
    }

    #[test]
    fn test_pizza_spec_missing_toppings_defaults_empty() {
        let p: PizzaSpec = serde_json::from_value(serde_json::json!({ "size": "small" })).unwrap();
        assert!(p.toppings.is_empty());
    }

    #[test]
    fn test_promo_kind_wire_names() {
        let kind: PromoKind = serde_json::from_str("\"two_large_pct_off\"").unwrap();
        assert_eq!(kind, PromoKind::TwoLargePctOff);

        let kind: PromoKind = serde_json::from_str("\"percent_off_order\"").unwrap();
        assert_eq!(kind, PromoKind::PercentOffOrder);
    }

    #[test]
    fn test_unknown_promo_type_is_unrecognized() {
        let kind: PromoKind = serde_json::from_str("\"buy_one_get_one\"").unwrap();
        assert_eq!(kind, PromoKind::Unrecognized);
    }

    #[test]
    fn test_promo_rule_from_config() {
        let rule: PromoRule = serde_json::from_value(serde_json::json!({
            "type": "percent_off_order",
            "percent": 10
        }))
        .unwrap();
        assert_eq!(rule.kind, PromoKind::PercentOffOrder);
        assert_eq!(rule.percent, dec!(10));
    }

    #[test]
    fn test_promo_rule_missing_percent_defaults_zero() {
        let rule: PromoRule =
            serde_json::from_value(serde_json::json!({ "type": "percent_off_order" })).unwrap();
        assert_eq!(rule.percent, Decimal::ZERO);
    }
}
