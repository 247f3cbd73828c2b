//! # Pricing Engine
//!
//! Order-level pricing: promo resolution and tax-inclusive totals.
//!
//! ## The Dual Rounding Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     compute_order_total                             │
//! │                                                                     │
//! │  Σ price_of(pizza) ──► subtotal_raw (unrounded Decimal)             │
//! │        │                                                            │
//! │        ├────────────► Money::new ──► result.subtotal  (display)     │
//! │        │                                                            │
//! │  raw_discount(...) ─► discount_raw (unrounded Decimal)              │
//! │        │                                                            │
//! │        ├────────────► Money::new ──► result.discount  (display)     │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  (subtotal_raw - discount_raw) × (1 + tax_rate)                     │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  Money::new ──► result.total                                        │
//! │                                                                     │
//! │  The rounded display discount NEVER feeds the tax base. Reusing it  │
//! │  would drift the total by up to half a cent per order.              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure: no state survives a call, and identical
//! inputs yield bit-identical outputs whether a discount is requested as a
//! standalone preview or as part of the full total.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::CoreResult;
use crate::menu::Menu;
use crate::money::Money;
use crate::types::{PizzaSpec, PricingResult, PromoKind};
use crate::{LARGE_SIZE, TWO_LARGE_MIN_COUNT};

// =============================================================================
// Single-Pizza Boundary
// =============================================================================

/// Resolves the display price of a single pizza.
///
/// Thin boundary over [`Menu::price_of`]: same lookup, same
/// [`crate::error::CoreError::UnknownSize`] on a bad size, result wrapped
/// as display-ready [`Money`].
///
/// ## Example
/// ```rust
/// use slice_core::{pricing, Menu, PizzaSpec};
///
/// let menu: Menu = serde_json::from_value(serde_json::json!({
///     "sizes": { "medium": 11 },
///     "toppings": { "pepperoni": 1.5, "onions": 1.0 }
/// })).unwrap();
///
/// let price = pricing::resolve_price(&menu, &PizzaSpec::new("medium", ["pepperoni", "onions"])).unwrap();
/// assert_eq!(price.to_f64(), 13.5);
/// ```
pub fn resolve_price(menu: &Menu, pizza: &PizzaSpec) -> CoreResult<Money> {
    Ok(Money::new(menu.price_of(pizza)?))
}

// =============================================================================
// Promo Resolution
// =============================================================================

/// Computes the unrounded discount for an order.
///
/// This is the value the tax base is built from. [`compute_discount`] wraps
/// it for display; [`compute_order_total`] uses it directly.
///
/// Zero-discount conditions, none of which are errors:
/// - no code given, or an empty code
/// - code not present in the menu's promo table
/// - `TwoLargePctOff` with fewer than two "large" pizzas in the order
/// - a promo whose `type` the system does not recognize
///
/// ## Errors
/// An unknown size on any pizza the rule consults propagates out; a
/// discount is never silently computed over a partial order.
fn raw_discount(menu: &Menu, pizzas: &[PizzaSpec], promo_code: Option<&str>) -> CoreResult<Decimal> {
    let code = match promo_code {
        Some(code) if !code.is_empty() => code,
        _ => return Ok(Decimal::ZERO),
    };

    let rule = match menu.promo(code) {
        Some(rule) => rule,
        None => {
            debug!(code, "promo code not defined in menu, applying no discount");
            return Ok(Decimal::ZERO);
        }
    };

    // 0-100 scale in configuration, fraction in arithmetic.
    let fraction = rule.percent / Decimal::ONE_HUNDRED;

    match rule.kind {
        PromoKind::TwoLargePctOff => {
            let mut large_count = 0usize;
            let mut large_sum = Decimal::ZERO;
            for pizza in pizzas.iter().filter(|p| p.size == LARGE_SIZE) {
                large_sum += menu.price_of(pizza)?;
                large_count += 1;
            }

            if large_count < TWO_LARGE_MIN_COUNT {
                debug!(code, large_count, "below two-large threshold, no discount");
                return Ok(Decimal::ZERO);
            }

            Ok(large_sum * fraction)
        }
        PromoKind::PercentOffOrder => {
            let mut order_sum = Decimal::ZERO;
            for pizza in pizzas {
                order_sum += menu.price_of(pizza)?;
            }
            Ok(order_sum * fraction)
        }
        PromoKind::Unrecognized => {
            debug!(code, "unrecognized promo type, applying no discount");
            Ok(Decimal::ZERO)
        }
    }
}

/// Computes the display discount for an order: the unrounded discount of
/// [`raw_discount`], rounded half-up at exposure.
///
/// ## Example
/// ```rust
/// use slice_core::{pricing, Menu, PizzaSpec};
///
/// let menu: Menu = serde_json::from_value(serde_json::json!({
///     "sizes": { "large": 14 },
///     "toppings": { "pepperoni": 1.5, "extra_cheese": 1.75 },
///     "promos": { "LARGE2": { "type": "two_large_pct_off", "percent": 10 } }
/// })).unwrap();
///
/// let pizzas = [
///     PizzaSpec::new("large", ["pepperoni"]),
///     PizzaSpec::new("large", ["extra_cheese"]),
/// ];
/// // 10% of (15.50 + 15.75) = 3.125 raw → 3.13 displayed
/// let discount = pricing::compute_discount(&menu, &pizzas, Some("LARGE2")).unwrap();
/// assert_eq!(discount.to_f64(), 3.13);
/// ```
pub fn compute_discount(
    menu: &Menu,
    pizzas: &[PizzaSpec],
    promo_code: Option<&str>,
) -> CoreResult<Money> {
    Ok(Money::new(raw_discount(menu, pizzas, promo_code)?))
}

// =============================================================================
// Order Total
// =============================================================================

/// Prices a whole order: subtotal, at most one promotional discount, and
/// the tax-inclusive grand total.
///
/// The tax base is `subtotal_raw - discount_raw`, both at full precision;
/// only the fields of the returned [`PricingResult`] are rounded. The
/// configured tax fraction passes through verbatim.
///
/// ## Errors
/// [`crate::error::CoreError::UnknownSize`] if any pizza in the order
/// references a size the menu does not define. No partial result.
pub fn compute_order_total(
    menu: &Menu,
    pizzas: &[PizzaSpec],
    promo_code: Option<&str>,
) -> CoreResult<PricingResult> {
    let mut subtotal_raw = Decimal::ZERO;
    for pizza in pizzas {
        subtotal_raw += menu.price_of(pizza)?;
    }

    let discount_raw = raw_discount(menu, pizzas, promo_code)?;
    let tax_rate = menu.tax_rate();
    let total = Money::new((subtotal_raw - discount_raw) * (Decimal::ONE + tax_rate));

    debug!(
        %subtotal_raw,
        %discount_raw,
        %tax_rate,
        total = %total,
        "order priced"
    );

    Ok(PricingResult {
        subtotal: Money::new(subtotal_raw),
        discount: Money::new(discount_raw),
        tax_rate,
        total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
