//! # Validation Module
//!
//! Opt-in sanity checks for menu configuration.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: serde deserialization                                     │
//! │  ├── Shape and type checks (a string where a price belongs fails)   │
//! │  └── Missing sections default to empty, missing tax_rate to 0       │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE (called by the loader, if it wants to)        │
//! │  ├── Prices must be non-negative                                    │
//! │  ├── Promo percents must lie in 0-100                               │
//! │  └── tax_rate must lie in 0-1 (it is a fraction, not a percentage)  │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: pricing itself                                            │
//! │  └── Accepts whatever it is handed; out-of-range values price       │
//! │      arithmetically rather than erroring                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pricing pipeline never calls these validators. They exist for
//! loaders that prefer to reject a nonsense document up front instead of
//! serving negative pizzas.

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::menu::Menu;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Validators
// =============================================================================

/// Validates a configured price (size base or topping add-on).
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (a free topping is a menu choice, not an error)
pub fn validate_price(field: &str, price: Decimal) -> ValidationResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
            value: price.to_string(),
        });
    }

    Ok(())
}

/// Validates a promo percentage.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive (the configuration carries the
///   0-100 scale; division by 100 happens inside the engine)
pub fn validate_percent(field: &str, percent: Decimal) -> ValidationResult<()> {
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: "0".to_string(),
            max: "100".to_string(),
            value: percent.to_string(),
        });
    }

    Ok(())
}

/// Validates the shop tax rate.
///
/// ## Rules
/// - Must be between 0 and 1 inclusive: it is a decimal fraction
///   (0.055 = 5.5%), and a rate above 1 almost certainly means someone
///   wrote a percentage into the wrong field
pub fn validate_tax_rate(tax_rate: Decimal) -> ValidationResult<()> {
    if tax_rate < Decimal::ZERO || tax_rate > Decimal::ONE {
        return Err(ValidationError::OutOfRange {
            field: "shop.tax_rate".to_string(),
            min: "0".to_string(),
            max: "1".to_string(),
            value: tax_rate.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Menu Validator
// =============================================================================

/// Validates a whole menu document, failing on the first problem found.
///
/// ## Example
/// ```rust
/// use slice_core::validation::validate_menu;
/// use slice_core::Menu;
///
/// let menu: Menu = serde_json::from_value(serde_json::json!({
///     "shop": { "tax_rate": 0.055 },
///     "sizes": { "small": 8 },
///     "promos": { "TEN": { "type": "percent_off_order", "percent": 10 } }
/// })).unwrap();
///
/// assert!(validate_menu(&menu).is_ok());
/// ```
pub fn validate_menu(menu: &Menu) -> ValidationResult<()> {
    validate_tax_rate(menu.shop.tax_rate)?;

    for (name, price) in &menu.sizes {
        validate_price(&format!("sizes.{name}"), *price)?;
    }

    for (name, price) in &menu.toppings {
        validate_price(&format!("toppings.{name}"), *price)?;
    }

    for (code, rule) in &menu.promos {
        validate_percent(&format!("promos.{code}.percent"), rule.percent)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_validate_price() {
        assert!(validate_price("sizes.small", dec!(8)).is_ok());
        assert!(validate_price("toppings.free", dec!(0)).is_ok());
        assert!(validate_price("sizes.small", dec!(-8)).is_err());
    }

    #[test]
    fn test_validate_percent() {
        assert!(validate_percent("p", dec!(0)).is_ok());
        assert!(validate_percent("p", dec!(10)).is_ok());
        assert!(validate_percent("p", dec!(100)).is_ok());
        assert!(validate_percent("p", dec!(100.01)).is_err());
        assert!(validate_percent("p", dec!(-1)).is_err());
    }

    #[test]
    fn test_validate_tax_rate() {
        assert!(validate_tax_rate(dec!(0)).is_ok());
        assert!(validate_tax_rate(dec!(0.055)).is_ok());
        assert!(validate_tax_rate(dec!(1)).is_ok());
        // 5.5 here means someone wrote a percentage, not a fraction
        assert!(validate_tax_rate(dec!(5.5)).is_err());
        assert!(validate_tax_rate(dec!(-0.01)).is_err());
    }

    #[test]
    fn test_validate_menu_ok() {
        let menu: Menu = serde_json::from_value(json!({
            "shop": { "tax_rate": 0.055 },
            "sizes": { "small": 8, "large": 14 },
            "toppings": { "pepperoni": 1.5 },
            "promos": { "LARGE2": { "type": "two_large_pct_off", "percent": 10 } }
        }))
        .unwrap();
        assert!(validate_menu(&menu).is_ok());
    }

    #[test]
    fn test_validate_menu_flags_negative_topping() {
        let menu: Menu = serde_json::from_value(json!({
            "toppings": { "anchovies": -1.5 }
        }))
        .unwrap();
        let err = validate_menu(&menu).unwrap_err();
        assert_eq!(
            err.to_string(),
            "toppings.anchovies must not be negative (got -1.5)"
        );
    }

    #[test]
    fn test_validate_menu_flags_oversized_percent() {
        let menu: Menu = serde_json::from_value(json!({
            "promos": { "ALL": { "type": "percent_off_order", "percent": 150 } }
        }))
        .unwrap();
        assert!(validate_menu(&menu).is_err());
    }

    #[test]
    fn test_empty_menu_validates() {
        let menu = Menu::default();
        assert!(validate_menu(&menu).is_ok());
    }
}
