//! # slice-core: Pure Pricing Logic for Slice POS
//!
//! This crate is the **heart** of Slice POS. It turns a configuration-driven
//! menu plus a list of pizzas into a priced order, as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Slice POS Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │     Config loader / front-end (NOT in this workspace)       │   │
//! │  │   reads the menu document ──► renders the priced order      │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │               ★ slice-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────────┐       │   │
//! │  │  │  menu   │ │ pricing │ │  money   │ │ validation │       │   │
//! │  │  │  Menu   │ │ promos  │ │  Money   │ │   checks   │       │   │
//! │  │  │ price_of│ │  totals │ │ rounding │ │            │       │   │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └────────────┘       │   │
//! │  │                                                             │   │
//! │  │  NO I/O • NO STATE BETWEEN CALLS • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`] - Menu configuration document and per-pizza price resolution
//! - [`pricing`] - Promo resolution and tax-inclusive order totals
//! - [`money`] - Display-ready money type and the half-up rounding rule
//! - [`types`] - Domain types (PizzaSpec, PromoRule, PricingResult)
//! - [`error`] - Domain error types
//! - [`validation`] - Opt-in menu sanity checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same (menu, pizzas, promo code) = same result,
//!    bit for bit, every time
//! 2. **No I/O**: loading the menu document and rendering results are the
//!    embedding application's job
//! 3. **Decimal Money**: all accumulation is base-10 exact; floats appear
//!    only at the API boundary, after rounding
//! 4. **Benign unknowns**: unknown toppings, promo codes and promo types
//!    contribute zero; only an unknown *size* is an error
//!
//! ## Example Usage
//!
//! ```rust
//! use slice_core::{pricing, Menu, PizzaSpec};
//!
//! let menu: Menu = serde_json::from_value(serde_json::json!({
//!     "shop": { "tax_rate": 0.055 },
//!     "sizes": { "small": 8, "medium": 11 },
//!     "toppings": { "mushrooms": 1.25 },
//!     "promos": { "STUDENT10": { "type": "percent_off_order", "percent": 10 } }
//! })).unwrap();
//!
//! let pizzas = [
//!     PizzaSpec::new("small", Vec::<String>::new()),
//!     PizzaSpec::new("medium", ["mushrooms"]),
//! ];
//!
//! let result = pricing::compute_order_total(&menu, &pizzas, Some("STUDENT10")).unwrap();
//! assert_eq!(result.subtotal.to_f64(), 20.25);
//! assert_eq!(result.discount.to_f64(), 2.03);
//! assert_eq!(result.total.to_f64(), 19.23);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod menu;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use slice_core::Menu` instead of
// `use slice_core::menu::Menu`

pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::{Menu, ShopInfo};
pub use money::Money;
pub use pricing::{compute_discount, compute_order_total, resolve_price};
pub use types::{PizzaSpec, PricingResult, PromoKind, PromoRule};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The size name the two-large promotion matches against.
///
/// ## Why a constant?
/// The rule compares against this exact configured size name; keeping it
/// here makes the coupling between the promo rule and the size table
/// visible in one place.
pub const LARGE_SIZE: &str = "large";

/// Minimum number of "large" pizzas before the two-large promotion
/// applies. Below this the discount is zero, not an error.
pub const TWO_LARGE_MIN_COUNT: usize = 2;
