//! # Order Totals Calculator
//!
//! Computes the itemized monetary breakdown for one transaction's orders.
//!
//! ## Computation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Totals Pipeline                                │
//! │                                                                         │
//! │  orders ──► partition gross by category                                 │
//! │              ├── beverage bucket                                        │
//! │              ├── food bucket                                            │
//! │              └── standalone add-on bucket                               │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  gross ──► less_vat ──► subtotal                                        │
//! │              │                                                          │
//! │              ├── vat = gross - subtotal   (0 for special discounts)     │
//! │              ├── discounted   = rate × base                             │
//! │              └── voucher      = rate × (subtotal + vat)                 │
//! │                                                                         │
//! │  eligible gross (food + add-ons, unless opted out)                      │
//! │              │                                                          │
//! │              ├── TO_GO  ──► flat to-go fee, no service charge           │
//! │              └── FOR_HERE ─► service charge off discounted net          │
//! │                                                                         │
//! │  total = subtotal + vat - reductions + service charge + to-go fee       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Policy
//! Every intermediate step rounds to the centavo, not just the final total.
//! The stored transaction amounts were produced this way; recomputed
//! breakdowns must match them centavo for centavo.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{DiningOption, Discount, MenuCategory, Order, Rate, StoreConfig, Voucher};

// =============================================================================
// Order Totals
// =============================================================================

/// The itemized breakdown for one transaction.
///
/// A plain value object: recomputed on every call, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderTotals {
    /// Total units across all order lines.
    pub quantity: i64,

    /// VAT-inclusive gross across all buckets.
    pub gross_centavos: i64,

    /// Gross with VAT backed out.
    pub subtotal_centavos: i64,

    /// VAT portion. Exactly zero when a special (VAT-exempt) discount
    /// applies, regardless of order contents.
    pub vat_centavos: i64,

    /// Discount reduction in centavos.
    pub discounted_centavos: i64,

    /// Voucher reduction in centavos. Independent of the discount, applied
    /// against the same base, never compounded.
    pub voucher_discounted_centavos: i64,

    /// Percentage service charge on eligible food/add-on lines.
    pub service_charge_centavos: i64,

    /// Flat to-go fee, substituting for the service charge on takeout.
    pub togo_charge_centavos: i64,

    /// Amount due: subtotal + vat - reductions + surcharges.
    pub total_amount_centavos: i64,
}

impl OrderTotals {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_centavos(self.subtotal_centavos)
    }

    /// Returns the VAT portion as Money.
    #[inline]
    pub fn vat(&self) -> Money {
        Money::from_centavos(self.vat_centavos)
    }

    /// Returns the amount due as Money.
    #[inline]
    pub fn total_amount(&self) -> Money {
        Money::from_centavos(self.total_amount_centavos)
    }
}

// =============================================================================
// Line Gross Helpers
// =============================================================================

/// Gross for one menu order line:
/// `qty × (base price + selected options + attached add-ons)`.
fn menu_line_gross(order: &Order) -> Money {
    let Some(menu) = &order.menu else {
        return Money::zero();
    };

    let options: i64 = order
        .options
        .iter()
        .map(|o| o.selection_price_centavos)
        .sum();
    let add_ons: i64 = order.add_ons.iter().map(|a| a.price_centavos).sum();

    (menu.price() + Money::from_centavos(options) + Money::from_centavos(add_ons))
        .multiply_quantity(order.qty)
}

/// Gross for one standalone add-on line: `qty × add-on price`.
/// Standalone add-ons carry no option selections.
fn add_on_line_gross(order: &Order) -> Money {
    match &order.add_on {
        Some(add_on) => add_on.price().multiply_quantity(order.qty),
        None => Money::zero(),
    }
}

/// Sums menu line gross over orders in one category.
fn category_gross(orders: &[Order], category: MenuCategory) -> Money {
    orders
        .iter()
        .filter(|o| o.menu.as_ref().map(|m| m.category) == Some(category))
        .map(menu_line_gross)
        .sum()
}

/// Sums the service-charge-eligible gross: food lines and add-on lines,
/// unless the item explicitly opted out.
fn eligible_gross(orders: &[Order]) -> Money {
    let food: Money = orders
        .iter()
        .filter(|o| {
            o.menu
                .as_ref()
                .map(|m| m.category == MenuCategory::Food && m.has_service_charge)
                .unwrap_or(false)
        })
        .map(menu_line_gross)
        .sum();

    let add_ons: Money = orders
        .iter()
        .filter(|o| {
            o.add_on
                .as_ref()
                .map(|a| a.has_service_charge)
                .unwrap_or(false)
        })
        .map(add_on_line_gross)
        .sum();

    food + add_ons
}

// =============================================================================
// Order Totals Calculation
// =============================================================================

/// Computes the itemized breakdown for one transaction's orders.
///
/// Pure and total: missing references contribute zero, no input combination
/// panics, and no output field is ever NaN. The breakdown for an empty
/// order list is all zeros.
///
/// ## Example
/// ```rust
/// use mesa_core::totals::order_totals;
/// use mesa_core::types::{DiningOption, StoreConfig};
///
/// let store = StoreConfig { vat_rate_bps: 1200, ..Default::default() };
/// let totals = order_totals(&[], DiningOption::ForHere, &store, None, None);
/// assert_eq!(totals.total_amount_centavos, 0);
/// ```
pub fn order_totals(
    orders: &[Order],
    dining_option: DiningOption,
    store: &StoreConfig,
    discount: Option<&Discount>,
    voucher: Option<&Voucher>,
) -> OrderTotals {
    let beverage = category_gross(orders, MenuCategory::Beverage);
    let food = category_gross(orders, MenuCategory::Food);
    let add_ons: Money = orders.iter().map(add_on_line_gross).sum();

    let quantity: i64 = orders.iter().map(|o| o.qty).sum();
    let gross = beverage + food + add_ons;

    let vat_rate = store.vat_rate();
    let subtotal = gross.less_vat(vat_rate);

    let is_special = discount.map(|d| d.is_special).unwrap_or(false);
    let vat = if is_special {
        Money::zero()
    } else {
        gross - subtotal
    };

    // Special discounts reduce the VAT-exempt subtotal; regular discounts
    // reduce the VAT-inclusive base. Voucher always reduces the full base.
    let discounted = match discount {
        Some(d) if d.is_special => subtotal.apply_rate(d.rate()),
        Some(d) => (subtotal + vat).apply_rate(d.rate()),
        None => Money::zero(),
    };
    let voucher_discounted = match voucher {
        Some(v) => (subtotal + vat).apply_rate(v.rate()),
        None => Money::zero(),
    };

    let eligible = eligible_gross(orders);

    // A positive eligible amount on takeout swaps the percentage service
    // charge for the flat packaging fee.
    let togo_charge = if dining_option == DiningOption::ToGo && eligible.is_positive() {
        store.togo_charge()
    } else {
        Money::zero()
    };

    let service_charge = if togo_charge.is_zero() && store.service_charge && eligible.is_positive()
    {
        let reduction_rate = discount
            .map(Discount::rate)
            .or_else(|| voucher.map(Voucher::rate))
            .unwrap_or(Rate::zero());

        eligible
            .less_vat(vat_rate)
            .less_rate(reduction_rate)
            .apply_rate(store.service_charge_rate())
    } else {
        Money::zero()
    };

    let total_amount =
        subtotal + vat - discounted - voucher_discounted + service_charge + togo_charge;

    OrderTotals {
        quantity,
        gross_centavos: gross.centavos(),
        subtotal_centavos: subtotal.centavos(),
        vat_centavos: vat.centavos(),
        discounted_centavos: discounted.centavos(),
        voucher_discounted_centavos: voucher_discounted.centavos(),
        service_charge_centavos: service_charge.centavos(),
        togo_charge_centavos: togo_charge.centavos(),
        total_amount_centavos: total_amount.centavos(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
