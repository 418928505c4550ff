//! # Menu-Item Movement
//!
//! Per-item units sold, revenue, and share of total sales over a reporting
//! period. Every catalog item gets a record, including items that never
//! sold. The product-movement screen renders the full catalog and lets the
//! operator narrow to active movers.
//!
//! Revenue is computed from the catalog price looked up by `menu_id`, so a
//! stale order whose item left the catalog contributes units to nothing
//! visible and zero revenue to the grand total.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{MenuItem, Transaction};

// =============================================================================
// Movement Record
// =============================================================================

/// Movement statistics for one catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItemMovement {
    pub menu_item_id: String,
    pub name: String,

    /// Units sold across the period.
    pub unit_sold: i64,

    /// Revenue attributed to this item, catalog price × units.
    pub total_sales_centavos: i64,

    /// This item's share of the period's total revenue, 0-100. Zero for
    /// every item when the period had no sales at all.
    pub percentage_of_sales: f64,
}

/// Sort key for the product-movement screen.
///
/// Name sorts ascending; the numeric keys sort descending (biggest movers
/// first), matching how the screen presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum MovementSortKey {
    Name,
    UnitSold,
    TotalSales,
    PercentageOfSales,
}

// =============================================================================
// Movement Computation
// =============================================================================

/// Computes movement statistics for every catalog item over the given
/// transactions (typically the successful set for a date range).
///
/// ## Invariants
/// - The `total_sales_centavos` of all records sums to the period grand
///   total.
/// - `percentage_of_sales` sums to 100 whenever the grand total is
///   positive, and is 0 for every record otherwise.
pub fn menu_item_movement(
    transactions: &[Transaction],
    menu_items: &[MenuItem],
) -> Vec<MenuItemMovement> {
    // Catalog price lookup, one pass
    let price_by_id: HashMap<&str, Money> = menu_items
        .iter()
        .map(|m| (m.id.as_str(), m.price()))
        .collect();

    let mut unit_sold: HashMap<&str, i64> = HashMap::new();
    let mut item_sales: HashMap<&str, Money> = HashMap::new();
    let mut total_sales_all = Money::zero();

    for tx in transactions {
        for order in &tx.orders {
            let Some(menu_id) = order.menu_id.as_deref() else {
                continue;
            };
            if order.qty <= 0 {
                continue;
            }

            let price = price_by_id.get(menu_id).copied().unwrap_or(Money::zero());
            let line_sales = price.multiply_quantity(order.qty);

            *unit_sold.entry(menu_id).or_insert(0) += order.qty;
            *item_sales.entry(menu_id).or_insert(Money::zero()) += line_sales;
            total_sales_all += line_sales;
        }
    }

    menu_items
        .iter()
        .map(|menu_item| {
            let sales = item_sales
                .get(menu_item.id.as_str())
                .copied()
                .unwrap_or(Money::zero());
            let percentage_of_sales = if total_sales_all.is_positive() {
                sales.centavos() as f64 / total_sales_all.centavos() as f64 * 100.0
            } else {
                0.0
            };

            MenuItemMovement {
                menu_item_id: menu_item.id.clone(),
                name: menu_item.name.clone(),
                unit_sold: unit_sold.get(menu_item.id.as_str()).copied().unwrap_or(0),
                total_sales_centavos: sales.centavos(),
                percentage_of_sales,
            }
        })
        .collect()
}

/// Sorts movement records in place by the given key.
pub fn sort_movements(movements: &mut [MenuItemMovement], key: MovementSortKey) {
    match key {
        MovementSortKey::Name => movements.sort_by(|a, b| a.name.cmp(&b.name)),
        MovementSortKey::UnitSold => movements.sort_by(|a, b| b.unit_sold.cmp(&a.unit_sold)),
        MovementSortKey::TotalSales => {
            movements.sort_by(|a, b| b.total_sales_centavos.cmp(&a.total_sales_centavos))
        }
        MovementSortKey::PercentageOfSales => movements
            .sort_by(|a, b| b.percentage_of_sales.total_cmp(&a.percentage_of_sales)),
    }
}

/// Narrows movement records to items that actually sold.
pub fn active_movers(movements: Vec<MenuItemMovement>) -> Vec<MenuItemMovement> {
    movements.into_iter().filter(|m| m.unit_sold > 0).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
