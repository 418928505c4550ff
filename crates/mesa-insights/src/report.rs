//! # Dashboard Report Assembly
//!
//! Composes the engine's outputs into the single value object the dashboard
//! home screen renders: today's sales rollup, week-over-week movement of the
//! headline cards, the channel mix, product movement, and the hourly orders
//! series.
//!
//! ## Comparison Windows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  today's transactions ────────┐                                         │
//! │                               ├── up to the current hour, SUCCESS only  │
//! │  same day last week ──────────┘                                         │
//! │                                                                         │
//! │  Each card compares the same span of service: 2 PM today vs. 2 PM       │
//! │  last week, never a full day against a partial one.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use chrono::{NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use mesa_core::metrics::{
    channel_mix, orders_per_hour, period_change, total_guests, transaction_summary, ChannelMix,
    TransactionSummary,
};
use mesa_core::movement::{menu_item_movement, MenuItemMovement};
use mesa_core::rollup::{transactions_totals, TransactionsTotals};
use mesa_core::types::{MenuItem, StoreConfig, Transaction};
use mesa_core::{SERVICE_DAY_END_HOUR, SERVICE_DAY_START_HOUR};

// =============================================================================
// Dashboard Report
// =============================================================================

/// Everything the dashboard home screen needs for one reporting day.
///
/// A plain value object: assembled from snapshots on demand, serialized to
/// the frontend, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardReport {
    /// The day this report describes.
    #[ts(as = "String")]
    pub report_date: NaiveDate,

    /// Full sales rollup for the visible window of the reporting day.
    pub sales: TransactionsTotals,

    /// Total sales vs. the same day last week, percent.
    pub sales_change: f64,

    /// Successful transactions in the visible window.
    pub transaction_count: usize,

    /// Transaction count vs. the same day last week, percent.
    pub transaction_count_change: f64,

    /// Guests served in the visible window.
    pub guests: i64,

    /// Foot traffic vs. the same day last week, percent.
    pub guests_change: f64,

    /// Revenue split across ordering channels.
    pub channel_mix: ChannelMix,

    /// Revenue/volume summary feeding the sales insight prompt.
    pub today_summary: TransactionSummary,

    /// Same summary for the comparison day.
    pub last_week_summary: TransactionSummary,

    /// Per-item movement over the reporting day, full catalog.
    pub movement: Vec<MenuItemMovement>,

    /// Ordered line items per service hour, zero-filled across the charted
    /// day.
    pub hourly_orders: BTreeMap<u32, usize>,
}

// =============================================================================
// Report Assembly
// =============================================================================

/// Narrows a fetched set to the transactions a report may count:
/// successful, and - when a current hour is given - created at or before
/// that hour.
fn visible_window(transactions: &[Transaction], current_hour: Option<u32>) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.is_success())
        .filter(|t| current_hour.map_or(true, |hour| t.created_at.hour() <= hour))
        .cloned()
        .collect()
}

/// Assembles the dashboard report for one reporting day.
///
/// ## Arguments
/// * `report_date` - the day being reported
/// * `today` - transactions fetched for the reporting day
/// * `same_day_last_week` - transactions fetched for the comparison day
/// * `menu_items` - the full catalog (movement includes zero-sellers)
/// * `store` - tenant configuration for the rollup
/// * `current_hour` - cut both windows at this hour for a like-for-like
///   comparison; `None` compares whole days
pub fn build_dashboard_report(
    report_date: NaiveDate,
    today: &[Transaction],
    same_day_last_week: &[Transaction],
    menu_items: &[MenuItem],
    store: &StoreConfig,
    current_hour: Option<u32>,
) -> DashboardReport {
    debug!(
        today = today.len(),
        last_week = same_day_last_week.len(),
        catalog = menu_items.len(),
        ?current_hour,
        "Assembling dashboard report"
    );

    let today_window = visible_window(today, current_hour);
    let last_week_window = visible_window(same_day_last_week, current_hour);

    let sales = transactions_totals(&today_window, store);
    let today_summary = transaction_summary(&today_window);
    let last_week_summary = transaction_summary(&last_week_window);

    let guests = total_guests(&today_window);
    let last_week_guests = total_guests(&last_week_window);

    let report = DashboardReport {
        report_date,
        sales_change: period_change(
            today_summary.total_revenue_centavos as f64,
            last_week_summary.total_revenue_centavos as f64,
        ),
        transaction_count: today_window.len(),
        transaction_count_change: period_change(
            today_window.len() as f64,
            last_week_window.len() as f64,
        ),
        guests,
        guests_change: period_change(guests as f64, last_week_guests as f64),
        channel_mix: channel_mix(&today_window),
        movement: menu_item_movement(&today_window, menu_items),
        hourly_orders: orders_per_hour(
            &today_window,
            SERVICE_DAY_START_HOUR..=SERVICE_DAY_END_HOUR,
        ),
        sales,
        today_summary,
        last_week_summary,
    };

    info!(
        date = %report.report_date,
        total_sales_centavos = report.sales.total_sales_vat_inc_centavos,
        transactions = report.transaction_count,
        guests = report.guests,
        "Dashboard report assembled"
    );

    report
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mesa_core::types::{
        DiningOption, MenuCategory, PaymentMethod, TransactionSource, TransactionStatus,
    };

    fn tx(id: &str, hour: u32, amount_centavos: i64, status: TransactionStatus) -> Transaction {
        Transaction {
            id: id.into(),
            order_ids: vec!["o1".into()],
            orders: vec![],
            dining_option: DiningOption::ForHere,
            num_pax: 2,
            amount_centavos,
            discount_id: None,
            voucher: None,
            source: Some(TransactionSource::Diner),
            payment_method: Some(PaymentMethod::Gcash),
            status,
            created_at: Utc.with_ymd_and_hms(2025, 3, 10, hour, 0, 0).unwrap(),
            payment_success_at: None,
        }
    }

    fn catalog() -> Vec<MenuItem> {
        vec![MenuItem {
            id: "sisig".into(),
            name: "Sisig".into(),
            category: MenuCategory::Food,
            price_centavos: 12500,
            has_service_charge: true,
            enabled: true,
        }]
    }

    fn store() -> StoreConfig {
        StoreConfig {
            vat_rate_bps: 1200,
            ..Default::default()
        }
    }

    #[test]
    fn test_report_compares_like_for_like() {
        let today = vec![
            tx("a", 9, 10000, TransactionStatus::Success),
            tx("b", 12, 20000, TransactionStatus::Success),
            // After the cut, invisible to the comparison
            tx("c", 19, 90000, TransactionStatus::Success),
        ];
        let last_week = vec![
            tx("d", 10, 15000, TransactionStatus::Success),
            tx("e", 20, 50000, TransactionStatus::Success),
        ];

        let report = build_dashboard_report(
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            &today,
            &last_week,
            &catalog(),
            &store(),
            Some(14),
        );

        assert_eq!(report.today_summary.total_revenue_centavos, 30000);
        assert_eq!(report.last_week_summary.total_revenue_centavos, 15000);
        assert_eq!(report.sales_change, 100.0);
        assert_eq!(report.transaction_count, 2);
        assert_eq!(report.guests, 4);
    }

    #[test]
    fn test_report_skips_unsuccessful_transactions() {
        let today = vec![
            tx("a", 9, 10000, TransactionStatus::Success),
            tx("b", 10, 99999, TransactionStatus::Failed),
            tx("c", 11, 99999, TransactionStatus::Refunded),
        ];

        let report = build_dashboard_report(
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            &today,
            &[],
            &catalog(),
            &store(),
            None,
        );

        assert_eq!(report.transaction_count, 1);
        assert_eq!(report.sales.total_sales_vat_inc_centavos, 10000);
        // Empty comparison day with sales today pins the change at 100%
        assert_eq!(report.sales_change, 100.0);
    }

    #[test]
    fn test_report_movement_covers_full_catalog() {
        let report = build_dashboard_report(
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            &[],
            &[],
            &catalog(),
            &store(),
            None,
        );

        assert_eq!(report.movement.len(), 1);
        assert_eq!(report.movement[0].unit_sold, 0);
        assert_eq!(report.sales_change, 0.0);
    }

    #[test]
    fn test_report_serializes_for_the_frontend() {
        let report = build_dashboard_report(
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            &[tx("a", 9, 10000, TransactionStatus::Success)],
            &[],
            &catalog(),
            &store(),
            None,
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["transaction_count"], 1);
        assert_eq!(json["sales"]["total_sales_vat_inc_centavos"], 10000);
        assert!(json["hourly_orders"].is_object());
    }
}
