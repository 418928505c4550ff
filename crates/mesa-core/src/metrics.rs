//! # Dashboard Metrics
//!
//! The small period-comparison and grouping computations behind the
//! dashboard cards and charts: total sales vs. the same day last week,
//! foot traffic, transaction counts, hourly activity, daily sales, and the
//! channel mix.
//!
//! Like the rest of the engine these are pure folds over already-fetched
//! snapshots: the data layer picks the date windows, the UI picks what to
//! render, and every divisor here is guarded so a quiet day produces zeros
//! instead of NaN.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::{NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Transaction, TransactionSource};

// =============================================================================
// Period Change
// =============================================================================

/// Percent change between a current and a comparison value.
///
/// ## Edge Rule
/// A zero comparison value would divide by zero; the dashboard convention
/// is 100% when something grew out of nothing and 0% when both periods are
/// empty.
///
/// ## Example
/// ```rust
/// use mesa_core::metrics::period_change;
///
/// assert_eq!(period_change(150.0, 100.0), 50.0);
/// assert_eq!(period_change(80.0, 100.0), -20.0);
/// assert_eq!(period_change(25.0, 0.0), 100.0);
/// assert_eq!(period_change(0.0, 0.0), 0.0);
/// ```
pub fn period_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        if current > 0.0 {
            100.0
        } else {
            0.0
        }
    } else {
        (current - previous) / previous * 100.0
    }
}

// =============================================================================
// Transaction Summary
// =============================================================================

/// Revenue/volume summary of one transaction set, the shape the sales
/// insight prompt consumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TransactionSummary {
    pub total_revenue_centavos: i64,
    pub total_orders: usize,

    /// Average order value, rounded to the centavo. Zero-order sets keep a
    /// divisor of one so the average is simply zero.
    pub avg_order_value_centavos: i64,
}

/// Summarizes a transaction set into revenue, count, and average order
/// value.
pub fn transaction_summary(transactions: &[Transaction]) -> TransactionSummary {
    let total_revenue_centavos: i64 = transactions.iter().map(|t| t.amount_centavos).sum();
    let total_orders = transactions.len();

    let divisor = total_orders.max(1) as i64;
    let avg_order_value_centavos = (total_revenue_centavos + divisor / 2) / divisor;

    TransactionSummary {
        total_revenue_centavos,
        total_orders,
        avg_order_value_centavos,
    }
}

// =============================================================================
// Hourly Activity
// =============================================================================

/// Guests, revenue, and transaction count within one hour of the day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HourlyActivity {
    pub guests: i64,
    pub revenue_centavos: i64,
    pub orders: usize,
}

/// Groups a transaction set by creation hour (0-23). Hours with no
/// activity are simply absent from the map.
pub fn hourly_summary(transactions: &[Transaction]) -> BTreeMap<u32, HourlyActivity> {
    let mut summary: BTreeMap<u32, HourlyActivity> = BTreeMap::new();

    for tx in transactions {
        let slot = summary.entry(tx.created_at.hour()).or_default();
        slot.guests += tx.guests();
        slot.revenue_centavos += tx.amount_centavos;
        slot.orders += 1;
    }

    summary
}

/// Counts ordered line items per hour across the given hour range, for the
/// hourly orders chart. Every hour in the range is present, zero-filled.
///
/// Uses payment-confirmation time when available, creation time otherwise.
pub fn orders_per_hour(
    transactions: &[Transaction],
    hours: RangeInclusive<u32>,
) -> BTreeMap<u32, usize> {
    let mut histogram: BTreeMap<u32, usize> =
        hours.clone().map(|hour| (hour, 0)).collect();

    for tx in transactions {
        let hour = tx.event_time().hour();
        if let Some(count) = histogram.get_mut(&hour) {
            *count += tx.order_ids.len();
        }
    }

    histogram
}

// =============================================================================
// Daily Sales
// =============================================================================

/// Groups stored amounts by calendar day, for the weekly bar chart.
pub fn sales_by_date(transactions: &[Transaction]) -> BTreeMap<NaiveDate, i64> {
    let mut sales: BTreeMap<NaiveDate, i64> = BTreeMap::new();

    for tx in transactions {
        *sales.entry(tx.created_at.date_naive()).or_insert(0) += tx.amount_centavos;
    }

    sales
}

// =============================================================================
// Foot Traffic
// =============================================================================

/// Total guests across a transaction set, counting at least one guest per
/// transaction even when the record carries no headcount.
pub fn total_guests(transactions: &[Transaction]) -> i64 {
    transactions.iter().map(|t| t.guests()).sum()
}

/// Restricts a set to transactions created at or before the given hour of
/// day: the like-for-like device every overview card uses to compare
/// today against the same day last week at the same point in service.
pub fn up_to_hour(transactions: &[Transaction], hour: u32) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|t| t.created_at.hour() <= hour)
        .collect()
}

// =============================================================================
// Channel Mix
// =============================================================================

/// Revenue and volume for one ordering channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChannelSlice {
    pub revenue_centavos: i64,
    pub count: usize,

    /// Share of total revenue, 0-100. Zero when the set is empty.
    pub share_of_revenue: f64,
}

/// How revenue splits across the three ordering channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChannelMix {
    pub diner: ChannelSlice,
    pub kiosk: ChannelSlice,
    pub counter: ChannelSlice,
    pub total_revenue_centavos: i64,
    pub transaction_count: usize,
}

impl ChannelMix {
    /// The channel with the highest revenue. Ties keep the earlier channel
    /// in diner → kiosk → counter order.
    pub fn top_channel(&self) -> TransactionSource {
        let mut top = (TransactionSource::Diner, self.diner.revenue_centavos);
        for (source, revenue) in [
            (TransactionSource::Kiosk, self.kiosk.revenue_centavos),
            (TransactionSource::Service, self.counter.revenue_centavos),
        ] {
            if revenue > top.1 {
                top = (source, revenue);
            }
        }
        top.0
    }
}

/// Splits a transaction set across the ordering channels. Legacy records
/// without a source count as counter, consistent with the rollup.
pub fn channel_mix(transactions: &[Transaction]) -> ChannelMix {
    let mut mix = ChannelMix {
        transaction_count: transactions.len(),
        ..Default::default()
    };

    for tx in transactions {
        let slice = match tx.source {
            Some(TransactionSource::Diner) => &mut mix.diner,
            Some(TransactionSource::Kiosk) => &mut mix.kiosk,
            Some(TransactionSource::Service) | None => &mut mix.counter,
        };
        slice.revenue_centavos += tx.amount_centavos;
        slice.count += 1;
        mix.total_revenue_centavos += tx.amount_centavos;
    }

    if mix.total_revenue_centavos > 0 {
        let total = mix.total_revenue_centavos as f64;
        mix.diner.share_of_revenue = mix.diner.revenue_centavos as f64 / total * 100.0;
        mix.kiosk.share_of_revenue = mix.kiosk.revenue_centavos as f64 / total * 100.0;
        mix.counter.share_of_revenue = mix.counter.revenue_centavos as f64 / total * 100.0;
    }

    mix
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DiningOption, PaymentMethod, TransactionStatus};
    use chrono::{TimeZone, Utc};

    fn tx_at(id: &str, hour: u32, amount_centavos: i64, num_pax: i64) -> Transaction {
        Transaction {
            id: id.into(),
            order_ids: vec!["o1".into(), "o2".into()],
            orders: vec![],
            dining_option: DiningOption::ForHere,
            num_pax,
            amount_centavos,
            discount_id: None,
            voucher: None,
            source: Some(TransactionSource::Diner),
            payment_method: Some(PaymentMethod::Cash),
            status: TransactionStatus::Success,
            created_at: Utc.with_ymd_and_hms(2025, 3, 10, hour, 15, 0).unwrap(),
            payment_success_at: None,
        }
    }

    #[test]
    fn test_period_change_edges() {
        assert_eq!(period_change(150.0, 100.0), 50.0);
        assert_eq!(period_change(50.0, 100.0), -50.0);
        // Growth out of an empty comparison period pins to 100
        assert_eq!(period_change(10.0, 0.0), 100.0);
        assert_eq!(period_change(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_transaction_summary() {
        let transactions = vec![
            tx_at("a", 11, 10000, 2),
            tx_at("b", 12, 15000, 3),
            tx_at("c", 13, 5001, 1),
        ];

        let summary = transaction_summary(&transactions);

        assert_eq!(summary.total_revenue_centavos, 30001);
        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.avg_order_value_centavos, 10000); // 10000.33 rounds down
    }

    #[test]
    fn test_transaction_summary_empty_set_has_zero_average() {
        let summary = transaction_summary(&[]);
        assert_eq!(summary.avg_order_value_centavos, 0);
        assert_eq!(summary.total_orders, 0);
    }

    #[test]
    fn test_hourly_summary_groups_and_floors_guests() {
        let transactions = vec![
            tx_at("a", 11, 10000, 2),
            tx_at("b", 11, 5000, 0), // headcount missing → one guest
            tx_at("c", 18, 20000, 4),
        ];

        let summary = hourly_summary(&transactions);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[&11].guests, 3);
        assert_eq!(summary[&11].revenue_centavos, 15000);
        assert_eq!(summary[&11].orders, 2);
        assert_eq!(summary[&18].guests, 4);
    }

    #[test]
    fn test_orders_per_hour_zero_fills_range() {
        let transactions = vec![tx_at("a", 12, 10000, 2)];

        let histogram = orders_per_hour(&transactions, 6..=20);

        assert_eq!(histogram.len(), 15);
        assert_eq!(histogram[&12], 2); // two order ids on the transaction
        assert_eq!(histogram[&6], 0);
        // Activity outside the charted range is dropped, not panicked on
        let early = vec![tx_at("b", 3, 10000, 1)];
        let histogram = orders_per_hour(&early, 6..=20);
        assert!(histogram.values().all(|&count| count == 0));
    }

    #[test]
    fn test_orders_per_hour_prefers_payment_time() {
        let mut transaction = tx_at("a", 9, 10000, 2);
        transaction.payment_success_at =
            Some(Utc.with_ymd_and_hms(2025, 3, 10, 10, 5, 0).unwrap());

        let histogram = orders_per_hour(&[transaction], 6..=20);

        assert_eq!(histogram[&10], 2);
        assert_eq!(histogram[&9], 0);
    }

    #[test]
    fn test_sales_by_date() {
        let mut day_two = tx_at("c", 12, 20000, 2);
        day_two.created_at = Utc.with_ymd_and_hms(2025, 3, 11, 12, 0, 0).unwrap();

        let transactions = vec![tx_at("a", 10, 10000, 2), tx_at("b", 14, 5000, 1), day_two];
        let sales = sales_by_date(&transactions);

        let march_10 = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let march_11 = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
        assert_eq!(sales[&march_10], 15000);
        assert_eq!(sales[&march_11], 20000);
    }

    #[test]
    fn test_total_guests_floor() {
        let transactions = vec![tx_at("a", 10, 10000, 4), tx_at("b", 11, 5000, 0)];
        assert_eq!(total_guests(&transactions), 5);
    }

    #[test]
    fn test_up_to_hour() {
        let transactions = vec![
            tx_at("a", 9, 10000, 2),
            tx_at("b", 13, 5000, 1),
            tx_at("c", 19, 20000, 4),
        ];

        let morning = up_to_hour(&transactions, 13);
        assert_eq!(morning.len(), 2);
    }

    #[test]
    fn test_channel_mix_shares_and_top() {
        let mut kiosk_tx = tx_at("b", 12, 30000, 1);
        kiosk_tx.source = Some(TransactionSource::Kiosk);
        let mut legacy_tx = tx_at("c", 13, 10000, 1);
        legacy_tx.source = None;

        let transactions = vec![tx_at("a", 11, 10000, 2), kiosk_tx, legacy_tx];
        let mix = channel_mix(&transactions);

        assert_eq!(mix.total_revenue_centavos, 50000);
        assert_eq!(mix.diner.revenue_centavos, 10000);
        assert_eq!(mix.kiosk.revenue_centavos, 30000);
        assert_eq!(mix.counter.revenue_centavos, 10000); // legacy sourceless
        assert_eq!(mix.top_channel(), TransactionSource::Kiosk);

        let share_sum =
            mix.diner.share_of_revenue + mix.kiosk.share_of_revenue + mix.counter.share_of_revenue;
        assert!((share_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_channel_mix_empty_set() {
        let mix = channel_mix(&[]);
        assert_eq!(mix.total_revenue_centavos, 0);
        assert_eq!(mix.diner.share_of_revenue, 0.0);
        // Ties (all zero) keep the diner-first convention
        assert_eq!(mix.top_channel(), TransactionSource::Diner);
    }
}
