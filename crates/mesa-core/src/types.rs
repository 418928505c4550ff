//! # Domain Types
//!
//! Core domain types consumed by the Mesa aggregation engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Transaction   │   │      Order      │   │    MenuItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  amount (gross) │──►│  menu / add_on  │──►│  price_centavos │       │
//! │  │  status, source │   │  options, qty   │   │  category       │       │
//! │  │  dining_option  │   │  add_ons        │   │  has_svc_charge │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   StoreConfig   │   │    Discount     │   │      Rate       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  vat_rate_bps   │   │  rate_bps       │   │  bps (u32)      │       │
//! │  │  togo_charge    │   │  is_special     │   │  1200 = 12%     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All records arrive from the external data layer as plain structs; the
//! engine never mutates them and never writes anything back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

fn default_true() -> bool {
    true
}

// =============================================================================
// Rate
// =============================================================================

/// A percentage rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1200 bps = 12% (Philippine VAT)
///
/// One type covers all four rates the engine sees: VAT, service charge,
/// discount, and voucher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Creates a rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        Rate((pct * 100.0).round() as u32)
    }

    /// Parses a string-encoded percentage ("12", "10.5"), mapping malformed
    /// or negative input to zero. The document database stores every rate as
    /// a string; this is the single conversion point.
    pub fn parse_lenient(raw: &str) -> Self {
        let cleaned = raw.trim().replace(',', "");
        match cleaned.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => Rate::from_percentage(value),
            _ => Rate::zero(),
        }
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// Menu Category
// =============================================================================

/// Category of a sellable item.
///
/// Drives the gross partition in the totals calculator and the
/// service-charge eligibility rule (beverages never carry service charge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuCategory {
    Food,
    Beverage,
    AddOns,
}

// =============================================================================
// Dining Option
// =============================================================================

/// How the guest takes the order.
///
/// To-go substitutes a flat packaging fee for the percentage service charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiningOption {
    ForHere,
    ToGo,
}

impl Default for DiningOption {
    fn default() -> Self {
        DiningOption::ForHere
    }
}

// =============================================================================
// Transaction Status
// =============================================================================

/// The status of a checkout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// Payment initiated, not yet confirmed.
    Pending,
    /// Paid and finalized. Only these count toward sales.
    Success,
    /// Payment declined or errored.
    Failed,
    /// Abandoned before payment.
    Cancelled,
    /// Paid, then refunded.
    Refunded,
}

impl Default for TransactionStatus {
    fn default() -> Self {
        TransactionStatus::Pending
    }
}

// =============================================================================
// Transaction Source (Channel)
// =============================================================================

/// The ordering channel a transaction came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionSource {
    /// Table QR ordering by the guest.
    Diner,
    /// Self-ordering kiosk.
    Kiosk,
    /// Staff-operated counter. Legacy records omit the field entirely and
    /// are treated as this channel.
    Service,
}

impl TransactionSource {
    /// Guest-facing channel label used on dashboard cards and in prompts.
    pub const fn label(&self) -> &'static str {
        match self {
            TransactionSource::Diner => "Table QR",
            TransactionSource::Kiosk => "Self-Ordering",
            TransactionSource::Service => "Counter",
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Gcash,
    Maya,
    CreditCard,
    DebitCard,
    QrPh,
    Cash,
}

/// Display matches the stored wire form ("QR_PH", "CREDIT_CARD", ...);
/// the rollup uses it as the diner breakdown map key.
impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentMethod::Gcash => "GCASH",
            PaymentMethod::Maya => "MAYA",
            PaymentMethod::CreditCard => "CREDIT_CARD",
            PaymentMethod::DebitCard => "DEBIT_CARD",
            PaymentMethod::QrPh => "QR_PH",
            PaymentMethod::Cash => "CASH",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A sellable product from the store catalog.
///
/// `id` is the immutable aggregation key for movement statistics.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItem {
    /// Document id (immutable identity).
    pub id: String,

    /// Display name shown on dashboards and receipts.
    pub name: String,

    /// Category, drives bucket partition and service-charge eligibility.
    pub category: MenuCategory,

    /// Price in centavos, VAT-inclusive, parsed once at the data boundary.
    pub price_centavos: i64,

    /// Whether this item carries the service charge. Missing in old
    /// documents; only an explicit `false` opts out.
    #[serde(default = "default_true")]
    pub has_service_charge: bool,

    /// Whether the item is currently sellable (soft delete).
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl MenuItem {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_centavos(self.price_centavos)
    }
}

// =============================================================================
// Add-On
// =============================================================================

/// An add-on: either attached to a menu order or sold standalone.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AddOn {
    pub id: String,
    pub name: String,

    /// Price in centavos, VAT-inclusive.
    pub price_centavos: i64,

    /// Only an explicit `false` opts out of the service charge.
    #[serde(default = "default_true")]
    pub has_service_charge: bool,
}

impl AddOn {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_centavos(self.price_centavos)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A selected option on an order line (size, sugar level, ...).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderOption {
    pub selection_name: String,

    /// Price delta for this selection, in centavos.
    pub selection_price_centavos: i64,
}

/// One line item within a transaction: a menu item or a standalone add-on,
/// with quantity, selected options, and attached add-ons.
///
/// Orders belong to exactly one transaction and only exist as long as their
/// parent transaction record does.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    #[serde(default)]
    pub id: String,

    /// Menu item reference (movement aggregation key).
    pub menu_id: Option<String>,

    /// Resolved menu item snapshot, when the data layer joined it.
    pub menu: Option<MenuItem>,

    /// Standalone add-on reference.
    pub add_on_id: Option<String>,

    /// Resolved standalone add-on.
    pub add_on: Option<AddOn>,

    /// Selected options on this line.
    #[serde(default)]
    pub options: Vec<OrderOption>,

    /// Add-ons attached to a menu line.
    #[serde(default)]
    pub add_ons: Vec<AddOn>,

    /// Quantity ordered.
    pub qty: i64,
}

// =============================================================================
// Discount & Voucher
// =============================================================================

/// A named percentage discount configured on the store.
///
/// A transaction references at most one discount by id.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Discount {
    pub id: String,

    /// Discount name ("SENIOR", "PWD", ...).
    pub name: String,

    /// Reduction rate in basis points.
    pub rate_bps: u32,

    /// Special discounts exempt the transaction from VAT entirely instead
    /// of merely reducing the subtotal.
    #[serde(default)]
    pub is_special: bool,
}

impl Discount {
    /// Returns the reduction rate.
    #[inline]
    pub fn rate(&self) -> Rate {
        Rate::from_bps(self.rate_bps)
    }
}

/// A loyalty voucher: an independent percentage reduction applied against
/// the same base as a discount, never compounded with it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Voucher {
    pub code: String,

    /// Reduction rate in basis points.
    pub rate_bps: u32,
}

impl Voucher {
    /// Returns the reduction rate.
    #[inline]
    pub fn rate(&self) -> Rate {
        Rate::from_bps(self.rate_bps)
    }
}

// =============================================================================
// Store Configuration
// =============================================================================

/// Tenant configuration the engine reads and never mutates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoreConfig {
    /// VAT rate in basis points (1200 = 12%). Stored amounts are gross.
    pub vat_rate_bps: u32,

    /// Whether the store levies a service charge at all.
    pub service_charge: bool,

    /// Service charge rate in basis points.
    pub service_charge_rate_bps: u32,

    /// Flat to-go packaging fee in centavos.
    pub togo_charge_centavos: i64,

    /// Discounts configured for this store, looked up by transaction
    /// `discount_id`.
    #[serde(default)]
    pub discounts: Vec<Discount>,
}

impl StoreConfig {
    /// Returns the VAT rate.
    #[inline]
    pub fn vat_rate(&self) -> Rate {
        Rate::from_bps(self.vat_rate_bps)
    }

    /// Returns the service charge rate.
    #[inline]
    pub fn service_charge_rate(&self) -> Rate {
        Rate::from_bps(self.service_charge_rate_bps)
    }

    /// Returns the flat to-go fee.
    #[inline]
    pub fn togo_charge(&self) -> Money {
        Money::from_centavos(self.togo_charge_centavos)
    }

    /// Looks up a configured discount by id.
    pub fn discount_by_id(&self, id: &str) -> Option<&Discount> {
        self.discounts.iter().find(|d| d.id == id)
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// One completed or attempted checkout.
///
/// ## Invariant
/// `amount_centavos` is the VAT-inclusive total after discount and
/// service/to-go charges, exactly as stored. The engine never recomputes it
/// from orders except for verification or display breakdowns.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Transaction {
    pub id: String,

    /// Constituent order document ids.
    #[serde(default)]
    pub order_ids: Vec<String>,

    /// Resolved orders, when the data layer joined them. Empty when the
    /// caller only needs amount-level rollups.
    #[serde(default)]
    pub orders: Vec<Order>,

    #[serde(default)]
    pub dining_option: DiningOption,

    /// Guests seated for this transaction. Zero or missing counts as one
    /// guest in foot-traffic metrics.
    #[serde(default)]
    pub num_pax: i64,

    /// VAT-inclusive total in centavos, as stored.
    pub amount_centavos: i64,

    /// Applied store discount, if any.
    pub discount_id: Option<String>,

    /// Applied loyalty voucher, if any.
    pub voucher: Option<Voucher>,

    /// Ordering channel. Legacy counter records omit this field.
    pub source: Option<TransactionSource>,

    /// Payment method. Missing on some legacy records.
    pub payment_method: Option<PaymentMethod>,

    #[serde(default)]
    pub status: TransactionStatus,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When payment was confirmed. Preferred over `created_at` for hourly
    /// charts when present.
    #[ts(as = "Option<String>")]
    pub payment_success_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Returns the stored VAT-inclusive total as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_centavos(self.amount_centavos)
    }

    /// Guests counted for foot traffic: at least one per transaction even
    /// when the record carries no headcount.
    #[inline]
    pub fn guests(&self) -> i64 {
        if self.num_pax > 0 {
            self.num_pax
        } else {
            1
        }
    }

    /// Timestamp used for time-bucketed charts: payment confirmation when
    /// available, creation time otherwise.
    #[inline]
    pub fn event_time(&self) -> DateTime<Utc> {
        self.payment_success_at.unwrap_or(self.created_at)
    }

    /// Whether this checkout counts toward sales.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status == TransactionStatus::Success
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rate_from_bps() {
        let rate = Rate::from_bps(1200);
        assert_eq!(rate.bps(), 1200);
        assert!((rate.percentage() - 12.0).abs() < 0.001);
    }

    #[test]
    fn test_rate_from_percentage() {
        let rate = Rate::from_percentage(12.0);
        assert_eq!(rate.bps(), 1200);
    }

    #[test]
    fn test_rate_parse_lenient() {
        assert_eq!(Rate::parse_lenient("12").bps(), 1200);
        assert_eq!(Rate::parse_lenient("10.5").bps(), 1050);
        assert_eq!(Rate::parse_lenient("").bps(), 0);
        assert_eq!(Rate::parse_lenient("-5").bps(), 0);
        assert_eq!(Rate::parse_lenient("junk").bps(), 0);
    }

    #[test]
    fn test_enum_wire_names() {
        // The stored documents use SCREAMING_SNAKE_CASE values
        assert_eq!(
            serde_json::to_value(PaymentMethod::QrPh).unwrap(),
            serde_json::json!("QR_PH")
        );
        assert_eq!(
            serde_json::to_value(MenuCategory::AddOns).unwrap(),
            serde_json::json!("ADD_ONS")
        );
        assert_eq!(
            serde_json::to_value(DiningOption::ForHere).unwrap(),
            serde_json::json!("FOR_HERE")
        );
        assert_eq!(
            serde_json::to_value(TransactionStatus::Success).unwrap(),
            serde_json::json!("SUCCESS")
        );
    }

    #[test]
    fn test_payment_method_display_matches_wire_form() {
        assert_eq!(PaymentMethod::QrPh.to_string(), "QR_PH");
        assert_eq!(PaymentMethod::CreditCard.to_string(), "CREDIT_CARD");
        assert_eq!(PaymentMethod::Cash.to_string(), "CASH");
    }

    #[test]
    fn test_discount_lookup() {
        let store = StoreConfig {
            vat_rate_bps: 1200,
            discounts: vec![Discount {
                id: "senior".into(),
                name: "SENIOR".into(),
                rate_bps: 2000,
                is_special: true,
            }],
            ..Default::default()
        };

        assert!(store.discount_by_id("senior").is_some());
        assert!(store.discount_by_id("missing").is_none());
    }

    #[test]
    fn test_transaction_guests_floor() {
        let mut tx = sample_transaction();
        tx.num_pax = 4;
        assert_eq!(tx.guests(), 4);
        tx.num_pax = 0;
        assert_eq!(tx.guests(), 1);
    }

    #[test]
    fn test_transaction_event_time_prefers_payment_success() {
        let mut tx = sample_transaction();
        assert_eq!(tx.event_time(), tx.created_at);

        let paid = Utc.with_ymd_and_hms(2025, 3, 10, 12, 30, 0).unwrap();
        tx.payment_success_at = Some(paid);
        assert_eq!(tx.event_time(), paid);
    }

    fn sample_transaction() -> Transaction {
        Transaction {
            id: "tx-1".into(),
            order_ids: vec![],
            orders: vec![],
            dining_option: DiningOption::ForHere,
            num_pax: 0,
            amount_centavos: 25000,
            discount_id: None,
            voucher: None,
            source: Some(TransactionSource::Diner),
            payment_method: Some(PaymentMethod::Cash),
            status: TransactionStatus::Success,
            created_at: Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap(),
            payment_success_at: None,
        }
    }
}
