//! # Transaction Rollup
//!
//! Store-wide sales summaries over a fetched set of transactions, broken
//! down by ordering channel and payment method.
//!
//! ## Channel / Payment Matrix
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Rollup Buckets                                        │
//! │                                                                         │
//! │  source=DINER ──────────► diner_sales + diner map (keyed by method)     │
//! │                                                                         │
//! │  source=KIOSK ──────────► kiosk.{credit_card, debit_card, qrph}         │
//! │                                                                         │
//! │  source=SERVICE ────────► counter.{cash, credit_card, debit_card, qrph} │
//! │  source missing ────────► counter as well (legacy records predate the   │
//! │                           field and were all rung up at the counter)    │
//! │                                                                         │
//! │  terminal_sales = KIOSK/SERVICE with a card                             │
//! │  qrph_sales     = KIOSK/SERVICE paying via QR PH                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is additive over successful transactions only, so the
//! result is deterministic for a fixed input set regardless of ordering.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::totals::order_totals;
use crate::types::{PaymentMethod, StoreConfig, Transaction, TransactionSource};

// =============================================================================
// Breakdown Types
// =============================================================================

/// Payment-method breakdown for the self-ordering kiosk channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct KioskSales {
    pub credit_card_centavos: i64,
    pub debit_card_centavos: i64,
    pub qrph_centavos: i64,
}

/// Payment-method breakdown for the staff counter channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CounterSales {
    pub cash_centavos: i64,
    pub credit_card_centavos: i64,
    pub debit_card_centavos: i64,
    pub qrph_centavos: i64,
    /// Delivery-platform slot kept for dashboard layout compatibility;
    /// no such transactions are recorded yet.
    pub grab_food_centavos: i64,
}

/// Store-wide sales summary over one fetched transaction set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TransactionsTotals {
    /// How many transactions in the set actually count (status SUCCESS).
    pub success_count: usize,

    /// Sum of stored VAT-inclusive amounts.
    pub total_sales_vat_inc_centavos: i64,

    /// Sum of per-transaction subtotals recomputed from orders via the
    /// totals calculator (VAT backed out, store discount resolved by id).
    pub total_sales_vat_ex_centavos: i64,

    /// Table-QR channel total.
    pub diner_sales_centavos: i64,

    /// Card payments taken on the physical terminal (kiosk or counter).
    pub terminal_sales_centavos: i64,

    /// QR PH payments taken at kiosk or counter.
    pub qrph_sales_centavos: i64,

    /// Diner channel amounts keyed by payment-method wire name; records
    /// with no method land under "UNKNOWN".
    pub diner: BTreeMap<String, i64>,

    pub kiosk: KioskSales,
    pub counter: CounterSales,
}

// =============================================================================
// Rollup Calculation
// =============================================================================

/// Filters a fetched set down to the transactions that count toward sales.
pub fn successful(transactions: &[Transaction]) -> Vec<&Transaction> {
    transactions.iter().filter(|t| t.is_success()).collect()
}

/// Rolls a fetched transaction set up into store-wide sales summaries.
///
/// Additive and order-independent: permuting the input array never changes
/// the result.
pub fn transactions_totals(transactions: &[Transaction], store: &StoreConfig) -> TransactionsTotals {
    let success = successful(transactions);

    let mut totals = TransactionsTotals {
        success_count: success.len(),
        ..Default::default()
    };

    for tx in success {
        let amount = tx.amount_centavos;
        totals.total_sales_vat_inc_centavos += amount;

        let discount = tx
            .discount_id
            .as_deref()
            .and_then(|id| store.discount_by_id(id));
        let breakdown = order_totals(
            &tx.orders,
            tx.dining_option,
            store,
            discount,
            tx.voucher.as_ref(),
        );
        totals.total_sales_vat_ex_centavos += breakdown.subtotal_centavos;

        // Channel-level sums. Terminal and QR PH require an explicit
        // kiosk/counter source; legacy sourceless records only surface in
        // the counter breakdown below.
        match tx.source {
            Some(TransactionSource::Diner) => {
                totals.diner_sales_centavos += amount;
                let key = tx
                    .payment_method
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "UNKNOWN".to_string());
                *totals.diner.entry(key).or_insert(0) += amount;
            }
            Some(TransactionSource::Kiosk) | Some(TransactionSource::Service) => {
                match tx.payment_method {
                    Some(PaymentMethod::CreditCard) | Some(PaymentMethod::DebitCard) => {
                        totals.terminal_sales_centavos += amount;
                    }
                    Some(PaymentMethod::QrPh) => {
                        totals.qrph_sales_centavos += amount;
                    }
                    _ => {}
                }
            }
            None => {}
        }

        // Per-method breakdowns for the two staff-side channels.
        if tx.source == Some(TransactionSource::Kiosk) {
            match tx.payment_method {
                Some(PaymentMethod::CreditCard) => totals.kiosk.credit_card_centavos += amount,
                Some(PaymentMethod::DebitCard) => totals.kiosk.debit_card_centavos += amount,
                Some(PaymentMethod::QrPh) => totals.kiosk.qrph_centavos += amount,
                _ => {}
            }
        }

        if matches!(tx.source, Some(TransactionSource::Service) | None) {
            match tx.payment_method {
                Some(PaymentMethod::Cash) => totals.counter.cash_centavos += amount,
                Some(PaymentMethod::CreditCard) => totals.counter.credit_card_centavos += amount,
                Some(PaymentMethod::DebitCard) => totals.counter.debit_card_centavos += amount,
                Some(PaymentMethod::QrPh) => totals.counter.qrph_centavos += amount,
                _ => {}
            }
        }
    }

    totals
}

// =============================================================================
// Unit Tests
// =============================================================================
