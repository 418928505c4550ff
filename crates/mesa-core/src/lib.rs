//! # mesa-core: Pure Aggregation Engine for the Mesa Dashboard
//!
//! This crate is the **heart** of Mesa. It turns raw transaction, order,
//! and catalog snapshots into the financial and merchandising metrics the
//! dashboard renders, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Mesa Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Mobile Frontend (TypeScript)                    │   │
//! │  │    Dashboard ──► Sales/Orders/Traffic screens ──► AI Insights  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Data Layer (external collaborator)                 │   │
//! │  │    Document DB snapshots: Transaction[], Order[], MenuItem[]   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ mesa-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  totals   │  │  rollup   │  │   │
//! │  │   │  records  │  │ centavos  │  │ checkout  │  │ channels  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │ movement  │  │  metrics  │  │ validation│                  │   │
//! │  │   │ per item  │  │  cards    │  │  boundary │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    mesa-insights (level 1)                      │   │
//! │  │         Dashboard reports and AI insight prompt text            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (Transaction, Order, MenuItem, StoreConfig)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`totals`] - Itemized checkout breakdown for one transaction
//! - [`rollup`] - Store-wide sales rollups by channel and payment method
//! - [`movement`] - Per-menu-item movement statistics
//! - [`metrics`] - Dashboard card metrics (period change, traffic, hourly)
//! - [`validation`] - Opt-in boundary validation
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in centavos (i64) to avoid float errors
//! 4. **Never Fail**: Malformed numerics coerce to zero; divisors are guarded;
//!    aggregation never panics and never produces NaN
//!
//! ## Example Usage
//!
//! ```rust
//! use mesa_core::totals::order_totals;
//! use mesa_core::types::{DiningOption, StoreConfig};
//!
//! let store = StoreConfig {
//!     vat_rate_bps: 1200, // 12% VAT, amounts stored gross
//!     ..Default::default()
//! };
//!
//! // Safe to call on every snapshot the data layer delivers
//! let totals = order_totals(&[], DiningOption::ForHere, &store, None, None);
//! assert_eq!(totals.total_amount_centavos, 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod metrics;
pub mod money;
pub mod movement;
pub mod rollup;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use mesa_core::Money` instead of
// `use mesa_core::money::Money`

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use totals::{order_totals, OrderTotals};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Upper bound for any percentage rate: 10000 bps = 100%.
///
/// ## Business Reason
/// No VAT, service-charge, discount, or voucher rate can exceed the full
/// amount; anything above this is corrupt configuration.
pub const MAX_RATE_BPS: u32 = 10_000;

/// First hour of the charted service day (6 AM).
///
/// ## Business Reason
/// The hourly orders chart plots the store's open hours, not the empty
/// overnight stretch.
pub const SERVICE_DAY_START_HOUR: u32 = 6;

/// Last hour of the charted service day (8 PM, inclusive).
pub const SERVICE_DAY_END_HOUR: u32 = 20;
