//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The upstream document database stores prices as strings and the        │
//! │  legacy client re-coerced them with Number() on every pass.             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    Parse once at the data-source boundary, then all arithmetic is       │
//! │    exact. "Round to 2 decimal places" becomes "round to the centavo",   │
//! │    which keeps displayed totals identical step for step.                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mesa_core::money::Money;
//!
//! // Create from centavos (preferred)
//! let price = Money::from_centavos(14950); // ₱149.50
//!
//! // Parse a string-encoded price exactly once, at the boundary
//! let parsed = Money::parse_lenient("1,250.00");
//! assert_eq!(parsed.centavos(), 125000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::Rate;

/// Scale of a [`Rate`]: 10000 basis points = 100%.
const BPS_SCALE: i128 = 10_000;

/// Divides with round-half-up, widened through i128 to prevent overflow.
///
/// All engine amounts are non-negative, which keeps half-up rounding
/// equivalent to the 2-decimal rounding the stored totals were produced
/// with.
#[inline]
fn div_round(numerator: i128, denominator: i128) -> i64 {
    ((numerator + denominator / 2) / denominator) as i64
}

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in centavos (the smallest peso unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and deltas
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  MenuItem.price_centavos ──► line gross ──► category buckets            │
/// │                                                                         │
/// │  gross ──► less_vat() ──► subtotal ──► discount/service charge ──►      │
/// │  OrderTotals.total_amount ──► rollups ──► dashboard cards               │
/// │                                                                         │
/// │  EVERY monetary value in the engine flows through this type             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    ///
    /// ## Example
    /// ```rust
    /// use mesa_core::money::Money;
    ///
    /// let price = Money::from_centavos(14950); // ₱149.50
    /// assert_eq!(price.centavos(), 14950);
    /// ```
    #[inline]
    pub const fn from_centavos(centavos: i64) -> Self {
        Money(centavos)
    }

    /// Parses a string-encoded decimal amount, tolerating the formats the
    /// document database actually contains.
    ///
    /// ## Rules
    /// - Thousands separators (commas) are stripped
    /// - Whitespace is trimmed
    /// - Anything that still fails to parse becomes zero; the engine never
    ///   lets a malformed record poison a sum
    ///
    /// ## Example
    /// ```rust
    /// use mesa_core::money::Money;
    ///
    /// assert_eq!(Money::parse_lenient("149.50").centavos(), 14950);
    /// assert_eq!(Money::parse_lenient("1,250").centavos(), 125000);
    /// assert_eq!(Money::parse_lenient("").centavos(), 0);
    /// assert_eq!(Money::parse_lenient("n/a").centavos(), 0);
    /// ```
    pub fn parse_lenient(raw: &str) -> Self {
        let cleaned = raw.trim().replace(',', "");
        match cleaned.parse::<f64>() {
            Ok(value) if value.is_finite() => Money((value * 100.0).round() as i64),
            _ => Money::zero(),
        }
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn centavos(&self) -> i64 {
        self.0
    }

    /// Returns the whole-peso portion.
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavo portion (always 0-99).
    #[inline]
    pub const fn centavos_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value in pesos as a float.
    ///
    /// For ratio math (percentage-of-sales, period change) and prompt text
    /// only. Never feed this back into engine arithmetic.
    #[inline]
    pub fn as_pesos_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Backs VAT out of a VAT-inclusive amount.
    ///
    /// Stored transaction amounts and menu prices are gross (VAT included).
    /// The subtotal shown on receipts is `gross / (1 + rate)`, rounded to
    /// the centavo at this step, matching the totals customers have
    /// already been shown.
    ///
    /// ## Example
    /// ```rust
    /// use mesa_core::money::Money;
    /// use mesa_core::types::Rate;
    ///
    /// let gross = Money::from_centavos(25000); // ₱250.00
    /// let subtotal = gross.less_vat(Rate::from_bps(1200)); // 12% VAT
    /// assert_eq!(subtotal.centavos(), 22321); // ₱223.21
    /// ```
    pub fn less_vat(&self, rate: Rate) -> Money {
        // gross * 10000 / (10000 + bps), round half up
        let denominator = BPS_SCALE + rate.bps() as i128;
        Money(div_round(self.0 as i128 * BPS_SCALE, denominator))
    }

    /// Multiplies by a percentage rate, rounding to the centavo.
    ///
    /// Used for discount amounts and the service-charge percentage.
    ///
    /// ## Example
    /// ```rust
    /// use mesa_core::money::Money;
    /// use mesa_core::types::Rate;
    ///
    /// let subtotal = Money::from_centavos(17857);
    /// let charge = subtotal.apply_rate(Rate::from_bps(1000)); // 10%
    /// assert_eq!(charge.centavos(), 1786); // ₱17.86
    /// ```
    pub fn apply_rate(&self, rate: Rate) -> Money {
        Money(div_round(self.0 as i128 * rate.bps() as i128, BPS_SCALE))
    }

    /// Subtracts a percentage rate's effect and returns the remainder.
    ///
    /// ## Example
    /// ```rust
    /// use mesa_core::money::Money;
    /// use mesa_core::types::Rate;
    ///
    /// let subtotal = Money::from_centavos(10000); // ₱100.00
    /// let net = subtotal.less_rate(Rate::from_bps(2000)); // 20% off
    /// assert_eq!(net.centavos(), 8000); // ₱80.00
    /// ```
    pub fn less_rate(&self, rate: Rate) -> Money {
        *self - self.apply_rate(rate)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use mesa_core::money::Money;
    ///
    /// let unit_price = Money::from_centavos(10000); // ₱100.00
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.centavos(), 20000); // ₱200.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Prompt text uses the insight layer's peso
/// formatting; UI display belongs to the frontend.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₱{}.{:02}", sign, self.pesos().abs(), self.centavos_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over iterators of Money (rollups fold many amounts).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_centavos() {
        let money = Money::from_centavos(14950);
        assert_eq!(money.centavos(), 14950);
        assert_eq!(money.pesos(), 149);
        assert_eq!(money.centavos_part(), 50);
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(Money::parse_lenient("149.50").centavos(), 14950);
        assert_eq!(Money::parse_lenient(" 1,250.00 ").centavos(), 125000);
        assert_eq!(Money::parse_lenient("60").centavos(), 6000);
        // Malformed input coerces to zero, never an error
        assert_eq!(Money::parse_lenient("").centavos(), 0);
        assert_eq!(Money::parse_lenient("abc").centavos(), 0);
        assert_eq!(Money::parse_lenient("NaN").centavos(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_centavos(14950)), "₱149.50");
        assert_eq!(format!("{}", Money::from_centavos(500)), "₱5.00");
        assert_eq!(format!("{}", Money::from_centavos(-550)), "-₱5.50");
        assert_eq!(format!("{}", Money::from_centavos(0)), "₱0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_centavos(1000);
        let b = Money::from_centavos(500);

        assert_eq!((a + b).centavos(), 1500);
        assert_eq!((a - b).centavos(), 500);
        let result: Money = a * 3;
        assert_eq!(result.centavos(), 3000);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_centavos(100),
            Money::from_centavos(250),
            Money::from_centavos(650),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.centavos(), 1000);
    }

    #[test]
    fn test_less_vat_basic() {
        // ₱250.00 gross at 12% VAT → ₱223.21 subtotal
        let gross = Money::from_centavos(25000);
        let subtotal = gross.less_vat(Rate::from_bps(1200));
        assert_eq!(subtotal.centavos(), 22321);
        // VAT portion reconstructs the gross
        assert_eq!((gross - subtotal).centavos(), 2679);
    }

    #[test]
    fn test_less_vat_zero_rate() {
        // Zero VAT: subtotal equals the gross
        let gross = Money::from_centavos(25000);
        assert_eq!(gross.less_vat(Rate::zero()), gross);
    }

    #[test]
    fn test_apply_rate_with_rounding() {
        // ₱178.57 at 10% = ₱17.857 → ₱17.86
        let amount = Money::from_centavos(17857);
        assert_eq!(amount.apply_rate(Rate::from_bps(1000)).centavos(), 1786);
    }

    #[test]
    fn test_less_rate() {
        let subtotal = Money::from_centavos(10000);
        assert_eq!(subtotal.less_rate(Rate::from_bps(2000)).centavos(), 8000);
        assert_eq!(subtotal.less_rate(Rate::zero()).centavos(), 10000);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_centavos(100);
        assert!(positive.is_positive());

        let negative = Money::from_centavos(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().centavos(), 100);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_centavos(5000);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.centavos(), 15000);
    }

    /// Backing out VAT then adding it back reconstructs the gross exactly.
    /// The split itself absorbs the rounding, not the reconstruction.
    #[test]
    fn test_vat_split_reconstructs_gross() {
        for centavos in [1, 99, 14950, 25000, 1_000_001] {
            let gross = Money::from_centavos(centavos);
            let subtotal = gross.less_vat(Rate::from_bps(1200));
            let vat = gross - subtotal;
            assert_eq!(subtotal + vat, gross);
        }
    }
}
