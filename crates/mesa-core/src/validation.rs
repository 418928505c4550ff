//! # Validation Module
//!
//! Boundary validation for records coming out of the document database.
//!
//! The engine itself is defensive (missing numerics become zero, no
//! input combination panics), so validation is opt-in: the data layer calls
//! these before caching a snapshot, surfacing records that should be fixed
//! at the source instead of silently aggregating as zeros forever.

use crate::error::{ValidationError, ValidationResult};
use crate::types::StoreConfig;
use crate::MAX_RATE_BPS;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a document id.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 128 characters (document ids are short; anything
///   longer is corrupt data)
pub fn validate_record_id(field: &str, id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if id.len() > 128 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 128,
        });
    }

    Ok(())
}

/// Validates a percentage rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
/// - VAT and service-charge rates are realistically 0-2500
pub fn validate_rate_bps(field: &str, bps: u32) -> ValidationResult<()> {
    if bps > MAX_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_RATE_BPS as i64,
        });
    }

    Ok(())
}

/// Validates a price in centavos.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: free items exist)
pub fn validate_price_centavos(field: &str, centavos: i64) -> ValidationResult<()> {
    if centavos < 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates an order quantity.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "qty".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Store Configuration
// =============================================================================

/// Validates a store configuration before it is used for aggregation.
pub fn validate_store_config(store: &StoreConfig) -> ValidationResult<()> {
    validate_rate_bps("vat_rate", store.vat_rate_bps)?;
    validate_rate_bps("service_charge_rate", store.service_charge_rate_bps)?;
    validate_price_centavos("togo_charge", store.togo_charge_centavos)?;

    for discount in &store.discounts {
        validate_record_id("discount.id", &discount.id)?;
        validate_rate_bps("discount.rate", discount.rate_bps)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Discount;

    #[test]
    fn test_validate_record_id() {
        assert!(validate_record_id("id", "Jx9mK2pQw8rT5vLnB3cD").is_ok());
        assert!(validate_record_id("id", "").is_err());
        assert!(validate_record_id("id", "   ").is_err());
        assert!(validate_record_id("id", &"x".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_rate_bps() {
        assert!(validate_rate_bps("vat_rate", 0).is_ok());
        assert!(validate_rate_bps("vat_rate", 1200).is_ok());
        assert!(validate_rate_bps("vat_rate", 10000).is_ok());
        assert!(validate_rate_bps("vat_rate", 10001).is_err());
    }

    #[test]
    fn test_validate_price_centavos() {
        assert!(validate_price_centavos("price", 0).is_ok());
        assert!(validate_price_centavos("price", 14950).is_ok());
        assert!(validate_price_centavos("price", -1).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-2).is_err());
    }

    #[test]
    fn test_validate_store_config() {
        let mut store = StoreConfig {
            vat_rate_bps: 1200,
            service_charge: true,
            service_charge_rate_bps: 1000,
            togo_charge_centavos: 1000,
            discounts: vec![Discount {
                id: "senior".into(),
                name: "SENIOR".into(),
                rate_bps: 2000,
                is_special: true,
            }],
        };
        assert!(validate_store_config(&store).is_ok());

        store.discounts[0].rate_bps = 20000;
        assert!(validate_store_config(&store).is_err());
    }
}
