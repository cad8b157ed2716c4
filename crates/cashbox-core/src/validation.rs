//! # Validation Module
//!
//! Turns wire values into domain types, rejecting anything the engine must
//! never see.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Register app (serde)                                         │
//! │  ├── JSON shape, required fields                                       │
//! │  └── Counts arrive as signed integers keyed by strings                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Keys must be ladder denominations                                 │
//! │  ├── Counts must not be negative                                       │
//! │  └── Amount due must be positive                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Types                                                        │
//! │  └── Denomination / Inventory / DenominationBag cannot be malformed    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use crate::denomination::Denomination;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::inventory::{DenominationBag, Inventory};
use crate::money::Money;

/// Denomination counts as they arrive on the wire: `{"0.5": 15, "20": 4}`.
pub type RawCounts = BTreeMap<String, i64>;

// =============================================================================
// Amounts
// =============================================================================

/// Validates the amount a customer owes.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_amount_due(amount: Money) -> CoreResult<()> {
    if !amount.is_positive() {
        return Err(CoreError::InvalidAmount {
            reason: format!("amount due must be positive, got {}", amount),
        });
    }

    Ok(())
}

fn count_to_u32(field: &str, count: i64) -> Result<u32, ValidationError> {
    u32::try_from(count).map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("count {} is out of range", count),
    })
}

// =============================================================================
// Bags
// =============================================================================

/// Parses money handed over by a customer.
///
/// ## Rules
/// - Every key must be a ladder denomination
/// - Counts must not be negative; zero entries are dropped
///
/// ## Example
/// ```rust
/// use cashbox_core::validation::{parse_bag, RawCounts};
///
/// let raw: RawCounts = [("200".to_string(), 1), ("0.5".to_string(), 0)].into();
/// let bag = parse_bag(&raw).unwrap();
/// assert_eq!(bag.len(), 1);
/// assert_eq!(bag.total().cents(), 20_000);
/// ```
pub fn parse_bag(raw: &RawCounts) -> CoreResult<DenominationBag> {
    let mut bag = DenominationBag::new();

    for (key, &count) in raw {
        let denomination: Denomination = key.parse()?;

        if count < 0 {
            return Err(ValidationError::MustBePositive {
                field: format!("count of {}", key),
            }
            .into());
        }

        bag.add(denomination, count_to_u32(key, count)?);
    }

    Ok(bag)
}

// =============================================================================
// Inventories
// =============================================================================

/// Parses a full drawer state, e.g. a reset payload.
///
/// ## Rules
/// - Every key must be a ladder denomination
/// - Every count must be ≥ 0
/// - Missing denominations hold zero
///
/// Failures are reported as [`CoreError::InvalidInventoryEntry`] naming the
/// offending key.
pub fn parse_inventory(raw: &RawCounts) -> CoreResult<Inventory> {
    let mut counts = Vec::with_capacity(raw.len());

    for (key, &count) in raw {
        let denomination: Denomination =
            key.parse().map_err(|e: ValidationError| CoreError::InvalidInventoryEntry {
                denomination: key.clone(),
                reason: e.to_string(),
            })?;

        if count < 0 {
            return Err(CoreError::InvalidInventoryEntry {
                denomination: key.clone(),
                reason: format!("count {} is negative", count),
            });
        }

        let count = count_to_u32(key, count).map_err(|e| CoreError::InvalidInventoryEntry {
            denomination: key.clone(),
            reason: e.to_string(),
        })?;

        counts.push((denomination, count));
    }

    Ok(Inventory::from_counts(counts))
}

/// Checks a drawer state without keeping the parsed result.
pub fn validate_inventory(raw: &RawCounts) -> CoreResult<()> {
    parse_inventory(raw).map(|_| ())
}

// =============================================================================
// Preferred Denominations
// =============================================================================

/// Parses the preferred denominations of the `"preferred"` strategy,
/// given as decimal face values (`[20, 10, 0.5]`).
pub fn parse_preferred(values: &[f64]) -> CoreResult<Vec<Denomination>> {
    values
        .iter()
        .map(|&v| Denomination::from_major_f64(v).map_err(CoreError::from))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(entries: &[(&str, i64)]) -> RawCounts {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_validate_amount_due() {
        assert!(validate_amount_due(Money::from_cents(1)).is_ok());
        assert!(validate_amount_due(Money::from_cents(12_300)).is_ok());

        assert!(matches!(
            validate_amount_due(Money::zero()),
            Err(CoreError::InvalidAmount { .. })
        ));
        assert!(matches!(
            validate_amount_due(Money::from_cents(-1)),
            Err(CoreError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_parse_bag() {
        let bag = parse_bag(&raw(&[("200", 1), ("0.05", 3)])).unwrap();
        assert_eq!(bag.total().cents(), 20_015);
    }

    #[test]
    fn test_parse_bag_drops_zero_counts() {
        let bag = parse_bag(&raw(&[("20", 0)])).unwrap();
        assert!(bag.is_empty());
    }

    #[test]
    fn test_parse_bag_rejects_negative_counts() {
        assert!(matches!(
            parse_bag(&raw(&[("20", -1)])),
            Err(CoreError::Validation(ValidationError::MustBePositive { .. }))
        ));
    }

    #[test]
    fn test_parse_bag_rejects_unknown_denominations() {
        assert!(matches!(
            parse_bag(&raw(&[("3", 1)])),
            Err(CoreError::Validation(ValidationError::NotAllowed { .. }))
        ));
        assert!(matches!(
            parse_bag(&raw(&[("twenty", 1)])),
            Err(CoreError::Validation(ValidationError::InvalidFormat { .. }))
        ));
    }

    #[test]
    fn test_parse_inventory_full_drawer() {
        let drawer = parse_inventory(&raw(&[
            ("500", 0),
            ("200", 3),
            ("100", 5),
            ("50", 2),
            ("20", 4),
            ("10", 5),
            ("5", 8),
            ("2", 10),
            ("1", 25),
            ("0.5", 15),
            ("0.2", 20),
            ("0.1", 30),
            ("0.05", 20),
        ]))
        .unwrap();

        assert_eq!(drawer.count(Denomination::from_cents(10_000).unwrap()), 5);
        assert_eq!(drawer.iter().count(), 13);
    }

    #[test]
    fn test_parse_inventory_rejects_negative_counts() {
        let err = parse_inventory(&raw(&[("50", -1), ("20", 4)])).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidInventoryEntry {
                denomination: "50".to_string(),
                reason: "count -1 is negative".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_inventory_rejects_unknown_denominations() {
        assert!(matches!(
            parse_inventory(&raw(&[("1000", 1)])),
            Err(CoreError::InvalidInventoryEntry { denomination, .. }) if denomination == "1000"
        ));
    }

    #[test]
    fn test_parse_inventory_rejects_huge_counts() {
        assert!(matches!(
            parse_inventory(&raw(&[("1", i64::MAX)])),
            Err(CoreError::InvalidInventoryEntry { .. })
        ));
    }

    #[test]
    fn test_validate_inventory() {
        assert!(validate_inventory(&raw(&[("20", 4)])).is_ok());
        assert!(validate_inventory(&raw(&[])).is_ok());
        assert!(validate_inventory(&raw(&[("20", -4)])).is_err());
    }

    #[test]
    fn test_parse_preferred() {
        let preferred = parse_preferred(&[20.0, 10.0, 0.5]).unwrap();
        let cents: Vec<i64> = preferred.iter().map(|d| d.cents()).collect();
        assert_eq!(cents, vec![2_000, 1_000, 50]);

        assert!(parse_preferred(&[]).unwrap().is_empty());
        assert!(parse_preferred(&[3.0]).is_err());
    }
}
