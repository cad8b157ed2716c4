//! # Error Types
//!
//! Domain-specific error types for cashbox-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cashbox-core errors (this file)                                       │
//! │  ├── CoreError        - Settlement and inventory failures              │
//! │  └── ValidationError  - Field-level parse failures                     │
//! │                                                                         │
//! │  register app errors (separate crate)                                  │
//! │  └── ApiError         - What the caller sees (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Caller                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure here is deterministic and driven by input, so none of them
//! are worth retrying. A failed settlement never produces a new inventory.

use thiserror::Error;

use crate::denomination::Denomination;
use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Change engine errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Amount due is missing, zero, or negative.
    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    /// The customer handed over less than the amount due.
    ///
    /// ## User Workflow
    /// ```text
    /// Amount due: $123.00
    ///      │
    ///      ▼
    /// Given: {100: 1} = $100.00
    ///      │
    ///      ▼
    /// InsufficientPayment { due: $123.00, given: $100.00 }
    ///      │
    ///      ▼
    /// Register untouched, cashier asks for more money
    /// ```
    #[error("Insufficient payment: {given} given, {due} due")]
    InsufficientPayment { due: Money, given: Money },

    /// No allocation pass could assemble the change from the drawer.
    #[error("Unable to provide exact change of {amount}")]
    ExactChangeUnavailable { amount: Money },

    /// An inventory entry has a negative count or a denomination outside
    /// the fixed set.
    #[error("Invalid inventory entry '{denomination}': {reason}")]
    InvalidInventoryEntry {
        denomination: String,
        reason: String,
    },

    /// Settling would push a drawer count past `u32::MAX` or below zero.
    #[error("Count of {denomination} would leave the representable range")]
    CountOutOfRange { denomination: Denomination },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while turning wire values (strings, decimals, signed counts) into
/// domain types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. "1.2.3" as a denomination).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientPayment {
            due: Money::from_cents(12300),
            given: Money::from_cents(10000),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient payment: $100.00 given, $123.00 due"
        );

        let err = CoreError::ExactChangeUnavailable {
            amount: Money::from_cents(7700),
        };
        assert_eq!(err.to_string(), "Unable to provide exact change of $77.00");

        let err = CoreError::CountOutOfRange {
            denomination: Denomination::from_cents(50).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Count of 0.5 would leave the representable range"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "amount due".to_string(),
        };
        assert_eq!(err.to_string(), "amount due must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::InvalidFormat {
            field: "denomination".to_string(),
            reason: "not a number".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
