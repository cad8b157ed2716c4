//! # Domain Types
//!
//! The shapes that flow through a settlement.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌──────────────────────┐            │
//! │  │  TransactionRequest  │  settle  │  TransactionResult   │            │
//! │  │  ──────────────────  │ ───────► │  ──────────────────  │            │
//! │  │  amount_due (Money)  │          │  change (Bag)        │            │
//! │  │  given (Bag)         │          │  change_amount       │            │
//! │  │  strategy            │          │  inventory (next)    │            │
//! │  └──────────┬───────────┘          └──────────────────────┘            │
//! │             │                                                           │
//! │  ┌──────────▼───────────┐                                              │
//! │  │  Strategy            │                                              │
//! │  │  LargestFirst  ◄──── default, and fallback for unknown names        │
//! │  │  SmallestFirst       │                                              │
//! │  │  Preferred(Vec<D>)   │                                              │
//! │  └──────────────────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::allocate;
use crate::denomination::Denomination;
use crate::inventory::{DenominationBag, Inventory};
use crate::money::Money;

// =============================================================================
// Strategy
// =============================================================================

/// How change is assembled from the drawer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Largest denominations first (`"maxLarge"`).
    #[default]
    LargestFirst,
    /// Smallest denominations first (`"maxSmall"`).
    SmallestFirst,
    /// The given denominations first, then the rest (`"preferred"`).
    Preferred(Vec<Denomination>),
}

impl Strategy {
    pub const LARGEST_FIRST: &'static str = "maxLarge";
    pub const SMALLEST_FIRST: &'static str = "maxSmall";
    pub const PREFERRED: &'static str = "preferred";

    /// Resolves a strategy name. Returns `None` for names it does not know.
    ///
    /// `preferred` is only kept for the `"preferred"` strategy.
    pub fn parse(name: &str, preferred: Vec<Denomination>) -> Option<Self> {
        match name {
            Self::LARGEST_FIRST => Some(Strategy::LargestFirst),
            Self::SMALLEST_FIRST => Some(Strategy::SmallestFirst),
            Self::PREFERRED => Some(Strategy::Preferred(preferred)),
            _ => None,
        }
    }

    /// Resolves a strategy name, falling back to [`Strategy::LargestFirst`]
    /// for unknown names.
    ///
    /// ## Example
    /// ```rust
    /// use cashbox_core::Strategy;
    ///
    /// assert_eq!(Strategy::from_name("maxSmall", vec![]), Strategy::SmallestFirst);
    /// assert_eq!(Strategy::from_name("fewestCoins", vec![]), Strategy::LargestFirst);
    /// ```
    pub fn from_name(name: &str, preferred: Vec<Denomination>) -> Self {
        Strategy::parse(name, preferred).unwrap_or_default()
    }

    /// Wire name of the strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::LargestFirst => Self::LARGEST_FIRST,
            Strategy::SmallestFirst => Self::SMALLEST_FIRST,
            Strategy::Preferred(_) => Self::PREFERRED,
        }
    }

    /// Runs this strategy's allocator. `None` means the drawer cannot make
    /// the amount this way.
    pub fn allocate(&self, amount: Money, inventory: &Inventory) -> Option<DenominationBag> {
        match self {
            Strategy::LargestFirst => allocate::largest_first(amount, inventory),
            Strategy::SmallestFirst => allocate::smallest_first(amount, inventory),
            Strategy::Preferred(denominations) => {
                allocate::preferred(amount, inventory, denominations)
            }
        }
    }
}

// =============================================================================
// Transaction Request
// =============================================================================

/// One customer payment to settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    /// What the customer owes.
    pub amount_due: Money,
    /// Notes and coins the customer handed over.
    pub given: DenominationBag,
    /// How to assemble the change.
    pub strategy: Strategy,
}

impl TransactionRequest {
    /// Creates a request settled with the default strategy.
    pub fn new(amount_due: Money, given: DenominationBag) -> Self {
        TransactionRequest {
            amount_due,
            given,
            strategy: Strategy::default(),
        }
    }

    /// Sets the change strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

// =============================================================================
// Transaction Result
// =============================================================================

/// Outcome of a successful settlement.
///
/// The caller commits `inventory` as the new drawer state; nothing else
/// changes anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionResult {
    /// Notes and coins to hand back (empty for exact payment).
    pub change: DenominationBag,
    /// Value of `change`.
    pub change_amount: Money,
    /// Drawer after the sale.
    pub inventory: Inventory,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_default() {
        assert_eq!(Strategy::default(), Strategy::LargestFirst);
    }

    #[test]
    fn test_strategy_parse_known_names() {
        assert_eq!(Strategy::parse("maxLarge", vec![]), Some(Strategy::LargestFirst));
        assert_eq!(Strategy::parse("maxSmall", vec![]), Some(Strategy::SmallestFirst));

        let twenty = Denomination::from_cents(2_000).unwrap();
        assert_eq!(
            Strategy::parse("preferred", vec![twenty]),
            Some(Strategy::Preferred(vec![twenty]))
        );
    }

    #[test]
    fn test_strategy_parse_unknown_name() {
        assert_eq!(Strategy::parse("MAXLARGE", vec![]), None);
        assert_eq!(Strategy::parse("", vec![]), None);
    }

    #[test]
    fn test_strategy_unknown_name_falls_back_to_largest_first() {
        assert_eq!(Strategy::from_name("random", vec![]), Strategy::LargestFirst);
    }

    #[test]
    fn test_strategy_name_round_trip() {
        for strategy in [
            Strategy::LargestFirst,
            Strategy::SmallestFirst,
            Strategy::Preferred(vec![]),
        ] {
            assert_eq!(Strategy::parse(strategy.name(), vec![]), Some(strategy));
        }
    }

    #[test]
    fn test_request_builder() {
        let request = TransactionRequest::new(Money::from_cents(100), DenominationBag::new())
            .with_strategy(Strategy::SmallestFirst);
        assert_eq!(request.strategy, Strategy::SmallestFirst);
        assert_eq!(request.amount_due.cents(), 100);
    }
}
