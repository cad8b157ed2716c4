//! # Change Allocators
//!
//! Three greedy strategies for assembling an amount out of the drawer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shared loop, different orderings                                       │
//! │                                                                         │
//! │  for d in ordering:                                                     │
//! │      available = inventory[d] − taken[d]                                │
//! │      if available > 0 and remaining ≥ d:                                │
//! │          take min(remaining / d, available) units                      │
//! │  feasible ⇔ remaining == 0                                              │
//! │                                                                         │
//! │  largest_first   500 → 0.05                                             │
//! │  smallest_first  0.05 → 500                                             │
//! │  preferred       P (descending), then ladder − P (descending)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each loop visits a denomination at most once per pass. Greedy is not
//! exhaustive: a drawer can hold a valid combination that the chosen
//! ordering misses, and that case is reported as infeasible (`None`).
//! Allocators never return a partial bag.

use std::collections::BTreeSet;

use crate::denomination::Denomination;
use crate::inventory::{DenominationBag, Inventory};
use crate::money::Money;

/// Takes as many units as fit from each denomination in `order`.
fn drain<I>(order: I, remaining: &mut i64, inventory: &Inventory, taken: &mut DenominationBag)
where
    I: IntoIterator<Item = Denomination>,
{
    for denomination in order {
        let face = denomination.cents();
        let available = inventory.count(denomination).saturating_sub(taken.count(denomination));

        if available == 0 || *remaining < face {
            continue;
        }

        let needed = *remaining / face;
        let to_use = needed.min(available as i64);
        if to_use > 0 {
            taken.add(denomination, to_use as u32);
            *remaining -= face * to_use;
        }
    }
}

fn finish(remaining: i64, taken: DenominationBag) -> Option<DenominationBag> {
    (remaining == 0).then_some(taken)
}

/// Largest denominations first; the classic cashier's algorithm.
///
/// ## Example
/// ```rust
/// use cashbox_core::{allocate, Inventory, Money};
///
/// let change = allocate::largest_first(Money::from_cents(7700), &Inventory::default_float())
///     .expect("default float can make 77");
/// assert_eq!(change.total().cents(), 7700);
/// assert_eq!(change.len(), 4); // 50 + 20 + 5 + 2
/// ```
pub fn largest_first(amount: Money, inventory: &Inventory) -> Option<DenominationBag> {
    let mut remaining = amount.cents();
    let mut taken = DenominationBag::new();
    drain(Denomination::descending(), &mut remaining, inventory, &mut taken);
    finish(remaining, taken)
}

/// Smallest denominations first; empties the coin trays before touching notes.
pub fn smallest_first(amount: Money, inventory: &Inventory) -> Option<DenominationBag> {
    let mut remaining = amount.cents();
    let mut taken = DenominationBag::new();
    drain(Denomination::ascending(), &mut remaining, inventory, &mut taken);
    finish(remaining, taken)
}

/// Preferred denominations first, then the rest of the ladder.
///
/// ## Passes
/// 1. The preferred set, largest first. The caller's ordering and any
///    duplicates are ignored.
/// 2. Only if something remains: every other ladder denomination, largest
///    first, from what the drawer still has.
///
/// An empty preferred set behaves exactly like [`largest_first`].
pub fn preferred(
    amount: Money,
    inventory: &Inventory,
    preferred: &[Denomination],
) -> Option<DenominationBag> {
    if preferred.is_empty() {
        return largest_first(amount, inventory);
    }

    let preferred: BTreeSet<Denomination> = preferred.iter().copied().collect();
    let mut remaining = amount.cents();
    let mut taken = DenominationBag::new();

    drain(preferred.iter().rev().copied(), &mut remaining, inventory, &mut taken);

    if remaining > 0 {
        let fallback = Denomination::descending().filter(|d| !preferred.contains(d));
        drain(fallback, &mut remaining, inventory, &mut taken);
    }

    finish(remaining, taken)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn d(cents: i64) -> Denomination {
        Denomination::from_cents(cents).unwrap()
    }

    fn float() -> Inventory {
        Inventory::default_float()
    }

    #[test]
    fn test_largest_first_uses_big_notes() {
        let change = largest_first(Money::from_cents(7700), &float()).unwrap();
        let expected = DenominationBag::new()
            .with(d(5_000), 1)
            .with(d(2_000), 1)
            .with(d(500), 1)
            .with(d(200), 1);
        assert_eq!(change, expected);
    }

    #[test]
    fn test_largest_first_infeasible_returns_none() {
        let limited = Inventory::from_counts([(d(10_000), 1)]);
        assert_eq!(largest_first(Money::from_cents(7700), &limited), None);
    }

    #[test]
    fn test_largest_first_respects_counts() {
        // Only one 50 in the drawer: 100 = 50 + 20 + 20 + 10
        let drawer = Inventory::from_counts([(d(5_000), 1), (d(2_000), 2), (d(1_000), 5)]);
        let change = largest_first(Money::from_cents(10_000), &drawer).unwrap();
        assert_eq!(change.count(d(5_000)), 1);
        assert_eq!(change.count(d(2_000)), 2);
        assert_eq!(change.count(d(1_000)), 1);
    }

    #[test]
    fn test_largest_first_decimal_amount() {
        let change = largest_first(Money::from_cents(135), &float()).unwrap();
        assert_eq!(change.total().cents(), 135);
        assert_eq!(change.count(d(100)), 1);
        assert_eq!(change.count(d(20)), 1);
        assert_eq!(change.count(d(10)), 1);
        assert_eq!(change.count(d(5)), 1);
    }

    #[test]
    fn test_greedy_can_miss_a_valid_combination() {
        // 0.60 = 3 × 0.20 exists, but greedy takes the 0.50 first and strands 0.10
        let drawer = Inventory::from_counts([(d(50), 1), (d(20), 3)]);
        assert_eq!(largest_first(Money::from_cents(60), &drawer), None);
    }

    #[test]
    fn test_smallest_first_empties_coins() {
        let change = smallest_first(Money::from_cents(150), &float()).unwrap();
        let expected = DenominationBag::new().with(d(5), 20).with(d(10), 5);
        assert_eq!(change, expected);
    }

    #[test]
    fn test_smallest_first_infeasible_returns_none() {
        let drawer = Inventory::from_counts([(d(200), 1)]);
        assert_eq!(smallest_first(Money::from_cents(100), &drawer), None);
    }

    #[test]
    fn test_preferred_uses_preferred_first() {
        let change = preferred(Money::from_cents(3_000), &float(), &[d(1_000), d(500)]).unwrap();
        assert_eq!(change.count(d(1_000)), 3);
        assert_eq!(change.len(), 1);
    }

    #[test]
    fn test_preferred_ignores_caller_order() {
        let a = preferred(Money::from_cents(4_000), &float(), &[d(500), d(1_000), d(2_000)]);
        let b = preferred(Money::from_cents(4_000), &float(), &[d(2_000), d(1_000), d(500)]);
        assert_eq!(a, b);
        assert_eq!(a.unwrap().count(d(2_000)), 2);
    }

    #[test]
    fn test_preferred_falls_back_to_other_denominations() {
        let change = preferred(Money::from_cents(7_700), &float(), &[d(10_000)]).unwrap();
        assert_eq!(change.total().cents(), 7_700);
        assert_eq!(change.count(d(10_000)), 0);
        assert_eq!(change.count(d(5_000)), 1);
    }

    #[test]
    fn test_preferred_exhausts_preferred_before_fallback() {
        // Only two 10s: 40 = 10 + 10 + then fallback 20
        let drawer = Inventory::from_counts([(d(1_000), 2), (d(2_000), 4)]);
        let change = preferred(Money::from_cents(4_000), &drawer, &[d(1_000)]).unwrap();
        assert_eq!(change.count(d(1_000)), 2);
        assert_eq!(change.count(d(2_000)), 1);
    }

    #[test]
    fn test_preferred_duplicates_do_not_double_count() {
        let drawer = Inventory::from_counts([(d(2_000), 1)]);
        assert_eq!(
            preferred(Money::from_cents(4_000), &drawer, &[d(2_000), d(2_000)]),
            None
        );
    }

    #[test]
    fn test_preferred_empty_matches_largest_first() {
        let amount = Money::from_cents(12_345);
        assert_eq!(preferred(amount, &float(), &[]), largest_first(amount, &float()));
    }

    #[test]
    fn test_zero_amount_yields_empty_bag() {
        assert_eq!(largest_first(Money::zero(), &float()), Some(DenominationBag::new()));
    }

    #[test]
    fn test_negative_amount_is_infeasible() {
        assert_eq!(largest_first(Money::from_cents(-100), &float()), None);
    }
}
