//! # Inventory and Denomination Bags
//!
//! Two mappings from [`Denomination`] to a unit count:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Inventory                         DenominationBag                      │
//! │  ─────────────────────────         ─────────────────────────            │
//! │  What the drawer holds             Money changing hands                 │
//! │  Every denomination present        Only positive entries                │
//! │  Counts ≥ 0                        Scoped to one transaction            │
//! │  Replaced after each sale          Given by customer / returned change  │
//! │                                                                         │
//! │  next = inventory + given − change   (Inventory::apply_transaction)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both serialize as a JSON object keyed by the denomination's wire string,
//! smallest denomination first.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::denomination::{Denomination, DENOMINATIONS};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

fn total_of<'a>(entries: impl Iterator<Item = (&'a Denomination, &'a u32)>) -> Money {
    entries.map(|(d, count)| d.value() * *count).sum()
}

// =============================================================================
// Denomination Bag
// =============================================================================

/// Banknotes and coins handed over in a single transaction.
///
/// ## Invariants
/// - Never holds a zero count (adding zero is a no-op)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DenominationBag(BTreeMap<Denomination, u32>);

impl DenominationBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        DenominationBag(BTreeMap::new())
    }

    /// Adds `count` units of `denomination`.
    pub fn add(&mut self, denomination: Denomination, count: u32) {
        if count == 0 {
            return;
        }
        *self.0.entry(denomination).or_insert(0) += count;
    }

    /// Builder form of [`DenominationBag::add`].
    pub fn with(mut self, denomination: Denomination, count: u32) -> Self {
        self.add(denomination, count);
        self
    }

    /// Units of `denomination` in the bag (0 when absent).
    pub fn count(&self, denomination: Denomination) -> u32 {
        self.0.get(&denomination).copied().unwrap_or(0)
    }

    /// Sum of `denomination × count` over all entries.
    ///
    /// ## Example
    /// ```rust
    /// use cashbox_core::{Denomination, DenominationBag};
    ///
    /// let bag = DenominationBag::new()
    ///     .with(Denomination::from_cents(20_000).unwrap(), 1)
    ///     .with(Denomination::from_cents(5_000).unwrap(), 1);
    /// assert_eq!(bag.total().cents(), 25_000);
    /// assert!(DenominationBag::new().total().is_zero());
    /// ```
    pub fn total(&self) -> Money {
        total_of(self.0.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct denominations in the bag.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates entries smallest denomination first.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u32)> + '_ {
        self.0.iter().map(|(d, c)| (*d, *c))
    }

}

impl FromIterator<(Denomination, u32)> for DenominationBag {
    fn from_iter<I: IntoIterator<Item = (Denomination, u32)>>(iter: I) -> Self {
        let mut bag = DenominationBag::new();
        for (denomination, count) in iter {
            bag.add(denomination, count);
        }
        bag
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// The register drawer: how many units of each denomination it holds.
///
/// ## Invariants
/// - Every member of [`DENOMINATIONS`] has an entry (possibly 0)
/// - Counts are unsigned, so never negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory(BTreeMap<Denomination, u32>);

/// Opening float used at startup and when a reset supplies no state.
const DEFAULT_FLOAT: [(i64, u32); 13] = [
    (5, 20),
    (10, 30),
    (20, 20),
    (50, 15),
    (100, 25),
    (200, 10),
    (500, 8),
    (1_000, 5),
    (2_000, 4),
    (5_000, 2),
    (10_000, 3),
    (20_000, 3),
    (50_000, 0),
];

impl Inventory {
    /// A drawer with every denomination at zero.
    pub fn empty() -> Self {
        Inventory(DENOMINATIONS.iter().map(|d| (*d, 0)).collect())
    }

    /// The built-in opening float.
    ///
    /// | 500 | 200 | 100 | 50 | 20 | 10 | 5 | 2 | 1 | 0.5 | 0.2 | 0.1 | 0.05 |
    /// |-----|-----|-----|----|----|----|---|---|---|-----|-----|-----|------|
    /// | 0   | 3   | 3   | 2  | 4  | 5  | 8 | 10| 25| 15  | 20  | 30  | 20   |
    pub fn default_float() -> Self {
        let mut inventory = Inventory::empty();
        for (cents, count) in DEFAULT_FLOAT {
            if let Ok(denomination) = Denomination::from_cents(cents) {
                inventory.0.insert(denomination, count);
            }
        }
        inventory
    }

    /// Builds an inventory from explicit counts; denominations not mentioned
    /// hold zero. Later entries for the same denomination overwrite earlier ones.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (Denomination, u32)>,
    {
        let mut inventory = Inventory::empty();
        for (denomination, count) in counts {
            inventory.0.insert(denomination, count);
        }
        inventory
    }

    /// Units of `denomination` in the drawer.
    pub fn count(&self, denomination: Denomination) -> u32 {
        self.0.get(&denomination).copied().unwrap_or(0)
    }

    /// Total value held in the drawer.
    pub fn total(&self) -> Money {
        total_of(self.0.iter())
    }

    /// Iterates every denomination smallest first, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u32)> + '_ {
        self.0.iter().map(|(d, c)| (*d, *c))
    }

    /// Produces the drawer after a sale: `given` goes in, `change` comes out.
    ///
    /// Fails with [`CoreError::CountOutOfRange`] when a count would exceed
    /// `u32::MAX` or drop below zero; no partial drawer is returned.
    ///
    /// ## Example
    /// ```rust
    /// use cashbox_core::{Denomination, DenominationBag, Inventory};
    ///
    /// let fifty = Denomination::from_cents(5_000).unwrap();
    /// let two_hundred = Denomination::from_cents(20_000).unwrap();
    ///
    /// let before = Inventory::from_counts([(fifty, 2)]);
    /// let given = DenominationBag::new().with(two_hundred, 1);
    /// let change = DenominationBag::new().with(fifty, 1);
    ///
    /// let after = before.apply_transaction(&given, &change).unwrap();
    /// assert_eq!(after.count(two_hundred), 1);
    /// assert_eq!(after.count(fifty), 1);
    /// ```
    pub fn apply_transaction(
        &self,
        given: &DenominationBag,
        change: &DenominationBag,
    ) -> CoreResult<Inventory> {
        let mut next = self.clone();

        for denomination in DENOMINATIONS {
            let count = (u64::from(self.count(denomination)) + u64::from(given.count(denomination)))
                .checked_sub(u64::from(change.count(denomination)))
                .and_then(|c| u32::try_from(c).ok())
                .ok_or(CoreError::CountOutOfRange { denomination })?;

            next.0.insert(denomination, count);
        }

        Ok(next)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory::default_float()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
