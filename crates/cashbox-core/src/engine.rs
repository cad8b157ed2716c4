//! # Settlement Engine
//!
//! Turns one customer payment into change plus the next drawer state.
//!
//! ## Settlement Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  settle(request, &inventory)                                            │
//! │       │                                                                 │
//! │       ├── amount_due ≤ 0? ───────────────► InvalidAmount               │
//! │       │                                                                 │
//! │       ├── total(given) < amount_due? ────► InsufficientPayment         │
//! │       │                                                                 │
//! │       ├── change = total(given) − amount_due                            │
//! │       │                                                                 │
//! │       ├── change == 0? ──► empty change ─────────────────┐             │
//! │       │                                                  │             │
//! │       ├── strategy.allocate(change, &inventory)          │             │
//! │       │        └── None ─────────────► ExactChangeUnavailable          │
//! │       │                                                  │             │
//! │       └── inventory.apply_transaction(given, change) ◄───┘             │
//! │                │  └── count past u32::MAX ───► CountOutOfRange          │
//! │                │                                                        │
//! │                ▼                                                        │
//! │         TransactionResult { change, change_amount, inventory }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine never mutates the inventory it is given. On error there is no
//! new inventory to commit, so the drawer stays as it was.

use crate::error::{CoreError, CoreResult};
use crate::inventory::{DenominationBag, Inventory};
use crate::money::Money;
use crate::types::{TransactionRequest, TransactionResult};
use crate::validation::validate_amount_due;

/// Sum of `denomination × count` over a bag.
#[inline]
pub fn total(bag: &DenominationBag) -> Money {
    bag.total()
}

/// Drawer after `given` is received and `change` is paid out.
///
/// See [`Inventory::apply_transaction`].
#[inline]
pub fn apply_transaction(
    inventory: &Inventory,
    given: &DenominationBag,
    change: &DenominationBag,
) -> CoreResult<Inventory> {
    inventory.apply_transaction(given, change)
}

/// Settles one payment against the drawer.
///
/// Change is allocated from the drawer as it stood *before* the customer's
/// money went in.
///
/// ## Example
/// ```rust
/// use cashbox_core::{settle, Denomination, DenominationBag, Inventory, Money, TransactionRequest};
///
/// let two_hundred = Denomination::from_cents(20_000).unwrap();
/// let request = TransactionRequest::new(
///     Money::from_cents(12_300),
///     DenominationBag::new().with(two_hundred, 1),
/// );
///
/// let result = settle(&request, &Inventory::default_float()).unwrap();
/// assert_eq!(result.change_amount.cents(), 7_700);
/// assert_eq!(result.inventory.count(two_hundred), 4);
/// ```
pub fn settle(request: &TransactionRequest, inventory: &Inventory) -> CoreResult<TransactionResult> {
    validate_amount_due(request.amount_due)?;

    let given_total = request.given.total();
    if given_total < request.amount_due {
        return Err(CoreError::InsufficientPayment {
            due: request.amount_due,
            given: given_total,
        });
    }

    let change_amount = given_total - request.amount_due;

    let change = if change_amount.is_zero() {
        DenominationBag::new()
    } else {
        request
            .strategy
            .allocate(change_amount, inventory)
            .ok_or(CoreError::ExactChangeUnavailable {
                amount: change_amount,
            })?
    };

    let inventory = inventory.apply_transaction(&request.given, &change)?;

    Ok(TransactionResult {
        change,
        change_amount,
        inventory,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
