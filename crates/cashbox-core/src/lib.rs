//! # cashbox-core: Change Engine for the Cashbox Register
//!
//! This crate is the **heart** of Cashbox. It decides which notes and coins
//! to hand back for a payment and what the drawer holds afterwards, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cashbox Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Register app (cashbox-register)                 │   │
//! │  │    calculate_change · register_state · reset_register          │   │
//! │  │    owns the live Inventory behind a Mutex                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &Inventory in, Inventory out           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cashbox-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ inventory │  │ allocate  │  │  engine   │  │   │
//! │  │   │   Money   │  │ Inventory │  │ largest   │  │  settle   │  │   │
//! │  │   │   Denom.  │  │   Bag     │  │ smallest  │  │           │  │   │
//! │  │   │           │  │           │  │ preferred │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`denomination`] - The fixed ladder of face values
//! - [`inventory`] - Drawer inventory and per-transaction bags
//! - [`allocate`] - The three change strategies
//! - [`engine`] - Settlement: validation, allocation, inventory transition
//! - [`types`] - Strategy, request and result types
//! - [`validation`] - Wire-to-domain parsing rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same drawer + same payment = same change
//! 2. **No I/O**: logging and state ownership live in the register app
//! 3. **Integer Money**: all amounts are cents (i64)
//! 4. **All or Nothing**: a failed settlement yields no new inventory
//!
//! ## Example Usage
//!
//! ```rust
//! use cashbox_core::{settle, Denomination, DenominationBag, Inventory, Money, Strategy, TransactionRequest};
//!
//! let drawer = Inventory::default_float();
//! let hundred = Denomination::from_cents(10_000).unwrap();
//!
//! // Customer owes 60 and pays with a 100
//! let request = TransactionRequest::new(Money::from_cents(6_000), DenominationBag::new().with(hundred, 1))
//!     .with_strategy(Strategy::from_name("maxLarge", vec![]));
//!
//! let result = settle(&request, &drawer).unwrap();
//! assert_eq!(result.change_amount.cents(), 4_000);
//! assert_eq!(result.change.total(), result.change_amount);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod allocate;
pub mod denomination;
pub mod engine;
pub mod error;
pub mod inventory;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use denomination::{Denomination, DENOMINATIONS};
pub use engine::{apply_transaction, settle, total};
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::{DenominationBag, Inventory};
pub use money::Money;
pub use types::*;
