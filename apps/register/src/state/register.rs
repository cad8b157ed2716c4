//! # Register State
//!
//! Owns the live drawer inventory for the running session.
//!
//! ## Thread Safety
//! The register is wrapped in `Arc<Mutex<T>>`. A settlement reads the
//! drawer, allocates change and commits the next inventory under one lock,
//! so two payments can never hand out the same coin.
//!
//! ## Register Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Register State Operations                            │
//! │                                                                         │
//! │  Request                  Command                 State Change          │
//! │  ───────                  ───────                 ────────────          │
//! │                                                                         │
//! │  Customer pays ──────────► calculate_change() ──► inventory = next     │
//! │                                                   transactions += 1    │
//! │                                                                         │
//! │  Open new shift ─────────► reset_register() ────► inventory = float    │
//! │                                                   transactions = 0     │
//! │                                                   opened_at = now      │
//! │                                                                         │
//! │  Check drawer ───────────► register_state() ────► (read only)          │
//! │                                                                         │
//! │  NOTE: A failed settlement never reaches commit().                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;

use cashbox_core::{Inventory, Money};

/// The drawer and its session bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Register {
    /// Count per denomination, all thirteen always present
    pub inventory: Inventory,

    /// When the current session started (process start or last reset)
    pub opened_at: DateTime<Utc>,

    /// Successful settlements since `opened_at`
    pub transactions: u64,
}

impl Register {
    /// Opens a register holding `inventory`.
    pub fn new(inventory: Inventory) -> Self {
        Register {
            inventory,
            opened_at: Utc::now(),
            transactions: 0,
        }
    }

    /// Total value in the drawer.
    pub fn total(&self) -> Money {
        self.inventory.total()
    }

    /// Commits the drawer produced by a successful settlement.
    pub fn commit(&mut self, inventory: Inventory) {
        self.inventory = inventory;
        self.transactions += 1;
    }

    /// Replaces the drawer wholesale and starts a new session.
    pub fn reset(&mut self, inventory: Inventory) {
        *self = Register::new(inventory);
    }
}

impl Default for Register {
    fn default() -> Self {
        Register::new(Inventory::default_float())
    }
}

/// Thread-safe register state shared by all commands.
#[derive(Debug, Clone, Default)]
pub struct RegisterState {
    register: Arc<Mutex<Register>>,
}

impl RegisterState {
    /// Creates register state holding `inventory`.
    pub fn new(inventory: Inventory) -> Self {
        RegisterState {
            register: Arc::new(Mutex::new(Register::new(inventory))),
        }
    }

    /// Executes a function with read access to the register.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = register_state.with_register(|r| r.total());
    /// ```
    pub fn with_register<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Register) -> R,
    {
        let register = self.register.lock().expect("Register mutex poisoned");
        f(&register)
    }

    /// Executes a function with write access to the register.
    pub fn with_register_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Register) -> R,
    {
        let mut register = self.register.lock().expect("Register mutex poisoned");
        f(&mut register)
    }

    /// Copy of the current register.
    pub fn snapshot(&self) -> Register {
        self.with_register(|r| r.clone())
    }

    /// Resets the register to `inventory`.
    pub fn reset(&self, inventory: Inventory) {
        self.with_register_mut(|r| r.reset(inventory));
    }
}
