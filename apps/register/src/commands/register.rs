//! # Register Commands
//!
//! Reads and replaces the drawer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use cashbox_core::validation::{parse_inventory, RawCounts};
use cashbox_core::Inventory;

use crate::error::ApiError;
use crate::state::{ConfigState, Register, RegisterState};

/// Drawer snapshot returned by `register_state` and `reset_register`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub register: Inventory,
    pub total: f64,
    pub opened_at: DateTime<Utc>,
    pub transactions: u64,
}

impl From<&Register> for RegisterResponse {
    fn from(register: &Register) -> Self {
        RegisterResponse {
            success: true,
            register: register.inventory.clone(),
            total: register.total().to_major_f64(),
            opened_at: register.opened_at,
            transactions: register.transactions,
        }
    }
}

/// Payload of `reset_register`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetRequest {
    /// Full drawer to install; the configured opening float when absent
    pub initial_state: Option<RawCounts>,
}

/// Gets the current drawer.
pub fn get_register_state(register: &RegisterState) -> RegisterResponse {
    debug!("register_state command");
    register.with_register(|r| RegisterResponse::from(r))
}

/// Replaces the drawer wholesale and starts a new session.
///
/// ## Behavior
/// - `initialState` is validated in full before anything changes
/// - Denominations it omits hold zero
/// - Without `initialState` the configured opening float is installed
pub fn reset_register(
    register: &RegisterState,
    config: &ConfigState,
    request: ResetRequest,
) -> Result<RegisterResponse, ApiError> {
    debug!(supplied = request.initial_state.is_some(), "reset_register command");

    let inventory = match &request.initial_state {
        Some(raw) => parse_inventory(raw)?,
        None => config.opening_float.clone(),
    };

    let response = register.with_register_mut(|r| {
        r.reset(inventory);
        info!(total = %config.format_currency(r.total()), "Register reset");
        RegisterResponse::from(&*r)
    });

    Ok(response)
}
