//! # Change Commands
//!
//! Settles one customer payment against the live drawer.
//!
//! ## Settlement Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    calculate_change                                     │
//! │                                                                         │
//! │  {"command":"calculate_change","amountDue":123,                         │
//! │   "totalGiven":{"200":1},"strategy":"maxLarge"}                         │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Required fields present?         ── MISSING_FIELDS         │    │
//! │  │  2. Amount due positive?             ── INVALID_AMOUNT         │    │
//! │  │  3. Parse given bag, strategy        ── VALIDATION_ERROR       │    │
//! │  │  4. Lock register                                              │    │
//! │  │     settle(request, &inventory)      ── INSUFFICIENT_PAYMENT   │    │
//! │  │                                      ── EXACT_CHANGE_UNAVAILABLE│   │
//! │  │                                      ── INVALID_INVENTORY      │    │
//! │  │     commit(next inventory)                                     │    │
//! │  │  5. Unlock, tag with transactionId                             │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  {"success":true,"transactionId":"…","change":{"50":1,"20":1,…},       │
//! │   "changeAmount":77.0,"updatedRegister":{…}}                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use cashbox_core::validation::{parse_bag, parse_preferred, validate_amount_due, RawCounts};
use cashbox_core::{
    settle, CoreError, DenominationBag, Inventory, Money, Strategy, TransactionRequest,
};

use crate::error::ApiError;
use crate::state::{ConfigState, RegisterState};

/// Payload of `calculate_change`.
///
/// Fields are optional so that absent ones surface as `MISSING_FIELDS`
/// rather than as a malformed request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequest {
    /// What the customer owes, in currency units (`12.35`)
    pub amount_due: Option<f64>,

    /// Notes and coins handed over, keyed by face value
    pub total_given: Option<RawCounts>,

    /// `maxLarge`, `maxSmall` or `preferred`
    pub strategy: Option<String>,

    /// Face values tried first by the `preferred` strategy
    pub preferred_denominations: Option<Vec<f64>>,
}

/// Successful settlement.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeResponse {
    pub success: bool,
    pub transaction_id: Uuid,
    pub change: DenominationBag,
    pub change_amount: f64,
    pub updated_register: Inventory,
}

/// Settles a payment and commits the resulting drawer.
///
/// ## Behavior
/// - Change is drawn from the drawer as it was before the payment
/// - On any error the drawer is untouched
/// - An unknown strategy name falls back to largest-first
pub fn calculate_change(
    register: &RegisterState,
    config: &ConfigState,
    request: ChangeRequest,
) -> Result<ChangeResponse, ApiError> {
    debug!(
        amount_due = ?request.amount_due,
        strategy = ?request.strategy,
        "calculate_change command"
    );

    let (Some(amount_due), Some(total_given)) = (request.amount_due, &request.total_given) else {
        return Err(ApiError::missing_fields());
    };

    let amount_due = Money::from_major_f64(amount_due);
    validate_amount_due(amount_due)?;

    let given = parse_bag(total_given)?;
    let strategy = resolve_strategy(
        config,
        request.strategy.as_deref(),
        request.preferred_denominations.as_deref(),
    )?;
    let strategy_name = strategy.name();

    let transaction = TransactionRequest::new(amount_due, given).with_strategy(strategy);

    let (result, transactions) = register.with_register_mut(|r| {
        let result = settle(&transaction, &r.inventory)?;
        r.commit(result.inventory.clone());
        Ok::<_, CoreError>((result, r.transactions))
    })?;

    let transaction_id = Uuid::new_v4();

    info!(
        %transaction_id,
        due = %config.format_currency(amount_due),
        change = %config.format_currency(result.change_amount),
        strategy = strategy_name,
        transactions,
        "Payment settled"
    );

    Ok(ChangeResponse {
        success: true,
        transaction_id,
        change: result.change,
        change_amount: result.change_amount.to_major_f64(),
        updated_register: result.inventory,
    })
}

/// Picks the strategy for a request, falling back to the configured default
/// when the request names none.
fn resolve_strategy(
    config: &ConfigState,
    name: Option<&str>,
    preferred: Option<&[f64]>,
) -> Result<Strategy, ApiError> {
    let name = name.unwrap_or(&config.default_strategy);

    let preferred = if name == Strategy::PREFERRED {
        parse_preferred(preferred.unwrap_or_default())?
    } else {
        Vec::new()
    };

    match Strategy::parse(name, preferred) {
        Some(strategy) => Ok(strategy),
        None => {
            warn!(strategy = %name, "Unknown strategy, using maxLarge");
            Ok(Strategy::default())
        }
    }
}
