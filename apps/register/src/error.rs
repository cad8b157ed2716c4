//! # API Error Type
//!
//! Unified error type for register commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Cashbox                                │
//! │                                                                         │
//! │  Caller                      Register app                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  {"command":"calculate_change", ...}                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Missing field? ──── ApiError::missing_fields() ───┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Engine failure? ─── CoreError::* ──────────── ApiError ───────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄── {"success":false,"error":{"code":"INSUFFICIENT_PAYMENT",          │
//! │                                "message":"..."}}                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every code maps to one deterministic input problem; callers should not
//! retry the same request.

use serde::Serialize;

use cashbox_core::CoreError;

/// API error returned from register commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// `amountDue` or `totalGiven` absent
    MissingFields,

    /// Amount due is zero or negative
    InvalidAmount,

    /// Customer gave less than the amount due
    InsufficientPayment,

    /// Drawer cannot assemble the change
    ExactChangeUnavailable,

    /// Reset payload is not a valid drawer, or a sale would overflow a count
    InvalidInventory,

    /// A field failed validation (unknown denomination, negative count)
    ValidationError,

    /// Line was not a JSON command
    MalformedRequest,

    /// Response could not be produced
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates the error for a change request lacking required fields.
    pub fn missing_fields() -> Self {
        ApiError::new(ErrorCode::MissingFields, "Missing required fields")
    }

    /// Creates a malformed request error.
    pub fn malformed(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::MalformedRequest, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InvalidAmount { .. } => ErrorCode::InvalidAmount,
            CoreError::InsufficientPayment { .. } => ErrorCode::InsufficientPayment,
            CoreError::ExactChangeUnavailable { .. } => ErrorCode::ExactChangeUnavailable,
            CoreError::InvalidInventoryEntry { .. } | CoreError::CountOutOfRange { .. } => {
                ErrorCode::InvalidInventory
            }
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
