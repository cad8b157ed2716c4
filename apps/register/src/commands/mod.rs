//! # Commands Module
//!
//! All commands the register answers on its JSON-lines channel.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (Command, dispatch, response envelope)
//! ├── change.rs    ◄─── calculate_change
//! ├── register.rs  ◄─── register_state, reset_register
//! └── config.rs    ◄─── get_config
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Caller writes one line                                                 │
//! │  ──────────────────────                                                 │
//! │  {"command":"calculate_change","amountDue":60,"totalGiven":{"100":1}}   │
//! │         │                                                               │
//! │         │ serde_json (tag = "command")                                  │
//! │         ▼                                                               │
//! │  Command::CalculateChange(ChangeRequest { .. })                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  dispatch(&RegisterState, &ConfigState, command)                        │
//! │      -> Result<Response, ApiError>                                      │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Caller reads one line: {"success":true,...} or {"success":false,...}   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod change;
pub mod config;
pub mod register;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::{ConfigState, RegisterState};

use change::{ChangeRequest, ChangeResponse};
use config::ConfigResponse;
use register::{RegisterResponse, ResetRequest};

/// One request line, tagged by its `"command"` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    CalculateChange(ChangeRequest),
    RegisterState,
    ResetRegister(ResetRequest),
    GetConfig,
}

impl Command {
    /// Wire name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::CalculateChange(_) => "calculate_change",
            Command::RegisterState => "register_state",
            Command::ResetRegister(_) => "reset_register",
            Command::GetConfig => "get_config",
        }
    }
}

/// Successful command output.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Response {
    Change(ChangeResponse),
    Register(RegisterResponse),
    Config(ConfigResponse),
}

/// Failed command output: `{"success":false,"error":{...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ApiError,
}

impl From<ApiError> for ErrorResponse {
    fn from(error: ApiError) -> Self {
        ErrorResponse {
            success: false,
            error,
        }
    }
}

/// Runs one command against the register.
pub fn dispatch(
    register: &RegisterState,
    config: &ConfigState,
    command: Command,
) -> Result<Response, ApiError> {
    match command {
        Command::CalculateChange(request) => {
            change::calculate_change(register, config, request).map(Response::Change)
        }
        Command::RegisterState => Ok(Response::Register(register::get_register_state(register))),
        Command::ResetRegister(request) => {
            register::reset_register(register, config, request).map(Response::Register)
        }
        Command::GetConfig => Ok(Response::Config(config::get_config(config))),
    }
}
