//! # State Module
//!
//! Manages application state for the register.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      run() / serve()                            │   │
//! │  │  let config = ConfigState::from_env();                          │   │
//! │  │  let register = RegisterState::new(config.opening_float);       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │                   ┌──────────┴──────────┐                              │
//! │                   ▼                     ▼                               │
//! │  ┌──────────────────────────┐  ┌──────────────────────┐                │
//! │  │     RegisterState        │  │     ConfigState      │                │
//! │  │                          │  │                      │                │
//! │  │  Arc<Mutex<Register>>    │  │  currency_symbol     │                │
//! │  │   inventory              │  │  default_strategy    │                │
//! │  │   opened_at              │  │  opening_float       │                │
//! │  │   transactions           │  │                      │                │
//! │  └──────────────────────────┘  └──────────────────────┘                │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • RegisterState: Protected by Arc<Mutex<T>> for exclusive access      │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod register;

pub use config::ConfigState;
pub use register::{Register, RegisterState};
