//! # Cashbox Register Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cashbox Register                                 │
//! │                                                                         │
//! │  Caller (POS front end, script, test harness)                           │
//! │         │  JSON line per request                                        │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Starts the tokio runtime                          │  │
//! │  │  lib.rs ─────► Logging, config, stdin/stdout loop                │  │
//! │  │  commands/ ──► calculate_change, register_state, reset_register  │  │
//! │  │  state/ ─────► RegisterState, ConfigState                        │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  cashbox-core (settle, allocators, inventory)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    cashbox_register_lib::run().await
}
