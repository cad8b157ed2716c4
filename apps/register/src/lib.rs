//! # Cashbox Register Library
//!
//! The register application: owns the live drawer and answers JSON-lines
//! commands on stdin/stdout.
//!
//! ## Module Organization
//! ```text
//! cashbox_register_lib/
//! ├── lib.rs          ◄─── You are here (tracing, transport, run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── register.rs ◄─── Drawer behind Arc<Mutex>
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command enum and dispatch
//! │   ├── change.rs   ◄─── calculate_change
//! │   ├── register.rs ◄─── register_state, reset_register
//! │   └── config.rs   ◄─── get_config
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Transport
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    JSON Lines over stdio                                │
//! │                                                                         │
//! │  stdin ──► line ──► Command ──► dispatch ──► Response ──► line ──► stdout│
//! │                                                                         │
//! │  • One request per line, one response line per request                │
//! │  • Requests handled strictly in arrival order                          │
//! │  • Empty lines are skipped                                             │
//! │  • Unparseable lines get a MALFORMED_REQUEST response                  │
//! │  • Logs go to stderr so stdout carries only responses                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::{dispatch, Command, ErrorResponse};
use error::ApiError;
use state::{ConfigState, RegisterState};

/// Runs the register on stdin/stdout until stdin closes.
///
/// ## Startup Sequence
/// 1. Initialize tracing (stderr)
/// 2. Load configuration from `CASHBOX_*` variables
/// 3. Open the register with the configured opening float
/// 4. Serve requests until end of input
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Cashbox register");

    let config = ConfigState::from_env();
    let register = RegisterState::new(config.opening_float.clone());

    info!(
        float = %config.format_currency(config.opening_float.total()),
        strategy = %config.default_strategy,
        "Register opened"
    );

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    serve(stdin, stdout, &register, &config).await?;

    info!("Input closed, shutting down");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=cashbox=trace` - Show trace for cashbox crates only
/// - Default: INFO, DEBUG for cashbox crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cashbox=debug"));

    // Already initialized when embedded in a test binary
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Reads request lines from `reader` and writes one response line per
/// request to `writer`.
pub async fn serve<R, W>(
    reader: R,
    mut writer: W,
    register: &RegisterState,
    config: &ConfigState,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if let Some(response) = handle_line(&line, register, config) {
            writer.write_all(response.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
    }

    Ok(())
}

/// Handles one request line. Returns `None` for blank lines.
pub fn handle_line(line: &str, register: &RegisterState, config: &ConfigState) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let outcome = serde_json::from_str::<Command>(line)
        .map_err(|e| ApiError::malformed(e.to_string()))
        .and_then(|command| {
            let name = command.name();
            dispatch(register, config, command).map_err(|err| {
                warn!(command = name, code = ?err.code, message = %err.message, "Request rejected");
                err
            })
        });

    let encoded = match outcome {
        Ok(response) => serde_json::to_string(&response),
        Err(err) => {
            if err.code == error::ErrorCode::MalformedRequest {
                warn!(message = %err.message, "Malformed request");
            }
            serde_json::to_string(&ErrorResponse::from(err))
        }
    };

    Some(encoded.unwrap_or_else(|e| {
        let fallback = ErrorResponse::from(ApiError::internal(e.to_string()));
        serde_json::to_string(&fallback).unwrap_or_default()
    }))
}
