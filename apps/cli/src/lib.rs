//! # Pizzeria CLI
//!
//! Wires the pure `pizzeria-core` crate to a terminal.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, on stderr)
//! 2. Load configuration from the environment
//! 3. Create the stock ledger with the opening stock
//! 4. Run the ordering session on stdin/stdout until the user exits

pub mod config;
pub mod error;
pub mod session;

use std::io;

use pizzeria_core::StockLedger;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::{AppConfig, ConfigError};
pub use error::{AppError, AppResult};
pub use session::Session;

/// Filter used when `RUST_LOG` is unset. Anything chattier would interleave
/// with the menu on an interactive terminal.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Runs one interactive session against the process's stdin and stdout.
pub fn run() -> AppResult<()> {
    init_tracing();

    let config = AppConfig::from_env()?;
    info!(
        currency_symbol = %config.currency_symbol,
        default_payment = %config.default_payment,
        "Configuration loaded"
    );

    // One ledger for the whole process; it starts full on every run.
    let ledger = StockLedger::with_initial_stock();

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), &ledger, &config).run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr, keeping stdout to the menu itself.
///
/// ## Log Levels
/// - `RUST_LOG=info` - Order and payment lifecycle
/// - `RUST_LOG=pizzeria_core=debug` - Every stock decision in the core crate
/// - Default: warnings only; refusals and payments are part of the menu flow
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_default_filter_keeps_info_out_of_the_menu() {
        let filter = EnvFilter::try_new(DEFAULT_LOG_FILTER).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }
}
