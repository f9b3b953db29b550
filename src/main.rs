//! Rust Wallet Engine CLI
//!
//! Command-line interface for replaying wallet operations from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.csv > ledger.csv
//! cargo run -- --initial-balance 5000 operations.csv > ledger.csv
//! cargo run -- --date 2024-03-01 --daily-withdrawal-cap 500 operations.csv > ledger.csv
//! ```
//!
//! The program reads operation records from the input CSV file, applies them to a
//! single account in order, and writes the account's ledger to stdout. Rejected
//! operations and malformed rows are logged to stderr; set `RUST_LOG` to adjust
//! verbosity.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use rust_wallet_engine::cli;
use rust_wallet_engine::core::{Account, FixedClock};
use rust_wallet_engine::pipeline;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rust_wallet_engine=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = cli::parse_args();
    let limits = args.to_limits();
    let mut output = std::io::stdout();

    // The ledger goes to stdout
    let result = match args.date {
        Some(date) => {
            let account = Account::with_clock(args.initial_balance, FixedClock::new(date))
                .with_limits(limits);
            pipeline::process(&args.input_file, account, &mut output).map(|_| ())
        }
        None => {
            let account = Account::new(args.initial_balance).with_limits(limits);
            pipeline::process(&args.input_file, account, &mut output).map(|_| ())
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
