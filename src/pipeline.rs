//! Replay pipeline
//!
//! Orchestrates a complete run by coordinating between the SyncReader (CSV input),
//! the WalletEngine (business rules) and `csv_format::write_ledger_csv` (output).
//!
//! Records are processed one at a time in file order, so the daily rules see the
//! same history they would see if the operations had been made interactively.

use crate::core::{Account, Clock, WalletEngine};
use crate::io::csv_format::write_ledger_csv;
use crate::io::sync_reader::SyncReader;
use crate::types::WalletError;
use std::io::Write;
use std::path::Path;
use tracing::{error, info, warn};

/// Replay the operations in `input_path` against `account` and write its ledger
///
/// Malformed rows and rejected operations are logged and skipped; they never
/// abort the run. Business-rule rejections are logged at `warn`, arithmetic
/// failures at `error`.
///
/// # Errors
///
/// Returns an error if the input file cannot be opened or the ledger cannot be
/// written.
///
/// # Returns
///
/// The engine after the last record, holding the final account and counts.
pub fn process<C: Clock>(
    input_path: &Path,
    account: Account<C>,
    output: &mut dyn Write,
) -> Result<WalletEngine<C>, WalletError> {
    let reader = SyncReader::new(input_path)?;
    let mut engine = WalletEngine::new(account);
    let mut malformed = 0usize;

    for result in reader {
        match result {
            Ok(record) => {
                if let Err(e) = engine.process(record) {
                    if e.is_rule_violation() {
                        warn!(error = %e, "operation rejected");
                    } else {
                        error!(error = %e, "operation failed");
                    }
                }
            }
            Err(e) => {
                malformed += 1;
                warn!(error = %e, "skipping malformed record");
            }
        }
    }

    write_ledger_csv(engine.account(), output)
        .map_err(|message| WalletError::IoError { message })?;

    let stats = engine.stats();
    info!(
        accepted = stats.accepted,
        rejected = stats.rejected,
        malformed,
        balance = %engine.account().balance(),
        "replay finished"
    );

    Ok(engine)
}
