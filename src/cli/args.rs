use crate::core::Limits;
use chrono::NaiveDate;
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Replay wallet deposits and withdrawals and print the resulting ledger
#[derive(Parser, Debug)]
#[command(name = "wallet-engine")]
#[command(about = "Replay wallet deposits and withdrawals and print the resulting ledger", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing operation records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Balance the account starts with
    #[arg(
        long = "initial-balance",
        value_name = "AMOUNT",
        default_value = "0",
        help = "Opening balance of the account"
    )]
    pub initial_balance: Decimal,

    /// Pin the calendar date used for daily limits
    #[arg(
        long = "date",
        value_name = "YYYY-MM-DD",
        help = "Date to record movements under (default: today's local date)"
    )]
    pub date: Option<NaiveDate>,

    /// Override the number of deposits allowed per day
    #[arg(
        long = "max-daily-deposits",
        value_name = "COUNT",
        help = "Deposits allowed per day (default: 3)"
    )]
    pub max_daily_deposits: Option<usize>,

    /// Override the cumulative withdrawal cap per day
    #[arg(
        long = "daily-withdrawal-cap",
        value_name = "AMOUNT",
        help = "Cumulative withdrawals allowed per day (default: 1000)"
    )]
    pub daily_withdrawal_cap: Option<Decimal>,
}

impl CliArgs {
    /// Create Limits from CLI arguments
    ///
    /// Values not given on the command line keep their defaults.
    pub fn to_limits(&self) -> Limits {
        if self.max_daily_deposits.is_some() || self.daily_withdrawal_cap.is_some() {
            let default = Limits::default();
            Limits::new(
                self.max_daily_deposits
                    .unwrap_or(default.max_daily_deposits),
                self.daily_withdrawal_cap
                    .unwrap_or(default.daily_withdrawal_cap),
            )
        } else {
            Limits::default()
        }
    }
}
