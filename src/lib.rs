//! Rust Wallet Engine Library
//! # Overview
//!
//! This library models a single wallet account: a balance plus the history of
//! deposits and withdrawals applied to it, guarded by a small set of business rules.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Movement, MovementKind, WalletError, etc.)
//! - [`core`] - Business logic components:
//!   - [`core::account`] - Account state, validation rules and date-scoped queries
//!   - [`core::engine`] - Replays operation records against an account
//!   - [`core::limits`] - Daily limits and their defaults
//!   - [`core::clock`] - Where "today" comes from
//! - [`io`] - CSV input parsing and ledger output
//! - [`pipeline`] - File-to-ledger orchestration
//! - [`cli`] - CLI arguments parsing
//!
//! # Rules
//!
//! Deposits are checked in this order:
//! 1. The amount must be positive
//! 2. At most [`MAX_DAILY_DEPOSITS`] deposits per calendar day
//!
//! Withdrawals are checked in this order:
//! 1. The amount must be positive
//! 2. The amount may not exceed the current balance
//! 3. The day's withdrawals may not exceed [`DAILY_WITHDRAWAL_CAP`] in total
//!
//! The first failing rule is reported and the account is left unchanged.
//!
//! ```
//! use rust_wallet_engine::{Account, WalletError};
//! use rust_decimal_macros::dec;
//!
//! let mut account = Account::new(dec!(5000));
//! account.withdraw(dec!(1000)).unwrap();
//!
//! let err = account.withdraw(dec!(1)).unwrap_err();
//! assert_eq!(
//!     err,
//!     WalletError::DailyWithdrawalLimitExceeded { cap: dec!(1000), remaining: dec!(0) }
//! );
//! assert_eq!(account.balance(), dec!(4000));
//! ```

pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use core::{
    Account, Clock, EngineStats, FixedClock, Limits, SystemClock, WalletEngine,
    DAILY_WITHDRAWAL_CAP, MAX_DAILY_DEPOSITS,
};
pub use io::write_ledger_csv;
pub use types::{Movement, MovementKind, OperationRecord, WalletError};
