//! Core business logic module
//!
//! This module contains the wallet components:
//! - `traits` - Trait abstractions (the `Clock` supplying "today")
//! - `clock` - System and fixed clock implementations
//! - `limits` - Daily limit constants and configuration
//! - `account` - Account state, validation rules and date-scoped queries
//! - `engine` - Replays operation records against an account

pub mod account;
pub mod clock;
pub mod engine;
pub mod limits;
pub mod traits;

pub use account::Account;
pub use clock::{FixedClock, SystemClock};
pub use engine::{EngineStats, WalletEngine};
pub use limits::{Limits, DAILY_WITHDRAWAL_CAP, MAX_DAILY_DEPOSITS};
pub use traits::Clock;
