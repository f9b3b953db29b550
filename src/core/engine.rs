//! Operation processing engine
//!
//! This module provides the WalletEngine that replays operation records against a
//! single account, routing each record to `Account::deposit` or `Account::withdraw`.
//!
//! The engine adds no rules of its own: every error comes from the account and is
//! returned to the caller unchanged. It only keeps counts of accepted and rejected
//! operations for reporting.

use crate::core::account::Account;
use crate::core::clock::SystemClock;
use crate::core::traits::Clock;
use crate::types::{MovementKind, OperationRecord, WalletError};
use tracing::debug;

/// Counts of processed operations
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EngineStats {
    /// Operations that produced a movement
    pub accepted: usize,
    /// Operations rejected by a business rule or arithmetic check
    pub rejected: usize,
}

impl EngineStats {
    pub fn total(&self) -> usize {
        self.accepted + self.rejected
    }
}

/// Operation processing engine
///
/// Owns one account and feeds it operation records in order.
#[derive(Debug)]
pub struct WalletEngine<C = SystemClock> {
    account: Account<C>,
    stats: EngineStats,
}

impl<C: Clock> WalletEngine<C> {
    /// Create an engine around an existing account
    pub fn new(account: Account<C>) -> Self {
        WalletEngine {
            account,
            stats: EngineStats::default(),
        }
    }

    /// Process a single operation record
    ///
    /// # Errors
    ///
    /// Returns whatever the account returned for the routed operation; the
    /// account is unchanged in that case.
    pub fn process(&mut self, record: OperationRecord) -> Result<(), WalletError> {
        let result = match record.kind {
            MovementKind::Deposit => self.account.deposit(record.amount),
            MovementKind::Withdrawal => self.account.withdraw(record.amount),
        };

        match result {
            Ok(()) => {
                self.stats.accepted += 1;
                debug!(
                    kind = %record.kind,
                    amount = %record.amount,
                    balance = %self.account.balance(),
                    "operation accepted"
                );
            }
            Err(_) => self.stats.rejected += 1,
        }

        result
    }

    pub fn account(&self) -> &Account<C> {
        &self.account
    }

    pub fn into_account(self) -> Account<C> {
        self.account
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }
}
