//! Wallet account
//!
//! This module provides the `Account` struct which owns a balance and the
//! append-only history of movements applied to it.
//!
//! The Account is responsible for:
//! - Validating deposits and withdrawals against its balance and history
//! - Enforcing the daily deposit count and daily withdrawal cap
//! - Recording a movement and updating the balance for each accepted operation
//! - Answering date-scoped queries over its history
//!
//! Validation runs in a fixed order and stops at the first failing rule, so a
//! caller always receives the first applicable error. A rejected operation
//! leaves both the balance and the history untouched.

use crate::core::clock::SystemClock;
use crate::core::limits::Limits;
use crate::core::traits::Clock;
use crate::types::{Movement, WalletError};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A single wallet: balance plus movement history
///
/// # Invariants
///
/// - `balance == opening_balance + Σ signed movement amounts` between operations
/// - A withdrawal is never accepted if it would make `balance` negative
///
/// The account has no internal synchronization. Hosts sharing one across
/// threads must serialize access themselves.
#[derive(Debug, Clone)]
pub struct Account<C = SystemClock> {
    opening_balance: Decimal,
    balance: Decimal,
    movements: Vec<Movement>,
    limits: Limits,
    clock: C,
}

impl Account<SystemClock> {
    /// Create an account with the given initial balance and default limits
    ///
    /// Daily rules are evaluated against the local calendar date.
    pub fn new(initial_balance: Decimal) -> Self {
        Self::with_clock(initial_balance, SystemClock)
    }
}

impl Default for Account<SystemClock> {
    fn default() -> Self {
        Self::new(Decimal::ZERO)
    }
}

impl<C: Clock> Account<C> {
    /// Create an account whose notion of "today" comes from `clock`
    pub fn with_clock(initial_balance: Decimal, clock: C) -> Self {
        Account {
            opening_balance: initial_balance,
            balance: initial_balance,
            movements: Vec::new(),
            limits: Limits::default(),
            clock,
        }
    }

    /// Replace the daily limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Balance the account was created with
    pub fn opening_balance(&self) -> Decimal {
        self.opening_balance
    }

    /// Movements in the order they were applied
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// Daily limits enforced by this account
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Mutable access to the clock, e.g. to advance a `FixedClock`
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Date the next movement would be recorded under
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Deposit funds into the account
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `InvalidAmount` if `amount <= 0`
    /// - `TooManyDailyDeposits` if today's deposit count already reached the limit
    /// - `ArithmeticOverflow` if the new balance is not representable
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), WalletError> {
        let today = self.today();

        ensure_positive(amount)?;
        self.ensure_deposit_allowed(today)?;

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| WalletError::arithmetic_overflow("deposit"))?;

        self.append_movement(Movement::deposit(today, amount));
        self.balance = new_balance;

        Ok(())
    }

    /// Withdraw funds from the account
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `InvalidAmount` if `amount <= 0`
    /// - `InsufficientFunds` if `amount` exceeds the current balance
    /// - `DailyWithdrawalLimitExceeded` if `amount` exceeds what is left of
    ///   today's allowance; the error carries that remaining allowance
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), WalletError> {
        let today = self.today();

        ensure_positive(amount)?;
        self.ensure_sufficient_funds(amount)?;
        self.ensure_within_daily_withdrawal_limit(amount, today)?;

        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| WalletError::arithmetic_overflow("withdrawal"))?;

        self.append_movement(Movement::withdrawal(today, amount));
        self.balance = new_balance;

        Ok(())
    }

    /// Attach an already validated movement to the history
    ///
    /// Does not touch the balance and runs no business rules.
    pub(crate) fn append_movement(&mut self, movement: Movement) {
        self.movements.push(movement);
    }

    /// Sum of withdrawal amounts recorded on `date`, zero if there are none
    pub fn withdrawn_amount_on_date(&self, date: NaiveDate) -> Decimal {
        self.withdrawals_on_date(date)
            .map(Movement::amount)
            .sum()
    }

    /// Deposits recorded on `date`
    ///
    /// Each call filters the history afresh.
    pub fn deposits_on_date(&self, date: NaiveDate) -> impl Iterator<Item = &Movement> + '_ {
        self.movements
            .iter()
            .filter(move |movement| movement.is_deposit() && movement.occurred_on(date))
    }

    /// Withdrawals recorded on `date`
    pub fn withdrawals_on_date(&self, date: NaiveDate) -> impl Iterator<Item = &Movement> + '_ {
        self.movements
            .iter()
            .filter(move |movement| movement.is_withdrawal() && movement.occurred_on(date))
    }

    /// Number of deposits recorded on `date`
    pub fn deposit_count_on_date(&self, date: NaiveDate) -> usize {
        self.deposits_on_date(date).count()
    }

    /// What is left of the daily withdrawal cap on `date`
    ///
    /// Negative only if the limits were lowered after withdrawals were made.
    pub fn remaining_withdrawal_limit(&self, date: NaiveDate) -> Decimal {
        self.limits.daily_withdrawal_cap - self.withdrawn_amount_on_date(date)
    }

    fn ensure_deposit_allowed(&self, today: NaiveDate) -> Result<(), WalletError> {
        let limit = self.limits.max_daily_deposits;
        if self.deposit_count_on_date(today) >= limit {
            return Err(WalletError::too_many_daily_deposits(limit));
        }
        Ok(())
    }

    fn ensure_sufficient_funds(&self, amount: Decimal) -> Result<(), WalletError> {
        if self.balance < amount {
            return Err(WalletError::insufficient_funds(self.balance));
        }
        Ok(())
    }

    fn ensure_within_daily_withdrawal_limit(
        &self,
        amount: Decimal,
        today: NaiveDate,
    ) -> Result<(), WalletError> {
        let remaining = self.remaining_withdrawal_limit(today);
        if amount > remaining {
            return Err(WalletError::daily_withdrawal_limit_exceeded(
                self.limits.daily_withdrawal_cap,
                remaining,
            ));
        }
        Ok(())
    }
}

fn ensure_positive(amount: Decimal) -> Result<(), WalletError> {
    if amount <= Decimal::ZERO {
        return Err(WalletError::invalid_amount(amount));
    }
    Ok(())
}
