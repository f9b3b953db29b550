//! Movement-related types for the Rust Wallet Engine
//!
//! This module defines movement kinds, the immutable movement record kept in an
//! account's history, and the operation record read from CSV input.

use crate::core::{Account, Clock};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of movement an account can record
///
/// The set is closed: every behaviour that differs between deposits and
/// withdrawals is a `match` on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Credit funds to the account
    Deposit,

    /// Debit funds from the account
    Withdrawal,
}

impl MovementKind {
    /// Lowercase name used in CSV input and output
    pub fn as_str(self) -> &'static str {
        match self {
            MovementKind::Deposit => "deposit",
            MovementKind::Withdrawal => "withdrawal",
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recorded deposit or withdrawal
///
/// The amount is always a positive magnitude; the sign comes from `kind`.
/// Positivity is checked by the owning account before construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    date: NaiveDate,
    amount: Decimal,
    kind: MovementKind,
}

impl Movement {
    /// Create a movement. No validation is performed.
    pub fn new(date: NaiveDate, amount: Decimal, kind: MovementKind) -> Self {
        Movement { date, amount, kind }
    }

    /// Create a deposit movement
    pub fn deposit(date: NaiveDate, amount: Decimal) -> Self {
        Self::new(date, amount, MovementKind::Deposit)
    }

    /// Create a withdrawal movement
    pub fn withdrawal(date: NaiveDate, amount: Decimal) -> Self {
        Self::new(date, amount, MovementKind::Withdrawal)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn is_deposit(&self) -> bool {
        self.kind == MovementKind::Deposit
    }

    pub fn is_withdrawal(&self) -> bool {
        self.kind == MovementKind::Withdrawal
    }

    /// Whether the movement happened on the given calendar date
    pub fn occurred_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    /// Amount with the sign of its effect on a balance
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            MovementKind::Deposit => self.amount,
            MovementKind::Withdrawal => -self.amount,
        }
    }

    /// Balance obtained by applying this movement to `balance`
    ///
    /// Returns `None` on decimal overflow.
    pub fn apply_to(&self, balance: Decimal) -> Option<Decimal> {
        match self.kind {
            MovementKind::Deposit => balance.checked_add(self.amount),
            MovementKind::Withdrawal => balance.checked_sub(self.amount),
        }
    }

    /// Balance the account would have after this movement
    ///
    /// Pure projection: the account is not modified, and accounts never use
    /// this to update their own balance. Returns `None` on decimal overflow.
    pub fn resulting_balance<C: Clock>(&self, account: &Account<C>) -> Option<Decimal> {
        self.apply_to(account.balance())
    }
}

/// Input operation record from CSV
///
/// One requested deposit or withdrawal, replayed against an account in order.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    /// Requested movement kind
    pub kind: MovementKind,

    /// Requested amount, not yet validated
    pub amount: Decimal,
}

impl OperationRecord {
    pub fn deposit(amount: Decimal) -> Self {
        OperationRecord {
            kind: MovementKind::Deposit,
            amount,
        }
    }

    pub fn withdrawal(amount: Decimal) -> Self {
        OperationRecord {
            kind: MovementKind::Withdrawal,
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[rstest]
    #[case::deposit(Movement::deposit(day(1), dec!(10)), true, false)]
    #[case::withdrawal(Movement::withdrawal(day(1), dec!(10)), false, true)]
    fn test_kind_predicates(
        #[case] movement: Movement,
        #[case] is_deposit: bool,
        #[case] is_withdrawal: bool,
    ) {
        assert_eq!(movement.is_deposit(), is_deposit);
        assert_eq!(movement.is_withdrawal(), is_withdrawal);
    }

    #[test]
    fn test_occurred_on_compares_dates_only() {
        let movement = Movement::deposit(day(5), dec!(1));
        assert!(movement.occurred_on(day(5)));
        assert!(!movement.occurred_on(day(6)));
    }

    #[rstest]
    #[case::deposit(Movement::deposit(day(1), dec!(12.5)), dec!(12.5))]
    #[case::withdrawal(Movement::withdrawal(day(1), dec!(12.5)), dec!(-12.5))]
    fn test_signed_amount(#[case] movement: Movement, #[case] expected: Decimal) {
        assert_eq!(movement.signed_amount(), expected);
    }

    #[rstest]
    #[case::deposit(Movement::deposit(day(1), dec!(40)), dec!(140))]
    #[case::withdrawal(Movement::withdrawal(day(1), dec!(40)), dec!(60))]
    fn test_resulting_balance_is_a_projection(
        #[case] movement: Movement,
        #[case] expected: Decimal,
    ) {
        let account = Account::with_clock(dec!(100), FixedClock::new(day(1)));

        assert_eq!(movement.resulting_balance(&account), Some(expected));
        assert_eq!(account.balance(), dec!(100));
        assert!(account.movements().is_empty());
    }

    #[rstest]
    #[case::deposit_past_max(Decimal::MAX, Movement::deposit(day(1), Decimal::ONE))]
    #[case::withdrawal_past_min(Decimal::MIN, Movement::withdrawal(day(1), Decimal::ONE))]
    fn test_resulting_balance_reports_overflow(
        #[case] balance: Decimal,
        #[case] movement: Movement,
    ) {
        let account = Account::with_clock(balance, FixedClock::new(day(1)));

        assert_eq!(movement.resulting_balance(&account), None);
        assert_eq!(account.balance(), balance);
    }

    #[test]
    fn test_apply_to_reports_overflow() {
        let movement = Movement::deposit(day(1), Decimal::ONE);
        assert_eq!(movement.apply_to(Decimal::MAX), None);
        assert_eq!(movement.apply_to(dec!(1)), Some(dec!(2)));
    }

    #[test]
    fn test_kind_display_matches_csv_names() {
        assert_eq!(MovementKind::Deposit.to_string(), "deposit");
        assert_eq!(MovementKind::Withdrawal.to_string(), "withdrawal");
    }
}
