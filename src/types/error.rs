//! Error types for the Rust Wallet Engine
//!
//! This module defines all error types that can occur while operating on a wallet.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Business Rule Errors**: Invalid amount, daily deposit count, insufficient funds,
//!   daily withdrawal limit
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Parsing Errors**: Malformed CSV, invalid operation types, missing amounts
//! - **Arithmetic Errors**: Overflow in balance calculations

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the wallet engine
///
/// Business rule variants are returned by [`crate::core::Account`] and always
/// reach the caller unchanged. The remaining variants belong to the CSV pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WalletError {
    /// Amount is zero or negative
    #[error("{amount}: amount must be positive")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// The daily deposit count has already been reached
    #[error("exceeded {limit} daily deposits")]
    TooManyDailyDeposits {
        /// Maximum number of deposits per calendar day
        limit: usize,
    },

    /// Withdrawal would leave the balance negative
    #[error("cannot withdraw more than current balance {balance}")]
    InsufficientFunds {
        /// Balance at the time of the rejected withdrawal
        balance: Decimal,
    },

    /// Withdrawal exceeds what is left of today's withdrawal allowance
    #[error("cannot withdraw more than {cap} per day, remaining limit: {remaining}")]
    DailyWithdrawalLimitExceeded {
        /// Daily cumulative withdrawal cap
        cap: Decimal,
        /// Allowance left for the day when the withdrawal was attempted
        remaining: Decimal,
    },

    /// Checked decimal arithmetic failed
    ///
    /// The operation is rejected and the account is left untouched.
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// This is a recoverable error - the malformed record is skipped
    /// and processing continues with the next record.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Operation type other than deposit or withdrawal
    #[error("Invalid operation type '{op_type}'")]
    InvalidOperationType {
        /// The invalid operation type string
        op_type: String,
    },

    /// Amount column is empty for an operation
    #[error("{op_type} operation requires an amount")]
    MissingAmount {
        /// Operation type that requires an amount
        op_type: String,
    },
}

impl From<std::io::Error> for WalletError {
    fn from(error: std::io::Error) -> Self {
        WalletError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for WalletError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        WalletError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl WalletError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        WalletError::InvalidAmount { amount }
    }

    /// Create a TooManyDailyDeposits error
    pub fn too_many_daily_deposits(limit: usize) -> Self {
        WalletError::TooManyDailyDeposits { limit }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: Decimal) -> Self {
        WalletError::InsufficientFunds { balance }
    }

    /// Create a DailyWithdrawalLimitExceeded error
    pub fn daily_withdrawal_limit_exceeded(cap: Decimal, remaining: Decimal) -> Self {
        WalletError::DailyWithdrawalLimitExceeded { cap, remaining }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        WalletError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create a ParseError error
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        WalletError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Attach a line number to a record-level error
    ///
    /// Errors that already carry a line are returned as they are; anything else
    /// becomes a `ParseError` at `line` so the offending row can be located.
    pub fn at_line(self, line: u64) -> Self {
        match self {
            WalletError::ParseError { line: None, message } => WalletError::ParseError {
                line: Some(line),
                message,
            },
            WalletError::ParseError { .. } => self,
            other => WalletError::ParseError {
                line: Some(line),
                message: other.to_string(),
            },
        }
    }

    /// Create an InvalidOperationType error
    pub fn invalid_operation_type(op_type: &str) -> Self {
        WalletError::InvalidOperationType {
            op_type: op_type.to_string(),
        }
    }

    /// Create a MissingAmount error
    pub fn missing_amount(op_type: &str) -> Self {
        WalletError::MissingAmount {
            op_type: op_type.to_string(),
        }
    }

    /// Whether this error comes from a wallet business rule rather than I/O
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            WalletError::InvalidAmount { .. }
                | WalletError::TooManyDailyDeposits { .. }
                | WalletError::InsufficientFunds { .. }
                | WalletError::DailyWithdrawalLimitExceeded { .. }
        )
    }
}
