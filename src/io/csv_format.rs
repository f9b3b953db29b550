//! CSV format handling for operation records and ledger output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to operation records
//! - Ledger serialization of an account's movement history
//!
//! All functions are pure (no I/O) for easy testing.

use crate::core::{Account, Clock};
use crate::types::{MovementKind, OperationRecord, WalletError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: type, amount
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub op_type: String,
    pub amount: Option<String>,
}

/// Convert a CsvRecord to an OperationRecord
///
/// Operation types are matched case-insensitively. The amount is trimmed and
/// parsed but not validated; zero and negative amounts are left for the account
/// to reject so they surface as `InvalidAmount`.
///
/// # Errors
///
/// `InvalidOperationType`, `MissingAmount`, or a `ParseError` without a line
/// number when the amount is not a decimal. The reader fills in the line.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<OperationRecord, WalletError> {
    let kind = match csv_record.op_type.to_lowercase().as_str() {
        "deposit" => MovementKind::Deposit,
        "withdrawal" => MovementKind::Withdrawal,
        _ => return Err(WalletError::invalid_operation_type(&csv_record.op_type)),
    };

    let amount = match csv_record.amount {
        Some(amount_str) if !amount_str.trim().is_empty() => {
            Decimal::from_str(amount_str.trim()).map_err(|_| {
                WalletError::parse_error(
                    None,
                    format!("Invalid amount '{}' for {}", amount_str, kind),
                )
            })?
        }
        _ => return Err(WalletError::missing_amount(kind.as_str())),
    };

    Ok(OperationRecord { kind, amount })
}

/// Write an account's movement history to CSV format
///
/// Writes one row per movement with columns: date, type, amount, balance.
/// `balance` is the running balance after the movement, starting from the
/// account's opening balance.
pub fn write_ledger_csv<C: Clock>(
    account: &Account<C>,
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["date", "type", "amount", "balance"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    let mut balance = account.opening_balance();
    for movement in account.movements() {
        balance = movement
            .apply_to(balance)
            .ok_or_else(|| WalletError::arithmetic_overflow("ledger").to_string())?;

        writer
            .write_record(&[
                movement.date().format("%Y-%m-%d").to_string(),
                movement.kind().to_string(),
                format!("{:.4}", movement.amount()),
                format!("{:.4}", balance),
            ])
            .map_err(|e| format!("Failed to write ledger record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn record(op_type: &str, amount: Option<&str>) -> CsvRecord {
        CsvRecord {
            op_type: op_type.to_string(),
            amount: amount.map(|s| s.to_string()),
        }
    }

    #[rstest]
    #[case("deposit", MovementKind::Deposit)]
    #[case("withdrawal", MovementKind::Withdrawal)]
    #[case("DEPOSIT", MovementKind::Deposit)]
    #[case("Withdrawal", MovementKind::Withdrawal)]
    fn test_convert_csv_record_valid(#[case] op_type: &str, #[case] expected: MovementKind) {
        let result = convert_csv_record(record(op_type, Some("100.0")));

        let record = result.unwrap();
        assert_eq!(record.kind, expected);
        assert_eq!(record.amount, dec!(100.0));
    }

    #[rstest]
    #[case::invalid_type("transfer", Some("100.0"), "Invalid operation type")]
    #[case::missing_amount("deposit", None, "requires an amount")]
    #[case::empty_amount("withdrawal", Some(""), "requires an amount")]
    #[case::whitespace_amount("deposit", Some("  "), "requires an amount")]
    #[case::invalid_amount("deposit", Some("ten"), "Invalid amount")]
    fn test_convert_csv_record_errors(
        #[case] op_type: &str,
        #[case] amount: Option<&str>,
        #[case] expected_error: &str,
    ) {
        let result = convert_csv_record(record(op_type, amount));
        assert!(result.unwrap_err().to_string().contains(expected_error));
    }

    #[test]
    fn test_convert_csv_record_error_variants() {
        assert_eq!(
            convert_csv_record(record("transfer", Some("1"))),
            Err(WalletError::invalid_operation_type("transfer"))
        );
        assert_eq!(
            convert_csv_record(record("withdrawal", None)),
            Err(WalletError::missing_amount("withdrawal"))
        );
        assert!(matches!(
            convert_csv_record(record("deposit", Some("ten"))),
            Err(WalletError::ParseError { line: None, .. })
        ));
    }

    #[rstest]
    #[case::trimmed("  100.0  ", dec!(100.0))]
    #[case::four_places("100.1234", dec!(100.1234))]
    #[case::negative_kept("-5", dec!(-5))]
    #[case::zero_kept("0", dec!(0))]
    fn test_convert_csv_record_amount_parsing(#[case] amount: &str, #[case] expected: Decimal) {
        let result = convert_csv_record(record("deposit", Some(amount)));
        assert_eq!(result.unwrap().amount, expected);
    }

    #[test]
    fn test_write_ledger_csv_running_balance() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let mut account = Account::with_clock(dec!(50), FixedClock::new(date));
        account.deposit(dec!(100)).unwrap();
        account.withdraw(dec!(30.5)).unwrap();

        let mut output = Vec::new();
        write_ledger_csv(&account, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "date,type,amount,balance\n\
             2024-01-31,deposit,100.0000,150.0000\n\
             2024-01-31,withdrawal,30.5000,119.5000\n"
        );
    }

    #[test]
    fn test_write_ledger_csv_empty_history() {
        let account = Account::with_clock(
            dec!(10),
            FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        );

        let mut output = Vec::new();
        write_ledger_csv(&account, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "date,type,amount,balance\n"
        );
    }
}
