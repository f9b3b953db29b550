//! Daily limits enforced by an account
//!
//! The defaults are the named constants below. `Limits` exists so the CLI can
//! override them; accounts built with `Account::new` always use the defaults.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Maximum number of deposits accepted per calendar day
pub const MAX_DAILY_DEPOSITS: usize = 3;

/// Maximum cumulative amount that can be withdrawn per calendar day
pub const DAILY_WITHDRAWAL_CAP: Decimal = dec!(1000);

/// Per-account daily limits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    /// Number of deposits allowed per day
    pub max_daily_deposits: usize,
    /// Cumulative withdrawal amount allowed per day
    pub daily_withdrawal_cap: Decimal,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_daily_deposits: MAX_DAILY_DEPOSITS,
            daily_withdrawal_cap: DAILY_WITHDRAWAL_CAP,
        }
    }
}

impl Limits {
    /// Create limits with custom values
    ///
    /// A zero deposit count or a non-positive cap falls back to the default.
    pub fn new(max_daily_deposits: usize, daily_withdrawal_cap: Decimal) -> Self {
        let default = Self::default();

        let max_daily_deposits = if max_daily_deposits == 0 {
            tracing::warn!(
                "Invalid max_daily_deposits ({}), using default ({})",
                max_daily_deposits,
                default.max_daily_deposits
            );
            default.max_daily_deposits
        } else {
            max_daily_deposits
        };

        let daily_withdrawal_cap = if daily_withdrawal_cap <= Decimal::ZERO {
            tracing::warn!(
                "Invalid daily_withdrawal_cap ({}), using default ({})",
                daily_withdrawal_cap,
                default.daily_withdrawal_cap
            );
            default.daily_withdrawal_cap
        } else {
            daily_withdrawal_cap
        };

        Self {
            max_daily_deposits,
            daily_withdrawal_cap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_uses_named_constants() {
        let limits = Limits::default();
        assert_eq!(limits.max_daily_deposits, 3);
        assert_eq!(limits.daily_withdrawal_cap, dec!(1000));
    }

    #[rstest]
    #[case::custom(5, dec!(250), 5, dec!(250))]
    #[case::zero_deposits(0, dec!(250), 3, dec!(250))]
    #[case::zero_cap(5, dec!(0), 5, dec!(1000))]
    #[case::negative_cap(5, dec!(-10), 5, dec!(1000))]
    fn test_new_falls_back_to_defaults(
        #[case] deposits: usize,
        #[case] cap: Decimal,
        #[case] expected_deposits: usize,
        #[case] expected_cap: Decimal,
    ) {
        let limits = Limits::new(deposits, cap);
        assert_eq!(limits.max_daily_deposits, expected_deposits);
        assert_eq!(limits.daily_withdrawal_cap, expected_cap);
    }
}
