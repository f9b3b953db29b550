//! Benchmark suite for account operations
//!
//! Every deposit and withdrawal filters the full movement history to evaluate
//! the daily rules. These benchmarks measure that cost as the history grows.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use rust_wallet_engine::{Account, FixedClock};

fn main() {
    divan::main();
}

/// Build an account with `days` days of history, three deposits and two
/// withdrawals per day
fn account_with_history(days: u32) -> Account<FixedClock> {
    let mut date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let mut account = Account::with_clock(Decimal::ZERO, FixedClock::new(date));

    for _ in 0..days {
        account.clock_mut().set(date);
        for amount in [dec!(400), dec!(300), dec!(200)] {
            account.deposit(amount).expect("deposit within daily limits");
        }
        for amount in [dec!(250), dec!(150)] {
            account.withdraw(amount).expect("withdrawal within daily limits");
        }
        date = date.succ_opt().expect("date in range");
    }

    account.clock_mut().set(date);
    account
}

#[divan::bench(args = [10, 100, 1_000])]
fn withdrawn_amount_on_date(bencher: divan::Bencher, days: u32) {
    let account = account_with_history(days);
    let today = account.today();

    bencher.bench(|| account.withdrawn_amount_on_date(divan::black_box(today)));
}

#[divan::bench(args = [10, 100, 1_000])]
fn withdraw_with_history(bencher: divan::Bencher, days: u32) {
    let account = account_with_history(days);

    bencher
        .with_inputs(|| account.clone())
        .bench_local_values(|mut account| account.withdraw(divan::black_box(dec!(10))));
}

#[divan::bench(args = [10, 100, 1_000])]
fn deposit_with_history(bencher: divan::Bencher, days: u32) {
    let account = account_with_history(days);

    bencher
        .with_inputs(|| account.clone())
        .bench_local_values(|mut account| account.deposit(divan::black_box(dec!(10))));
}
