//! Clock implementations
//!
//! - `SystemClock` - the local calendar date, used by default
//! - `FixedClock` - a pinned date, used by the CLI `--date` flag and by tests

use crate::core::traits::Clock;
use chrono::{Local, NaiveDate};

/// Clock backed by the machine's local date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        FixedClock { date }
    }

    /// Move the pinned date, e.g. to simulate the next day in a test
    pub fn set(&mut self, date: NaiveDate) {
        self.date = date;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
