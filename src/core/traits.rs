//! Core traits for the wallet engine
//!
//! This module defines the trait abstractions that let the account logic be
//! driven by the real calendar in production and by a pinned date in tests
//! and replays.

use chrono::NaiveDate;

/// Source of the current calendar date
///
/// Daily rules (deposit count, withdrawal cap) are evaluated against the date
/// returned here. Implementations must be cheap to call; accounts query the
/// clock once per operation.
pub trait Clock {
    /// The calendar date movements created now should carry
    fn today(&self) -> NaiveDate;
}
