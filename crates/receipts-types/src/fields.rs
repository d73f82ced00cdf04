//! Best-effort parsers for the textual receipt fields.
//!
//! Every parser returns `None` instead of an error. Scoring treats a missing
//! value as "this rule contributes nothing", so a single malformed field never
//! prevents the rest of a receipt from being scored.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a currency amount such as `"35.35"` into an exact decimal.
///
/// The text is not trimmed or normalised; `" 1.00"` and `"1e2"` are rejected.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    Decimal::from_str(text).ok()
}

/// Extracts the day component of a `YYYY-MM-DD` date.
///
/// Only the third `-` separated component is inspected. The date is not
/// validated against a calendar, so `"2022-02-31"` yields `Some(31)`.
pub fn day_of_month(date: &str) -> Option<u32> {
    date.split('-').nth(2)?.parse().ok()
}

/// Extracts the hour component of an `HH:MM` time.
pub fn hour_of_day(time: &str) -> Option<u32> {
    time.split(':').next()?.parse().ok()
}
