//! The points engine for the receipt processor.
//!
//! This crate provides the `PointsRule` trait, the built-in loyalty rules and
//! the `PointsCalculator` that sums them. Everything here is pure: no I/O, no
//! shared state, and no failure mode. A malformed receipt field only zeroes the
//! rules that depend on it.

use receipts_types::Receipt;

pub mod built_in;
pub mod calculator;
pub mod registry;
pub mod rule;

pub use calculator::{PointsBreakdown, PointsCalculator, RuleContribution};
pub use registry::RuleRegistry;
pub use rule::PointsRule;

/// Scores a receipt with the default set of built-in rules.
pub fn calculate_points(receipt: &Receipt) -> u64 {
    PointsCalculator::new().score(receipt)
}
