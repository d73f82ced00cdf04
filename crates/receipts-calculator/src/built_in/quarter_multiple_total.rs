//! Quarter Multiple Total Rule
//!
//! Exact decimal remainder against 0.25, so no floating point tolerance is
//! involved. An unparseable total earns nothing.

use crate::PointsRule;
use receipts_types::{Decimal, Receipt};

const QUARTER_MULTIPLE_POINTS: u64 = 25;

#[derive(Debug, Default)]
pub struct QuarterMultipleTotalRule;

impl PointsRule for QuarterMultipleTotalRule {
    fn name(&self) -> &str {
        "quarter_multiple_total"
    }

    fn description(&self) -> &str {
        "25 points if the total is a multiple of 0.25"
    }

    fn points(&self, receipt: &Receipt) -> u64 {
        let quarter = Decimal::new(25, 2);
        match receipt.total_amount() {
            Some(total) if (total % quarter).is_zero() => QUARTER_MULTIPLE_POINTS,
            _ => 0,
        }
    }
}
