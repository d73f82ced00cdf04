use crate::PointsRule;
use receipts_types::{Decimal, Receipt};

const THRESHOLD_POINTS: u64 = 5;

/// Awards a flat bonus when the total is strictly above 10.00.
#[derive(Debug, Default)]
pub struct TotalThresholdRule;

impl PointsRule for TotalThresholdRule {
    fn name(&self) -> &str {
        "total_threshold"
    }

    fn description(&self) -> &str {
        "5 points if the total is greater than 10.00"
    }

    fn points(&self, receipt: &Receipt) -> u64 {
        match receipt.total_amount() {
            Some(total) if total > Decimal::TEN => THRESHOLD_POINTS,
            _ => 0,
        }
    }
}
