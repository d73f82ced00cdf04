//! Odd Purchase Day Rule

use crate::PointsRule;
use receipts_types::Receipt;

const ODD_DAY_POINTS: u64 = 6;

#[derive(Debug, Default)]
pub struct OddPurchaseDayRule;

impl PointsRule for OddPurchaseDayRule {
    fn name(&self) -> &str {
        "odd_purchase_day"
    }

    fn description(&self) -> &str {
        "6 points if the day in the purchase date is odd"
    }

    fn points(&self, receipt: &Receipt) -> u64 {
        match receipt.purchase_day() {
            Some(day) if day % 2 == 1 => ODD_DAY_POINTS,
            _ => 0,
        }
    }
}
