//! Afternoon Window Rule
//!
//! Only the hour is inspected: 14:00 through 15:59 qualifies, 16:00 does not.

use crate::PointsRule;
use receipts_types::Receipt;
use std::ops::Range;

const AFTERNOON_POINTS: u64 = 10;
const AFTERNOON_HOURS: Range<u32> = 14..16;

#[derive(Debug, Default)]
pub struct AfternoonWindowRule;

impl PointsRule for AfternoonWindowRule {
    fn name(&self) -> &str {
        "afternoon_window"
    }

    fn description(&self) -> &str {
        "10 points if the purchase time is after 2:00pm and before 4:00pm"
    }

    fn points(&self, receipt: &Receipt) -> u64 {
        match receipt.purchase_hour() {
            Some(hour) if AFTERNOON_HOURS.contains(&hour) => AFTERNOON_POINTS,
            _ => 0,
        }
    }
}
