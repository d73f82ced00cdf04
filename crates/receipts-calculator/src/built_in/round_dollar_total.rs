//! Round Dollar Total Rule
//!
//! Looks at the literal text of the total, not its numeric value: `"10.00"`
//! qualifies while `"10.0"` and `"10"` do not.

use crate::PointsRule;
use receipts_types::Receipt;

const ROUND_DOLLAR_POINTS: u64 = 50;

#[derive(Debug, Default)]
pub struct RoundDollarTotalRule;

impl PointsRule for RoundDollarTotalRule {
    fn name(&self) -> &str {
        "round_dollar_total"
    }

    fn description(&self) -> &str {
        "50 points if the total ends in .00"
    }

    fn points(&self, receipt: &Receipt) -> u64 {
        if receipt.total.ends_with(".00") { ROUND_DOLLAR_POINTS } else { 0 }
    }
}
