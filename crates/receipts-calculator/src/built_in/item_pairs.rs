//! Item Pairs Rule
//!
//! Five points for every two items; an odd item out earns nothing.

use crate::PointsRule;
use receipts_types::Receipt;

const POINTS_PER_PAIR: u64 = 5;

#[derive(Debug, Default)]
pub struct ItemPairsRule;

impl PointsRule for ItemPairsRule {
    fn name(&self) -> &str {
        "item_pairs"
    }

    fn description(&self) -> &str {
        "5 points for every two items"
    }

    fn points(&self, receipt: &Receipt) -> u64 {
        (receipt.items.len() as u64 / 2) * POINTS_PER_PAIR
    }
}
