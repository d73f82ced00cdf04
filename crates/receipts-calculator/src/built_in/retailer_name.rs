//! Retailer Name Rule
//!
//! One point for every character in the retailer name. Spaces and punctuation
//! count; the name is not trimmed.

use crate::PointsRule;
use receipts_types::Receipt;

#[derive(Debug, Default)]
pub struct RetailerNameRule;

impl PointsRule for RetailerNameRule {
    fn name(&self) -> &str {
        "retailer_name"
    }

    fn description(&self) -> &str {
        "1 point per character in the retailer name"
    }

    fn points(&self, receipt: &Receipt) -> u64 {
        receipt.retailer.chars().count() as u64
    }
}
