//! Description Length Rule
//!
//! For every item whose trimmed description length is a multiple of 3, the
//! price is multiplied by 0.2 and rounded up. An empty description has length
//! 0 and therefore qualifies.
//!
//! Items with an unparseable or negative price contribute nothing. Awards too
//! large for a `u64` saturate at `u64::MAX`.

use crate::PointsRule;
use receipts_types::{Decimal, Item, Receipt};
use rust_decimal::prelude::ToPrimitive;

#[derive(Debug, Default)]
pub struct DescriptionLengthRule;

impl DescriptionLengthRule {
    fn item_points(item: &Item) -> u64 {
        if item.trimmed_description().chars().count() % 3 != 0 {
            return 0;
        }
        let rate = Decimal::new(2, 1);
        match item.price_amount().and_then(|price| price.checked_mul(rate)) {
            Some(points) if !points.is_sign_negative() => {
                points.ceil().to_u64().unwrap_or(u64::MAX)
            }
            _ => 0,
        }
    }
}

impl PointsRule for DescriptionLengthRule {
    fn name(&self) -> &str {
        "description_length"
    }

    fn description(&self) -> &str {
        "ceil(price * 0.2) for each item whose trimmed description length is a multiple of 3"
    }

    fn points(&self, receipt: &Receipt) -> u64 {
        receipt.items.iter().map(Self::item_points).fold(0, u64::saturating_add)
    }
}
