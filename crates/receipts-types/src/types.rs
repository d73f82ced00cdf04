use serde::{Deserialize, Serialize};

use crate::fields::{day_of_month, hour_of_day, parse_amount};
use rust_decimal::Decimal;

/// A purchase receipt as submitted by a client.
///
/// All fields are kept exactly as received. Amounts, dates and times stay in
/// their textual form because some scoring rules look at the literal text
/// (for example the `.00` suffix check on the total).
///
/// Missing fields decode to their empty defaults; a receipt is never rejected
/// for being incomplete, it simply earns fewer points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    /// Retailer or store name
    pub retailer: String,
    /// Purchase date as `YYYY-MM-DD`
    pub purchase_date: String,
    /// Purchase time as 24-hour `HH:MM`
    pub purchase_time: String,
    /// Line items in the order they were submitted
    pub items: Vec<Item>,
    /// Total amount paid as a decimal string, e.g. `"35.35"`
    pub total: String,
}

/// One line entry on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// Short product description
    pub short_description: String,
    /// Price paid for the item as a decimal string
    pub price: String,
}

impl Receipt {
    /// The total as an exact decimal, or `None` when the text is malformed.
    pub fn total_amount(&self) -> Option<Decimal> {
        parse_amount(&self.total)
    }

    /// Day of the month from the purchase date, or `None` when malformed.
    pub fn purchase_day(&self) -> Option<u32> {
        day_of_month(&self.purchase_date)
    }

    /// Hour of the day from the purchase time, or `None` when malformed.
    pub fn purchase_hour(&self) -> Option<u32> {
        hour_of_day(&self.purchase_time)
    }
}

impl Item {
    /// Creates an item from a description and price text.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self { short_description: short_description.into(), price: price.into() }
    }

    /// The price as an exact decimal, or `None` when the text is malformed.
    pub fn price_amount(&self) -> Option<Decimal> {
        parse_amount(&self.price)
    }

    /// Description with leading and trailing whitespace removed.
    pub fn trimmed_description(&self) -> &str {
        self.short_description.trim()
    }
}
