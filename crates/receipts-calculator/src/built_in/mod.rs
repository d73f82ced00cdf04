//! Built-in loyalty rules provided by the points engine.

// Retailer rules
pub mod retailer_name;

// Total amount rules
pub mod quarter_multiple_total;
pub mod round_dollar_total;
pub mod total_threshold;

// Item rules
pub mod description_length;
pub mod item_pairs;

// Date & time rules
pub mod afternoon_window;
pub mod odd_purchase_day;
