//! Receipts Types
//!
//! This crate defines the value objects shared across the receipt processor
//! workspace (currently `receipts-calculator` and `receipts-api`). It keeps the
//! wire representation of a receipt in one place so the scoring engine and the
//! HTTP layer agree on field names.

#![warn(missing_docs)]

mod fields;
mod types;

pub use fields::{day_of_month, hour_of_day, parse_amount};
pub use types::{Item, Receipt};

// Re-exported so downstream crates can name amounts without a direct dependency.
pub use rust_decimal::Decimal;
