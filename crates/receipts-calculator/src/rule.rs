use receipts_types::Receipt;

/// A single additive loyalty rule.
///
/// Rules are stateless and thread-safe. They never fail: a field that cannot
/// be parsed makes the rule return `0`.
pub trait PointsRule: Send + Sync {
    /// Stable identifier used in breakdowns and lookups.
    fn name(&self) -> &str;

    /// Human readable summary of what the rule rewards.
    fn description(&self) -> &str;

    /// Points this rule awards for the receipt.
    fn points(&self, receipt: &Receipt) -> u64;
}
