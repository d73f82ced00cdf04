use crate::built_in::{
    afternoon_window::AfternoonWindowRule, description_length::DescriptionLengthRule,
    item_pairs::ItemPairsRule, odd_purchase_day::OddPurchaseDayRule,
    quarter_multiple_total::QuarterMultipleTotalRule, retailer_name::RetailerNameRule,
    round_dollar_total::RoundDollarTotalRule, total_threshold::TotalThresholdRule,
};
use crate::registry::RuleRegistry;
use crate::rule::PointsRule;
use anyhow::{Result, anyhow};
use receipts_types::Receipt;
use serde::Serialize;

/// Points awarded by one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleContribution {
    /// Rule name
    pub rule: String,
    /// Points the rule awarded
    pub points: u64,
}

/// Per-rule contributions and their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    /// One entry per rule, in registration order
    pub contributions: Vec<RuleContribution>,
    /// Sum of all contributions, saturating at `u64::MAX`
    pub total: u64,
}

impl PointsBreakdown {
    /// Points awarded by the named rule, if it took part.
    pub fn points_for(&self, rule: &str) -> Option<u64> {
        self.contributions.iter().find(|c| c.rule == rule).map(|c| c.points)
    }
}

/// Sums a set of `PointsRule`s over a receipt.
pub struct PointsCalculator {
    registry: RuleRegistry,
}

impl Default for PointsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl PointsCalculator {
    /// Creates a calculator with every built-in rule registered.
    pub fn new() -> Self {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(RetailerNameRule));
        registry.register(Box::new(RoundDollarTotalRule));
        registry.register(Box::new(QuarterMultipleTotalRule));
        registry.register(Box::new(ItemPairsRule));
        registry.register(Box::new(DescriptionLengthRule));
        registry.register(Box::new(TotalThresholdRule));
        registry.register(Box::new(OddPurchaseDayRule));
        registry.register(Box::new(AfternoonWindowRule));
        Self { registry }
    }

    /// Creates a calculator over a caller-supplied registry.
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Adds or replaces a rule.
    pub fn register(&mut self, rule: Box<dyn PointsRule>) {
        self.registry.register(rule);
    }

    /// Total points for the receipt, saturating at `u64::MAX`.
    pub fn score(&self, receipt: &Receipt) -> u64 {
        self.registry.iter().map(|rule| rule.points(receipt)).fold(0, u64::saturating_add)
    }

    /// Per-rule contributions in registration order.
    pub fn breakdown(&self, receipt: &Receipt) -> PointsBreakdown {
        let contributions: Vec<RuleContribution> = self
            .registry
            .iter()
            .map(|rule| RuleContribution { rule: rule.name().to_string(), points: rule.points(receipt) })
            .collect();
        let total = contributions.iter().map(|c| c.points).fold(0, u64::saturating_add);
        PointsBreakdown { contributions, total }
    }

    /// Points awarded by a single named rule.
    pub fn points_for(&self, rule_name: &str, receipt: &Receipt) -> Result<u64> {
        self.registry
            .get(rule_name)
            .map(|rule| rule.points(receipt))
            .ok_or_else(|| anyhow!("rule '{rule_name}' not found"))
    }

    /// `(name, description)` for every registered rule.
    pub fn rules(&self) -> Vec<(&str, &str)> {
        self.registry.iter().map(|rule| (rule.name(), rule.description())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipts_types::Item;

    fn target_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            total: "35.35".to_string(),
        }
    }

    #[test]
    fn test_builtin_rules_are_registered_in_order() {
        let calculator = PointsCalculator::new();
        let names: Vec<&str> = calculator.rules().into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                "retailer_name",
                "round_dollar_total",
                "quarter_multiple_total",
                "item_pairs",
                "description_length",
                "total_threshold",
                "odd_purchase_day",
                "afternoon_window",
            ]
        );
    }

    #[test]
    fn test_target_breakdown() {
        let breakdown = PointsCalculator::new().breakdown(&target_receipt());

        assert_eq!(breakdown.points_for("retailer_name"), Some(6));
        assert_eq!(breakdown.points_for("round_dollar_total"), Some(0));
        assert_eq!(breakdown.points_for("quarter_multiple_total"), Some(0));
        assert_eq!(breakdown.points_for("item_pairs"), Some(10));
        // Emils Cheese Pizza (3) + Klarbrunn (3)
        assert_eq!(breakdown.points_for("description_length"), Some(6));
        assert_eq!(breakdown.points_for("total_threshold"), Some(5));
        assert_eq!(breakdown.points_for("odd_purchase_day"), Some(6));
        assert_eq!(breakdown.points_for("afternoon_window"), Some(0));
        assert_eq!(breakdown.total, 33);
    }

    #[test]
    fn test_score_matches_breakdown_total() {
        let calculator = PointsCalculator::new();
        let receipt = target_receipt();
        assert_eq!(calculator.score(&receipt), calculator.breakdown(&receipt).total);
        assert_eq!(crate::calculate_points(&receipt), 33);
    }

    #[test]
    fn test_empty_receipt_scores_zero() {
        let breakdown = PointsCalculator::new().breakdown(&Receipt::default());
        assert_eq!(breakdown.total, 0);
    }

    #[test]
    fn test_points_for_single_rule() {
        let calculator = PointsCalculator::new();
        assert_eq!(calculator.points_for("retailer_name", &target_receipt()).unwrap(), 6);
    }

    #[test]
    fn test_points_for_unknown_rule() {
        let calculator = PointsCalculator::new();
        let err = calculator.points_for("weekend_bonus", &target_receipt()).unwrap_err();
        assert!(err.to_string().contains("weekend_bonus"));
    }

    #[test]
    fn test_custom_registry() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(RetailerNameRule));
        let calculator = PointsCalculator::with_registry(registry);
        assert_eq!(calculator.score(&target_receipt()), 6);
    }
}
