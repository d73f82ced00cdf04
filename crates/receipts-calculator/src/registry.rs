use crate::rule::PointsRule;

/// Ordered collection of rules, addressable by name.
pub struct RuleRegistry {
    rules: Vec<Box<dyn PointsRule>>,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a rule. A rule with the same name is replaced in place, keeping
    /// its original position.
    pub fn register(&mut self, rule: Box<dyn PointsRule>) {
        match self.rules.iter().position(|r| r.name() == rule.name()) {
            Some(index) => self.rules[index] = rule,
            None => self.rules.push(rule),
        }
    }

    /// Looks up a rule by name.
    pub fn get(&self, name: &str) -> Option<&dyn PointsRule> {
        self.rules.iter().find(|r| r.name() == name).map(|r| r.as_ref())
    }

    /// Iterates rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn PointsRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
