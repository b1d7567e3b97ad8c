//! Spending rules - expense-type multipliers over an income figure
//!
//! A lookup table of expense type -> multiplier. New expense types are
//! added by inserting a rule; `calculate` never changes.

use std::collections::HashMap;

/// Fraction of income a spending rule allocates.
pub type Multiplier = f64;

/// Case-insensitive table of spending rules.
#[derive(Debug, Clone, Default)]
pub struct SpendingPlan {
    rules: HashMap<String, Multiplier>,
}

impl SpendingPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock rule set: tithe 10%, game 30%, clothing 40%.
    pub fn with_defaults() -> Self {
        let mut plan = Self::new();
        plan.set_rule("tithe", 0.1);
        plan.set_rule("game", 0.3);
        plan.set_rule("clothing", 0.4);
        plan
    }

    /// Insert or replace a rule. Keys are stored lower-cased.
    pub fn set_rule(&mut self, expense_type: &str, multiplier: Multiplier) {
        self.rules.insert(expense_type.to_lowercase(), multiplier);
    }

    /// Allocation for `expense_type` out of `income`. Unknown types pass
    /// the income through unchanged.
    pub fn calculate(&self, expense_type: &str, income: f64) -> f64 {
        match self.rules.get(&expense_type.to_lowercase()) {
            Some(multiplier) => income * multiplier,
            None => income,
        }
    }

    /// Rule keys, sorted for stable output.
    pub fn expense_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let plan = SpendingPlan::with_defaults();
        assert!((plan.calculate("tithe", 1000.0) - 100.0).abs() < f64::EPSILON);
        assert!((plan.calculate("game", 1000.0) - 300.0).abs() < f64::EPSILON);
        assert!((plan.calculate("clothing", 1000.0) - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_expense_type_passes_income_through() {
        let plan = SpendingPlan::with_defaults();
        assert!((plan.calculate("rent", 1000.0) - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let plan = SpendingPlan::with_defaults();
        assert!((plan.calculate("TITHE", 1000.0) - 100.0).abs() < f64::EPSILON);
        assert!((plan.calculate("Game", 1000.0) - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_rule_extends_without_touching_calculate() {
        let mut plan = SpendingPlan::with_defaults();
        plan.set_rule("savings", 0.2);
        assert!((plan.calculate("savings", 500.0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_expense_types_sorted() {
        let plan = SpendingPlan::with_defaults();
        assert_eq!(plan.expense_types(), vec!["clothing", "game", "tithe"]);
    }
}
