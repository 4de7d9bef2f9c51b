//! Rules and the two combination strategies

use std::fmt;

use crate::models::{Annotated, InsightResult};

/// Boxed row predicate; captures its thresholds
pub type Predicate<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

/// A single (predicate, message) pair
pub struct Rule<R> {
    key: &'static str,
    message: String,
    predicate: Predicate<R>,
}

impl<R> Rule<R> {
    pub fn new(
        key: &'static str,
        message: impl Into<String>,
        predicate: impl Fn(&R) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            message: message.into(),
            predicate: Box::new(predicate),
        }
    }

    /// Stable identifier (e.g. "debt_ratio_high")
    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn matches(&self, row: &R) -> bool {
        (self.predicate)(row)
    }
}

impl<R> fmt::Debug for Rule<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("key", &self.key)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Maps a row to an insight
pub trait Classifier<R>: Send + Sync {
    /// Evaluate the rules against one row
    fn evaluate(&self, row: &R) -> InsightResult;

    /// Status text only
    fn classify(&self, row: &R) -> String {
        self.evaluate(row).status
    }

    /// Attach a status column to every row, preserving order
    fn annotate(&self, rows: &[R]) -> Vec<Annotated<R>>
    where
        R: Clone,
    {
        rows.iter()
            .map(|row| Annotated {
                row: row.clone(),
                insight: self.classify(row),
            })
            .collect()
    }
}

/// First satisfied rule wins; `fallback` when none match
#[derive(Debug)]
pub struct FirstMatch<R> {
    rules: Vec<Rule<R>>,
    fallback: String,
}

impl<R> FirstMatch<R> {
    pub fn new(rules: Vec<Rule<R>>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    pub fn rules(&self) -> &[Rule<R>] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl<R> Classifier<R> for FirstMatch<R> {
    fn evaluate(&self, row: &R) -> InsightResult {
        match self.rules.iter().find(|rule| rule.matches(row)) {
            Some(rule) => InsightResult {
                status: rule.message.clone(),
                triggered: vec![rule.key.to_string()],
            },
            None => InsightResult {
                status: self.fallback.clone(),
                triggered: vec![],
            },
        }
    }
}

/// Every satisfied rule contributes; `sentinel` when none match
#[derive(Debug)]
pub struct Accumulate<R> {
    rules: Vec<Rule<R>>,
    sentinel: String,
    separator: String,
}

impl<R> Accumulate<R> {
    pub fn new(
        rules: Vec<Rule<R>>,
        sentinel: impl Into<String>,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            rules,
            sentinel: sentinel.into(),
            separator: separator.into(),
        }
    }

    pub fn rules(&self) -> &[Rule<R>] {
        &self.rules
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl<R> Classifier<R> for Accumulate<R> {
    fn evaluate(&self, row: &R) -> InsightResult {
        let fired: Vec<&Rule<R>> = self.rules.iter().filter(|rule| rule.matches(row)).collect();

        if fired.is_empty() {
            return InsightResult {
                status: self.sentinel.clone(),
                triggered: vec![],
            };
        }

        let status = fired
            .iter()
            .map(|rule| rule.message.as_str())
            .collect::<Vec<_>>()
            .join(self.separator.as_str());

        InsightResult {
            status,
            triggered: fired.iter().map(|rule| rule.key.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Rule<i32> {
        Rule::new("small", "small", |n: &i32| *n < 10)
    }

    fn even() -> Rule<i32> {
        Rule::new("even", "even", |n: &i32| n % 2 == 0)
    }

    #[test]
    fn test_rule_accessors() {
        let rule = small();
        assert_eq!(rule.key(), "small");
        assert_eq!(rule.message(), "small");
        assert!(rule.matches(&3));
        assert!(!rule.matches(&30));
        assert!(format!("{:?}", rule).contains("small"));
    }

    #[test]
    fn test_first_match_takes_first_rule_only() {
        let classifier = FirstMatch::new(vec![small(), even()], "other");

        let result = classifier.evaluate(&4);
        assert_eq!(result.status, "small");
        assert_eq!(result.triggered, vec!["small"]);

        assert_eq!(classifier.classify(&12), "even");
    }

    #[test]
    fn test_first_match_fallback() {
        let classifier = FirstMatch::new(vec![small(), even()], "other");
        let result = classifier.evaluate(&13);
        assert_eq!(result.status, "other");
        assert!(result.triggered.is_empty());
    }

    #[test]
    fn test_accumulate_joins_in_rule_order() {
        let classifier = Accumulate::new(vec![small(), even()], "none", " | ");
        let result = classifier.evaluate(&4);
        assert_eq!(result.status, "small | even");
        assert_eq!(result.triggered, vec!["small", "even"]);

        // Order follows the rule list, not which predicate is "stronger"
        let reversed = Accumulate::new(vec![even(), small()], "none", " | ");
        assert_eq!(reversed.classify(&4), "even | small");
    }

    #[test]
    fn test_accumulate_sentinel() {
        let classifier = Accumulate::new(vec![small(), even()], "none", " | ");
        let result = classifier.evaluate(&13);
        assert_eq!(result.status, "none");
        assert!(result.triggered.is_empty());
    }

    #[test]
    fn test_empty_rule_lists() {
        let first: FirstMatch<i32> = FirstMatch::new(vec![], "fallback");
        assert_eq!(first.classify(&1), "fallback");

        let acc: Accumulate<i32> = Accumulate::new(vec![], "sentinel", ", ");
        assert_eq!(acc.classify(&1), "sentinel");
    }

    #[test]
    fn test_annotate_preserves_order_and_duplicates() {
        let classifier = FirstMatch::new(vec![small()], "big");
        let annotated = classifier.annotate(&[20, 1, 20]);
        let rows: Vec<i32> = annotated.iter().map(|a| a.row).collect();
        let insights: Vec<&str> = annotated.iter().map(|a| a.insight.as_str()).collect();
        assert_eq!(rows, vec![20, 1, 20]);
        assert_eq!(insights, vec!["big", "small", "big"]);
    }
}
