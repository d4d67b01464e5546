#![allow(dead_code)]

use patterns::operator::{Pattern, PatternOperator};

use crate::fakes::{CallLog, recording_pattern};
use crate::test_span;

/// Builder for `PatternOperator` to simplify test setup.
pub struct OperatorBuilder {
    kinds: Vec<String>,
    patterns: Vec<Pattern>,
}

impl OperatorBuilder {
    pub fn new() -> Self {
        Self {
            kinds: vec![],
            patterns: vec![],
        }
    }

    pub fn with_kind(mut self, kind: &str) -> Self {
        self.kinds.push(kind.to_string());
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    /// Add a pattern that records its own name in `log` when run.
    pub fn with_recorded(self, name: &str, log: &CallLog) -> Self {
        self.with_pattern(recording_pattern(name, name, log))
    }

    pub fn build(self) -> PatternOperator {
        let mut operator = PatternOperator::new(self.kinds, test_span("builder"));
        for pattern in self.patterns {
            operator
                .add_pattern(pattern)
                .expect("Failed to register pattern from builder");
        }
        operator
    }
}

impl Default for OperatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
