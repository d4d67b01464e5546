// tests/property_registry.rs

use std::collections::HashSet;

use patterns::errors::PatternError;
use patterns::operator::{Pattern, PatternOperator};
use patterns_test_utils::fakes::{CallLog, recording_pattern};
use proptest::prelude::*;
use tracing::Span;

/// Registry commands to replay against an operator and a model set.
#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Remove(String),
    Run(String),
}

fn name_strategy() -> impl Strategy<Value = String> {
    // Small alphabet so names collide often.
    "[a-d]{0,2}"
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        name_strategy().prop_map(Op::Add),
        name_strategy().prop_map(Op::Remove),
        name_strategy().prop_map(Op::Run),
    ]
}

proptest! {
    #[test]
    fn test_valid_pattern_registers_and_exists(name in "[a-z][a-z0-9_]{0,15}") {
        let mut operator = PatternOperator::new(Vec::<String>::new(), Span::none());

        prop_assert!(operator.add_pattern(Pattern::new(name.clone(), || Ok(()))).is_ok());
        prop_assert!(operator.pattern_exists(&name));
    }

    #[test]
    fn test_empty_name_always_invalid(with_op in any::<bool>()) {
        let mut operator = PatternOperator::new(Vec::<String>::new(), Span::none());
        let pattern = if with_op {
            Pattern::new("", || Ok(()))
        } else {
            Pattern::without_operation("")
        };

        prop_assert!(matches!(operator.add_pattern(pattern), Err(PatternError::InvalidName)));
        prop_assert!(operator.is_empty());
    }

    #[test]
    fn test_missing_operation_always_rejected(name in "[a-z]{1,12}") {
        let mut operator = PatternOperator::new(Vec::<String>::new(), Span::none());

        prop_assert!(matches!(
            operator.add_pattern(Pattern::without_operation(name.clone())),
            Err(PatternError::MissingOperation)
        ));
        prop_assert!(!operator.pattern_exists(&name));
    }

    #[test]
    fn test_operator_matches_set_model(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let log = CallLog::new();
        let mut operator = PatternOperator::new(Vec::<String>::new(), Span::none());
        let mut model: HashSet<String> = HashSet::new();
        let mut expected_runs = 0usize;

        for op in ops {
            match op {
                Op::Add(name) => {
                    let result = operator.add_pattern(recording_pattern(&name, &name, &log));
                    if name.is_empty() {
                        prop_assert!(matches!(result, Err(PatternError::InvalidName)));
                    } else {
                        prop_assert!(result.is_ok());
                        model.insert(name);
                    }
                }
                Op::Remove(name) => {
                    let result = operator.remove_pattern(&name);
                    if model.remove(&name) {
                        prop_assert!(result.is_ok());
                    } else {
                        prop_assert!(matches!(result, Err(PatternError::NotFound(_))));
                    }
                }
                Op::Run(name) => {
                    let result = operator.run(&name);
                    if model.contains(&name) {
                        prop_assert!(result.is_ok());
                        expected_runs += 1;
                    } else {
                        prop_assert!(matches!(result, Err(PatternError::NotFound(_))));
                    }
                }
            }

            prop_assert_eq!(operator.len(), model.len());
            for name in &model {
                prop_assert!(operator.pattern_exists(name));
            }
        }

        prop_assert_eq!(log.calls().len(), expected_runs);
    }
}
