// tests/pattern_run.rs

use patterns::errors::PatternError;
use patterns::operator::{Pattern, Runnable};
use patterns_test_utils::fakes::{CallLog, FakeFailure, failing_pattern, recording_pattern};

#[test]
fn test_run_valid_pattern_succeeds() {
    let log = CallLog::new();
    let pattern = recording_pattern("test", "test", &log);

    pattern.run().expect("pattern should run");
    assert_eq!(log.calls(), vec!["test".to_string()]);
}

#[test]
fn test_run_without_operation_fails() {
    let pattern = Pattern::without_operation("test");

    assert!(!pattern.has_operation());
    match pattern.run() {
        Err(PatternError::MissingOperation) => {}
        other => panic!("expected MissingOperation, got: {:?}", other),
    }
}

#[test]
fn test_run_returns_operation_error_unchanged() {
    let log = CallLog::new();
    let pattern = failing_pattern("broken", "disk on fire", &log);

    let err = pattern.run().expect_err("pattern should fail");
    let inner = err.operation_error().expect("expected operation error");
    assert_eq!(
        inner.downcast_ref::<FakeFailure>(),
        Some(&FakeFailure("disk on fire".to_string()))
    );
    assert_eq!(err.to_string(), "fake failure: disk on fire");
    assert_eq!(log.count("broken"), 1);
}

#[test]
fn test_new_pattern_keeps_name_and_operation() {
    let pattern = Pattern::new("testPattern", || Ok(()));

    assert_eq!(pattern.name(), "testPattern");
    assert!(pattern.has_operation());
}

#[test]
fn test_empty_name_is_allowed_at_construction() {
    let pattern = Pattern::new("", || Ok(()));

    assert_eq!(pattern.name(), "");
    assert!(pattern.run().is_ok());
}
