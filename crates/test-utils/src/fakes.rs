use std::fmt;
use std::sync::{Arc, Mutex};

use patterns::operator::Pattern;

/// Shared record of which operations ran, in order.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, label: &str) {
        self.calls.lock().unwrap().push(label.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, label: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| c.as_str() == label).count()
    }
}

/// Error type used by failing fakes, so tests can downcast and compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeFailure(pub String);

impl fmt::Display for FakeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fake failure: {}", self.0)
    }
}

impl std::error::Error for FakeFailure {}

/// A pattern named `name` that records `label` in `log` and succeeds.
pub fn recording_pattern(name: &str, label: &str, log: &CallLog) -> Pattern {
    let log = log.clone();
    let label = label.to_string();
    Pattern::new(name, move || {
        log.record(&label);
        Ok(())
    })
}

/// A pattern named `name` that records `name` in `log` and fails with
/// `FakeFailure(message)`.
pub fn failing_pattern(name: &str, message: &str, log: &CallLog) -> Pattern {
    let log = log.clone();
    let label = name.to_string();
    let message = message.to_string();
    Pattern::new(name, move || {
        log.record(&label);
        Err(anyhow::Error::new(FakeFailure(message.clone())))
    })
}
