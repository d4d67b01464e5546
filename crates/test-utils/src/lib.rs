//! Shared helpers for the `patterns` integration tests.

pub mod builders;
pub mod fakes;

use std::sync::Once;

use tracing::{Span, info_span};
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// Output goes through `with_test_writer()`, so the harness only shows it for
/// failing tests (or with `-- --nocapture`). Filter with `RUST_LOG`, e.g.
/// `RUST_LOG=patterns=trace cargo test`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        // A subscriber may already be installed for this test binary.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// Span to hand to a `PatternOperator` under test, tagged with `test`.
pub fn test_span(test: &str) -> Span {
    info_span!("operator", test)
}
