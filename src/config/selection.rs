// src/config/selection.rs

use tracing::debug;

/// Environment variable that overrides `--pattern`.
pub const PATTERN_ENV: &str = "PATTERN";

/// Pick the pattern name to dispatch.
///
/// A non-empty environment value wins over the flag. An empty or missing
/// environment value leaves the flag in charge, even if the flag is empty.
pub fn resolve_pattern(flag: &str, env: Option<&str>) -> String {
    match env {
        Some(value) if !value.is_empty() => {
            debug!(env = PATTERN_ENV, value, "environment overrides --pattern");
            value.to_string()
        }
        _ => flag.to_string(),
    }
}

/// Read [`PATTERN_ENV`] from the process environment.
///
/// Values that are not valid unicode are treated as unset.
pub fn pattern_from_env() -> Option<String> {
    std::env::var(PATTERN_ENV).ok()
}
