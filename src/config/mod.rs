// src/config/mod.rs

//! Driver configuration: which pattern to run.
//!
//! There is exactly one setting, the pattern name. It comes from the
//! `--pattern` flag and can be overridden by the [`PATTERN_ENV`] variable.

pub mod selection;

pub use selection::{PATTERN_ENV, pattern_from_env, resolve_pattern};
