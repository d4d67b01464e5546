// src/operator/mod.rs

//! Pattern registry and dispatch.
//!
//! - [`pattern`] defines the [`Runnable`] capability and the closure-backed
//!   [`Pattern`] unit.
//! - [`registry`] holds the [`PatternOperator`] that registers, removes and
//!   runs patterns by name.

pub mod pattern;
pub mod registry;

pub use pattern::{Operation, Pattern, Runnable};
pub use registry::PatternOperator;
