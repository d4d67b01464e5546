// src/patterns/mod.rs

//! Built-in patterns the binary registers.
//!
//! - `foo`: prints `foo`.
//! - `adapter`: see [`adapter`].
//! - `singleton`: see [`singleton`].

pub mod adapter;
pub mod singleton;

use std::sync::Arc;

use crate::errors::Result;
use crate::operator::{Pattern, PatternOperator};
use singleton::{ChannelOperator, InstanceCell};

pub const FOO: &str = "foo";
pub const ADAPTER: &str = "adapter";
pub const SINGLETON: &str = "singleton";

/// Labels handed to the operator as its recognized kinds.
pub const KINDS: [&str; 3] = [FOO, ADAPTER, SINGLETON];

/// Register every built-in pattern on `operator`.
///
/// `channels` is the shared instance the `singleton` pattern reads from.
pub fn register_builtin(
    operator: &mut PatternOperator,
    channels: Arc<InstanceCell<ChannelOperator>>,
) -> Result<()> {
    operator.add_pattern(Pattern::new(FOO, || {
        println!("foo");
        Ok(())
    }))?;
    operator.add_pattern(Pattern::new(ADAPTER, adapter::run_adapter))?;
    operator.add_pattern(Pattern::new(SINGLETON, move || {
        singleton::run_singleton(&channels)
    }))?;
    Ok(())
}
