// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod operator;
pub mod patterns;

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span};

use crate::cli::CliArgs;
use crate::config::{pattern_from_env, resolve_pattern};
use crate::operator::PatternOperator;
use crate::patterns::singleton::{ChannelOperator, InstanceCell};

/// High-level entry point used by `main.rs`.
///
/// Reads the `PATTERN` override from the process environment and writes any
/// listing to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let env = pattern_from_env();
    let stdout = std::io::stdout();
    run_with_env(&args, env.as_deref(), &mut stdout.lock())
}

/// Same as [`run`], with the environment override and output passed in.
///
/// This wires together:
/// - pattern name resolution (flag vs. environment)
/// - the operator and its built-in patterns
/// - dispatch, and best-effort removal of the pattern afterwards
pub fn run_with_env(
    args: &CliArgs,
    env_pattern: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let channels = Arc::new(InstanceCell::new());
    let mut operator = build_operator(channels)?;

    if args.list {
        print_listing(&operator, out)?;
        return Ok(());
    }

    let name = resolve_pattern(&args.pattern, env_pattern);
    info!(pattern = %name, "dispatching pattern");

    // Failures are reported once, by `main`.
    operator.run(&name)?;

    // Cleanup only; a missing entry here is not worth reporting.
    let _ = operator.remove_pattern(&name);
    Ok(())
}

/// Operator with every built-in pattern registered.
///
/// `channels` is the single shared instance behind the `singleton` pattern.
pub fn build_operator(
    channels: Arc<InstanceCell<ChannelOperator>>,
) -> errors::Result<PatternOperator> {
    let span = info_span!("operator");
    let mut operator = PatternOperator::new(patterns::KINDS, span);
    patterns::register_builtin(&mut operator, channels)?;
    Ok(operator)
}

/// Simple `--list` output: kinds and registered pattern names.
fn print_listing(operator: &PatternOperator, out: &mut impl Write) -> Result<()> {
    writeln!(out, "kinds: {}", operator.kinds().join(", "))?;
    writeln!(out, "patterns ({}):", operator.len())?;
    for name in operator.names() {
        writeln!(out, "  - {name}")?;
    }
    Ok(())
}
