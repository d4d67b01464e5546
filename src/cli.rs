// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `patterns`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "patterns",
    version,
    about = "Run a named design-pattern example.",
    long_about = None
)]
pub struct CliArgs {
    /// Name of the pattern to run.
    ///
    /// A non-empty `PATTERN` environment variable takes precedence.
    #[arg(long, value_name = "NAME", default_value = "")]
    pub pattern: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PATTERNS_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the registered patterns and exit without running anything.
    #[arg(long)]
    pub list: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
