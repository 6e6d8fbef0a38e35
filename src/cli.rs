// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `prodplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "prodplan",
    version,
    about = "Compute a production sequence that respects order dependencies.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the orders file (TOML).
    ///
    /// Default: `Orders.toml` in the current working directory.
    #[arg(long, value_name = "PATH")]
    pub orders: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PRODPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the orders, but don't compute a plan.
    #[arg(long)]
    pub dry_run: bool,

    /// Print each planned order with its duration, plus the total.
    #[arg(long)]
    pub durations: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
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
