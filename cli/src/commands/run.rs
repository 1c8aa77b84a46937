//! # cbrs Run Handler
//!
//! File: cli/src/commands/run.rs
//!
//! ## Overview
//!
//! This module implements `cbrs run`, which pushes the given program and
//! arguments into a `Cmd`, launches it and waits for it to finish.
//!
//! ## Architecture
//!
//! 1. Load the configuration (base capacity, quoting policy).
//! 2. `--verbatim` overrides the configured quoting policy.
//! 3. Push every argument, then call `process::try_run_sync`.
//! 4. Any failure (spawn, wait, non-zero exit, signal) becomes an error. It is
//!    not logged here; main.rs reports it once before exiting with status 1.
//!
//! ## Usage
//!
//! ```bash
//! # Runs `true`, logging the command line first
//! cbrs run true
//!
//! # Pass arguments through without quoting
//! cbrs run --verbatim cc -o main main.c
//! ```
//!
use anyhow::Context;
use cbrs::common::command::{Cmd, QuotePolicy};
use cbrs::common::process;
use cbrs::core::config;
use cbrs::core::error::Result;
use clap::Parser;
use tracing::debug;

/// # Run Arguments (`RunArgs`)
///
/// Arguments accepted by `cbrs run`.
#[derive(Parser, Debug)]
#[command(about = "Build a command from the given arguments and run it to completion")]
pub struct RunArgs {
    /// Store arguments exactly as given instead of quoting unsafe ones.
    #[arg(long)]
    verbatim: bool,

    /// The program to execute followed by its arguments.
    #[arg(
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "PROGRAM"
    )]
    command: Vec<String>,
}

/// # Handle Run Command (`handle_run`)
///
/// Builds the command and runs it synchronously.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` if the child exited with code 0, otherwise the
///   underlying `CbError` with the rendered command line as context.
pub fn handle_run(args: RunArgs) -> Result<()> {
    let cfg = config::load_config()?;
    let policy = if args.verbatim {
        QuotePolicy::Verbatim
    } else {
        cfg.quote_policy()
    };
    debug!(
        "Running with policy {:?}, base capacity {}",
        policy, cfg.buffer.base_capacity
    );

    let mut cmd = Cmd::with_options(policy, cfg.buffer.base_capacity);
    cmd.push_args(args.command.iter().map(String::as_str));
    let rendered = cmd.render();

    process::try_run_sync(&mut cmd).with_context(|| format!("Command failed: {}", rendered))
}
