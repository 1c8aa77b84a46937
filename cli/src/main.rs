//! # cbrs Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `cbrs` binary.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the subcommand handlers
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! cbrs --help
//!
//! # Run a command, with debug logging
//! cbrs -v run true
//!
//! # Inspect how arguments would be quoted
//! cbrs render cc -o main main.c
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level (or `RUST_LOG`)
//! 3. Route to the subcommand handler
//! 4. Report any error as a single log line and exit with status 1
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "cbrs",
    about = "Build and run external commands without a shell",
    long_about = "Assemble argv-style commands, run them with fork/exec and report\n\
                  how they ended. Meant to be called from build scripts.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "r")]
    Run(commands::run::RunArgs),
    Render(commands::render::RenderArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Launch lines are emitted at info level, so that is the default.
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Run(args) => commands::run::handle_run(args),
        Commands::Render(args) => commands::render::handle_render(args),
    };

    // Handlers return failures unlogged; this is the one line reporting them.
    if let Err(e) = command_result {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
