//! # cbrs Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the subcommands of the `cbrs` binary. Each one
//! defines its own `clap` arguments struct and a `handle_*` function that
//! main.rs routes to.
//!
//! ## Command Groups
//!
//! - `run`: Build a command from the given arguments and run it synchronously
//! - `render`: Show how arguments would be stored and rendered, without spawning
//!

/// Builds and runs a command, waiting for it to finish.
pub mod run;
/// Prints the stored arguments and the rendered command line.
pub mod render;
