//! # cbrs Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each `.rs` file
//! in that directory is compiled as its own test crate and pulls this module
//! in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get cbrs Command (`cbrs_cmd`)
///
/// Creates an `assert_cmd::Command` pointing to the compiled `cbrs` binary.
///
/// ## Panics
/// Panics if the `cbrs` binary cannot be found via `Command::cargo_bin`.
pub fn cbrs_cmd() -> Command {
    Command::cargo_bin("cbrs").expect("Failed to find cbrs binary for testing")
}

/// # Get Isolated cbrs Command (`cbrs_cmd_in`)
///
/// Like `cbrs_cmd`, but runs inside `dir` with the user configuration
/// directory pointed at `dir` as well, so only configuration files the test
/// writes there are picked up. `RUST_LOG` is cleared so the default log level
/// applies.
pub fn cbrs_cmd_in(dir: &Path) -> Command {
    let mut cmd = cbrs_cmd();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir)
        .env_remove("RUST_LOG");
    cmd
}
