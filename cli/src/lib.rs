//! # cbrs
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! `cbrs` assembles and runs external commands for build scripts without a
//! build system or a shell. A `Cmd` collects arguments (quoting the ones that
//! contain unsafe characters), the runner forks and `execvp`s it, and the
//! wait/reap step turns the child's exit status into success or failure.
//!
//! ```rust,no_run
//! use cbrs::common::command::Cmd;
//! use cbrs::common::process;
//!
//! let mut cmd = Cmd::new();
//! cmd.push_args(["cc", "-c", "main.c"]);
//! assert!(process::run_sync(&mut cmd));
//! ```
//!
//! POSIX only.
//!

#[cfg(not(unix))]
compile_error!("cbrs relies on fork/exec/waitpid and only supports Unix-like systems.");

/// Shared building blocks: buffer, validator, command builder, process runner.
pub mod common;
/// Core infrastructure: configuration and error types.
pub mod core;

pub use crate::common::buffer::{GrowableBuffer, DEFAULT_BASE_CAPACITY};
pub use crate::common::command::{Cmd, QuotePolicy};
pub use crate::common::process::{launch, run_sync, try_run_sync, wait, ProcessHandle, Termination};
pub use crate::common::validate::is_safe;
pub use crate::core::error::CbError;
