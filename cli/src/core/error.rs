//! # cbrs Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used by the command builder, the
//! process runner and the configuration layer. Recoverable failures (spawn,
//! wait, abnormal termination, bad configuration) are reported through
//! `CbError`; allocation failure in the growable buffers is not an error value
//! at all, it aborts the process (see `common::buffer`).
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `CbError`: A custom error enum using `thiserror` for the specific failure kinds
//! - `Result<T>`: A type alias for `anyhow::Result<T>` used by the CLI layer
//!
//! The error kinds cover:
//! - Spawn failures (fork refused, empty command, argument with an interior NUL)
//! - Wait failures (the `waitpid` call itself failed)
//! - Unsuccessful termination (non-zero exit code, terminating signal)
//! - Configuration errors
//!
//! ## Examples
//!
//! ```rust,ignore
//! let pid = handle.pid();
//! match handle.wait_status() {
//!     Ok(termination) => termination.into_result(pid)?,
//!     Err(CbError::Wait { pid, source }) => eprintln!("lost track of {pid}: {source}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
use nix::errno::Errno;
use thiserror::Error;

/// Custom error type for cbrs.
#[derive(Error, Debug)]
pub enum CbError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot launch an empty command")]
    EmptyCommand,

    #[error("Argument {index} contains an interior NUL byte")]
    NulInArgument { index: usize },

    #[error("The fork of process {cmd} was not possible: {source}")]
    Spawn { cmd: String, source: Errno },

    #[error("Waiting on process {pid} has failed: {source}")]
    Wait { pid: i32, source: Errno },

    #[error("Process {pid} exited with exit code: {code}")]
    ExitCode { pid: i32, code: i32 },

    #[error("Process {pid} was terminated by: {signal}")]
    Signaled { pid: i32, signal: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition in the command handlers.
pub type Result<T> = anyhow::Result<T>;
