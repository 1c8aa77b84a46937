//! # cbrs Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! The command construction and process-lifecycle subsystem, leaf first:
//!
//! - **`buffer`**: `GrowableBuffer<T>`, the append-only amortized-doubling container.
//! - **`validate`**: Classifies characters as safe or unsafe for bare arguments.
//! - **`command`**: `Cmd`, the argument list builder that quotes unsafe arguments.
//! - **`process`**: Spawning a `Cmd` with fork/exec and waiting on the child.
//!

/// Append-only growable sequence container.
pub mod buffer;
/// Command builder (`Cmd`) and quoting policy.
pub mod command;
/// Launch, wait/reap and synchronous run of built commands.
pub mod process;
/// Safe/unsafe character classification.
pub mod validate;
