//! # cbrs Command Builder (`common::command`)
//!
//! File: cli/src/common/command.rs
//!
//! ## Overview
//!
//! A `Cmd` is the ordered argument list of one external command, slot 0 being
//! the program. Arguments are pushed one batch at a time; the runner
//! (`common::process`) borrows the `Cmd` to spawn it and resets it afterwards
//! so the same storage can hold the next command.
//!
//! ## Quoting
//!
//! With the default `QuotePolicy::QuoteUnsafe`, every pushed argument is
//! scanned with `validate::is_safe`:
//!
//! - no unsafe character: the caller's `&str` is stored as-is (borrowed, no copy);
//! - at least one unsafe character: a new string `"` + argument + `"` is built
//!   in a scratch buffer and stored owned by the `Cmd`.
//!
//! Owned arguments are dropped when the `Cmd` is reset or dropped. The NUL
//! terminator required by `execvp` is added when argv is materialized at spawn
//! time, never stored here.
//!
//! ## Usage
//!
//! ```rust
//! use cbrs::common::command::Cmd;
//!
//! let mut cmd = Cmd::new();
//! cmd.push_args(["cc", "-Wall", "main.c"]);
//! assert_eq!(cmd.len(), 3);
//! assert_eq!(cmd.args()[1], "\"-Wall\"");
//! assert_eq!(cmd.render(), "cc \"-Wall\" \"main.c\"");
//! ```
//!
use crate::common::buffer::{GrowableBuffer, DEFAULT_BASE_CAPACITY};
use crate::common::validate;
use std::borrow::Cow;

/// How pushed arguments are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuotePolicy {
    /// Wrap any argument containing an unsafe character in double quotes.
    #[default]
    QuoteUnsafe,
    /// Store every argument exactly as pushed.
    Verbatim,
}

/// An argument list awaiting execution.
#[derive(Debug, Clone)]
pub struct Cmd<'a> {
    args: GrowableBuffer<Cow<'a, str>>,
    policy: QuotePolicy,
}

impl<'a> Cmd<'a> {
    /// Empty command with the default quoting policy and base capacity.
    pub fn new() -> Self {
        Self::with_options(QuotePolicy::default(), DEFAULT_BASE_CAPACITY)
    }

    pub fn with_policy(policy: QuotePolicy) -> Self {
        Self::with_options(policy, DEFAULT_BASE_CAPACITY)
    }

    /// Empty command with an explicit policy and argument buffer base capacity.
    pub fn with_options(policy: QuotePolicy, base_capacity: usize) -> Self {
        Self {
            args: GrowableBuffer::with_base_capacity(base_capacity),
            policy,
        }
    }

    /// Appends each argument in order, quoting those that need it.
    pub fn push_args<I>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        for arg in args {
            self.push_arg(arg);
        }
        self
    }

    /// Appends a single argument.
    pub fn push_arg(&mut self, arg: &'a str) -> &mut Self {
        let stored = match self.policy {
            QuotePolicy::QuoteUnsafe if !validate::is_safe_arg(arg) => Cow::Owned(quote(arg)),
            _ => Cow::Borrowed(arg),
        };
        self.args.push(stored);
        self
    }

    pub fn args(&self) -> &[Cow<'a, str>] {
        self.args.as_slice()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Capacity of the argument buffer; unchanged by `reset`.
    pub fn capacity(&self) -> usize {
        self.args.capacity()
    }

    pub fn policy(&self) -> QuotePolicy {
        self.policy
    }

    /// Forgets all arguments (and frees quoted copies) but keeps the buffer.
    pub fn reset(&mut self) {
        self.args.clear();
    }

    /// Space-joined rendering of the whole command line, used for the launch
    /// diagnostic.
    pub fn render(&self) -> String {
        let mut line: GrowableBuffer<char> = GrowableBuffer::new();
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.append_bulk(&arg.chars().collect::<Vec<char>>());
        }
        line.iter().collect()
    }
}

impl Default for Cmd<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds `"` + `arg` + `"` in a scratch buffer.
fn quote(arg: &str) -> String {
    let mut scratch: GrowableBuffer<char> = GrowableBuffer::new();
    scratch.push('"');
    for c in arg.chars() {
        scratch.push(c);
    }
    scratch.push('"');
    scratch.iter().collect()
}
