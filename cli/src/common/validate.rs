//! # cbrs Argument Validator (`common::validate`)
//!
//! File: cli/src/common/validate.rs
//!
//! ## Overview
//!
//! Classifies characters as safe or unsafe for bare use as a process argument.
//! An argument containing at least one unsafe character is wrapped in double
//! quotes by the command builder (see `common::command`).
//!
//! The unsafe set is a fixed membership list, `UNSAFE_CHARS`. It flags
//! characters such as `-`, `.` and `/` while whitespace, quotes and shell
//! metacharacters like `&`, `|` and `;` count as safe. Arguments never pass
//! through a shell, so this classification only decides when quotes are added.
//! Builders that should pass arguments through untouched use
//! `QuotePolicy::Verbatim` instead.
//!

/// Characters that force an argument to be quoted.
pub const UNSAFE_CHARS: [char; 11] = ['$', '_', '-', '+', '=', ':', ',', '.', '@', '%', '/'];

/// Returns `false` iff `c` is one of `$ _ - + = : , . @ % /`.
pub fn is_safe(c: char) -> bool {
    !UNSAFE_CHARS.contains(&c)
}

/// Returns `true` when no character of `arg` is unsafe.
pub fn is_safe_arg(arg: &str) -> bool {
    arg.chars().all(is_safe)
}

/// Byte offset and value of the first unsafe character in `arg`, if any.
pub fn first_unsafe(arg: &str) -> Option<(usize, char)> {
    arg.char_indices().find(|&(_, c)| !is_safe(c))
}
