//! # cbrs Render Handler
//!
//! File: cli/src/commands/render.rs
//!
//! ## Overview
//!
//! Implements `cbrs render`: pushes the arguments into a `Cmd` exactly like
//! `cbrs run` would and prints the result instead of spawning anything. Each
//! stored argument is listed on its own line with its slot index; quoted ones
//! are annotated with the first unsafe character that caused the quoting. The
//! last line is the rendered command line prefixed with `$ `.
//!
//! ```text
//! $ cbrs render cc -c main.c
//! 0  cc
//! 1  "-c"  quoted: '-' at byte 0
//! 2  "main.c"  quoted: '.' at byte 4
//! $ cc "-c" "main.c"
//! ```
//!
use cbrs::common::command::{Cmd, QuotePolicy};
use cbrs::common::validate;
use cbrs::core::config;
use cbrs::core::error::Result;
use clap::Parser;
use std::borrow::Cow;

/// # Render Arguments (`RenderArgs`)
#[derive(Parser, Debug)]
#[command(about = "Show how arguments are stored and rendered, without running them")]
pub struct RenderArgs {
    /// Store arguments exactly as given instead of quoting unsafe ones.
    #[arg(long)]
    verbatim: bool,

    /// Arguments to push, program first.
    #[arg(
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

pub fn handle_render(args: RenderArgs) -> Result<()> {
    let cfg = config::load_config()?;
    let policy = if args.verbatim {
        QuotePolicy::Verbatim
    } else {
        cfg.quote_policy()
    };

    let mut cmd = Cmd::with_options(policy, cfg.buffer.base_capacity);
    cmd.push_args(args.args.iter().map(String::as_str));

    for (index, (original, stored)) in args.args.iter().zip(cmd.args()).enumerate() {
        match (stored, validate::first_unsafe(original)) {
            (Cow::Owned(quoted), Some((position, c))) => {
                println!("{index}  {quoted}  quoted: '{c}' at byte {position}")
            }
            _ => println!("{index}  {stored}"),
        }
    }
    println!("$ {}", cmd.render());
    Ok(())
}
