//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `subrepo-sync` command-line tool. Each subcommand is defined in its own
//! file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the shared [`Context`] and the parsed
//!   `Args`, calls into the `subrepo_sync` library, and prints the result.
//!
//! Any error returned by the library is propagated unchanged; `main` prints it
//! and exits non-zero.

use crate::cli::Context;

pub mod commit;
pub mod completions;
pub mod merge;
pub mod pull;
pub mod push;
pub mod setup;
pub mod sync;

/// Echo what git printed on stdout, if anything.
fn print_summary(summary: &str) {
    if !summary.is_empty() {
        println!("{}", summary);
    }
}

/// Print the final line of a successful command.
fn print_success(ctx: &Context, message: &str) {
    println!("{}", ctx.output.success(message));
}
