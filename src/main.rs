//! # Subrepo Sync CLI
//!
//! This is the binary entry point for the `subrepo-sync` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the selected action.
//! - Turning any error into a printed message and a non-zero exit status.
//!
//! The orchestration logic lives in the `subrepo_sync` library crate; the
//! binary is a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
