//! # Merge Command Implementation
//!
//! Checks out the working branch (`--branch`) in the main repository and
//! merges `--source-branch` into it. A conflict leaves the repository in the
//! conflicted state git produced; nothing is aborted or rolled back.

use anyhow::Result;
use clap::Args;

use subrepo_sync::actions::SyncActions;
use subrepo_sync::config;
use subrepo_sync::runner::SystemRunner;

use super::{print_success, print_summary};
use crate::cli::Context;

/// Merge a source branch into the working branch
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Branch to merge into the working branch (required)
    #[arg(long, value_name = "BRANCH")]
    pub source_branch: Option<String>,
}

/// Execute the `merge` command.
pub fn execute(ctx: &Context, args: MergeArgs) -> Result<()> {
    // Checked before any git command is issued
    let source =
        config::require(args.source_branch.as_deref(), "source branch", "--source-branch")?;

    let runner = SystemRunner;
    let output =
        SyncActions::new(&runner).merge(&ctx.config.main_repo(), source, &ctx.config.branch)?;

    print_summary(&output.summary);
    print_success(
        ctx,
        &format!("Merged {} into {}", source, ctx.config.branch),
    );
    Ok(())
}
