//! # Commit Command Implementation
//!
//! Stages every change in the main repository (tracked and untracked) and
//! commits it. With nothing to commit, git fails and so does this command.

use anyhow::Result;
use clap::Args;

use subrepo_sync::actions::SyncActions;
use subrepo_sync::defaults;
use subrepo_sync::runner::SystemRunner;

use super::{print_success, print_summary};
use crate::cli::Context;

/// Stage and commit all changes in the main repository
#[derive(Args, Debug)]
pub struct CommitArgs {
    /// Commit message
    #[arg(short, long, value_name = "MESSAGE", default_value = defaults::COMMIT_MESSAGE)]
    pub message: String,
}

/// Execute the `commit` command.
pub fn execute(ctx: &Context, args: CommitArgs) -> Result<()> {
    let runner = SystemRunner;
    let result = SyncActions::new(&runner).commit(&ctx.config.main_repo(), &args.message)?;

    print_summary(&result.summary);
    print_success(ctx, "Changes committed");
    Ok(())
}
