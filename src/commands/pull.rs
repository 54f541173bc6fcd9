//! Pull command implementation

use anyhow::Result;
use clap::Args;

use subrepo_sync::actions::SyncActions;
use subrepo_sync::defaults;
use subrepo_sync::runner::SystemRunner;

use super::{print_success, print_summary};
use crate::cli::Context;

/// Pull a branch from a remote into the main repository
#[derive(Args, Debug)]
pub struct PullArgs {
    /// Remote to pull from
    #[arg(long, value_name = "NAME", default_value = defaults::UPSTREAM_REMOTE)]
    pub remote: String,
}

/// Execute the `pull` command.
pub fn execute(ctx: &Context, args: PullArgs) -> Result<()> {
    let runner = SystemRunner;
    let repo = ctx.config.main_repo();
    let output = SyncActions::new(&runner).pull(&repo, &args.remote, &ctx.config.branch)?;

    print_summary(&output.summary);
    print_success(
        ctx,
        &format!("Pulled {} from {}", ctx.config.branch, args.remote),
    );
    Ok(())
}
