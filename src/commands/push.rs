//! Push command implementation

use anyhow::Result;
use clap::Args;

use subrepo_sync::actions::SyncActions;
use subrepo_sync::defaults;
use subrepo_sync::runner::SystemRunner;

use super::{print_success, print_summary};
use crate::cli::Context;

/// Push the main repository's branch to a remote
#[derive(Args, Debug)]
pub struct PushArgs {
    /// Remote to push to
    #[arg(long, value_name = "NAME", default_value = defaults::REMOTE_NAME)]
    pub remote: String,
}

/// Execute the `push` command.
pub fn execute(ctx: &Context, args: PushArgs) -> Result<()> {
    let runner = SystemRunner;
    let output =
        SyncActions::new(&runner).push(&ctx.config.main_repo(), &args.remote, &ctx.config.branch)?;

    print_summary(&output.summary);
    print_success(
        ctx,
        &format!("Pushed {} to {}", ctx.config.branch, args.remote),
    );
    Ok(())
}
