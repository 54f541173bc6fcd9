//! # Sync Command Implementation
//!
//! Pushes the main repository's working branch to the linked remote, checks
//! the same branch out in the sub repository, then pulls into the sub
//! repository from its upstream. Any failing step stops the sequence.
//!
//! The pulled branch is its own option (`--pull-branch`). When omitted, the
//! working branch is used and a warning says so.

use anyhow::Result;
use clap::Args;
use log::warn;

use subrepo_sync::defaults;
use subrepo_sync::runner::SystemRunner;
use subrepo_sync::sync::{SyncOrchestrator, SyncSession};

use super::{print_success, print_summary};
use crate::cli::Context;

/// Push main to the linked remote, then update the sub repository
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Remote in the main repository that points at the sub repository
    #[arg(long, value_name = "NAME", default_value = defaults::REMOTE_NAME)]
    pub remote: String,

    /// Remote the sub repository pulls from
    #[arg(long, value_name = "NAME", default_value = defaults::UPSTREAM_REMOTE)]
    pub pull_remote: String,

    /// Branch the sub repository pulls (defaults to --branch)
    #[arg(long, value_name = "BRANCH")]
    pub pull_branch: Option<String>,
}

/// Execute the `sync` command.
pub fn execute(ctx: &Context, args: SyncArgs) -> Result<()> {
    let pull_branch = match args.pull_branch {
        Some(branch) => branch,
        None => {
            warn!(
                "No --pull-branch given; pulling '{}' from '{}'",
                ctx.config.branch, args.pull_remote
            );
            ctx.config.branch.clone()
        }
    };

    let session = SyncSession {
        main: ctx.config.main_repo(),
        sub: ctx.config.sub_repo(),
        remote: args.remote,
        branch: ctx.config.branch.clone(),
        pull_remote: args.pull_remote,
        pull_branch,
    };

    let runner = SystemRunner;
    let report = SyncOrchestrator::new(&runner).sync(&session)?;

    print_summary(&report.push.summary);
    print_summary(&report.pull.summary);
    print_success(
        ctx,
        &format!(
            "Synced {} into {}",
            session.branch,
            session.sub.path().display()
        ),
    );
    Ok(())
}
