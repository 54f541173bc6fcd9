//! # Setup Command Implementation
//!
//! Prepares both repositories and links them:
//!
//! 1. Provision the main repository: clone `--main-url` when given, otherwise
//!    initialize an empty repository on the working branch.
//! 2. Provision the sub repository by cloning `--sub-url`.
//! 3. Register the sub repository's absolute path as a remote of main.
//!
//! Directories that already hold a repository are left alone, and an existing
//! remote of the same name is re-pointed, so running setup twice is safe.

use anyhow::Result;
use clap::Args;

use subrepo_sync::config;
use subrepo_sync::defaults;
use subrepo_sync::remote::{LinkOutcome, RemoteLinker};
use subrepo_sync::repository::{Provisioner, RepoRole};
use subrepo_sync::runner::SystemRunner;

use super::print_success;
use crate::cli::Context;

/// Clone or initialize both repositories and link them
#[derive(Args, Debug)]
pub struct SetupArgs {
    /// URL of the main repository. When omitted, an empty repository is
    /// initialized instead.
    #[arg(long, value_name = "URL", env = defaults::MAIN_URL_ENV)]
    pub main_url: Option<String>,

    /// URL of the sub repository to clone (required).
    #[arg(long, value_name = "URL", env = defaults::SUB_URL_ENV)]
    pub sub_url: Option<String>,

    /// Name of the remote in the main repository that points at the sub repository.
    #[arg(long, value_name = "NAME", default_value = defaults::REMOTE_NAME)]
    pub remote: String,
}

/// Execute the `setup` command.
pub fn execute(ctx: &Context, args: SetupArgs) -> Result<()> {
    // Checked before anything touches the disk
    let sub_url = config::require(
        args.sub_url.as_deref(),
        "sub repository URL",
        "--sub-url or set SUBREPO_SYNC_SUB_URL",
    )?;

    let runner = SystemRunner;
    let provisioner = Provisioner::new(&runner).with_initial_branch(&ctx.config.branch);

    let main = provisioner.provision(
        RepoRole::Main,
        ctx.config.main_dir(),
        args.main_url.as_deref(),
    )?;
    let sub = provisioner.provision(RepoRole::Sub, ctx.config.sub_dir(), Some(sub_url))?;

    let linker = RemoteLinker::new(&runner);
    let binding = linker.link(&main, &sub, &args.remote)?;
    let verb = match binding.outcome {
        LinkOutcome::Added => "added",
        LinkOutcome::Updated => "updated",
    };
    // Report what git recorded, not what was requested
    let recorded = linker.remote_url(&main, &binding.name)?;
    println!("Remote '{}' {} -> {}", binding.name, verb, recorded);

    print_success(ctx, "Repositories setup complete!");
    Ok(())
}
