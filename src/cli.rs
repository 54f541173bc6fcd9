//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use subrepo_sync::config::SyncConfig;
use subrepo_sync::defaults;
use subrepo_sync::output::OutputConfig;

use crate::commands;

/// Subrepo Sync - Keep a main repository and its linked sub repository in sync
#[derive(Parser, Debug)]
#[command(name = "subrepo-sync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Directory for the main repository
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        env = "SUBREPO_SYNC_MAIN_DIR",
        default_value = defaults::MAIN_DIR
    )]
    main_dir: PathBuf,

    /// Directory for the sub repository
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        env = "SUBREPO_SYNC_SUB_DIR",
        default_value = defaults::SUB_DIR
    )]
    sub_dir: PathBuf,

    /// Branch name to work with
    #[arg(short, long, global = true, value_name = "BRANCH", default_value = defaults::BRANCH)]
    branch: String,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone or initialize both repositories and link sub into main as a remote
    Setup(commands::setup::SetupArgs),

    /// Stage and commit all changes in the main repository
    Commit(commands::commit::CommitArgs),

    /// Push the main repository's branch to the linked remote
    Push(commands::push::PushArgs),

    /// Pull a branch into the main repository
    Pull(commands::pull::PullArgs),

    /// Merge a source branch into the working branch of the main repository
    Merge(commands::merge::MergeArgs),

    /// Push main to the linked remote, then update the sub repository
    Sync(commands::sync::SyncArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

/// Settings every command receives, built once from the global flags.
pub struct Context {
    pub config: SyncConfig,
    pub output: OutputConfig,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let output = OutputConfig::from_env_and_flag(&self.color);
        console::set_colors_enabled(output.use_color);

        let ctx = Context {
            config: SyncConfig::new(self.main_dir, self.sub_dir, &self.branch),
            output,
        };

        match self.command {
            Commands::Setup(args) => commands::setup::execute(&ctx, args),
            Commands::Commit(args) => commands::commit::execute(&ctx, args),
            Commands::Push(args) => commands::push::execute(&ctx, args),
            Commands::Pull(args) => commands::pull::execute(&ctx, args),
            Commands::Merge(args) => commands::merge::execute(&ctx, args),
            Commands::Sync(args) => commands::sync::execute(&ctx, args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Route `log` records to stderr. `RUST_LOG` takes precedence over `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .init();
}
