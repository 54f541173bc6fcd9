//! # Subrepo Sync Library
//!
//! This library orchestrates a local two-repository workflow: a **main**
//! repository under development and a **sub** repository linked to it as a
//! named remote. It is used by the `subrepo-sync` command-line tool, which is
//! a thin wrapper around the functionality here.
//!
//! Version control itself is delegated to the system `git` binary. This
//! crate only decides which git commands run, in what order, and what
//! happens when one of them fails (the whole action stops).
//!
//! ## Quick Example
//!
//! ```no_run
//! use subrepo_sync::config::SyncConfig;
//! use subrepo_sync::repository::{Provisioner, RepoRole};
//! use subrepo_sync::remote::RemoteLinker;
//! use subrepo_sync::runner::SystemRunner;
//!
//! # fn main() -> subrepo_sync::error::Result<()> {
//! let config = SyncConfig::default();
//! let runner = SystemRunner;
//!
//! let provisioner = Provisioner::new(&runner).with_initial_branch(&config.branch);
//! let main = provisioner.provision(RepoRole::Main, config.main_dir(), None)?;
//! let sub = provisioner.provision(
//!     RepoRole::Sub,
//!     config.sub_dir(),
//!     Some("https://github.com/example/mirror.git"),
//! )?;
//!
//! RemoteLinker::new(&runner).link(&main, &sub, "subrepo")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Components
//!
//! - **`runner`**: executes one external command and captures its output.
//! - **`git`**: the git subcommands this tool issues.
//! - **`repository`**: clones or initializes a repository directory.
//! - **`remote`**: registers the sub repository as a remote of main.
//! - **`actions`**: commit, push, pull and merge.
//! - **`sync`**: push, checkout and pull as one ordered sequence.

pub mod actions;
pub mod config;
pub mod defaults;
pub mod error;
pub mod git;
pub mod output;
pub mod remote;
pub mod repository;
pub mod runner;
pub mod sync;
