//! Typed wrappers for the git subcommands this tool issues.
//!
//! Each method maps to exactly one `git` invocation, run through the
//! configured [`CommandRunner`]. This uses the system git command, which
//! automatically handles:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Personal access tokens
//! - Any authentication configured in ~/.gitconfig

use std::path::Path;

use crate::error::Result;
use crate::runner::{CommandInvocation, CommandOutput, CommandRunner};

/// Name of the directory (or worktree file) holding repository metadata.
pub const METADATA_DIR: &str = ".git";

/// Whether `dir` already contains repository metadata.
pub fn is_repository(dir: &Path) -> bool {
    dir.join(METADATA_DIR).exists()
}

/// Split the output of `git remote` into remote names.
pub fn parse_remote_list(stdout: &str) -> Vec<String> {
    stdout.split_whitespace().map(str::to_string).collect()
}

/// Git command facade over a borrowed runner.
#[derive(Clone, Copy)]
pub struct Git<'r> {
    runner: &'r dyn CommandRunner,
}

impl<'r> Git<'r> {
    pub fn new(runner: &'r dyn CommandRunner) -> Self {
        Self { runner }
    }

    fn run<const N: usize>(&self, args: [&str; N], dir: Option<&Path>) -> Result<CommandOutput> {
        self.runner.run(&CommandInvocation::git(args, dir))
    }

    /// `git init`, optionally naming the first branch.
    pub fn init(&self, dir: &Path, initial_branch: Option<&str>) -> Result<CommandOutput> {
        match initial_branch {
            Some(branch) => self.run(["init", "--initial-branch", branch], Some(dir)),
            None => self.run(["init"], Some(dir)),
        }
    }

    /// `git clone <url> <dir>`, run from the process working directory.
    pub fn clone_into(&self, url: &str, dir: &Path) -> Result<CommandOutput> {
        let target = dir.to_string_lossy();
        self.run(["clone", url, target.as_ref()], None)
    }

    /// Names of every remote configured in `repo`.
    pub fn remotes(&self, repo: &Path) -> Result<Vec<String>> {
        let output = self.run(["remote"], Some(repo))?;
        Ok(parse_remote_list(&output.stdout))
    }

    pub fn remote_add(&self, repo: &Path, name: &str, target: &str) -> Result<CommandOutput> {
        self.run(["remote", "add", name, target], Some(repo))
    }

    pub fn remote_set_url(&self, repo: &Path, name: &str, target: &str) -> Result<CommandOutput> {
        self.run(["remote", "set-url", name, target], Some(repo))
    }

    pub fn remote_get_url(&self, repo: &Path, name: &str) -> Result<String> {
        Ok(self.run(["remote", "get-url", name], Some(repo))?.stdout)
    }

    /// Stage tracked and untracked changes.
    pub fn add_all(&self, repo: &Path) -> Result<CommandOutput> {
        self.run(["add", "--all"], Some(repo))
    }

    pub fn commit(&self, repo: &Path, message: &str) -> Result<CommandOutput> {
        self.run(["commit", "-m", message], Some(repo))
    }

    pub fn push(&self, repo: &Path, remote: &str, branch: &str) -> Result<CommandOutput> {
        self.run(["push", remote, branch], Some(repo))
    }

    pub fn pull(&self, repo: &Path, remote: &str, branch: &str) -> Result<CommandOutput> {
        self.run(["pull", remote, branch], Some(repo))
    }

    pub fn checkout(&self, repo: &Path, branch: &str) -> Result<CommandOutput> {
        self.run(["checkout", branch], Some(repo))
    }

    pub fn merge(&self, repo: &Path, source_branch: &str) -> Result<CommandOutput> {
        self.run(["merge", source_branch], Some(repo))
    }
}
