//! # Single-Purpose Repository Actions
//!
//! Commit, push, pull and merge, each issued against one repository. None of
//! these recover from failure: a rejected push is not retried or forced, a
//! conflicting pull or merge is left in whatever state git produced, and
//! committing with nothing staged is an error like any other.

use log::info;

use crate::error::Result;
use crate::git::Git;
use crate::repository::RepositoryHandle;
use crate::runner::CommandRunner;

/// Output of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitResult {
    /// git's summary of the new commit.
    pub summary: String,
}

/// Output of a successful push, pull, checkout or merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionOutput {
    pub summary: String,
}

/// Repository actions over a borrowed runner.
pub struct SyncActions<'r> {
    git: Git<'r>,
}

impl<'r> SyncActions<'r> {
    pub fn new(runner: &'r dyn CommandRunner) -> Self {
        Self {
            git: Git::new(runner),
        }
    }

    /// Stage all tracked and untracked changes, then commit them.
    pub fn commit(&self, repo: &RepositoryHandle, message: &str) -> Result<CommitResult> {
        info!("Committing changes in {}...", repo.path().display());
        self.git.add_all(repo.path())?;
        let output = self.git.commit(repo.path(), message)?;
        Ok(CommitResult {
            summary: output.stdout,
        })
    }

    pub fn push(
        &self,
        repo: &RepositoryHandle,
        remote: &str,
        branch: &str,
    ) -> Result<ActionOutput> {
        info!(
            "Pushing changes from {} to {}/{}...",
            repo.path().display(),
            remote,
            branch
        );
        let output = self.git.push(repo.path(), remote, branch)?;
        Ok(ActionOutput {
            summary: output.stdout,
        })
    }

    /// Fetch `branch` from `remote` and integrate it into the current checkout.
    pub fn pull(
        &self,
        repo: &RepositoryHandle,
        remote: &str,
        branch: &str,
    ) -> Result<ActionOutput> {
        info!(
            "Pulling changes into {} from {}/{}...",
            repo.path().display(),
            remote,
            branch
        );
        let output = self.git.pull(repo.path(), remote, branch)?;
        Ok(ActionOutput {
            summary: output.stdout,
        })
    }

    pub fn checkout(&self, repo: &RepositoryHandle, branch: &str) -> Result<ActionOutput> {
        info!("Checking out {} in {}...", branch, repo.path().display());
        let output = self.git.checkout(repo.path(), branch)?;
        Ok(ActionOutput {
            summary: output.stdout,
        })
    }

    /// Check out `target_branch` and merge `source_branch` into it.
    pub fn merge(
        &self,
        repo: &RepositoryHandle,
        source_branch: &str,
        target_branch: &str,
    ) -> Result<ActionOutput> {
        info!(
            "Merging {} into {} in {}...",
            source_branch,
            target_branch,
            repo.path().display()
        );
        self.git.checkout(repo.path(), target_branch)?;
        let output = self.git.merge(repo.path(), source_branch)?;
        Ok(ActionOutput {
            summary: output.stdout,
        })
    }
}
