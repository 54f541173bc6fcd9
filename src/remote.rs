//! Linking the sub repository into the main repository as a named remote.

use std::path::{self, Path, PathBuf};

use log::info;

use crate::error::Result;
use crate::git::Git;
use crate::repository::RepositoryHandle;
use crate::runner::CommandRunner;

/// Whether a link created a new remote or re-pointed an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    Added,
    Updated,
}

/// A named remote in the main repository and the absolute path it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteBinding {
    pub name: String,
    pub target: PathBuf,
    pub outcome: LinkOutcome,
}

/// Registers the sub repository as a remote of the main repository.
pub struct RemoteLinker<'r> {
    git: Git<'r>,
}

impl<'r> RemoteLinker<'r> {
    pub fn new(runner: &'r dyn CommandRunner) -> Self {
        Self {
            git: Git::new(runner),
        }
    }

    /// Point `remote_name` in `main` at the absolute path of `sub`.
    ///
    /// An existing remote with exactly this name is updated in place, so
    /// linking twice leaves a single entry.
    pub fn link(
        &self,
        main: &RepositoryHandle,
        sub: &RepositoryHandle,
        remote_name: &str,
    ) -> Result<RemoteBinding> {
        let target = resolve_target(sub.path())?;
        let target_arg = target.to_string_lossy();

        let remotes = self.git.remotes(main.path())?;
        let outcome = if remotes.iter().any(|r| r == remote_name) {
            info!("Remote '{}' already exists, updating URL...", remote_name);
            self.git.remote_set_url(main.path(), remote_name, &target_arg)?;
            LinkOutcome::Updated
        } else {
            info!("Adding sub repository as remote '{}'...", remote_name);
            self.git.remote_add(main.path(), remote_name, &target_arg)?;
            LinkOutcome::Added
        };

        Ok(RemoteBinding {
            name: remote_name.to_string(),
            target,
            outcome,
        })
    }

    /// Read back the target a remote currently points at.
    pub fn remote_url(&self, repo: &RepositoryHandle, remote_name: &str) -> Result<String> {
        self.git.remote_get_url(repo.path(), remote_name)
    }
}

/// Absolute form of `path`, independent of later working-directory changes.
pub fn resolve_target(path: &Path) -> Result<PathBuf> {
    Ok(path::absolute(path)?)
}
