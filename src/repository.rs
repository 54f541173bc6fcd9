//! # Repository Provisioning
//!
//! This module makes sure a local directory exists and holds a repository,
//! either by cloning it from a URL or by initializing it empty.
//!
//! ## Policy
//!
//! Provisioning is idempotent: a directory that already contains repository
//! metadata is left untouched, and no clone or init is issued for it.
//!
//! The missing-URL policy depends on the [`RepoRole`]:
//!
//! - **Main**: falls back to an empty `git init`, since the main repository
//!   may be a brand new project.
//! - **Sub**: a missing URL is a configuration error. The sub repository is a
//!   mirror and must originate from somewhere.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use url::Url;

use crate::error::{Error, Result};
use crate::git::{self, Git};
use crate::runner::CommandRunner;

/// Which side of the two-repository workflow a directory plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoRole {
    Main,
    Sub,
}

impl fmt::Display for RepoRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoRole::Main => f.write_str("main"),
            RepoRole::Sub => f.write_str("sub"),
        }
    }
}

/// How a repository came to exist on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryState {
    /// No repository metadata present.
    Uninitialized,
    /// Created by this run with an empty `git init`.
    InitializedEmpty,
    /// Created by this run with `git clone`.
    Cloned,
    /// Metadata was already present; provisioning did nothing.
    Existing,
}

/// A local working directory believed to contain a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryHandle {
    path: PathBuf,
    state: RepositoryState,
}

impl RepositoryHandle {
    /// Refer to a directory without provisioning it.
    ///
    /// Used by actions that expect setup to have happened already.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = if git::is_repository(&path) {
            RepositoryState::Existing
        } else {
            RepositoryState::Uninitialized
        };
        Self { path, state }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> RepositoryState {
        self.state
    }
}

/// Where a repository is cloned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoSource {
    /// A network URL, either with a scheme or in scp form (`git@host:path`).
    Remote(String),
    /// A path on the local filesystem.
    Local(PathBuf),
}

impl RepoSource {
    pub fn parse(source: &str) -> Self {
        if Url::parse(source).is_ok_and(|u| u.scheme().len() > 1) || is_scp_like(source) {
            RepoSource::Remote(source.to_string())
        } else {
            RepoSource::Local(PathBuf::from(source))
        }
    }

    /// The source as passed to git.
    pub fn as_git_arg(&self) -> String {
        match self {
            RepoSource::Remote(url) => url.clone(),
            RepoSource::Local(path) => path.to_string_lossy().into_owned(),
        }
    }

    /// The source with any embedded password or token removed, for logs.
    pub fn redacted(&self) -> String {
        match self {
            RepoSource::Remote(raw) => match Url::parse(raw) {
                Ok(mut url) if url.password().is_some() => {
                    // set_password only fails for cannot-be-a-base URLs
                    let _ = url.set_password(Some("***"));
                    url.to_string()
                }
                _ => raw.clone(),
            },
            RepoSource::Local(path) => path.display().to_string(),
        }
    }
}

// Single-letter schemes are Windows drive letters, not URLs.
fn is_scp_like(source: &str) -> bool {
    match source.split_once(':') {
        Some((host, path)) => {
            !host.is_empty()
                && host.len() > 1
                && !host.contains('/')
                && !path.starts_with("//")
                && !path.is_empty()
        }
        None => false,
    }
}

/// Clones or initializes repository directories.
pub struct Provisioner<'r> {
    git: Git<'r>,
    initial_branch: Option<String>,
}

impl<'r> Provisioner<'r> {
    pub fn new(runner: &'r dyn CommandRunner) -> Self {
        Self {
            git: Git::new(runner),
            initial_branch: None,
        }
    }

    /// Name the first branch of repositories created by empty init.
    pub fn with_initial_branch(mut self, branch: impl Into<String>) -> Self {
        self.initial_branch = Some(branch.into());
        self
    }

    /// Ensure `directory` exists and contains a repository.
    ///
    /// 1. Create `directory` (recursively, no error if present).
    /// 2. If it already holds repository metadata, return it unchanged.
    /// 3. Else clone `url` into it when one is supplied.
    /// 4. Else initialize empty (main) or fail (sub).
    pub fn provision(
        &self,
        role: RepoRole,
        directory: &Path,
        url: Option<&str>,
    ) -> Result<RepositoryHandle> {
        fs::create_dir_all(directory).map_err(|source| Error::CreateDirectory {
            path: directory.to_path_buf(),
            source,
        })?;

        if git::is_repository(directory) {
            info!(
                "The {} repository already exists in {}",
                role,
                directory.display()
            );
            return Ok(RepositoryHandle {
                path: directory.to_path_buf(),
                state: RepositoryState::Existing,
            });
        }

        let url = url.map(str::trim).filter(|u| !u.is_empty());
        let state = match (url, role) {
            (Some(url), _) => {
                let source = RepoSource::parse(url);
                info!("Cloning {} repository from {}...", role, source.redacted());
                self.git.clone_into(&source.as_git_arg(), directory)?;
                RepositoryState::Cloned
            }
            (None, RepoRole::Main) => {
                info!(
                    "Initializing new main repository in {}...",
                    directory.display()
                );
                self.git.init(directory, self.initial_branch.as_deref())?;
                RepositoryState::InitializedEmpty
            }
            (None, RepoRole::Sub) => {
                return Err(Error::config(
                    format!(
                        "No sub repository URL provided and {} is not a repository",
                        directory.display()
                    ),
                    "Pass --sub-url or set SUBREPO_SYNC_SUB_URL",
                ));
            }
        };

        Ok(RepositoryHandle {
            path: directory.to_path_buf(),
            state,
        })
    }
}
