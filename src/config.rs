//! # Run Configuration
//!
//! [`SyncConfig`] holds the settings shared by every action: where the two
//! repositories live and which branch to work on. It is built once by the
//! binary from command-line flags (falling back to [`crate::defaults`]) and
//! passed down by reference; nothing reads it from global state.

use std::path::{Path, PathBuf};

use crate::defaults;
use crate::error::{Error, Result};
use crate::repository::RepositoryHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub main_dir: PathBuf,
    pub sub_dir: PathBuf,
    pub branch: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            main_dir: PathBuf::from(defaults::MAIN_DIR),
            sub_dir: PathBuf::from(defaults::SUB_DIR),
            branch: defaults::BRANCH.to_string(),
        }
    }
}

impl SyncConfig {
    pub fn new(main_dir: impl Into<PathBuf>, sub_dir: impl Into<PathBuf>, branch: &str) -> Self {
        Self {
            main_dir: main_dir.into(),
            sub_dir: sub_dir.into(),
            branch: branch.to_string(),
        }
    }

    pub fn main_repo(&self) -> RepositoryHandle {
        RepositoryHandle::open(&self.main_dir)
    }

    pub fn sub_repo(&self) -> RepositoryHandle {
        RepositoryHandle::open(&self.sub_dir)
    }

    pub fn main_dir(&self) -> &Path {
        &self.main_dir
    }

    pub fn sub_dir(&self) -> &Path {
        &self.sub_dir
    }
}

/// Return the value of a required option, or a configuration error naming
/// the flag that supplies it.
pub fn require<'a>(value: Option<&'a str>, what: &str, flag: &str) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::config(
            format!("No {} provided", what),
            format!("Pass {}", flag),
        )),
    }
}
