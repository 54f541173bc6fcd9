//! # Error Handling
//!
//! This module defines the centralized error type for `subrepo-sync`. It uses
//! `thiserror` to build a single `Error` enum covering the two kinds of
//! failure the tool distinguishes:
//!
//! - **Configuration errors**: required input is missing (no sub-repository
//!   URL at setup, no source branch at merge). These are raised before any
//!   external command runs.
//! - **Execution errors**: an external `git` command could not be spawned or
//!   exited with a non-zero status. These carry the captured diagnostic text.
//!
//! Nothing in the library recovers from an error locally. Every failure is
//! propagated with `?` up to the command boundary in the binary, which reports
//! it and exits non-zero.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for subrepo-sync operations
#[derive(Error, Debug)]
pub enum Error {
    /// Required input was not supplied.
    ///
    /// Includes an optional hint describing how to provide it.
    #[error("Configuration error: {message}{}", hint_suffix(hint))]
    Config {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// The external command could not be started at all.
    #[error("Failed to run `{command}`{}: {message}", dir_suffix(working_dir))]
    CommandSpawn {
        command: String,
        working_dir: Option<PathBuf>,
        message: String,
    },

    /// The external command ran and exited unsuccessfully.
    #[error("Command `{command}` failed{} ({status}):\n{diagnostic}", dir_suffix(working_dir))]
    CommandFailed {
        command: String,
        working_dir: Option<PathBuf>,
        status: ExitStatusDisplay,
        /// Captured standard error followed by any standard output.
        diagnostic: String,
    },

    /// A repository directory could not be created.
    #[error("Failed to create directory {}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One stage of a sync sequence failed; the remaining stages were skipped.
    #[error("Sync aborted at stage '{stage}'")]
    SyncAborted {
        stage: crate::sync::SyncStage,
        #[source]
        source: Box<Error>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit status of a failed command, rendered as `exit code N` or
/// `terminated by signal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatusDisplay(pub Option<i32>);

impl fmt::Display for ExitStatusDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(code) => write!(f, "exit code {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

fn hint_suffix(hint: &Option<String>) -> String {
    hint.as_ref()
        .map(|h| format!("\n  hint: {}", h))
        .unwrap_or_default()
}

fn dir_suffix(dir: &Option<PathBuf>) -> String {
    dir.as_ref()
        .map(|d| format!(" in {}", d.display()))
        .unwrap_or_default()
}

impl Error {
    /// Shorthand for a configuration error with a hint.
    pub fn config(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
