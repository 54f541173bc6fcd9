//! # External Command Execution
//!
//! Every repository mutation performed by this crate goes through a
//! [`CommandRunner`]. The runner executes one [`CommandInvocation`]
//! synchronously, captures its output, and turns a non-zero exit status into
//! an [`Error::CommandFailed`] carrying the captured diagnostic text.
//!
//! The trait exists so the orchestration code can be exercised in tests with
//! a scripted runner instead of spawning real processes. In the application,
//! [`SystemRunner`] is used, which wraps `std::process::Command`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::error::{Error, ExitStatusDisplay, Result};

/// A single external-command execution request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub program: String,
    pub args: Vec<String>,
    /// Directory to run in; `None` uses the process working directory.
    pub working_dir: Option<PathBuf>,
}

impl CommandInvocation {
    pub fn new<I, S>(program: &str, args: I, working_dir: Option<&Path>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: working_dir.map(Path::to_path_buf),
        }
    }

    /// Build a `git` invocation.
    pub fn git<I, S>(args: I, working_dir: Option<&Path>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("git", args, working_dir)
    }

    /// The command line as it would be typed, for logs and error messages.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Captured, trimmed output of a successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Executes external commands.
pub trait CommandRunner: Send + Sync {
    /// Run the invocation to completion.
    ///
    /// Returns the captured output on success. A non-zero exit status must be
    /// reported as [`Error::CommandFailed`]; there is no partial success.
    fn run(&self, invocation: &CommandInvocation) -> Result<CommandOutput>;
}

/// The default `CommandRunner`, which spawns real processes.
///
/// No timeout is applied: a command that blocks (for example, waiting on a
/// credential prompt) blocks the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &CommandInvocation) -> Result<CommandOutput> {
        debug!("Running: {}", invocation);

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(dir) = &invocation.working_dir {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|e| Error::CommandSpawn {
            command: invocation.command_line(),
            working_dir: invocation.working_dir.clone(),
            message: e.to_string(),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            // git reports some failures ("nothing to commit", merge conflicts) on stdout
            let diagnostic = [stderr, stdout]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            return Err(Error::CommandFailed {
                command: invocation.command_line(),
                working_dir: invocation.working_dir.clone(),
                status: ExitStatusDisplay(output.status.code()),
                diagnostic,
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}
