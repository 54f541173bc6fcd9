//! Shared test utilities for the CLI end-to-end tests.
//!
//! Every test runs against the real `git` binary using repositories created
//! inside a temporary directory, so no network access is needed. Git's global
//! and system configuration are isolated from the developer's machine.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     if should_skip_git_tests() {
//!         return;
//!     }
//!     let ws = Workspace::new();
//!     ws.cmd().arg("setup").arg("--sub-url").arg(ws.upstream()).assert().success();
//! }
//! ```

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    pub use super::should_skip_git_tests;
    pub use super::Workspace;
}

const IDENTITY: [(&str, &str); 4] = [
    ("GIT_AUTHOR_NAME", "Sync Tester"),
    ("GIT_AUTHOR_EMAIL", "sync-tester@example.com"),
    ("GIT_COMMITTER_NAME", "Sync Tester"),
    ("GIT_COMMITTER_EMAIL", "sync-tester@example.com"),
];

/// Returns true (and says why) when no usable `git` binary is on PATH.
pub fn should_skip_git_tests() -> bool {
    let available = process::Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success());
    if !available {
        eprintln!("skipping: git is not installed");
    }
    !available
}

/// A temporary working directory plus a bare `upstream.git` repository whose
/// `main` branch holds a single commit adding `README.md`.
pub struct Workspace {
    temp: assert_fs::TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        let ws = Self {
            temp: assert_fs::TempDir::new().unwrap(),
        };
        fs::create_dir_all(ws.home()).unwrap();

        let upstream = ws.upstream();
        ws.git(ws.root(), &["init", "--bare", "--initial-branch", "main"])
            .arg(&upstream)
            .assert()
            .success();

        let seed = ws.root().join("seed");
        fs::create_dir_all(&seed).unwrap();
        ws.git(&seed, &["init", "--initial-branch", "main"])
            .assert()
            .success();
        ws.write_file(&seed, "README.md", "# upstream\n");
        ws.git(&seed, &["add", "README.md"]).assert().success();
        ws.git(&seed, &["commit", "-m", "Initial commit"])
            .assert()
            .success();
        ws.git(&seed, &["push"])
            .arg(&upstream)
            .arg("main")
            .assert()
            .success();

        ws
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Path of the bare upstream repository.
    pub fn upstream(&self) -> PathBuf {
        self.root().join("upstream.git")
    }

    pub fn main_dir(&self) -> PathBuf {
        self.root().join("main_repo")
    }

    pub fn sub_dir(&self) -> PathBuf {
        self.root().join("sub_repo")
    }

    fn home(&self) -> PathBuf {
        self.root().join("home")
    }

    /// The `subrepo-sync` binary, run from the workspace root with an
    /// isolated git environment and colors disabled.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("subrepo-sync");
        cmd.current_dir(self.root());
        self.isolate(&mut cmd);
        cmd.env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("SUBREPO_SYNC_MAIN_URL")
            .env_remove("SUBREPO_SYNC_SUB_URL")
            .env_remove("SUBREPO_SYNC_MAIN_DIR")
            .env_remove("SUBREPO_SYNC_SUB_DIR");
        cmd
    }

    /// Run `setup` with `sub_url` (and optionally `main_url`) and require success.
    pub fn setup(&self, main_url: Option<PathBuf>) {
        let mut cmd = self.cmd();
        cmd.arg("setup").arg("--sub-url").arg(self.upstream());
        if let Some(url) = main_url {
            cmd.arg("--main-url").arg(url);
        }
        cmd.assert().success();
    }

    /// A raw git command run in `dir`.
    pub fn git(&self, dir: &Path, args: &[&str]) -> Command {
        let mut cmd = Command::new("git");
        cmd.current_dir(dir).args(args);
        self.isolate(&mut cmd);
        cmd
    }

    /// Trimmed stdout of a git command that must succeed.
    pub fn git_stdout(&self, dir: &Path, args: &[&str]) -> String {
        let output = self.git(dir, args).output().unwrap();
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Whether a git command succeeds in `dir`.
    pub fn git_succeeds(&self, dir: &Path, args: &[&str]) -> bool {
        self.git(dir, args).output().unwrap().status.success()
    }

    pub fn write_file(&self, dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    /// Commit `name` with `content` directly with git, bypassing the CLI.
    pub fn commit_file(&self, dir: &Path, name: &str, content: &str, message: &str) {
        self.write_file(dir, name, content);
        self.git(dir, &["add", name]).assert().success();
        self.git(dir, &["commit", "-m", message]).assert().success();
    }

    fn isolate(&self, cmd: &mut Command) {
        cmd.env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_TERMINAL_PROMPT", "0");
        for (key, value) in IDENTITY {
            cmd.env(key, value);
        }
    }
}
