//! Default values for subrepo-sync.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication. Each can be overridden per
//! invocation on the command line.

/// Directory holding the main repository.
pub const MAIN_DIR: &str = "main_repo";

/// Directory holding the sub repository.
pub const SUB_DIR: &str = "sub_repo";

/// Branch pushed, pulled and merged into.
pub const BRANCH: &str = "main";

/// Name under which the sub repository is registered in the main repository.
pub const REMOTE_NAME: &str = "subrepo";

/// Remote a clone pulls from.
pub const UPSTREAM_REMOTE: &str = "origin";

pub const COMMIT_MESSAGE: &str = "Update from script";

/// Environment variable consulted for the main repository URL.
pub const MAIN_URL_ENV: &str = "SUBREPO_SYNC_MAIN_URL";

/// Environment variable consulted for the sub repository URL.
pub const SUB_URL_ENV: &str = "SUBREPO_SYNC_SUB_URL";
