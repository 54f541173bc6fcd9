//! # Full Bidirectional Sync
//!
//! A sync pushes the main repository's working branch to the linked remote,
//! then brings the sub repository up to date:
//!
//! 1. **Push**: push `branch` from main to `remote`.
//! 2. **Checkout**: check out `branch` in sub.
//! 3. **Pull**: pull `pull_branch` from `pull_remote` into sub.
//!
//! The stages run strictly in order. When one fails the remaining stages are
//! not issued, and the effects of earlier stages stay in place.

use std::fmt;

use log::{debug, info};

use crate::actions::{ActionOutput, SyncActions};
use crate::error::{Error, Result};
use crate::repository::RepositoryHandle;
use crate::runner::CommandRunner;

/// One step of the sync sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStage {
    Push,
    Checkout,
    Pull,
}

impl SyncStage {
    /// Every stage, in execution order.
    pub const ORDER: [SyncStage; 3] = [SyncStage::Push, SyncStage::Checkout, SyncStage::Pull];
}

impl fmt::Display for SyncStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncStage::Push => f.write_str("push"),
            SyncStage::Checkout => f.write_str("checkout"),
            SyncStage::Pull => f.write_str("pull"),
        }
    }
}

/// Everything one sync needs, held only for the duration of the call.
#[derive(Debug, Clone)]
pub struct SyncSession {
    pub main: RepositoryHandle,
    pub sub: RepositoryHandle,
    /// Remote in main that points at sub.
    pub remote: String,
    /// Branch pushed from main and checked out in sub.
    pub branch: String,
    /// Remote sub pulls from.
    pub pull_remote: String,
    /// Branch sub pulls.
    pub pull_branch: String,
}

/// Output of each completed stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub push: ActionOutput,
    pub checkout: ActionOutput,
    pub pull: ActionOutput,
}

pub struct SyncOrchestrator<'r> {
    actions: SyncActions<'r>,
}

impl<'r> SyncOrchestrator<'r> {
    pub fn new(runner: &'r dyn CommandRunner) -> Self {
        Self {
            actions: SyncActions::new(runner),
        }
    }

    pub fn sync(&self, session: &SyncSession) -> Result<SyncReport> {
        info!(
            "Syncing {} -> {} via remote '{}' on branch '{}'",
            session.main.path().display(),
            session.sub.path().display(),
            session.remote,
            session.branch
        );

        let mut report = SyncReport::default();
        for stage in SyncStage::ORDER {
            debug!("Sync stage: {}", stage);
            let output = self
                .run_stage(stage, session)
                .map_err(|source| Error::SyncAborted {
                    stage,
                    source: Box::new(source),
                })?;
            match stage {
                SyncStage::Push => report.push = output,
                SyncStage::Checkout => report.checkout = output,
                SyncStage::Pull => report.pull = output,
            }
        }

        Ok(report)
    }

    fn run_stage(&self, stage: SyncStage, session: &SyncSession) -> Result<ActionOutput> {
        match stage {
            SyncStage::Push => self
                .actions
                .push(&session.main, &session.remote, &session.branch),
            SyncStage::Checkout => self.actions.checkout(&session.sub, &session.branch),
            SyncStage::Pull => self.actions.pull(
                &session.sub,
                &session.pull_remote,
                &session.pull_branch,
            ),
        }
    }
}
