//! The diff-and-cache check
//!
//! One run: derive the invocation's signature, run the command into a
//! scratch file, compare the result with the stored snapshot, replace the
//! snapshot, and report. Any failure along the way ends the run as
//! CRITICAL with the error's message.

pub mod classifier;
pub mod differ;

use crate::settings::Settings;
use check_diff_cache::{derive_signature, SnapshotStore};
use check_diff_core::{CheckOutcome, Invocation, Result};
use check_diff_task::{run_command, CommandExecutor, DiffTool, SystemCommandExecutor, SystemDiff};
use std::path::PathBuf;

pub use classifier::classify;
pub use differ::{compare_with_snapshot, Verdict};

/// Sequences one check run over injected collaborators
pub struct Checker<'a> {
    executor: &'a dyn CommandExecutor,
    diff: &'a dyn DiffTool,
    store: SnapshotStore,
    scratch_dir: PathBuf,
}

impl<'a> Checker<'a> {
    pub fn new(
        executor: &'a dyn CommandExecutor,
        diff: &'a dyn DiffTool,
        store: SnapshotStore,
        scratch_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            executor,
            diff,
            store,
            scratch_dir: scratch_dir.into(),
        }
    }

    /// Run the check; never fails, errors become CRITICAL outcomes
    pub fn check(&self, invocation: &Invocation) -> CheckOutcome {
        self.try_check(invocation).unwrap_or_else(|e| {
            tracing::warn!(error = %e, exit_code = ?e.exit_code(), "check failed");
            CheckOutcome::from(e)
        })
    }

    fn try_check(&self, invocation: &Invocation) -> Result<CheckOutcome> {
        let signature = derive_signature(invocation);
        tracing::debug!(snapshot = %self.store.path_for(&signature).display(), "resolved snapshot");

        // Dropped at the end of this function on every path
        let output = run_command(self.executor, invocation, &self.scratch_dir)?;

        let verdict = compare_with_snapshot(&self.store, self.diff, &signature, &output)?;
        Ok(classify(verdict, invocation))
    }
}

/// Run the check with the real subprocess implementations
///
/// The diff utility is resolved before the command runs, so a host without
/// it reports CRITICAL without touching any state.
pub fn check_diff(invocation: &Invocation, settings: &Settings) -> CheckOutcome {
    let diff = match SystemDiff::locate(&settings.diff_program) {
        Ok(diff) => diff,
        Err(e) => return CheckOutcome::from(e),
    };
    let executor = SystemCommandExecutor::new();
    let store = SnapshotStore::for_current_user(&settings.state_dir);

    Checker::new(&executor, &diff, store, &settings.state_dir).check(invocation)
}
