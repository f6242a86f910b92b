use check_diff_cache::{Preview, SnapshotStore};
use check_diff_core::{Result, Signature, PREVIEW_LIMIT_BYTES};
use check_diff_task::{CapturedOutput, DiffOutcome, DiffTool};

/// How the new output relates to the stored snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// No snapshot existed; the output is now the snapshot
    FirstRun,
    /// Same as the snapshot; carries the head of the output
    Identical(Preview),
    /// Raw unified diff, header included
    Differs(String),
    /// The diff utility itself failed
    ToolError(String),
}

/// Compare `output` with the snapshot for `signature` and record it
///
/// The snapshot is overwritten with the new output whatever the comparison
/// says, so it always holds the latest run. A failed snapshot write fails
/// the whole comparison.
pub fn compare_with_snapshot(
    store: &SnapshotStore,
    diff: &dyn DiffTool,
    signature: &Signature,
    output: &CapturedOutput,
) -> Result<Verdict> {
    tracing::debug!(signature = %signature, bytes = output.size(), "comparing output");

    if !store.exists(signature) {
        tracing::info!(signature = %signature, "no snapshot yet, recording first output");
        store.write(signature, output.path())?;
        return Ok(Verdict::FirstRun);
    }

    let outcome = diff.compare(&store.path_for(signature), output.path());
    store.write(signature, output.path())?;

    let verdict = match outcome {
        DiffOutcome::Identical => Verdict::Identical(store.preview(signature, PREVIEW_LIMIT_BYTES)?),
        DiffOutcome::Differences(raw) => Verdict::Differs(raw),
        DiffOutcome::ToolError(message) => Verdict::ToolError(message),
    };
    tracing::debug!(?verdict, "compared output with snapshot");

    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use check_diff_core::Invocation;
    use check_diff_task::run_command;
    use check_diff_task::testing::{FixedDiff, ScriptedExecutor};
    use std::fs;
    use tempfile::TempDir;

    fn capture(executor: &ScriptedExecutor, dir: &TempDir) -> CapturedOutput {
        run_command(executor, &Invocation::new("", "date", Vec::new()), dir.path()).unwrap()
    }

    #[test]
    fn test_snapshot_replaced_even_when_diff_fails() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path(), "7");
        let signature = Signature::from_hex("feed");
        let executor = ScriptedExecutor::new();
        fs::write(store.path_for(&signature), "monday\n").unwrap();

        executor.add_output("date", &[], "tuesday\n");
        let output = capture(&executor, &dir);
        let diff = FixedDiff(DiffOutcome::ToolError("exit status: 2 - boom".to_string()));
        let verdict = compare_with_snapshot(&store, &diff, &signature, &output).unwrap();

        assert_eq!(verdict, Verdict::ToolError("exit status: 2 - boom".to_string()));
        assert_eq!(
            fs::read_to_string(store.path_for(&signature)).unwrap(),
            "tuesday\n"
        );
    }

    #[test]
    fn test_first_run_skips_diff() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path(), "7");
        let signature = Signature::from_hex("beef");
        let executor = ScriptedExecutor::new();
        executor.add_output("date", &[], "wednesday\n");
        let output = capture(&executor, &dir);

        // a diff that would report a tool error if it were consulted
        let diff = FixedDiff(DiffOutcome::ToolError("unreachable".to_string()));
        let verdict = compare_with_snapshot(&store, &diff, &signature, &output).unwrap();

        assert_eq!(verdict, Verdict::FirstRun);
        assert!(store.exists(&signature));
    }

    #[test]
    fn test_identical_carries_preview_of_new_output() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path(), "7");
        let signature = Signature::from_hex("cafe");
        let executor = ScriptedExecutor::new();
        fs::write(store.path_for(&signature), "same\n").unwrap();
        executor.add_output("date", &[], "same\n");
        let output = capture(&executor, &dir);

        let verdict =
            compare_with_snapshot(&store, &FixedDiff(DiffOutcome::Identical), &signature, &output)
                .unwrap();

        assert_eq!(
            verdict,
            Verdict::Identical(Preview {
                head: b"same\n".to_vec(),
                size: 5,
            })
        );
    }
}
