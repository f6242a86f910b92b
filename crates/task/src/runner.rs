use crate::command_executor::CommandExecutor;
use check_diff_core::{Error, Invocation, Result, OUTPUT_FILE_PREFIX};
use std::path::Path;
use tempfile::NamedTempFile;

/// Standard output of one successful run
///
/// Backed by a uniquely named scratch file that is deleted when this value
/// is dropped, whichever way the check ends.
#[derive(Debug)]
pub struct CapturedOutput {
    file: NamedTempFile,
    size: u64,
}

impl CapturedOutput {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Run the invocation's command with stdout captured in `scratch_dir`
///
/// Launch failures and non-zero exits are both errors; in either case the
/// scratch file is already gone by the time the error is returned.
pub fn run_command(
    executor: &dyn CommandExecutor,
    invocation: &Invocation,
    scratch_dir: &Path,
) -> Result<CapturedOutput> {
    let file = tempfile::Builder::new()
        .prefix(OUTPUT_FILE_PREFIX)
        .tempfile_in(scratch_dir)
        .map_err(|e| Error::file_system(scratch_dir, "create output file", e))?;

    let sink = file
        .as_file()
        .try_clone()
        .map_err(|e| Error::file_system(file.path(), "duplicate output handle", e))?;

    let execution = executor.execute(&invocation.command, &invocation.arguments, sink)?;
    if !execution.status.success() {
        return Err(Error::non_zero_exit(
            &invocation.command,
            &invocation.arguments,
            execution.status,
            &execution.stderr,
        ));
    }

    let size = file
        .as_file()
        .metadata()
        .map_err(|e| Error::file_system(file.path(), "stat output file", e))?
        .len();

    tracing::debug!(path = %file.path().display(), bytes = size, "captured command output");

    Ok(CapturedOutput { file, size })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedExecutor;
    use std::fs;
    use tempfile::TempDir;

    fn scratch_entries(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_output_is_captured() {
        let scratch = TempDir::new().unwrap();
        let executor = ScriptedExecutor::new();
        executor.add_output("echo", &["hello"], "hello\n");

        let invocation = Invocation::new("", "echo", vec!["hello".to_string()]);
        let output = run_command(&executor, &invocation, scratch.path()).unwrap();

        assert_eq!(output.size(), 6);
        assert_eq!(fs::read_to_string(output.path()).unwrap(), "hello\n");
        assert!(output
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(OUTPUT_FILE_PREFIX));
    }

    #[test]
    fn test_scratch_file_removed_on_drop() {
        let scratch = TempDir::new().unwrap();
        let executor = ScriptedExecutor::new();
        executor.add_output("date", &[], "today\n");

        let output = run_command(&executor, &Invocation::new("", "date", Vec::new()), scratch.path())
            .unwrap();
        let path = output.path().to_path_buf();
        assert!(path.exists());

        drop(output);
        assert!(!path.exists());
        assert_eq!(scratch_entries(scratch.path()), 0);
    }

    #[test]
    fn test_non_zero_exit_includes_stderr_and_cleans_up() {
        let scratch = TempDir::new().unwrap();
        let executor = ScriptedExecutor::new();
        executor.add_failure("ls", &["/nope"], 2, "ls: /nope: No such file or directory\n");

        let invocation = Invocation::new("", "ls", vec!["/nope".to_string()]);
        let err = run_command(&executor, &invocation, scratch.path()).unwrap_err();

        assert!(matches!(err, Error::NonZeroExit { .. }));
        assert_eq!(err.exit_code(), Some(2));
        assert!(err.to_string().ends_with(" - ls: /nope: No such file or directory"));
        assert_eq!(scratch_entries(scratch.path()), 0);
    }

    #[test]
    fn test_launch_error_cleans_up() {
        let scratch = TempDir::new().unwrap();
        let executor = ScriptedExecutor::new();

        let invocation = Invocation::new("", "missing", Vec::new());
        let err = run_command(&executor, &invocation, scratch.path()).unwrap_err();

        assert!(matches!(err, Error::Launch { .. }));
        assert_eq!(scratch_entries(scratch.path()), 0);
    }

    #[test]
    fn test_unwritable_scratch_dir_is_io_failure() {
        let scratch = TempDir::new().unwrap();
        let missing = scratch.path().join("does-not-exist");
        let executor = ScriptedExecutor::new();

        let err = run_command(&executor, &Invocation::new("", "true", Vec::new()), &missing)
            .unwrap_err();

        assert!(err.to_string().contains("create output file"));
    }
}
