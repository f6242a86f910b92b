use check_diff_core::{CommandArguments, Error, Result};
use std::fs::File;
use std::process::{Command, ExitStatus, Stdio};

/// What a finished child process reports back
#[derive(Debug, Clone)]
pub struct Execution {
    pub status: ExitStatus,
    pub stderr: Vec<u8>,
}

/// Trait for executing external commands
///
/// Implementations write the child's standard output into `stdout` and
/// return its exit status together with everything it wrote to standard
/// error. A command that cannot be started is an `Err`; a command that ran
/// and failed is an `Ok` with a non-success status.
pub trait CommandExecutor {
    fn execute(&self, cmd: &str, args: &CommandArguments, stdout: File) -> Result<Execution>;
}

/// Production implementation that spawns real processes
///
/// Arguments are passed to the program verbatim; no shell is involved.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandExecutor;

impl SystemCommandExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for SystemCommandExecutor {
    fn execute(&self, cmd: &str, args: &CommandArguments, stdout: File) -> Result<Execution> {
        let child = Command::new(cmd)
            .args(args.as_slice())
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::launch(cmd, args, e))?;

        // stdout goes straight to the file, so only stderr is collected here
        let output = child
            .wait_with_output()
            .map_err(|e| Error::launch(cmd, args, e))?;

        tracing::debug!(command = %cmd, status = %output.status, "command finished");

        Ok(Execution {
            status: output.status,
            stderr: output.stderr,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    fn args(values: &[&str]) -> CommandArguments {
        CommandArguments::from_vec(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_stdout_is_written_to_sink() {
        let sink = NamedTempFile::new().unwrap();
        let execution = SystemCommandExecutor::new()
            .execute("printf", &args(&["hello\\n"]), sink.reopen().unwrap())
            .unwrap();

        assert!(execution.status.success());
        assert_eq!(fs::read_to_string(sink.path()).unwrap(), "hello\n");
    }

    #[test]
    fn test_arguments_are_not_shell_interpreted() {
        let sink = NamedTempFile::new().unwrap();
        SystemCommandExecutor::new()
            .execute("echo", &args(&["$HOME", ";", "ls"]), sink.reopen().unwrap())
            .unwrap();

        assert_eq!(fs::read_to_string(sink.path()).unwrap(), "$HOME ; ls\n");
    }

    #[test]
    fn test_stderr_and_status_are_reported() {
        let sink = NamedTempFile::new().unwrap();
        let execution = SystemCommandExecutor::new()
            .execute(
                "sh",
                &args(&["-c", "echo oops >&2; exit 3"]),
                sink.reopen().unwrap(),
            )
            .unwrap();

        assert_eq!(execution.status.code(), Some(3));
        assert_eq!(execution.stderr, b"oops\n");
    }

    #[test]
    fn test_missing_program_is_a_launch_error() {
        let sink = NamedTempFile::new().unwrap();
        let err = SystemCommandExecutor::new()
            .execute(
                "check-diff-definitely-not-a-command",
                &CommandArguments::new(),
                sink.reopen().unwrap(),
            )
            .unwrap_err();

        assert!(matches!(err, Error::Launch { .. }));
        assert!(err
            .to_string()
            .contains("check-diff-definitely-not-a-command"));
    }
}
