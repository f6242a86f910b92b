//! Deterministic stand-ins for the subprocess traits
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for downstream test suites.

use crate::command_executor::{CommandExecutor, Execution};
use crate::diff::{DiffOutcome, DiffTool};
use check_diff_core::{CommandArguments, Error, Result};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitStatus;
use std::sync::Mutex;

#[derive(Debug, Clone)]
struct ScriptedResponse {
    stdout: Vec<u8>,
    stderr: Vec<u8>,
    status_code: i32,
}

/// Executor that replays configured responses keyed by command line
///
/// Unknown command lines fail the way a missing binary would.
#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    responses: Mutex<HashMap<String, ScriptedResponse>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(cmd: &str, args: &[String]) -> String {
        format!("{} {}", cmd, args.join(" "))
    }

    fn insert(&self, cmd: &str, args: &[&str], response: ScriptedResponse) {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(Self::key(cmd, &args), response);
        }
    }

    /// Succeed with `stdout`, replacing any earlier response
    pub fn add_output(&self, cmd: &str, args: &[&str], stdout: &str) {
        self.insert(
            cmd,
            args,
            ScriptedResponse {
                stdout: stdout.as_bytes().to_vec(),
                stderr: Vec::new(),
                status_code: 0,
            },
        );
    }

    /// Exit with `status_code` after writing `stderr`
    pub fn add_failure(&self, cmd: &str, args: &[&str], status_code: i32, stderr: &str) {
        self.insert(
            cmd,
            args,
            ScriptedResponse {
                stdout: Vec::new(),
                stderr: stderr.as_bytes().to_vec(),
                status_code,
            },
        );
    }
}

impl CommandExecutor for ScriptedExecutor {
    fn execute(&self, cmd: &str, args: &CommandArguments, mut stdout: File) -> Result<Execution> {
        let response = self
            .responses
            .lock()
            .map_err(|e| Error::configuration(format!("failed to lock scripted responses: {e}")))?
            .get(&Self::key(cmd, args))
            .cloned();

        let Some(response) = response else {
            return Err(Error::launch(
                cmd,
                args,
                io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            ));
        };

        stdout
            .write_all(&response.stdout)
            .map_err(|e| Error::file_system("<scripted stdout>", "write", e))?;

        Ok(Execution {
            status: exit_status::from_code(response.status_code),
            stderr: response.stderr,
        })
    }
}

/// Diff that compares file contents in process
///
/// Differences are rendered as a unified-style block: two header lines, a
/// single hunk marker, every previous line removed and every current line
/// added. Good enough for asserting on `-old`/`+new` lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentDiff;

impl DiffTool for ContentDiff {
    fn compare(&self, previous: &Path, current: &Path) -> DiffOutcome {
        let (old, new) = match (fs::read_to_string(previous), fs::read_to_string(current)) {
            (Ok(old), Ok(new)) => (old, new),
            (Err(e), _) | (_, Err(e)) => return DiffOutcome::ToolError(e.to_string()),
        };
        if old == new {
            return DiffOutcome::Identical;
        }

        let mut raw = format!(
            "--- {}\n+++ {}\n@@ -1 +1 @@\n",
            previous.display(),
            current.display()
        );
        for line in old.lines() {
            raw.push_str(&format!("-{line}\n"));
        }
        for line in new.lines() {
            raw.push_str(&format!("+{line}\n"));
        }
        DiffOutcome::Differences(raw)
    }
}

/// Diff that always answers with the same outcome
#[derive(Debug, Clone)]
pub struct FixedDiff(pub DiffOutcome);

impl DiffTool for FixedDiff {
    fn compare(&self, _previous: &Path, _current: &Path) -> DiffOutcome {
        self.0.clone()
    }
}

mod exit_status {
    use super::ExitStatus;

    #[cfg(unix)]
    pub fn from_code(code: i32) -> ExitStatus {
        use std::os::unix::process::ExitStatusExt;
        ExitStatus::from_raw(code << 8)
    }

    #[cfg(windows)]
    pub fn from_code(code: i32) -> ExitStatus {
        use std::os::windows::process::ExitStatusExt;
        ExitStatus::from_raw(code as u32)
    }
}
