//! Line diff between the stored snapshot and a fresh capture
//!
//! The comparison is delegated to the external `diff` utility, invoked as
//! `diff -U 1 <previous> <current>`. Its exit status is the only signal
//! used: 0 means identical, 1 means differences were found, anything else
//! (including death by signal or failure to start) is a tool error.
//!
//! Unified output from GNU diffutils and the BSD/macOS diff both start with
//! exactly two header lines (`--- <previous>` and `+++ <current>`), which
//! [`strip_diff_header`] removes. When either file looks binary, diff prints
//! a single `Binary files ... differ` line instead; that output has no
//! header and is kept whole.

use check_diff_core::{Error, Result, DIFF_CONTEXT_LINES, DIFF_HEADER_LINES};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Result of comparing two files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    Identical,
    /// Raw unified diff, header included
    Differences(String),
    /// The tool failed; the message joins its status and stderr
    ToolError(String),
}

impl DiffOutcome {
    /// Decide the outcome from the diff process's own exit status
    pub fn from_exit(status: ExitStatus, stdout: &[u8], stderr: &[u8]) -> Self {
        match status.code() {
            Some(0) => DiffOutcome::Identical,
            Some(1) => DiffOutcome::Differences(String::from_utf8_lossy(stdout).into_owned()),
            _ => DiffOutcome::ToolError(format!(
                "{status} - {}",
                String::from_utf8_lossy(stderr).trim_end()
            )),
        }
    }
}

/// Compares a previous snapshot with the current output
pub trait DiffTool {
    fn compare(&self, previous: &Path, current: &Path) -> DiffOutcome;
}

/// The system diff utility, resolved once on the search path
#[derive(Debug, Clone)]
pub struct SystemDiff {
    program: PathBuf,
}

impl SystemDiff {
    /// Resolve `name` (a bare program name or a path) to an executable
    pub fn locate(name: &str) -> Result<Self> {
        let program =
            which::which(name).map_err(|e| Error::tool_not_found(name, e.to_string()))?;
        tracing::debug!(program = %program.display(), "resolved diff utility");
        Ok(Self { program })
    }
}

impl DiffTool for SystemDiff {
    fn compare(&self, previous: &Path, current: &Path) -> DiffOutcome {
        let output = Command::new(&self.program)
            .arg("-U")
            .arg(DIFF_CONTEXT_LINES)
            .arg(previous)
            .arg(current)
            .stdin(Stdio::null())
            .output();

        match output {
            Ok(output) => DiffOutcome::from_exit(output.status, &output.stdout, &output.stderr),
            Err(e) => DiffOutcome::ToolError(format!(
                "failed to execute '{}': {e}",
                self.program.display()
            )),
        }
    }
}

/// Drop the two unified-diff header lines, keeping the hunks
///
/// Output that does not start with a `---` header line is returned as is.
pub fn strip_diff_header(raw: &str) -> String {
    if !raw.starts_with("---") {
        return raw.to_string();
    }
    raw.split('\n')
        .skip(DIFF_HEADER_LINES)
        .collect::<Vec<_>>()
        .join("\n")
}
