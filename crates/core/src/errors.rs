use std::path::PathBuf;
use std::process::ExitStatus;

/// Result type alias for check-diff operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for check-diff operations
///
/// Every variant is fatal to the current run. The orchestrator turns whatever
/// it receives into a CRITICAL outcome carrying the `Display` text below, so
/// these messages are what an operator reads in the monitoring system.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A helper program (the diff utility) is not on the search path
    #[error("unable to locate '{tool}': {message}")]
    ToolNotFound { tool: String, message: String },

    /// The target command could not be started or waited on
    #[error("failed to execute '{}': {source}", format_command_line(.command, .args))]
    Launch {
        command: String,
        args: Vec<String>,
        #[source]
        source: std::io::Error,
    },

    /// The target command ran but did not exit successfully
    #[error("{status} - {stderr}")]
    NonZeroExit {
        command: String,
        args: Vec<String>,
        status: ExitStatus,
        stderr: String,
    },

    /// File system operations
    #[error("file system {operation} operation failed for '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// The diff utility failed for a reason other than reporting differences
    #[error("{message}")]
    DiffTool { message: String },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

/// Render a command and its arguments the way a user would type them
#[must_use]
pub fn format_command_line(command: &str, args: &[String]) -> String {
    if args.is_empty() {
        command.to_string()
    } else {
        format!("{command} {}", args.join(" "))
    }
}

impl Error {
    /// Create a tool lookup error
    #[must_use]
    pub fn tool_not_found(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ToolNotFound {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a launch error for a command that never ran to completion
    #[must_use]
    pub fn launch(command: impl Into<String>, args: &[String], source: std::io::Error) -> Self {
        Error::Launch {
            command: command.into(),
            args: args.to_vec(),
            source,
        }
    }

    /// Create an error for a command that exited unsuccessfully
    ///
    /// Trailing whitespace is trimmed from `stderr` so the message stays on
    /// as few lines as the child allows.
    #[must_use]
    pub fn non_zero_exit(
        command: impl Into<String>,
        args: &[String],
        status: ExitStatus,
        stderr: &[u8],
    ) -> Self {
        Error::NonZeroExit {
            command: command.into(),
            args: args.to_vec(),
            status,
            stderr: String::from_utf8_lossy(stderr).trim_end().to_string(),
        }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a diff tool error
    #[must_use]
    pub fn diff_tool(message: impl Into<String>) -> Self {
        Error::DiffTool {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// The exit code reported by the child, if it exited normally
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::NonZeroExit { status, .. } => status.code(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_command_line_without_args() {
        assert_eq!(format_command_line("uptime", &[]), "uptime");
    }

    #[test]
    fn test_command_line_with_args() {
        let args = vec!["-l".to_string(), "/etc".to_string()];
        assert_eq!(format_command_line("ls", &args), "ls -l /etc");
    }

    #[test]
    fn test_launch_error_mentions_command_and_cause() {
        let err = Error::launch(
            "no-such-binary",
            &["--flag".to_string()],
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let message = err.to_string();
        assert!(message.contains("no-such-binary --flag"));
        assert!(message.contains("No such file or directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_joins_status_and_stderr() {
        use std::os::unix::process::ExitStatusExt;

        let status = ExitStatus::from_raw(2 << 8);
        let err = Error::non_zero_exit("ls", &[], status, b"ls: cannot access 'x'\n");
        assert_eq!(err.to_string(), "exit status: 2 - ls: cannot access 'x'");
        assert_eq!(err.exit_code(), Some(2));
    }

    #[test]
    fn test_diff_tool_error_is_verbatim() {
        let err = Error::diff_tool("exit status: 2 - diff: missing operand");
        assert_eq!(err.to_string(), "exit status: 2 - diff: missing operand");
        assert_eq!(err.exit_code(), None);
    }
}
