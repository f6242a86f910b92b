use std::fmt;
use std::ops::Deref;

use crate::errors::{format_command_line, Error};

/// Type-safe wrapper for command arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArguments(Vec<String>);

impl CommandArguments {
    /// Create new empty arguments
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create from a vector of strings
    #[must_use]
    pub fn from_vec(args: Vec<String>) -> Self {
        Self(args)
    }

    /// Get the arguments as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Deref for CommandArguments {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for CommandArguments {
    fn from(args: Vec<String>) -> Self {
        Self(args)
    }
}

/// A single command definition to be checked
///
/// Immutable for the duration of a run. Two invocations are the same check
/// only if the identifier, command, and argument sequence all match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub identifier: String,
    pub command: String,
    pub arguments: CommandArguments,
}

impl Invocation {
    #[must_use]
    pub fn new(
        identifier: impl Into<String>,
        command: impl Into<String>,
        arguments: Vec<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            command: command.into(),
            arguments: CommandArguments::from_vec(arguments),
        }
    }

    /// The command followed by its arguments, separated by single spaces
    #[must_use]
    pub fn command_line(&self) -> String {
        format_command_line(&self.command, &self.arguments)
    }
}

/// Hex-encoded digest identifying an [`Invocation`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(String);

impl Signature {
    /// Wrap an already computed lowercase hex digest
    #[must_use]
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Monitoring-check severity
///
/// Exit codes follow the Nagios plugin convention shared by most monitoring
/// agents. The diff pipeline itself only ever reports `Ok` or `Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl CheckStatus {
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            CheckStatus::Ok => 0,
            CheckStatus::Warning => 1,
            CheckStatus::Critical => 2,
            CheckStatus::Unknown => 3,
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Warning => "WARNING",
            CheckStatus::Critical => "CRITICAL",
            CheckStatus::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

/// Terminal result of one check run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub status: CheckStatus,
    pub message: String,
}

impl CheckOutcome {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Ok,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Critical,
            message: message.into(),
        }
    }

    /// Render the single report line, e.g. `check-diff OK: no difference`
    #[must_use]
    pub fn report(&self, check_name: &str) -> String {
        format!("{check_name} {}: {}", self.status, self.message)
    }
}

impl From<Error> for CheckOutcome {
    fn from(error: Error) -> Self {
        CheckOutcome::critical(error.to_string())
    }
}
