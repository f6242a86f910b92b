//! Subprocess plumbing for check-diff
//!
//! Two external programs run per check: the target command, whose standard
//! output is captured into a scratch file, and the diff utility that compares
//! that file with the stored snapshot. Both sit behind narrow traits so tests
//! can swap in scripted implementations.

pub mod command_executor;
pub mod diff;
pub mod runner;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use command_executor::{CommandExecutor, Execution, SystemCommandExecutor};
pub use diff::{strip_diff_header, DiffOutcome, DiffTool, SystemDiff};
pub use runner::{run_command, CapturedOutput};
