//! Shared utilities for check-diff
//!
//! File helpers, path construction, and logging setup used by the other
//! crates in the workspace.

pub mod atomic_file;
pub mod logging;
pub mod paths;

pub use atomic_file::*;
pub use paths::*;
