/// Constants used throughout the check-diff codebase
// Check reporting
pub const CHECK_NAME: &str = "check-diff";

// Snapshot and scratch file naming
pub const SNAPSHOT_FILE_PREFIX: &str = "check-diff";
pub const OUTPUT_FILE_PREFIX: &str = "check-diff-output-";

// Message formatting; these limits are part of the output contract
pub const PREVIEW_LIMIT_BYTES: usize = 128;
pub const DIFF_BODY_LIMIT_CHARS: usize = 512;
pub const ELLIPSIS: &str = "...";
pub const FENCE: &str = "```";

// Diff program invocation
pub const DEFAULT_DIFF_PROGRAM: &str = "diff";
pub const DIFF_CONTEXT_LINES: &str = "1";
pub const DIFF_HEADER_LINES: usize = 2;

// Environment variable names
pub const CHECK_DIFF_STATE_DIR_VAR: &str = "CHECK_DIFF_STATE_DIR";
pub const CHECK_DIFF_DIFF_VAR: &str = "CHECK_DIFF_DIFF";
pub const CHECK_DIFF_LOG_VAR: &str = "CHECK_DIFF_LOG";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "warn";
