//! Runtime settings read from the environment
//!
//! | variable | default |
//! |---|---|
//! | `CHECK_DIFF_STATE_DIR` | system temp dir |
//! | `CHECK_DIFF_DIFF` | `diff` |
//! | `CHECK_DIFF_LOG` | unset (`warn`) |
//!
//! Empty values count as unset.

use check_diff_core::{
    Error, Result, CHECK_DIFF_DIFF_VAR, CHECK_DIFF_LOG_VAR, CHECK_DIFF_STATE_DIR_VAR,
    DEFAULT_DIFF_PROGRAM,
};
use check_diff_utils::default_state_dir;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Where snapshots and the scratch output file live
    pub state_dir: PathBuf,
    /// Diff program name or path
    pub diff_program: String,
    /// Tracing filter directive
    pub log_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
            diff_program: DEFAULT_DIFF_PROGRAM.to_string(),
            log_filter: None,
        }
    }
}

impl Settings {
    /// Load settings from the process environment
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let mut settings = Self::default();

        if let Some(dir) = get(CHECK_DIFF_STATE_DIR_VAR) {
            let dir = PathBuf::from(dir);
            // A relative directory would move with the working directory and
            // the snapshot would never be found again
            if !dir.is_absolute() {
                return Err(Error::configuration(format!(
                    "{CHECK_DIFF_STATE_DIR_VAR} must be an absolute path, got '{}'",
                    dir.display()
                )));
            }
            settings.state_dir = dir;
        }

        if let Some(program) = get(CHECK_DIFF_DIFF_VAR) {
            settings.diff_program = program;
        }

        settings.log_filter = get(CHECK_DIFF_LOG_VAR);

        Ok(settings)
    }
}
