//! Path utilities for check-diff file locations

use std::env;
use std::path::PathBuf;

/// Identifier of the invoking user, used to namespace snapshot files
///
/// - Unix: the numeric uid
/// - elsewhere: `%USERNAME%`, or `default` when unset
pub fn current_user_id() -> String {
    #[cfg(unix)]
    {
        users::get_current_uid().to_string()
    }

    #[cfg(not(unix))]
    {
        env::var("USERNAME").unwrap_or_else(|_| "default".to_string())
    }
}

/// The system temporary directory, honouring `TMPDIR` on Unix
pub fn default_state_dir() -> PathBuf {
    env::temp_dir()
}
