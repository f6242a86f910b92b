//! Per-user snapshot store
//!
//! Snapshots live directly in the state directory (the system temp dir by
//! default) as `check-diff-<user-id>-<signature>`. The name depends only on
//! the invoking user and the signature, so repeated runs of the same
//! invocation always land on the same file.

use check_diff_core::{Error, Result, Signature, SNAPSHOT_FILE_PREFIX};
use check_diff_utils::{copy_atomic, current_user_id};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Leading bytes and total size of a file, for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub head: Vec<u8>,
    pub size: u64,
}

impl Preview {
    /// Whether the file holds more than `head`
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.size > self.head.len() as u64
    }
}

/// Read at most `limit` bytes from the start of `path` along with its size
pub fn read_preview(path: &Path, limit: usize) -> Result<Preview> {
    let file = File::open(path).map_err(|e| Error::file_system(path, "open for preview", e))?;
    let size = file
        .metadata()
        .map_err(|e| Error::file_system(path, "stat", e))?
        .len();

    let mut head = Vec::with_capacity(limit);
    file.take(limit as u64)
        .read_to_end(&mut head)
        .map_err(|e| Error::file_system(path, "read preview", e))?;

    Ok(Preview { head, size })
}

/// Maps signatures to snapshot files for one user
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
    user_id: String,
}

impl SnapshotStore {
    /// Create a store rooted at `root` for an explicit user id
    pub fn new(root: impl Into<PathBuf>, user_id: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            user_id: user_id.into(),
        }
    }

    /// Create a store rooted at `root` for the invoking user
    pub fn for_current_user(root: impl Into<PathBuf>) -> Self {
        Self::new(root, current_user_id())
    }

    /// Location of the snapshot for `signature`
    pub fn path_for(&self, signature: &Signature) -> PathBuf {
        self.root.join(format!(
            "{SNAPSHOT_FILE_PREFIX}-{}-{}",
            self.user_id, signature
        ))
    }

    /// Whether a snapshot has been recorded for `signature`
    pub fn exists(&self, signature: &Signature) -> bool {
        self.path_for(signature).is_file()
    }

    /// Leading bytes and size of the stored snapshot
    pub fn preview(&self, signature: &Signature, limit: usize) -> Result<Preview> {
        read_preview(&self.path_for(signature), limit)
    }

    /// Replace (or create) the snapshot with the content of `source`
    pub fn write(&self, signature: &Signature, source: &Path) -> Result<u64> {
        let path = self.path_for(signature);
        let written = copy_atomic(source, &path)?;
        tracing::debug!(path = %path.display(), bytes = written, "snapshot written");
        Ok(written)
    }
}
