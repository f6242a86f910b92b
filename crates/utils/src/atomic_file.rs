//! Atomic file operations so a reader never sees a half-written snapshot

use check_diff_core::{Error, Result};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use uuid::Uuid;

/// Replace `dest` with the content of `source` by copying into a temporary
/// sibling file and renaming it over the destination
///
/// Returns the number of bytes copied.
pub fn copy_atomic(source: &Path, dest: &Path) -> Result<u64> {
    let parent = dest.parent().ok_or_else(|| {
        Error::configuration(format!(
            "invalid destination path '{}': no parent directory",
            dest.display()
        ))
    })?;

    let mut reader =
        File::open(source).map_err(|e| Error::file_system(source, "open source file", e))?;

    // Same directory as the destination so the rename never crosses devices
    let temp_name = format!(".{}.tmp", Uuid::new_v4());
    let temp_path = parent.join(&temp_name);

    let result = (|| -> Result<u64> {
        let mut file = OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(&temp_path)
            .map_err(|e| Error::file_system(&temp_path, "create temporary file", e))?;

        let copied = io::copy(&mut reader, &mut file)
            .map_err(|e| Error::file_system(&temp_path, "copy into temporary file", e))?;

        file.sync_all()
            .map_err(|e| Error::file_system(&temp_path, "sync temporary file", e))?;

        Ok(copied)
    })();

    let copied = match result {
        Ok(copied) => copied,
        Err(e) => {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
    };

    fs::rename(&temp_path, dest).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::file_system(dest, "atomic rename", e)
    })?;

    Ok(copied)
}
