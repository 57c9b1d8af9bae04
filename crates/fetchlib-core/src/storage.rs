//! Target directory setup and file persistence.
//!
//! A fetched body is written to `<name>.part` and renamed over `<name>`, so the
//! final path only ever holds a complete body. A failed item never touches an
//! existing file.

use crate::error::{ItemError, SetupError};
use std::fs;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `a.js` → `a.js.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Create `dir` and any missing parents. No-op if it is already a directory.
pub fn ensure_target_dir(dir: &Path) -> Result<(), SetupError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => return Err(SetupError::NotADirectory(dir.to_path_buf())),
        Err(_) => {}
    }
    fs::create_dir_all(dir).map_err(|source| SetupError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::debug!("created target directory {}", dir.display());
    Ok(())
}

/// Write `body` to `dir/filename`, replacing any existing file. Returns the final path.
pub fn write_library(dir: &Path, filename: &str, body: &[u8]) -> Result<PathBuf, ItemError> {
    let final_path = dir.join(filename);
    let part = temp_path(&final_path);

    let written = fs::write(&part, body).and_then(|()| fs::rename(&part, &final_path));
    if let Err(source) = written {
        if let Err(e) = fs::remove_file(&part) {
            tracing::trace!("no temp file to clean up at {}: {}", part.display(), e);
        }
        return Err(ItemError::Write {
            path: final_path,
            source,
        });
    }
    Ok(final_path)
}
