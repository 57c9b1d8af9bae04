//! Error types for the two failure scopes of a run: setup (fatal) and per item (logged, skipped).

use crate::http::FetchError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The target directory could not be made ready. Aborts the run before any request.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("target path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("failed to create target directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure while fetching or writing a single manifest entry.
#[derive(Debug, Error)]
pub enum ItemError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
