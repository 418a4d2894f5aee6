//! Path-related error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing the destination directory.
#[derive(Debug, Error)]
pub enum PathError {
    /// An empty path was provided.
    #[error("download path cannot be empty")]
    EmptyPath,

    /// The path exists but is something other than a directory.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// The path could not be inspected for a reason other than absence.
    #[error("cannot access {path}: {source}")]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creating the directory failed.
    #[error("error creating dir {path}: {source}")]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
