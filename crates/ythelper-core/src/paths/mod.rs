//! Destination directory handling.
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No terminal I/O; the CLI reports creation to the user

mod ensure;
mod error;

pub use ensure::{
    DirectoryCreationStrategy, PreparedDirectory, normalize_destination, prepare_destination,
};
#[cfg(unix)]
pub use ensure::DIRECTORY_MODE;
pub use error::PathError;
