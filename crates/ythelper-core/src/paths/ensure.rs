//! Destination directory normalization and creation.
//!
//! Existing directories are used as-is; nothing is written to probe them.

use std::fs::{self, DirBuilder};
use std::io;
use std::path::{Path, PathBuf, is_separator};

use super::error::PathError;

/// Permission bits for newly created directories (`rwxr-xr-x`).
#[cfg(unix)]
pub const DIRECTORY_MODE: u32 = 0o755;

/// Strategy for creating a missing destination directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryCreationStrategy {
    /// Create only the final component; the parent must already exist.
    #[default]
    SingleLevel,
    /// Create every missing ancestor as well.
    Recursive,
}

/// A destination directory that is ready to receive downloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedDirectory {
    pub path: PathBuf,
    /// True if this call created the directory.
    pub created: bool,
}

/// Strip at most one trailing path separator.
///
/// The filesystem root keeps its separator so it never collapses to an empty
/// path.
pub fn normalize_destination(raw: &str) -> Result<PathBuf, PathError> {
    if raw.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let trimmed = match raw.chars().last() {
        Some(last) if is_separator(last) && raw.len() > last.len_utf8() => {
            &raw[..raw.len() - last.len_utf8()]
        }
        _ => raw,
    };

    Ok(PathBuf::from(trimmed))
}

/// Make sure `path` exists as a directory, creating it when missing.
pub fn prepare_destination(
    path: &Path,
    strategy: DirectoryCreationStrategy,
) -> Result<PreparedDirectory, PathError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {
            tracing::debug!(path = %path.display(), "destination exists");
            Ok(PreparedDirectory {
                path: path.to_path_buf(),
                created: false,
            })
        }
        Ok(_) => Err(PathError::NotADirectory(path.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            dir_builder(strategy)
                .create(path)
                .map_err(|source| PathError::CreateFailed {
                    path: path.to_path_buf(),
                    source,
                })?;
            tracing::debug!(path = %path.display(), ?strategy, "destination created");
            Ok(PreparedDirectory {
                path: path.to_path_buf(),
                created: true,
            })
        }
        Err(source) => Err(PathError::Inspect {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn dir_builder(strategy: DirectoryCreationStrategy) -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(matches!(strategy, DirectoryCreationStrategy::Recursive));

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIRECTORY_MODE);
    }

    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_trailing_separator_stripped_once() {
        assert_eq!(
            normalize_destination("/tmp/x/").unwrap(),
            normalize_destination("/tmp/x").unwrap()
        );
        assert_eq!(normalize_destination("/tmp/x//").unwrap(), PathBuf::from("/tmp/x/"));
        assert_eq!(normalize_destination("rel/").unwrap(), PathBuf::from("rel"));
    }

    #[test]
    fn test_root_is_kept() {
        assert_eq!(normalize_destination("/").unwrap(), PathBuf::from("/"));
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(matches!(normalize_destination(""), Err(PathError::EmptyPath)));
    }

    #[test]
    fn test_existing_directory_untouched() {
        let temp = tempdir().unwrap();
        let prepared =
            prepare_destination(temp.path(), DirectoryCreationStrategy::SingleLevel).unwrap();
        assert!(!prepared.created);
        assert_eq!(prepared.path, temp.path());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_directory_created() {
        let temp = tempdir().unwrap();
        let target = temp.path().join("downloads");

        let prepared = prepare_destination(&target, DirectoryCreationStrategy::SingleLevel).unwrap();
        assert!(prepared.created);
        assert!(target.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_created_directory_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let target = temp.path().join("perm");
        prepare_destination(&target, DirectoryCreationStrategy::SingleLevel).unwrap();

        // The process umask can only clear bits.
        let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & !DIRECTORY_MODE, 0);
        assert_eq!(mode & 0o700, 0o700);
    }

    #[test]
    fn test_regular_file_is_not_a_directory() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, b"x").unwrap();

        let err = prepare_destination(&file, DirectoryCreationStrategy::Recursive).unwrap_err();
        assert!(matches!(err, PathError::NotADirectory(p) if p == file));
    }

    #[test]
    fn test_single_level_needs_parent() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("a").join("b");

        let err = prepare_destination(&nested, DirectoryCreationStrategy::SingleLevel).unwrap_err();
        assert!(matches!(err, PathError::CreateFailed { .. }));
        assert!(!nested.exists());
    }

    #[test]
    fn test_recursive_creates_parents() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("a").join("b");

        let prepared = prepare_destination(&nested, DirectoryCreationStrategy::Recursive).unwrap();
        assert!(prepared.created);
        assert!(nested.is_dir());
    }
}
