//! CLI error type and exit-code mapping.

use thiserror::Error;
use ythelper_core::{
    DependencyError, ExecutionError, PathError, RequestError, SettingsError,
};

/// Exit status for every failure.
pub const EXIT_FAILURE: u8 = 1;

/// Anything that stops a download run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Rejected configuration (flags or environment).
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Rejected positional arguments.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Required tool missing.
    #[error(transparent)]
    Dependency(#[from] DependencyError),

    /// Destination directory problem.
    #[error(transparent)]
    Path(#[from] PathError),

    /// Download tool could not be run or failed.
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

impl CliError {
    /// Map error to an exit code. All failures exit 1.
    pub const fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }

    /// Extra guidance printed after the error line, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Dependency(err) => err.dependency().install_hint.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use ythelper_core::Dependency;

    #[test]
    fn test_every_variant_exits_one() {
        let errors = [
            CliError::Settings(SettingsError::EmptyToolName("download")),
            CliError::Request(RequestError::InvalidMode("foo".to_string())),
            CliError::Path(PathError::NotADirectory(PathBuf::from("/etc/passwd"))),
            CliError::Execution(ExecutionError::ExternalToolFailed(2)),
        ];
        for err in &errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    #[test]
    fn test_messages_pass_through() {
        let err = CliError::from(RequestError::InvalidMode("foo".to_string()));
        assert_eq!(
            err.to_string(),
            RequestError::InvalidMode("foo".to_string()).to_string()
        );
    }

    #[test]
    fn test_missing_dependency_hint() {
        let dep = Dependency::new("yt-dlp", "media downloader").with_hint("pip install yt-dlp");
        let err = CliError::from(DependencyError::MissingDependency(dep));
        assert_eq!(err.hint(), Some("pip install yt-dlp"));
        assert_eq!(err.to_string(), "yt-dlp not found. Please install yt-dlp first.");
    }
}
