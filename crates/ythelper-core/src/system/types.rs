//! External tool dependency types.

use std::path::PathBuf;

/// Represents the status of an external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyStatus {
    /// The tool resolved on the search path.
    Present { location: PathBuf },
    /// The tool could not be resolved.
    Missing,
}

/// Information about an external tool the helper relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Command name or path as configured (e.g., "yt-dlp").
    pub name: String,
    /// Current status of the dependency.
    pub status: DependencyStatus,
    /// What the tool is used for.
    pub description: String,
    /// Installation instructions or hints.
    pub install_hint: Option<String>,
}

impl Dependency {
    /// Create a dependency in the `Missing` state.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DependencyStatus::Missing,
            description: description.into(),
            install_hint: None,
        }
    }

    /// Set installation hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.install_hint = Some(hint.into());
        self
    }

    /// Set the status of this dependency.
    #[must_use]
    pub fn with_status(mut self, status: DependencyStatus) -> Self {
        self.status = status;
        self
    }

    pub const fn is_present(&self) -> bool {
        matches!(self.status, DependencyStatus::Present { .. })
    }
}
