//! Presence check for the download and transcode tools.

use std::path::Path;

use thiserror::Error;

use super::types::{Dependency, DependencyStatus};
use crate::ports::DependencyProbe;
use crate::settings::{DEFAULT_TRANSCODE_TOOL, HelperSettings};

const DOWNLOAD_TOOL_HINT: &str = "install yt-dlp: https://github.com/yt-dlp/yt-dlp#installation";
const TRANSCODE_TOOL_HINT: &str = "install ffmpeg: https://ffmpeg.org/download.html";

/// A required tool is not available.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DependencyError {
    #[error("{} not found. Please install {} first.", .0.name, .0.name)]
    MissingDependency(Dependency),
}

impl DependencyError {
    /// The dependency that failed the check.
    pub const fn dependency(&self) -> &Dependency {
        match self {
            Self::MissingDependency(dep) => dep,
        }
    }
}

/// The tools required by `settings`, in check order, all marked missing.
pub fn required_dependencies(settings: &HelperSettings) -> Vec<Dependency> {
    vec![
        Dependency::new(&settings.download_tool, "Fetches media and writes output files")
            .with_hint(DOWNLOAD_TOOL_HINT),
        Dependency::new(
            &settings.transcode_tool,
            "Converts audio streams; invoked by the download tool",
        )
        .with_hint(TRANSCODE_TOOL_HINT),
    ]
}

/// Resolve every required tool, failing on the first missing one.
pub fn check_dependencies(
    probe: &dyn DependencyProbe,
    settings: &HelperSettings,
) -> Result<Vec<Dependency>, DependencyError> {
    required_dependencies(settings)
        .into_iter()
        .map(|dep| match probe.locate(&dep.name) {
            Some(location) => {
                tracing::debug!(tool = %dep.name, location = %location.display(), "dependency found");
                Ok(dep.with_status(DependencyStatus::Present { location }))
            }
            None => Err(DependencyError::MissingDependency(dep)),
        })
        .collect()
}

/// Resolved transcoder location to hand to the download tool.
///
/// `None` when the default transcoder is configured, since the download tool
/// finds it on `PATH` by itself.
pub fn transcoder_override<'a>(
    settings: &HelperSettings,
    resolved: &'a [Dependency],
) -> Option<&'a Path> {
    if settings.transcode_tool == DEFAULT_TRANSCODE_TOOL {
        return None;
    }

    resolved
        .iter()
        .filter(|dep| dep.name == settings.transcode_tool)
        .find_map(|dep| match &dep.status {
            DependencyStatus::Present { location } => Some(location.as_path()),
            DependencyStatus::Missing => None,
        })
}
