//! Helper settings and validation.
//!
//! Settings are assembled by the CLI from flags and environment variables.
//! The defaults reproduce the plain `ythelper MODE URL DIR [NAME]` behavior.

use thiserror::Error;

use crate::naming::CustomNamePolicy;
use crate::paths::DirectoryCreationStrategy;

/// Default download tool.
pub const DEFAULT_DOWNLOAD_TOOL: &str = "yt-dlp";

/// Default transcode tool.
pub const DEFAULT_TRANSCODE_TOOL: &str = "ffmpeg";

/// Default target format for audio extraction.
pub const DEFAULT_AUDIO_FORMAT: &str = "opus";

/// Audio formats the download tool can extract to.
pub const SUPPORTED_AUDIO_FORMATS: [&str; 8] =
    ["aac", "alac", "flac", "m4a", "mp3", "opus", "vorbis", "wav"];

/// Errors raised by [`validate_settings`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("unsupported audio format \"{0}\" (expected one of: {})", SUPPORTED_AUDIO_FORMATS.join(", "))]
    UnsupportedAudioFormat(String),

    #[error("{0} tool name cannot be empty")]
    EmptyToolName(&'static str),
}

/// Effective configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperSettings {
    /// Custom name + playlist URL handling.
    pub custom_name_policy: CustomNamePolicy,
    /// Target format for audio mode.
    pub audio_format: String,
    /// Download tool command or path.
    pub download_tool: String,
    /// Transcode tool command or path.
    pub transcode_tool: String,
    /// How a missing destination directory is created.
    pub directory_creation: DirectoryCreationStrategy,
}

impl Default for HelperSettings {
    fn default() -> Self {
        Self {
            custom_name_policy: CustomNamePolicy::default(),
            audio_format: DEFAULT_AUDIO_FORMAT.to_string(),
            download_tool: DEFAULT_DOWNLOAD_TOOL.to_string(),
            transcode_tool: DEFAULT_TRANSCODE_TOOL.to_string(),
            directory_creation: DirectoryCreationStrategy::default(),
        }
    }
}

/// Validate settings, normalizing the audio format to lowercase.
pub fn validate_settings(mut settings: HelperSettings) -> Result<HelperSettings, SettingsError> {
    if settings.download_tool.trim().is_empty() {
        return Err(SettingsError::EmptyToolName("download"));
    }
    if settings.transcode_tool.trim().is_empty() {
        return Err(SettingsError::EmptyToolName("transcode"));
    }

    let format = settings.audio_format.trim().to_ascii_lowercase();
    if !SUPPORTED_AUDIO_FORMATS.contains(&format.as_str()) {
        return Err(SettingsError::UnsupportedAudioFormat(settings.audio_format));
    }
    settings.audio_format = format;

    Ok(settings)
}
