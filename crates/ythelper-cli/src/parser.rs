//! Command-line parser.
//!
//! Positional arguments are taken as raw strings; mode and URL validation is
//! left to `ythelper-core` so rejections carry the domain error messages.

use std::sync::LazyLock;

use clap::{ArgAction, Parser, ValueEnum};
use ythelper_core::CustomNamePolicy;
use ythelper_core::settings::{DEFAULT_AUDIO_FORMAT, DEFAULT_DOWNLOAD_TOOL, DEFAULT_TRANSCODE_TOOL};

/// Text shown by `-v` and `--version`.
static VERSION_BANNER: LazyLock<String> = LazyLock::new(|| {
    format!(
        "{}\nLicense: {}\n\
         Distributed under the terms of the MIT License, \
         provided \"as is\" without warranty of any kind.",
        ythelper_build_info::LONG_VERSION,
        env!("CARGO_PKG_LICENSE"),
    )
});

/// How a custom name given with a playlist URL is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlaylistNamePolicy {
    /// Drop the name with a warning and name files after the playlist
    Ignore,
    /// Refuse the request
    Reject,
}

impl From<PlaylistNamePolicy> for CustomNamePolicy {
    fn from(policy: PlaylistNamePolicy) -> Self {
        match policy {
            PlaylistNamePolicy::Ignore => Self::Ignore,
            PlaylistNamePolicy::Reject => Self::Reject,
        }
    }
}

/// Download audio or video with yt-dlp into a prepared directory.
#[derive(Debug, Parser)]
#[command(name = "ythelper")]
#[command(about = "Download audio or video with yt-dlp into a prepared directory")]
#[command(override_usage = "ythelper [video|audio] URL DOWNLOAD_PATH [CUSTOM_NAME]")]
#[command(version = VERSION_BANNER.as_str())]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version and license information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// "audio" to extract the audio track, "video" to keep the video
    #[arg(value_name = "MODE")]
    pub mode: String,

    /// Media or playlist URL (http:// or https://)
    #[arg(value_name = "URL")]
    pub url: String,

    /// Directory to save into; created if missing
    #[arg(value_name = "DOWNLOAD_PATH", allow_hyphen_values = true)]
    pub download_path: String,

    /// Output file name without extension (single items only)
    #[arg(value_name = "CUSTOM_NAME", allow_hyphen_values = true)]
    pub custom_name: Option<String>,

    /// What to do with CUSTOM_NAME when URL is a playlist
    #[arg(
        long,
        value_enum,
        env = "YTHELPER_PLAYLIST_NAME_POLICY",
        default_value_t = PlaylistNamePolicy::Ignore
    )]
    pub playlist_name_policy: PlaylistNamePolicy,

    /// Audio format to extract to in audio mode
    #[arg(long, env = "YTHELPER_AUDIO_FORMAT", default_value = DEFAULT_AUDIO_FORMAT)]
    pub audio_format: String,

    /// Download tool command or path
    #[arg(long = "yt-dlp", value_name = "PROGRAM", env = "YTHELPER_YT_DLP", default_value = DEFAULT_DOWNLOAD_TOOL)]
    pub download_tool: String,

    /// Transcode tool command or path
    #[arg(long = "ffmpeg", value_name = "PROGRAM", env = "YTHELPER_FFMPEG", default_value = DEFAULT_TRANSCODE_TOOL)]
    pub transcode_tool: String,

    /// Also create missing parent directories of DOWNLOAD_PATH
    #[arg(long)]
    pub parents: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub verbose: bool,
}
