//! Download tool invocation building.
//!
//! The command is an argument vector run without a shell, so URLs and names
//! are never re-interpreted. The `Display` impl of [`DownloadInvocation`]
//! produces a quoted rendering for progress output only.

use std::fmt;
use std::path::Path;

use crate::request::Request;
use crate::settings::HelperSettings;
use crate::template::CommandTemplate;

/// Flag asking the download tool to extract audio.
pub const EXTRACT_AUDIO_FLAG: &str = "-x";
/// Flag selecting the target audio format.
pub const AUDIO_FORMAT_FLAG: &str = "--audio-format";
/// Flag pointing the download tool at a specific transcoder.
pub const TRANSCODER_LOCATION_FLAG: &str = "--ffmpeg-location";
/// Flag carrying the output-path template.
pub const OUTPUT_FLAG: &str = "-o";

/// A fully resolved download command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for DownloadInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

/// Build the download command for a validated request.
///
/// `transcoder` is forwarded as `--ffmpeg-location` when set; see
/// [`transcoder_override`](crate::system::transcoder_override).
pub fn build_invocation(
    request: &Request,
    template: CommandTemplate,
    directory: &Path,
    settings: &HelperSettings,
    transcoder: Option<&Path>,
) -> DownloadInvocation {
    let mut args = Vec::new();

    if template.extracts_audio() {
        args.push(EXTRACT_AUDIO_FLAG.to_string());
        args.push(AUDIO_FORMAT_FLAG.to_string());
        args.push(settings.audio_format.clone());
    }

    if let Some(location) = transcoder {
        args.push(TRANSCODER_LOCATION_FLAG.to_string());
        args.push(location.to_string_lossy().into_owned());
    }

    args.push(request.url.clone());
    args.push(OUTPUT_FLAG.to_string());
    args.push(template.output_path(directory, request.custom_name.as_deref()));

    DownloadInvocation {
        program: settings.download_tool.clone(),
        args,
    }
}

fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@%+,".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
