//! Output-path template selection.
//!
//! The decision is a static table over (mode, playlist, custom name). Tokens in
//! `%(...)s` form are expanded by the download tool at fetch time and are
//! passed through literally.

use std::path::Path;

use crate::request::Mode;

/// Tool-side token for the media title.
pub const TITLE_TOKEN: &str = "%(title)s";
/// Tool-side token for the file extension.
pub const EXT_TOKEN: &str = "%(ext)s";
/// Tool-side token for the playlist name.
pub const PLAYLIST_TOKEN: &str = "%(playlist)s";
/// Tool-side token for the 1-based playlist index, zero padded to 3 digits.
pub const PLAYLIST_INDEX_TOKEN: &str = "%(playlist_index)03d";

/// How output files are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingCase {
    /// `{dir}/{name}.<ext>`
    CustomName,
    /// `{dir}/<playlist>/<index:03d> - <title>.<ext>`
    Playlist,
    /// `{dir}/<title>.<ext>`
    SingleItem,
}

/// One cell of the mode x naming table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandTemplate {
    pub mode: Mode,
    pub naming: NamingCase,
}

/// Pick the template for a request.
///
/// A custom name always wins; validation guarantees it never coexists with a
/// playlist URL.
pub const fn select_template(mode: Mode, is_playlist: bool, has_custom_name: bool) -> CommandTemplate {
    let naming = if has_custom_name {
        NamingCase::CustomName
    } else if is_playlist {
        NamingCase::Playlist
    } else {
        NamingCase::SingleItem
    };
    CommandTemplate { mode, naming }
}

impl CommandTemplate {
    /// Render the `-o` argument for the download tool.
    ///
    /// `custom_name` is only consulted for [`NamingCase::CustomName`]; its `%`
    /// characters are doubled so the download tool writes them literally.
    pub fn output_path(&self, directory: &Path, custom_name: Option<&str>) -> String {
        let file = match (self.naming, custom_name) {
            (NamingCase::CustomName, Some(name)) => {
                format!("{}.{EXT_TOKEN}", name.replace('%', "%%"))
            }
            (NamingCase::Playlist, _) => {
                format!("{PLAYLIST_TOKEN}/{PLAYLIST_INDEX_TOKEN} - {TITLE_TOKEN}.{EXT_TOKEN}")
            }
            (NamingCase::SingleItem | NamingCase::CustomName, _) => {
                format!("{TITLE_TOKEN}.{EXT_TOKEN}")
            }
        };
        directory.join(file).to_string_lossy().into_owned()
    }

    /// Whether the download tool is asked to extract audio.
    pub const fn extracts_audio(&self) -> bool {
        matches!(self.mode, Mode::Audio)
    }
}
