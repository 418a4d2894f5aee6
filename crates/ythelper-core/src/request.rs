//! Download request validation.
//!
//! Turns the raw positional arguments into a [`Request`], applying the
//! custom-name policy for playlist URLs and sanitizing whatever name survives.
//! Validation is pure: warnings are returned to the caller rather than printed.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::naming::{CustomNamePolicy, MAX_CUSTOM_NAME_LEN, sanitize_custom_name, truncate_name};

/// URL markers that identify a playlist.
///
/// This is a substring heuristic, not URL parsing: an unrelated query string
/// containing `list=` also counts.
const PLAYLIST_MARKERS: [&str; 2] = ["list=", "playlist?"];

/// Accepted URL scheme prefixes (case-sensitive).
const URL_SCHEMES: [&str; 2] = ["http://", "https://"];

/// What the download tool should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Extract the audio stream and transcode it.
    Audio,
    /// Keep the container picked by the download tool.
    Video,
}

impl Mode {
    /// The literal accepted on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = RequestError;

    /// Exact, case-sensitive match; no trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "audio" => Ok(Self::Audio),
            "video" => Ok(Self::Video),
            other => Err(RequestError::InvalidMode(other.to_string())),
        }
    }
}

/// A validated download request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub mode: Mode,
    pub url: String,
    /// Destination exactly as supplied; normalized later by `paths`.
    pub destination: String,
    /// Sanitized custom name. Never set together with a playlist URL.
    pub custom_name: Option<String>,
}

impl Request {
    /// Whether the request URL is treated as a playlist.
    pub fn is_playlist(&self) -> bool {
        is_playlist_url(&self.url)
    }
}

/// Non-fatal adjustments made while validating a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestWarning {
    /// A custom name was supplied with a playlist URL and was dropped.
    CustomNameIgnoredForPlaylist { name: String },
    /// The custom name was longer than the limit and got cut.
    CustomNameTruncated { original_len: usize },
    /// The custom name was empty, so automatic naming is used.
    EmptyCustomName,
}

impl fmt::Display for RequestWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CustomNameIgnoredForPlaylist { name } => write!(
                f,
                "custom name \"{name}\" is ignored for playlist downloads; using playlist naming"
            ),
            Self::CustomNameTruncated { original_len } => write!(
                f,
                "custom name is {original_len} characters long; truncated to {MAX_CUSTOM_NAME_LEN}"
            ),
            Self::EmptyCustomName => {
                f.write_str("custom name is empty; using automatic naming")
            }
        }
    }
}

/// Outcome of [`validate_request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub request: Request,
    pub warnings: Vec<RequestWarning>,
}

/// Reasons a request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("invalid mode \"{0}\". Use [video|audio]")]
    InvalidMode(String),

    #[error("invalid URL: \"{0}\". URL must start with http:// or https://")]
    InvalidUrl(String),

    #[error("custom name cannot be used when downloading a playlist")]
    ConflictingCustomNameAndPlaylist,
}

/// Check whether a URL carries an accepted scheme prefix.
pub fn is_valid_url(url: &str) -> bool {
    URL_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
}

/// Heuristically decide whether a URL references a playlist.
pub fn is_playlist_url(url: &str) -> bool {
    PLAYLIST_MARKERS.iter().any(|marker| url.contains(marker))
}

/// Validate raw arguments into a [`Request`].
///
/// Checks run in order: mode, URL, then the custom-name policy. A retained
/// custom name is sanitized and truncated to [`MAX_CUSTOM_NAME_LEN`]
/// characters.
pub fn validate_request(
    mode: &str,
    url: &str,
    destination: &str,
    custom_name: Option<&str>,
    policy: CustomNamePolicy,
) -> Result<ValidatedRequest, RequestError> {
    let mode: Mode = mode.parse()?;

    if !is_valid_url(url) {
        return Err(RequestError::InvalidUrl(url.to_string()));
    }

    let mut warnings = Vec::new();
    let playlist = is_playlist_url(url);

    let custom_name = match custom_name {
        None => None,
        Some(name) if playlist => match policy {
            CustomNamePolicy::Reject => {
                return Err(RequestError::ConflictingCustomNameAndPlaylist);
            }
            CustomNamePolicy::Ignore => {
                warnings.push(RequestWarning::CustomNameIgnoredForPlaylist {
                    name: name.to_string(),
                });
                None
            }
        },
        Some("") => {
            warnings.push(RequestWarning::EmptyCustomName);
            None
        }
        Some(name) => {
            let sanitized = sanitize_custom_name(name);
            let (truncated, original_len) = truncate_name(&sanitized);
            if let Some(original_len) = original_len {
                warnings.push(RequestWarning::CustomNameTruncated { original_len });
            }
            Some(truncated)
        }
    };

    tracing::debug!(
        %mode,
        url,
        playlist,
        custom_name = custom_name.as_deref(),
        "request validated"
    );

    Ok(ValidatedRequest {
        request: Request {
            mode,
            url: url.to_string(),
            destination: destination.to_string(),
            custom_name,
        },
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(
        mode: &str,
        url: &str,
        name: Option<&str>,
        policy: CustomNamePolicy,
    ) -> Result<ValidatedRequest, RequestError> {
        validate_request(mode, url, "/tmp/out", name, policy)
    }

    #[test]
    fn test_mode_exact_match_only() {
        assert_eq!("audio".parse::<Mode>(), Ok(Mode::Audio));
        assert_eq!("video".parse::<Mode>(), Ok(Mode::Video));

        for bad in ["Audio", "VIDEO", "", " audio", "video ", "mp3"] {
            assert_eq!(
                bad.parse::<Mode>(),
                Err(RequestError::InvalidMode(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_mode_names_offending_value() {
        let err = validate("Video", "https://x", None, CustomNamePolicy::Ignore).unwrap_err();
        assert!(err.to_string().contains("\"Video\""));
    }

    #[test]
    fn test_url_prefix_is_case_sensitive() {
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com"));
        assert!(!is_valid_url("HTTP://example.com"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url(" https://example.com"));

        let err = validate("video", "HTTP://x", None, CustomNamePolicy::Ignore).unwrap_err();
        assert_eq!(err, RequestError::InvalidUrl("HTTP://x".to_string()));
    }

    #[test]
    fn test_mode_checked_before_url() {
        let err = validate("bogus", "nope", None, CustomNamePolicy::Ignore).unwrap_err();
        assert!(matches!(err, RequestError::InvalidMode(_)));
    }

    #[test]
    fn test_playlist_detection_substring_anywhere() {
        assert!(is_playlist_url("https://x/watch?v=abc&list=PL123"));
        assert!(is_playlist_url("https://x/list=decoy"));
        assert!(is_playlist_url("https://x/playlist?id=1"));
        assert!(!is_playlist_url("https://x/watch?v=abc"));
        assert!(!is_playlist_url("https://x/playlists"));
    }

    #[test]
    fn test_ignore_policy_drops_name_with_warning() {
        let validated = validate(
            "audio",
            "https://example.com/playlist?list=PL1",
            Some("myname"),
            CustomNamePolicy::Ignore,
        )
        .unwrap();

        assert_eq!(validated.request.custom_name, None);
        assert_eq!(
            validated.warnings,
            vec![RequestWarning::CustomNameIgnoredForPlaylist {
                name: "myname".to_string()
            }]
        );
    }

    #[test]
    fn test_reject_policy_errors() {
        let err = validate(
            "video",
            "https://x/watch?v=1&list=PL",
            Some("name"),
            CustomNamePolicy::Reject,
        )
        .unwrap_err();
        assert_eq!(err, RequestError::ConflictingCustomNameAndPlaylist);
    }

    #[test]
    fn test_reject_policy_allows_playlist_without_name() {
        let validated = validate(
            "video",
            "https://x/watch?v=1&list=PL",
            None,
            CustomNamePolicy::Reject,
        )
        .unwrap();
        assert!(validated.request.is_playlist());
        assert!(validated.warnings.is_empty());
    }

    #[test]
    fn test_custom_name_sanitized_and_kept() {
        let validated = validate(
            "video",
            "https://x/watch?v=1",
            Some("a/b:c"),
            CustomNamePolicy::Ignore,
        )
        .unwrap();
        assert_eq!(validated.request.custom_name.as_deref(), Some("a_b_c"));
        assert!(validated.warnings.is_empty());
    }

    #[test]
    fn test_long_custom_name_truncated_with_warning() {
        let long = "x".repeat(150);
        let validated = validate(
            "video",
            "https://x/watch?v=1",
            Some(&long),
            CustomNamePolicy::Ignore,
        )
        .unwrap();
        assert_eq!(
            validated.request.custom_name.map(|n| n.chars().count()),
            Some(MAX_CUSTOM_NAME_LEN)
        );
        assert_eq!(
            validated.warnings,
            vec![RequestWarning::CustomNameTruncated { original_len: 150 }]
        );
    }

    #[test]
    fn test_empty_custom_name_falls_back_to_auto_naming() {
        let validated = validate(
            "audio",
            "https://x/watch?v=1",
            Some(""),
            CustomNamePolicy::Ignore,
        )
        .unwrap();
        assert_eq!(validated.request.custom_name, None);
        assert_eq!(validated.warnings, vec![RequestWarning::EmptyCustomName]);
    }

    #[test]
    fn test_destination_kept_verbatim() {
        let validated =
            validate_request("video", "https://x", "/tmp/x/", None, CustomNamePolicy::Ignore)
                .unwrap();
        assert_eq!(validated.request.destination, "/tmp/x/");
    }
}
