//! Custom output-name handling.

/// Longest custom name kept, counted in characters.
pub const MAX_CUSTOM_NAME_LEN: usize = 100;

/// Characters that are unsafe in file names on common filesystems.
const UNSAFE_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// What to do with a custom name supplied together with a playlist URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomNamePolicy {
    /// Drop the name with a warning and use playlist naming.
    #[default]
    Ignore,
    /// Refuse the request.
    Reject,
}

/// Replace every filesystem-unsafe character with `_`.
///
/// Idempotent; all other characters pass through untouched.
pub fn sanitize_custom_name(name: &str) -> String {
    name.chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Cut `name` to [`MAX_CUSTOM_NAME_LEN`] characters.
///
/// Returns the (possibly shortened) name and, if it was cut, the original
/// character count.
pub fn truncate_name(name: &str) -> (String, Option<usize>) {
    let len = name.chars().count();
    if len <= MAX_CUSTOM_NAME_LEN {
        (name.to_string(), None)
    } else {
        (name.chars().take(MAX_CUSTOM_NAME_LEN).collect(), Some(len))
    }
}
