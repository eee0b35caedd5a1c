//! Platform list sources.
//!
//! A scan needs an ordered list of platforms to probe. This module provides
//! the two sources: a compiled-in table of well-known platforms, and a
//! line-oriented text file in `<label>: <url template>` format.

use crate::error::ScanError;
use crate::types::PlatformSpec;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Builtin platform table: (label, URL template with one `%s` placeholder).
///
/// Kept alphabetical for easy diffing when entries are added.
const BUILTIN_PLATFORMS: &[(&str, &str)] = &[
    ("DeviantArt", "https://www.deviantart.com/%s"),
    ("Dev.to", "https://dev.to/%s"),
    ("GitHub", "https://github.com/%s"),
    ("GitLab", "https://gitlab.com/%s"),
    ("Instagram", "https://www.instagram.com/%s"),
    ("Keybase", "https://keybase.io/%s"),
    ("Medium", "https://medium.com/@%s"),
    ("Pinterest", "https://www.pinterest.com/%s"),
    ("Reddit", "https://www.reddit.com/user/%s"),
    ("SoundCloud", "https://soundcloud.com/%s"),
    ("Spotify", "https://open.spotify.com/user/%s"),
    ("Steam", "https://steamcommunity.com/id/%s"),
    ("Telegram", "https://t.me/%s"),
    ("TikTok", "https://www.tiktok.com/@%s"),
    ("Twitch", "https://www.twitch.tv/%s"),
    ("Twitter", "https://twitter.com/%s"),
    ("Vimeo", "https://vimeo.com/%s"),
    ("YouTube", "https://www.youtube.com/@%s"),
];

/// Where a scan obtains its platform list from.
#[derive(Debug, Clone)]
pub enum PlatformSource {
    /// The compiled-in table. Cannot fail.
    Builtin,

    /// A line-oriented text file, one `<label>: <template>` per line.
    File(PathBuf),
}

impl PlatformSource {
    /// Load the platform specs from this source.
    ///
    /// Only total I/O failure is an error; individual malformed lines in a
    /// file-backed source are skipped silently.
    pub fn load(&self) -> Result<Vec<PlatformSpec>, ScanError> {
        match self {
            Self::Builtin => Ok(builtin_platforms()),
            Self::File(path) => load_platforms_from_file(path),
        }
    }
}

/// Return the compiled-in platform table.
pub fn builtin_platforms() -> Vec<PlatformSpec> {
    BUILTIN_PLATFORMS
        .iter()
        .map(|(name, template)| PlatformSpec::named(*name, *template))
        .collect()
}

/// Load platform specs from a text file.
///
/// Format: UTF-8, one platform per line, `<label>: <urlTemplate>`. Blank
/// lines and lines starting with `#` are ignored. Lines without a `": "`
/// separator are skipped, not fatal; only failure to read the file at all
/// produces an error.
pub fn load_platforms_from_file(path: &Path) -> Result<Vec<PlatformSpec>, ScanError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ScanError::source_unavailable(path.to_string_lossy(), e.to_string()))?;

    let mut platforms = Vec::new();

    for (line_num, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.split_once(": ") {
            Some((label, template)) => {
                platforms.push(PlatformSpec::named(label.trim(), template.trim()));
            }
            None => {
                debug!(
                    line = line_num + 1,
                    content = line,
                    "skipping platform entry without ': ' separator"
                );
            }
        }
    }

    Ok(platforms)
}
