//! Proposed-filename templating for a chosen metadata match.
//!
//! The backend builds the authoritative name (and sanitizes it); these
//! helpers only produce the preview the file list shows before a rename.

#[cfg(test)]
#[path = "naming_test.rs"]
mod naming_test;

use crate::net::types::RenameTarget;

/// Zero-pad a season/episode number to two digits.
///
/// Leading whitespace is skipped and parsing stops at the first non-digit,
/// so `"1"`, `"01"`, and `"1 "` all yield `"01"`. Input without any leading
/// digits is returned trimmed and unpadded.
#[must_use]
pub fn pad_two(raw: &str) -> String {
    let trimmed = raw.trim();
    let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
    match digits.parse::<u64>() {
        Ok(n) => format!("{n:02}"),
        Err(_) => trimmed.to_owned(),
    }
}

fn with_extension(stem: String, extension: &str) -> String {
    if extension.is_empty() { stem } else { format!("{stem}.{extension}") }
}

/// `Title (Year).ext`
#[must_use]
pub fn movie_filename(title: &str, year: &str, extension: &str) -> String {
    with_extension(format!("{title} ({year})"), extension)
}

/// `Show - S01E02 - Episode Title.ext`, or `Show - S01E02.ext` without a title.
#[must_use]
pub fn tv_filename(show_name: &str, season: &str, episode: &str, episode_title: &str, extension: &str) -> String {
    let code = format!("S{}E{}", pad_two(season), pad_two(episode));
    let stem = if episode_title.is_empty() {
        format!("{show_name} - {code}")
    } else {
        format!("{show_name} - {code} - {episode_title}")
    };
    with_extension(stem, extension)
}

/// `Artist - Title.ext`
#[must_use]
pub fn music_filename(artist: &str, title: &str, extension: &str) -> String {
    with_extension(format!("{artist} - {title}"), extension)
}

/// Proposed filename for any rename target.
#[must_use]
pub fn proposed_name(target: &RenameTarget, extension: &str) -> String {
    match target {
        RenameTarget::Movie { title, year } => movie_filename(title, year, extension),
        RenameTarget::Tv { show_name, season, episode, episode_title } => {
            tv_filename(show_name, season, episode, episode_title, extension)
        }
        RenameTarget::Music { artist, title } => music_filename(artist, title, extension),
    }
}
