//! Display strings for file rows, search results, and rename outcomes.

#[cfg(test)]
#[path = "labels_test.rs"]
mod labels_test;

use crate::net::types::{DetectedInfo, MediaKind, SearchResult};
use crate::state::toast::ToastKind;

fn field(value: Option<&String>) -> &str {
    value.map_or("", String::as_str)
}

/// One-line summary of what the backend detected for a file.
///
/// Season/episode are shown as the backend sent them, unpadded.
#[must_use]
pub fn detected_summary(kind: MediaKind, info: Option<&DetectedInfo>) -> String {
    let Some(info) = info else {
        return String::new();
    };
    match kind {
        MediaKind::Movie => {
            let year = info
                .year
                .as_deref()
                .filter(|y| !y.is_empty())
                .map(|y| format!(" ({y})"))
                .unwrap_or_default();
            format!("Detected: {}{year}", field(info.name.as_ref()))
        }
        MediaKind::Tv => format!(
            "Detected: {} S{}E{}",
            field(info.show_name.as_ref()),
            field(info.season.as_ref()),
            field(info.episode.as_ref())
        ),
        MediaKind::Music => format!("Search: {}", field(info.query.as_ref())),
    }
}

/// Search modal heading for a file kind.
#[must_use]
pub fn search_title(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Movie => "Search Movies",
        MediaKind::Tv => "Search TV Shows",
        MediaKind::Music => "Search Music",
    }
}

/// Initial search query prefilled from detected metadata.
#[must_use]
pub fn initial_query(kind: MediaKind, info: Option<&DetectedInfo>) -> String {
    let Some(info) = info else {
        return String::new();
    };
    let value = match kind {
        MediaKind::Movie => info.name.as_ref(),
        MediaKind::Tv => info.show_name.as_ref(),
        MediaKind::Music => info.query.as_ref(),
    };
    field(value).to_owned()
}

fn year_or_unknown(year: &str) -> &str {
    if year.is_empty() { "Unknown year" } else { year }
}

/// Headline of a search hit.
#[must_use]
pub fn result_title(result: &SearchResult) -> &str {
    match result {
        SearchResult::Movie(m) => &m.title,
        SearchResult::Tv(t) => &t.name,
        SearchResult::Music(m) => &m.title,
    }
}

/// Secondary line of a search hit (year and rating, or artist and album).
#[must_use]
pub fn result_meta(result: &SearchResult) -> String {
    match result {
        SearchResult::Movie(m) => {
            format!("{} | Rating: {}/10", year_or_unknown(&m.year), m.vote_average)
        }
        SearchResult::Tv(t) => {
            format!("{} | Rating: {}/10", year_or_unknown(&t.year), t.vote_average)
        }
        SearchResult::Music(m) => {
            if m.year.is_empty() {
                format!("{} | {}", m.artist, m.album)
            } else {
                format!("{} | {} ({})", m.artist, m.album, m.year)
            }
        }
    }
}

/// Body text of a search hit.
#[must_use]
pub fn result_overview(result: &SearchResult) -> String {
    match result {
        SearchResult::Movie(m) => m.overview.clone(),
        SearchResult::Tv(t) => t.overview.clone(),
        SearchResult::Music(m) => format!("Match score: {}%", m.score),
    }
}

/// Toast for a successful single rename.
#[must_use]
pub fn rename_success_message(dry_run: bool, new_filename: &str) -> String {
    if dry_run {
        format!("[Dry Run] Would rename to: {new_filename}")
    } else {
        "Renamed successfully!".to_owned()
    }
}

/// Toast for a single rename the backend did not perform.
///
/// Only the rename result's own `message` is shown; HTTP-level failures
/// pass `None` and get the generic text.
#[must_use]
pub fn rename_failure_message(message: Option<&str>) -> String {
    message
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map_or_else(|| "Rename failed".to_owned(), str::to_owned)
}

/// Toast text and severity summarizing a batch rename.
#[must_use]
pub fn batch_summary(dry_run: bool, success_count: usize, total: usize) -> (String, ToastKind) {
    let message = if dry_run {
        format!("[Dry Run] Would rename {success_count}/{total} files")
    } else {
        format!("Renamed {success_count}/{total} files")
    };
    let kind = if success_count > 0 { ToastKind::Success } else { ToastKind::Warning };
    (message, kind)
}
