//! Path helpers for the directory browser.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

/// Parent of a `/`-separated path: drop the last segment, `/` when nothing remains.
///
/// Mirrors how the browser's "Up" button walks: `"/media/tv"` becomes
/// `"/media"`, `"/media"` becomes `"/"`. A trailing slash counts as an empty
/// last segment, so `"/media/"` becomes `"/media"`.
#[must_use]
pub fn parent_path(path: &str) -> String {
    match path.rfind('/') {
        Some(0) | None => "/".to_owned(),
        Some(idx) => path[..idx].to_owned(),
    }
}

/// Starting directory for the browser: the configured media dir, or `/`.
#[must_use]
pub fn browse_start(media_dir: &str) -> String {
    let trimmed = media_dir.trim();
    if trimmed.is_empty() { "/".to_owned() } else { trimmed.to_owned() }
}
