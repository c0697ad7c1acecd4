//! Turn a picked search result into a rename job for a file.

#[cfg(test)]
#[path = "matching_test.rs"]
mod matching_test;

use crate::net::types::{EpisodeRequest, MediaFile, RenameRequest, RenameTarget, SearchResult, TvResult};
use crate::util::naming::proposed_name;

/// Episode lookup for a TV match, when the file has season and episode numbers.
#[must_use]
pub fn episode_request(file: &MediaFile, show: &TvResult) -> Option<EpisodeRequest> {
    let info = file.detected_info.as_ref()?;
    let season = info.season.clone().filter(|s| !s.is_empty())?;
    let episode = info.episode.clone().filter(|e| !e.is_empty())?;
    Some(EpisodeRequest { show_id: show.id, season, episode })
}

/// Naming fields for `result`. `episode_title` is only used for TV matches.
#[must_use]
pub fn rename_target(file: &MediaFile, result: &SearchResult, episode_title: &str) -> RenameTarget {
    match result {
        SearchResult::Movie(movie) => RenameTarget::Movie { title: movie.title.clone(), year: movie.year.clone() },
        SearchResult::Tv(show) => {
            let info = file.detected_info.as_ref();
            RenameTarget::Tv {
                show_name: show.name.clone(),
                season: info.and_then(|i| i.season.clone()).unwrap_or_default(),
                episode: info.and_then(|i| i.episode.clone()).unwrap_or_default(),
                episode_title: episode_title.to_owned(),
            }
        }
        SearchResult::Music(track) => {
            RenameTarget::Music { artist: track.artist.clone(), title: track.title.clone() }
        }
    }
}

/// Proposed filename plus the payload that will perform it.
#[must_use]
pub fn build_match(file: &MediaFile, result: &SearchResult, episode_title: &str) -> (String, RenameRequest) {
    let target = rename_target(file, result, episode_title);
    let name = proposed_name(&target, &file.extension);
    (name, RenameRequest { filepath: file.filepath.clone(), target })
}
