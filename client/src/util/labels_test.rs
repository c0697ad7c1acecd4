use super::*;
use crate::net::types::{MovieResult, MusicResult, TvResult};

fn movie_info(name: &str, year: Option<&str>) -> DetectedInfo {
    DetectedInfo { name: Some(name.to_owned()), year: year.map(str::to_owned), ..DetectedInfo::default() }
}

// =============================================================
// detected_summary
// =============================================================

#[test]
fn detected_summary_movie_with_year() {
    let info = movie_info("Heat", Some("1995"));
    assert_eq!(detected_summary(MediaKind::Movie, Some(&info)), "Detected: Heat (1995)");
}

#[test]
fn detected_summary_movie_without_year() {
    let info = movie_info("Heat", None);
    assert_eq!(detected_summary(MediaKind::Movie, Some(&info)), "Detected: Heat");
}

#[test]
fn detected_summary_tv_uses_raw_numbers() {
    let info = DetectedInfo {
        show_name: Some("Lost".to_owned()),
        season: Some("1".to_owned()),
        episode: Some("02".to_owned()),
        ..DetectedInfo::default()
    };
    assert_eq!(detected_summary(MediaKind::Tv, Some(&info)), "Detected: Lost S1E02");
}

#[test]
fn detected_summary_music_shows_query() {
    let info = DetectedInfo { query: Some("daft punk one more time".to_owned()), ..DetectedInfo::default() };
    assert_eq!(detected_summary(MediaKind::Music, Some(&info)), "Search: daft punk one more time");
}

#[test]
fn detected_summary_without_info_is_empty() {
    assert_eq!(detected_summary(MediaKind::Movie, None), "");
}

// =============================================================
// search modal
// =============================================================

#[test]
fn search_titles_per_kind() {
    assert_eq!(search_title(MediaKind::Movie), "Search Movies");
    assert_eq!(search_title(MediaKind::Tv), "Search TV Shows");
    assert_eq!(search_title(MediaKind::Music), "Search Music");
}

#[test]
fn initial_query_reads_kind_specific_field() {
    let info = DetectedInfo {
        name: Some("movie".to_owned()),
        show_name: Some("show".to_owned()),
        query: Some("song".to_owned()),
        ..DetectedInfo::default()
    };
    assert_eq!(initial_query(MediaKind::Movie, Some(&info)), "movie");
    assert_eq!(initial_query(MediaKind::Tv, Some(&info)), "show");
    assert_eq!(initial_query(MediaKind::Music, Some(&info)), "song");
    assert_eq!(initial_query(MediaKind::Tv, None), "");
}

#[test]
fn movie_meta_formats_rating() {
    let result = SearchResult::Movie(MovieResult {
        id: 1,
        title: "Heat".to_owned(),
        year: "1995".to_owned(),
        overview: "Cops and robbers.".to_owned(),
        vote_average: 7.9,
    });
    assert_eq!(result_title(&result), "Heat");
    assert_eq!(result_meta(&result), "1995 | Rating: 7.9/10");
    assert_eq!(result_overview(&result), "Cops and robbers.");
}

#[test]
fn tv_meta_unknown_year_and_whole_rating() {
    let result = SearchResult::Tv(TvResult {
        id: 2,
        name: "Lost".to_owned(),
        year: String::new(),
        overview: String::new(),
        vote_average: 8.0,
    });
    assert_eq!(result_title(&result), "Lost");
    assert_eq!(result_meta(&result), "Unknown year | Rating: 8/10");
}

#[test]
fn music_meta_and_score() {
    let mut music = MusicResult {
        id: "mbid".to_owned(),
        title: "One More Time".to_owned(),
        artist: "Daft Punk".to_owned(),
        album: "Discovery".to_owned(),
        year: "2001".to_owned(),
        score: 100,
    };
    let result = SearchResult::Music(music.clone());
    assert_eq!(result_meta(&result), "Daft Punk | Discovery (2001)");
    assert_eq!(result_overview(&result), "Match score: 100%");

    music.year = String::new();
    assert_eq!(result_meta(&SearchResult::Music(music)), "Daft Punk | Discovery");
}

// =============================================================
// rename outcomes
// =============================================================

#[test]
fn rename_success_message_dry_run_names_target() {
    assert_eq!(rename_success_message(true, "Heat (1995).mkv"), "[Dry Run] Would rename to: Heat (1995).mkv");
    assert_eq!(rename_success_message(false, "Heat (1995).mkv"), "Renamed successfully!");
}

#[test]
fn batch_summary_kind_depends_on_success_count() {
    assert_eq!(batch_summary(false, 2, 3), ("Renamed 2/3 files".to_owned(), ToastKind::Success));
    assert_eq!(batch_summary(true, 0, 3), ("[Dry Run] Would rename 0/3 files".to_owned(), ToastKind::Warning));
}

#[test]
fn rename_failure_message_uses_result_message_only() {
    assert_eq!(rename_failure_message(Some("Destination file already exists")), "Destination file already exists");
    assert_eq!(rename_failure_message(Some("  ")), "Rename failed");
    assert_eq!(rename_failure_message(None), "Rename failed");
}
