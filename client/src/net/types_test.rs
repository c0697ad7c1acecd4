use super::*;

// =============================================================
// MediaKind / ScanMode
// =============================================================

#[test]
fn media_kind_serializes_to_lowercase() {
    assert_eq!(serde_json::to_string(&MediaKind::Movie).unwrap(), "\"movie\"");
    assert_eq!(serde_json::to_string(&MediaKind::Tv).unwrap(), "\"tv\"");
    assert_eq!(serde_json::to_string(&MediaKind::Music).unwrap(), "\"music\"");
}

#[test]
fn scan_mode_parse_matches_as_str() {
    for mode in ScanMode::ALL {
        assert_eq!(ScanMode::parse(mode.as_str()), mode);
    }
}

#[test]
fn scan_mode_parse_unknown_falls_back_to_auto() {
    assert_eq!(ScanMode::parse("podcasts"), ScanMode::Auto);
    assert_eq!(ScanMode::parse(""), ScanMode::Auto);
}

// =============================================================
// Config
// =============================================================

#[test]
fn config_response_missing_media_dir_is_none() {
    let cfg: ConfigResponse = serde_json::from_str(r#"{"tmdb_api_key":false}"#).unwrap();
    assert!(!cfg.tmdb_api_key);
    assert_eq!(cfg.media_dir, None);
}

#[test]
fn config_update_serializes_both_fields() {
    let body = ConfigUpdate { tmdb_api_key: "k".to_owned(), media_dir: "/media".to_owned() };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({"tmdb_api_key": "k", "media_dir": "/media"}));
}

// =============================================================
// Scan
// =============================================================

#[test]
fn scan_request_serializes_mode_lowercase() {
    let body = ScanRequest { directory: "/media".to_owned(), mode: ScanMode::Movies };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({"directory": "/media", "mode": "movies"}));
}

#[test]
fn scan_response_decodes_all_three_kinds() {
    let raw = r#"{
        "directory": "/media",
        "mode": "auto",
        "count": 3,
        "files": [
            {"filename": "Heat.1995.1080p.mkv", "filepath": "/media/Heat.1995.1080p.mkv", "extension": "mkv",
             "type": "movie", "detected_info": {"name": "Heat", "year": "1995"}},
            {"filename": "Lost.S01E02.mkv", "filepath": "/media/Lost.S01E02.mkv", "extension": "mkv",
             "type": "tv", "detected_info": {"show_name": "Lost", "season": "01", "episode": "02"}},
            {"filename": "01 - song.mp3", "filepath": "/media/01 - song.mp3", "extension": "mp3",
             "type": "music", "detected_info": {"query": "song"}}
        ]
    }"#;
    let resp: ScanResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.count, 3);
    assert_eq!(resp.mode, Some(ScanMode::Auto));
    assert_eq!(resp.files[0].kind, MediaKind::Movie);
    assert_eq!(resp.files[0].detected_info.as_ref().unwrap().year.as_deref(), Some("1995"));
    assert_eq!(resp.files[1].kind, MediaKind::Tv);
    assert_eq!(resp.files[1].detected_info.as_ref().unwrap().season.as_deref(), Some("01"));
    assert_eq!(resp.files[2].detected_info.as_ref().unwrap().query.as_deref(), Some("song"));
}

#[test]
fn detected_info_accepts_null_year_and_numeric_season() {
    let info: DetectedInfo = serde_json::from_str(r#"{"name":"Alien","year":null}"#).unwrap();
    assert_eq!(info.name.as_deref(), Some("Alien"));
    assert_eq!(info.year, None);

    let info: DetectedInfo = serde_json::from_str(r#"{"show_name":"X","season":3,"episode":12}"#).unwrap();
    assert_eq!(info.season.as_deref(), Some("3"));
    assert_eq!(info.episode.as_deref(), Some("12"));
}

#[test]
fn detected_info_rejects_object_scalars() {
    let result = serde_json::from_str::<DetectedInfo>(r#"{"name":{"nested":true}}"#);
    assert!(result.is_err());
}

#[test]
fn media_file_without_detected_info_decodes() {
    let raw = r#"{"filename":"a.mkv","filepath":"/m/a.mkv","type":"movie"}"#;
    let file: MediaFile = serde_json::from_str(raw).unwrap();
    assert_eq!(file.extension, "");
    assert!(file.detected_info.is_none());
}

// =============================================================
// Browse
// =============================================================

#[test]
fn browse_response_root_has_no_parent() {
    let raw = r#"{"current":"/","parent":null,"items":[{"name":"media","path":"/media","type":"directory"}]}"#;
    let resp: BrowseResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.current, "/");
    assert_eq!(resp.parent, None);
    assert_eq!(resp.items, vec![DirEntry { name: "media".to_owned(), path: "/media".to_owned() }]);
}

// =============================================================
// Search
// =============================================================

#[test]
fn search_request_omits_absent_year() {
    let body = SearchRequest { query: "Heat".to_owned(), year: None };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({"query": "Heat"}));

    let body = SearchRequest { query: "Heat".to_owned(), year: Some("1995".to_owned()) };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({"query": "Heat", "year": "1995"}));
}

#[test]
fn movie_search_response_decodes_with_null_title() {
    let raw = r#"{"query":"x","total":1,"results":[{"id":7,"title":null,"year":"","overview":"o","vote_average":6.5}]}"#;
    let resp: SearchResponse<MovieResult> = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.total, Some(1));
    assert_eq!(resp.results[0].id, 7);
    assert_eq!(resp.results[0].title, "");
    assert!((resp.results[0].vote_average - 6.5).abs() < f64::EPSILON);
}

#[test]
fn music_search_response_decodes_without_total() {
    let raw = r#"{"query":"x","results":[{"id":"mbid","title":"T","artist":"A","album":"B","year":"2001","score":98}]}"#;
    let resp: SearchResponse<MusicResult> = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.total, None);
    assert_eq!(resp.results[0].score, 98);
    assert_eq!(resp.results[0].artist, "A");
}

#[test]
fn episode_response_null_title_is_empty() {
    let resp: EpisodeResponse = serde_json::from_str(r#"{"show_id":1,"title":null}"#).unwrap();
    assert_eq!(resp.title, "");
}

// =============================================================
// Rename
// =============================================================

#[test]
fn rename_request_flattens_type_tag() {
    let req = RenameRequest {
        filepath: "/m/a.mkv".to_owned(),
        target: RenameTarget::Movie { title: "Heat".to_owned(), year: "1995".to_owned() },
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"filepath": "/m/a.mkv", "type": "movie", "title": "Heat", "year": "1995"})
    );
}

#[test]
fn rename_call_adds_dry_run_flag() {
    let req = RenameRequest {
        filepath: "/m/s.mp3".to_owned(),
        target: RenameTarget::Music { artist: "A".to_owned(), title: "T".to_owned() },
    };
    let json = serde_json::to_value(RenameCall { request: &req, dry_run: true }).unwrap();
    assert_eq!(json["type"], "music");
    assert_eq!(json["dry_run"], true);
    assert_eq!(json["artist"], "A");
}

#[test]
fn rename_request_tv_decodes_from_tagged_json() {
    let raw = r#"{"filepath":"/m/e.mkv","type":"tv","show_name":"Lost","season":"1","episode":"2","episode_title":""}"#;
    let req: RenameRequest = serde_json::from_str(raw).unwrap();
    assert!(matches!(req.target, RenameTarget::Tv { ref show_name, .. } if show_name == "Lost"));
}

#[test]
fn batch_response_decodes_mixed_results() {
    let raw = r#"{
        "results": [
            {"original_filename":"a.mkv","new_filename":"A (2000).mkv","success":true,"message":"ok","new_path":"/m/A (2000).mkv"},
            {"filepath":"/m/b.mkv","success":false,"message":"File not found"}
        ],
        "total": 2, "success_count": 1, "dry_run": false
    }"#;
    let resp: BatchRenameResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.total, 2);
    assert_eq!(resp.success_count, 1);
    assert!(resp.results[0].success);
    assert_eq!(resp.results[1].message.as_deref(), Some("File not found"));
    assert_eq!(resp.results[1].new_path, None);
}

#[test]
fn preview_response_decodes() {
    let raw = r#"{"original_filename":"a.mkv","new_filename":"A (2000).mkv","new_filepath":"/m/A (2000).mkv","already_exists":true}"#;
    let resp: PreviewResponse = serde_json::from_str(raw).unwrap();
    assert!(resp.already_exists);
    assert_eq!(resp.new_filename, "A (2000).mkv");
}

#[test]
fn error_body_missing_error_is_none() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.error, None);
}
