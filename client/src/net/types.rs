//! Wire DTOs for the renamer backend's JSON API.
//!
//! DESIGN
//! ======
//! These types mirror the backend payloads field-for-field so serde stays the
//! only mapping layer. The backend is loose about scalar types (years and
//! episode numbers arrive as strings, numbers, or `null`), so those fields go
//! through lenient deserializers instead of failing the whole response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// MEDIA KIND / SCAN MODE
// =============================================================================

/// Media category detected by the backend for a scanned file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
    Music,
}

impl MediaKind {
    /// Wire/CSS name (`"movie"`, `"tv"`, `"music"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
            Self::Music => "music",
        }
    }
}

/// Which file categories a scan should pick up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    #[default]
    Auto,
    Movies,
    Tv,
    Music,
}

impl ScanMode {
    pub const ALL: [Self; 4] = [Self::Auto, Self::Movies, Self::Tv, Self::Music];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Movies => "movies",
            Self::Tv => "tv",
            Self::Music => "music",
        }
    }

    /// Human label for the mode selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto-detect",
            Self::Movies => "Movies",
            Self::Tv => "TV Shows",
            Self::Music => "Music",
        }
    }

    /// Parse the `<select>` value back into a mode. Unknown values map to `Auto`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "movies" => Self::Movies,
            "tv" => Self::Tv,
            "music" => Self::Music,
            _ => Self::Auto,
        }
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// `GET /api/config` response. The key itself is never echoed back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigResponse {
    /// Whether the backend has a TMDB key configured.
    #[serde(default)]
    pub tmdb_api_key: bool,
    #[serde(default)]
    pub media_dir: Option<String>,
}

/// `POST /api/config` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfigUpdate {
    pub tmdb_api_key: String,
    pub media_dir: String,
}

// =============================================================================
// SCAN
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScanRequest {
    pub directory: String,
    pub mode: ScanMode,
}

/// Metadata the backend extracted from a filename.
///
/// Which fields are populated depends on the file's [`MediaKind`]:
/// movies carry `name`/`year`, TV carries `show_name`/`season`/`episode`,
/// music carries `query`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedInfo {
    #[serde(default, deserialize_with = "deserialize_opt_string_lossy")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_lossy")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_lossy")]
    pub show_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_lossy")]
    pub season: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_lossy")]
    pub episode: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_lossy")]
    pub query: Option<String>,
}

/// One media file found by a scan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    pub filename: String,
    pub filepath: String,
    #[serde(default)]
    pub extension: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default)]
    pub detected_info: Option<DetectedInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ScanResponse {
    #[serde(default)]
    pub directory: String,
    #[serde(default)]
    pub mode: Option<ScanMode>,
    #[serde(default)]
    pub files: Vec<MediaFile>,
    #[serde(default)]
    pub count: usize,
}

// =============================================================================
// BROWSE
// =============================================================================

/// A child directory in a browse listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    pub name: String,
    pub path: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BrowseResponse {
    pub current: String,
    /// `None` at the filesystem root.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub items: Vec<DirEntry>,
}

// =============================================================================
// SEARCH
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

/// TMDB movie match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieResult {
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_string_lossy")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_string_lossy")]
    pub year: String,
    #[serde(default, deserialize_with = "deserialize_string_lossy")]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
}

/// TMDB TV-show match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TvResult {
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_string_lossy")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_string_lossy")]
    pub year: String,
    #[serde(default, deserialize_with = "deserialize_string_lossy")]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
}

/// MusicBrainz recording match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicResult {
    #[serde(default, deserialize_with = "deserialize_string_lossy")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_string_lossy")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_string_lossy")]
    pub artist: String,
    #[serde(default, deserialize_with = "deserialize_string_lossy")]
    pub album: String,
    #[serde(default, deserialize_with = "deserialize_string_lossy")]
    pub year: String,
    #[serde(default)]
    pub score: i64,
}

/// Search response envelope; `T` is one of the per-kind result types.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SearchResponse<T> {
    #[serde(default)]
    pub query: String,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// A search hit of any kind, as held by the search modal.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchResult {
    Movie(MovieResult),
    Tv(TvResult),
    Music(MusicResult),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EpisodeRequest {
    pub show_id: i64,
    pub season: String,
    pub episode: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct EpisodeResponse {
    /// Episode title; empty when TMDB has none.
    #[serde(default, deserialize_with = "deserialize_string_lossy")]
    pub title: String,
}

// =============================================================================
// RENAME
// =============================================================================

/// Kind-specific naming fields sent to the rename endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RenameTarget {
    Movie { title: String, year: String },
    Tv { show_name: String, season: String, episode: String, episode_title: String },
    Music { artist: String, title: String },
}

/// A single rename job: which file, and what to name it after.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRequest {
    pub filepath: String,
    #[serde(flatten)]
    pub target: RenameTarget,
}

/// `POST /api/rename` body.
#[derive(Clone, Debug, Serialize)]
pub struct RenameCall<'a> {
    #[serde(flatten)]
    pub request: &'a RenameRequest,
    pub dry_run: bool,
}

/// Result of one rename, from either the single or batch endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RenameResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub original_filename: Option<String>,
    #[serde(default)]
    pub new_filename: Option<String>,
    #[serde(default)]
    pub new_path: Option<String>,
    #[serde(default)]
    pub filepath: Option<String>,
    #[serde(default)]
    pub dry_run: bool,
}

/// `POST /api/batch/rename` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BatchRenameRequest {
    pub files: Vec<RenameRequest>,
    pub dry_run: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BatchRenameResponse {
    #[serde(default)]
    pub results: Vec<RenameResult>,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub success_count: usize,
    #[serde(default)]
    pub dry_run: bool,
}

/// `POST /api/preview` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PreviewResponse {
    #[serde(default)]
    pub original_filename: String,
    #[serde(default)]
    pub new_filename: String,
    #[serde(default)]
    pub new_filepath: String,
    #[serde(default)]
    pub already_exists: bool,
}

/// Error body shape shared by every backend endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// LENIENT SCALARS
// =============================================================================

fn deserialize_string_lossy<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_opt_string_lossy(deserializer)?.unwrap_or_default())
}

fn deserialize_opt_string_lossy<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        serde_json::Value::Bool(b) => Ok(Some(b.to_string())),
        _ => Err(D::Error::custom("expected string, number, or null")),
    }
}
