//! REST API helpers for talking to the renamer backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. Non-OK responses carry the
//! backend's `{"error": ...}` message when it sent one, so callers can show
//! it in a toast and fall back to their own wording otherwise.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    BatchRenameResponse, BrowseResponse, ConfigResponse, ConfigUpdate, EpisodeRequest, EpisodeResponse,
    MediaKind, PreviewResponse, RenameRequest, RenameResult, ScanRequest, ScanResponse, SearchRequest,
    SearchResult,
};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
#[cfg(feature = "hydrate")]
use super::types::{BatchRenameRequest, MovieResult, MusicResult, RenameCall, SearchResponse, TvResult};

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("request failed: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("backend returned {status}")]
    Status { status: u16, message: Option<String> },
    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// Called outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text for a toast: the backend's own message if it sent one, else `fallback`.
    #[must_use]
    pub fn toast_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

/// Endpoint for a title search of the given kind.
#[must_use]
pub fn search_endpoint(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Movie => "/api/search/movie",
        MediaKind::Tv => "/api/search/tv",
        MediaKind::Music => "/api/search/music",
    }
}

/// Extract the `error` field from a raw error body, if present.
#[cfg(any(test, feature = "hydrate"))]
fn error_message_from_body(raw: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(raw).ok().and_then(|body| body.error)
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let raw = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, message: error_message_from_body(&raw) });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url).json(body)?.send().await?;
    read_json(resp).await
}

/// Fetch the backend configuration via `GET /api/config`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn fetch_config() -> Result<ConfigResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/config").send().await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Save the API key and media directory via `POST /api/config`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects the
/// directory.
pub async fn save_config(update: &ConfigUpdate) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let _: serde_json::Value = post_json("/api/config", update).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = update;
        Err(ApiError::Unavailable)
    }
}

/// Scan a directory for media files via `POST /api/scan`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the directory is invalid.
pub async fn scan(request: &ScanRequest) -> Result<ScanResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/scan", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// List subdirectories of `path` via `GET /api/browse?path=...`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the path does not exist, or
/// the backend lacks permission to read it.
pub async fn browse(path: &str) -> Result<BrowseResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/browse")
            .query([("path", path)])
            .send()
            .await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// Search the metadata provider for `kind`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the provider errors.
pub async fn search(kind: MediaKind, request: &SearchRequest) -> Result<Vec<SearchResult>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = search_endpoint(kind);
        let results = match kind {
            MediaKind::Movie => {
                let resp: SearchResponse<MovieResult> = post_json(url, request).await?;
                resp.results.into_iter().map(SearchResult::Movie).collect()
            }
            MediaKind::Tv => {
                let resp: SearchResponse<TvResult> = post_json(url, request).await?;
                resp.results.into_iter().map(SearchResult::Tv).collect()
            }
            MediaKind::Music => {
                let resp: SearchResponse<MusicResult> = post_json(url, request).await?;
                resp.results.into_iter().map(SearchResult::Music).collect()
            }
        };
        Ok(results)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kind, request);
        Err(ApiError::Unavailable)
    }
}

/// Look up an episode title via `POST /api/search/tv/episode`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_episode(request: &EpisodeRequest) -> Result<EpisodeResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/search/tv/episode", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend what `request` would rename to via `POST /api/preview`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the file is gone.
pub async fn preview_rename(request: &RenameRequest) -> Result<PreviewResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/preview", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Rename one file via `POST /api/rename`.
///
/// A decoded body with `success: false` is returned as `Ok`; only transport
/// and HTTP-level failures are errors.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn rename(request: &RenameRequest, dry_run: bool) -> Result<RenameResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/rename", &RenameCall { request, dry_run }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, dry_run);
        Err(ApiError::Unavailable)
    }
}

/// Rename several files via `POST /api/batch/rename`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn batch_rename(files: Vec<RenameRequest>, dry_run: bool) -> Result<BatchRenameResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/batch/rename", &BatchRenameRequest { files, dry_run }).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (files, dry_run);
        Err(ApiError::Unavailable)
    }
}
