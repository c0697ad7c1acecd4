//! Forwarding of `/api/*` requests to the renamer backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host, so every JSON endpoint the UI
//! calls is relayed here: same method, path, query, body, and end-to-end
//! headers. The backend's status and body come back untouched, which keeps
//! its `{"error": ...}` messages visible to the client toasts.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap, HeaderName};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::state::AppState;

/// Largest request body relayed to the backend.
pub const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Backend unavailable: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("failed to read request body: {0}")]
    Body(String),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Body(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Headers scoped to a single connection, never relayed.
#[must_use]
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
    )
}

/// Copy `headers` minus hop-by-hop entries and anything named in `Connection`.
///
/// `Host` and `Content-Length` are dropped too; the outgoing client sets
/// both for the new hop.
#[must_use]
pub fn filter_headers(headers: &HeaderMap) -> HeaderMap {
    let listed: Vec<String> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty())
        .collect();

    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_hop_by_hop(name)
            || name == header::HOST
            || name == header::CONTENT_LENGTH
            || listed.iter().any(|l| l == name.as_str())
        {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// Axum handler for `/api/{*path}`.
pub async fn forward(State(state): State<AppState>, req: Request) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    match forward_request(&state, req).await {
        Ok(resp) => {
            tracing::info!(%method, %path, status = resp.status().as_u16(), "forwarded");
            resp
        }
        Err(e) => {
            tracing::warn!(%method, %path, error = %e, "backend request failed");
            e.into_response()
        }
    }
}

async fn forward_request(state: &AppState, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or("/", |pq| pq.as_str());
    let url = format!("{}{path_and_query}", state.backend_url);

    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let upstream = state
        .http
        .request(parts.method, url)
        .headers(filter_headers(&parts.headers))
        .body(bytes)
        .send()
        .await?;

    let status = upstream.status();
    let headers = filter_headers(upstream.headers());
    let body = upstream.bytes().await?;

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
