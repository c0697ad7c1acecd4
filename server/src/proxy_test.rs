use axum::http::{HeaderValue, header};

use super::*;

#[test]
fn is_hop_by_hop_matches_standard_set() {
    for name in ["connection", "keep-alive", "te", "trailer", "transfer-encoding", "upgrade", "proxy-authorization"] {
        assert!(is_hop_by_hop(&HeaderName::from_static(name)), "{name}");
    }
    assert!(!is_hop_by_hop(&header::CONTENT_TYPE));
    assert!(!is_hop_by_hop(&header::AUTHORIZATION));
}

#[test]
fn filter_headers_drops_hop_host_and_length() {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("12"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));

    let out = filter_headers(&headers);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get(header::CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(out.get(header::ACCEPT).unwrap(), "*/*");
}

#[test]
fn filter_headers_drops_names_listed_in_connection() {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONNECTION, HeaderValue::from_static("close, X-Debug-Token"));
    headers.insert("x-debug-token", HeaderValue::from_static("t"));
    headers.insert("x-trace", HeaderValue::from_static("keep"));

    let out = filter_headers(&headers);
    assert!(out.get("x-debug-token").is_none());
    assert!(out.get(header::CONNECTION).is_none());
    assert_eq!(out.get("x-trace").unwrap(), "keep");
}

#[test]
fn filter_headers_keeps_repeated_values() {
    let mut headers = HeaderMap::new();
    headers.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
    headers.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));
    let out = filter_headers(&headers);
    assert_eq!(out.get_all(header::SET_COOKIE).iter().count(), 2);
}

#[test]
fn body_error_maps_to_bad_request() {
    let err = ProxyError::Body("length limit exceeded".to_owned());
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "failed to read request body: length limit exceeded");
}

#[tokio::test]
async fn error_response_carries_json_error_field() {
    let resp = ProxyError::Body("boom".to_owned()).into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error"], "failed to read request body: boom");
}
