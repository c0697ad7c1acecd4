use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.backend_timeout_secs, DEFAULT_BACKEND_TIMEOUT_SECS);
    assert_eq!(cfg.backend_timeout(), Duration::from_secs(30));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("MEDIA_RENAMER_BACKEND_URL", "http://renamer:5000/"),
        ("MEDIA_RENAMER_BACKEND_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "http://renamer:5000");
    assert_eq!(cfg.backend_timeout_secs, 5);
}

#[test]
fn from_lookup_treats_blank_values_as_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", "  "), ("MEDIA_RENAMER_BACKEND_TIMEOUT_SECS", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_timeout_secs, DEFAULT_BACKEND_TIMEOUT_SECS);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
}

#[test]
fn from_lookup_rejects_port_out_of_range() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
}

#[test]
fn from_lookup_rejects_non_http_backend() {
    let err = HostConfig::from_lookup(lookup_from(&[("MEDIA_RENAMER_BACKEND_URL", "renamer:5000")])).unwrap_err();
    assert_eq!(err, ConfigError::BackendUrl("renamer:5000".to_owned()));
}

#[test]
fn from_lookup_accepts_https_backend() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("MEDIA_RENAMER_BACKEND_URL", "https://media.example//")])).unwrap();
    assert_eq!(cfg.backend_url, "https://media.example");
}
