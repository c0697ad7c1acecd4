//! Browser `localStorage` persistence for non-secret UI preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the scan mode and dry-run toggle survive a reload. The API key is
//! never stored here; it only goes to the backend.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR and native test
//! builds no-op and return defaults.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::net::types::ScanMode;

pub const STORAGE_KEY: &str = "media_renamer_prefs";

/// Preferences restored on page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub mode: ScanMode,
    #[serde(default = "default_dry_run")]
    pub dry_run: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { mode: ScanMode::Auto, dry_run: default_dry_run() }
    }
}

fn default_dry_run() -> bool {
    true
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("failed to persist {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Stored preferences, or defaults when absent or unreadable.
#[must_use]
pub fn load() -> Preferences {
    load_json(STORAGE_KEY).unwrap_or_default()
}

pub fn save(prefs: Preferences) {
    save_json(STORAGE_KEY, &prefs);
}
