//! Settings-panel form state.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::net::types::{ConfigResponse, ConfigUpdate, ScanMode, ScanRequest};
use crate::util::preferences::Preferences;

pub const DEFAULT_MEDIA_DIR: &str = "/media";

#[derive(Clone, Debug)]
pub struct SettingsState {
    /// TMDB key as typed. Sent to the backend on save, never persisted here.
    pub api_key: String,
    pub show_api_key: bool,
    /// Backend reports a key is already configured.
    pub api_key_configured: bool,
    pub media_dir: String,
    pub mode: ScanMode,
    pub dry_run: bool,
    pub saving: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::from_preferences(Preferences::default())
    }
}

impl SettingsState {
    #[must_use]
    pub fn from_preferences(prefs: Preferences) -> Self {
        Self {
            api_key: String::new(),
            show_api_key: false,
            api_key_configured: false,
            media_dir: DEFAULT_MEDIA_DIR.to_owned(),
            mode: prefs.mode,
            dry_run: prefs.dry_run,
            saving: false,
        }
    }

    pub fn apply_config(&mut self, config: ConfigResponse) {
        self.media_dir = config
            .media_dir
            .filter(|dir| !dir.is_empty())
            .unwrap_or_else(|| DEFAULT_MEDIA_DIR.to_owned());
        self.api_key_configured = config.tmdb_api_key;
    }

    pub fn toggle_api_key_visibility(&mut self) {
        self.show_api_key = !self.show_api_key;
    }

    /// Input `type` attribute for the key field.
    #[must_use]
    pub fn api_key_input_type(&self) -> &'static str {
        if self.show_api_key { "text" } else { "password" }
    }

    #[must_use]
    pub fn config_update(&self) -> ConfigUpdate {
        ConfigUpdate { tmdb_api_key: self.api_key.clone(), media_dir: self.media_dir.clone() }
    }

    #[must_use]
    pub fn scan_request(&self) -> ScanRequest {
        ScanRequest { directory: self.media_dir.clone(), mode: self.mode }
    }

    #[must_use]
    pub fn preferences(&self) -> Preferences {
        Preferences { mode: self.mode, dry_run: self.dry_run }
    }
}
