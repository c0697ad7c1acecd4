//! User actions for the renamer page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each action reads the relevant state signals, fires one backend request
//! on `spawn_local`, and folds the response back into state. Requests are
//! independent: nothing is cancelled or ordered, so a slow response may land
//! after a newer one. Index-addressed updates tolerate that by ignoring rows
//! that no longer exist.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::net::api;
use crate::net::types::{RenameRequest, SearchResult};
use crate::state::browser::BrowserState;
use crate::state::files::{FilesState, ScanStatus};
use crate::state::search::SearchState;
use crate::state::settings::SettingsState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::labels::{batch_summary, rename_failure_message, rename_success_message};
use crate::util::matching::{build_match, episode_request};
use crate::util::path::browse_start;
use crate::util::{preferences, toast};

/// Signals shared by every renamer component.
#[derive(Clone, Copy)]
pub struct RenamerContext {
    pub settings: RwSignal<SettingsState>,
    pub files: RwSignal<FilesState>,
    pub browser: RwSignal<BrowserState>,
    pub search: RwSignal<SearchState>,
    pub toasts: RwSignal<ToastState>,
}

impl RenamerContext {
    /// Create fresh state, restoring stored preferences.
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings: RwSignal::new(SettingsState::from_preferences(preferences::load())),
            files: RwSignal::new(FilesState::default()),
            browser: RwSignal::new(BrowserState::default()),
            search: RwSignal::new(SearchState::default()),
            toasts: RwSignal::new(ToastState::default()),
        }
    }

    fn toast(self, message: impl Into<String>, kind: ToastKind) {
        toast::show_toast(self.toasts, message, kind);
    }

    // =========================================================================
    // SETTINGS
    // =========================================================================

    /// Load backend config into the settings form. Failures are logged only.
    pub fn load_config(self) {
        let settings = self.settings;
        spawn_local(async move {
            match api::fetch_config().await {
                Ok(config) => settings.update(|s| s.apply_config(config)),
                Err(e) => log_error(&format!("failed to load config: {e}")),
            }
        });
    }

    pub fn save_settings(self) {
        if self.settings.get_untracked().saving {
            return;
        }
        let update = self.settings.get_untracked().config_update();
        self.settings.update(|s| s.saving = true);
        spawn_local(async move {
            match api::save_config(&update).await {
                Ok(()) => {
                    self.settings.update(|s| {
                        s.saving = false;
                        if !s.api_key.is_empty() {
                            s.api_key_configured = true;
                        }
                    });
                    self.toast("Settings saved", ToastKind::Success);
                }
                Err(e) => {
                    self.settings.update(|s| s.saving = false);
                    self.toast(e.toast_message("Failed to save settings"), ToastKind::Error);
                }
            }
        });
    }

    /// Persist the non-secret preferences after a mode or dry-run change.
    pub fn persist_preferences(self) {
        preferences::save(self.settings.get_untracked().preferences());
    }

    // =========================================================================
    // SCAN
    // =========================================================================

    pub fn scan_files(self) {
        if self.files.get_untracked().status == ScanStatus::Scanning {
            return;
        }
        let request = self.settings.get_untracked().scan_request();
        self.files.update(FilesState::begin_scan);
        spawn_local(async move {
            match api::scan(&request).await {
                Ok(response) => {
                    let count = response.count;
                    self.files.update(|f| f.apply_scan(response));
                    self.toast(format!("Found {count} files"), ToastKind::Success);
                }
                Err(e) => {
                    let message = e.toast_message("Failed to scan directory");
                    self.files.update(|f| f.fail_scan(message.clone()));
                    self.toast(message, ToastKind::Error);
                }
            }
        });
    }

    // =========================================================================
    // DIRECTORY BROWSER
    // =========================================================================

    pub fn open_browser(self) {
        let start = browse_start(&self.settings.get_untracked().media_dir);
        self.browser.update(|b| b.open_at(start.clone()));
        self.load_browser_directory(start);
    }

    pub fn load_browser_directory(self, path: String) {
        self.browser.update(|b| b.loading = true);
        spawn_local(async move {
            match api::browse(&path).await {
                Ok(listing) => self.browser.update(|b| b.apply_listing(listing)),
                Err(e) => {
                    self.browser.update(|b| b.loading = false);
                    self.toast(e.toast_message("Failed to browse directory"), ToastKind::Error);
                }
            }
        });
    }

    pub fn browser_go_up(self) {
        let parent = self.browser.get_untracked().up_path();
        self.load_browser_directory(parent);
    }

    /// Commit the highlighted (or current) directory as the media dir.
    pub fn select_browser_path(self) {
        let chosen = self.browser.get_untracked().chosen_path();
        self.settings.update(|s| s.media_dir = chosen);
        self.browser.update(BrowserState::close);
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    pub fn open_search(self, index: usize) {
        let Some(file) = self.files.with_untracked(|f| f.entries.get(index).map(|e| e.file.clone())) else {
            return;
        };
        self.search.update(|s| s.open_for(index, &file));
    }

    pub fn perform_search(self) {
        let state = self.search.get_untracked();
        let Some(index) = state.file_index else {
            return;
        };
        let Some(file) = self.files.with_untracked(|f| f.entries.get(index).map(|e| e.file.clone())) else {
            return;
        };
        let Some(request) = state.request_for(&file) else {
            return;
        };
        self.search.update(SearchState::begin_search);
        spawn_local(async move {
            match api::search(file.kind, &request).await {
                Ok(results) => self.search.update(|s| s.apply_results(results)),
                Err(e) => {
                    let message = e.toast_message("Search failed");
                    self.search.update(|s| s.fail(message.clone()));
                    self.toast(message, ToastKind::Error);
                }
            }
        });
    }

    /// Apply search hit `result_index` to the file the modal was opened for.
    ///
    /// TV matches first look up the episode title; a failed lookup falls
    /// back to a name without it.
    pub fn select_search_result(self, result_index: usize) {
        let state = self.search.get_untracked();
        let (Some(file_index), Some(result)) = (state.file_index, state.results.get(result_index).cloned()) else {
            return;
        };
        let Some(file) = self.files.with_untracked(|f| f.entries.get(file_index).map(|e| e.file.clone())) else {
            return;
        };
        self.search.update(|s| s.highlight(result_index));

        spawn_local(async move {
            let episode_title = match &result {
                SearchResult::Tv(show) => match episode_request(&file, show) {
                    Some(req) => match api::fetch_episode(&req).await {
                        Ok(ep) => ep.title,
                        Err(e) => {
                            log_error(&format!("episode lookup failed: {e}"));
                            String::new()
                        }
                    },
                    None => String::new(),
                },
                SearchResult::Movie(_) | SearchResult::Music(_) => String::new(),
            };

            let (new_name, request) = build_match(&file, &result, &episode_title);
            let mut applied = false;
            self.files.update(|f| applied = f.apply_match(file_index, new_name, request.clone()));
            self.search.update(SearchState::close);
            if !applied {
                return;
            }
            self.toast("Selection applied. Click \"Rename\" to apply changes.", ToastKind::Info);
            self.check_target(file_index, request);
        });
    }

    /// Ask the backend whether the proposed target already exists.
    fn check_target(self, index: usize, request: RenameRequest) {
        spawn_local(async move {
            match api::preview_rename(&request).await {
                Ok(preview) => self
                    .files
                    .update(|f| f.set_target_exists(index, &request.filepath, preview.already_exists)),
                Err(e) => log_error(&format!("rename preview failed: {e}")),
            }
        });
    }

    // =========================================================================
    // RENAME
    // =========================================================================

    pub fn rename_file(self, index: usize) {
        let Some(request) = self.files.with_untracked(|f| f.entries.get(index).and_then(|e| e.current_request()))
        else {
            self.toast("Please search and select a match first", ToastKind::Warning);
            return;
        };
        if self.files.get_untracked().renaming {
            return;
        }
        let dry_run = self.settings.get_untracked().dry_run;
        self.files.update(|f| f.renaming = true);
        spawn_local(async move {
            let outcome = api::rename(&request, dry_run).await;
            self.files.update(|f| f.renaming = false);
            match outcome {
                Ok(result) if result.success => {
                    self.files.update(|f| f.apply_rename_result(index, &result, dry_run));
                    let new_filename = result.new_filename.unwrap_or_default();
                    self.toast(rename_success_message(dry_run, &new_filename), ToastKind::Success);
                }
                Ok(result) => self.toast(rename_failure_message(result.message.as_deref()), ToastKind::Error),
                Err(e) => {
                    log_error(&format!("rename failed: {e}"));
                    self.toast(rename_failure_message(None), ToastKind::Error);
                }
            }
        });
    }

    pub fn rename_selected(self) {
        let files = self.files.get_untracked();
        if files.selected.is_empty() {
            self.toast("No files selected", ToastKind::Warning);
            return;
        }
        let pending = files.pending_batch();
        if pending.is_empty() {
            self.toast("Selected files have no matches. Search and select matches first.", ToastKind::Warning);
            return;
        }
        if files.renaming {
            return;
        }
        let dry_run = self.settings.get_untracked().dry_run;
        let (indices, requests): (Vec<usize>, Vec<_>) = pending.into_iter().unzip();
        self.files.update(|f| f.renaming = true);
        spawn_local(async move {
            let outcome = api::batch_rename(requests, dry_run).await;
            self.files.update(|f| f.renaming = false);
            match outcome {
                Ok(response) => {
                    self.files.update(|f| f.apply_batch_results(&indices, &response.results, dry_run));
                    let (message, kind) = batch_summary(dry_run, response.success_count, response.total);
                    self.toast(message, kind);
                }
                Err(e) => {
                    log_error(&format!("batch rename failed: {e}"));
                    self.toast("Batch rename failed", ToastKind::Error);
                }
            }
        });
    }
}

impl Default for RenamerContext {
    fn default() -> Self {
        Self::new()
    }
}

fn log_error(message: &str) {
    #[cfg(feature = "hydrate")]
    log::error!("{message}");
    #[cfg(not(feature = "hydrate"))]
    let _ = message;
}
