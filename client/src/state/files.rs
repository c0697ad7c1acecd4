//! Scanned-file list, selection, and per-file rename progress.
//!
//! DESIGN
//! ======
//! Rows are addressed by index into `entries`, and `selected` only ever holds
//! indices that exist. A new scan replaces the list wholesale and clears the
//! selection, so responses that arrive for a list that has since been
//! replaced fall out of range and are ignored rather than corrupting rows.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use std::collections::BTreeSet;

use crate::net::types::{MediaFile, RenameRequest, RenameResult, ScanResponse};

/// A scanned file plus the match the user picked for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    pub file: MediaFile,
    /// Proposed filename shown under the original.
    pub new_name: Option<String>,
    /// Payload for the rename endpoints; present once a match is chosen.
    pub rename: Option<RenameRequest>,
    pub renamed: bool,
    /// Backend preview reported the target already exists.
    pub target_exists: bool,
    /// Last failure message from a batch rename.
    pub rename_error: Option<String>,
}

impl FileEntry {
    #[must_use]
    pub fn new(file: MediaFile) -> Self {
        Self { file, new_name: None, rename: None, renamed: false, target_exists: false, rename_error: None }
    }

    /// Rename payload addressed at the file's current path.
    #[must_use]
    pub fn current_request(&self) -> Option<RenameRequest> {
        self.rename.as_ref().map(|req| RenameRequest { filepath: self.file.filepath.clone(), ..req.clone() })
    }
}

/// Lifecycle of the files panel's scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ScanStatus {
    /// No scan yet; the panel is hidden.
    #[default]
    Idle,
    Scanning,
    Ready,
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct FilesState {
    pub entries: Vec<FileEntry>,
    pub selected: BTreeSet<usize>,
    /// File count reported by the last scan.
    pub count: usize,
    pub status: ScanStatus,
    /// A single or batch rename is in flight.
    pub renaming: bool,
}

impl FilesState {
    /// Whether the files panel should be shown at all.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.status != ScanStatus::Idle
    }

    pub fn begin_scan(&mut self) {
        self.status = ScanStatus::Scanning;
    }

    /// Replace the list with a scan result and clear the selection.
    pub fn apply_scan(&mut self, response: ScanResponse) {
        self.entries = response.files.into_iter().map(FileEntry::new).collect();
        self.selected.clear();
        self.count = response.count;
        self.status = ScanStatus::Ready;
    }

    pub fn fail_scan(&mut self, message: String) {
        self.status = ScanStatus::Failed(message);
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Flip one row's selection. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.entries.len() {
            return;
        }
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    #[must_use]
    pub fn all_selected(&self) -> bool {
        self.selected.len() == self.entries.len()
    }

    /// Clear the selection when every row is selected, otherwise select all.
    pub fn toggle_all(&mut self) {
        if self.all_selected() {
            self.selected.clear();
        } else {
            self.selected = (0..self.entries.len()).collect();
        }
    }

    /// Record the chosen match for `index` and select the row.
    ///
    /// Returns `false` if the row no longer exists.
    pub fn apply_match(&mut self, index: usize, new_name: String, request: RenameRequest) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };
        entry.new_name = Some(new_name);
        entry.rename = Some(request);
        entry.target_exists = false;
        entry.rename_error = None;
        self.selected.insert(index);
        true
    }

    /// Flag a row whose proposed target already exists on disk.
    pub fn set_target_exists(&mut self, index: usize, filepath: &str, exists: bool) {
        if let Some(entry) = self.entries.get_mut(index)
            && entry.file.filepath == filepath
        {
            entry.target_exists = exists;
        }
    }

    /// Mark a row renamed and point it at its new name/path.
    pub fn mark_renamed(&mut self, index: usize, new_filename: Option<String>, new_path: Option<String>) {
        let Some(entry) = self.entries.get_mut(index) else {
            return;
        };
        entry.renamed = true;
        entry.rename_error = None;
        if let Some(name) = new_filename {
            entry.file.filename = name;
        }
        if let Some(path) = new_path {
            entry.file.filepath = path;
        }
    }

    /// Apply a single-rename response. Unsuccessful results leave the row untouched.
    ///
    /// On success the row takes the locally proposed name, matching what the
    /// list already showed. A dry run leaves `filepath` alone: the file still
    /// lives at its old path, and a later real rename must address it there.
    pub fn apply_rename_result(&mut self, index: usize, result: &RenameResult, dry_run: bool) {
        if !result.success {
            return;
        }
        let proposed = self.entries.get(index).and_then(|e| e.new_name.clone());
        let new_path = if dry_run || result.dry_run { None } else { result.new_path.clone() };
        self.mark_renamed(index, proposed, new_path);
    }

    /// Selected rows that have a chosen match, in index order.
    #[must_use]
    pub fn pending_batch(&self) -> Vec<(usize, RenameRequest)> {
        self.selected
            .iter()
            .filter_map(|&i| self.entries.get(i).and_then(|e| e.current_request().map(|req| (i, req))))
            .collect()
    }

    /// Apply batch results positionally against the rows that were submitted.
    ///
    /// Only successful results mark their row renamed; failures record the
    /// backend message on the row. Dry-run results keep the old `filepath`.
    pub fn apply_batch_results(&mut self, submitted: &[usize], results: &[RenameResult], dry_run: bool) {
        for (&index, result) in submitted.iter().zip(results) {
            if result.success {
                let new_path = if dry_run || result.dry_run { None } else { result.new_path.clone() };
                self.mark_renamed(index, result.new_filename.clone(), new_path);
            } else if let Some(entry) = self.entries.get_mut(index) {
                entry.rename_error = Some(result.message.clone().unwrap_or_else(|| "Rename failed".to_owned()));
            }
        }
    }
}
