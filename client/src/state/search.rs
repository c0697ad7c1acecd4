//! Search-modal state for matching one file against a metadata provider.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::{MediaFile, MediaKind, SearchRequest, SearchResult};
use crate::util::labels::{initial_query, search_title};

/// Progress of the current query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    #[default]
    Idle,
    Searching,
    Done,
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub open: bool,
    /// Index into the file list this search is for.
    pub file_index: Option<usize>,
    pub kind: Option<MediaKind>,
    pub query: String,
    pub results: Vec<SearchResult>,
    pub status: SearchStatus,
    pub highlighted: Option<usize>,
    /// Bumped on open so the view can refocus the query input.
    pub focus_seq: u64,
}

impl SearchState {
    /// Open the modal for `file`, prefilled from its detected metadata.
    pub fn open_for(&mut self, index: usize, file: &MediaFile) {
        self.open = true;
        self.file_index = Some(index);
        self.kind = Some(file.kind);
        self.query = initial_query(file.kind, file.detected_info.as_ref());
        self.results.clear();
        self.status = SearchStatus::Idle;
        self.highlighted = None;
        self.focus_seq += 1;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.kind.map_or("Search", search_title)
    }

    /// Request body for the current query, or `None` when the trimmed query is empty.
    ///
    /// Movies pass along the year detected from the filename.
    #[must_use]
    pub fn request_for(&self, file: &MediaFile) -> Option<SearchRequest> {
        let query = self.query.trim();
        if query.is_empty() {
            return None;
        }
        let year = match file.kind {
            MediaKind::Movie => file
                .detected_info
                .as_ref()
                .and_then(|info| info.year.clone())
                .filter(|y| !y.is_empty()),
            MediaKind::Tv | MediaKind::Music => None,
        };
        Some(SearchRequest { query: query.to_owned(), year })
    }

    pub fn begin_search(&mut self) {
        self.status = SearchStatus::Searching;
        self.results.clear();
        self.highlighted = None;
    }

    pub fn apply_results(&mut self, results: Vec<SearchResult>) {
        self.results = results;
        self.status = SearchStatus::Done;
    }

    pub fn fail(&mut self, message: String) {
        self.results.clear();
        self.status = SearchStatus::Failed(message);
    }

    pub fn highlight(&mut self, index: usize) {
        self.highlighted = Some(index);
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.status == SearchStatus::Searching
    }
}
