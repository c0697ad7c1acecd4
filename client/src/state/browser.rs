//! Directory-browser modal state.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use crate::net::types::{BrowseResponse, DirEntry};
use crate::util::path::parent_path;

#[derive(Clone, Debug, Default)]
pub struct BrowserState {
    pub open: bool,
    /// Directory currently listed.
    pub current: String,
    /// `None` at the filesystem root; disables "Up".
    pub parent: Option<String>,
    pub items: Vec<DirEntry>,
    /// Single-clicked entry path.
    pub highlighted: Option<String>,
    pub loading: bool,
    /// Bumped on open so the view can move focus into the modal.
    pub focus_seq: u64,
}

impl BrowserState {
    /// Open the modal at `path`. The listing is filled by [`Self::apply_listing`].
    pub fn open_at(&mut self, path: String) {
        self.open = true;
        self.current = path;
        self.highlighted = None;
        self.loading = true;
        self.focus_seq += 1;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.loading = false;
    }

    pub fn apply_listing(&mut self, listing: BrowseResponse) {
        self.current = listing.current;
        self.parent = listing.parent;
        self.items = listing.items;
        self.highlighted = None;
        self.loading = false;
    }

    pub fn highlight(&mut self, path: String) {
        self.highlighted = Some(path);
    }

    #[must_use]
    pub fn is_highlighted(&self, path: &str) -> bool {
        self.highlighted.as_deref() == Some(path)
    }

    #[must_use]
    pub fn can_go_up(&self) -> bool {
        self.parent.is_some()
    }

    /// Where "Up" navigates to.
    #[must_use]
    pub fn up_path(&self) -> String {
        parent_path(&self.current)
    }

    /// The path "Select" commits: the highlighted entry, else the listed directory.
    #[must_use]
    pub fn chosen_path(&self) -> String {
        self.highlighted.clone().unwrap_or_else(|| self.current.clone())
    }
}
