//! The search, filter and page state of one open view.
//!
//! [`ViewState`] is a plain value owned by whoever hosts the view. Every
//! transition consumes the state and returns the next one. Transitions that
//! change the search term or a filter selection also move back to page 1,
//! so a page number can never outlive the filter state it was computed for.

use std::collections::BTreeMap;

use roster_seeker::KeyPath;
use serde::{Deserialize, Serialize};

/// Search term, filter selections and current page.
///
/// # Example
///
/// ```
/// use roster::ViewState;
///
/// let state = ViewState::default().with_page(3);
/// assert_eq!(state.page(), 3);
///
/// let state = state.with_search("ali");
/// assert_eq!(state.page(), 1);
/// assert_eq!(state.search_term(), "ali");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    search_term: String,
    selected_filters: BTreeMap<KeyPath, String>,
    page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            search_term: String::new(),
            selected_filters: BTreeMap::new(),
            page: 1,
        }
    }
}

impl ViewState {
    /// Initial state: no search, no filters, page 1.
    pub fn new() -> Self {
        ViewState::default()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The free-text search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current filter selections. Never contains an empty value.
    pub fn selected_filters(&self) -> &BTreeMap<KeyPath, String> {
        &self.selected_filters
    }

    /// The selected value for `key`, or `""` when unrestricted.
    pub fn selected(&self, key: &KeyPath) -> &str {
        self.selected_filters
            .get(key)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns `true` if a search term or any filter restricts results.
    pub fn is_filtered(&self) -> bool {
        !self.search_term.is_empty() || !self.selected_filters.is_empty()
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Sets the search term and returns to page 1.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self.page = 1;
        self
    }

    /// Selects `value` for filter `key` and returns to page 1.
    ///
    /// Selecting `""` is the same as clearing the filter.
    pub fn with_filter(mut self, key: impl Into<KeyPath>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.selected_filters.remove(&key);
        } else {
            self.selected_filters.insert(key, value);
        }
        self.page = 1;
        self
    }

    /// Clears filter `key` and returns to page 1.
    pub fn without_filter(mut self, key: impl Into<KeyPath>) -> Self {
        self.selected_filters.remove(&key.into());
        self.page = 1;
        self
    }

    /// Clears the search term and every filter.
    pub fn cleared(self) -> Self {
        ViewState::default()
    }

    /// Moves to `page`. Page 0 reads as page 1.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Moves forward one page, stopping at `total_pages`.
    pub fn next_page(mut self, total_pages: usize) -> Self {
        if self.page < total_pages {
            self.page += 1;
        }
        self
    }

    /// Moves back one page, stopping at page 1.
    pub fn previous_page(mut self) -> Self {
        self.page = self.page.saturating_sub(1).max(1);
        self
    }

    /// Brings the page back into `1..=total_pages`.
    ///
    /// For hosts whose data shrank between renders.
    pub fn clamp_page(mut self, total_pages: usize) -> Self {
        self.page = self.page.clamp(1, total_pages.max(1));
        self
    }
}
