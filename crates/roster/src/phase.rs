//! Display phases of a view.

use serde::Serialize;

/// What a view shows for one render.
///
/// Derived on every render from the inputs; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewPhase {
    /// Data is being fetched: skeleton rows.
    Loading,
    /// The host reported a load failure: error panel.
    Failed,
    /// The source collection is empty: "no data" panel.
    EmptySource,
    /// Data exists but nothing is left on this page: "no results" panel.
    EmptyAfterFilter,
    /// Rows to show.
    Populated,
}

impl ViewPhase {
    /// Derives the phase. The first matching rule wins:
    ///
    /// 1. loading
    /// 2. a load error was reported
    /// 3. the source is empty, whatever the search or filters
    /// 4. the current page has no records
    /// 5. otherwise populated
    ///
    /// ```
    /// use roster::ViewPhase;
    ///
    /// assert_eq!(ViewPhase::derive(false, false, 0, 0), ViewPhase::EmptySource);
    /// assert_eq!(ViewPhase::derive(false, false, 3, 0), ViewPhase::EmptyAfterFilter);
    /// assert_eq!(ViewPhase::derive(true, true, 3, 3), ViewPhase::Loading);
    /// ```
    pub fn derive(loading: bool, failed: bool, source_len: usize, page_len: usize) -> Self {
        if loading {
            ViewPhase::Loading
        } else if failed {
            ViewPhase::Failed
        } else if source_len == 0 {
            ViewPhase::EmptySource
        } else if page_len == 0 {
            ViewPhase::EmptyAfterFilter
        } else {
            ViewPhase::Populated
        }
    }

    /// Returns `true` for phases that show a panel instead of rows.
    pub fn is_panel(self) -> bool {
        matches!(
            self,
            ViewPhase::Failed | ViewPhase::EmptySource | ViewPhase::EmptyAfterFilter
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_wins_over_everything() {
        assert_eq!(ViewPhase::derive(true, true, 0, 0), ViewPhase::Loading);
        assert_eq!(ViewPhase::derive(true, false, 5, 5), ViewPhase::Loading);
    }

    #[test]
    fn failure_wins_over_emptiness() {
        assert_eq!(ViewPhase::derive(false, true, 0, 0), ViewPhase::Failed);
        assert_eq!(ViewPhase::derive(false, true, 4, 2), ViewPhase::Failed);
    }

    #[test]
    fn source_emptiness_wins_over_filter_emptiness() {
        assert_eq!(ViewPhase::derive(false, false, 0, 0), ViewPhase::EmptySource);
    }

    #[test]
    fn populated() {
        assert_eq!(ViewPhase::derive(false, false, 4, 2), ViewPhase::Populated);
        assert!(!ViewPhase::Populated.is_panel());
        assert!(ViewPhase::EmptyAfterFilter.is_panel());
        assert!(!ViewPhase::Loading.is_panel());
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&ViewPhase::EmptyAfterFilter).unwrap();
        assert_eq!(json, r#""empty_after_filter""#);
    }
}
