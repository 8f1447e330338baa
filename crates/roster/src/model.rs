//! The rendered form of a view.
//!
//! [`ViewModel`] is what [`DataView::render`](crate::DataView::render)
//! returns: everything a front end needs to draw one frame, already
//! localized. It serializes to JSON for machine consumers; record
//! references are left out of the serialized form.

use roster_render::tabular::Column;
use roster_seeker::KeyPath;
use serde::Serialize;

use crate::filter::FilterControl;
use crate::locale::Locale;
use crate::phase::ViewPhase;

/// Icon of the "no data" panel.
pub const NO_DATA_ICON: &str = "∅";

/// Icon of the "no results" panel.
pub const NO_RESULTS_ICON: &str = "⌕";

/// Icon of the "failed" panel.
pub const ERROR_ICON: &str = "⚠";

/// One frame of a data view.
#[derive(Debug, Serialize)]
#[serde(bound(serialize = ""))]
pub struct ViewModel<'a, T> {
    /// What this frame shows.
    pub phase: ViewPhase,
    /// Language of every string in the model.
    pub locale: Locale,
    /// The search box.
    pub search: SearchModel,
    /// One selector per declared filter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<FilterControl>,
    /// Header cells, one per column.
    pub header: Vec<HeaderCell>,
    /// Records of the current page, in source order. Empty unless populated.
    pub rows: Vec<RowModel<'a, T>>,
    /// Placeholder grid while loading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skeleton: Option<SkeletonModel>,
    /// Panel shown instead of rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel: Option<Panel>,
    /// Page controls, in paginated mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationModel>,
    /// Link to a fuller listing, in unpaginated mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_more: Option<ShowMore>,
    /// Size of the source collection.
    pub total_items: usize,
    /// Records left after search and filters.
    pub matched_items: usize,
}

impl<T> ViewModel<'_, T> {
    /// Returns `true` if the frame shows rows.
    pub fn is_populated(&self) -> bool {
        self.phase == ViewPhase::Populated
    }

    /// The cells of every row, in order.
    pub fn cell_grid(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|row| row.cells.clone()).collect()
    }

    /// Header labels, in column order.
    pub fn labels(&self) -> Vec<&str> {
        self.header.iter().map(|h| h.label.as_str()).collect()
    }
}

/// The search box of a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchModel {
    /// Current term.
    pub term: String,
    /// Localized placeholder.
    pub placeholder: String,
}

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    /// Key path of the column.
    pub key: KeyPath,
    /// Column label.
    pub label: String,
    /// `true` while loading with skeletonized headers.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub skeleton: bool,
    /// Layout hints for text output.
    #[serde(skip)]
    pub layout: Column,
}

/// One displayed record.
#[derive(Debug, Serialize)]
pub struct RowModel<'a, T> {
    /// Position of the record in the source collection.
    pub index: usize,
    /// The record itself, for activation.
    #[serde(skip)]
    pub record: &'a T,
    /// Display text of each column.
    pub cells: Vec<String>,
}

// Manual impls avoid requiring `T: Clone`.
impl<T> Clone for RowModel<'_, T> {
    fn clone(&self) -> Self {
        RowModel {
            index: self.index,
            record: self.record,
            cells: self.cells.clone(),
        }
    }
}

/// Shape of the loading placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkeletonModel {
    pub rows: usize,
    pub columns: usize,
}

/// Which panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    NoData,
    NoResults,
    Failed,
}

/// A localized panel shown in place of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub kind: PanelKind,
    pub icon: String,
    pub title: String,
    pub body: String,
    /// Error text reported by the host, for failed loads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Panel {
    /// Panel for `phase`, if the phase shows one.
    pub fn for_phase(phase: ViewPhase, locale: Locale, detail: Option<&str>) -> Option<Self> {
        let s = locale.strings();
        let (kind, icon, title, body) = match phase {
            ViewPhase::EmptySource => (
                PanelKind::NoData,
                NO_DATA_ICON,
                s.no_data_title,
                s.no_data_body,
            ),
            ViewPhase::EmptyAfterFilter => (
                PanelKind::NoResults,
                NO_RESULTS_ICON,
                s.no_results_title,
                s.no_results_body,
            ),
            ViewPhase::Failed => (PanelKind::Failed, ERROR_ICON, s.error_title, s.error_body),
            ViewPhase::Loading | ViewPhase::Populated => return None,
        };
        Some(Panel {
            kind,
            icon: icon.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            detail: match kind {
                PanelKind::Failed => detail.map(str::to_string),
                _ => None,
            },
        })
    }
}

/// Page controls of a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationModel {
    /// Current 1-based page.
    pub page: usize,
    pub total_pages: usize,
    /// Records across all pages.
    pub total_items: usize,
    /// 1-based positions of the first and last record shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<(usize, usize)>,
    /// "Previous" is enabled.
    pub has_previous: bool,
    /// "Next" is enabled.
    pub has_next: bool,
    /// Localized "Page p of n".
    pub label: String,
    /// Localized "first-last of total", absent on an empty page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_label: Option<String>,
    pub previous_label: String,
    pub next_label: String,
}

/// Link to a fuller listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowMore {
    pub label: String,
    pub target: String,
}
