//! The data view orchestrator.
//!
//! [`DataView`] holds the declarations of one screen (columns, filters,
//! search keys, page size, display options). Each call to
//! [`render`](DataView::render) takes the current records and
//! [`ViewState`] and runs search, filters and pagination over them:
//!
//! ```text
//! data ──search──▶ ──filters──▶ filtered ──paginate──▶ page ──▶ ViewModel
//! ```
//!
//! Nothing is cached between renders. The phase, the filtered set and the
//! page are all derived again from the inputs.

use std::collections::BTreeMap;
use std::fmt;

use roster_render::Skeleton;
use roster_seeker::{paginate, KeyPath, PageSize, Query, Resolvable};

use crate::column::{Accessor, ColumnSpec};
use crate::filter::{FilterControl, FilterOption};
use crate::locale::Locale;
use crate::model::{
    HeaderCell, PaginationModel, Panel, RowModel, SearchModel, ShowMore, SkeletonModel, ViewModel,
};
use crate::phase::ViewPhase;
use crate::state::ViewState;

/// Skeleton rows shown while loading an unpaginated view.
pub const DEFAULT_SKELETON_ROWS: usize = 5;

type RowHandler<T> = Box<dyn Fn(&T) + Send + Sync>;

/// A searchable, filterable, paginated view over records of type `T`.
///
/// # Example
///
/// ```
/// use roster::{DataView, ColumnSpec, FilterOption, PageSize, ViewPhase, ViewState};
/// use serde_json::{json, Value};
///
/// let view = DataView::<Value>::new()
///     .column(ColumnSpec::new("name", "Name"))
///     .column(ColumnSpec::new("role", "Role"))
///     .filter(FilterOption::new("role").value("Admin", "ADMIN"))
///     .paginate(PageSize::new(10).unwrap())
///     .resolve_paths();
///
/// let data = vec![
///     json!({"name": "Alice", "role": "ADMIN"}),
///     json!({"name": "Bob", "role": "STUDENT"}),
/// ];
///
/// let model = view.render(&data, &ViewState::new().with_search("ali"));
/// assert_eq!(model.phase, ViewPhase::Populated);
/// assert_eq!(model.cell_grid(), vec![vec!["Alice", "ADMIN"]]);
/// ```
pub struct DataView<T> {
    columns: Vec<ColumnSpec<T>>,
    filters: Vec<FilterOption>,
    search_keys: Vec<KeyPath>,
    page_size: Option<PageSize>,
    on_row_click: Option<RowHandler<T>>,
    locale: Locale,
    loading: bool,
    load_error: Option<String>,
    show_more: Option<String>,
    skeleton_rows: Option<usize>,
    skeleton_header: bool,
    fields: BTreeMap<KeyPath, Accessor<T>>,
    fallback: Option<fn(&T, &KeyPath) -> String>,
}

impl<T> Default for DataView<T> {
    fn default() -> Self {
        DataView {
            columns: Vec::new(),
            filters: Vec::new(),
            search_keys: Vec::new(),
            page_size: None,
            on_row_click: None,
            locale: Locale::default(),
            loading: false,
            load_error: None,
            show_more: None,
            skeleton_rows: None,
            skeleton_header: false,
            fields: BTreeMap::new(),
            fallback: None,
        }
    }
}

impl<T> DataView<T> {
    /// Creates an empty view: no columns, unpaginated, English.
    pub fn new() -> Self {
        DataView::default()
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Appends a column.
    pub fn column(mut self, column: ColumnSpec<T>) -> Self {
        self.columns.push(column);
        self
    }

    /// Appends several columns.
    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnSpec<T>>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Appends a filter.
    pub fn filter(mut self, filter: FilterOption) -> Self {
        self.filters.push(filter);
        self
    }

    /// Appends several filters.
    pub fn filters(mut self, filters: impl IntoIterator<Item = FilterOption>) -> Self {
        self.filters.extend(filters);
        self
    }

    /// Restricts search to `key` (plus any other declared search keys).
    pub fn search_key(mut self, key: impl Into<KeyPath>) -> Self {
        self.search_keys.push(key.into());
        self
    }

    /// Restricts search to `keys`.
    ///
    /// Without any search key, every column key is searched.
    pub fn search_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<KeyPath>,
    {
        self.search_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Shows `size` records per page with page controls.
    pub fn paginate(mut self, size: PageSize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Sets or clears the page size.
    pub fn page_size(mut self, size: Option<PageSize>) -> Self {
        self.page_size = size;
        self
    }

    /// Handler fired by [`activate`](DataView::activate).
    pub fn on_row_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_row_click = Some(Box::new(handler));
        self
    }

    /// Sets the display language.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Marks the data as still loading.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Reports a load failure, shown in place of rows.
    pub fn load_error(mut self, error: impl Into<String>) -> Self {
        self.load_error = Some(error.into());
        self
    }

    /// Link target for "show more" in unpaginated mode.
    pub fn show_more(mut self, target: impl Into<String>) -> Self {
        self.show_more = Some(target.into());
        self
    }

    /// Number of skeleton rows while loading.
    pub fn skeleton_rows(mut self, rows: usize) -> Self {
        self.skeleton_rows = Some(rows);
        self
    }

    /// Skeletonizes header labels while loading.
    pub fn skeleton_header(mut self, enabled: bool) -> Self {
        self.skeleton_header = enabled;
        self
    }

    /// Registers an accessor for `key`, used for search, filters and cells
    /// when no column provides one.
    pub fn field<F>(mut self, key: impl Into<KeyPath>, accessor: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.fields.insert(key.into(), Box::new(accessor));
        self
    }

    // ========================================================================
    // Per-render inputs
    // ========================================================================

    /// Updates the loading flag between renders.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Updates or clears the load failure between renders.
    pub fn set_load_error(&mut self, error: Option<String>) {
        self.load_error = error;
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Declared columns.
    pub fn column_specs(&self) -> &[ColumnSpec<T>] {
        &self.columns
    }

    /// Declared filters.
    pub fn filter_options(&self) -> &[FilterOption] {
        &self.filters
    }

    /// Keys searched by the free-text term: the declared search keys, or
    /// every column key when none were declared.
    pub fn effective_search_keys(&self) -> Vec<KeyPath> {
        if self.search_keys.is_empty() {
            self.columns.iter().map(|c| c.key().clone()).collect()
        } else {
            self.search_keys.clone()
        }
    }

    /// Page size, or `None` when unpaginated.
    pub fn get_page_size(&self) -> Option<PageSize> {
        self.page_size
    }

    /// Display language.
    pub fn get_locale(&self) -> Locale {
        self.locale
    }

    /// Returns `true` if dynamic key path resolution is enabled.
    pub fn resolves_paths(&self) -> bool {
        self.fallback.is_some()
    }

    // ========================================================================
    // Resolution and filtering
    // ========================================================================

    /// Text of field `key` on `row`.
    ///
    /// The first match wins: a column with this key and an explicit
    /// accessor, an accessor registered with [`field`](DataView::field),
    /// dynamic resolution when enabled, and finally `""`.
    pub fn resolve_field(&self, row: &T, key: &KeyPath) -> String {
        if let Some(get) = self
            .columns
            .iter()
            .filter(|c| c.key() == key)
            .find_map(|c| c.accessor())
        {
            return get(row);
        }
        if let Some(get) = self.fields.get(key) {
            return get(row);
        }
        match self.fallback {
            Some(resolve) => resolve(row, key),
            None => {
                log::trace!("no accessor for key '{}'", key);
                String::new()
            }
        }
    }

    /// The query `state` stands for.
    pub fn query(&self, state: &ViewState) -> Query {
        Query::new()
            .search(state.search_term())
            .search_in(self.effective_search_keys())
            .filters(state.selected_filters().iter().map(|(k, v)| (k, v.clone())))
            .build()
    }

    /// Positions in `data` of the records matching `state`, in order.
    pub fn matching_positions(&self, data: &[T], state: &ViewState) -> Vec<usize> {
        self.query(state)
            .positions(data, |row, key| self.resolve_field(row, key))
    }

    /// Records matching `state`, in order.
    pub fn filtered<'a>(&self, data: &'a [T], state: &ViewState) -> Vec<&'a T> {
        self.matching_positions(data, state)
            .into_iter()
            .map(|i| &data[i])
            .collect()
    }

    /// Display phase for `data` under `state`.
    pub fn phase(&self, data: &[T], state: &ViewState) -> ViewPhase {
        if self.loading || self.load_error.is_some() || data.is_empty() {
            return ViewPhase::derive(self.loading, self.load_error.is_some(), data.len(), 0);
        }
        let positions = self.matching_positions(data, state);
        let page = paginate(&positions, state.page(), self.page_size);
        ViewPhase::derive(false, false, data.len(), page.len())
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Renders one frame.
    pub fn render<'a>(&self, data: &'a [T], state: &ViewState) -> ViewModel<'a, T> {
        let positions = if self.loading || self.load_error.is_some() {
            Vec::new()
        } else {
            self.matching_positions(data, state)
        };
        let page = paginate(&positions, state.page(), self.page_size);
        let phase = ViewPhase::derive(
            self.loading,
            self.load_error.is_some(),
            data.len(),
            page.len(),
        );

        log::debug!(
            "render: phase={:?} source={} matched={} page={}/{}",
            phase,
            data.len(),
            positions.len(),
            page.number,
            page.total_pages
        );

        let strings = self.locale.strings();
        let skeleton_header = phase == ViewPhase::Loading && self.skeleton_header;

        let rows: Vec<RowModel<'a, T>> = if phase == ViewPhase::Populated {
            page.items
                .iter()
                .map(|&index| self.row_model(data, index))
                .collect()
        } else {
            Vec::new()
        };

        let skeleton = (phase == ViewPhase::Loading).then(|| SkeletonModel {
            rows: self.skeleton_row_count(),
            columns: self.columns.len(),
        });

        let pagination = match (phase, self.page_size) {
            (ViewPhase::Populated, Some(_)) => Some(PaginationModel {
                page: page.number,
                total_pages: page.total_pages,
                total_items: page.total_items,
                range: page.range(),
                has_previous: page.has_previous(),
                has_next: page.has_next(),
                label: self.locale.page_label(page.number, page.total_pages),
                range_label: page
                    .range()
                    .map(|(first, last)| self.locale.range_label(first, last, page.total_items)),
                previous_label: strings.previous.to_string(),
                next_label: strings.next.to_string(),
            }),
            _ => None,
        };

        let show_more = match (phase, self.page_size, &self.show_more) {
            (ViewPhase::Populated, None, Some(target)) => Some(ShowMore {
                label: strings.show_more.to_string(),
                target: target.clone(),
            }),
            _ => None,
        };

        ViewModel {
            phase,
            locale: self.locale,
            search: SearchModel {
                term: state.search_term().to_string(),
                placeholder: strings.search_placeholder.to_string(),
            },
            filters: self.filter_controls(state),
            header: self.header_cells(skeleton_header),
            rows,
            skeleton,
            panel: Panel::for_phase(phase, self.locale, self.load_error.as_deref()),
            pagination,
            show_more,
            total_items: data.len(),
            matched_items: positions.len(),
        }
    }

    /// Fires the row handler for `row`. Returns `false` without a handler.
    pub fn activate(&self, row: &RowModel<'_, T>) -> bool {
        self.activate_record(row.record)
    }

    /// Fires the row handler for `record`. Returns `false` without a handler.
    pub fn activate_record(&self, record: &T) -> bool {
        match &self.on_row_click {
            Some(handler) => {
                handler(record);
                true
            }
            None => false,
        }
    }

    fn row_model<'a>(&self, data: &'a [T], index: usize) -> RowModel<'a, T> {
        let record = &data[index];
        let cells = self
            .columns
            .iter()
            .map(|column| {
                let value = match column.accessor() {
                    Some(get) => get(record),
                    None => self.resolve_field(record, column.key()),
                };
                column.display(value, record)
            })
            .collect();
        RowModel {
            index,
            record,
            cells,
        }
    }

    fn header_cells(&self, skeleton: bool) -> Vec<HeaderCell> {
        let bars = Skeleton::new(1, self.columns.len()).header();
        self.columns
            .iter()
            .zip(bars)
            .map(|(column, bar)| {
                let label = if skeleton {
                    bar
                } else {
                    column.label().to_string()
                };
                let mut layout = column.layout().clone();
                layout.header = Some(label.clone());
                HeaderCell {
                    key: column.key().clone(),
                    label,
                    skeleton,
                    layout,
                }
            })
            .collect()
    }

    fn filter_controls(&self, state: &ViewState) -> Vec<FilterControl> {
        self.filters
            .iter()
            .map(|option| {
                let heading = self
                    .columns
                    .iter()
                    .find(|c| c.key() == &option.key)
                    .map(|c| c.label())
                    .unwrap_or(option.key.as_str());
                FilterControl::build(option, heading, state.selected(&option.key), self.locale)
            })
            .collect()
    }

    fn skeleton_row_count(&self) -> usize {
        self.skeleton_rows.unwrap_or_else(|| {
            self.page_size
                .map(PageSize::get)
                .unwrap_or(DEFAULT_SKELETON_ROWS)
        })
    }
}

impl<T: Resolvable> DataView<T> {
    /// Resolves any key without an accessor by walking the record.
    pub fn resolve_paths(mut self) -> Self {
        self.fallback = Some(<T as Resolvable>::accessor);
        self
    }
}

impl<T> fmt::Debug for DataView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataView")
            .field("columns", &self.columns)
            .field("filters", &self.filters)
            .field("search_keys", &self.search_keys)
            .field("page_size", &self.page_size)
            .field("locale", &self.locale)
            .field("loading", &self.loading)
            .field("load_error", &self.load_error)
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("resolve_paths", &self.fallback.is_some())
            .finish_non_exhaustive()
    }
}
