//! Column declarations.
//!
//! A [`ColumnSpec`] names a field by key path and gives it a label. It can
//! also carry an explicit accessor, a cell renderer and layout hints for the
//! text backend.

use std::fmt;

use roster_render::tabular::{Align, Column, TruncateAt, Width};
use roster_seeker::{KeyPath, Resolvable};

/// Explicit field accessor for a record.
pub type Accessor<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// Custom display for the cells of one column.
///
/// Receives the resolved field text and the whole record. Closures of the
/// shape `Fn(&str, &T) -> String` implement it.
///
/// ```
/// use roster::CellRenderer;
/// use serde_json::{json, Value};
///
/// let shout = |value: &str, _row: &Value| value.to_uppercase();
/// assert_eq!(shout.render("admin", &json!({})), "ADMIN");
/// ```
pub trait CellRenderer<T>: Send + Sync {
    /// Produces the cell text for `row`, given its resolved `value`.
    fn render(&self, value: &str, row: &T) -> String;
}

impl<T, F> CellRenderer<T> for F
where
    F: Fn(&str, &T) -> String + Send + Sync,
{
    fn render(&self, value: &str, row: &T) -> String {
        self(value, row)
    }
}

/// A displayed column.
///
/// # Example
///
/// ```
/// use roster::ColumnSpec;
///
/// struct Student { first: String, last: String }
///
/// let name = ColumnSpec::<Student>::new("name", "Name")
///     .get(|s| format!("{} {}", s.first, s.last));
/// let row = Student { first: "Ada".into(), last: "Lovelace".into() };
/// assert_eq!(name.accessor().map(|get| get(&row)).as_deref(), Some("Ada Lovelace"));
/// ```
pub struct ColumnSpec<T> {
    key: KeyPath,
    label: String,
    get: Option<Accessor<T>>,
    render: Option<Box<dyn CellRenderer<T>>>,
    layout: Column,
}

impl<T> ColumnSpec<T> {
    /// Creates a column for `key` with header `label`.
    pub fn new(key: impl Into<KeyPath>, label: impl Into<String>) -> Self {
        let label = label.into();
        ColumnSpec {
            key: key.into(),
            layout: Column::default().header(label.clone()),
            label,
            get: None,
            render: None,
        }
    }

    /// Sets the explicit accessor for this column's field.
    pub fn get<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.get = Some(Box::new(accessor));
        self
    }

    /// Sets a custom cell renderer.
    pub fn render<R>(mut self, renderer: R) -> Self
    where
        R: CellRenderer<T> + 'static,
    {
        self.render = Some(Box::new(renderer));
        self
    }

    /// Sets the width strategy used by text output.
    pub fn width(mut self, width: Width) -> Self {
        self.layout.width = width;
        self
    }

    /// Sets the alignment used by text output.
    pub fn align(mut self, align: Align) -> Self {
        self.layout.align = align;
        self
    }

    /// Sets where over-long cells are cut in text output.
    pub fn truncate(mut self, at: TruncateAt) -> Self {
        self.layout.truncate = at;
        self
    }

    /// The key path this column displays.
    pub fn key(&self) -> &KeyPath {
        &self.key
    }

    /// The header label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The explicit accessor, if any.
    pub fn accessor(&self) -> Option<&Accessor<T>> {
        self.get.as_ref()
    }

    /// Returns `true` if cells go through a custom renderer.
    pub fn has_renderer(&self) -> bool {
        self.render.is_some()
    }

    /// Layout hints for the text backend.
    pub fn layout(&self) -> &Column {
        &self.layout
    }

    /// Cell text for `row` given the resolved `value`.
    pub(crate) fn display(&self, value: String, row: &T) -> String {
        match &self.render {
            Some(renderer) => renderer.render(&value, row),
            None => value,
        }
    }
}

impl<T: Resolvable + 'static> ColumnSpec<T> {
    /// A column whose accessor walks `key` dynamically.
    ///
    /// Equivalent to an explicit accessor calling [`Resolvable::resolve`].
    pub fn path(key: impl Into<KeyPath>, label: impl Into<String>) -> Self {
        let column = ColumnSpec::new(key, label);
        let key = column.key.clone();
        column.get(move |row: &T| row.resolve(&key))
    }
}

impl<T> fmt::Debug for ColumnSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("get", &self.get.is_some())
            .field("render", &self.render.is_some())
            .field("layout", &self.layout)
            .finish()
    }
}
