//! Core types for table layout.
//!
//! Column widths, alignment, truncation and row decorations.

use serde::{Deserialize, Serialize};

/// Horizontal placement of a cell's text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Flush left.
    #[default]
    Left,
    /// Flush right, for numbers.
    Right,
    /// Centered; odd padding goes to the right.
    Center,
}

/// Position where truncation occurs when content exceeds the column width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruncateAt {
    /// Keep the start: "Hello World" → "Hello W…"
    #[default]
    End,
    /// Keep the end: "Hello World" → "…o World"
    Start,
    /// Keep both ends: "Hello World" → "Hell…rld"
    Middle,
}

/// How wide a column is.
///
/// In configuration files a width is written as a number (`12`), a bounds
/// map (`{min: 4, max: 30}`), `"fill"` or `"<n>fr"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WidthRaw", into = "WidthRaw")]
pub enum Width {
    /// Exactly this many display columns.
    Fixed(usize),
    /// Width taken from content, constrained by optional bounds.
    Bounded {
        /// Minimum width (0 if not specified).
        min: Option<usize>,
        /// Upper bound, none when unset.
        max: Option<usize>,
    },
    /// Share of the remaining space, weight 1.
    Fill,
    /// Share of the remaining space, weight n.
    Fraction(usize),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WidthRaw {
    Fixed(usize),
    Bounded {
        #[serde(default)]
        min: Option<usize>,
        #[serde(default)]
        max: Option<usize>,
    },
    StringVariant(String),
}

impl From<Width> for WidthRaw {
    fn from(width: Width) -> Self {
        match width {
            Width::Fixed(w) => WidthRaw::Fixed(w),
            Width::Bounded { min, max } => WidthRaw::Bounded { min, max },
            Width::Fill => WidthRaw::StringVariant("fill".to_string()),
            Width::Fraction(n) => WidthRaw::StringVariant(format!("{}fr", n)),
        }
    }
}

impl TryFrom<WidthRaw> for Width {
    type Error = String;

    fn try_from(raw: WidthRaw) -> Result<Self, Self::Error> {
        match raw {
            WidthRaw::Fixed(w) => Ok(Width::Fixed(w)),
            WidthRaw::Bounded { min, max } => Ok(Width::Bounded { min, max }),
            WidthRaw::StringVariant(s) if s == "fill" => Ok(Width::Fill),
            WidthRaw::StringVariant(s) if s.ends_with("fr") => s
                .trim_end_matches("fr")
                .parse::<usize>()
                .map(Width::Fraction)
                .map_err(|_| format!("Invalid fraction: '{}'. Expected format like '2fr'.", s)),
            WidthRaw::StringVariant(s) => Err(format!(
                "Invalid width string: '{}'. Expected 'fill' or '<n>fr'.",
                s
            )),
        }
    }
}

impl Default for Width {
    fn default() -> Self {
        Width::Bounded {
            min: None,
            max: None,
        }
    }
}

impl Width {
    /// Create a bounded width with both min and max.
    pub fn bounded(min: usize, max: usize) -> Self {
        Width::Bounded {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Create a bounded width with only a maximum.
    pub fn max(max: usize) -> Self {
        Width::Bounded {
            min: None,
            max: Some(max),
        }
    }

    /// Lower bound the width resolver may shrink this column to.
    pub(crate) fn floor(&self) -> usize {
        match self {
            Width::Fixed(w) => *w,
            Width::Bounded { min, .. } => min.unwrap_or(1).max(1),
            Width::Fill | Width::Fraction(_) => 0,
        }
    }
}

/// Configuration for a single table column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
    /// Width strategy.
    pub width: Width,
    /// Horizontal placement.
    pub align: Align,
    /// Where over-long content is cut.
    pub truncate: TruncateAt,
    /// Marker shown where content was cut.
    pub ellipsis: String,
    /// Shown in place of an empty cell.
    pub null_repr: String,
    /// Header title.
    pub header: Option<String>,
}

impl Default for Column {
    fn default() -> Self {
        Column {
            width: Width::default(),
            align: Align::default(),
            truncate: TruncateAt::default(),
            ellipsis: "…".to_string(),
            null_repr: String::new(),
            header: None,
        }
    }
}

impl Column {
    /// A column sized by `width`, other settings at their defaults.
    pub fn new(width: Width) -> Self {
        Column {
            width,
            ..Default::default()
        }
    }

    /// Places text within the column.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Right-aligned.
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    /// Chooses which part of over-long text is cut.
    pub fn truncate(mut self, at: TruncateAt) -> Self {
        self.truncate = at;
        self
    }

    /// Set the truncation marker.
    pub fn ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    /// Set the representation of empty cells.
    pub fn null_repr(mut self, null_repr: impl Into<String>) -> Self {
        self.null_repr = null_repr.into();
        self
    }

    /// Set the header title.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}

/// Shorthand constructors for columns.
pub struct Col;

impl Col {
    /// Fixed-width column.
    pub fn fixed(width: usize) -> Column {
        Column::new(Width::Fixed(width))
    }

    /// Content-sized column with no bounds.
    pub fn auto() -> Column {
        Column::new(Width::default())
    }

    /// Content-sized column within bounds.
    pub fn bounded(min: usize, max: usize) -> Column {
        Column::new(Width::bounded(min, max))
    }

    /// Column taking the remaining space.
    pub fn fill() -> Column {
        Column::new(Width::Fill)
    }
}

/// Decorations for table rows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decorations {
    /// Written between adjacent cells.
    pub column_sep: String,
    /// Written before the first cell.
    pub row_prefix: String,
    /// Written after the last cell.
    pub row_suffix: String,
}

impl Decorations {
    /// Decorations with a separator and no row edges.
    pub fn with_separator(sep: impl Into<String>) -> Self {
        Decorations {
            column_sep: sep.into(),
            row_prefix: String::new(),
            row_suffix: String::new(),
        }
    }

    /// Set the row prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.row_prefix = prefix.into();
        self
    }

    /// Set the row suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.row_suffix = suffix.into();
        self
    }

    /// Total overhead: prefix, suffix and separators between n columns.
    pub fn overhead(&self, num_columns: usize) -> usize {
        use super::util::display_width;
        let sep_count = num_columns.saturating_sub(1);
        display_width(&self.row_prefix)
            + display_width(&self.row_suffix)
            + display_width(&self.column_sep) * sep_count
    }
}

/// Complete layout specification for a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    /// One entry per column, left to right.
    pub columns: Vec<Column>,
    /// Row decorations (separator, prefix, suffix).
    pub decorations: Decorations,
}

impl Default for TableSpec {
    fn default() -> Self {
        TableSpec {
            columns: Vec::new(),
            decorations: Decorations::with_separator("  "),
        }
    }
}

impl TableSpec {
    /// Create a new spec with the given columns and a two-space separator.
    pub fn new(columns: Vec<Column>) -> Self {
        TableSpec {
            columns,
            ..Default::default()
        }
    }

    /// Starts a builder with the default separator.
    pub fn builder() -> TableSpecBuilder {
        TableSpecBuilder::default()
    }

    /// Number of declared columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Header titles from the columns, empty where unset.
    pub fn extract_header(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|col| col.header.clone().unwrap_or_default())
            .collect()
    }
}

/// Builder for constructing [`TableSpec`] instances.
#[derive(Clone, Debug)]
pub struct TableSpecBuilder {
    spec: TableSpec,
}

impl Default for TableSpecBuilder {
    fn default() -> Self {
        TableSpecBuilder {
            spec: TableSpec::default(),
        }
    }
}

impl TableSpecBuilder {
    /// Add a column.
    pub fn column(mut self, column: Column) -> Self {
        self.spec.columns.push(column);
        self
    }

    /// Add several columns.
    pub fn columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.spec.columns.extend(columns);
        self
    }

    /// Overrides the default two-space separator.
    pub fn separator(mut self, sep: impl Into<String>) -> Self {
        self.spec.decorations.column_sep = sep.into();
        self
    }

    /// Build the spec.
    pub fn build(self) -> TableSpec {
        self.spec
    }
}
