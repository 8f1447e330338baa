//! Table decorator for borders, headers and separators.
//!
//! # Example
//!
//! ```rust
//! use roster_render::tabular::{BorderStyle, Col, Table, TableSpec};
//!
//! let spec = TableSpec::new(vec![Col::auto(), Col::auto()]);
//! let table = Table::new(spec, 80).header(["Name", "Role"]);
//!
//! let rows = vec![vec!["Alice", "ADMIN"], vec!["Bob", "STUDENT"]];
//! assert_eq!(
//!     table.render(&rows),
//!     "Name   Role\nAlice  ADMIN\nBob    STUDENT"
//! );
//!
//! let boxed = table.border(BorderStyle::Ascii);
//! assert!(boxed.render(&rows).starts_with("+-------+---------+"));
//! ```

use std::fmt;
use std::str::FromStr;

use console::Style;
use serde::{Deserialize, Serialize};

use super::resolve::ResolvedWidths;
use super::types::{Align, Column, Decorations, TableSpec, TruncateAt};
use super::util::{pad_center, pad_left, pad_right, truncate_end, truncate_middle, truncate_start};

/// Border style for table decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// No borders; rows are trimmed at the end.
    #[default]
    None,
    /// ASCII borders: +, -, |
    Ascii,
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    Light,
    /// Heavy Unicode box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    Heavy,
    /// Double-line Unicode box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    Double,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
}

impl BorderStyle {
    /// All styles, in declaration order.
    pub const ALL: [BorderStyle; 6] = [
        BorderStyle::None,
        BorderStyle::Ascii,
        BorderStyle::Light,
        BorderStyle::Heavy,
        BorderStyle::Double,
        BorderStyle::Rounded,
    ];

    /// Lowercase name, as written in configuration.
    pub fn name(self) -> &'static str {
        match self {
            BorderStyle::None => "none",
            BorderStyle::Ascii => "ascii",
            BorderStyle::Light => "light",
            BorderStyle::Heavy => "heavy",
            BorderStyle::Double => "double",
            BorderStyle::Rounded => "rounded",
        }
    }

    fn chars(self) -> Option<BorderChars> {
        let chars = match self {
            BorderStyle::None => return None,
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
            BorderStyle::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                left_t: '┣',
                cross: '╋',
                right_t: '┫',
                top_t: '┳',
                bottom_t: '┻',
            },
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                left_t: '╠',
                cross: '╬',
                right_t: '╣',
                top_t: '╦',
                bottom_t: '╩',
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
        };
        Some(chars)
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BorderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BorderStyle::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown border style '{}'. Expected one of: none, ascii, light, heavy, double, rounded",
                    s
                )
            })
    }
}

/// Box-drawing characters for a border style.
#[derive(Clone, Copy, Debug)]
struct BorderChars {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    left_t: char,
    cross: char,
    right_t: char,
    top_t: char,
    bottom_t: char,
}

/// Type of horizontal line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineType {
    Top,
    Middle,
    Bottom,
}

/// A decorated table with borders, headers and separators.
///
/// Widths are resolved from the header and the rows passed to
/// [`render`](Table::render), so every cell lines up.
#[derive(Clone, Debug)]
pub struct Table {
    spec: TableSpec,
    total_width: usize,
    headers: Option<Vec<String>>,
    border: BorderStyle,
    header_style: Option<Style>,
}

impl Table {
    /// Create a new table with the given spec and total width.
    pub fn new(spec: TableSpec, total_width: usize) -> Self {
        Table {
            spec,
            total_width,
            headers: None,
            border: BorderStyle::None,
            header_style: None,
        }
    }

    /// Set the border style.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Set the column headers.
    pub fn header<S: Into<String>, I: IntoIterator<Item = S>>(mut self, headers: I) -> Self {
        self.headers = Some(headers.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Set headers from the columns' `header` titles.
    pub fn header_from_columns(mut self) -> Self {
        self.headers = Some(self.spec.extract_header());
        self
    }

    /// Style applied to header cells after layout.
    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = Some(style);
        self
    }

    /// Get the border style.
    pub fn get_border(&self) -> BorderStyle {
        self.border
    }

    /// Get the number of columns.
    pub fn num_columns(&self) -> usize {
        self.spec.num_columns()
    }

    /// Decorations in effect: the spec's own, or the border's.
    fn decorations(&self) -> Decorations {
        match self.border.chars() {
            None => self.spec.decorations.clone(),
            Some(chars) => Decorations::with_separator(format!(" {} ", chars.vertical))
                .prefix(format!("{} ", chars.vertical))
                .suffix(format!(" {}", chars.vertical)),
        }
    }

    /// Resolve widths for the header plus `rows`.
    pub fn resolve_widths<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> ResolvedWidths {
        let spec = TableSpec {
            columns: self.spec.columns.clone(),
            decorations: self.decorations(),
        };
        let mut measured: Vec<Vec<&str>> = Vec::with_capacity(rows.len() + 1);
        if let Some(headers) = &self.headers {
            measured.push(headers.iter().map(String::as_str).collect());
        }
        measured.extend(
            rows.iter()
                .map(|row| row.iter().map(|cell| cell.as_ref()).collect::<Vec<&str>>()),
        );
        spec.resolve_widths_from_data(self.total_width, &measured)
    }

    /// Format a data row at the given widths.
    pub fn row<S: AsRef<str>>(&self, widths: &ResolvedWidths, values: &[S]) -> String {
        let deco = self.decorations();
        let cells: Vec<String> = self
            .spec
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let value = values.get(i).map(|v| v.as_ref()).unwrap_or("");
                format_cell(col, value, widths.get(i).unwrap_or(0))
            })
            .collect();
        let line = format!(
            "{}{}{}",
            deco.row_prefix,
            cells.join(deco.column_sep.as_str()),
            deco.row_suffix
        );
        if self.border == BorderStyle::None {
            line.trim_end().to_string()
        } else {
            line
        }
    }

    /// Format the header row, or an empty string without headers.
    pub fn header_row(&self, widths: &ResolvedWidths) -> String {
        let Some(headers) = &self.headers else {
            return String::new();
        };
        let line = self.row(widths, headers);
        match (&self.header_style, self.border.chars()) {
            (None, _) => line,
            (Some(style), None) => style.apply_to(line).to_string(),
            (Some(style), Some(chars)) => {
                // Style the content only, keeping the border unstyled.
                let edge = chars.vertical.len_utf8();
                let inner = &line[edge..line.len() - edge];
                format!(
                    "{}{}{}",
                    chars.vertical,
                    style.apply_to(inner),
                    chars.vertical
                )
            }
        }
    }

    /// Separator between header and rows.
    pub fn separator_row(&self, widths: &ResolvedWidths) -> String {
        self.horizontal_line(widths, LineType::Middle)
    }

    /// Top border row.
    pub fn top_border(&self, widths: &ResolvedWidths) -> String {
        self.horizontal_line(widths, LineType::Top)
    }

    /// Bottom border row.
    pub fn bottom_border(&self, widths: &ResolvedWidths) -> String {
        self.horizontal_line(widths, LineType::Bottom)
    }

    fn horizontal_line(&self, widths: &ResolvedWidths, line_type: LineType) -> String {
        let Some(chars) = self.border.chars() else {
            return String::new();
        };

        let (left, joint, right) = match line_type {
            LineType::Top => (chars.top_left, chars.top_t, chars.top_right),
            LineType::Middle => (chars.left_t, chars.cross, chars.right_t),
            LineType::Bottom => (chars.bottom_left, chars.bottom_t, chars.bottom_right),
        };

        // Each cell is padded by one space on both sides.
        let segments: Vec<String> = widths
            .widths
            .iter()
            .map(|w| std::iter::repeat_n(chars.horizontal, w + 2).collect())
            .collect();

        let joint = joint.to_string();
        format!("{}{}{}", left, segments.join(joint.as_str()), right)
    }

    /// Render the complete table: borders, header, separator and rows.
    pub fn render<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> String {
        let widths = self.resolve_widths(rows);
        let mut output = Vec::with_capacity(rows.len() + 4);

        let top = self.top_border(&widths);
        if !top.is_empty() {
            output.push(top);
        }

        let header = self.header_row(&widths);
        if self.headers.is_some() {
            output.push(header);
            let sep = self.separator_row(&widths);
            if !sep.is_empty() {
                output.push(sep);
            }
        }

        for row in rows {
            output.push(self.row(&widths, row));
        }

        let bottom = self.bottom_border(&widths);
        if !bottom.is_empty() {
            output.push(bottom);
        }

        output.join("\n")
    }
}

/// Truncate and pad one cell to exactly `width` columns.
fn format_cell(col: &Column, value: &str, width: usize) -> String {
    let value = if value.is_empty() {
        col.null_repr.as_str()
    } else {
        value
    };
    let cut = match col.truncate {
        TruncateAt::End => truncate_end(value, width, &col.ellipsis),
        TruncateAt::Start => truncate_start(value, width, &col.ellipsis),
        TruncateAt::Middle => truncate_middle(value, width, &col.ellipsis),
    };
    match col.align {
        Align::Left => pad_right(&cut, width),
        Align::Right => pad_left(&cut, width),
        Align::Center => pad_center(&cut, width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabular::Col;

    fn two_columns() -> TableSpec {
        TableSpec::new(vec![Col::auto(), Col::auto()])
    }

    fn people() -> Vec<Vec<&'static str>> {
        vec![vec!["Alice", "ADMIN"], vec!["Bob", "STUDENT"]]
    }

    #[test]
    fn plain_table_is_trimmed() {
        let table = Table::new(two_columns(), 80).header(["Name", "Role"]);
        assert_eq!(
            table.render(&people()),
            "Name   Role\nAlice  ADMIN\nBob    STUDENT"
        );
    }

    #[test]
    fn no_header_no_separator() {
        let table = Table::new(two_columns(), 80);
        assert_eq!(table.render(&people()), "Alice  ADMIN\nBob    STUDENT");
    }

    #[test]
    fn light_border_has_joints() {
        let table = Table::new(two_columns(), 80)
            .header(["Name", "Role"])
            .border(BorderStyle::Light);
        let out = table.render(&people());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "┌───────┬─────────┐");
        assert_eq!(lines[1], "│ Name  │ Role    │");
        assert_eq!(lines[2], "├───────┼─────────┤");
        assert_eq!(lines[3], "│ Alice │ ADMIN   │");
        assert_eq!(lines[5], "└───────┴─────────┘");
    }

    #[test]
    fn right_alignment() {
        let spec = TableSpec::new(vec![Col::auto(), Col::auto().right()]);
        let table = Table::new(spec, 80);
        let rows = vec![vec!["a", "1"], vec!["b", "100"]];
        assert_eq!(table.render(&rows), "a    1\nb  100");
    }

    #[test]
    fn long_cells_truncate_to_width() {
        let spec = TableSpec::new(vec![Col::bounded(1, 6), Col::auto()]);
        let table = Table::new(spec, 80);
        let rows = vec![vec!["Bartholomew", "x"]];
        assert_eq!(table.render(&rows), "Barth…  x");
    }

    #[test]
    fn missing_cells_use_null_repr() {
        let spec = TableSpec::new(vec![Col::auto(), Col::auto().null_repr("-")]);
        let table = Table::new(spec, 80);
        let rows = vec![vec!["a"], vec!["b", ""]];
        assert_eq!(table.render(&rows), "a  -\nb  -");
    }

    #[test]
    fn border_style_parses() {
        assert_eq!("Rounded".parse::<BorderStyle>(), Ok(BorderStyle::Rounded));
        assert!("dotted".parse::<BorderStyle>().is_err());
        assert_eq!(BorderStyle::Heavy.to_string(), "heavy");
    }

    #[test]
    fn header_from_columns() {
        let spec = TableSpec::new(vec![Col::auto().header("ID"), Col::auto().header("Title")]);
        let table = Table::new(spec, 80).header_from_columns();
        let rows = vec![vec!["1", "Intro"]];
        assert_eq!(table.render(&rows), "ID  Title\n1   Intro");
    }
}
