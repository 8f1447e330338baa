//! Terminal styles for the parts of a data view.

use console::Style;

/// The styles a view is painted with.
///
/// [`Styles::plain`] paints nothing; [`Styles::term`] uses bold headers and
/// dims placeholders. Whether escape codes are emitted at all still follows
/// `console`'s color detection.
#[derive(Clone, Debug, PartialEq)]
pub struct Styles {
    /// Table header labels.
    pub header: Style,
    /// Skeleton bars while loading.
    pub skeleton: Style,
    /// Secondary text: footers, the filter summary.
    pub muted: Style,
    /// Panel titles for empty results.
    pub title: Style,
    /// Panel titles for load failures.
    pub error: Style,
    /// Navigation controls and links.
    pub control: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Styles::plain()
    }
}

impl Styles {
    /// No styling.
    pub fn plain() -> Self {
        Styles {
            header: Style::new(),
            skeleton: Style::new(),
            muted: Style::new(),
            title: Style::new(),
            error: Style::new(),
            control: Style::new(),
        }
    }

    /// Styling for an interactive terminal.
    pub fn term() -> Self {
        Styles {
            header: Style::new().bold(),
            skeleton: Style::new().dim(),
            muted: Style::new().dim(),
            title: Style::new().bold(),
            error: Style::new().red().bold(),
            control: Style::new().cyan(),
        }
    }

    /// Paints `text` with `style`.
    pub fn paint(style: &Style, text: &str) -> String {
        style.apply_to(text).to_string()
    }
}
