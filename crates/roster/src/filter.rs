//! Column-scoped discrete filters.
//!
//! A [`FilterOption`] declares the values a user can pick for one key path.
//! [`FilterControl`] is the selector built from it for one render: an "All"
//! entry followed by the declared values, with the current pick marked.

use roster_seeker::KeyPath;
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// One selectable value of a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterValue {
    /// Text shown to the user.
    pub label: String,
    /// Needle matched against the field, case-insensitively.
    pub value: String,
}

impl FilterValue {
    /// Creates a filter value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        FilterValue {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A declared filter over one key path.
///
/// ```
/// use roster::FilterOption;
///
/// let role = FilterOption::new("role")
///     .value("Admin", "ADMIN")
///     .value("Student", "STUDENT");
/// assert_eq!(role.values.len(), 2);
/// assert_eq!(role.label_for("ADMIN"), Some("Admin"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// The key path the filter narrows on.
    pub key: KeyPath,
    /// Heading for the selector; the column label is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Selectable values, in display order.
    #[serde(default)]
    pub values: Vec<FilterValue>,
}

impl FilterOption {
    /// Creates a filter over `key` with no values yet.
    pub fn new(key: impl Into<KeyPath>) -> Self {
        FilterOption {
            key: key.into(),
            label: None,
            values: Vec::new(),
        }
    }

    /// Sets the selector heading.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Appends a selectable value.
    pub fn value(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.push(FilterValue::new(label, value));
        self
    }

    /// Label of the declared value `value`, if declared.
    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.value == value)
            .map(|v| v.label.as_str())
    }
}

/// One entry of a rendered selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChoice {
    pub label: String,
    pub value: String,
    pub selected: bool,
}

/// A filter selector as shown for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterControl {
    /// The key path the filter narrows on.
    pub key: KeyPath,
    /// Selector heading.
    pub label: String,
    /// "All" first, then every declared value.
    pub choices: Vec<FilterChoice>,
    /// Currently selected value; `""` means "All".
    pub selected: String,
}

impl FilterControl {
    /// Builds the selector for `option` with `selected` picked.
    ///
    /// A selection that matches no declared value is still applied by the
    /// filter stage; no choice is marked for it.
    pub fn build(option: &FilterOption, heading: &str, selected: &str, locale: Locale) -> Self {
        let all = FilterChoice {
            label: locale.strings().all_option.to_string(),
            value: String::new(),
            selected: selected.is_empty(),
        };
        let declared = option.values.iter().map(|v| FilterChoice {
            label: v.label.clone(),
            value: v.value.clone(),
            selected: !selected.is_empty() && v.value == selected,
        });

        FilterControl {
            key: option.key.clone(),
            label: option.label.clone().unwrap_or_else(|| heading.to_string()),
            choices: std::iter::once(all).chain(declared).collect(),
            selected: selected.to_string(),
        }
    }

    /// Label of the current selection, falling back to the raw value.
    pub fn selected_label(&self) -> &str {
        self.choices
            .iter()
            .find(|c| c.selected)
            .map(|c| c.label.as_str())
            .unwrap_or(&self.selected)
    }

    /// Returns `true` if the selector restricts results.
    pub fn is_active(&self) -> bool {
        !self.selected.is_empty()
    }
}
