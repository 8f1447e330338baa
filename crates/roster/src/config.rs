//! View configuration files.
//!
//! A [`ViewConfig`] declares a view over loosely typed records in YAML or
//! JSON, so a listing can be described without writing Rust:
//!
//! ```yaml
//! columns:
//!   - key: name
//!     label: Name
//!   - key: dept.name
//!     label: Department
//!     width: { max: 20 }
//! filters:
//!   - key: role
//!     values:
//!       - { label: Admin, value: ADMIN }
//!       - { label: Student, value: STUDENT }
//! page_size: 10
//! locale: fr
//! border: rounded
//! ```

use std::path::Path;

use roster_render::tabular::{Align, BorderStyle, TruncateAt, Width};
use roster_seeker::{KeyPath, PageSize};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::column::ColumnSpec;
use crate::error::ConfigError;
use crate::filter::FilterOption;
use crate::locale::Locale;
use crate::output::TextOptions;
use crate::view::DataView;

/// One configured column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Key path of the displayed field.
    pub key: KeyPath,
    /// Header label; the key is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Width>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncate: Option<TruncateAt>,
}

impl ColumnConfig {
    /// Header label of this column.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(self.key.as_str())
    }
}

/// A data view declared in a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub columns: Vec<ColumnConfig>,
    pub filters: Vec<FilterOption>,
    /// Keys searched by the free-text term; every column key when empty.
    pub search_keys: Vec<KeyPath>,
    /// Records per page; unpaginated when absent.
    pub page_size: Option<usize>,
    pub locale: Locale,
    /// Table border for text output.
    pub border: BorderStyle,
    pub skeleton_rows: Option<usize>,
    pub skeleton_header: bool,
    /// Show-more link target for unpaginated views.
    pub show_more: Option<String>,
}

impl ViewConfig {
    /// Parses and validates a YAML configuration.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: ViewConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ViewConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file, choosing the format by extension.
    ///
    /// `.yaml` and `.yml` are read as YAML, `.json` as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str,
            "json" => Self::from_json_str,
            _ => return Err(ConfigError::UnsupportedFormat(extension)),
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading view config from {}", path.display());
        parse(&content)
    }

    /// Checks values serde cannot: page size and column keys.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.page_size()?;
        if let Some(index) = self.columns.iter().position(|c| c.key.as_str().is_empty()) {
            return Err(ConfigError::EmptyColumnKey { index });
        }
        Ok(())
    }

    /// The configured page size, if any.
    pub fn page_size(&self) -> Result<Option<PageSize>, ConfigError> {
        Ok(self.page_size.map(PageSize::new).transpose()?)
    }

    /// Text output options carried by this configuration.
    pub fn text_options(&self, width: usize) -> TextOptions {
        TextOptions {
            width,
            border: self.border,
        }
    }
}

impl DataView<Value> {
    /// Builds a view over JSON records from `config`.
    ///
    /// Every key is resolved dynamically against the records.
    ///
    /// ```
    /// use roster::{DataView, ViewConfig, ViewState};
    /// use serde_json::json;
    ///
    /// let config = ViewConfig::from_yaml_str("
    /// columns:
    ///   - key: name
    ///     label: Name
    ///   - key: dept.name
    ///     label: Department
    /// page_size: 1
    /// ").unwrap();
    ///
    /// let view = DataView::from_config(&config).unwrap();
    /// let data = vec![
    ///     json!({"name": "Ada", "dept": {"name": "Mathematics"}}),
    ///     json!({"name": "Grace", "dept": {"name": "Navy"}}),
    /// ];
    /// let model = view.render(&data, &ViewState::new());
    /// assert_eq!(model.cell_grid(), vec![vec!["Ada", "Mathematics"]]);
    /// assert_eq!(model.pagination.unwrap().total_pages, 2);
    /// ```
    pub fn from_config(config: &ViewConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let columns = config.columns.iter().map(|c| {
            let mut column = ColumnSpec::new(c.key.clone(), c.label());
            if let Some(width) = &c.width {
                column = column.width(width.clone());
            }
            if let Some(align) = c.align {
                column = column.align(align);
            }
            if let Some(truncate) = c.truncate {
                column = column.truncate(truncate);
            }
            column
        });

        let mut view = DataView::new()
            .columns(columns)
            .filters(config.filters.iter().cloned())
            .search_keys(config.search_keys.iter().cloned())
            .page_size(config.page_size()?)
            .locale(config.locale)
            .skeleton_header(config.skeleton_header)
            .resolve_paths();

        if let Some(rows) = config.skeleton_rows {
            view = view.skeleton_rows(rows);
        }
        if let Some(target) = &config.show_more {
            view = view.show_more(target.clone());
        }
        Ok(view)
    }
}
