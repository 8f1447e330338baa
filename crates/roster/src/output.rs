//! Text and JSON output for a rendered frame.
//!
//! [`render_output`] lays out a [`ViewModel`] for a terminal or a pipe:
//!
//! ```text
//! Search: ali  Role: Admin          <- only when something narrows the view
//!
//! Name   Role
//! Alice  ADMIN
//!
//! Page 1 of 1  (1-1 of 1)           <- or the show-more link
//! ```
//!
//! Panels replace the table for empty and failed phases. While loading, the
//! table holds skeleton bars and is followed by a loading line.

use std::fmt;
use std::str::FromStr;

use roster_render::tabular::{BorderStyle, Table, TableSpec};
use roster_render::template::{FILTER_SUMMARY, FOOTER, PANEL, SHOW_MORE};
use roster_render::{Skeleton, Styles, Templates};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::Error;
use crate::model::{PaginationModel, Panel, PanelKind, ShowMore, ViewModel};
use crate::phase::ViewPhase;

/// How a frame is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Styled text for an interactive terminal.
    Term,
    /// Plain text.
    #[default]
    Text,
    /// The serialized view model.
    Json,
}

impl OutputMode {
    pub const ALL: [OutputMode; 3] = [OutputMode::Term, OutputMode::Text, OutputMode::Json];

    pub fn name(self) -> &'static str {
        match self {
            OutputMode::Term => "term",
            OutputMode::Text => "text",
            OutputMode::Json => "json",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown output mode '{}'. Expected one of: term, text, json",
                    s
                )
            })
    }
}

/// Layout options for text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    /// Total width available to the table.
    pub width: usize,
    pub border: BorderStyle,
}

impl Default for TextOptions {
    fn default() -> Self {
        TextOptions {
            width: 80,
            border: BorderStyle::None,
        }
    }
}

/// Writes `model` in `mode`.
pub fn render_output<T>(
    model: &ViewModel<'_, T>,
    mode: OutputMode,
    options: &TextOptions,
) -> Result<String, Error> {
    match mode {
        OutputMode::Json => Ok(serde_json::to_string_pretty(model)?),
        OutputMode::Term => TextRenderer::new(Styles::term(), options).render(model),
        OutputMode::Text => TextRenderer::new(Styles::plain(), options).render(model),
    }
}

struct TextRenderer<'o> {
    styles: Styles,
    templates: Templates,
    options: &'o TextOptions,
}

impl<'o> TextRenderer<'o> {
    fn new(styles: Styles, options: &'o TextOptions) -> Self {
        TextRenderer {
            styles,
            templates: Templates::new(),
            options,
        }
    }

    fn render<T>(&self, model: &ViewModel<'_, T>) -> Result<String, Error> {
        let mut sections = Vec::new();

        if let Some(summary) = self.filter_summary(model)? {
            sections.push(summary);
        }

        match model.phase {
            ViewPhase::Loading => {
                if let Some(skeleton) = &model.skeleton {
                    let cells: Vec<Vec<String>> = Skeleton::new(skeleton.rows, skeleton.columns)
                        .cells()
                        .into_iter()
                        .map(|row| {
                            row.iter()
                                .map(|bar| Styles::paint(&self.styles.skeleton, bar))
                                .collect()
                        })
                        .collect();
                    if let Some(table) = self.table(model, &cells) {
                        sections.push(table);
                    }
                }
                let loading = model.locale.strings().loading;
                sections.push(Styles::paint(&self.styles.muted, loading));
            }
            ViewPhase::Populated => {
                if let Some(table) = self.table(model, &model.cell_grid()) {
                    sections.push(table);
                }
                if let Some(pagination) = &model.pagination {
                    sections.push(self.footer(pagination)?);
                } else if let Some(show_more) = &model.show_more {
                    sections.push(self.show_more(show_more)?);
                }
            }
            ViewPhase::EmptySource | ViewPhase::EmptyAfterFilter | ViewPhase::Failed => {
                if let Some(panel) = &model.panel {
                    sections.push(self.panel(panel)?);
                }
            }
        }

        Ok(sections.join("\n\n"))
    }

    fn table<T>(&self, model: &ViewModel<'_, T>, rows: &[Vec<String>]) -> Option<String> {
        if model.header.is_empty() {
            return None;
        }
        let spec = TableSpec::new(model.header.iter().map(|h| h.layout.clone()).collect());
        let table = Table::new(spec, self.options.width)
            .border(self.options.border)
            .header_from_columns()
            .header_style(self.styles.header.clone());
        Some(table.render(rows))
    }

    fn filter_summary<T>(&self, model: &ViewModel<'_, T>) -> Result<Option<String>, Error> {
        let mut items = Vec::new();
        if !model.search.term.is_empty() {
            items.push(json!({
                "label": model.locale.strings().search_label,
                "value": model.search.term,
            }));
        }
        items.extend(
            model
                .filters
                .iter()
                .filter(|control| control.is_active())
                .map(|control| {
                    json!({
                        "label": control.label,
                        "value": control.selected_label(),
                    })
                }),
        );
        if items.is_empty() {
            return Ok(None);
        }
        let line = self
            .templates
            .render(FILTER_SUMMARY, json!({ "items": items }))?;
        Ok(Some(Styles::paint(&self.styles.muted, &line)))
    }

    fn panel(&self, panel: &Panel) -> Result<String, Error> {
        let title_style = match panel.kind {
            PanelKind::Failed => &self.styles.error,
            PanelKind::NoData | PanelKind::NoResults => &self.styles.title,
        };
        Ok(self.templates.render(
            PANEL,
            json!({
                "icon": panel.icon,
                "title": Styles::paint(title_style, &panel.title),
                "body": panel.body,
                "detail": panel.detail,
            }),
        )?)
    }

    fn footer(&self, pagination: &PaginationModel) -> Result<String, Error> {
        let footer = self.templates.render(
            FOOTER,
            json!({
                "label": pagination.label,
                "previous": Styles::paint(&self.styles.control, &pagination.previous_label),
                "next": Styles::paint(&self.styles.control, &pagination.next_label),
                "has_previous": pagination.has_previous,
                "has_next": pagination.has_next,
            }),
        )?;
        Ok(match &pagination.range_label {
            Some(range) => format!(
                "{}  {}",
                footer,
                Styles::paint(&self.styles.muted, &format!("({})", range))
            ),
            None => footer,
        })
    }

    fn show_more(&self, show_more: &ShowMore) -> Result<String, Error> {
        Ok(self.templates.render(
            SHOW_MORE,
            json!({
                "label": Styles::paint(&self.styles.control, &show_more.label),
                "target": show_more.target,
            }),
        )?)
    }
}
