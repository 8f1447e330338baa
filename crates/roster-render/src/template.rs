//! Templates for the text around a table.
//!
//! Panels (empty, no results, failed), the pagination footer, the show-more
//! link and the filter summary are small MiniJinja templates. Built-in
//! sources are served by a loader; [`Templates::add_template`] overrides
//! any of them by name.
//!
//! Templates receive plain strings. Callers localize and paint them before
//! rendering, so the templates stay free of language and styling.

use minijinja::Environment;
use serde::Serialize;

use crate::error::RenderError;

/// Icon, title, optional body and optional detail line.
pub const PANEL: &str = "panel";

/// Previous/next controls around the "page p of n" label.
pub const FOOTER: &str = "footer";

/// Link to a fuller listing.
pub const SHOW_MORE: &str = "show_more";

/// Current search term and filter selections.
pub const FILTER_SUMMARY: &str = "filter_summary";

const PANEL_SOURCE: &str = "{{ icon }} {{ title }}\
{% if body %}\n{{ body }}{% endif %}\
{% if detail %}\n{{ detail }}{% endif %}";

const FOOTER_SOURCE: &str = "{% if has_previous %}< {{ previous }}  {% endif %}\
{{ label }}\
{% if has_next %}  {{ next }} >{% endif %}";

const SHOW_MORE_SOURCE: &str = "{{ label }}{% if target %} → {{ target }}{% endif %}";

const FILTER_SUMMARY_SOURCE: &str = "{% for item in items %}\
{% if not loop.first %}  {% endif %}{{ item.label }}: {{ item.value }}\
{% endfor %}";

/// Source of a built-in template.
pub fn builtin_source(name: &str) -> Option<&'static str> {
    match name {
        PANEL => Some(PANEL_SOURCE),
        FOOTER => Some(FOOTER_SOURCE),
        SHOW_MORE => Some(SHOW_MORE_SOURCE),
        FILTER_SUMMARY => Some(FILTER_SUMMARY_SOURCE),
        _ => None,
    }
}

/// Template environment with the built-in templates.
///
/// # Example
///
/// ```
/// use roster_render::template::{Templates, FOOTER};
/// use serde_json::json;
///
/// let templates = Templates::new();
/// let out = templates
///     .render(FOOTER, json!({
///         "label": "Page 2 of 3",
///         "previous": "Previous",
///         "next": "Next",
///         "has_previous": true,
///         "has_next": true,
///     }))
///     .unwrap();
/// assert_eq!(out, "< Previous  Page 2 of 3  Next >");
/// ```
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Default for Templates {
    fn default() -> Self {
        Templates::new()
    }
}

impl Templates {
    /// Create an environment serving the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_loader(|name| Ok(builtin_source(name).map(str::to_string)));
        Templates { env }
    }

    /// Add or replace a template.
    pub fn add_template(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<(), RenderError> {
        let name = name.into();
        self.env
            .add_template_owned(name.clone(), source.into())
            .map_err(|err| RenderError::from_engine(&name, err))
    }

    /// Render the template `name` with `context`.
    pub fn render<S: Serialize>(&self, name: &str, context: S) -> Result<String, RenderError> {
        let template = self
            .env
            .get_template(name)
            .map_err(|err| RenderError::from_engine(name, err))?;
        template
            .render(context)
            .map_err(|err| RenderError::from_engine(name, err))
    }
}

/// Render a one-off template source, such as a localized label.
///
/// ```
/// use roster_render::template::render_str;
/// use serde_json::json;
///
/// let label = render_str("Page {{ page }} of {{ total }}", json!({"page": 2, "total": 3}));
/// assert_eq!(label.unwrap(), "Page 2 of 3");
/// ```
pub fn render_str<S: Serialize>(source: &str, context: S) -> Result<String, RenderError> {
    Environment::new()
        .render_str(source, context)
        .map_err(|err| RenderError::from_engine("<string>", err))
}
