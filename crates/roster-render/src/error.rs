//! Error type for template rendering.

use std::fmt;

use minijinja::ErrorKind;

/// A template could not produce text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No template is registered under this name.
    UnknownTemplate(String),

    /// A template failed to parse or evaluate.
    Template {
        /// Name of the failing template, when known.
        name: Option<String>,
        message: String,
    },

    /// The context could not be handed to the template.
    Context(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnknownTemplate(name) => write!(f, "unknown template '{}'", name),
            RenderError::Template {
                name: Some(name),
                message,
            } => write!(f, "template '{}': {}", name, message),
            RenderError::Template {
                name: None,
                message,
            } => write!(f, "template error: {}", message),
            RenderError::Context(msg) => write!(f, "bad template context: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl RenderError {
    /// Converts an engine error raised while working on template `name`.
    pub(crate) fn from_engine(name: &str, err: minijinja::Error) -> Self {
        match err.kind() {
            ErrorKind::TemplateNotFound => RenderError::UnknownTemplate(name.to_string()),
            ErrorKind::BadSerialization => RenderError::Context(err.to_string()),
            _ => RenderError::Template {
                name: Some(err.name().unwrap_or(name).to_string()),
                message: err.detail().unwrap_or_default().to_string(),
            },
        }
    }
}
