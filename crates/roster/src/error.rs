//! Error types for configuration and output.
//!
//! Rendering a [`ViewModel`](crate::ViewModel) never fails. Errors only come
//! from reading view configuration and from producing text or JSON.

use std::path::PathBuf;

use roster_render::RenderError;
use roster_seeker::SeekerError;
use thiserror::Error;

/// Errors raised while loading a [`ViewConfig`](crate::ViewConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read view config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML syntax or shape error.
    #[error("invalid YAML view config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON syntax or shape error.
    #[error("invalid JSON view config: {0}")]
    Json(#[from] serde_json::Error),

    /// `page_size` is zero.
    #[error("invalid page size: {0}")]
    PageSize(#[from] SeekerError),

    /// A column was declared without a key.
    #[error("column {index} has an empty key")]
    EmptyColumnKey { index: usize },

    /// The file extension names no known format.
    #[error("unsupported config format '{0}' (expected yaml, yml or json)")]
    UnsupportedFormat(String),
}

/// Errors raised while producing output.
#[derive(Debug, Error)]
pub enum Error {
    /// The view configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A template failed to render.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// The view model could not be serialized.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
