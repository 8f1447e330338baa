//! Text rendering backend for Roster data views.
//!
//! This crate turns already-resolved cell strings into terminal text. It does
//! not know about records, key paths or view state; the `roster` crate
//! resolves everything first and hands over plain strings.
//!
//! - [`tabular`]: width resolution, truncation and bordered tables
//! - [`Skeleton`]: placeholder bars shown while loading
//! - [`template`]: MiniJinja templates for panels, footers and links
//! - [`Styles`]: `console` styles for each part of a view
//!
//! # Example
//!
//! ```rust
//! use roster_render::tabular::{BorderStyle, Col, Table, TableSpec};
//!
//! let spec = TableSpec::new(vec![Col::auto(), Col::auto()]);
//! let table = Table::new(spec, 40)
//!     .header(["Name", "Role"])
//!     .border(BorderStyle::Rounded);
//!
//! let out = table.render(&[vec!["Alice", "ADMIN"]]);
//! assert!(out.starts_with('╭'));
//! ```

mod error;
mod skeleton;
mod style;
pub mod tabular;
pub mod template;

pub use error::RenderError;
pub use skeleton::{skeleton_cell, Skeleton, SKELETON_GLYPH};
pub use style::Styles;
pub use template::Templates;
