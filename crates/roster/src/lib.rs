//! # Roster - client-side data views
//!
//! Roster turns an in-memory collection of records into a searchable,
//! filterable, paginated table. The host owns the records and a
//! [`ViewState`]; every call to [`DataView::render`] runs search, column
//! filters and pagination over them and returns a [`ViewModel`] describing
//! exactly one frame.
//!
//! ## Quick Start
//!
//! ```rust
//! use roster::{render_output, ColumnSpec, DataView, FilterOption, OutputMode, PageSize,
//!     TextOptions, ViewState};
//! use serde_json::{json, Value};
//!
//! let users = vec![
//!     json!({"name": "Alice", "role": "ADMIN"}),
//!     json!({"name": "Bob", "role": "STUDENT"}),
//!     json!({"name": "Carla", "role": "STUDENT"}),
//! ];
//!
//! let view = DataView::<Value>::new()
//!     .column(ColumnSpec::new("name", "Name"))
//!     .column(ColumnSpec::new("role", "Role"))
//!     .filter(FilterOption::new("role").value("Student", "STUDENT"))
//!     .paginate(PageSize::new(10).unwrap())
//!     .resolve_paths();
//!
//! let state = ViewState::new().with_filter("role", "STUDENT");
//! let model = view.render(&users, &state);
//! assert_eq!(model.matched_items, 2);
//!
//! let text = render_output(&model, OutputMode::Text, &TextOptions::default()).unwrap();
//! assert!(text.contains("Carla  STUDENT"));
//! ```
//!
//! ## Phases
//!
//! Each frame is in exactly one [`ViewPhase`], derived from the inputs in
//! this order: `Loading`, `Failed`, `EmptySource` (no records at all),
//! `EmptyAfterFilter` (records exist but none on this page), `Populated`.
//! The two empty phases show different panels, so "nothing here yet" never
//! reads like "your search found nothing".
//!
//! ## Field Access
//!
//! A field is reached by key path (`dept.name`, `guardians.name`). For each
//! key the first available source wins:
//!
//! 1. a column with that key and an explicit [`ColumnSpec::get`] accessor
//! 2. an accessor registered with [`DataView::field`]
//! 3. dynamic resolution, after [`DataView::resolve_paths`] on a
//!    [`Resolvable`] record type
//! 4. the empty string
//!
//! Typed records get dynamic resolution from `#[derive(Resolvable)]`, which
//! expands to paths in `roster_seeker`; depend on it alongside `roster`.
//!
//! ## Outputs
//!
//! [`render_output`] writes a frame as styled terminal text, plain text or
//! JSON. Views can also be declared in YAML or JSON through [`ViewConfig`].

mod column;
mod config;
mod error;
mod filter;
mod locale;
mod model;
mod output;
mod phase;
mod state;
mod view;

pub use column::{Accessor, CellRenderer, ColumnSpec};
pub use config::{ColumnConfig, ViewConfig};
pub use error::{ConfigError, Error};
pub use filter::{FilterChoice, FilterControl, FilterOption, FilterValue};
pub use locale::{Locale, Strings};
pub use model::{
    HeaderCell, PaginationModel, Panel, PanelKind, RowModel, SearchModel, ShowMore,
    SkeletonModel, ViewModel, ERROR_ICON, NO_DATA_ICON, NO_RESULTS_ICON,
};
pub use output::{render_output, OutputMode, TextOptions};
pub use phase::ViewPhase;
pub use state::ViewState;
pub use view::{DataView, DEFAULT_SKELETON_ROWS};

pub use roster_render::tabular::{Align, BorderStyle, TruncateAt, Width};
pub use roster_seeker::{KeyPath, PageSize, Query, Resolvable};

// Derive macro, in the macro namespace next to the trait.
pub use roster_macros::Resolvable;
