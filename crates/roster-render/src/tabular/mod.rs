//! Unicode-aware table layout for terminal output.
//!
//! Handles wide characters (CJK counts as 2 columns) and ignores ANSI escape
//! codes when measuring, so styled cells line up.
//!
//! ```rust
//! use roster_render::tabular::{Col, Table, TableSpec};
//!
//! let spec = TableSpec::builder()
//!     .column(Col::auto())
//!     .column(Col::auto().right())
//!     .separator("  ")
//!     .build();
//!
//! let table = Table::new(spec, 80).header(["Course", "Credits"]);
//! let out = table.render(&[vec!["Algebra", "6"], vec!["Optics", "12"]]);
//! assert_eq!(out, "Course   Credits\nAlgebra        6\nOptics        12");
//! ```
//!
//! # Column Width Strategies
//!
//! - [`Width::Fixed(n)`] - Exactly n display columns
//! - [`Width::Bounded { min, max }`] - Sized from content within bounds
//! - [`Width::Fill`] - Expand to fill remaining space
//! - [`Width::Fraction(n)`] - n shares of the remaining space
//!
//! # Truncation Modes
//!
//! - [`TruncateAt::End`] - Keep start: "Hello W…"
//! - [`TruncateAt::Start`] - Keep end: "…o World"
//! - [`TruncateAt::Middle`] - Keep both: "Hell…rld"

mod decorator;
mod resolve;
mod types;
mod util;

pub use decorator::{BorderStyle, Table};
pub use resolve::ResolvedWidths;
pub use types::{Align, Col, Column, Decorations, TableSpec, TableSpecBuilder, TruncateAt, Width};
pub use util::{
    display_width, pad_center, pad_left, pad_right, truncate_end, truncate_middle, truncate_start,
};
