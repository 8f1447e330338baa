//! Roster Seeker - search, filter and paginate in-memory record collections.
//!
//! Seeker is the query layer under the `roster` data views. It knows nothing
//! about the records it works on: fields are reached through key paths, and
//! every field resolves to a single comparable string.
//!
//! - [`resolve`] / [`Resolvable`]: key path resolution over JSON or typed records
//! - [`Resolved`]: the tagged shape of a resolved field and its text form
//! - [`Query`]: free-text search over several keys plus column-scoped filters
//! - [`paginate`]: fixed-size pages, or a single page in show-more mode
//!
//! # Quick Start
//!
//! ```rust
//! use roster_seeker::{paginate, KeyPath, PageSize, Query, Resolvable};
//! use serde_json::{json, Value};
//!
//! let users = vec![
//!     json!({"name": "Alice", "role": "ADMIN"}),
//!     json!({"name": "Bob", "role": "STUDENT"}),
//!     json!({"name": "Malik", "role": "STUDENT"}),
//! ];
//!
//! let query = Query::new()
//!     .search("li")
//!     .search_in(["name", "role"])
//!     .build();
//!
//! let filtered: Vec<&Value> = query.apply(&users, Value::accessor);
//! assert_eq!(filtered.len(), 2);
//!
//! let page = paginate(&filtered, 1, Some(PageSize::new(1).unwrap()));
//! assert_eq!(page.total_pages, 2);
//! assert_eq!(page.items[0].resolve(&KeyPath::new("name")), "Alice");
//! ```
//!
//! # Resolution Rules
//!
//! | Leaf value | Text |
//! |------------|------|
//! | missing / null | `""` |
//! | primitive | its string form |
//! | array of primitives | elements joined with `", "` |
//! | array with objects | each element's values joined with `" "`, elements with `" \| "` |
//! | object | its values joined with `" "` |
//!
//! # Query Semantics
//!
//! ```text
//! match = (term is empty  ∨  some search key contains term)
//!       ∧ (every non-empty filter's key contains its value)
//! ```
//!
//! Comparisons are case-insensitive substring matches and never reorder.

mod clause;
mod error;
mod page;
mod path;
mod query;
mod traits;
mod value;

// Re-export public API
pub use clause::Clause;
pub use error::{Result, SeekerError};
pub use page::{pages, paginate, total_pages, Page, PageSize};
pub use path::{lookup, lookup_segments, resolve, resolve_value, KeyPath, SEGMENT_SEP};
pub use query::Query;
pub use traits::Resolvable;
pub use value::{classify, Resolved, OBJECT_LIST_SEP, OBJECT_VALUE_SEP, PRIMITIVE_LIST_SEP};
