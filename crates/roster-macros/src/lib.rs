//! Proc macros for Roster.
//!
//! # Available Macros
//!
//! - [`Resolvable`] - Generate key path resolution for typed records
//!
//! # Examples
//!
//! For working examples, see `roster-macros/tests/resolvable_derive.rs`.

mod resolvable;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Resolvable` trait for record structs.
///
/// This macro generates an implementation of the `Resolvable` trait from
/// `roster-seeker`, so a data view can reach typed fields by key path
/// without going through JSON.
///
/// Every named field takes part unless it is skipped. Field types must
/// implement `Resolvable` themselves, which is how nested paths such as
/// `"department.name"` reach into child structs.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `skip` | Exclude this field from resolution |
/// | `rename = "..."` | Use a custom key for this field |
///
/// # Generated Code
///
/// 1. Key constants (e.g., `Student::FIRST_NAME`, `Student::YEAR`)
/// 2. Implementation of `Resolvable::resolve_segments()`
///
/// The record itself (an empty path) resolves to its field values joined
/// with a space, in declaration order.
///
/// # Example
///
/// ```ignore
/// use roster_macros::Resolvable;
/// use roster_seeker::{Query, Resolvable};
///
/// #[derive(Resolvable)]
/// struct Department {
///     name: String,
/// }
///
/// #[derive(Resolvable)]
/// struct Student {
///     first_name: String,
///     #[view(rename = "year")]
///     study_year: u8,
///     department: Department,
///     #[view(skip)]
///     password_hash: String,
/// }
///
/// let students = vec![
///     Student {
///         first_name: "Ada".into(),
///         study_year: 2,
///         department: Department { name: "Physics".into() },
///         password_hash: "x".into(),
///     },
/// ];
///
/// let query = Query::new()
///     .filter("department.name", "phys")
///     .build();
///
/// let results = query.apply_resolvable(&students);
/// assert_eq!(results.len(), 1);
/// ```
#[proc_macro_derive(Resolvable, attributes(view))]
pub fn resolvable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    resolvable::resolvable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
