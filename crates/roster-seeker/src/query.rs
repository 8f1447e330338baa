//! Query builder and executor.
//!
//! The [`Query`] struct composes a free-text search over one or more key
//! paths with zero or more column-scoped filters into a single predicate.
//!
//! ```text
//! match = (term is empty  ∨  some search key contains term)
//!       ∧ (every active filter's key contains its value)
//! ```
//!
//! Both comparisons are case-insensitive substring matches. Execution never
//! reorders: the output is the input restricted to matching records.

use serde::Serialize;

use crate::clause::{contains_folded, Clause};
use crate::path::KeyPath;
use crate::traits::Resolvable;

/// A search-plus-filters query over a collection.
///
/// # Example
///
/// ```
/// use roster_seeker::{KeyPath, Query, Resolvable};
/// use serde_json::json;
///
/// let rows = vec![
///     json!({"name": "Alice", "role": "ADMIN"}),
///     json!({"name": "Bob", "role": "STUDENT"}),
///     json!({"name": "Alina", "role": "STUDENT"}),
/// ];
///
/// let query = Query::new()
///     .search("ali")
///     .search_in(["name"])
///     .filter("role", "student")
///     .build();
///
/// let results = query.apply(&rows, serde_json::Value::accessor);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0]["name"], "Alina");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Query {
    search_term: String,
    #[serde(skip)]
    folded_term: String,
    search_keys: Vec<KeyPath>,
    filters: Vec<Clause>,
}

impl Query {
    /// Creates a new empty query.
    ///
    /// An empty query matches all items.
    pub fn new() -> Self {
        Query::default()
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Sets the free-text search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self.folded_term = self.search_term.to_lowercase();
        self
    }

    /// Adds a key path searched by the free-text term.
    pub fn search_key(mut self, key: impl Into<KeyPath>) -> Self {
        self.search_keys.push(key.into());
        self
    }

    /// Adds several key paths searched by the free-text term.
    pub fn search_in<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<KeyPath>,
    {
        self.search_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Adds a filter clause.
    ///
    /// An empty `value` is kept for introspection but never restricts.
    pub fn filter(mut self, key: impl Into<KeyPath>, value: impl Into<String>) -> Self {
        self.filters.push(Clause::new(key, value));
        self
    }

    /// Adds filter clauses from `(key, value)` pairs.
    pub fn filters<I, K, V>(mut self, selections: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<KeyPath>,
        V: Into<String>,
    {
        self.filters
            .extend(selections.into_iter().map(|(k, v)| Clause::new(k, v)));
        self
    }

    /// Finalizes the query.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the search term as given.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns the key paths the search term is matched against.
    pub fn search_keys(&self) -> &[KeyPath] {
        &self.search_keys
    }

    /// Returns every filter clause, including inactive ones.
    pub fn filter_clauses(&self) -> &[Clause] {
        &self.filters
    }

    /// Iterates over the filter clauses that restrict results.
    pub fn active_filters(&self) -> impl Iterator<Item = &Clause> {
        self.filters.iter().filter(|c| c.is_active())
    }

    /// Returns `true` if this query matches everything.
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.active_filters().next().is_none()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests the search stage for a single item.
    ///
    /// With a non-empty term and no search keys nothing matches.
    pub fn matches_search<T, F>(&self, item: &T, accessor: F) -> bool
    where
        F: Fn(&T, &KeyPath) -> String,
    {
        if self.folded_term.is_empty() {
            return true;
        }
        self.search_keys
            .iter()
            .any(|key| contains_folded(&accessor(item, key), &self.folded_term))
    }

    /// Tests the filter stage for a single item.
    pub fn matches_filters<T, F>(&self, item: &T, accessor: F) -> bool
    where
        F: Fn(&T, &KeyPath) -> String,
    {
        self.active_filters()
            .all(|clause| clause.matches(&accessor(item, &clause.field)))
    }

    /// Tests if a single item matches this query.
    ///
    /// The accessor resolves a key path on the item to a string.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        F: Fn(&T, &KeyPath) -> String,
    {
        self.matches_search(item, &accessor) && self.matches_filters(item, &accessor)
    }

    /// Filters a slice, returning references to matching items in input order.
    pub fn apply<'a, T, F>(&self, items: &'a [T], accessor: F) -> Vec<&'a T>
    where
        F: Fn(&T, &KeyPath) -> String,
    {
        items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .collect()
    }

    /// Filters a slice of [`Resolvable`] records.
    pub fn apply_resolvable<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Resolvable,
    {
        self.apply(items, |item: &T, key: &KeyPath| item.resolve(key))
    }

    /// Filters and clones matching items.
    pub fn apply_cloned<T, F>(&self, items: &[T], accessor: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T, &KeyPath) -> String,
    {
        self.apply(items, accessor).into_iter().cloned().collect()
    }

    /// Returns the indexes of matching items in input order.
    pub fn positions<T, F>(&self, items: &[T], accessor: F) -> Vec<usize>
    where
        F: Fn(&T, &KeyPath) -> String,
    {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.matches(*item, &accessor))
            .map(|(i, _)| i)
            .collect()
    }

    /// Counts the number of matching items.
    pub fn count<T, F>(&self, items: &[T], accessor: F) -> usize
    where
        F: Fn(&T, &KeyPath) -> String,
    {
        items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .count()
    }

    /// Returns `true` if any item matches.
    pub fn any<T, F>(&self, items: &[T], accessor: F) -> bool
    where
        F: Fn(&T, &KeyPath) -> String,
    {
        items.iter().any(|item| self.matches(item, &accessor))
    }

    /// Finds the first matching item and returns its index.
    pub fn position<T, F>(&self, items: &[T], accessor: F) -> Option<usize>
    where
        F: Fn(&T, &KeyPath) -> String,
    {
        items.iter().position(|item| self.matches(item, &accessor))
    }
}
