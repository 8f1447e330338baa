//! Clause types for query predicates.
//!
//! A [`Clause`] pairs a key path with a needle. It matches when the resolved
//! field contains the needle, ignoring case. Search and discrete filters both
//! use this one comparison, so "ADMIN" selected in a filter also matches a
//! source value of "admin" or "Admin, Teacher".

use serde::Serialize;

use crate::path::KeyPath;

/// A single case-insensitive substring predicate.
///
/// # Example
///
/// ```
/// use roster_seeker::Clause;
///
/// let clause = Clause::new("role", "admin");
/// assert!(clause.matches("ADMIN"));
/// assert!(clause.matches("Super-Admin"));
/// assert!(!clause.matches("STUDENT"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clause {
    /// The key path to resolve.
    pub field: KeyPath,
    /// The needle as given by the caller.
    pub value: String,
    #[serde(skip)]
    folded: String,
}

impl Clause {
    /// Creates a new clause.
    pub fn new(field: impl Into<KeyPath>, value: impl Into<String>) -> Self {
        let value = value.into();
        Clause {
            field: field.into(),
            folded: value.to_lowercase(),
            value,
        }
    }

    /// Returns `true` if the clause restricts anything.
    ///
    /// An empty needle matches every value and is treated as absent.
    pub fn is_active(&self) -> bool {
        !self.value.is_empty()
    }

    /// Evaluates this clause against a resolved field value.
    pub fn matches(&self, field_value: &str) -> bool {
        if self.folded.is_empty() {
            return true;
        }
        contains_folded(field_value, &self.folded)
    }
}

/// Case-insensitive containment where `needle` is already lowercased.
pub(crate) fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_ignoring_case() {
        let clause = Clause::new("name", "ALI");
        assert!(clause.matches("Alice"));
        assert!(clause.matches("Natalie"));
        assert!(!clause.matches("Bob"));
    }

    #[test]
    fn empty_needle_is_inactive_and_matches_all() {
        let clause = Clause::new("name", "");
        assert!(!clause.is_active());
        assert!(clause.matches(""));
        assert!(clause.matches("anything"));
    }

    #[test]
    fn empty_field_only_matches_empty_needle() {
        assert!(!Clause::new("name", "a").matches(""));
    }

    #[test]
    fn unicode_folding() {
        assert!(Clause::new("city", "ÉCOLE").matches("Grande école"));
    }

    #[test]
    fn keeps_original_value() {
        let clause = Clause::new("role", "ADMIN");
        assert_eq!(clause.value, "ADMIN");
        assert_eq!(clause.field, KeyPath::new("role"));
    }
}
