//! Dot-separated key paths and dynamic resolution over JSON records.
//!
//! A [`KeyPath`] such as `enrollment.student.first_name` addresses a field
//! of a possibly nested record. Resolution never fails: a path that runs into
//! a missing segment or a null resolves to the empty string.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::{classify, Resolved};

/// Separator between key path segments.
pub const SEGMENT_SEP: char = '.';

/// A dot-separated path to a (possibly nested) record field.
///
/// ```
/// use roster_seeker::KeyPath;
///
/// let path = KeyPath::new("enrollment.first_name");
/// assert_eq!(path.segments().collect::<Vec<_>>(), vec!["enrollment", "first_name"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyPath(String);

impl KeyPath {
    /// Creates a key path from its dotted form.
    pub fn new(path: impl Into<String>) -> Self {
        KeyPath(path.into())
    }

    /// Returns the dotted form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEGMENT_SEP)
    }

    /// Collects the path segments.
    pub fn to_segments(&self) -> Vec<&str> {
        self.segments().collect()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeyPath {
    fn from(s: &str) -> Self {
        KeyPath::new(s)
    }
}

impl From<String> for KeyPath {
    fn from(s: String) -> Self {
        KeyPath(s)
    }
}

impl From<&String> for KeyPath {
    fn from(s: &String) -> Self {
        KeyPath(s.clone())
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}

impl AsRef<str> for KeyPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Walks `segments` into a JSON value.
///
/// Objects are indexed by key, arrays by numeric segment. Anything else,
/// including null, ends the walk with `None`.
pub fn lookup_segments<'a>(record: &'a Value, segments: &[&str]) -> Option<&'a Value> {
    let mut current = record;
    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(*segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Looks up the JSON value at `path`, if any.
pub fn lookup<'a>(record: &'a Value, path: &KeyPath) -> Option<&'a Value> {
    lookup_segments(record, &path.to_segments())
}

/// Resolves `path` against a JSON record into its [`Resolved`] shape.
pub fn resolve_value(record: &Value, path: &KeyPath) -> Resolved {
    match lookup(record, path) {
        Some(value) => classify(value),
        None => {
            log::trace!("key path '{}' did not resolve", path);
            Resolved::Missing
        }
    }
}

/// Resolves `path` against a JSON record into a single string.
///
/// ```
/// use roster_seeker::{resolve, KeyPath};
/// use serde_json::json;
///
/// let row = json!({
///     "enrollment": {"first_name": "Ada"},
///     "roles": ["ADMIN", "TEACHER"],
/// });
/// assert_eq!(resolve(&row, &KeyPath::new("enrollment.first_name")), "Ada");
/// assert_eq!(resolve(&row, &KeyPath::new("roles")), "ADMIN, TEACHER");
/// assert_eq!(resolve(&row, &KeyPath::new("enrollment.missing.deeper")), "");
/// ```
pub fn resolve(record: &Value, path: &KeyPath) -> String {
    resolve_value(record, path).into_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "name": "Alice",
            "role": "ADMIN",
            "enrollment": {
                "first_name": "Alice",
                "program": {"code": "CS", "year": 2}
            },
            "badges": ["honors", "athlete"],
            "courses": [
                {"code": "MAT101", "grade": "A"},
                {"code": "PHY201", "grade": "B+"}
            ],
            "advisor": null
        })
    }

    #[test]
    fn flat_field() {
        assert_eq!(resolve(&sample(), &"name".into()), "Alice");
    }

    #[test]
    fn nested_field() {
        assert_eq!(resolve(&sample(), &"enrollment.first_name".into()), "Alice");
        assert_eq!(resolve(&sample(), &"enrollment.program.year".into()), "2");
    }

    #[test]
    fn nested_object_leaf() {
        assert_eq!(resolve(&sample(), &"enrollment.program".into()), "CS 2");
    }

    #[test]
    fn array_fields() {
        assert_eq!(resolve(&sample(), &"badges".into()), "honors, athlete");
        assert_eq!(
            resolve(&sample(), &"courses".into()),
            "MAT101 A | PHY201 B+"
        );
    }

    #[test]
    fn array_index_segment() {
        assert_eq!(resolve(&sample(), &"courses.1.code".into()), "PHY201");
        assert_eq!(resolve(&sample(), &"badges.0".into()), "honors");
        assert_eq!(resolve(&sample(), &"badges.9".into()), "");
        assert_eq!(resolve(&sample(), &"badges.x".into()), "");
    }

    #[test]
    fn missing_and_null_segments() {
        assert_eq!(resolve(&sample(), &"nope".into()), "");
        assert_eq!(resolve(&sample(), &"advisor".into()), "");
        assert_eq!(resolve(&sample(), &"advisor.name".into()), "");
        assert_eq!(resolve(&sample(), &"name.first".into()), "");
    }

    #[test]
    fn empty_and_odd_paths() {
        assert_eq!(resolve(&sample(), &"".into()), "");
        assert_eq!(resolve(&sample(), &"enrollment.".into()), "");
        assert_eq!(resolve(&sample(), &"..".into()), "");
    }

    #[test]
    fn non_object_record() {
        assert_eq!(resolve(&json!(null), &"a.b".into()), "");
        assert_eq!(resolve(&json!("text"), &"a".into()), "");
    }

    #[test]
    fn key_path_conversions() {
        let path: KeyPath = "a.b".into();
        assert_eq!(path.as_str(), "a.b");
        assert_eq!(path.to_string(), "a.b");
        assert_eq!(KeyPath::from(String::from("x")).to_segments(), vec!["x"]);
    }

    #[test]
    fn key_path_serde_is_transparent() {
        let path: KeyPath = serde_json::from_str("\"user.email\"").unwrap();
        assert_eq!(path, KeyPath::new("user.email"));
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"user.email\"");
    }
}
