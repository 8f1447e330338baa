//! The [`Resolvable`] trait for typed record access.
//!
//! Loosely typed records (`serde_json::Value`) are walked dynamically. Typed
//! records implement [`Resolvable`], usually through `#[derive(Resolvable)]`
//! from `roster-macros`, so a key path dispatches to a field without any
//! runtime type inspection.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::path::{lookup_segments, KeyPath};
use crate::value::{classify, Resolved};

/// Trait for records whose fields can be addressed by key path.
///
/// # Derive Usage
///
/// ```ignore
/// use roster_macros::Resolvable;
/// use roster_seeker::{KeyPath, Resolvable};
///
/// #[derive(Resolvable)]
/// struct Student {
///     first_name: String,
///     #[view(rename = "year")]
///     study_year: u8,
///     #[view(skip)]
///     password_hash: String,
/// }
///
/// let s = Student { first_name: "Ada".into(), study_year: 2, password_hash: "x".into() };
/// assert_eq!(s.resolve(&KeyPath::new(Student::YEAR)), "2");
/// ```
///
/// # Manual Implementation
///
/// ```
/// use roster_seeker::{KeyPath, Resolvable, Resolved};
///
/// struct Course {
///     code: String,
///     credits: u8,
/// }
///
/// impl Resolvable for Course {
///     fn resolve_segments(&self, segments: &[&str]) -> Resolved {
///         match segments.split_first() {
///             None => Resolved::PlainObject(vec![self.code.clone(), self.credits.to_string()]),
///             Some((&"code", rest)) => self.code.resolve_segments(rest),
///             Some((&"credits", rest)) => self.credits.resolve_segments(rest),
///             Some(_) => Resolved::Missing,
///         }
///     }
/// }
///
/// let c = Course { code: "MAT101".into(), credits: 6 };
/// assert_eq!(c.resolve(&KeyPath::new("code")), "MAT101");
/// assert_eq!(c.resolve(&KeyPath::new("")), "");
/// assert_eq!(c.resolve(&KeyPath::new("credits.more")), "");
/// ```
pub trait Resolvable {
    /// Resolves the remaining path `segments` against this value.
    ///
    /// An empty slice means "this value itself".
    fn resolve_segments(&self, segments: &[&str]) -> Resolved;

    /// Resolves a full key path into its [`Resolved`] shape.
    fn resolve_path(&self, path: &KeyPath) -> Resolved {
        self.resolve_segments(&path.to_segments())
    }

    /// Resolves a full key path into a single string.
    fn resolve(&self, path: &KeyPath) -> String {
        self.resolve_path(path).into_text()
    }

    /// Accessor function suitable for [`Query::apply`](crate::Query::apply).
    fn accessor(item: &Self, path: &KeyPath) -> String
    where
        Self: Sized,
    {
        item.resolve(path)
    }
}

impl Resolvable for Value {
    fn resolve_segments(&self, segments: &[&str]) -> Resolved {
        lookup_segments(self, segments)
            .map(classify)
            .unwrap_or(Resolved::Missing)
    }
}

/// Leaf values resolve to themselves; any deeper segment is missing.
macro_rules! impl_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Resolvable for $ty {
                fn resolve_segments(&self, segments: &[&str]) -> Resolved {
                    if segments.is_empty() {
                        Resolved::primitive(self)
                    } else {
                        Resolved::Missing
                    }
                }
            }
        )*
    };
}

impl_leaf!(
    String, str, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl<T: Resolvable + ?Sized> Resolvable for &T {
    fn resolve_segments(&self, segments: &[&str]) -> Resolved {
        (**self).resolve_segments(segments)
    }
}

impl<T: Resolvable + ?Sized> Resolvable for Box<T> {
    fn resolve_segments(&self, segments: &[&str]) -> Resolved {
        (**self).resolve_segments(segments)
    }
}

impl<T: Resolvable> Resolvable for Option<T> {
    fn resolve_segments(&self, segments: &[&str]) -> Resolved {
        match self {
            Some(value) => value.resolve_segments(segments),
            None => Resolved::Missing,
        }
    }
}

impl<T: Resolvable> Resolvable for [T] {
    fn resolve_segments(&self, segments: &[&str]) -> Resolved {
        match segments.split_first() {
            None => Resolved::from_elements(self.iter().map(|item| item.resolve_segments(&[]))),
            Some((index, rest)) => index
                .parse::<usize>()
                .ok()
                .and_then(|i| self.get(i))
                .map(|item| item.resolve_segments(rest))
                .unwrap_or(Resolved::Missing),
        }
    }
}

impl<T: Resolvable> Resolvable for Vec<T> {
    fn resolve_segments(&self, segments: &[&str]) -> Resolved {
        self.as_slice().resolve_segments(segments)
    }
}

fn resolve_map<'a, V, I>(entries: I, get: impl Fn(&str) -> Option<&'a V>, segments: &[&str]) -> Resolved
where
    V: Resolvable + 'a,
    I: Iterator<Item = &'a V>,
{
    match segments.split_first() {
        None => Resolved::PlainObject(entries.map(|v| v.resolve_segments(&[]).into_text()).collect()),
        Some((key, rest)) => get(*key)
            .map(|v| v.resolve_segments(rest))
            .unwrap_or(Resolved::Missing),
    }
}

impl<V: Resolvable> Resolvable for BTreeMap<String, V> {
    fn resolve_segments(&self, segments: &[&str]) -> Resolved {
        resolve_map(self.values(), |k| self.get(k), segments)
    }
}

impl<V: Resolvable> Resolvable for HashMap<String, V> {
    fn resolve_segments(&self, segments: &[&str]) -> Resolved {
        resolve_map(self.values(), |k| self.get(k), segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Guardian {
        first_name: String,
        last_name: String,
    }

    impl Resolvable for Guardian {
        fn resolve_segments(&self, segments: &[&str]) -> Resolved {
            match segments.split_first() {
                None => Resolved::PlainObject(vec![
                    self.first_name.clone(),
                    self.last_name.clone(),
                ]),
                Some((&"first_name", rest)) => self.first_name.resolve_segments(rest),
                Some((&"last_name", rest)) => self.last_name.resolve_segments(rest),
                Some(_) => Resolved::Missing,
            }
        }
    }

    struct Student {
        name: String,
        age: Option<u8>,
        roles: Vec<String>,
        guardians: Vec<Guardian>,
    }

    impl Resolvable for Student {
        fn resolve_segments(&self, segments: &[&str]) -> Resolved {
            match segments.split_first() {
                None => Resolved::Missing,
                Some((&"name", rest)) => self.name.resolve_segments(rest),
                Some((&"age", rest)) => self.age.resolve_segments(rest),
                Some((&"roles", rest)) => self.roles.resolve_segments(rest),
                Some((&"guardians", rest)) => self.guardians.resolve_segments(rest),
                Some(_) => Resolved::Missing,
            }
        }
    }

    fn student() -> Student {
        Student {
            name: "Bob".into(),
            age: None,
            roles: vec!["STUDENT".into(), "TUTOR".into()],
            guardians: vec![
                Guardian {
                    first_name: "Ann".into(),
                    last_name: "Smith".into(),
                },
                Guardian {
                    first_name: "Joe".into(),
                    last_name: "Smith".into(),
                },
            ],
        }
    }

    #[test]
    fn typed_leaf_fields() {
        let s = student();
        assert_eq!(s.resolve(&"name".into()), "Bob");
        assert_eq!(s.resolve(&"age".into()), "");
        assert_eq!(s.resolve(&"name.deeper".into()), "");
    }

    #[test]
    fn typed_arrays_follow_json_rules() {
        let s = student();
        assert_eq!(s.resolve(&"roles".into()), "STUDENT, TUTOR");
        assert_eq!(s.resolve(&"guardians".into()), "Ann Smith | Joe Smith");
        assert_eq!(s.resolve(&"guardians.1.first_name".into()), "Joe");
        assert_eq!(s.resolve(&"guardians.7.first_name".into()), "");
    }

    #[test]
    fn typed_nested_arrays_join_like_objects() {
        let grid: Vec<Vec<&str>> = vec![vec!["x", "y"], vec!["w"]];
        assert_eq!(grid.resolve_segments(&[]).into_text(), "x y | w");
        assert_eq!(grid.resolve(&"0".into()), "x, y");

        let row = json!({"tags": [["x", "y"], ["w"]]});
        assert_eq!(row.resolve(&"tags".into()), "x y | w");
    }

    #[test]
    fn json_value_impl_matches_free_function() {
        let row = json!({"a": {"b": [1, 2]}});
        let path = KeyPath::new("a.b");
        assert_eq!(row.resolve(&path), crate::resolve(&row, &path));
        assert_eq!(row.resolve(&path), "1, 2");
    }

    #[test]
    fn maps_resolve_by_key() {
        let mut map = BTreeMap::new();
        map.insert("x".to_string(), 1u32);
        map.insert("y".to_string(), 2u32);
        assert_eq!(map.resolve(&"y".into()), "2");
        assert_eq!(map.resolve(&"z".into()), "");

        let mut hash = HashMap::new();
        hash.insert("only".to_string(), "value".to_string());
        assert_eq!(hash.resolve(&"only".into()), "value");
    }

    #[test]
    fn references_and_boxes_delegate() {
        let boxed: Box<String> = Box::new("boxed".into());
        assert_eq!(boxed.resolve_segments(&[]).into_text(), "boxed");
        assert_eq!(boxed.resolve(&KeyPath::default()), "");
        let s = "borrowed";
        assert_eq!((&s).resolve_segments(&[]), Resolved::Primitive("borrowed".into()));
    }

    #[test]
    fn accessor_fn_pointer() {
        let s = student();
        assert_eq!(Student::accessor(&s, &"name".into()), "Bob");
    }
}
