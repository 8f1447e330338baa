//! Resolved field values.
//!
//! The [`Resolved`] enum is the shape a field takes once a key path has been
//! walked. Each variant has exactly one text conversion, so search, filters
//! and default cell display all agree on what a field "says".

use serde_json::Value;

/// Separator between elements of an array of primitives.
pub const PRIMITIVE_LIST_SEP: &str = ", ";

/// Separator between the own values of one object.
pub const OBJECT_VALUE_SEP: &str = " ";

/// Separator between elements of an array of objects.
pub const OBJECT_LIST_SEP: &str = " | ";

/// A field value after key path resolution.
///
/// # Example
///
/// ```
/// use roster_seeker::Resolved;
///
/// let roles = Resolved::ArrayOfPrimitive(vec!["ADMIN".into(), "TEACHER".into()]);
/// assert_eq!(roles.into_text(), "ADMIN, TEACHER");
///
/// let guardians = Resolved::ArrayOfObject(vec![
///     vec!["Marie".into(), "Curie".into()],
///     vec!["Pierre".into(), "Curie".into()],
/// ]);
/// assert_eq!(guardians.into_text(), "Marie Curie | Pierre Curie");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Resolved {
    /// Path did not lead anywhere, or led to null.
    #[default]
    Missing,
    /// String, number, boolean or char, already in display form.
    Primitive(String),
    /// Array whose elements are all primitives.
    ArrayOfPrimitive(Vec<String>),
    /// Array containing at least one object or nested array; each entry holds
    /// the own values of one element.
    ArrayOfObject(Vec<Vec<String>>),
    /// A single object, as its own values in declaration order.
    PlainObject(Vec<String>),
}

impl Resolved {
    /// Creates a primitive from anything displayable.
    pub fn primitive(value: impl ToString) -> Self {
        Resolved::Primitive(value.to_string())
    }

    /// Returns `true` if the path did not resolve.
    pub fn is_missing(&self) -> bool {
        matches!(self, Resolved::Missing)
    }

    /// Returns `true` for variants that represent an object.
    ///
    /// Arrays count as objects: inside another array they contribute their
    /// own values rather than a single primitive.
    pub fn is_object(&self) -> bool {
        matches!(
            self,
            Resolved::PlainObject(_) | Resolved::ArrayOfPrimitive(_) | Resolved::ArrayOfObject(_)
        )
    }

    /// Converts the value to its canonical text form.
    pub fn into_text(self) -> String {
        match self {
            Resolved::Missing => String::new(),
            Resolved::Primitive(s) => s,
            Resolved::ArrayOfPrimitive(items) => items.join(PRIMITIVE_LIST_SEP),
            Resolved::ArrayOfObject(items) => items
                .iter()
                .map(|values| values.join(OBJECT_VALUE_SEP))
                .collect::<Vec<_>>()
                .join(OBJECT_LIST_SEP),
            Resolved::PlainObject(values) => values.join(OBJECT_VALUE_SEP),
        }
    }

    /// Text form without consuming the value.
    pub fn to_text(&self) -> String {
        self.clone().into_text()
    }

    /// Flattens this value into the "own values" of an array element.
    ///
    /// Used when the value sits inside an array that contains objects.
    pub fn into_element_values(self) -> Vec<String> {
        match self {
            Resolved::PlainObject(values) | Resolved::ArrayOfPrimitive(values) => values,
            Resolved::ArrayOfObject(items) => items
                .into_iter()
                .map(|values| values.join(OBJECT_VALUE_SEP))
                .collect(),
            other => vec![other.into_text()],
        }
    }

    /// Builds an array value from already-resolved elements.
    ///
    /// The array is an [`ArrayOfPrimitive`](Resolved::ArrayOfPrimitive) when
    /// every element is a primitive (or missing), and an
    /// [`ArrayOfObject`](Resolved::ArrayOfObject) otherwise.
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Resolved>,
    {
        let elements: Vec<Resolved> = elements.into_iter().collect();
        if elements.iter().any(Resolved::is_object) {
            Resolved::ArrayOfObject(
                elements
                    .into_iter()
                    .map(Resolved::into_element_values)
                    .collect(),
            )
        } else {
            Resolved::ArrayOfPrimitive(elements.into_iter().map(Resolved::into_text).collect())
        }
    }
}

impl From<Resolved> for String {
    fn from(value: Resolved) -> Self {
        value.into_text()
    }
}

/// Classifies a JSON value into its [`Resolved`] shape.
///
/// Nested values inside objects are flattened with the same rules, so an
/// object holding another object contributes that object's own values.
///
/// ```
/// use roster_seeker::{classify, Resolved};
/// use serde_json::json;
///
/// assert_eq!(classify(&json!(null)), Resolved::Missing);
/// assert_eq!(classify(&json!(42)), Resolved::Primitive("42".into()));
/// assert_eq!(
///     classify(&json!({"first": "Ada", "last": "Lovelace"})).into_text(),
///     "Ada Lovelace"
/// );
/// ```
pub fn classify(value: &Value) -> Resolved {
    match value {
        Value::Null => Resolved::Missing,
        Value::Bool(b) => Resolved::primitive(b),
        Value::Number(n) => Resolved::primitive(n),
        Value::String(s) => Resolved::Primitive(s.clone()),
        Value::Array(items) => Resolved::from_elements(items.iter().map(classify)),
        Value::Object(map) => {
            Resolved::PlainObject(map.values().map(|v| classify(v).into_text()).collect())
        }
    }
}
