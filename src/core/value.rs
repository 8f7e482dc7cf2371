//! Purpose: Define the owned JSON value model and its narrowing predicates.
//! Exports: `JsonValue`, `JsonObject`, `JsonArray`, `JsonKind`, `is_object`, `is_array`.
//! Role: The single in-memory representation produced by decoding and consumed by encoding.
//! Invariants: Numbers are always `f64`; integer and fractional literals are not distinguished.
//! Invariants: Object keys are unique and keep insertion order; equality ignores that order.
//! Invariants: `is_object` and `is_array` are exclusive and cover every composite value.

use indexmap::IndexMap;
use std::fmt;

pub type JsonObject = IndexMap<String, JsonValue>;
pub type JsonArray = Vec<JsonValue>;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum JsonValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Object(JsonObject),
    Array(JsonArray),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Object,
    Array,
}

impl JsonKind {
    pub fn name(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Object => "object",
            JsonKind::Array => "array",
        }
    }

    pub fn is_composite(self) -> bool {
        matches!(self, JsonKind::Object | JsonKind::Array)
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns `true` when `value` is a JSON object (never for `null` or arrays).
pub fn is_object(value: &JsonValue) -> bool {
    matches!(value, JsonValue::Object(_))
}

/// Returns `true` when `value` is a JSON array.
pub fn is_array(value: &JsonValue) -> bool {
    matches!(value, JsonValue::Array(_))
}

impl JsonValue {
    pub fn kind(&self) -> JsonKind {
        match self {
            JsonValue::Null => JsonKind::Null,
            JsonValue::Bool(_) => JsonKind::Bool,
            JsonValue::Number(_) => JsonKind::Number,
            JsonValue::String(_) => JsonKind::String,
            JsonValue::Object(_) => JsonKind::Object,
            JsonValue::Array(_) => JsonKind::Array,
        }
    }

    pub fn is_object(&self) -> bool {
        is_object(self)
    }

    pub fn is_array(&self) -> bool {
        is_array(self)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut JsonObject> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut JsonArray> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(num) => Some(*num),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(val) => Some(*val),
            _ => None,
        }
    }

    /// Looks up `key` when `self` is an object; `None` for every other kind.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Number(value)
    }
}

impl From<f32> for JsonValue {
    fn from(value: f32) -> Self {
        JsonValue::Number(f64::from(value))
    }
}

macro_rules! from_lossless_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for JsonValue {
                fn from(value: $ty) -> Self {
                    JsonValue::Number(f64::from(value))
                }
            }
        )*
    };
}

from_lossless_int!(i8, i16, i32, u8, u16, u32);

// Values beyond 2^53 round to the nearest representable f64.
macro_rules! from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for JsonValue {
                #[allow(clippy::cast_precision_loss)]
                fn from(value: $ty) -> Self {
                    JsonValue::Number(value as f64)
                }
            }
        )*
    };
}

from_wide_int!(i64, u64, isize, usize);

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(value: JsonObject) -> Self {
        JsonValue::Object(value)
    }
}

impl<T: Into<JsonValue>> From<Vec<T>> for JsonValue {
    fn from(value: Vec<T>) -> Self {
        JsonValue::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(JsonValue::Null, Into::into)
    }
}

impl<T: Into<JsonValue>> FromIterator<T> for JsonValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        JsonValue::Array(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonKind, JsonObject, JsonValue, is_array, is_object};

    fn object(entries: &[(&str, JsonValue)]) -> JsonObject {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    fn samples() -> Vec<JsonValue> {
        let object = object(&[("a", JsonValue::from(1))]);
        vec![
            JsonValue::Null,
            JsonValue::from(true),
            JsonValue::from(false),
            JsonValue::from(0),
            JsonValue::from(-2.5),
            JsonValue::from("x"),
            JsonValue::from(""),
            JsonValue::Object(object),
            JsonValue::Object(JsonObject::new()),
            JsonValue::from(vec![1, 2]),
            JsonValue::Array(Vec::new()),
        ]
    }

    #[test]
    fn predicates_are_exclusive_over_composites() {
        for value in samples() {
            let composite = value.kind().is_composite();
            if composite {
                assert!(
                    is_object(&value) ^ is_array(&value),
                    "exactly one predicate should hold for {value:?}"
                );
            } else {
                assert!(!is_object(&value), "scalar reported as object: {value:?}");
                assert!(!is_array(&value), "scalar reported as array: {value:?}");
            }
        }
    }

    #[test]
    fn arrays_are_not_objects() {
        let value = JsonValue::from(vec![1, 2]);
        assert!(!value.is_object());
        assert!(value.is_array());
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert!(value.as_object().is_none());
    }

    #[test]
    fn null_satisfies_neither_predicate() {
        assert!(!is_object(&JsonValue::Null));
        assert!(!is_array(&JsonValue::Null));
        assert!(JsonValue::default().is_null());
    }

    #[test]
    fn object_equality_ignores_insertion_order() {
        let left = object(&[("a", JsonValue::from(1)), ("b", JsonValue::from(2))]);
        let right = object(&[("b", JsonValue::from(2)), ("a", JsonValue::from(1))]);
        assert_eq!(JsonValue::Object(left), JsonValue::Object(right));
    }

    #[test]
    fn get_only_reads_objects() {
        let value = JsonValue::Object(object(&[("k", JsonValue::from("v"))]));
        assert_eq!(value.get("k").and_then(JsonValue::as_str), Some("v"));
        assert_eq!(value.get("missing"), None);
        assert_eq!(JsonValue::from(vec!["k"]).get("k"), None);
    }

    #[test]
    fn option_and_integer_conversions() {
        assert_eq!(JsonValue::from(None::<i32>), JsonValue::Null);
        assert_eq!(JsonValue::from(Some(7u8)), JsonValue::Number(7.0));
        assert_eq!(JsonValue::from(u64::MAX).as_f64(), Some(2f64.powi(64)));
        assert_eq!(JsonValue::from(3usize).kind(), JsonKind::Number);
    }

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(JsonKind::Bool.to_string(), "boolean");
        assert_eq!(JsonKind::Object.name(), "object");
        assert!(JsonKind::Array.is_composite());
        assert!(!JsonKind::Null.is_composite());
    }

    #[test]
    fn mutable_narrowing_edits_in_place() {
        let mut value = JsonValue::Object(JsonObject::new());
        if let Some(map) = value.as_object_mut() {
            map.insert("n".to_string(), JsonValue::from(1));
        }
        assert_eq!(value.get("n"), Some(&JsonValue::Number(1.0)));
    }
}
