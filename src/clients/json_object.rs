//! Read-only structured views over decoded JSON.
//!
//! Every JSON object in a response body is converted into a [`JsonObject`]
//! while decoding, at any nesting depth. A `JsonObject` exposes its fields
//! only through accessor methods; it has no API to insert, replace or remove
//! a field, so it cannot change after construction.
//!
//! ```rust,compile_fail
//! use rekognize::JsonObject;
//!
//! let mut object = JsonObject::from_json(serde_json::json!({"a": 1})).unwrap();
//! object.insert("b", 2); // no mutation entry point exists
//! ```
//!
//! ```rust,compile_fail
//! use rekognize::JsonObject;
//!
//! let mut object = JsonObject::from_json(serde_json::json!({"a": 1})).unwrap();
//! object["a"] = 2.into(); // IndexMut is not implemented
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use thiserror::Error;

/// Errors returned by [`JsonObject`] accessors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// The field does not exist.
    #[error("{kind} has no property named {name}.")]
    Missing {
        /// The kind of object that was read.
        kind: &'static str,
        /// The field that was requested.
        name: String,
    },

    /// The field exists but holds a different kind of value.
    #[error("Property {name} is not {expected}.")]
    WrongType {
        /// The field that was requested.
        name: String,
        /// The kind of value the caller asked for.
        expected: &'static str,
    },

    /// The object could not be converted into the requested type.
    #[error("Unable to deserialize JsonObject: {0}")]
    Deserialize(String),
}

/// A decoded JSON value whose objects are [`JsonObject`]s.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
    /// JSON `null`.
    Null,
    /// A JSON boolean.
    Bool(bool),
    /// A JSON number.
    Number(Number),
    /// A JSON string.
    String(String),
    /// A JSON array.
    Array(Vec<JsonValue>),
    /// A JSON object.
    Object(JsonObject),
}

impl JsonValue {
    /// Returns the string, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer, if this is a number representable as `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Returns the float, if this is a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Returns the boolean, if this is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the object, if this is an object.
    #[must_use]
    pub const fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the elements, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns `true` if this is `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Converts back into a plain `serde_json::Value`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.clone()),
            Self::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Object(object) => object.to_json(),
        }
    }
}

/// Wraps every JSON object into a [`JsonObject`], recursively.
impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Object(JsonObject::from_map(map)),
        }
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl PartialEq<i64> for JsonValue {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl PartialEq<&str> for JsonValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<bool> for JsonValue {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

/// An immutable, field-addressable JSON object.
///
/// Clones share the same underlying fields.
///
/// # Example
///
/// ```rust
/// use rekognize::{JsonObject, PropertyError};
///
/// let user = JsonObject::from_json(serde_json::json!({
///     "id": 1,
///     "status": {"text": "hello"}
/// }))
/// .unwrap();
///
/// assert_eq!(user.get_i64("id").unwrap(), 1);
/// assert_eq!(user.get_object("status").unwrap().get_str("text").unwrap(), "hello");
/// assert!(matches!(user.get("name"), Err(PropertyError::Missing { .. })));
/// ```
#[derive(Clone, PartialEq)]
pub struct JsonObject {
    fields: Arc<IndexMap<String, JsonValue>>,
}

impl JsonObject {
    const KIND: &'static str = "JsonObject";

    fn from_map(map: serde_json::Map<String, Value>) -> Self {
        let fields = map
            .into_iter()
            .map(|(key, value)| (key, JsonValue::from(value)))
            .collect();
        Self {
            fields: Arc::new(fields),
        }
    }

    /// Builds an object from a JSON value, returning `None` unless it is an object.
    #[must_use]
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self::from_map(map)),
            _ => None,
        }
    }

    /// Returns the field named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::Missing`] if the field does not exist.
    pub fn get(&self, name: &str) -> Result<&JsonValue, PropertyError> {
        self.fields.get(name).ok_or_else(|| PropertyError::Missing {
            kind: Self::KIND,
            name: name.to_string(),
        })
    }

    /// Returns a string field.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the field is missing or not a string.
    pub fn get_str(&self, name: &str) -> Result<&str, PropertyError> {
        self.get(name)?
            .as_str()
            .ok_or_else(|| wrong_type(name, "a string"))
    }

    /// Returns an integer field.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the field is missing or not an integer.
    pub fn get_i64(&self, name: &str) -> Result<i64, PropertyError> {
        self.get(name)?
            .as_i64()
            .ok_or_else(|| wrong_type(name, "an integer"))
    }

    /// Returns a boolean field.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the field is missing or not a boolean.
    pub fn get_bool(&self, name: &str) -> Result<bool, PropertyError> {
        self.get(name)?
            .as_bool()
            .ok_or_else(|| wrong_type(name, "a boolean"))
    }

    /// Returns a nested object field.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the field is missing or not an object.
    pub fn get_object(&self, name: &str) -> Result<&Self, PropertyError> {
        self.get(name)?
            .as_object()
            .ok_or_else(|| wrong_type(name, "an object"))
    }

    /// Returns an array field.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the field is missing or not an array.
    pub fn get_array(&self, name: &str) -> Result<&[JsonValue], PropertyError> {
        self.get(name)?
            .as_array()
            .ok_or_else(|| wrong_type(name, "an array"))
    }

    /// Returns `true` if the field exists.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterates over field names in the order the service sent them.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates over fields in the order the service sent them.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the object has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts back into a plain `serde_json::Value`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }

    /// Deserializes the object into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::Deserialize`] if the fields do not match `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, PropertyError> {
        serde_json::from_value(self.to_json()).map_err(|e| PropertyError::Deserialize(e.to_string()))
    }
}

fn wrong_type(name: &str, expected: &'static str) -> PropertyError {
    PropertyError::WrongType {
        name: name.to_string(),
        expected,
    }
}

impl fmt::Debug for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: {}>", Self::KIND, self.to_json())
    }
}

// Verify JsonObject is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<JsonObject>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reading_present_field() {
        let object = JsonObject::from_json(json!({"a": 1})).unwrap();
        assert_eq!(object.get("a").unwrap(), &1_i64);
        assert_eq!(object.get_i64("a").unwrap(), 1);
    }

    #[test]
    fn test_reading_absent_field_names_kind_and_key() {
        let object = JsonObject::from_json(json!({"a": 1})).unwrap();
        let error = object.get("b").unwrap_err();

        assert_eq!(
            error,
            PropertyError::Missing {
                kind: "JsonObject",
                name: "b".to_string()
            }
        );
        assert_eq!(error.to_string(), "JsonObject has no property named b.");
    }

    #[test]
    fn test_nested_objects_are_wrapped() {
        let object = JsonObject::from_json(json!({
            "user": {"entities": {"url": {"urls": [{"expanded_url": "https://x"}]}}}
        }))
        .unwrap();

        let urls = object
            .get_object("user")
            .and_then(|u| u.get_object("entities"))
            .and_then(|e| e.get_object("url"))
            .and_then(|u| u.get_array("urls"))
            .unwrap();

        let first = urls[0].as_object().unwrap();
        assert_eq!(first.get_str("expanded_url").unwrap(), "https://x");
    }

    #[test]
    fn test_typed_getters_report_wrong_type() {
        let object = JsonObject::from_json(json!({"name": "x"})).unwrap();
        assert!(matches!(
            object.get_i64("name"),
            Err(PropertyError::WrongType { expected: "an integer", .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert!(JsonObject::from_json(json!([1, 2])).is_none());
        assert!(JsonObject::from_json(json!("x")).is_none());
    }

    #[test]
    fn test_deserialize_from_json_text() {
        let value: JsonValue = serde_json::from_str(r#"{"a": {"b": [true, null]}}"#).unwrap();
        let object = value.as_object().unwrap();
        let inner = object.get_object("a").unwrap();

        assert_eq!(inner.get_array("b").unwrap()[0], true);
        assert!(inner.get_array("b").unwrap()[1].is_null());
    }

    #[test]
    fn test_deserialize_into_typed_struct() {
        #[derive(serde::Deserialize)]
        struct User {
            id: u64,
            screen_name: String,
        }

        let object = JsonObject::from_json(json!({"id": 7, "screen_name": "rekognize"})).unwrap();
        let user: User = object.deserialize().unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.screen_name, "rekognize");
    }

    #[test]
    fn test_clone_shares_fields() {
        let object = JsonObject::from_json(json!({"a": 1})).unwrap();
        let clone = object.clone();
        assert_eq!(clone, object);
        assert!(Arc::ptr_eq(&clone.fields, &object.fields));
    }

    #[test]
    fn test_debug_format() {
        let object = JsonObject::from_json(json!({"a": 1})).unwrap();
        assert_eq!(format!("{object:?}"), r#"<JsonObject: {"a":1}>"#);
    }

    #[test]
    fn test_fields_keep_response_order() {
        let value: JsonValue =
            serde_json::from_str(r#"{"screen_name": "x", "id": 1, "created_at": "now"}"#).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(
            object.keys().collect::<Vec<_>>(),
            vec!["screen_name", "id", "created_at"]
        );
        assert_eq!(
            format!("{object:?}"),
            r#"<JsonObject: {"screen_name":"x","id":1,"created_at":"now"}>"#
        );
    }

    #[test]
    fn test_round_trip_to_json_preserves_content() {
        let original = json!({"a": [1, {"b": "c"}], "d": null});
        let object = JsonObject::from_json(original.clone()).unwrap();
        assert_eq!(object.to_json(), original);
    }
}
