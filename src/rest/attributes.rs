//! The attribute store backing every resource.
//!
//! [`Attributes`] is an insertion-ordered JSON object. Nested objects stay
//! JSON objects, so a payload like `{"ticket": {"id": 1}}` can be inspected
//! with [`Attributes::nested`] without any conversion.
//!
//! # Deep Merge
//!
//! [`Attributes::deep_merge`] merges another JSON object in place:
//!
//! - scalar and array values from the incoming object overwrite existing ones
//! - nested objects are merged key by key instead of replaced wholesale
//! - keys absent from the incoming object are kept
//!
//! ```rust
//! use zendesk_api::rest::Attributes;
//! use serde_json::json;
//!
//! let mut attributes = Attributes::from(json!({
//!     "subject": "Help",
//!     "via": {"channel": "web", "source": {"rel": null}}
//! }));
//!
//! attributes.deep_merge(&json!({
//!     "id": 42,
//!     "via": {"source": {"rel": "follow_up"}}
//! }));
//!
//! assert_eq!(attributes.to_value(), json!({
//!     "subject": "Help",
//!     "via": {"channel": "web", "source": {"rel": "follow_up"}},
//!     "id": 42
//! }));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A mutable, insertion-ordered mapping of attribute names to JSON values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    /// Creates an empty attribute store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Returns `true` if `key` is present, even with a `null` value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Stores `value` under `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns the object stored under `key`, if that value is an object.
    #[must_use]
    pub fn nested(&self, key: &str) -> Option<&Map<String, Value>> {
        self.0.get(key).and_then(Value::as_object)
    }

    /// Returns the object stored under `key` mutably, if that value is an object.
    pub fn nested_mut(&mut self, key: &str) -> Option<&mut Map<String, Value>> {
        self.0.get_mut(key).and_then(Value::as_object_mut)
    }

    /// Deep-merges `other` into this store.
    ///
    /// Non-object values of `other` are ignored.
    pub fn deep_merge(&mut self, other: &Value) {
        if let Value::Object(source) = other {
            deep_merge_maps(&mut self.0, source);
        }
    }

    /// Returns a deep-merged copy, leaving `self` untouched.
    #[must_use]
    pub fn merged(&self, other: &Value) -> Self {
        let mut copy = self.clone();
        copy.deep_merge(other);
        copy
    }

    /// Returns the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Returns the store as a JSON object value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// Converts the store into a JSON object value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Returns the number of top-level attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the store has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over top-level attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

fn deep_merge_maps(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, incoming) in source {
        if let (Some(Value::Object(existing)), Value::Object(incoming)) =
            (target.get_mut(key), incoming)
        {
            deep_merge_maps(existing, incoming);
            continue;
        }
        target.insert(key.clone(), incoming.clone());
    }
}

impl From<Map<String, Value>> for Attributes {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Objects become the attribute map; any other value yields an empty store.
impl From<Value> for Attributes {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}
