//! Per-verb attribute whitelists.
//!
//! Some Zendesk fields can be set on create but not on update (or the other
//! way around). A [`Whitelist`] declares, per HTTP verb, which attribute keys
//! may appear in an outgoing write body. Verbs without a declaration send
//! every attribute.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::clients::HttpMethod;

/// Attribute keys permitted in write bodies, per HTTP verb.
///
/// # Example
///
/// ```rust
/// use zendesk_api::rest::Whitelist;
/// use zendesk_api::HttpMethod;
/// use serde_json::json;
///
/// let whitelist = Whitelist::new()
///     .allow(HttpMethod::Post, &["subject", "comment"])
///     .allow(HttpMethod::Put, &["status"]);
///
/// let attributes = json!({"subject": "Help", "status": "open", "id": 1});
/// let attributes = attributes.as_object().unwrap();
///
/// assert_eq!(
///     Value::Object(whitelist.filter(attributes, HttpMethod::Post)),
///     json!({"subject": "Help"})
/// );
/// # use serde_json::Value;
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Whitelist {
    allowed: HashMap<HttpMethod, Vec<String>>,
}

impl Whitelist {
    /// Creates a whitelist that declares nothing, letting every key through.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Permits `keys` for `method`, adding to any earlier declaration.
    #[must_use]
    pub fn allow(mut self, method: HttpMethod, keys: &[&str]) -> Self {
        let allowed = self.allowed.entry(method).or_default();
        for key in keys {
            if !allowed.iter().any(|k| k == key) {
                allowed.push((*key).to_string());
            }
        }
        self
    }

    /// Returns the keys declared for `method`, if any.
    #[must_use]
    pub fn allowed(&self, method: HttpMethod) -> Option<&[String]> {
        self.allowed.get(&method).map(Vec::as_slice)
    }

    /// Returns `true` if `key` may be sent with `method`.
    #[must_use]
    pub fn permits(&self, method: HttpMethod, key: &str) -> bool {
        self.allowed(method)
            .map_or(true, |keys| keys.iter().any(|k| k == key))
    }

    /// Filters `attributes` down to the keys permitted for `method`.
    ///
    /// The source map is left untouched; key order is preserved.
    #[must_use]
    pub fn filter(&self, attributes: &Map<String, Value>, method: HttpMethod) -> Map<String, Value> {
        attributes
            .iter()
            .filter(|(key, _)| self.permits(method, key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attributes() -> Map<String, Value> {
        json!({"subject": "Help", "status": "open", "requester_id": 5})
            .as_object()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_undeclared_verb_passes_everything() {
        let whitelist = Whitelist::new().allow(HttpMethod::Post, &["subject"]);
        assert_eq!(whitelist.filter(&attributes(), HttpMethod::Put), attributes());
        assert!(whitelist.allowed(HttpMethod::Put).is_none());
    }

    #[test]
    fn test_declared_verb_filters() {
        let whitelist = Whitelist::new()
            .allow(HttpMethod::Post, &["subject", "requester_id"])
            .allow(HttpMethod::Put, &["status"]);

        let create = whitelist.filter(&attributes(), HttpMethod::Post);
        let keys: Vec<&str> = create.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["subject", "requester_id"]);

        let update = whitelist.filter(&attributes(), HttpMethod::Put);
        assert_eq!(Value::Object(update), json!({"status": "open"}));
    }

    #[test]
    fn test_empty_declaration_sends_nothing() {
        let whitelist = Whitelist::new().allow(HttpMethod::Put, &[]);
        assert!(whitelist.filter(&attributes(), HttpMethod::Put).is_empty());
    }

    #[test]
    fn test_allow_accumulates_without_duplicates() {
        let whitelist = Whitelist::new()
            .allow(HttpMethod::Post, &["subject"])
            .allow(HttpMethod::Post, &["subject", "status"]);

        assert_eq!(
            whitelist.allowed(HttpMethod::Post),
            Some(&["subject".to_string(), "status".to_string()][..])
        );
    }

    #[test]
    fn test_filter_does_not_mutate_source() {
        let source = attributes();
        let whitelist = Whitelist::new().allow(HttpMethod::Post, &["subject"]);
        let _ = whitelist.filter(&source, HttpMethod::Post);
        assert_eq!(source.len(), 3);
    }
}
